//! Page controllers.
//!
//! Each controller owns its own state and attaches to existing markup:
//! - [`loading`] - Splash overlay fade-out
//! - [`cursor`] - Custom cursor follower
//! - [`navigation`] - Responsive navigation bar and menu
//! - [`slideshow`] - Hero slideshow with autoplay
//! - [`venues`] - Expandable venue list
//! - [`effects`] - Fade-in reveal and parallax
//! - [`smooth_scroll`] - Anchor and call-to-action scrolling
//! - [`accessibility`] - ARIA state and keyboard activation
//! - [`responsive`], [`images`], [`timing`] - Page-wide handlers
//!
//! Every controller is bound to the browser through [`Feature`].

pub mod accessibility;
pub mod cursor;
pub mod effects;
pub mod images;
pub mod loading;
pub mod navigation;
pub mod responsive;
pub mod slideshow;
pub mod smooth_scroll;
pub mod timing;
pub mod venues;

use crate::core::error::InitError;
use crate::utils::Subscriptions;

pub use accessibility::Accessibility;
pub use cursor::CursorFollower;
pub use effects::ScrollEffects;
pub use images::{ImageFallback, ImageWatch};
pub use navigation::Navigation;
pub use responsive::ResizeRefresh;
pub use slideshow::Slideshow;
pub use smooth_scroll::SmoothScroll;
pub use timing::LoadTiming;
pub use venues::Venues;

/// A controller whose browser listeners are registered in one step.
pub trait Feature {
    /// Short name used in startup logs.
    fn name(&self) -> &'static str;

    /// Register this controller's listeners in `subs`.
    fn bind(&self, subs: &mut Subscriptions) -> Result<(), InitError>;
}
