//! Data models and state machines for the site controllers.
//!
//! Contains plain state types with no browser access:
//! - [`Carousel`] - Hero slideshow position and playback
//! - [`NavState`], [`Presentation`] - Navigation mode and menu
//! - [`Swipe`], [`TouchTrack`] - Touch gesture classification
//! - [`RevealOptions`] and parallax helpers - Scroll effect parameters
//! - [`ImageTally`] - Image load bookkeeping
//! - [`ReadyState`] - Document lifecycle phase

mod carousel;
pub mod effects;
mod gesture;
mod images;
mod lifecycle;
mod navigation;

pub use carousel::Carousel;
pub use effects::RevealOptions;
pub use gesture::{Swipe, TouchTrack};
pub use images::ImageTally;
pub use lifecycle::ReadyState;
pub use navigation::{NavState, Presentation};
