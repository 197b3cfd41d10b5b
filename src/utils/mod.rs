//! Browser adapters for the controller seams.
//!
//! Provides:
//! - [`WebDom`] - The live document behind [`crate::core::Dom`]
//! - [`WebScheduler`] - `gloo-timers` behind [`crate::core::Scheduler`]
//! - [`Subscriptions`] - Listener registration and teardown
//! - [`log`] - `tracing` output to the browser console

pub mod dom;
mod events;
pub mod log;
mod timers;
mod web_dom;

pub use events::Subscriptions;
pub use timers::WebScheduler;
pub use web_dom::WebDom;
