//! Browser-independent seams shared by every controller.
//!
//! This module provides:
//! - [`Dom`], [`Patch`], [`Target`] - Document access through render patches
//! - [`Scheduler`], [`TimerId`], [`Debounce`] - Timer scheduling
//! - [`Page`] - The injected document/timer pair
//! - [`error`] - Startup and slideshow errors

pub mod dom;
pub mod error;
mod page;
#[cfg(test)]
pub mod testing;
mod timer;

pub use dom::{Dom, Op, Patch, Target, Viewport};
pub use page::Page;
pub use timer::{Debounce, Scheduler, TimerId};
