//! Error types for the site controllers.
//!
//! - [`InitError`] - a controller could not be set up against the document
//! - [`SlideshowError`] - an invalid slide transition was requested

use thiserror::Error;

/// Startup failures. Any of these aborts the remaining startup sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    /// Browser window or document not available
    #[error("browser document not available")]
    NoDocument,
    /// A required element id is absent from the document
    #[error("required element #{0} not found")]
    MissingElement(&'static str),
    /// A browser API call failed while binding listeners
    #[error("failed to bind {0}")]
    BindFailed(&'static str),
}

/// Invalid slide transitions. Logged and ignored by the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlideshowError {
    /// The document has no slides.
    #[error("slideshow has no slides")]
    Empty,
    /// The requested index is outside `0..len`.
    #[error("slide index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}
