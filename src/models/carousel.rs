//! Hero slideshow state.

use crate::core::error::SlideshowError;

/// Position and playback state of the hero slideshow.
///
/// The index is always inside `0..len` when `len > 0`; stepping wraps in
/// both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    playing: bool,
}

impl Carousel {
    /// A playing carousel over `len` slides, positioned on the first.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            playing: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Move to `index`, leaving the state untouched on error.
    pub fn select(&mut self, index: usize) -> Result<usize, SlideshowError> {
        if self.len == 0 {
            return Err(SlideshowError::Empty);
        }
        if index >= self.len {
            return Err(SlideshowError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(index)
    }

    /// Index after the current one, wrapping to the first.
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.len.max(1)
    }

    /// Index before the current one, wrapping to the last.
    pub fn prev_index(&self) -> usize {
        (self.current + self.len.max(1) - 1) % self.len.max(1)
    }

    /// Flip the playing flag, returning the new value.
    pub fn toggle_playing(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }
}
