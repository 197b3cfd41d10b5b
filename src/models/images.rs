//! Image load bookkeeping.

/// Counts of settled images out of the document's total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageTally {
    total: usize,
    loaded: usize,
    failed: usize,
}

impl ImageTally {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Count an image that was already complete when the tally started.
    pub fn record_complete(&mut self) {
        self.loaded += 1;
    }

    /// Count a late load. Returns `true` when this settles the last image.
    pub fn record_loaded(&mut self) -> bool {
        self.loaded += 1;
        self.is_settled()
    }

    /// Count a failure. Returns `true` when this settles the last image.
    pub fn record_failed(&mut self) -> bool {
        self.failed += 1;
        self.is_settled()
    }

    fn is_settled(&self) -> bool {
        self.loaded + self.failed == self.total
    }
}
