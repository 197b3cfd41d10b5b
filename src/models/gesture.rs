//! Touch swipe classification.

use crate::config::gesture::SWIPE_THRESHOLD;

/// Outcome of a completed touch along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved towards the start of the axis (left or up).
    Forward,
    /// Finger moved towards the end of the axis (right or down).
    Backward,
    /// Displacement within the threshold.
    None,
}

impl Swipe {
    /// Classify a touch by its start and end coordinate on one axis.
    pub fn classify(start: f64, end: f64) -> Self {
        let diff = start - end;
        if diff.abs() <= SWIPE_THRESHOLD {
            Self::None
        } else if diff > 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Start coordinate of the touch in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTrack {
    start: f64,
}

impl TouchTrack {
    pub fn begin(&mut self, at: f64) {
        self.start = at;
    }

    pub fn finish(&self, at: f64) -> Swipe {
        Swipe::classify(self.start, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_threshold_is_exclusive() {
        assert_eq!(Swipe::classify(200.0, 150.0), Swipe::None);
        assert_eq!(Swipe::classify(150.0, 200.0), Swipe::None);
        assert_eq!(Swipe::classify(200.0, 149.0), Swipe::Forward);
        assert_eq!(Swipe::classify(149.0, 200.0), Swipe::Backward);
    }

    #[test]
    fn test_touch_track() {
        let mut track = TouchTrack::default();
        track.begin(300.0);
        assert_eq!(track.finish(100.0), Swipe::Forward);
        assert_eq!(track.finish(290.0), Swipe::None);
        assert_eq!(track.finish(420.0), Swipe::Backward);
    }
}
