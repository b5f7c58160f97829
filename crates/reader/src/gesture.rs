//! Horizontal swipe detection
//!
//! Records the horizontal coordinate at touch-start and compares it at
//! touch-end; vertical motion is ignored. Displacements below the threshold
//! produce no swipe.

/// Direction of a recognized swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right: go to the previous page
    Right,
    /// Finger moved left: go to the next page
    Left,
}

/// Tracks one in-progress horizontal gesture
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: i32,
    start_x: Option<i32>,
}

impl SwipeTracker {
    /// Creates a tracker with the given minimum displacement in pixels
    pub fn new(threshold_px: u16) -> Self {
        Self {
            threshold: i32::from(threshold_px),
            start_x: None,
        }
    }

    /// Records the gesture origin
    pub fn touch_start(&mut self, x: i32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture; returns the swipe it amounts to, if any
    pub fn touch_end(&mut self, x: i32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = x - start;

        if delta >= self.threshold {
            Some(SwipeDirection::Right)
        } else if delta <= -self.threshold {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }

    /// True between touch-start and touch-end
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
