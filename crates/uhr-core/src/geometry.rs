//! Window geometry and the square resize clamp.
//!
//! All sizes are logical points. The clamp keeps the clock window square and
//! never larger than the smaller side of the screen it lives on.

use serde::{Deserialize, Serialize};

/// Smallest side length the window may be resized to.
pub const MIN_SIDE: f64 = 300.0;

/// Size of a window frame in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub const ZERO: FrameSize = FrameSize {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Same frame, width grown by `delta`.
    pub fn widened(&self, delta: f64) -> Self {
        Self {
            width: self.width + delta,
            height: self.height,
        }
    }
}

/// Usable area of the screen hosting the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f64,
    pub height: f64,
}

impl ScreenBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest square side that fits on this screen.
    pub fn max_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// How the side length is picked from a non-square proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantAxis {
    /// The dimension the user changed the most wins.
    #[default]
    LargestDelta,
    /// The larger side of the proposal wins.
    LargestSide,
}

/// Pick the dimension that drives the square.
///
/// With [`DominantAxis::LargestDelta`] the axis whose absolute change from
/// `current` is larger wins; width wins a tie.
pub fn dominant_dimension(proposed: FrameSize, current: FrameSize, axis: DominantAxis) -> f64 {
    match axis {
        DominantAxis::LargestDelta => {
            let dw = (proposed.width - current.width).abs();
            let dh = (proposed.height - current.height).abs();
            if dw >= dh {
                proposed.width
            } else {
                proposed.height
            }
        }
        DominantAxis::LargestSide => proposed.width.max(proposed.height),
    }
}

/// Clamp a side length to `[MIN_SIDE, screen.max_side()]`.
///
/// The upper bound wins when the screen is smaller than `MIN_SIDE`.
pub fn clamp_side(side: f64, screen: ScreenBounds) -> f64 {
    side.max(MIN_SIDE).min(screen.max_side())
}

/// Turn a proposed frame into the square frame the window should get.
pub fn clamp_square(
    proposed: FrameSize,
    current: FrameSize,
    screen: ScreenBounds,
    axis: DominantAxis,
) -> FrameSize {
    let side = clamp_side(dominant_dimension(proposed, current, axis), screen);
    FrameSize::square(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenBounds = ScreenBounds {
        width: 1440.0,
        height: 900.0,
    };

    #[test]
    fn test_clamp_below_minimum() {
        let out = clamp_square(
            FrameSize::new(120.0, 90.0),
            FrameSize::square(400.0),
            SCREEN,
            DominantAxis::LargestSide,
        );
        assert_eq!(out, FrameSize::square(MIN_SIDE));
    }

    #[test]
    fn test_clamp_above_screen() {
        let out = clamp_square(
            FrameSize::new(1300.0, 700.0),
            FrameSize::square(700.0),
            SCREEN,
            DominantAxis::LargestDelta,
        );
        assert_eq!(out, FrameSize::square(900.0));
    }

    #[test]
    fn test_clamp_within_range_is_identity() {
        let out = clamp_square(
            FrameSize::new(640.0, 500.0),
            FrameSize::square(500.0),
            SCREEN,
            DominantAxis::LargestDelta,
        );
        assert_eq!(out, FrameSize::square(640.0));
    }

    #[test]
    fn test_largest_delta_follows_height_drag() {
        // Shrinking the height by 120 beats a 10 point width wobble.
        let current = FrameSize::square(600.0);
        let proposed = FrameSize::new(610.0, 480.0);
        assert_eq!(
            dominant_dimension(proposed, current, DominantAxis::LargestDelta),
            480.0
        );
        // The simplified rule would have grown the window instead.
        assert_eq!(
            dominant_dimension(proposed, current, DominantAxis::LargestSide),
            610.0
        );
    }

    #[test]
    fn test_largest_delta_tie_prefers_width() {
        let current = FrameSize::square(500.0);
        let proposed = FrameSize::new(520.0, 480.0);
        assert_eq!(
            dominant_dimension(proposed, current, DominantAxis::LargestDelta),
            520.0
        );
    }

    #[test]
    fn test_tiny_screen_bound_wins() {
        let screen = ScreenBounds::new(280.0, 260.0);
        assert_eq!(clamp_side(500.0, screen), 260.0);
        assert_eq!(clamp_side(10.0, screen), 260.0);
    }

    #[test]
    fn test_result_is_square_and_bounded_across_proposals() {
        let current = FrameSize::square(500.0);
        for axis in [DominantAxis::LargestDelta, DominantAxis::LargestSide] {
            for w in (0..2000).step_by(37) {
                for h in (0..2000).step_by(53) {
                    let out =
                        clamp_square(FrameSize::new(w as f64, h as f64), current, SCREEN, axis);
                    assert!(out.is_square());
                    assert!(out.width >= MIN_SIDE && out.width <= SCREEN.max_side());
                }
            }
        }
    }

    #[test]
    fn test_axis_serializes_snake_case() {
        let json = serde_json::to_string(&DominantAxis::LargestDelta).unwrap();
        assert_eq!(json, "\"largest_delta\"");
    }
}
