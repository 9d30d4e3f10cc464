//! Bounding frames over traced point sets

use std::fmt;

use super::point::Point;
use crate::errors::{Result, TraceError};

/// Minimal axis-aligned rectangle containing a point set, by integer corners
///
/// Invariant: `low.x <= high.x` and `low.y <= high.y`. A frame is derived
/// from the points it covers and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Corner with the smallest x and y
    pub low: Point,
    /// Corner with the largest x and y
    pub high: Point,
}

impl Frame {
    /// Componentwise min/max over `points`, in one pass
    ///
    /// Zero points have no meaningful frame; that case is
    /// [`TraceError::EmptyFrame`].
    pub fn over(points: &[Point]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(TraceError::EmptyFrame)?;
        let mut low = *first;
        let mut high = *first;
        for p in rest {
            low.x = low.x.min(p.x);
            low.y = low.y.min(p.y);
            high.x = high.x.max(p.x);
            high.y = high.y.max(p.y);
        }
        Ok(Self { low, high })
    }

    /// Grid rows spanned; row 0 corresponds to `high.y`
    pub fn rows(&self) -> usize {
        self.high.y.abs_diff(self.low.y) as usize + 1
    }

    /// Grid columns spanned; column 0 corresponds to `low.x`
    pub fn cols(&self) -> usize {
        self.high.x.abs_diff(self.low.x) as usize + 1
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.low.x && p.x <= self.high.x && p.y >= self.low.y && p.y <= self.high.y
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_over_scattered_points() {
        let points = [
            Point::new(0, 0),
            Point::new(5, 0),
            Point::new(2, -2),
            Point::new(2, 4),
            Point::new(5, 4),
            Point::new(4, 2),
        ];
        let frame = Frame::over(&points).unwrap();
        assert_eq!(frame.low, Point::new(0, -2));
        assert_eq!(frame.high, Point::new(5, 4));
        assert_eq!(frame.rows(), 7);
        assert_eq!(frame.cols(), 6);
    }

    #[test]
    fn test_frame_over_single_point_is_degenerate() {
        let frame = Frame::over(&[Point::new(3, -1)]).unwrap();
        assert_eq!(frame.low, frame.high);
        assert_eq!(frame.rows(), 1);
        assert_eq!(frame.cols(), 1);
    }

    #[test]
    fn test_frame_over_empty_set_fails() {
        let err = Frame::over(&[]).unwrap_err();
        assert!(matches!(err, TraceError::EmptyFrame));
    }

    #[test]
    fn test_contains_is_corner_inclusive() {
        let frame = Frame::over(&[Point::new(0, 0), Point::new(2, 2)]).unwrap();
        assert!(frame.contains(Point::new(0, 0)));
        assert!(frame.contains(Point::new(2, 2)));
        assert!(frame.contains(Point::new(1, 1)));
        assert!(!frame.contains(Point::new(3, 1)));
        assert!(!frame.contains(Point::new(1, -1)));
    }
}
