use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Axis-aligned bounding box of item geometry.
///
/// The empty box is `(+inf, -inf, +inf, -inf)` so that merging with it never
/// changes the other operand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        min_y: f64::INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Tightest box around `points`; the empty box for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        points.iter().fold(Self::EMPTY, |bounds, point| {
            Self::new(
                bounds.min_x.min(point.x),
                bounds.max_x.max(point.x),
                bounds.min_y.min(point.y),
                bounds.max_y.max(point.y),
            )
        })
    }

    /// Component-wise union of two boxes.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.max_x.max(other.max_x),
            self.min_y.min(other.min_y),
            self.max_y.max(other.max_y),
        )
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Widens each axis whose extent collapses to a single rounded value by
    /// `margin` on both sides.
    ///
    /// Rounding follows `f64::round`, which rounds halves away from zero; Qt5
    /// `qRound` rounds negative halves up instead, so `[-2.5, -2.4]` is not
    /// padded here. Axes holding the empty sentinel are left alone.
    #[must_use]
    pub fn padded_if_degenerate(self, margin: f64) -> Self {
        let mut padded = self;
        if is_collapsed(self.min_x, self.max_x) {
            padded.min_x -= margin;
            padded.max_x += margin;
        }
        if is_collapsed(self.min_y, self.max_y) {
            padded.min_y -= margin;
            padded.max_y += margin;
        }
        padded
    }
}

fn is_collapsed(min: f64, max: f64) -> bool {
    min.is_finite() && max.is_finite() && min.round() == max.round()
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;
    use crate::core::Point;

    #[test]
    fn from_points_tracks_extremes_per_axis() {
        let bounds = BoundingBox::from_points(&[
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(1.0, 7.5),
        ]);
        assert_eq!(bounds, BoundingBox::new(-2.0, 3.0, -1.0, 7.5));
    }

    #[test]
    fn empty_box_is_merge_identity() {
        let bounds = BoundingBox::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(bounds.merge(BoundingBox::EMPTY), bounds);
        assert_eq!(BoundingBox::EMPTY.merge(bounds), bounds);
        assert!(BoundingBox::from_points(&[]).is_empty());
    }

    #[test]
    fn degenerate_axes_are_padded_independently() {
        let bounds = BoundingBox::new(5.0, 5.25, 0.0, 10.0).padded_if_degenerate(2.5);
        assert_eq!(bounds, BoundingBox::new(2.5, 7.75, 0.0, 10.0));

        let empty = BoundingBox::EMPTY.padded_if_degenerate(2.5);
        assert_eq!(empty, BoundingBox::EMPTY);
    }

    #[test]
    fn negative_halves_round_away_from_zero() {
        // -2.5 rounds to -3 and -2.4 to -2, so the axis is not collapsed.
        let bounds = BoundingBox::new(-2.5, -2.4, 1.0, 1.0).padded_if_degenerate(2.5);
        assert_eq!(bounds, BoundingBox::new(-2.5, -2.4, -1.5, 3.5));
    }
}
