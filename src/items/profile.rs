use smallvec::SmallVec;

use crate::core::{BoundingBox, Point};
use crate::error::ChartResult;
use crate::items::{
    ChartStyleConfig, DataItem, DeviceScale, ItemGeometry, ItemKind, ItemStyle,
    LINE_STROKE_DIVISOR,
};
use crate::render::PaintSurface;

/// Weight of the window top when choosing the side the filled region is
/// anchored to.
const BASELINE_TOP_FACTOR: f64 = 4.0;

/// Terrain or route cross-section.
///
/// Painted as a filled region closed by two baseline points under the first
/// and last profile points, and queryable for the height at a given x.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileItem {
    geometry: ItemGeometry,
    style: ItemStyle,
    scale: DeviceScale,
}

impl Default for ProfileItem {
    fn default() -> Self {
        Self::with_style(ChartStyleConfig::default().profile)
    }
}

impl ProfileItem {
    #[must_use]
    pub fn with_style(style: ItemStyle) -> Self {
        Self {
            geometry: ItemGeometry::default(),
            style,
            scale: DeviceScale::default(),
        }
    }

    /// Height of the profile at `x` as a step function over its segments.
    ///
    /// Each segment `[p[i].x, p[i + 1].x)` contributes `p[i].y`; when
    /// segments overlap the last matching one wins. The last point's own x
    /// yields its y. Anything outside the profile yields 0.
    #[must_use]
    pub fn height_value(&self, x: f64) -> f64 {
        let points = self.points();
        let stepped = points
            .windows(2)
            .rfind(|segment| segment[0].x <= x && segment[1].x > x)
            .map(|segment| segment[0].y);

        match (stepped, points) {
            (Some(height), _) => height,
            (None, [_, .., last]) if last.x == x => last.y,
            (None, _) => 0.0,
        }
    }

    /// Y of the two synthesized baseline points for a window whose top edge
    /// is at `window_top`.
    ///
    /// The region reaches the window edge whether the profile lies above or
    /// below it.
    #[must_use]
    pub fn baseline(&self, window_top: f64) -> f64 {
        let sign = if self.range().min_y - window_top * BASELINE_TOP_FACTOR <= 0.0 {
            -1.0
        } else {
            1.0
        };
        sign * window_top
    }

    /// Profile points closed by the baseline points at both ends.
    #[must_use]
    pub fn closed_region(&self, window_top: f64) -> SmallVec<[Point; 64]> {
        let points = self.points();
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return SmallVec::new();
        };

        let lower = self.baseline(window_top);
        let mut region = SmallVec::with_capacity(points.len() + 2);
        region.push(Point::new(first.x, lower));
        region.extend_from_slice(points);
        region.push(Point::new(last.x, lower));
        region
    }
}

impl DataItem for ProfileItem {
    fn kind(&self) -> ItemKind {
        ItemKind::Profile
    }

    fn set_data(&mut self, points: Vec<Point>) -> bool {
        self.geometry.replace(ItemKind::Profile, points)
    }

    fn clear_data(&mut self) {
        self.geometry.clear();
    }

    fn points(&self) -> &[Point] {
        self.geometry.points()
    }

    fn range(&self) -> BoundingBox {
        self.geometry.bounds()
    }

    fn style(&self) -> ItemStyle {
        self.style
    }

    fn set_style(&mut self, style: ItemStyle) {
        self.style = style;
    }

    fn device_scale(&self) -> DeviceScale {
        self.scale
    }

    fn set_device_scale(&mut self, scale: DeviceScale) {
        self.scale = scale;
    }

    fn paint<S: PaintSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        if self.is_empty() {
            return Ok(());
        }

        let region = self.closed_region(surface.window().top());
        surface.set_brush(self.style.brush);
        surface.set_pen(self.scale.scaled_pen(self.style.pen, LINE_STROKE_DIVISOR));
        surface.draw_convex_polygon(&region)
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileItem;
    use crate::core::{Point, Rect};
    use crate::items::DataItem;
    use crate::render::{RecordingSurface, Shape};

    fn stepped_profile() -> ProfileItem {
        let mut profile = ProfileItem::default();
        profile.set_data(vec![
            Point::new(0.0, 10.0),
            Point::new(5.0, 20.0),
            Point::new(10.0, 5.0),
        ]);
        profile
    }

    #[test]
    fn height_is_a_right_open_step_function() {
        let profile = stepped_profile();
        assert_eq!(profile.height_value(2.0), 10.0);
        assert_eq!(profile.height_value(5.0), 20.0);
        assert_eq!(profile.height_value(9.9), 20.0);
        assert_eq!(profile.height_value(10.0), 5.0);
        assert_eq!(profile.height_value(-1.0), 0.0);
        assert_eq!(profile.height_value(10.5), 0.0);
    }

    #[test]
    fn single_point_profile_is_rejected() {
        let mut profile = stepped_profile();
        assert!(!profile.set_data(vec![Point::new(3.0, 3.0)]));
        assert_eq!(profile.points().len(), 3);
        assert_eq!(ProfileItem::default().height_value(0.0), 0.0);
    }

    #[test]
    fn baseline_sign_follows_window_top() {
        let profile = stepped_profile();
        // min_y 5 - 4 * 2 <= 0 -> baseline below the origin
        assert_eq!(profile.baseline(2.0), -2.0);
        // min_y 5 - 4 * 1 > 0 -> baseline at the window top
        assert_eq!(profile.baseline(1.0), 1.0);
        assert_eq!(profile.baseline(-3.0), -3.0);
    }

    #[test]
    fn paints_closed_region_anchored_to_window_top() {
        let profile = stepped_profile();
        let mut surface = RecordingSurface::new(Rect::new(0.0, 1.0, 20.0, 30.0));
        profile.paint(&mut surface).expect("paint profile");

        let [command] = surface.commands() else {
            panic!("expected exactly one draw call");
        };
        assert_eq!(
            command.shape,
            Shape::ConvexPolygon(vec![
                Point::new(0.0, 1.0),
                Point::new(0.0, 10.0),
                Point::new(5.0, 20.0),
                Point::new(10.0, 5.0),
                Point::new(10.0, 1.0),
            ])
        );
        assert!(command.brush.is_visible());
    }
}
