//! Drawable chart items.
//!
//! Every item owns its geometry, its style and the bounding box of its
//! geometry. Geometry is only ever replaced wholesale through `set_data` or
//! dropped through `clear_data`; painting reads it without mutation.

mod point_marker;
mod polygon;
mod profile;
mod style;
mod trajectory;

pub use point_marker::PointMarkerItem;
pub use polygon::PolygonItem;
pub use profile::ProfileItem;
pub use style::{ChartStyleConfig, ItemStyle};
pub use trajectory::TrajectoryItem;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{BoundingBox, ChartAxis, Point};
use crate::error::ChartResult;
use crate::render::{Brush, Color, PaintSurface, Pen};

/// Ratio between the marker cell and one device pixel, per axis.
pub const DEVICE_SCALE_FACTOR: f64 = 4.0;
/// Stroke divisor of outline items (polygon, trajectory, profile).
pub const LINE_STROKE_DIVISOR: f64 = 4.0;
/// Stroke divisor of point markers.
pub const MARKER_STROKE_DIVISOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Polygon,
    Trajectory,
    Profile,
    PointMarker,
}

impl ItemKind {
    /// Fewest points `set_data` accepts for this kind.
    #[must_use]
    pub const fn min_points(self) -> usize {
        match self {
            Self::Profile => 2,
            Self::Polygon | Self::Trajectory | Self::PointMarker => 1,
        }
    }
}

/// Logical size of one marker cell for the current zoom level.
///
/// Recomputed before every paint pass from `span / pixel_span` of each axis,
/// so anything sized from it keeps a constant device size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceScale {
    pub width: f64,
    pub height: f64,
}

impl Default for DeviceScale {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl DeviceScale {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn from_axes(x_axis: &impl ChartAxis, y_axis: &impl ChartAxis) -> Self {
        Self::new(
            x_axis.units_per_pixel() * DEVICE_SCALE_FACTOR,
            y_axis.units_per_pixel() * DEVICE_SCALE_FACTOR,
        )
    }

    /// `pen` with its width rescaled for this frame.
    #[must_use]
    pub fn scaled_pen(self, pen: Pen, divisor: f64) -> Pen {
        pen.with_width(pen.width * self.height / divisor)
    }
}

/// Capabilities shared by all chart items.
pub trait DataItem {
    fn kind(&self) -> ItemKind;

    /// Replaces the geometry and recomputes the bounds.
    ///
    /// Input shorter than `kind().min_points()` is ignored and leaves the
    /// previous geometry in place; the return value tells which happened.
    fn set_data(&mut self, points: Vec<Point>) -> bool;

    fn clear_data(&mut self);

    fn points(&self) -> &[Point];

    /// Bounds of the current geometry; [`BoundingBox::EMPTY`] when there is
    /// none.
    fn range(&self) -> BoundingBox;

    fn style(&self) -> ItemStyle;
    fn set_style(&mut self, style: ItemStyle);

    fn device_scale(&self) -> DeviceScale;
    fn set_device_scale(&mut self, scale: DeviceScale);

    fn paint<S: PaintSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()>;

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    fn pen(&self) -> Pen {
        self.style().pen
    }

    fn brush(&self) -> Brush {
        self.style().brush
    }

    fn set_pen(&mut self, pen: Pen) {
        let brush = self.brush();
        self.set_style(ItemStyle::new(pen, brush));
    }

    fn set_brush(&mut self, brush: Brush) {
        let pen = self.pen();
        self.set_style(ItemStyle::new(pen, brush));
    }

    fn set_color(&mut self, color: Color) {
        let style = self.style().with_color(color);
        self.set_style(style);
    }
}

/// Geometry and bounds storage shared by the item variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct ItemGeometry {
    points: Vec<Point>,
    bounds: BoundingBox,
}

impl ItemGeometry {
    pub(crate) fn replace(&mut self, kind: ItemKind, points: Vec<Point>) -> bool {
        if points.len() < kind.min_points() {
            trace!(
                ?kind,
                count = points.len(),
                min = kind.min_points(),
                "ignoring set_data with too few points"
            );
            return false;
        }

        self.bounds = BoundingBox::from_points(&points);
        self.points = points;
        debug!(?kind, count = self.points.len(), "replaced item geometry");
        true
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
        self.bounds = BoundingBox::EMPTY;
    }

    pub(crate) fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

/// Owned chart item of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartItem {
    Polygon(PolygonItem),
    Trajectory(TrajectoryItem),
    Profile(ProfileItem),
    PointMarker(PointMarkerItem),
}

macro_rules! dispatch {
    ($item:expr, $inner:ident => $body:expr) => {
        match $item {
            ChartItem::Polygon($inner) => $body,
            ChartItem::Trajectory($inner) => $body,
            ChartItem::Profile($inner) => $body,
            ChartItem::PointMarker($inner) => $body,
        }
    };
}

impl ChartItem {
    /// Empty item of `kind` styled from `config`.
    #[must_use]
    pub fn new(kind: ItemKind, config: &ChartStyleConfig) -> Self {
        match kind {
            ItemKind::Polygon => Self::Polygon(PolygonItem::with_style(config.polygon)),
            ItemKind::Trajectory => {
                Self::Trajectory(TrajectoryItem::with_style(config.trajectory))
            }
            ItemKind::Profile => Self::Profile(ProfileItem::with_style(config.profile)),
            ItemKind::PointMarker => Self::PointMarker(PointMarkerItem::with_styles(
                config.point_marker,
                config.zero_point,
            )),
        }
    }

    #[must_use]
    pub fn as_profile(&self) -> Option<&ProfileItem> {
        match self {
            Self::Profile(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn as_profile_mut(&mut self) -> Option<&mut ProfileItem> {
        match self {
            Self::Profile(profile) => Some(profile),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_point_marker(&self) -> Option<&PointMarkerItem> {
        match self {
            Self::PointMarker(markers) => Some(markers),
            _ => None,
        }
    }

    pub fn as_point_marker_mut(&mut self) -> Option<&mut PointMarkerItem> {
        match self {
            Self::PointMarker(markers) => Some(markers),
            _ => None,
        }
    }
}

impl DataItem for ChartItem {
    fn kind(&self) -> ItemKind {
        dispatch!(self, item => item.kind())
    }

    fn set_data(&mut self, points: Vec<Point>) -> bool {
        dispatch!(self, item => item.set_data(points))
    }

    fn clear_data(&mut self) {
        dispatch!(self, item => item.clear_data())
    }

    fn points(&self) -> &[Point] {
        dispatch!(self, item => item.points())
    }

    fn range(&self) -> BoundingBox {
        dispatch!(self, item => item.range())
    }

    fn style(&self) -> ItemStyle {
        dispatch!(self, item => item.style())
    }

    fn set_style(&mut self, style: ItemStyle) {
        dispatch!(self, item => item.set_style(style))
    }

    fn device_scale(&self) -> DeviceScale {
        dispatch!(self, item => item.device_scale())
    }

    fn set_device_scale(&mut self, scale: DeviceScale) {
        dispatch!(self, item => item.set_device_scale(scale))
    }

    fn paint<S: PaintSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        dispatch!(self, item => item.paint(surface))
    }
}

impl From<PolygonItem> for ChartItem {
    fn from(item: PolygonItem) -> Self {
        Self::Polygon(item)
    }
}

impl From<TrajectoryItem> for ChartItem {
    fn from(item: TrajectoryItem) -> Self {
        Self::Trajectory(item)
    }
}

impl From<ProfileItem> for ChartItem {
    fn from(item: ProfileItem) -> Self {
        Self::Profile(item)
    }
}

impl From<PointMarkerItem> for ChartItem {
    fn from(item: PointMarkerItem) -> Self {
        Self::PointMarker(item)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartItem, ChartStyleConfig, DataItem, DeviceScale, ItemKind};
    use crate::core::{AxisState, BoundingBox, Point};
    use crate::render::{Color, Pen};

    #[test]
    fn short_input_keeps_previous_geometry_for_every_kind() {
        let config = ChartStyleConfig::default();
        for kind in [
            ItemKind::Polygon,
            ItemKind::Trajectory,
            ItemKind::Profile,
            ItemKind::PointMarker,
        ] {
            let mut item = ChartItem::new(kind, &config);
            let initial = vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0)];
            assert!(item.set_data(initial.clone()));
            let bounds = item.range();

            assert!(!item.set_data(Vec::new()));
            assert_eq!(item.points(), initial.as_slice());
            assert_eq!(item.range(), bounds);
        }
    }

    #[test]
    fn clear_resets_bounds_to_empty_sentinel() {
        let mut item = ChartItem::new(ItemKind::Trajectory, &ChartStyleConfig::default());
        item.set_data(vec![Point::new(1.0, 1.0)]);
        assert!(!item.is_empty());

        item.clear_data();
        assert!(item.is_empty());
        assert_eq!(item.range(), BoundingBox::EMPTY);
    }

    #[test]
    fn device_scale_follows_units_per_pixel() {
        let x = AxisState::new(0.0, 100.0, 400.0).expect("x axis");
        let y = AxisState::new(0.0, 30.0, 60.0).expect("y axis");
        let scale = DeviceScale::from_axes(&x, &y);
        assert_eq!(scale, DeviceScale::new(1.0, 2.0));

        let pen = scale.scaled_pen(Pen::solid(Color::BLUE, 1.0), 4.0);
        assert_eq!(pen.width, 0.5);
    }

    #[test]
    fn color_and_pen_setters_touch_only_their_part() {
        let mut item = ChartItem::new(ItemKind::Profile, &ChartStyleConfig::default());
        item.set_color(Color::RED);
        assert_eq!(item.pen().color, Color::RED);
        assert_eq!(item.brush().color, Color::RED);

        item.set_pen(Pen::solid(Color::BLUE, 3.0));
        assert_eq!(item.pen().width, 3.0);
        assert_eq!(item.brush().color, Color::RED);
    }
}
