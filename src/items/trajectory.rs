use crate::core::{BoundingBox, Point, Rect};
use crate::error::ChartResult;
use crate::items::{
    ChartStyleConfig, DataItem, DeviceScale, ItemGeometry, ItemKind, ItemStyle,
    LINE_STROKE_DIVISOR,
};
use crate::render::PaintSurface;

/// Path through consecutive points.
///
/// A single point is a valid trajectory and is drawn as one marker cell
/// centered on it instead of a zero-length line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryItem {
    geometry: ItemGeometry,
    style: ItemStyle,
    scale: DeviceScale,
}

impl Default for TrajectoryItem {
    fn default() -> Self {
        Self::with_style(ChartStyleConfig::default().trajectory)
    }
}

impl TrajectoryItem {
    #[must_use]
    pub fn with_style(style: ItemStyle) -> Self {
        Self {
            geometry: ItemGeometry::default(),
            style,
            scale: DeviceScale::default(),
        }
    }
}

impl DataItem for TrajectoryItem {
    fn kind(&self) -> ItemKind {
        ItemKind::Trajectory
    }

    fn set_data(&mut self, points: Vec<Point>) -> bool {
        self.geometry.replace(ItemKind::Trajectory, points)
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
        surface.set_brush(self.style.brush);
        surface.set_pen(self.scale.scaled_pen(self.style.pen, LINE_STROKE_DIVISOR));

        match self.points() {
            [] => Ok(()),
            [point] => surface.draw_rect(Rect::centered_at(
                *point,
                self.scale.width,
                self.scale.height,
            )),
            points => {
                for segment in points.windows(2) {
                    surface.draw_line(segment[0], segment[1])?;
                }
                Ok(())
            }
        }
    }
}
