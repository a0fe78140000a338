use crate::core::{BoundingBox, Point, Rect};
use crate::error::ChartResult;
use crate::items::{
    ChartStyleConfig, DataItem, DeviceScale, ItemGeometry, ItemKind, ItemStyle,
    MARKER_STROKE_DIVISOR,
};
use crate::render::{Brush, PaintSurface, Pen};

/// Discrete positions drawn as one marker cell each.
///
/// The first point is the zero point and always uses the zero-point style;
/// every following point uses the main style.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarkerItem {
    geometry: ItemGeometry,
    style: ItemStyle,
    zero_style: ItemStyle,
    scale: DeviceScale,
}

impl Default for PointMarkerItem {
    fn default() -> Self {
        let config = ChartStyleConfig::default();
        Self::with_styles(config.point_marker, config.zero_point)
    }
}

impl PointMarkerItem {
    #[must_use]
    pub fn with_styles(style: ItemStyle, zero_style: ItemStyle) -> Self {
        Self {
            geometry: ItemGeometry::default(),
            style,
            zero_style,
            scale: DeviceScale::default(),
        }
    }

    #[must_use]
    pub fn zero_pen(&self) -> Pen {
        self.zero_style.pen
    }

    #[must_use]
    pub fn zero_brush(&self) -> Brush {
        self.zero_style.brush
    }

    pub fn set_zero_point_pen(&mut self, pen: Pen) {
        self.zero_style.pen = pen;
    }

    pub fn set_zero_point_brush(&mut self, brush: Brush) {
        self.zero_style.brush = brush;
    }

    fn apply_style<S: PaintSurface + ?Sized>(&self, surface: &mut S, style: ItemStyle) {
        surface.set_brush(style.brush);
        surface.set_pen(self.scale.scaled_pen(style.pen, MARKER_STROKE_DIVISOR));
    }

    fn cell(&self, point: Point) -> Rect {
        Rect::centered_at(point, self.scale.width, self.scale.height)
    }
}

impl DataItem for PointMarkerItem {
    fn kind(&self) -> ItemKind {
        ItemKind::PointMarker
    }

    fn set_data(&mut self, points: Vec<Point>) -> bool {
        self.geometry.replace(ItemKind::PointMarker, points)
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
        let Some((zero, rest)) = self.points().split_first() else {
            return Ok(());
        };

        self.apply_style(surface, self.zero_style);
        surface.draw_rect(self.cell(*zero))?;

        self.apply_style(surface, self.style);
        for point in rest {
            surface.draw_rect(self.cell(*point))?;
        }
        Ok(())
    }
}
