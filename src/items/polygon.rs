use crate::core::{BoundingBox, Point};
use crate::error::ChartResult;
use crate::items::{
    ChartStyleConfig, DataItem, DeviceScale, ItemGeometry, ItemKind, ItemStyle,
    LINE_STROKE_DIVISOR,
};
use crate::render::{FillRule, PaintSurface};

/// Closed rings filled with the even-odd rule.
///
/// Overlapping parts of self-intersecting rings alternate between filled and
/// unfilled. The rule is fixed for this item kind.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonItem {
    geometry: ItemGeometry,
    style: ItemStyle,
    scale: DeviceScale,
}

impl Default for PolygonItem {
    fn default() -> Self {
        Self::with_style(ChartStyleConfig::default().polygon)
    }
}

impl PolygonItem {
    #[must_use]
    pub fn with_style(style: ItemStyle) -> Self {
        Self {
            geometry: ItemGeometry::default(),
            style,
            scale: DeviceScale::default(),
        }
    }
}

impl DataItem for PolygonItem {
    fn kind(&self) -> ItemKind {
        ItemKind::Polygon
    }

    fn set_data(&mut self, points: Vec<Point>) -> bool {
        self.geometry.replace(ItemKind::Polygon, points)
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

        surface.set_brush(self.style.brush);
        surface.set_pen(self.scale.scaled_pen(self.style.pen, LINE_STROKE_DIVISOR));
        surface.draw_polygon(self.points(), FillRule::EvenOdd)
    }
}

#[cfg(test)]
mod tests {
    use super::PolygonItem;
    use crate::core::{BoundingBox, Point};
    use crate::items::{DataItem, DeviceScale};
    use crate::render::{FillRule, LineStrokeStyle, RecordingSurface, Shape};

    #[test]
    fn paints_even_odd_polygon_with_scaled_dashed_pen() {
        let mut polygon = PolygonItem::default();
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(4.0, 4.0),
        ];
        polygon.set_data(ring.clone());
        polygon.set_device_scale(DeviceScale::new(2.0, 8.0));
        assert_eq!(polygon.range(), BoundingBox::new(0.0, 4.0, 0.0, 4.0));

        let mut surface = RecordingSurface::default();
        polygon.paint(&mut surface).expect("paint polygon");

        let [command] = surface.commands() else {
            panic!("expected exactly one draw call");
        };
        assert_eq!(
            command.shape,
            Shape::Polygon {
                points: ring,
                fill_rule: FillRule::EvenOdd,
            }
        );
        assert_eq!(command.pen.width, 2.0);
        assert_eq!(command.pen.style, LineStrokeStyle::Dashed);
        assert!(!command.brush.is_visible());
    }

    #[test]
    fn empty_polygon_draws_nothing() {
        let mut surface = RecordingSurface::default();
        PolygonItem::default()
            .paint(&mut surface)
            .expect("paint empty polygon");
        assert!(surface.commands().is_empty());
    }
}
