use crate::core::{Point, Rect, ViewTransform};
use crate::error::{ChartError, ChartResult};
use crate::render::{Brush, Color, FillRule, PaintSurface, Pen, SurfaceState};

/// Geometry of one recorded draw call, in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon {
        points: Vec<Point>,
        fill_rule: FillRule,
    },
    Line {
        from: Point,
        to: Point,
    },
    Rect(Rect),
    ConvexPolygon(Vec<Point>),
}

/// One draw call together with the style and view it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub shape: Shape,
    pub pen: Pen,
    pub brush: Brush,
    pub state: SurfaceState,
}

/// Headless surface that validates and records every draw call.
///
/// Used by tests and by hosts that want to inspect a paint pass without a
/// rasterizer. A failure can be injected at a given draw index to exercise
/// error paths.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    transform: ViewTransform,
    window: Rect,
    pen: Pen,
    brush: Brush,
    commands: Vec<DrawCommand>,
    fail_at: Option<usize>,
    draw_calls: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1.0, 1.0))
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new(window: Rect) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            window,
            pen: Pen::solid(Color::BLACK, 1.0),
            brush: Brush::none(Color::BLACK),
            commands: Vec::new(),
            fail_at: None,
            draw_calls: 0,
        }
    }

    /// Makes the `index`-th draw call (zero based) fail with a backend error.
    #[must_use]
    pub fn with_failure_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command.shape, Shape::Line { .. }))
            .count()
    }

    #[must_use]
    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|command| match command.shape {
                Shape::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.draw_calls = 0;
    }

    fn record(&mut self, shape: Shape) -> ChartResult<()> {
        let index = self.draw_calls;
        self.draw_calls += 1;
        if self.fail_at == Some(index) {
            return Err(ChartError::Backend(format!(
                "injected failure at draw call {index}"
            )));
        }

        validate_shape(&shape)?;
        self.pen.validate()?;
        self.brush.color.validate()?;

        let state = self.state();
        self.commands.push(DrawCommand {
            shape,
            pen: self.pen,
            brush: self.brush,
            state,
        });
        Ok(())
    }
}

impl PaintSurface for RecordingSurface {
    fn transform(&self) -> ViewTransform {
        self.transform
    }

    fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }

    fn window(&self) -> Rect {
        self.window
    }

    fn set_window(&mut self, window: Rect) {
        self.window = window;
    }

    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    fn draw_polygon(&mut self, points: &[Point], fill_rule: FillRule) -> ChartResult<()> {
        self.record(Shape::Polygon {
            points: points.to_vec(),
            fill_rule,
        })
    }

    fn draw_line(&mut self, from: Point, to: Point) -> ChartResult<()> {
        self.record(Shape::Line { from, to })
    }

    fn draw_rect(&mut self, rect: Rect) -> ChartResult<()> {
        self.record(Shape::Rect(rect))
    }

    fn draw_convex_polygon(&mut self, points: &[Point]) -> ChartResult<()> {
        self.record(Shape::ConvexPolygon(points.to_vec()))
    }
}

fn validate_shape(shape: &Shape) -> ChartResult<()> {
    let finite = match shape {
        Shape::Polygon { points, .. } | Shape::ConvexPolygon(points) => {
            points.iter().all(|point| point.is_finite())
        }
        Shape::Line { from, to } => from.is_finite() && to.is_finite(),
        Shape::Rect(rect) => rect.is_finite(),
    };
    if finite {
        Ok(())
    } else {
        Err(ChartError::InvalidData(
            "draw coordinates must be finite".to_owned(),
        ))
    }
}
