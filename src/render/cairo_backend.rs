use cairo::{Context, Format, ImageSurface, Matrix};

use crate::core::{Point, Rect, ViewTransform, Viewport, window_to_viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Brush, Color, FillRule, PaintSurface, Pen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
}

/// Cairo-backed paint surface.
///
/// Logical geometry goes through the view transform and then the
/// window-to-viewport mapping, both folded into the Cairo matrix before each
/// draw call. Pens are scaled along with the geometry.
///
/// Supports offscreen rendering into an owned image surface and in-place
/// rendering on an external context (for example a GTK draw callback).
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    viewport: Viewport,
    transform: ViewTransform,
    window: Rect,
    pen: Pen,
    brush: Brush,
    stats: CairoRenderStats,
}

impl CairoSurface {
    /// Creates an offscreen ARGB32 surface cleared to `background`.
    pub fn new(width: i32, height: i32, background: Color) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        background.validate()?;

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let viewport = Viewport::new(width.unsigned_abs(), height.unsigned_abs());
        Ok(Self::with_parts(context, Some(image), viewport))
    }

    /// Draws on a context owned by the host; `viewport` is its device size.
    pub fn on_context(context: Context, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidData(
                "cairo viewport must be non-empty".to_owned(),
            ));
        }
        Ok(Self::with_parts(context, None, viewport))
    }

    fn with_parts(context: Context, image: Option<ImageSurface>, viewport: Viewport) -> Self {
        Self {
            context,
            image,
            viewport,
            transform: ViewTransform::IDENTITY,
            window: Rect::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
            ),
            pen: Pen::solid(Color::BLACK, 1.0),
            brush: Brush::none(Color::BLACK),
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    /// Releases the drawing context and returns the offscreen image, which
    /// can then be read through `ImageSurface::data`.
    #[must_use]
    pub fn into_image(self) -> Option<ImageSurface> {
        let Self { image, context, .. } = self;
        drop(context);
        image
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    fn apply_view(&self) -> ChartResult<()> {
        let device = self
            .transform
            .then(window_to_viewport(self.window, self.viewport)?);
        self.context.set_matrix(Matrix::new(
            device.m11, device.m12, device.m21, device.m22, device.dx, device.dy,
        ));
        Ok(())
    }

    fn append_path(&self, points: &[Point]) {
        self.context.new_path();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.context.move_to(first.x, first.y);
        }
        for point in iter {
            self.context.line_to(point.x, point.y);
        }
        self.context.close_path();
    }

    fn fill_and_stroke(&self, fill_rule: FillRule) -> ChartResult<()> {
        if self.brush.is_visible() {
            self.context.set_fill_rule(match fill_rule {
                FillRule::EvenOdd => cairo::FillRule::EvenOdd,
                FillRule::NonZero => cairo::FillRule::Winding,
            });
            apply_color(&self.context, self.brush.color);
            self.context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill path", err))?;
        }
        self.stroke()
    }

    fn stroke(&self) -> ChartResult<()> {
        if self.pen.width <= 0.0 {
            self.context.new_path();
            return Ok(());
        }

        let dashes: Vec<f64> = self
            .pen
            .style
            .dash_pattern()
            .iter()
            .map(|length| length * self.pen.width)
            .collect();
        self.context.set_dash(&dashes, 0.0);
        self.context.set_line_width(self.pen.width);
        apply_color(&self.context, self.pen.color);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }
}

impl PaintSurface for CairoSurface {
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
        if points.is_empty() {
            return Ok(());
        }
        self.apply_view()?;
        self.append_path(points);
        self.fill_and_stroke(fill_rule)?;
        self.stats.polygons_drawn += 1;
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> ChartResult<()> {
        self.apply_view()?;
        self.context.new_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.stroke()?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect) -> ChartResult<()> {
        self.apply_view()?;
        self.context.new_path();
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.fill_and_stroke(FillRule::NonZero)?;
        self.stats.rects_drawn += 1;
        Ok(())
    }

    fn draw_convex_polygon(&mut self, points: &[Point]) -> ChartResult<()> {
        self.draw_polygon(points, FillRule::NonZero)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
