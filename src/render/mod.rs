mod primitives;
mod recording;

pub use primitives::{Brush, BrushStyle, Color, FillRule, LineStrokeStyle, Pen};
pub use recording::{DrawCommand, RecordingSurface, Shape};

use std::ops::{Deref, DerefMut};

use crate::core::{Point, Rect, ViewTransform};
use crate::error::ChartResult;

/// Painter capability consumed by chart items.
///
/// Coordinates passed to the draw calls are logical; the surface maps them
/// through its current transform and then its window onto device pixels.
/// Backends own rasterization; the chart data model never touches pixels.
pub trait PaintSurface {
    fn transform(&self) -> ViewTransform;
    fn set_transform(&mut self, transform: ViewTransform);
    fn window(&self) -> Rect;
    fn set_window(&mut self, window: Rect);

    fn set_pen(&mut self, pen: Pen);
    fn set_brush(&mut self, brush: Brush);

    fn draw_polygon(&mut self, points: &[Point], fill_rule: FillRule) -> ChartResult<()>;
    fn draw_line(&mut self, from: Point, to: Point) -> ChartResult<()>;
    fn draw_rect(&mut self, rect: Rect) -> ChartResult<()>;
    fn draw_convex_polygon(&mut self, points: &[Point]) -> ChartResult<()>;

    /// Captures the transform and window currently in effect.
    fn state(&self) -> SurfaceState {
        SurfaceState {
            transform: self.transform(),
            window: self.window(),
        }
    }

    fn restore(&mut self, state: SurfaceState) {
        self.set_transform(state.transform);
        self.set_window(state.window);
    }
}

/// Transform and window of a surface at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    pub transform: ViewTransform,
    pub window: Rect,
}

/// Restores the surface state captured at construction when dropped.
///
/// Dereferences to the wrapped surface, so a paint pass draws through the
/// scope and cannot leak its transform or window past it, whatever path it
/// exits by.
pub struct SurfaceScope<'a, S: PaintSurface + ?Sized> {
    surface: &'a mut S,
    saved: SurfaceState,
}

impl<'a, S: PaintSurface + ?Sized> SurfaceScope<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        let saved = surface.state();
        Self { surface, saved }
    }
}

impl<S: PaintSurface + ?Sized> Deref for SurfaceScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: PaintSurface + ?Sized> DerefMut for SurfaceScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: PaintSurface + ?Sized> Drop for SurfaceScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore(self.saved);
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};

#[cfg(test)]
mod tests {
    use super::{PaintSurface, RecordingSurface, SurfaceScope};
    use crate::core::{Rect, ViewTransform};

    #[test]
    fn scope_restores_state_on_drop() {
        let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 100.0, 50.0));
        let before = surface.state();
        {
            let mut scope = SurfaceScope::new(&mut surface);
            scope.set_transform(ViewTransform::IDENTITY.scale(-1.0, 2.0));
            scope.set_window(Rect::new(5.0, 5.0, 1.0, 1.0));
            assert_ne!(scope.state(), before);
        }
        assert_eq!(surface.state(), before);
    }
}
