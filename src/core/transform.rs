use crate::core::axis::ChartAxis;
use crate::core::types::{Point, Rect, Viewport};
use crate::error::{ChartError, ChartResult};

/// 2D affine transform in row-vector convention:
///
/// ```text
/// x' = m11 * x + m21 * y + dx
/// y' = m12 * x + m22 * y + dy
/// ```
///
/// `translate` and `scale` move the coordinate system, i.e. they apply to
/// points *before* the existing transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    #[must_use]
    pub fn translate(mut self, tx: f64, ty: f64) -> Self {
        self.dx += tx * self.m11 + ty * self.m21;
        self.dy += tx * self.m12 + ty * self.m22;
        self
    }

    #[must_use]
    pub fn scale(mut self, sx: f64, sy: f64) -> Self {
        self.m11 *= sx;
        self.m12 *= sx;
        self.m21 *= sy;
        self.m22 *= sy;
        self
    }

    /// Transform applying `self` first and `next` afterwards.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            m11: self.m11 * next.m11 + self.m12 * next.m21,
            m12: self.m11 * next.m12 + self.m12 * next.m22,
            m21: self.m21 * next.m11 + self.m22 * next.m21,
            m22: self.m21 * next.m12 + self.m22 * next.m22,
            dx: self.dx * next.m11 + self.dy * next.m21 + next.dx,
            dy: self.dx * next.m12 + self.dy * next.m22 + next.dy,
        }
    }

    #[must_use]
    pub fn map(self, point: Point) -> Point {
        Point::new(
            self.m11 * point.x + self.m21 * point.y + self.dx,
            self.m12 * point.x + self.m22 * point.y + self.dy,
        )
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

/// Maps the logical `window` rectangle onto a device `viewport` anchored at
/// the surface origin.
pub fn window_to_viewport(window: Rect, viewport: Viewport) -> ChartResult<ViewTransform> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidData(format!(
            "viewport must be non-empty, got {}x{}",
            viewport.width, viewport.height
        )));
    }
    if !window.is_finite() || window.width == 0.0 || window.height == 0.0 {
        return Err(ChartError::InvalidData(
            "window must be finite with non-zero size".to_owned(),
        ));
    }

    let sx = f64::from(viewport.width) / window.width;
    let sy = f64::from(viewport.height) / window.height;
    Ok(ViewTransform {
        m11: sx,
        m12: 0.0,
        m21: 0.0,
        m22: sy,
        dx: -window.x * sx,
        dy: -window.y * sy,
    })
}

/// Transform and device window applied for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSetup {
    pub transform: ViewTransform,
    pub window: Rect,
}

impl ViewSetup {
    /// Builds the logical view from the current axis state.
    ///
    /// The transform translates by the axis offsets and then flips inverted
    /// axes by a sign change; the window sits at the axis shifts with the axis
    /// spans as size. Logical geometry is drawn as-is through this pair.
    #[must_use]
    pub fn from_axes(x_axis: &impl ChartAxis, y_axis: &impl ChartAxis) -> Self {
        let x_sign = if x_axis.is_inverted() { -1.0 } else { 1.0 };
        let y_sign = if y_axis.is_inverted() { -1.0 } else { 1.0 };

        let transform = ViewTransform::IDENTITY
            .translate(x_axis.offset(), y_axis.offset())
            .scale(x_sign, y_sign);
        let window = Rect::new(x_axis.shift(), y_axis.shift(), x_axis.span(), y_axis.span());

        Self { transform, window }
    }
}
