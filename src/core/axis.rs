use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Read-only view of one chart axis, as consumed by the paint pass.
///
/// Implementations own zooming, panning and pixel conversion; the chart data
/// model only needs the current mapping parameters. `span` and `pixel_span`
/// must be strictly positive.
pub trait ChartAxis {
    fn offset(&self) -> f64;
    fn span(&self) -> f64;
    fn pixel_span(&self) -> f64;
    fn shift(&self) -> f64;
    fn is_inverted(&self) -> bool;

    /// Logical units covered by one device pixel.
    fn units_per_pixel(&self) -> f64 {
        self.span() / self.pixel_span()
    }
}

impl<A: ChartAxis + ?Sized> ChartAxis for &A {
    fn offset(&self) -> f64 {
        (**self).offset()
    }

    fn span(&self) -> f64 {
        (**self).span()
    }

    fn pixel_span(&self) -> f64 {
        (**self).pixel_span()
    }

    fn shift(&self) -> f64 {
        (**self).shift()
    }

    fn is_inverted(&self) -> bool {
        (**self).is_inverted()
    }
}

/// Plain axis state snapshot.
///
/// Useful for headless rendering and for hosts that keep axis parameters in
/// their own model and only hand a copy to the paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisState {
    pub offset: f64,
    pub span: f64,
    pub pixel_span: f64,
    #[serde(default)]
    pub shift: f64,
    #[serde(default)]
    pub inverted: bool,
}

impl AxisState {
    /// Creates a non-inverted, unshifted axis.
    pub fn new(offset: f64, span: f64, pixel_span: f64) -> ChartResult<Self> {
        let axis = Self {
            offset,
            span,
            pixel_span,
            shift: 0.0,
            inverted: false,
        };
        axis.validate("unnamed")?;
        Ok(axis)
    }

    #[must_use]
    pub fn with_shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Checks the positivity and finiteness invariants; `axis` names the axis
    /// in the returned error.
    pub fn validate(&self, axis: &'static str) -> ChartResult<()> {
        validate_axis(self, axis)
    }
}

/// Rejects axes whose offset or shift is not finite, or whose span or pixel
/// span is not finite and strictly positive. NaN fails every check.
pub fn validate_axis<A: ChartAxis + ?Sized>(axis: &A, name: &'static str) -> ChartResult<()> {
    if !axis.offset().is_finite() || !axis.shift().is_finite() {
        return Err(ChartError::InvalidAxis {
            axis: name,
            reason: "offset and shift must be finite".to_owned(),
        });
    }
    let span = axis.span();
    if !(span.is_finite() && span > 0.0) {
        return Err(ChartError::InvalidAxis {
            axis: name,
            reason: format!("span must be finite and > 0, got {span}"),
        });
    }
    let pixel_span = axis.pixel_span();
    if !(pixel_span.is_finite() && pixel_span > 0.0) {
        return Err(ChartError::InvalidAxis {
            axis: name,
            reason: format!("pixel span must be finite and > 0, got {pixel_span}"),
        });
    }
    Ok(())
}

impl ChartAxis for AxisState {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn span(&self) -> f64 {
        self.span
    }

    fn pixel_span(&self) -> f64 {
        self.pixel_span
    }

    fn shift(&self) -> f64 {
        self.shift
    }

    fn is_inverted(&self) -> bool {
        self.inverted
    }
}
