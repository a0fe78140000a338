use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const DARK_GREEN: Self = Self::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash style of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStrokeStyle {
    /// On/off lengths in multiples of the stroke width; empty for solid lines.
    #[must_use]
    pub const fn dash_pattern(self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[4.0, 2.0],
            Self::Dotted => &[1.0, 2.0],
        }
    }
}

/// Stroke description.
///
/// `width` is the base width; items rescale it every frame so the painted
/// outline keeps a constant device thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    #[serde(default)]
    pub style: LineStrokeStyle,
}

impl Pen {
    #[must_use]
    pub const fn new(color: Color, width: f64, style: LineStrokeStyle) -> Self {
        Self {
            color,
            width,
            style,
        }
    }

    #[must_use]
    pub const fn solid(color: Color, width: f64) -> Self {
        Self::new(color, width, LineStrokeStyle::Solid)
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChartError::InvalidData(
                "pen width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushStyle {
    /// Outline only.
    None,
    #[default]
    Solid,
}

/// Fill description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub color: Color,
    #[serde(default)]
    pub style: BrushStyle,
}

impl Brush {
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            style: BrushStyle::Solid,
        }
    }

    /// Brush that keeps its color but paints nothing.
    #[must_use]
    pub const fn none(color: Color) -> Self {
        Self {
            color,
            style: BrushStyle::None,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.style != BrushStyle::None
    }
}

/// Rule deciding which points are inside a (possibly self-intersecting)
/// polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    /// Inside when a ray from the point crosses an odd number of edges.
    #[default]
    EvenOdd,
    /// Inside when the winding number is non-zero.
    NonZero,
}

#[cfg(test)]
mod tests {
    use super::{Brush, Color, FillRule, LineStrokeStyle, Pen};

    #[test]
    fn style_validation_rejects_out_of_range_values() {
        assert!(Color::rgba(0.0, 0.0, 1.5, 1.0).validate().is_err());
        assert!(Pen::solid(Color::RED, -1.0).validate().is_err());
        assert!(Pen::new(Color::BLUE, 1.0, LineStrokeStyle::Dashed).validate().is_ok());
        assert!(!Brush::none(Color::BLUE).is_visible());
        assert_eq!(LineStrokeStyle::Dashed.dash_pattern(), &[4.0, 2.0]);
        assert_eq!(FillRule::default(), FillRule::EvenOdd);
    }
}
