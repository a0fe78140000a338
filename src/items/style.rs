use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Brush, Color, LineStrokeStyle, Pen};

/// Stroke and fill of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    pub pen: Pen,
    pub brush: Brush,
}

impl ItemStyle {
    #[must_use]
    pub const fn new(pen: Pen, brush: Brush) -> Self {
        Self { pen, brush }
    }

    /// Recolors both stroke and fill, keeping widths and patterns.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.pen.color = color;
        self.brush.color = color;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        self.pen.validate()?;
        self.brush.color.validate()
    }
}

/// Per-variant styles applied to items created through
/// [`ChartData::create_item`](crate::data::ChartData::create_item).
///
/// Serializable so hosts can keep chart themes next to their own settings;
/// missing fields fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyleConfig {
    #[serde(default = "default_polygon_style")]
    pub polygon: ItemStyle,
    #[serde(default = "default_trajectory_style")]
    pub trajectory: ItemStyle,
    #[serde(default = "default_profile_style")]
    pub profile: ItemStyle,
    #[serde(default = "default_point_marker_style")]
    pub point_marker: ItemStyle,
    #[serde(default = "default_zero_point_style")]
    pub zero_point: ItemStyle,
}

impl Default for ChartStyleConfig {
    fn default() -> Self {
        Self {
            polygon: default_polygon_style(),
            trajectory: default_trajectory_style(),
            profile: default_profile_style(),
            point_marker: default_point_marker_style(),
            zero_point: default_zero_point_style(),
        }
    }
}

impl ChartStyleConfig {
    #[must_use]
    pub fn with_polygon(mut self, style: ItemStyle) -> Self {
        self.polygon = style;
        self
    }

    #[must_use]
    pub fn with_trajectory(mut self, style: ItemStyle) -> Self {
        self.trajectory = style;
        self
    }

    #[must_use]
    pub fn with_profile(mut self, style: ItemStyle) -> Self {
        self.profile = style;
        self
    }

    #[must_use]
    pub fn with_point_marker(mut self, style: ItemStyle) -> Self {
        self.point_marker = style;
        self
    }

    /// Sets the style of the first point of point-marker items.
    #[must_use]
    pub fn with_zero_point(mut self, style: ItemStyle) -> Self {
        self.zero_point = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, style) in [
            ("polygon", self.polygon),
            ("trajectory", self.trajectory),
            ("profile", self.profile),
            ("point_marker", self.point_marker),
            ("zero_point", self.zero_point),
        ] {
            style
                .validate()
                .map_err(|err| ChartError::InvalidData(format!("{name} style: {err}")))?;
        }
        Ok(())
    }

    /// Parses and validates a JSON style config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|err| {
            ChartError::InvalidData(format!("failed to parse style config: {err}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ChartError::InvalidData(format!("failed to serialize style config: {err}"))
        })
    }
}

fn default_polygon_style() -> ItemStyle {
    ItemStyle::new(
        Pen::new(Color::BLUE, 1.0, LineStrokeStyle::Dashed),
        Brush::none(Color::BLUE),
    )
}

fn default_trajectory_style() -> ItemStyle {
    ItemStyle::new(Pen::solid(Color::BLUE, 1.0), Brush::solid(Color::BLUE))
}

fn default_profile_style() -> ItemStyle {
    ItemStyle::new(
        Pen::solid(Color::DARK_GREEN, 1.0),
        Brush::solid(Color::GREEN),
    )
}

fn default_point_marker_style() -> ItemStyle {
    ItemStyle::new(Pen::solid(Color::RED, 1.0), Brush::solid(Color::RED))
}

fn default_zero_point_style() -> ItemStyle {
    ItemStyle::new(Pen::solid(Color::GREEN, 1.0), Brush::solid(Color::GREEN))
}

#[cfg(test)]
mod tests {
    use super::{ChartStyleConfig, ItemStyle};
    use crate::render::{BrushStyle, Color, LineStrokeStyle};

    #[test]
    fn defaults_match_layer_conventions() {
        let config = ChartStyleConfig::default();
        assert_eq!(config.polygon.pen.style, LineStrokeStyle::Dashed);
        assert_eq!(config.polygon.brush.style, BrushStyle::None);
        assert_eq!(config.profile.pen.color, Color::DARK_GREEN);
        assert_eq!(config.profile.brush.color, Color::GREEN);
        assert_eq!(config.point_marker.brush.color, Color::RED);
        assert_eq!(config.zero_point.pen.color, Color::GREEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{
            "trajectory": {
                "pen": { "color": { "red": 1.0, "green": 0.0, "blue": 1.0, "alpha": 1.0 }, "width": 2.0 },
                "brush": { "color": { "red": 1.0, "green": 0.0, "blue": 1.0, "alpha": 1.0 } }
            }
        }"#;
        let config = ChartStyleConfig::from_json_str(json).expect("parse config");
        assert_eq!(config.trajectory.pen.width, 2.0);
        assert_eq!(config.trajectory.pen.style, LineStrokeStyle::Solid);
        assert_eq!(config.polygon, ChartStyleConfig::default().polygon);

        let text = config.to_json_string().expect("serialize");
        let reparsed = ChartStyleConfig::from_json_str(&text).expect("reparse");
        assert_eq!(reparsed, config);
    }

    #[test]
    fn invalid_colors_are_rejected_with_variant_name() {
        let defaults = ChartStyleConfig::default();
        let recolored: ItemStyle = defaults.profile.with_color(Color::rgb(2.0, 0.0, 0.0));
        let err = defaults
            .with_profile(recolored)
            .validate()
            .expect_err("out of range color");
        assert!(err.to_string().contains("profile"));
    }
}
