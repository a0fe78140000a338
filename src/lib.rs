//! chart-data: layered chart data model.
//!
//! A [`ChartData`] owns polygons, trajectories, height profiles and point
//! markers, aggregates their bounds for axis auto-scaling and paints them onto
//! any [`render::PaintSurface`] through a view derived from the chart axes.

pub mod core;
pub mod data;
pub mod error;
pub mod items;
pub mod render;
pub mod telemetry;

pub use data::{ChartData, ItemId};
pub use error::{ChartError, ChartResult};
pub use items::{ChartItem, DataItem, ItemKind};
