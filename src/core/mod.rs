pub mod axis;
pub mod bounds;
pub mod transform;
pub mod types;

pub use axis::{AxisState, ChartAxis, validate_axis};
pub use bounds::BoundingBox;
pub use transform::{ViewSetup, ViewTransform, window_to_viewport};
pub use types::{Point, Rect, Viewport};
