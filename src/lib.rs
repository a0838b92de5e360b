#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod fill;
pub mod fixture;
pub mod geometry;
pub mod model;
pub mod transform;

pub use color::{MAX_SWATCH_COLORS, Palette, Rgb8};
pub use error::{LuxrigError, LuxrigResult};
pub use fill::{ColorMode, FillPattern};
pub use fixture::{FixtureSpec, MAX_POINTS};
pub use geometry::compute_points;
pub use model::{FixtureModel, ModelPoint};
pub use transform::{Axis, TransformStack};
