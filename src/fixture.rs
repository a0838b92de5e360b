use std::collections::BTreeMap;

use crate::error::{LuxrigError, LuxrigResult};

/// Upper bound on addressable points in a single fixture.
pub const MAX_POINTS: usize = 4096;

/// Shape and pixel density of a flat-ended capsule fixture.
///
/// `width` and `height` are in inches. `point_count` is the number of
/// individually addressable pixels distributed along the outline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FixtureSpec {
    pub width: f32,
    pub height: f32,
    pub point_count: usize,
}

impl FixtureSpec {
    pub fn new(width: f32, height: f32, point_count: usize) -> Self {
        Self {
            width,
            height,
            point_count,
        }
    }

    pub fn validate(&self) -> LuxrigResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(LuxrigError::invalid_geometry(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(LuxrigError::invalid_geometry(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if self.point_count < 1 {
            return Err(LuxrigError::invalid_geometry(
                "point count must be at least 1",
            ));
        }
        if self.point_count > MAX_POINTS {
            return Err(LuxrigError::invalid_geometry(format!(
                "point count {} exceeds maximum {MAX_POINTS}",
                self.point_count
            )));
        }
        Ok(())
    }

    /// String key/value pairs for model-metadata export.
    pub fn metadata(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("numPoints".to_string(), self.point_count.to_string()),
            ("width".to_string(), self.width.to_string()),
            ("height".to_string(), self.height.to_string()),
        ])
    }
}

impl Default for FixtureSpec {
    fn default() -> Self {
        Self {
            width: 15.0,
            height: 5.0,
            point_count: 30,
        }
    }
}
