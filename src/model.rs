use std::collections::BTreeMap;

use glam::{Mat4, Vec3};

use crate::{error::LuxrigResult, fixture::FixtureSpec, geometry};

/// One addressable pixel of a built fixture.
///
/// `index` is the pixel's position in the color buffer; it equals the
/// point's path-order position along the outline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelPoint {
    pub index: usize,
    pub position: Vec3,
}

/// A fixture resolved to world-space pixel positions plus its export
/// metadata.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FixtureModel {
    pub points: Vec<ModelPoint>,
    pub metadata: BTreeMap<String, String>,
}

impl FixtureModel {
    /// Run the geometry engine for `spec` placed at `base`.
    pub fn build(spec: &FixtureSpec, base: Mat4) -> LuxrigResult<Self> {
        let mut positions = vec![Vec3::ZERO; spec.point_count];
        geometry::compute_points(spec, base, &mut positions)?;
        let points = positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| ModelPoint { index, position })
            .collect();
        Ok(Self {
            points,
            metadata: spec.metadata(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
