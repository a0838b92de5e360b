//! Point placement for flat-ended capsule fixtures.
//!
//! Points are distributed along the shape's outline by driving a
//! [`TransformStack`] cursor and reading its origin after each move, so
//! arcs and straight runs share the same three primitives. Output order is
//! path order: index 0 at one end of the outline, the last index at the
//! other, which lets patterns that fill from index 0 sweep physically
//! along the fixture.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Vec3};

use crate::{
    error::{LuxrigError, LuxrigResult},
    fixture::FixtureSpec,
    transform::TransformStack,
};

/// Per-invocation layout constants, selected once by aspect ratio.
#[derive(Clone, Copy, Debug)]
enum PathLayout {
    Wide(WideLayout),
    Narrow(NarrowLayout),
}

/// Two quarter-circle corners of radius `height` joined by a straight
/// bottom segment.
#[derive(Clone, Copy, Debug)]
struct WideLayout {
    width: f32,
    radius: f32,
    line_length: f32,
    spacing: f32,
    first_curve_points: usize,
    line_points: usize,
    second_curve_points: usize,
}

/// No usable straight segment; a single half-turn sweep whose pivot
/// distance grows, then shrinks.
#[derive(Clone, Copy, Debug)]
struct NarrowLayout {
    radius: f32,
    rotation: f32,
    step: f32,
}

impl PathLayout {
    /// Derive layout constants. Requires `point_count >= 2`; the single
    /// point case never reaches a layout.
    fn for_spec(spec: &FixtureSpec) -> Self {
        debug_assert!(spec.point_count >= 2);
        let n = spec.point_count;
        if spec.width > 2.0 * spec.height {
            let radius = spec.height;
            let curve_length = FRAC_PI_2 * radius;
            let line_length = spec.width - 2.0 * radius;
            let total_length = 2.0 * curve_length + line_length;
            let spacing = total_length / (n - 1) as f32;
            let first_curve_points = (curve_length / spacing) as usize;
            let line_points = (line_length / spacing) as usize;
            // The second curve absorbs all rounding remainder, so the
            // three segment counts always sum to exactly n.
            let second_curve_points = n - first_curve_points - line_points;
            Self::Wide(WideLayout {
                width: spec.width,
                radius,
                line_length,
                spacing,
                first_curve_points,
                line_points,
                second_curve_points,
            })
        } else {
            let radius = spec.width / 2.0;
            Self::Narrow(NarrowLayout {
                radius,
                rotation: PI / (n - 1) as f32,
                step: (spec.height - radius) / (n as f32 / 2.0),
            })
        }
    }
}

/// Compute the world-space position of every point of `spec`, writing them
/// in path order into `out`.
///
/// `base` is the fixture's placement in world space. `out` must be sized to
/// exactly `spec.point_count`; every index is overwritten and nothing else
/// is touched. On error no index is written.
#[tracing::instrument(skip(base, out))]
pub fn compute_points(spec: &FixtureSpec, base: Mat4, out: &mut [Vec3]) -> LuxrigResult<()> {
    spec.validate()?;
    if out.len() != spec.point_count {
        return Err(LuxrigError::validation(format!(
            "output length {} does not match point count {}",
            out.len(),
            spec.point_count
        )));
    }

    let mut transform = TransformStack::with_base(base);
    if spec.point_count == 1 {
        // A lone point sits at the fixture's reference origin; deriving a
        // layout would divide by point_count - 1.
        out[0] = transform.origin();
        return Ok(());
    }

    let layout = PathLayout::for_spec(spec);
    tracing::debug!(?layout, "derived path layout");
    match layout {
        PathLayout::Wide(wide) => trace_wide(&wide, &mut transform, out),
        PathLayout::Narrow(narrow) => {
            trace_narrow(&narrow, &mut transform, out);
            Ok(())
        }
    }
}

fn trace_wide(layout: &WideLayout, t: &mut TransformStack, out: &mut [Vec3]) -> LuxrigResult<()> {
    let r = layout.radius;

    // Drawing right to left; start at the left edge of the midline.
    t.translate_x(-layout.width / 2.0);
    t.push();

    if layout.first_curve_points > 0 {
        let rotation = FRAC_PI_2 / layout.first_curve_points as f32;
        for p in &mut out[..layout.first_curve_points] {
            *p = t.origin();
            t.translate_x(r).rotate_z(rotation).translate_x(-r);
        }
    }

    // Spacing rarely lands exactly on the corner, so restart the cursor at
    // the line's true start.
    t.pop()?;
    t.push();
    t.translate_x(r).translate_y(-r);
    let line_end = layout.first_curve_points + layout.line_points;
    for p in &mut out[layout.first_curve_points..line_end] {
        *p = t.origin();
        t.translate_x(layout.spacing);
    }

    t.pop()?;
    t.translate_x(r + layout.line_length).translate_y(-r);
    if layout.second_curve_points > 0 {
        let rotation = FRAC_PI_2 / layout.second_curve_points as f32;
        for p in &mut out[line_end..] {
            *p = t.origin();
            t.translate_y(r).rotate_z(rotation).translate_y(-r);
        }
    }
    Ok(())
}

fn trace_narrow(layout: &NarrowLayout, t: &mut TransformStack, out: &mut [Vec3]) {
    let mut current_rotation = 0.0f32;
    let mut total_step = layout.radius;

    // Rotate a quarter turn so the sweep starts at one flat end.
    t.rotate_z(-FRAC_PI_2);
    for p in out.iter_mut() {
        t.translate_y(-total_step);
        *p = t.origin();
        t.translate_y(total_step);
        t.rotate_z(layout.rotation);
        current_rotation += layout.rotation;
        // Points drift away from center through the first half of the
        // sweep and back toward it through the second half.
        if current_rotation < FRAC_PI_2 {
            total_step += layout.step;
        } else {
            total_step -= layout.step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_for(spec: &FixtureSpec) -> Vec<Vec3> {
        let mut out = vec![Vec3::ZERO; spec.point_count];
        compute_points(spec, Mat4::IDENTITY, &mut out).unwrap();
        out
    }

    #[test]
    fn wide_layout_counts_sum_to_point_count() {
        let spec = FixtureSpec::new(60.0, 10.0, 37);
        let PathLayout::Wide(wide) = PathLayout::for_spec(&spec) else {
            panic!("60x10 must be wide");
        };
        assert_eq!(
            wide.first_curve_points + wide.line_points + wide.second_curve_points,
            37
        );
        assert!(wide.second_curve_points >= 1);
    }

    #[test]
    fn wide_points_advance_monotonically_in_x() {
        let points = points_for(&FixtureSpec::new(100.0, 10.0, 50));
        for pair in points.windows(2) {
            assert!(
                pair[1].x > pair[0].x,
                "path backtracked: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn wide_first_point_is_left_edge() {
        let points = points_for(&FixtureSpec::new(100.0, 10.0, 50));
        assert!((points[0] - Vec3::new(-50.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn wide_line_segment_sits_on_the_bottom() {
        let spec = FixtureSpec::new(100.0, 10.0, 50);
        let PathLayout::Wide(wide) = PathLayout::for_spec(&spec) else {
            panic!("100x10 must be wide");
        };
        let points = points_for(&spec);
        let line = &points[wide.first_curve_points..wide.first_curve_points + wide.line_points];
        for p in line {
            assert!((p.y + 10.0).abs() < 1e-4, "line point off bottom: {p:?}");
        }
        // Consecutive line points sit one spacing apart.
        for pair in line.windows(2) {
            assert!(((pair[1].x - pair[0].x) - wide.spacing).abs() < 1e-4);
        }
    }

    #[test]
    fn narrow_sweep_keeps_a_constant_winding() {
        let points = points_for(&FixtureSpec::new(10.0, 20.0, 30));
        for pair in points.windows(2) {
            let cross = pair[0].x * pair[1].y - pair[0].y * pair[1].x;
            assert!(cross > 0.0, "sweep reversed: {:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn narrow_sweep_reaches_fixture_height_mid_path() {
        let spec = FixtureSpec::new(10.0, 20.0, 31);
        let points = points_for(&spec);
        let deepest = points
            .iter()
            .map(|p| p.length())
            .fold(0.0f32, f32::max);
        // The pivot distance peaks at roughly the fixture height once the
        // sweep has accumulated a quarter turn.
        assert!((deepest - spec.height).abs() < 1.0, "deepest {deepest}");
    }

    #[test]
    fn square_aspect_ratio_selects_narrow_case() {
        // width == 2 * height is narrow per the strict > comparison.
        let spec = FixtureSpec::new(20.0, 10.0, 16);
        assert!(matches!(
            PathLayout::for_spec(&spec),
            PathLayout::Narrow(_)
        ));
        let points = points_for(&spec);
        assert_eq!(points.len(), 16);
        assert!(points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn single_point_sits_at_reference_origin() {
        for spec in [
            FixtureSpec::new(100.0, 10.0, 1),
            FixtureSpec::new(10.0, 20.0, 1),
        ] {
            let base = Mat4::from_translation(Vec3::new(3.0, -4.0, 5.0));
            let mut out = vec![Vec3::ZERO; 1];
            compute_points(&spec, base, &mut out).unwrap();
            assert!((out[0] - Vec3::new(3.0, -4.0, 5.0)).length() < 1e-5);
        }
    }

    #[test]
    fn mismatched_output_length_is_a_validation_error() {
        let spec = FixtureSpec::new(100.0, 10.0, 50);
        let mut out = vec![Vec3::ZERO; 49];
        let err = compute_points(&spec, Mat4::IDENTITY, &mut out).unwrap_err();
        assert!(matches!(err, LuxrigError::Validation(_)));
    }

    #[test]
    fn invalid_spec_leaves_output_untouched() {
        let sentinel = Vec3::new(7.0, 7.0, 7.0);
        for spec in [
            FixtureSpec::new(0.0, 10.0, 4),
            FixtureSpec::new(100.0, -5.0, 4),
        ] {
            let mut out = vec![sentinel; 4];
            let err = compute_points(&spec, Mat4::IDENTITY, &mut out).unwrap_err();
            assert!(matches!(err, LuxrigError::InvalidGeometry(_)));
            assert!(out.iter().all(|p| *p == sentinel));
        }
    }

    #[test]
    fn base_transform_carries_through_both_cases() {
        let base = Mat4::from_translation(Vec3::new(0.0, 0.0, 12.0));
        for spec in [
            FixtureSpec::new(100.0, 10.0, 20),
            FixtureSpec::new(10.0, 20.0, 20),
        ] {
            let mut out = vec![Vec3::ZERO; 20];
            compute_points(&spec, base, &mut out).unwrap();
            assert!(out.iter().all(|p| (p.z - 12.0).abs() < 1e-4));
        }
    }
}
