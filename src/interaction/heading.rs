use std::f32::consts::TAU;

use crate::interaction::Waypoint;
use crate::math::{Mat4f, Vec4f};

/// Angle in `[0, 2π)` from the viewer to `target`, measured in the view space
/// given by `view` (forward is +Z there).
///
/// Negative raw headings map to their magnitude and positive ones to
/// `2π - raw`. The indicator is then rotated by the negated result.
/// The arrow mesh is authored against this convention.
pub fn compute_heading(view: &Mat4f, target: Waypoint) -> f32 {
    let v = view * Vec4f::new(target.x, 0.0, target.z, 1.0);
    let raw = v.x.atan2(v.z);

    let angle = if raw < 0.0 {
        raw.abs()
    } else if raw > 0.0 {
        TAU - raw
    } else {
        0.0
    };
    // 2π - tiny rounds up to 2π in f32
    if angle >= TAU { 0.0 } else { angle }
}

/// Yaw to apply to the indicator mesh so it points at the target.
pub fn indicator_yaw(view: &Mat4f, target: Waypoint) -> f32 {
    -compute_heading(view, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Mat4, Vec3f};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn target_ahead_is_zero() {
        let view = Mat4::identity();
        assert_eq!(compute_heading(&view, Waypoint::new(0.0, 5.0)), 0.0);
    }

    #[test]
    fn target_behind_is_pi() {
        let view = Mat4::identity();
        assert!(approx(compute_heading(&view, Waypoint::new(0.0, -5.0)), PI));
    }

    #[test]
    fn left_and_right_are_asymmetric() {
        let view = Mat4::identity();
        // atan2(1, 0) = π/2 -> 2π - π/2
        assert!(approx(compute_heading(&view, Waypoint::new(1.0, 0.0)), 3.0 * FRAC_PI_2));
        // atan2(-1, 0) = -π/2 -> π/2
        assert!(approx(compute_heading(&view, Waypoint::new(-1.0, 0.0)), FRAC_PI_2));
    }

    #[test]
    fn view_translation_is_applied_before_the_angle() {
        // Viewer standing at x = 10, target straight ahead of it.
        let view = Mat4::new_translation(&Vec3f::new(-10.0, 0.0, 0.0));
        assert_eq!(compute_heading(&view, Waypoint::new(10.0, 3.0)), 0.0);
    }

    #[test]
    fn viewer_on_target_is_degenerate_zero() {
        let view = Mat4::new_translation(&Vec3f::new(-4.0, -1.7, -2.0));
        assert_eq!(compute_heading(&view, Waypoint::new(4.0, 2.0)), 0.0);
    }

    #[test]
    fn output_stays_in_range() {
        let yaws = [0.0f32, 0.3, 1.0, 2.5, 3.1, 4.0, 5.9, -0.7];
        let targets = [
            Waypoint::new(97.0, 106.0),
            Waypoint::new(-3.0, 0.0001),
            Waypoint::new(0.0, -1.0),
            Waypoint::new(1e-7, 10.0),
            Waypoint::new(-1e-7, 10.0),
        ];
        for yaw in yaws {
            let rot = Mat4::from_axis_angle(&Vec3f::y_axis(), yaw);
            for target in targets {
                let heading = compute_heading(&rot, target);
                assert!((0.0..TAU).contains(&heading), "{heading} out of range");
            }
        }
    }

    #[test]
    fn indicator_yaw_is_negated_heading() {
        let view = Mat4::identity();
        let target = Waypoint::new(-1.0, 0.0);
        assert!(approx(indicator_yaw(&view, target), -FRAC_PI_2));
    }
}
