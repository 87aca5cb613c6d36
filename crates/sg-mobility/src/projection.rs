//! Pure projection functions mapping kinematic parameters to a Cartesian
//! position.  No clamping, no normalisation: angles grow without bound and
//! coordinates are unbounded reals.

use sg_core::Vector3;

/// Point on a sphere of `radius` at elevation `angle_x` and azimuth `angle_y`:
///
/// ```text
/// x = r · cos(angle_x) · cos(angle_y)
/// y = r · cos(angle_x) · sin(angle_y)
/// z = r · sin(angle_x)
/// ```
#[inline]
pub fn spherical_to_cartesian(radius: f64, angle_x: f64, angle_y: f64) -> Vector3 {
    let (sin_x, cos_x) = angle_x.sin_cos();
    let (sin_y, cos_y) = angle_y.sin_cos();
    Vector3::new(radius * cos_x * cos_y, radius * cos_x * sin_y, radius * sin_x)
}

/// One linear integration step: `position + velocity · dt`, component-wise.
#[inline]
pub fn linear_step(position: Vector3, velocity: Vector3, dt: f64) -> Vector3 {
    position + velocity * dt
}

/// One angular integration step.  `rates.x` drives `angle_x`, `rates.y`
/// drives `angle_y`; `rates.z` is ignored.
///
/// Returns the new `(angle_x, angle_y)`.
#[inline]
pub fn orbital_step(angle_x: f64, angle_y: f64, rates: Vector3, dt: f64) -> (f64, f64) {
    (angle_x + rates.x * dt, angle_y + rates.y * dt)
}
