//! Small DSP math helpers

use std::f64::consts::PI;

/// Wrap an angle into (−π, π]
#[inline]
pub fn wrap_to_pi(angle: f64) -> f64 {
    let a = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if a <= -PI {
        a + 2.0 * PI
    } else {
        a
    }
}

/// Compute phase of complex number in radians
#[inline]
pub fn phase(i: f64, q: f64) -> f64 {
    q.atan2(i)
}
