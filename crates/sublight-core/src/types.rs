//! Fundamental geometric and simulation types.
//!
//! The flight model is planar: positions and velocities are `glam::DVec2`
//! in the world frame (meters, meters/second), orientation is a single yaw
//! angle in radians wrapped to (−π, π].

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Wrap an angle to (−π, π]. Non-finite input wraps to 0.
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let mut a = angle % std::f64::consts::TAU;
    if a <= -std::f64::consts::PI {
        a += std::f64::consts::TAU;
    }
    if a > std::f64::consts::PI {
        a -= std::f64::consts::TAU;
    }
    a
}

/// Unit vector along the ship's nose for a given orientation.
pub fn heading_vec(orientation: f64) -> DVec2 {
    DVec2::new(orientation.cos(), orientation.sin())
}

/// Unit vector to the ship's right for a given orientation.
pub fn right_vec(orientation: f64) -> DVec2 {
    DVec2::new(orientation.sin(), -orientation.cos())
}

/// Slip angle β: angle between the velocity vector and the nose heading,
/// measured in the body frame (positive = drifting to the right).
pub fn slip_angle(velocity: DVec2, orientation: f64) -> f64 {
    let forward_speed = velocity.dot(heading_vec(orientation));
    let right_speed = velocity.dot(right_vec(orientation));
    if forward_speed == 0.0 && right_speed == 0.0 {
        return 0.0;
    }
    right_speed.atan2(forward_speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn wrap_angle_stays_in_half_open_interval() {
        for k in -20..20 {
            let a = wrap_angle(0.35 + k as f64 * 1.7);
            assert!(a > -PI && a <= PI, "wrapped angle {a} out of range");
        }
        assert_eq!(wrap_angle(f64::NAN), 0.0);
        assert_eq!(wrap_angle(f64::INFINITY), 0.0);
        assert!((wrap_angle(PI + 0.25) - (0.25 - PI)).abs() < 1e-12);
    }

    #[test]
    fn slip_angle_sign_convention() {
        // Facing +x, drifting toward -y (body right) => positive slip.
        let beta = slip_angle(DVec2::new(10.0, -1.0), 0.0);
        assert!(beta > 0.0);
        // Pure forward motion => zero slip.
        assert_eq!(slip_angle(DVec2::new(10.0, 0.0), 0.0), 0.0);
        // Zero velocity => zero slip, not NaN.
        assert_eq!(slip_angle(DVec2::ZERO, 1.2), 0.0);
    }
}
