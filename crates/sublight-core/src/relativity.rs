//! Special-relativity helpers for linear motion.
//!
//! Momentum is the authoritative quantity: velocity is always derived from
//! it via `v = p / sqrt(m² + |p|²/c²)`, which makes `|v| < c` an algebraic
//! identity for any finite momentum. There is no speed clamp anywhere in
//! the linear pipeline.
//!
//! All functions are pure and stateless. `mass > 0` and `c > 0` are
//! configuration invariants enforced by [`crate::config`]; they are not
//! re-checked here.

use glam::DVec2;

/// Euler update of momentum under a world-frame force: `p + F·dt`.
pub fn update_momentum(p: DVec2, force: DVec2, dt: f64) -> DVec2 {
    p + force * dt
}

/// Lorentz factor implied by a momentum: `γ = sqrt(1 + |p|²/(m²c²))`.
pub fn gamma_from_momentum(p: DVec2, mass_kg: f64, c: f64) -> f64 {
    let p2 = p.length_squared();
    (1.0 + p2 / (mass_kg * mass_kg * c * c)).sqrt()
}

/// Recover velocity and the Lorentz factor from a momentum.
///
/// `v = p / sqrt(m² + |p|²/c²)`, so the returned speed is strictly below
/// `c` for any finite `p`.
pub fn velocity_from_momentum(p: DVec2, mass_kg: f64, c: f64) -> (DVec2, f64) {
    let p2 = p.length_squared();
    let m2 = mass_kg * mass_kg;
    let c2 = c * c;
    let denom = (m2 + p2 / c2).sqrt();
    let velocity = p / denom;
    let gamma = (1.0 + p2 / (m2 * c2)).sqrt();
    (velocity, gamma)
}

/// Lorentz factor for a given speed: `γ = 1/sqrt(1 − v²/c²)`.
///
/// Used where only a speed is at hand (braking solver, HUD telemetry, the
/// rim-speed correction for rotational inertia). The ratio is pinned just
/// below 1 so a derived speed arbitrarily close to `c` stays finite.
pub fn gamma_from_speed(speed: f64, c: f64) -> f64 {
    let beta = (speed.abs() / c).min(crate::constants::RIM_BETA_MAX);
    1.0 / (1.0 - beta * beta).sqrt()
}
