//! Ship configuration and handling profiles.
//!
//! Everything here is immutable once a session starts: the integrator and
//! the control law only ever read these structs. Validation rejects
//! out-of-range values at construction instead of silently clamping deep
//! inside the control law.

use serde::{Deserialize, Serialize};

use crate::enums::AssistPreset;
use crate::errors::ConfigError;

/// Per-tick environment supplied by the hosting harness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimEnvironment {
    /// Timestep in seconds.
    pub dt_sec: f64,
    /// Configured universe speed limit (m/s).
    pub c_mps: f64,
    /// Scaling factor applied to the yaw moment of inertia.
    pub inertia_scale: f64,
}

impl Default for SimEnvironment {
    fn default() -> Self {
        Self {
            dt_sec: crate::constants::DT,
            c_mps: crate::constants::DEFAULT_C_MPS,
            inertia_scale: 1.0,
        }
    }
}

impl SimEnvironment {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt_sec > 0.0) {
            return Err(ConfigError::NonPositiveTimestep(self.dt_sec));
        }
        if !(self.c_mps > 0.0) {
            return Err(ConfigError::NonPositiveSpeedLimit(self.c_mps));
        }
        if !(self.inertia_scale > 0.0) {
            return Err(ConfigError::NonPositiveInertiaScale(self.inertia_scale));
        }
        Ok(())
    }
}

/// Hull dimensions used to derive inertia defaults and the yaw radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipGeometry {
    pub length_m: f64,
    pub width_m: f64,
}

impl ShipGeometry {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.length_m > 0.0) || !(self.width_m > 0.0) {
            return Err(ConfigError::DegenerateGeometry {
                length_m: self.length_m,
                width_m: self.width_m,
            });
        }
        Ok(())
    }

    /// Effective yaw radius for rim-speed relativistic effects:
    /// half of the largest planform dimension.
    pub fn yaw_radius_m(&self) -> f64 {
        0.5 * self.length_m.max(self.width_m)
    }
}

/// Moments of inertia about the body axes (kg·m²). The planar model only
/// uses `izz` (yaw); roll and pitch are carried for catalog fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InertiaTensor {
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
}

impl InertiaTensor {
    /// Rod-approximation defaults for a spacecraft hull:
    /// `I = k·m·L²` with k depending on the mass distribution axis.
    pub fn from_geometry(mass_kg: f64, geometry: &ShipGeometry) -> Self {
        let l2 = geometry.length_m * geometry.length_m;
        let w2 = geometry.width_m * geometry.width_m;
        Self {
            ixx: 0.08 * mass_kg * w2,
            iyy: 0.12 * mass_kg * l2,
            izz: 0.15 * mass_kg * l2,
        }
    }
}

/// Maximum force/torque capability per axis. The main drive and the
/// retro/RCS cluster are asymmetric: positive throttle draws on
/// `forward_kn`, negative throttle on `backward_kn`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThrustBudget {
    pub forward_kn: f64,
    pub backward_kn: f64,
    pub lateral_kn: f64,
    pub yaw_knm: f64,
}

/// Rate limits on commanded accelerations (jerk limiting).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JerkLimits {
    /// Forward-channel jerk limit (m/s³).
    pub forward_mps3: f64,
    /// Lateral-channel jerk limit (m/s³).
    pub lateral_mps3: f64,
    /// Yaw-channel jerk limit (rad/s³), the one shaping kept in Decoupled.
    pub angular_rps3: f64,
}

impl Default for JerkLimits {
    fn default() -> Self {
        Self {
            forward_mps3: 160.0,
            lateral_mps3: 120.0,
            angular_rps3: 6.0,
        }
    }
}

/// Braking behavior: time constants, deceleration g-targets, and the
/// boost sub-mode envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakeProfile {
    /// Time constant for driving body-frame velocity to zero (s).
    pub stop_time_s: f64,
    /// Time constant for driving angular velocity to zero (s).
    pub rot_stop_time_s: f64,
    /// Sustained deceleration ceiling in g.
    pub g_sustain: f64,
    /// Boosted deceleration ceiling in g.
    pub g_boost: f64,
    /// How long a boost lasts once triggered (s).
    pub boost_duration_s: f64,
    /// Cooldown after a boost before the next one is honored (s).
    pub boost_cooldown_s: f64,
}

impl Default for BrakeProfile {
    fn default() -> Self {
        Self {
            stop_time_s: 0.25,
            rot_stop_time_s: 0.15,
            g_sustain: 4.5,
            g_boost: 6.5,
            boost_duration_s: 3.5,
            boost_cooldown_s: 15.0,
        }
    }
}

/// Immutable control-law tuning for one ship.
///
/// Field ranges mirror the documented catalog ranges; `validate` rejects
/// anything outside them. There is deliberately no traction-control field:
/// this is vacuum flight, and the slip target must not be attenuated by
/// speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlingProfile {
    /// Display name reported in telemetry.
    pub name: String,
    /// Overall strength of the stabilization terms (damping + alignment).
    pub stab_gain: f64,
    /// Rotation damping gain (always on in Coupled mode).
    pub stab_damping: f64,
    /// Soft dead-zone: slip targets below this are progressively shrunk.
    pub slip_threshold_deg: f64,
    /// Hard bound on the slip target.
    pub slip_limit_deg: f64,
    /// Gain on the slip error before it becomes a lateral correction.
    pub slip_correction_gain: f64,
    /// How much turn input feeds the slip target (nose-follow mix).
    pub nose_follow_input: f64,
    /// Lead term gain, active only while actively turning.
    pub anticipation_gain: f64,
    /// Standing slip bias as a fraction of the slip limit.
    pub bias: f64,
    /// Input-to-slip-target responsiveness.
    pub responsiveness: f64,
    /// Peak slip target magnitude (degrees) at full input.
    pub slip_target_max_deg: f64,
    /// Assist authority ceiling on the main drive (fraction of raw cap).
    pub cap_main_coupled: f64,
    /// Fraction of the lateral cap available to the slip correction.
    pub lat_authority: f64,
    /// Manual yaw authority gain.
    pub turn_authority: f64,
    /// Lateral acceleration injected per unit of turn input.
    pub turn_assist: f64,
    /// Gain nudging the nose toward zero slip when not turning.
    pub nose_align_gain: f64,
    pub jerk: JerkLimits,
    pub brake: BrakeProfile,
}

impl Default for HandlingProfile {
    fn default() -> Self {
        Self {
            name: "Custom".to_string(),
            stab_gain: 0.9,
            stab_damping: 1.1,
            slip_threshold_deg: 8.0,
            slip_limit_deg: 12.0,
            slip_correction_gain: 1.2,
            nose_follow_input: 0.35,
            anticipation_gain: 0.08,
            bias: 0.0,
            responsiveness: 0.9,
            slip_target_max_deg: 12.0,
            cap_main_coupled: 0.7,
            lat_authority: 0.85,
            turn_authority: 0.7,
            turn_assist: 0.3,
            nose_align_gain: 0.1,
            jerk: JerkLimits::default(),
            brake: BrakeProfile::default(),
        }
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl HandlingProfile {
    /// Validate every field against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("stab_gain", self.stab_gain, 0.3, 1.6)?;
        check_range("stab_damping", self.stab_damping, 0.4, 3.0)?;
        check_range("slip_threshold_deg", self.slip_threshold_deg, 2.0, 25.0)?;
        check_range("slip_limit_deg", self.slip_limit_deg, 4.0, 30.0)?;
        check_range("slip_correction_gain", self.slip_correction_gain, 0.2, 3.0)?;
        check_range("nose_follow_input", self.nose_follow_input, 0.0, 1.0)?;
        check_range("anticipation_gain", self.anticipation_gain, 0.0, 0.5)?;
        check_range("bias", self.bias, -1.0, 1.0)?;
        check_range("responsiveness", self.responsiveness, 0.1, 2.5)?;
        check_range("slip_target_max_deg", self.slip_target_max_deg, 2.0, 40.0)?;
        check_range("cap_main_coupled", self.cap_main_coupled, 0.2, 1.0)?;
        check_range("lat_authority", self.lat_authority, 0.2, 1.0)?;
        check_range("turn_authority", self.turn_authority, 0.0, 2.0)?;
        check_range("turn_assist", self.turn_assist, 0.0, 1.0)?;
        check_range("nose_align_gain", self.nose_align_gain, 0.0, 1.0)?;
        check_range("jerk.forward_mps3", self.jerk.forward_mps3, 10.0, 800.0)?;
        check_range("jerk.lateral_mps3", self.jerk.lateral_mps3, 10.0, 600.0)?;
        check_range("jerk.angular_rps3", self.jerk.angular_rps3, 0.5, 60.0)?;
        check_range("brake.stop_time_s", self.brake.stop_time_s, 0.05, 5.0)?;
        check_range("brake.rot_stop_time_s", self.brake.rot_stop_time_s, 0.03, 5.0)?;
        check_range("brake.g_sustain", self.brake.g_sustain, 0.5, 20.0)?;
        check_range("brake.g_boost", self.brake.g_boost, 0.5, 30.0)?;
        check_range("brake.boost_duration_s", self.brake.boost_duration_s, 0.25, 15.0)?;
        check_range("brake.boost_cooldown_s", self.brake.boost_cooldown_s, 0.0, 120.0)?;
        if self.brake.g_boost < self.brake.g_sustain {
            return Err(ConfigError::BoostBelowSustain {
                sustain: self.brake.g_sustain,
                boost: self.brake.g_boost,
            });
        }
        Ok(())
    }
}

impl AssistPreset {
    /// Full handling profile for a named preset.
    pub fn profile(self) -> HandlingProfile {
        // (slip_limit, stab_gain, bias, cap_main, g_sustain, g_boost,
        //  boost_duration, boost_cooldown)
        let (slip, gain, bias, cap, g_s, g_b, b_dur, b_cd) = match self {
            AssistPreset::Balanced => (12.0, 0.90, 0.00, 0.75, 4.5, 6.5, 3.5, 15.0),
            AssistPreset::Sport => (15.0, 0.75, 0.20, 0.85, 7.0, 10.0, 3.0, 12.0),
            AssistPreset::Rally => (18.0, 0.70, 0.30, 0.90, 7.5, 10.0, 3.0, 12.0),
            AssistPreset::Muscle => (10.0, 0.80, 0.00, 0.75, 5.5, 8.0, 3.0, 14.0),
            AssistPreset::F1 => (8.0, 0.95, 0.00, 0.80, 6.5, 9.0, 3.0, 12.0),
            AssistPreset::Industrial => (10.0, 0.96, -0.15, 0.60, 4.0, 6.0, 3.5, 18.0),
            AssistPreset::Truck => (8.0, 0.95, -0.30, 0.55, 2.5, 3.5, 5.0, 25.0),
            AssistPreset::Warship => (7.0, 0.95, -0.10, 0.60, 2.0, 3.5, 6.0, 35.0),
            AssistPreset::Liner => (8.0, 0.95, -0.25, 0.55, 2.5, 3.5, 5.0, 22.0),
            AssistPreset::Recon => (6.0, 0.98, 0.00, 0.40, 3.5, 5.0, 3.0, 12.0),
        };
        HandlingProfile {
            name: format!("{self:?}"),
            stab_gain: gain,
            slip_limit_deg: slip,
            slip_target_max_deg: slip,
            bias,
            cap_main_coupled: cap,
            brake: BrakeProfile {
                g_sustain: g_s,
                g_boost: g_b,
                boost_duration_s: b_dur,
                boost_cooldown_s: b_cd,
                ..BrakeProfile::default()
            },
            ..HandlingProfile::default()
        }
    }
}

/// Complete ship configuration snapshot, as supplied by the (external)
/// ship-configuration subsystem at session start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipConfig {
    pub name: String,
    /// Dry mass in tonnes.
    pub mass_t: f64,
    pub geometry: ShipGeometry,
    pub thrust: ThrustBudget,
    /// Explicit inertia tensor; derived from geometry when absent.
    pub inertia: Option<InertiaTensor>,
    pub profile: HandlingProfile,
}

impl ShipConfig {
    pub fn mass_kg(&self) -> f64 {
        self.mass_t * 1_000.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass_t > 0.0) {
            return Err(ConfigError::NonPositiveMass(self.mass_t));
        }
        self.geometry.validate()?;
        self.profile.validate()?;
        Ok(())
    }
}
