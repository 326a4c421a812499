//! Physics configuration constants.
//!
//! All world-level tunables are grouped here. Per-body properties
//! (mass, elasticity, terminal velocity) live on the bodies themselves.

use serde::{Deserialize, Serialize};

/// Configuration for the physics step.
///
/// All values use engine units (one unit is roughly a meter) and seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    // ========================================================================
    // Integration
    // ========================================================================
    /// Gravity acceleration (units/second²).
    pub gravity: f32,

    // ========================================================================
    // Ground Friction
    // ========================================================================
    /// Base friction acceleration scale (units/second²).
    pub friction_accel: f32,

    /// Lower bound on the speed-dependent friction strength. Keeps fast
    /// bodies from becoming frictionless.
    pub friction_floor: f32,

    /// Friction multiplier for bodies with no active motion force.
    pub idle_friction_scale: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 70.0,          // Heavy fall for a snappy platformer feel
            friction_accel: 100.0,
            friction_floor: 0.6,
            idle_friction_scale: 3.0,
        }
    }
}

impl PhysicsConfig {
    /// Floatier tuning for wind-heavy levels.
    pub fn low_gravity() -> Self {
        Self {
            gravity: 40.0,
            ..Default::default()
        }
    }
}
