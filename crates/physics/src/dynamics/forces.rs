//! Named, time-limited forces.
//!
//! Gameplay code pushes bodies around by registering forces under a name
//! ("motion", "wind_vertical", ...) with a lifetime. Each tick the set
//! integrates every live force into one impulse and retires expired
//! entries. Re-adding a force under the same name extends its lifetime,
//! so a script can keep a wind gust alive by refreshing it every frame.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single active force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Force vector (mass units per second squared).
    pub vector: Vec2,

    /// Seconds of lifetime left.
    pub remaining: f32,
}

/// Set of named forces acting on one body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForceSet {
    forces: HashMap<String, Force>,
}

impl ForceSet {
    /// Create an empty force set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a force or extend an existing one.
    ///
    /// An existing entry keeps accumulating lifetime; its vector is
    /// replaced only when a new one is given. A missing entry is created
    /// only when a vector is given.
    pub fn add(&mut self, name: &str, vector: Option<Vec2>, duration: f32) {
        if let Some(force) = self.forces.get_mut(name) {
            if let Some(vector) = vector {
                force.vector = vector;
            }
            force.remaining += duration;
        } else if let Some(vector) = vector {
            self.forces.insert(
                name.to_string(),
                Force {
                    vector,
                    remaining: duration,
                },
            );
        }
    }

    /// Remove a force by name.
    pub fn remove(&mut self, name: &str) {
        self.forces.remove(name);
    }

    /// Look up a force by name.
    pub fn get(&self, name: &str) -> Option<&Force> {
        self.forces.get(name)
    }

    /// Check whether a force is active.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.forces.contains_key(name)
    }

    /// Number of active forces.
    #[inline]
    pub fn len(&self) -> usize {
        self.forces.len()
    }

    /// Check whether no forces are active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    /// Drop every force.
    pub fn clear(&mut self) {
        self.forces.clear();
    }

    /// Integrate all forces over a frame and return the total impulse.
    ///
    /// Each force contributes `vector * dt` where `dt` is the frame time
    /// clamped to the force's remaining lifetime; a long frame never
    /// extracts more impulse than the force has left. Expired entries are
    /// dropped. Divide the result by the body's mass to get a velocity
    /// change.
    pub fn tick(&mut self, delta: f32) -> Vec2 {
        let mut impulse = Vec2::ZERO;

        self.forces.retain(|_, force| {
            let dt = delta.clamp(0.0, force.remaining);
            impulse += force.vector * dt;
            force.remaining -= dt;
            force.remaining > 0.0
        });

        impulse
    }
}

// ============================================================================
// Tests
// ============================================================================
