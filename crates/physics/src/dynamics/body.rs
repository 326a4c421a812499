//! Dynamic body state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::forces::ForceSet;

/// Unique identifier for dynamic bodies.
pub type BodyId = u32;

/// Name of the self-propulsion force managed by [`MotionIntent`].
pub const MOTION_FORCE: &str = "motion";

/// Lifetime granted to the motion force each refresh (seconds).
///
/// Long enough to survive a couple of dropped frames, short enough that a
/// body stops accelerating soon after input ends.
pub const MOTION_FORCE_DURATION: f32 = 0.2;

/// Self-propulsion capability for a dynamic body.
///
/// Bodies that can walk and jump carry one of these; crates and debris do
/// not. The integrator checks for its presence rather than inspecting what
/// kind of thing the body is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionIntent {
    /// Normalized movement direction the body is steering toward.
    pub goal_dir: Vec2,

    /// Maximum propulsion force while grounded.
    pub move_force: f32,

    /// Fraction of `move_force` usable while airborne.
    pub air_control: f32,

    /// Vertical velocity set by a jump.
    pub jump_velocity: f32,

    /// Midair jumps available after leaving the ground.
    pub jumps_max: u32,

    /// Midair jumps spent since last grounded.
    pub jumps_used: u32,
}

impl MotionIntent {
    /// Create a motion capability with no input applied.
    pub fn new(move_force: f32, air_control: f32, jump_velocity: f32, jumps_max: u32) -> Self {
        Self {
            goal_dir: Vec2::ZERO,
            move_force,
            air_control,
            jump_velocity,
            jumps_max,
            jumps_used: 0,
        }
    }
}

/// A moving body integrated and collided by the physics step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicBody {
    /// Unique identifier, assigned by the owning world.
    pub id: BodyId,

    /// Center position.
    pub position: Vec2,

    /// Center position at the start of the current frame. The collision
    /// pass sweeps from here to `position`.
    pub last_position: Vec2,

    /// Full extents.
    pub size: Vec2,

    /// Bounding radius, cached from `size`.
    pub radius: f32,

    /// Velocity (units per second).
    pub velocity: Vec2,

    /// Mass in kilograms. Forces divide by this.
    pub mass: f32,

    /// Bounciness on contact (0 = dead stop, 1 = full mirror).
    pub elasticity: f32,

    /// Body friction coefficient.
    pub friction: f32,

    /// Friction of the surface last landed on, recorded by the resolver.
    pub surface_friction: f32,

    /// Maximum horizontal speed. Zero disables the clamp.
    pub terminal_velocity: f32,

    /// Whether the body rested on ground this frame. Cleared at the start
    /// of every tick and re-proven by collision.
    pub grounded: bool,

    /// Named forces acting on the body.
    pub forces: ForceSet,

    /// Self-propulsion capability, if any.
    pub motion: Option<MotionIntent>,
}

impl DynamicBody {
    /// Create a body at rest with default surface properties.
    pub fn new(position: Vec2, size: Vec2, mass: f32) -> Self {
        Self {
            id: 0,
            position,
            last_position: position,
            size,
            radius: size.length() / 2.0,
            velocity: Vec2::ZERO,
            mass,
            elasticity: 0.1,
            friction: 0.9,
            surface_friction: 0.9,
            terminal_velocity: 0.0,
            grounded: false,
            forces: ForceSet::new(),
            motion: None,
        }
    }

    /// Attach a motion capability.
    pub fn with_motion(mut self, motion: MotionIntent) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Set the bounciness.
    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    /// Set the body friction coefficient.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self.surface_friction = friction;
        self
    }

    /// Set the horizontal speed limit (0 disables).
    pub fn with_terminal_velocity(mut self, terminal_velocity: f32) -> Self {
        self.terminal_velocity = terminal_velocity;
        self
    }

    /// Steer toward a direction. The input is normalized; anything shorter
    /// than the dead zone reads as "stop".
    pub fn set_move_dir(&mut self, dir: Vec2) {
        if let Some(motion) = self.motion.as_mut() {
            motion.goal_dir = dir.normalize_or_zero();
        }
    }

    /// Attempt a jump.
    ///
    /// Grounded jumps are always free; airborne jumps spend one entry of
    /// the midair budget. The small upward nudge moves the body off the
    /// surface so the next ground sweep does not immediately snap it back.
    ///
    /// Returns true if a jump was performed.
    pub fn jump(&mut self) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };

        if self.grounded {
            // Free jump off the ground.
        } else if motion.jumps_used < motion.jumps_max {
            motion.jumps_used += 1;
            log::debug!(
                "body {} midair jump {}/{}",
                self.id,
                motion.jumps_used,
                motion.jumps_max
            );
        } else {
            return false;
        }

        self.velocity.y = motion.jump_velocity;
        self.position.y += 0.01;
        self.grounded = false;
        true
    }

    /// Settle onto a surface. Called by the resolver on ground contacts.
    pub fn land(&mut self, surface_friction: f32) {
        self.grounded = true;
        self.surface_friction = surface_friction;
        if let Some(motion) = self.motion.as_mut() {
            motion.jumps_used = 0;
        }
    }

    /// Refresh the named motion force from the current goal direction.
    ///
    /// Runs once per tick before force integration. Active input re-arms
    /// the force (at reduced strength in the air); idle input removes it
    /// so the body coasts to a stop under friction.
    pub fn refresh_motion_force(&mut self) {
        let grounded = self.grounded;
        let Some(motion) = self.motion.as_mut() else {
            return;
        };

        if grounded {
            motion.jumps_used = 0;
        }

        if motion.goal_dir.length() <= 0.1 {
            self.forces.remove(MOTION_FORCE);
            return;
        }

        let scale = if grounded { 1.0 } else { motion.air_control };
        let force = motion.goal_dir * motion.move_force * scale;
        self.forces
            .add(MOTION_FORCE, Some(force), MOTION_FORCE_DURATION);
    }
}

// ============================================================================
// Tests
// ============================================================================
