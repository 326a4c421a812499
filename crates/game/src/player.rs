//! Player entity and state.

use featherfall_physics::{BodyId, DynamicBody, MotionIntent};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Hit points for anything that can be destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Current hit points (0 = dead).
    pub current: i32,

    /// Maximum hit points.
    pub max: i32,
}

impl Health {
    /// Create a health pool at full capacity.
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Check whether the owner is alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Apply damage, clamping at zero.
    ///
    /// Returns true if this was the killing blow.
    pub fn damage(&mut self, amount: i32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.current = (self.current - amount).max(0);
        self.current == 0
    }

    /// Restore to full health.
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

/// The player character.
///
/// Physics state lives in the world as a [`DynamicBody`]; this struct
/// holds the gameplay side and the link between the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Physics body in the owning world.
    pub body_id: BodyId,

    /// Hit points. One touch of a hazard is lethal at the default max.
    pub health: Health,

    /// Deaths this session.
    pub deaths: u32,

    /// Levels cleared this session.
    pub clears: u32,
}

impl Player {
    /// Body extents (full width and height).
    pub const SIZE: Vec2 = Vec2::new(2.0, 2.0);

    /// Body mass in kilograms.
    pub const MASS: f32 = 10.0;

    /// Maximum hit points.
    pub const MAX_HEALTH: i32 = 1;

    /// Upward velocity set by a jump.
    pub const JUMP_VELOCITY: f32 = 30.0;

    /// Propulsion force while grounded.
    pub const MOVE_FORCE: f32 = 1000.0;

    /// Fraction of the propulsion force available while airborne.
    pub const AIR_CONTROL: f32 = 0.8;

    /// Body friction coefficient.
    pub const FRICTION: f32 = 0.9;

    /// Midair jumps available after leaving the ground.
    pub const JUMPS_MAX: u32 = 2;

    /// Horizontal speed limit.
    pub const TERMINAL_VELOCITY: f32 = 20.0;

    /// Create a player linked to an existing body.
    pub fn new(body_id: BodyId) -> Self {
        Self {
            body_id,
            health: Health::new(Self::MAX_HEALTH),
            deaths: 0,
            clears: 0,
        }
    }

    /// Build the physics body for a player spawning at `position`.
    pub fn spawn_body(position: Vec2) -> DynamicBody {
        DynamicBody::new(position, Self::SIZE, Self::MASS)
            .with_motion(MotionIntent::new(
                Self::MOVE_FORCE,
                Self::AIR_CONTROL,
                Self::JUMP_VELOCITY,
                Self::JUMPS_MAX,
            ))
            .with_friction(Self::FRICTION)
            .with_terminal_velocity(Self::TERMINAL_VELOCITY)
    }

    /// Check if the player is alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    /// Apply hazard damage and knockback to the player's body.
    ///
    /// Returns true if this was the killing blow.
    pub fn take_damage(&mut self, body: &mut DynamicBody, damage: i32, knockback: Vec2) -> bool {
        if !self.is_alive() {
            return false;
        }
        body.velocity += knockback;
        let killed = self.health.damage(damage);
        if killed {
            self.deaths += 1;
            body.set_move_dir(Vec2::ZERO);
        }
        killed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_and_reset() {
        let mut health = Health::new(3);
        assert!(!health.damage(2));
        assert!(health.is_alive());
        assert!(health.damage(5), "clamped killing blow");
        assert_eq!(health.current, 0);
        assert!(!health.damage(1), "dead stays dead");

        health.reset();
        assert_eq!(health.current, 3);
    }

    #[test]
    fn test_spawn_body_carries_motion() {
        let body = Player::spawn_body(Vec2::new(5.0, 5.0));
        let motion = body.motion.unwrap();
        assert_eq!(motion.jump_velocity, Player::JUMP_VELOCITY);
        assert_eq!(motion.jumps_max, Player::JUMPS_MAX);
        assert_eq!(body.terminal_velocity, Player::TERMINAL_VELOCITY);
        assert_eq!(body.size, Player::SIZE);
    }

    #[test]
    fn test_take_damage_applies_knockback_and_counts_deaths() {
        let mut player = Player::new(1);
        let mut body = Player::spawn_body(Vec2::ZERO);

        let killed = player.take_damage(&mut body, 1, Vec2::new(0.0, 15.0));
        assert!(killed);
        assert_eq!(player.deaths, 1);
        assert_eq!(body.velocity, Vec2::new(0.0, 15.0));

        // A corpse takes no further damage.
        assert!(!player.take_damage(&mut body, 1, Vec2::new(0.0, 15.0)));
        assert_eq!(player.deaths, 1);
        assert_eq!(body.velocity, Vec2::new(0.0, 15.0));
    }
}
