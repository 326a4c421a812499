//! Game simulation - the main game loop.
//!
//! [`Game`] owns the campaign, the loaded world, and the player, and
//! advances everything by real frame time. It applies input, feeds wind
//! zones into the force system, runs the physics step, then interprets
//! the resulting contacts: hazards hurt, the goal region clears the
//! level, and falling out of the world kills.

use featherfall_physics::{PhysicsConfig, SurfaceEffect};
use serde::{Deserialize, Serialize};

use crate::input::PlayerInput;
use crate::level::Level;
use crate::player::Player;
use crate::world::World;

/// Game loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Frames longer than this are dropped instead of simulated, so a
    /// backgrounded tab does not produce one giant catch-up step.
    pub max_frame_delta: f32,

    /// Bodies whose top edge sinks below this height are destroyed.
    pub kill_plane_y: f32,

    /// Seconds between death and respawn.
    pub respawn_delay: f32,

    /// Horizontal extent of the visible world (units).
    pub units_width: f32,

    /// Height of the visible world as a fraction of its width.
    pub aspect: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: 0.1,
            kill_plane_y: 0.0,
            respawn_delay: 0.4,
            units_width: 50.0,
            aspect: 0.5,
        }
    }
}

impl GameConfig {
    /// Vertical extent of the visible world (units).
    pub fn units_height(&self) -> f32 {
        self.units_width * self.aspect
    }
}

/// The running game: campaign, loaded world, and player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Game loop configuration.
    pub config: GameConfig,

    /// Physics tuning of the loaded level.
    pub physics: PhysicsConfig,

    /// Physics state of the loaded level.
    pub world: World,

    /// The player.
    pub player: Player,

    /// Campaign levels, in play order.
    pub levels: Vec<Level>,

    /// Index of the loaded level.
    pub level_index: usize,

    /// Frames simulated so far.
    pub frame: u64,

    /// Seconds until respawn while the player is dead.
    respawn_timer: f32,
}

impl Game {
    /// Create a game over the given levels. An empty list falls back to
    /// the first built-in level.
    pub fn new(config: GameConfig, mut levels: Vec<Level>) -> Self {
        if levels.is_empty() {
            levels.push(Level::proving_ground());
        }

        let mut game = Self {
            config,
            physics: PhysicsConfig::default(),
            world: World::new(),
            player: Player::new(0),
            levels,
            level_index: 0,
            frame: 0,
            respawn_timer: 0.0,
        };
        game.load_level(0);
        game
    }

    /// Create a game running the built-in campaign.
    pub fn campaign() -> Self {
        Self::new(GameConfig::default(), Level::campaign())
    }

    /// The currently loaded level.
    pub fn current_level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    /// Load a level by index (wrapping) and spawn the player in it.
    ///
    /// Session counters on the player survive the reload.
    pub fn load_level(&mut self, index: usize) {
        self.level_index = index % self.levels.len();
        let level = &self.levels[self.level_index];

        self.physics = level.physics.clone();
        level.populate(&mut self.world);

        let spawn = level.spawn;
        self.player.body_id = self.world.add_body(Player::spawn_body(spawn));
        self.player.health.reset();
        self.respawn_timer = 0.0;
    }

    /// Restart the current level.
    pub fn reset(&mut self) {
        self.load_level(self.level_index);
    }

    /// Advance the game by one frame of `delta` seconds.
    ///
    /// Returns false if the frame was dropped for being too long.
    pub fn advance(&mut self, delta: f32, input: &PlayerInput) -> bool {
        if delta > self.config.max_frame_delta {
            log::debug!("dropping oversized frame ({delta:.3}s)");
            return false;
        }

        if !self.player.is_alive() {
            self.respawn_timer -= delta;
            if self.respawn_timer <= 0.0 {
                self.reset();
            } else {
                // The corpse keeps simulating while the timer runs.
                self.world.step(&self.physics, delta);
            }
            self.frame += 1;
            return true;
        }

        self.apply_input(input);
        self.apply_wind();
        self.world.step(&self.physics, delta);
        self.apply_contacts();
        self.check_goal_and_kill_plane();

        if !self.player.is_alive() {
            self.respawn_timer = self.config.respawn_delay;
        }

        self.frame += 1;
        true
    }

    fn apply_input(&mut self, input: &PlayerInput) {
        let id = self.player.body_id;
        if let Some(body) = self.world.get_body_mut(id) {
            body.set_move_dir(input.move_dir());
            if input.jump {
                body.jump();
            }
        }
    }

    fn apply_wind(&mut self) {
        let level = &self.levels[self.level_index];
        let id = self.player.body_id;
        if let Some(body) = self.world.get_body_mut(id) {
            for zone in &level.wind_zones {
                if zone.region.overlaps(body.position, body.size) {
                    // Re-arm rather than extend, so the lingering tail
                    // stays bounded by the zone's duration.
                    body.forces.remove(&zone.name);
                    body.forces.add(&zone.name, Some(zone.force), zone.duration);
                }
            }
        }
    }

    fn apply_contacts(&mut self) {
        let contacts = std::mem::take(&mut self.world.contacts);

        for contact in &contacts {
            if contact.body != self.player.body_id {
                continue;
            }
            let effect = self.world.get_static(contact.surface).map(|s| s.effect);
            if let Some(SurfaceEffect::Hazard { damage, knockback }) = effect {
                let kick = contact.normal * knockback;
                let id = self.player.body_id;
                if let Some(body) = self.world.get_body_mut(id) {
                    if self.player.take_damage(body, damage, kick) {
                        log::debug!("player killed by surface {}", contact.surface);
                    }
                }
            }
        }

        // Restore for anything that wants to inspect this frame's contacts.
        self.world.contacts = contacts;
    }

    fn check_goal_and_kill_plane(&mut self) {
        let id = self.player.body_id;
        let goal = self.levels[self.level_index].goal;

        let mut cleared = false;
        let mut fell = false;
        if let Some(body) = self.world.get_body(id) {
            cleared = self.player.is_alive() && goal.overlaps(body.position, body.size);
            fell = body.position.y + body.size.y / 2.0 <= self.config.kill_plane_y;
        }

        if cleared {
            self.player.clears += 1;
            let next = (self.level_index + 1) % self.levels.len();
            log::debug!("level '{}' cleared", self.levels[self.level_index].id);
            self.load_level(next);
        } else if fell && self.player.is_alive() {
            log::debug!("player fell out of the world");
            self.player.health.current = 0;
            self.player.deaths += 1;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use featherfall_physics::StaticBody;
    use glam::Vec2;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(game: &mut Game, frames: u32) {
        for _ in 0..frames {
            game.advance(FRAME, &PlayerInput::default());
        }
    }

    fn player_position(game: &Game) -> Vec2 {
        game.world.get_body(game.player.body_id).unwrap().position
    }

    /// A single floored room with nothing in it.
    fn empty_room() -> Level {
        let mut level = Level::new("room", "Room");
        level.statics.push(StaticBody::new(
            Vec2::new(25.0, 1.0),
            Vec2::new(50.0, 2.0),
        ));
        level.spawn = Vec2::new(10.0, 3.0);
        level
    }

    #[test]
    fn test_new_game_spawns_player() {
        let game = Game::campaign();
        assert_eq!(game.level_index, 0);
        assert!(game.player.is_alive());

        let body = game.world.get_body(game.player.body_id).unwrap();
        assert_eq!(body.position, game.current_level().spawn);
    }

    #[test]
    fn test_oversized_frames_are_dropped() {
        let mut game = Game::campaign();
        assert!(!game.advance(0.5, &PlayerInput::default()));
        assert_eq!(game.frame, 0);

        assert!(game.advance(FRAME, &PlayerInput::default()));
        assert_eq!(game.frame, 1);
    }

    #[test]
    fn test_walking_moves_player() {
        let mut game = Game::new(GameConfig::default(), vec![empty_room()]);
        settle(&mut game, 30);

        let start = player_position(&game);
        let input = PlayerInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..60 {
            game.advance(FRAME, &input);
        }

        let end = player_position(&game);
        assert!(end.x > start.x + 1.0, "moved {} units", end.x - start.x);
    }

    #[test]
    fn test_jump_leaves_ground() {
        let mut game = Game::new(GameConfig::default(), vec![empty_room()]);
        settle(&mut game, 30);
        assert!(game.world.get_body(game.player.body_id).unwrap().grounded);

        let input = PlayerInput {
            jump: true,
            ..Default::default()
        };
        game.advance(FRAME, &input);

        let body = game.world.get_body(game.player.body_id).unwrap();
        assert!(!body.grounded);
        assert!(body.velocity.y > 0.0);
    }

    #[test]
    fn test_fall_death_and_respawn() {
        // No floor at all: the player falls straight out of the world.
        let mut level = Level::new("pit", "Pit");
        level.spawn = Vec2::new(10.0, 5.0);
        let mut game = Game::new(GameConfig::default(), vec![level]);

        // Roughly 0.42s of free fall puts the body past the kill plane.
        settle(&mut game, 25);
        assert!(!game.player.is_alive());
        assert_eq!(game.player.deaths, 1);

        // The respawn timer runs out and the level reloads.
        settle(&mut game, 30);
        assert!(game.player.is_alive());
        assert!(player_position(&game).distance(Vec2::new(10.0, 5.0)) < 1.0);
        assert_eq!(game.player.deaths, 1, "session counter survives the reload");
    }

    #[test]
    fn test_hazard_contact_kills() {
        let mut level = empty_room();
        // Replace the floor under the spawn with thorns.
        level.statics[0] = level.statics[0]
            .clone()
            .with_effect(featherfall_physics::SurfaceEffect::Hazard {
                damage: 1,
                knockback: 15.0,
            });
        let mut game = Game::new(GameConfig::default(), vec![level]);

        settle(&mut game, 30);
        assert!(!game.player.is_alive());
        assert!(game.player.deaths >= 1);
    }

    #[test]
    fn test_goal_advances_and_wraps() {
        // Both goals sit on the spawn, so each tick clears a level.
        let mut first = empty_room();
        first.goal = crate::level::Region::new(Vec2::new(8.0, 2.0), Vec2::new(12.0, 6.0));
        let mut second = empty_room();
        second.id = "second".to_string();
        second.goal = first.goal;

        let mut game = Game::new(GameConfig::default(), vec![first, second]);

        game.advance(FRAME, &PlayerInput::default());
        assert_eq!(game.level_index, 1);
        assert_eq!(game.player.clears, 1);

        game.advance(FRAME, &PlayerInput::default());
        assert_eq!(game.level_index, 0, "campaign wraps");
        assert_eq!(game.player.clears, 2);
    }

    #[test]
    fn test_wind_zone_applies_force() {
        let mut level = empty_room();
        level.wind_zones.push(crate::level::WindZone {
            name: "gust".to_string(),
            region: crate::level::Region::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 25.0)),
            force: Vec2::new(0.0, 2000.0),
            duration: 0.5,
        });
        let mut game = Game::new(GameConfig::default(), vec![level]);

        game.advance(FRAME, &PlayerInput::default());
        let body = game.world.get_body(game.player.body_id).unwrap();
        assert!(body.forces.contains("gust"));
        assert!(body.velocity.y > 0.0, "gust beats gravity");
    }
}
