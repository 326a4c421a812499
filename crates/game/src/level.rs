//! Level definitions and the built-in campaign.
//!
//! A [`Level`] is a template: static geometry, wind zones, a spawn point
//! and a goal region, plus the physics tuning the level plays under.
//! Loading a level stamps its geometry into a fresh [`World`].
//!
//! All built-in levels fit the 50 by 25 unit view the renderer shows.

use featherfall_physics::{PhysicsConfig, StaticBody, SurfaceEffect};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::world::World;

/// An axis-aligned rectangular region of the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Lower-left corner.
    pub min: Vec2,

    /// Upper-right corner.
    pub max: Vec2,
}

impl Region {
    /// Create a region from its corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Check whether a point lies inside (edges inclusive).
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check whether a centered box overlaps the region.
    pub fn overlaps(&self, center: Vec2, size: Vec2) -> bool {
        let half = size * 0.5;
        center.x + half.x >= self.min.x
            && center.x - half.x <= self.max.x
            && center.y + half.y >= self.min.y
            && center.y - half.y <= self.max.y
    }

    /// Center of the region.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// A volume that pushes bodies while they are inside it.
///
/// The force lingers for `duration` seconds after the body leaves, so a
/// brief touch of a strong gust still carries the body somewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindZone {
    /// Force name registered on affected bodies.
    pub name: String,

    /// Affected area.
    pub region: Region,

    /// Force applied to bodies inside.
    pub force: Vec2,

    /// Force lifetime granted on contact (seconds).
    pub duration: f32,
}

/// A level template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Static geometry, stamped into the world on load.
    pub statics: Vec<StaticBody>,

    /// Wind volumes.
    pub wind_zones: Vec<WindZone>,

    /// Player spawn position (body center).
    pub spawn: Vec2,

    /// Reaching this region clears the level.
    pub goal: Region,

    /// Physics tuning for this level.
    pub physics: PhysicsConfig,
}

impl Level {
    /// Create an empty level with default physics.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            statics: Vec::new(),
            wind_zones: Vec::new(),
            spawn: Vec2::new(5.0, 3.0),
            goal: Region::new(Vec2::new(44.0, 2.0), Vec2::new(49.0, 7.0)),
            physics: PhysicsConfig::default(),
        }
    }

    /// Stamp this level's geometry into a world.
    pub fn populate(&self, world: &mut World) {
        world.clear();
        for surface in &self.statics {
            world.add_static(surface.clone());
        }
        log::debug!("loaded level '{}' ({} surfaces)", self.id, world.statics.len());
    }

    fn add_box(&mut self, center: Vec2, size: Vec2) -> &mut Self {
        self.statics.push(StaticBody::new(center, size));
        self
    }

    fn add_hazard(&mut self, center: Vec2, size: Vec2, damage: i32, knockback: f32) -> &mut Self {
        self.statics.push(
            StaticBody::new(center, size).with_effect(SurfaceEffect::Hazard { damage, knockback }),
        );
        self
    }

    fn add_side_walls(&mut self) -> &mut Self {
        self.add_box(Vec2::new(-1.0, 12.5), Vec2::new(2.0, 25.0));
        self.add_box(Vec2::new(51.0, 12.5), Vec2::new(2.0, 25.0));
        self
    }

    // ========================================================================
    // Built-in levels
    // ========================================================================

    /// Flat ground and two platforms. Teaches movement and the double jump.
    pub fn proving_ground() -> Self {
        let mut level = Self::new("proving_ground", "Proving Ground");

        level
            .add_side_walls()
            // Continuous floor, top edge at y=2
            .add_box(Vec2::new(25.0, 1.0), Vec2::new(50.0, 2.0))
            .add_box(Vec2::new(18.0, 6.0), Vec2::new(8.0, 1.0))
            .add_box(Vec2::new(32.0, 10.0), Vec2::new(8.0, 1.0));

        level.spawn = Vec2::new(5.0, 3.0);
        level.goal = Region::new(Vec2::new(44.0, 2.0), Vec2::new(49.0, 7.0));
        level
    }

    /// Broken ground over thorn pits, with a climb to a high goal.
    pub fn thornfield() -> Self {
        let mut level = Self::new("thornfield", "Thornfield");

        level
            .add_side_walls()
            .add_box(Vec2::new(6.0, 1.0), Vec2::new(12.0, 2.0))
            .add_box(Vec2::new(25.0, 1.0), Vec2::new(10.0, 2.0))
            .add_box(Vec2::new(44.0, 1.0), Vec2::new(12.0, 2.0))
            // Thorns fill the gaps, slightly below the walk surface
            .add_hazard(Vec2::new(16.0, 0.5), Vec2::new(8.0, 1.0), 1, 15.0)
            .add_hazard(Vec2::new(34.0, 0.5), Vec2::new(8.0, 1.0), 1, 15.0)
            .add_box(Vec2::new(25.0, 8.0), Vec2::new(6.0, 1.0))
            .add_box(Vec2::new(35.0, 12.0), Vec2::new(6.0, 1.0))
            .add_box(Vec2::new(44.0, 16.0), Vec2::new(8.0, 1.0));

        level.spawn = Vec2::new(4.0, 3.0);
        level.goal = Region::new(Vec2::new(42.0, 16.5), Vec2::new(48.0, 21.0));
        level
    }

    /// A tall cavern with an updraft shaft and a crosswind guarding the
    /// goal ledge. Played under floatier gravity.
    pub fn updraft_cavern() -> Self {
        let mut level = Self::new("updraft_cavern", "Updraft Cavern");
        level.physics = PhysicsConfig::low_gravity();

        level
            .add_side_walls()
            .add_box(Vec2::new(25.0, 1.0), Vec2::new(50.0, 2.0))
            .add_box(Vec2::new(12.0, 9.0), Vec2::new(6.0, 1.0))
            .add_box(Vec2::new(42.0, 16.0), Vec2::new(8.0, 1.0))
            .add_hazard(Vec2::new(34.0, 2.5), Vec2::new(6.0, 1.0), 1, 20.0);

        level.wind_zones.push(WindZone {
            name: "updraft".to_string(),
            region: Region::new(Vec2::new(20.0, 2.0), Vec2::new(30.0, 22.0)),
            force: Vec2::new(0.0, 280.0),
            duration: 0.1,
        });
        level.wind_zones.push(WindZone {
            name: "crosswind".to_string(),
            region: Region::new(Vec2::new(30.0, 12.0), Vec2::new(42.0, 18.0)),
            force: Vec2::new(-320.0, 0.0),
            duration: 1.0,
        });

        level.spawn = Vec2::new(5.0, 3.0);
        level.goal = Region::new(Vec2::new(40.0, 16.5), Vec2::new(47.0, 21.0));
        level
    }

    /// The full built-in campaign, in play order.
    pub fn campaign() -> Vec<Level> {
        vec![
            Self::proving_ground(),
            Self::thornfield(),
            Self::updraft_cavern(),
        ]
    }
}
