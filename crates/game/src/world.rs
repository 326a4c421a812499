//! World state container.
//!
//! The [`World`] owns every static surface and dynamic body in play,
//! hands out their identifiers, and drives the physics step. Gameplay
//! rules (hazards, goals, death) live in the simulation; the world only
//! keeps state and reports contacts.

use featherfall_physics::{
    step, BodyId, Contact, DynamicBody, PhysicsConfig, StaticBody, StaticId,
};
use serde::{Deserialize, Serialize};

/// All physics state for one loaded level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// Static level geometry.
    pub statics: Vec<StaticBody>,

    /// Moving bodies.
    pub bodies: Vec<DynamicBody>,

    /// Contacts resolved by the most recent step.
    pub contacts: Vec<Contact>,

    next_static_id: StaticId,
    next_body_id: BodyId,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            statics: Vec::new(),
            bodies: Vec::new(),
            contacts: Vec::new(),
            next_static_id: 1,
            next_body_id: 1,
        }
    }

    /// Remove everything, keeping allocations.
    pub fn clear(&mut self) {
        self.statics.clear();
        self.bodies.clear();
        self.contacts.clear();
        self.next_static_id = 1;
        self.next_body_id = 1;
    }

    /// Insert a static surface, assigning it a fresh identifier.
    pub fn add_static(&mut self, mut surface: StaticBody) -> StaticId {
        let id = self.next_static_id;
        self.next_static_id += 1;
        surface.id = id;
        self.statics.push(surface);
        id
    }

    /// Insert a dynamic body, assigning it a fresh identifier.
    pub fn add_body(&mut self, mut body: DynamicBody) -> BodyId {
        let id = self.next_body_id;
        self.next_body_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Look up a static surface by identifier.
    pub fn get_static(&self, id: StaticId) -> Option<&StaticBody> {
        self.statics.iter().find(|s| s.id == id)
    }

    /// Look up a body by identifier.
    pub fn get_body(&self, id: BodyId) -> Option<&DynamicBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Look up a body by identifier, mutably.
    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut DynamicBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Advance all bodies by one frame.
    pub fn step(&mut self, config: &PhysicsConfig, delta: f32) {
        step(
            config,
            delta,
            &mut self.bodies,
            &self.statics,
            &mut self.contacts,
        );
    }
}
