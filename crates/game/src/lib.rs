//! Featherfall Game Logic
//!
//! This crate contains the core game simulation including:
//!
//! - Player state and input handling
//! - World state (static geometry, dynamic bodies, contacts)
//! - Level definitions and the built-in campaign
//! - The frame loop: input, wind, physics, hazards, goals, respawn
//!
//! # Architecture
//!
//! The simulation is driven by real frame time and per-frame input.
//! Physics never calls back into gameplay; it reports contacts, and the
//! game layer decides what each contact means.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Game Simulation                        │
//! │  ┌─────────┐    ┌──────────┐    ┌────────────────────────┐  │
//! │  │ Input   │───►│ Physics  │───►│ Game State             │  │
//! │  │ (keys)  │    │ (forces, │    │ (player, hazards,      │  │
//! │  └─────────┘    │  sweeps) │    │  goals, campaign)      │  │
//! │                 └──────────┘    └────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod input;
pub mod level;
pub mod player;
pub mod simulation;
pub mod world;

// Re-export main types
pub use input::PlayerInput;
pub use level::{Level, Region, WindZone};
pub use player::{Health, Player};
pub use simulation::{Game, GameConfig};
pub use world::World;

// Re-export physics types for convenience
pub use featherfall_physics::{
    BodyId, Contact, DynamicBody, PhysicsConfig, StaticBody, StaticId, SurfaceEffect,
};
