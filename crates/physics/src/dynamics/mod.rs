//! Dynamic body state and forces.
//!
//! A [`DynamicBody`] is anything the integrator moves: players, crates,
//! debris. Bodies accumulate named, time-limited forces through a
//! [`ForceSet`]; self-propelled bodies additionally carry a
//! [`MotionIntent`] capability that keeps a propulsion force alive while
//! input is held.
//!
//! # Design
//!
//! Capabilities are composed, not inherited. The integrator never asks
//! what a body *is*; it checks what components the body carries.

mod body;
mod config;
mod forces;

pub use body::{BodyId, DynamicBody, MotionIntent, MOTION_FORCE, MOTION_FORCE_DURATION};
pub use config::PhysicsConfig;
pub use forces::{Force, ForceSet};
