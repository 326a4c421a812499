//! Featherfall Physics Engine
//!
//! A 2D swept-box physics core for platformers. Bodies are axis-aligned
//! boxes in a Y-up world; each frame they are integrated forward and then
//! swept against static geometry, so fast movement never tunnels through
//! thin floors.
//!
//! # Architecture
//!
//! The engine is split into three systems:
//!
//! - **Collision**: Traces rays and box sweeps against static boxes,
//!   returns hit information
//! - **Dynamics**: Body state, named time-limited forces, and the
//!   self-propulsion capability
//! - **Step**: The per-frame pipeline that ties the two together and
//!   emits contact events
//!
//! # Design Principles
//!
//! 1. **Continuous collision**: Sweep the whole frame displacement, never
//!    point-test the destination
//! 2. **Simplicity**: Clean APIs over micro-optimizations
//! 3. **Data in, events out**: The step mutates bodies and reports
//!    contacts; gameplay rules live above this crate

pub mod collision;
pub mod dynamics;
pub mod step;

// Re-export commonly used types
pub use collision::{
    BoxRay, Ray, StaticBody, StaticId, SurfaceEffect, SweepQuery, TraceResult,
};
pub use dynamics::{
    BodyId, DynamicBody, Force, ForceSet, MotionIntent, PhysicsConfig, MOTION_FORCE,
};
pub use step::{step, Contact};
