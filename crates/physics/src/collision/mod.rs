//! Collision detection for 2D platformer movement.
//!
//! Everything is built from one primitive: a parametric segment traced
//! against a face plane. Static boxes answer queries by tracing their four
//! faces and keeping the nearest impact that lands on the box.
//!
//! # Key Types
//!
//! - [`Ray`] / [`BoxRay`]: a single segment, or a box swept as five
//!   parallel segments
//! - [`StaticBody`]: an axis-aligned box with surface properties
//! - [`TraceResult`]: output from a trace query
//!
//! # Tracing Algorithm
//!
//! A trace sweeps from a start to an end position and returns:
//! - The impact point and how far along the sweep it lies
//! - The surface normal at the impact
//! - Whether the impact was on an upward (ground) face
//! - The id of the static body that was hit

mod ray;
mod statics;
mod trace;

pub use ray::{BoxRay, Ray, SweepQuery, TOP_CORNER_NUDGE};
pub use statics::{StaticBody, StaticId, SurfaceEffect};
pub use trace::TraceResult;
