//! Static world geometry.
//!
//! Platforms, walls and hazards are axis-aligned boxes. Each box answers
//! sweep queries by tracing its four face planes and keeping the nearest
//! impact that actually lands on the box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ray::SweepQuery;
use super::trace::TraceResult;

/// Unique identifier for static bodies.
pub type StaticId = u32;

/// Outward face normals in trace order: up, left, right, down.
const FACES: [Vec2; 4] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, -1.0),
];

/// Effect a surface applies to bodies that collide with it.
///
/// Surfaces carry their gameplay behavior as data; the resolver reports
/// contacts and the game layer applies the effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceEffect {
    /// Plain geometry.
    None,

    /// Damages bodies on contact and shoves them away from the
    /// contacted face.
    Hazard {
        /// Health removed per contact.
        damage: i32,
        /// Speed added along the contact normal.
        knockback: f32,
    },
}

impl Default for SurfaceEffect {
    fn default() -> Self {
        Self::None
    }
}

/// An axis-aligned static box in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticBody {
    /// Unique identifier, assigned by the owning world.
    pub id: StaticId,

    /// Center position.
    pub position: Vec2,

    /// Full extents.
    pub size: Vec2,

    /// Bounding radius, cached from `size`.
    pub radius: f32,

    /// Whether dynamic bodies collide with this box.
    pub collidable: bool,

    /// Bounciness on contact (0 = dead stop, 1 = full mirror).
    pub elasticity: f32,

    /// Surface friction coefficient.
    pub friction: f32,

    /// Contact effect.
    pub effect: SurfaceEffect,
}

impl StaticBody {
    /// Create a collidable box with default surface properties.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            id: 0,
            position,
            size,
            radius: size.length() / 2.0,
            collidable: true,
            elasticity: 0.1,
            friction: 0.9,
            effect: SurfaceEffect::None,
        }
    }

    /// Set the contact effect.
    pub fn with_effect(mut self, effect: SurfaceEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Set the bounciness.
    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    /// Set the surface friction coefficient.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Mark the box as pass-through.
    pub fn non_collidable(mut self) -> Self {
        self.collidable = false;
        self
    }

    /// Resize the box, keeping the cached radius in sync.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.radius = size.length() / 2.0;
    }

    /// Top-left corner.
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(
            self.position.x - self.size.x / 2.0,
            self.position.y + self.size.y / 2.0,
        )
    }

    /// Bottom-right corner.
    #[inline]
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.size.x / 2.0,
            self.position.y - self.size.y / 2.0,
        )
    }

    /// Center of the face whose outward normal is `dir`.
    #[inline]
    pub fn face_center(&self, dir: Vec2) -> Vec2 {
        self.position + dir * self.size * 0.5
    }

    /// Check whether a point lies on or inside the box bounds.
    ///
    /// Bounds are inclusive on every edge so flush face impacts count.
    /// `boost` expands the bounds on all sides.
    pub fn contains_point(&self, point: Vec2, boost: f32) -> bool {
        let half = self.size * 0.5 + Vec2::splat(boost);
        let offset = point - self.position;
        offset.x.abs() <= half.x && offset.y.abs() <= half.y
    }

    /// Trace a sweep query against this box.
    ///
    /// Each segment of the query is traced against all four face planes.
    /// A candidate impact only counts if it collided and lies on the
    /// (boost-expanded) box. Up-face impacts are tagged as ground. The
    /// globally nearest candidate wins; top faces get no special priority,
    /// a closer wall hit beats a farther floor hit.
    pub fn trace<Q: SweepQuery>(
        &self,
        query: &Q,
        dual_sided: bool,
        radius_boost: f32,
    ) -> TraceResult {
        let mut best = TraceResult::miss(query.sweep_end(), query.sweep_length());

        for face in FACES {
            let center = self.face_center(face);

            for segment in query.segments() {
                let mut result = segment.trace_plane(center, face, dual_sided, radius_boost);
                if !result.collided || !self.contains_point(result.position, radius_boost) {
                    continue;
                }

                result.ground = face.y > 0.5;
                result.hit = Some(self.id);

                if !best.collided || result.distance < best.distance {
                    best = result;
                }
            }
        }

        best
    }
}

// ============================================================================
// Tests
// ============================================================================
