//! Ray and swept-box queries.
//!
//! All collision in this engine reduces to one primitive: a parametric
//! segment traced against an infinite plane. A [`Ray`] is a single segment;
//! a [`BoxRay`] approximates a swept box with five parallel segments
//! (four corners plus the center). Static geometry traces either through
//! the [`SweepQuery`] seam.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::trace::TraceResult;

/// Downward nudge applied to the top-corner segments of a [`BoxRay`].
///
/// Without it a box sliding flush along a ceiling registers its top corners
/// as grazing side hits instead of a clean ceiling contact.
pub const TOP_CORNER_NUDGE: f32 = 0.05;

/// A finite 2D segment with cached direction and length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ray {
    /// Start position.
    pub start: Vec2,

    /// End position.
    pub end: Vec2,

    /// Unit direction from start to end. Zero for a degenerate segment.
    pub direction: Vec2,

    /// Distance from start to end.
    pub length: f32,
}

impl Ray {
    /// Create a ray between two points.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let delta = end - start;
        let length = delta.length();
        let direction = if length > f32::EPSILON {
            delta / length
        } else {
            Vec2::ZERO
        };

        Self {
            start,
            end,
            direction,
            length,
        }
    }

    /// Trace this ray against an infinite plane.
    ///
    /// The plane is defined by a point on it and its outward normal. A
    /// single-sided trace only registers when the ray travels against the
    /// normal; `dual_sided` also accepts back-face crossings. `radius_boost`
    /// extends the reach of the ray, which helps large targets catch
    /// near-miss impacts.
    ///
    /// The returned result carries the plane intersection point even when
    /// it lies beyond the ray's reach; `collided` is only set when the
    /// impact is within `length + radius_boost`.
    pub fn trace_plane(
        &self,
        center: Vec2,
        normal: Vec2,
        dual_sided: bool,
        radius_boost: f32,
    ) -> TraceResult {
        let denom = self.direction.dot(normal);

        // Parallel segments and front-face-only traces from behind never hit.
        let facing = denom < 0.0 || (dual_sided && denom > 0.0);
        if !facing {
            return TraceResult::miss(self.end, self.length);
        }

        let t = (center - self.start).dot(normal) / denom;
        if t < 0.0 {
            // Plane is behind the segment start.
            return TraceResult::miss(self.end, self.length);
        }

        let position = self.start + self.direction * t;

        TraceResult {
            position,
            normal,
            collided: t <= self.length + radius_boost,
            distance: t,
            hit: None,
            ground: false,
        }
    }
}

/// A box swept along a segment, approximated by five parallel sub-rays.
///
/// The sub-rays run through the four corners and the center of the box.
/// Five segments catch every contact the resolver cares about without a
/// full polygon sweep; a lone center ray misses corner clips on thin
/// ledges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxRay {
    /// Center start position.
    pub start: Vec2,

    /// Center end position.
    pub end: Vec2,

    /// Full extents of the swept box.
    pub dimensions: Vec2,

    /// Sub-rays: top-left, top-right, bottom-left, bottom-right, center.
    segments: [Ray; 5],
}

impl BoxRay {
    /// Create a swept box between two center positions.
    pub fn new(start: Vec2, end: Vec2, dimensions: Vec2) -> Self {
        let half = dimensions * 0.5;
        let offsets = [
            Vec2::new(-half.x, half.y - TOP_CORNER_NUDGE),
            Vec2::new(half.x, half.y - TOP_CORNER_NUDGE),
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::ZERO,
        ];

        let segments = offsets.map(|offset| Ray::new(start + offset, end + offset));

        Self {
            start,
            end,
            dimensions,
            segments,
        }
    }

    /// Trace all five sub-rays against a plane.
    ///
    /// Results are in sub-ray order; callers pick the nearest contained hit.
    pub fn trace_plane(
        &self,
        center: Vec2,
        normal: Vec2,
        dual_sided: bool,
        radius_boost: f32,
    ) -> [TraceResult; 5] {
        core::array::from_fn(|i| {
            self.segments[i].trace_plane(center, normal, dual_sided, radius_boost)
        })
    }
}

/// Common seam over [`Ray`] and [`BoxRay`] sweeps.
///
/// Static geometry traces the segments of either query through the same
/// code path and uses the end point and length for miss results.
pub trait SweepQuery {
    /// The parallel segments making up this sweep.
    fn segments(&self) -> &[Ray];

    /// Sweep end position (center line for a box).
    fn sweep_end(&self) -> Vec2;

    /// Sweep length (center line for a box).
    fn sweep_length(&self) -> f32;
}

impl SweepQuery for Ray {
    fn segments(&self) -> &[Ray] {
        std::slice::from_ref(self)
    }

    fn sweep_end(&self) -> Vec2 {
        self.end
    }

    fn sweep_length(&self) -> f32 {
        self.length
    }
}

impl SweepQuery for BoxRay {
    fn segments(&self) -> &[Ray] {
        &self.segments
    }

    fn sweep_end(&self) -> Vec2 {
        self.end
    }

    fn sweep_length(&self) -> f32 {
        // Center segment carries the unoffset sweep.
        self.segments[4].length
    }
}

// ============================================================================
// Tests
// ============================================================================
