//! Trace results for collision queries.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::statics::StaticId;

/// Result of tracing a ray or swept box against world geometry.
///
/// Traces sweep from a start position toward an end position and report
/// the nearest surface crossed along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceResult {
    /// Impact point on the surface, or the sweep end position on a miss.
    pub position: Vec2,

    /// Surface normal at the impact point.
    ///
    /// Points away from the surface that was hit. Zero on a miss.
    pub normal: Vec2,

    /// Whether a collision occurred within the sweep's reach.
    pub collided: bool,

    /// Distance traveled along the sweep before impact.
    ///
    /// On a miss this is the full sweep length.
    pub distance: f32,

    /// Id of the static body that was hit, if any.
    pub hit: Option<StaticId>,

    /// Impact was on an upward face. Treat the surface as a floor.
    pub ground: bool,
}

impl Default for TraceResult {
    fn default() -> Self {
        Self::miss(Vec2::ZERO, 0.0)
    }
}

impl TraceResult {
    /// Create a trace result indicating no collision occurred.
    pub fn miss(end_position: Vec2, length: f32) -> Self {
        Self {
            position: end_position,
            normal: Vec2::ZERO,
            collided: false,
            distance: length,
            hit: None,
            ground: false,
        }
    }

    /// Check if this trace hit something.
    #[inline]
    pub fn hit_something(&self) -> bool {
        self.collided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_carries_sweep_end() {
        let result = TraceResult::miss(Vec2::new(10.0, 0.0), 10.0);
        assert!(!result.hit_something());
        assert_eq!(result.position, Vec2::new(10.0, 0.0));
        assert_eq!(result.distance, 10.0);
        assert!(result.hit.is_none());
        assert!(!result.ground);
    }
}
