//! The physics step: integration and collision resolution.
//!
//! Each step runs two passes over every dynamic body:
//!
//! 1. **Integrate**: refresh the motion force, integrate forces and
//!    gravity into velocity, apply ground friction and the terminal
//!    velocity clamp, then advance the position.
//! 2. **Collide**: sweep a box from the frame's start position to its end
//!    position against all collidable statics, then resolve the contacts
//!    furthest-first so the deepest contact decides the final position.
//!
//! Resolution emits [`Contact`] events instead of calling back into
//! gameplay code; the game layer decides what a contact with a hazard or
//! a goal surface means.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::{BoxRay, StaticBody, StaticId, TraceResult};
use crate::dynamics::{BodyId, DynamicBody, PhysicsConfig, MOTION_FORCE};

/// A resolved collision between a dynamic body and a static surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Contact {
    /// Body that collided.
    pub body: BodyId,

    /// Surface it collided with.
    pub surface: StaticId,

    /// Contact was with an upward (floor) face.
    pub ground: bool,

    /// Surface normal at the impact.
    pub normal: Vec2,

    /// Impact point.
    pub position: Vec2,
}

/// Advance all bodies by one frame.
///
/// `contacts` is cleared and refilled with this frame's resolved
/// collisions, in resolution order.
pub fn step(
    config: &PhysicsConfig,
    delta: f32,
    bodies: &mut [DynamicBody],
    statics: &[StaticBody],
    contacts: &mut Vec<Contact>,
) {
    contacts.clear();

    for body in bodies.iter_mut() {
        integrate(config, delta, body);
    }

    for body in bodies.iter_mut() {
        collide(body, statics, contacts);
    }
}

// ============================================================================
// Pass 1: integration
// ============================================================================

fn integrate(config: &PhysicsConfig, delta: f32, body: &mut DynamicBody) {
    let was_grounded = body.grounded;

    body.refresh_motion_force();
    body.last_position = body.position;

    let impulse = body.forces.tick(delta);
    if body.mass > 0.0 {
        body.velocity += impulse / body.mass;
    }

    body.velocity.y -= config.gravity * delta;

    // Grounding is re-proven by collision every frame.
    body.grounded = false;

    if was_grounded {
        apply_ground_friction(config, delta, body);
    }

    // Clamp before integrating so the frame displacement honors the limit.
    if body.terminal_velocity > 0.0 && body.velocity.x.abs() > body.terminal_velocity {
        body.velocity.x = body.terminal_velocity.copysign(body.velocity.x);
    }

    body.position += body.velocity * delta;
}

fn apply_ground_friction(config: &PhysicsConfig, delta: f32, body: &mut DynamicBody) {
    let speed = body.velocity.x.abs();
    if speed <= f32::EPSILON {
        return;
    }

    // Strength falls off logarithmically with speed so sprinting bodies
    // keep momentum, floored so they always slow down eventually.
    let strength = (2.0 - (speed + 1.0).ln()).max(config.friction_floor);

    let surface_scale = (body.friction + body.surface_friction) / 2.0;
    let mut decel = strength * config.friction_accel * delta * surface_scale;

    if !body.forces.contains(MOTION_FORCE) {
        decel *= config.idle_friction_scale;
    }

    // Friction stops motion; it never reverses it.
    decel = decel.min(speed);
    body.velocity.x -= decel * body.velocity.x.signum();
}

// ============================================================================
// Pass 2: collision
// ============================================================================

fn collide(body: &mut DynamicBody, statics: &[StaticBody], contacts: &mut Vec<Contact>) {
    let sweep = BoxRay::new(body.last_position, body.position, body.size);

    let mut hits: Vec<TraceResult> = Vec::new();
    for surface in statics {
        if !surface.collidable {
            continue;
        }
        let result = surface.trace(&sweep, false, 0.0);
        if result.collided {
            hits.push(result);
        }
    }

    sort_furthest_first(&mut hits);

    for hit in &hits {
        let Some(id) = hit.hit else { continue };
        let Some(surface) = statics.iter().find(|s| s.id == id) else {
            continue;
        };
        resolve(body, hit, surface, contacts);
    }
}

/// Order contacts from deepest along the sweep to shallowest.
///
/// Resolving furthest-first means the nearest contact is applied last and
/// wins the final position, while every surface still gets its say.
fn sort_furthest_first(hits: &mut [TraceResult]) {
    hits.sort_by(|a, b| b.distance.total_cmp(&a.distance));
}

fn resolve(
    body: &mut DynamicBody,
    hit: &TraceResult,
    surface: &StaticBody,
    contacts: &mut Vec<Contact>,
) {
    if !hit.collided {
        return;
    }

    if hit.ground {
        // Settle onto the floor.
        body.position.y = hit.position.y + body.size.y / 2.0;
        body.velocity.y = 0.0;
        body.land(surface.friction);
    } else {
        if hit.normal.y < -0.9 {
            // Ceiling: push back below the face.
            body.position.y = hit.position.y - body.size.y / 2.0;
        } else if hit.normal.x.abs() > 0.9 {
            // Wall: push out along the face normal.
            body.position.x = hit.position.x + hit.normal.x * body.size.x / 2.0;
        } else {
            // Oblique corner: fall back to a circle-vs-circle separation
            // along the reported normal.
            body.position = surface.position + hit.normal * (surface.radius + body.radius);
        }

        // Reflect the inbound normal component. Elasticity 0 cancels it,
        // 1 mirrors it.
        let along = body.velocity.dot(hit.normal);
        if along < 0.0 {
            let restitution = 1.0 + (body.elasticity + surface.elasticity) / 2.0;
            body.velocity -= hit.normal * (along * restitution);
        }
    }

    contacts.push(Contact {
        body: body.id,
        surface: surface.id,
        ground: hit.ground,
        normal: hit.normal,
        position: hit.position,
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::MotionIntent;

    fn no_gravity() -> PhysicsConfig {
        PhysicsConfig {
            gravity: 0.0,
            ..Default::default()
        }
    }

    fn floor(id: StaticId) -> StaticBody {
        // Top face at y=0.
        let mut body = StaticBody::new(Vec2::new(0.0, -0.5), Vec2::new(100.0, 1.0))
            .with_elasticity(0.0);
        body.id = id;
        body
    }

    fn unit_body(position: Vec2) -> DynamicBody {
        DynamicBody::new(position, Vec2::new(2.0, 2.0), 10.0).with_elasticity(0.0)
    }

    #[test]
    fn test_gravity_accelerates_fall() {
        let config = PhysicsConfig::default();
        let mut bodies = vec![unit_body(Vec2::new(0.0, 10.0))];
        let mut contacts = Vec::new();

        step(&config, 0.1, &mut bodies, &[], &mut contacts);

        assert!((bodies[0].velocity.y + 7.0).abs() < 1e-4);
        assert!((bodies[0].position.y - 9.3).abs() < 1e-4);
        assert!(contacts.is_empty());
    }

    #[test]
    fn test_grounded_cleared_without_support() {
        let config = no_gravity();
        let mut bodies = vec![unit_body(Vec2::new(0.0, 10.0))];
        bodies[0].grounded = true;
        let mut contacts = Vec::new();

        step(&config, 0.016, &mut bodies, &[], &mut contacts);

        assert!(!bodies[0].grounded);
    }

    #[test]
    fn test_falls_and_lands_on_floor() {
        let config = PhysicsConfig::default();
        let statics = vec![floor(1)];
        let mut bodies = vec![unit_body(Vec2::new(0.0, 2.0))];
        bodies[0].velocity = Vec2::new(0.0, -30.0);
        let mut contacts = Vec::new();

        step(&config, 0.1, &mut bodies, &statics, &mut contacts);

        let body = &bodies[0];
        assert!(body.grounded);
        assert!((body.position.y - 1.0).abs() < 1e-4, "snapped onto the floor");
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.surface_friction, statics[0].friction);

        assert_eq!(contacts.len(), 1);
        assert!(contacts[0].ground);
        assert_eq!(contacts[0].surface, 1);
    }

    #[test]
    fn test_ceiling_bump_stops_ascent() {
        let config = no_gravity();
        let mut ceiling = StaticBody::new(Vec2::new(0.0, 6.0), Vec2::new(10.0, 2.0))
            .with_elasticity(0.0);
        ceiling.id = 1;

        let mut bodies = vec![unit_body(Vec2::new(0.0, 3.0))];
        bodies[0].velocity = Vec2::new(0.0, 30.0);
        let mut contacts = Vec::new();

        step(&config, 0.1, &mut bodies, &[ceiling], &mut contacts);

        let body = &bodies[0];
        assert!((body.position.y - 4.0).abs() < 1e-4, "pushed below the ceiling");
        assert!(body.velocity.y.abs() < 1e-4);
        assert!(!body.grounded);
        assert_eq!(contacts.len(), 1);
        assert!(!contacts[0].ground);
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        let config = no_gravity();
        let mut wall = StaticBody::new(Vec2::new(4.0, 0.0), Vec2::new(2.0, 10.0))
            .with_elasticity(0.0);
        wall.id = 1;

        let mut bodies = vec![unit_body(Vec2::ZERO)];
        bodies[0].velocity = Vec2::new(30.0, 0.0);
        let mut contacts = Vec::new();

        step(&config, 0.1, &mut bodies, &[wall], &mut contacts);

        let body = &bodies[0];
        assert!((body.position.x - 2.0).abs() < 1e-4, "pushed out of the wall");
        assert!(body.velocity.x.abs() < 1e-4);
    }

    #[test]
    fn test_elastic_wall_bounces() {
        let config = no_gravity();
        let mut wall = StaticBody::new(Vec2::new(4.0, 0.0), Vec2::new(2.0, 10.0))
            .with_elasticity(1.0);
        wall.id = 1;

        let mut bodies = vec![unit_body(Vec2::ZERO).with_elasticity(1.0)];
        bodies[0].velocity = Vec2::new(30.0, 0.0);
        let mut contacts = Vec::new();

        step(&config, 0.1, &mut bodies, &[wall], &mut contacts);

        // Full restitution mirrors the inbound velocity.
        assert!((bodies[0].velocity.x + 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_terminal_velocity_clamps_with_sign() {
        let config = no_gravity();
        let mut bodies = vec![unit_body(Vec2::ZERO).with_terminal_velocity(15.0)];
        bodies[0].velocity = Vec2::new(-40.0, 0.0);
        let mut contacts = Vec::new();

        step(&config, 0.1, &mut bodies, &[], &mut contacts);

        assert_eq!(bodies[0].velocity.x, -15.0);
        assert!((bodies[0].position.x + 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_ground_friction_slows_sliding_body() {
        let config = no_gravity();
        let mut bodies = vec![unit_body(Vec2::ZERO)];
        bodies[0].grounded = true;
        bodies[0].velocity = Vec2::new(10.0, 0.0);
        let mut contacts = Vec::new();

        step(&config, 0.01, &mut bodies, &[], &mut contacts);

        let vx = bodies[0].velocity.x;
        assert!(vx < 10.0 && vx > 0.0, "slowed but not reversed, vx={}", vx);
    }

    #[test]
    fn test_idle_bodies_get_stronger_friction() {
        let config = no_gravity();

        let mut idle = unit_body(Vec2::ZERO);
        idle.grounded = true;
        idle.velocity = Vec2::new(10.0, 0.0);

        let mut driven = unit_body(Vec2::ZERO);
        driven.grounded = true;
        driven.velocity = Vec2::new(10.0, 0.0);
        // Zero-strength motion force: marks the body as driven without
        // adding thrust.
        driven.forces.add(MOTION_FORCE, Some(Vec2::ZERO), 1.0);

        let mut bodies = vec![idle, driven];
        let mut contacts = Vec::new();
        step(&config, 0.01, &mut bodies, &[], &mut contacts);

        assert!(
            bodies[1].velocity.x > bodies[0].velocity.x,
            "idle body should shed speed faster: idle={} driven={}",
            bodies[0].velocity.x,
            bodies[1].velocity.x
        );
    }

    #[test]
    fn test_friction_never_reverses_motion() {
        let config = no_gravity();
        let mut bodies = vec![unit_body(Vec2::ZERO)];
        bodies[0].grounded = true;
        bodies[0].velocity = Vec2::new(0.2, 0.0);
        let mut contacts = Vec::new();

        // Deceleration far exceeds the remaining speed.
        step(&config, 0.1, &mut bodies, &[], &mut contacts);

        assert!(bodies[0].velocity.x >= 0.0);
        assert!(bodies[0].velocity.x.abs() < 1e-4);
    }

    #[test]
    fn test_motion_force_accelerates_airborne_body() {
        let config = no_gravity();
        let mut body = unit_body(Vec2::ZERO)
            .with_motion(MotionIntent::new(1000.0, 0.8, 30.0, 1));
        body.set_move_dir(Vec2::X);

        let mut bodies = vec![body];
        let mut contacts = Vec::new();
        step(&config, 0.1, &mut bodies, &[], &mut contacts);

        // Air control scales the 1000-unit force to 800; over 0.1s on a
        // 10kg body that is 8 units/s.
        assert!((bodies[0].velocity.x - 8.0).abs() < 1e-3);
        assert!((bodies[0].position.x - 0.8).abs() < 1e-3);
    }

    #[test]
    fn test_sort_furthest_first() {
        let mut hits = vec![
            TraceResult {
                distance: 2.0,
                ..Default::default()
            },
            TraceResult {
                distance: 5.0,
                ..Default::default()
            },
            TraceResult {
                distance: 1.0,
                ..Default::default()
            },
        ];

        sort_furthest_first(&mut hits);

        let order: Vec<f32> = hits.iter().map(|h| h.distance).collect();
        assert_eq!(order, vec![5.0, 2.0, 1.0]);
    }

    #[test]
    fn test_contacts_resolve_furthest_first() {
        // Diagonal fall into the corner between a floor and a wall. The
        // floor contact is deeper along the sweep, so it resolves first
        // and the wall applies the final horizontal correction.
        let config = no_gravity();
        let statics = vec![floor(1), {
            let mut wall = StaticBody::new(Vec2::new(4.0, 0.0), Vec2::new(2.0, 10.0))
                .with_elasticity(0.0);
            wall.id = 2;
            wall
        }];

        let mut bodies = vec![unit_body(Vec2::new(0.0, 4.0))];
        bodies[0].velocity = Vec2::new(30.0, -40.0);
        let mut contacts = Vec::new();

        step(&config, 0.1, &mut bodies, &statics, &mut contacts);

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].surface, 1, "deeper floor contact first");
        assert!(contacts[0].ground);
        assert_eq!(contacts[1].surface, 2);

        let body = &bodies[0];
        assert!(body.grounded);
        assert!((body.position.y - 1.0).abs() < 1e-3);
        assert!((body.position.x - 2.0).abs() < 1e-3);
        assert!(body.velocity.abs_diff_eq(Vec2::ZERO, 1e-3));
    }

    #[test]
    fn test_oblique_corner_uses_radius_fallback() {
        let mut surface = StaticBody::new(Vec2::ZERO, Vec2::new(8.0, 8.0)).with_elasticity(0.0);
        surface.id = 1;

        let mut body = unit_body(Vec2::new(4.0, 4.0));
        body.velocity = Vec2::new(-10.0, -10.0);

        let normal = Vec2::new(1.0, 1.0).normalize();
        let hit = TraceResult {
            position: Vec2::new(4.0, 4.0),
            normal,
            collided: true,
            distance: 1.0,
            hit: Some(1),
            ground: false,
        };

        let mut contacts = Vec::new();
        resolve(&mut body, &hit, &surface, &mut contacts);

        let expected = normal * (surface.radius + body.radius);
        assert!(body.position.abs_diff_eq(expected, 1e-4));
        // Inbound normal component fully cancelled at zero elasticity.
        assert!(body.velocity.abs_diff_eq(Vec2::ZERO, 1e-3));
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn test_resolve_ignores_misses() {
        let surface = StaticBody::new(Vec2::ZERO, Vec2::new(8.0, 8.0));
        let mut body = unit_body(Vec2::new(0.0, 10.0));
        body.velocity = Vec2::new(1.0, 2.0);

        let miss = TraceResult::miss(Vec2::new(0.0, 8.0), 2.0);
        let mut contacts = Vec::new();
        resolve(&mut body, &miss, &surface, &mut contacts);

        assert_eq!(body.position, Vec2::new(0.0, 10.0));
        assert_eq!(body.velocity, Vec2::new(1.0, 2.0));
        assert!(contacts.is_empty());
    }
}
