/*
 * Steering Module
 *
 * Pure per-frame direction rule. Particles near the pointer are deflected
 * along a clockwise tangent around it, blended against their spawn heading;
 * particles outside the connection distance travel on their spawn heading,
 * every frame. There is no persistent drift away from the spawn direction.
 */

use nannou::prelude::*;

// Direction a particle travels this frame. `spawn_direction` is the
// particle's immutable spawn-time heading, not its heading from the
// previous frame.
pub fn steer(
    position: Point2,
    spawn_direction: Vec2,
    pointer: Point2,
    connection_distance: f32,
    push_factor: f32,
) -> Vec2 {
    let distance = position.distance(pointer);

    if distance >= connection_distance {
        return spawn_direction;
    }

    let toward = normalize_or_zero(pointer - position);

    // Clockwise tangent, so nearby particles graze the pointer rather than
    // converging on it.
    let tangent = vec2(toward.y, -toward.x) * push_factor;

    // 1 = pointer coincident, 0 = at the connection threshold
    let t = 1.0 - distance / connection_distance;

    tangent.lerp(spawn_direction, t)
}

// Zero-length vectors normalize to zero instead of dividing by zero. Hit
// when a particle sits exactly at the pointer position.
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let length_squared = v.length_squared();

    if length_squared > 0.0 {
        v / length_squared.sqrt()
    } else {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNECTION: f32 = 100.0;
    const PUSH: f32 = 1.5;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn far_pointer_returns_spawn_direction_unchanged() {
        let spawn = vec2(0.6, -0.8);
        let result = steer(pt2(10.0, 10.0), spawn, pt2(500.0, 500.0), CONNECTION, PUSH);
        assert_eq!(result, spawn);
    }

    #[test]
    fn coincident_pointer_falls_back_to_spawn_direction() {
        let spawn = vec2(1.0, 0.0);
        let result = steer(pt2(50.0, 50.0), spawn, pt2(50.0, 50.0), CONNECTION, PUSH);
        assert!(result.x.is_finite() && result.y.is_finite());
        assert!(close(result, spawn));
    }

    #[test]
    fn blend_matches_tangent_plus_spawn_mix() {
        let position = pt2(100.0, 100.0);
        let pointer = pt2(150.0, 100.0); // 50 away, toward = (1, 0)
        let spawn = vec2(0.0, 1.0);

        let result = steer(position, spawn, pointer, CONNECTION, PUSH);

        // tangent = (0, -1) * push, t = 0.5
        let tangent = vec2(0.0, -PUSH);
        let expected = tangent + (spawn - tangent) * 0.5;
        assert!(close(result, expected));
    }

    #[test]
    fn near_pointer_approaches_spawn_direction() {
        // Almost coincident pointer: t ~= 1, blend lands close to the spawn
        // heading rather than the tangent.
        let spawn = vec2(0.0, 1.0);
        let result = steer(pt2(100.0, 100.0), spawn, pt2(100.5, 100.0), CONNECTION, PUSH);
        assert!((result - spawn).length() < 0.05);
    }

    #[test]
    fn normalize_or_zero_handles_degenerate_input() {
        assert_eq!(normalize_or_zero(Vec2::ZERO), Vec2::ZERO);
        assert!(close(normalize_or_zero(vec2(0.0, 3.0)), vec2(0.0, 1.0)));
    }
}
