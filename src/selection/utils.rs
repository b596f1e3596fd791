// Shared utility functions for selection module
use bevy::prelude::*;

use crate::constants::GROUND_Y;

/// Project a world position onto the XZ ground plane
#[inline]
pub fn ground(position: Vec3) -> Vec2 {
    Vec2::new(position.x, position.z)
}

/// Arithmetic mean of a set of positions, `None` when there are none
pub fn mean_position(positions: &[Vec3]) -> Option<Vec3> {
    if positions.is_empty() {
        return None;
    }
    let sum: Vec3 = positions.iter().sum();
    Some(sum / positions.len() as f32)
}

/// Convert screen cursor position to world position on the ground plane (Y = GROUND_Y)
pub fn screen_to_ground(
    cursor_pos: Vec2,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec3> {
    let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;
    ray_to_ground(ray.origin, *ray.direction)
}

/// Intersect a ray with the ground plane.
/// Returns `None` when the ray is parallel to the ground or points away from it.
pub fn ray_to_ground(origin: Vec3, direction: Vec3) -> Option<Vec3> {
    // Solve: origin.y + t * direction.y = GROUND_Y
    if direction.y.abs() < 0.0001 {
        return None;
    }

    let t = (GROUND_Y - origin.y) / direction.y;

    if t > 0.0 {
        Some(origin + direction * t)
    } else {
        None
    }
}
