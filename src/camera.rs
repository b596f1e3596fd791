// RTS camera - WASD pan, middle-drag orbit, wheel zoom
use bevy::prelude::*;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};

use crate::constants::*;
use crate::types::RtsCamera;

pub fn rts_camera_movement(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    mut scroll_events: EventReader<MouseWheel>,
    mut mouse_motion_events: EventReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &mut RtsCamera)>,
) {
    let Ok((mut transform, mut camera)) = camera_query.single_mut() else {
        return;
    };
    let delta_time = time.delta_secs();

    // Middle mouse drag rotation (left button belongs to selection)
    if mouse_button_input.pressed(MouseButton::Middle) {
        for motion in mouse_motion_events.read() {
            camera.yaw -= motion.delta.x * CAMERA_ROTATION_SPEED;
            camera.pitch = (camera.pitch - motion.delta.y * CAMERA_ROTATION_SPEED)
                .clamp(-1.5, -0.2);
        }
    } else {
        // Drop accumulated motion so the camera doesn't jump on the next drag
        mouse_motion_events.clear();
    }

    let mut movement = Vec3::ZERO;
    if keyboard_input.pressed(KeyCode::KeyW) || keyboard_input.pressed(KeyCode::ArrowUp) {
        movement.z -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) || keyboard_input.pressed(KeyCode::ArrowDown) {
        movement.z += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) || keyboard_input.pressed(KeyCode::ArrowLeft) {
        movement.x -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) || keyboard_input.pressed(KeyCode::ArrowRight) {
        movement.x += 1.0;
    }

    if movement.length() > 0.0 {
        movement = movement.normalize() * CAMERA_SPEED * delta_time;
        // Yaw only, keeps panning on the ground plane
        let yaw = camera.yaw;
        camera.focus_point += Mat3::from_rotation_y(yaw) * movement;
    }

    for scroll in scroll_events.read() {
        let zoom_delta = match scroll.unit {
            MouseScrollUnit::Line => scroll.y * CAMERA_ZOOM_SPEED,
            MouseScrollUnit::Pixel => scroll.y * CAMERA_ZOOM_SPEED * 0.1,
        };
        camera.distance = (camera.distance - zoom_delta)
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    *transform = camera_transform(&camera);
}

/// Camera transform for a focus point, yaw, pitch and distance
pub fn camera_transform(camera: &RtsCamera) -> Transform {
    let rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, camera.pitch, 0.0);
    let offset = rotation * Vec3::new(0.0, 0.0, camera.distance);
    Transform {
        translation: camera.focus_point + offset,
        rotation,
        ..default()
    }
}
