// Selection input sampling - turns Bevy input state into a per-frame snapshot
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::types::RtsCamera;

use super::utils::screen_to_ground;

/// Key and button bindings for the selection controller
#[derive(Resource, Clone, Debug)]
pub struct SelectionBindings {
    pub primary: MouseButton,
    pub clear: KeyCode,
    pub group: KeyCode,
    pub additive: Vec<KeyCode>,  // Held while dragging to add to the selection
    pub ungroup: Vec<KeyCode>,   // Held with `group` to ungroup instead
}

impl Default for SelectionBindings {
    fn default() -> Self {
        Self {
            primary: MouseButton::Left,
            clear: KeyCode::Escape,
            group: KeyCode::KeyG,
            additive: vec![KeyCode::ControlLeft, KeyCode::ControlRight],
            ungroup: vec![KeyCode::ShiftLeft, KeyCode::ShiftRight],
        }
    }
}

/// Immutable view of the input relevant to selection for one tick
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub primary_held: bool,
    pub pointer_world: Option<Vec3>,  // None when the cursor is off-window or misses the ground
    pub clear_pressed: bool,          // Edge-triggered
    pub group_pressed: bool,          // Edge-triggered
    pub additive_held: bool,
    pub ungroup_held: bool,
}

impl SelectionBindings {
    pub fn snapshot(
        &self,
        mouse_button: &ButtonInput<MouseButton>,
        keyboard: &ButtonInput<KeyCode>,
        pointer_world: Option<Vec3>,
    ) -> InputSnapshot {
        InputSnapshot {
            primary_held: mouse_button.pressed(self.primary),
            pointer_world,
            clear_pressed: keyboard.just_pressed(self.clear),
            group_pressed: keyboard.just_pressed(self.group),
            additive_held: keyboard.any_pressed(self.additive.iter().copied()),
            ungroup_held: keyboard.any_pressed(self.ungroup.iter().copied()),
        }
    }
}

/// System: Sample mouse, keyboard and cursor ground position into `InputSnapshot`
pub fn capture_selection_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<SelectionBindings>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<RtsCamera>>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    let pointer_world = window_query
        .single()
        .ok()
        .and_then(|window| window.cursor_position())
        .and_then(|cursor_pos| {
            let (camera, camera_transform) = camera_query.single().ok()?;
            screen_to_ground(cursor_pos, camera, camera_transform)
        });

    *snapshot = bindings.snapshot(&mouse_button, &keyboard, pointer_world);
}
