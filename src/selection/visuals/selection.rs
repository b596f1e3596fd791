// Selection visuals - unit tint, selection pings and the drag rectangle
use bevy::prelude::*;
use crate::types::*;
use crate::constants::*;

use super::super::selection_box::SelectionBox;
use super::on_ground;

/// Short fading ring spawned when a unit becomes selected
#[derive(Component)]
pub struct SelectionPing {
    pub timer: Timer,
}

/// Tint for a unit: idle, selected, or selected as part of a group
pub fn unit_color(unit: &Unit) -> Color {
    match (unit.selected, unit.leader.is_some()) {
        (false, _) => UNIT_IDLE_COLOR,
        (true, false) => UNIT_SELECTED_COLOR,
        (true, true) => UNIT_GROUPED_COLOR,
    }
}

/// System: Recolor units whose selection or group changed
pub fn unit_highlight_system(
    units: Query<(&Unit, &MeshMaterial3d<StandardMaterial>), Changed<Unit>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (unit, material_handle) in units.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = unit_color(unit);
        }
    }
}

/// System: Spawn a ping for every unit that was just selected
pub fn spawn_selection_pings(
    mut commands: Commands,
    mut highlights: EventReader<UnitHighlight>,
    units: Query<&Transform, With<Unit>>,
) {
    for highlight in highlights.read() {
        let UnitHighlight::Selected(unit) = *highlight else {
            continue;
        };
        let Ok(transform) = units.get(unit) else {
            continue;
        };
        commands.spawn((
            SelectionPing {
                timer: Timer::from_seconds(PING_LIFETIME, TimerMode::Once),
            },
            Transform::from_translation(on_ground(transform.translation)),
        ));
    }
}

/// System: Shrink and fade pings, despawning them when done
pub fn selection_ping_system(
    mut commands: Commands,
    time: Res<Time>,
    mut pings: Query<(Entity, &mut SelectionPing, &Transform)>,
    mut gizmos: Gizmos,
) {
    for (entity, mut ping, transform) in pings.iter_mut() {
        ping.timer.tick(time.delta());

        if ping.timer.finished() {
            commands.entity(entity).despawn();
            continue;
        }

        let progress = ping.timer.fraction();
        let radius = PING_START_RADIUS * (1.0 - 0.5 * progress);
        let color = UNIT_SELECTED_COLOR.with_alpha(1.0 - progress);

        let center = transform.translation;
        let step = std::f32::consts::TAU / PING_SEGMENTS as f32;
        for i in 0..PING_SEGMENTS {
            let a = step * i as f32;
            let b = step * (i + 1) as f32;
            gizmos.line(
                center + Vec3::new(a.cos(), 0.0, a.sin()) * radius,
                center + Vec3::new(b.cos(), 0.0, b.sin()) * radius,
                color,
            );
        }
    }
}

/// System: Outline every live drag rectangle on the ground
pub fn selection_box_gizmo_system(
    boxes: Query<&SelectionBox>,
    mut gizmos: Gizmos,
) {
    for selection_box in boxes.iter() {
        let area = selection_box.area();
        let corners = [
            on_ground(Vec3::new(area.min.x, 0.0, area.min.y)),
            on_ground(Vec3::new(area.max.x, 0.0, area.min.y)),
            on_ground(Vec3::new(area.max.x, 0.0, area.max.y)),
            on_ground(Vec3::new(area.min.x, 0.0, area.max.y)),
        ];
        for i in 0..corners.len() {
            gizmos.line(corners[i], corners[(i + 1) % corners.len()], SELECTION_BOX_COLOR);
        }
    }
}
