// Group visuals - leader anchor markers linked to their members
use bevy::prelude::*;
use crate::types::*;
use crate::constants::*;

use super::super::state::SelectionState;
use super::on_ground;

/// System: Mark each selected leader's anchor and link it to its members
pub fn leader_gizmo_system(
    selection_state: Res<SelectionState>,
    leaders: Query<(&Leader, &Transform)>,
    units: Query<&Transform, With<Unit>>,
    mut gizmos: Gizmos,
) {
    for &leader_entity in &selection_state.selected_leaders {
        let Ok((leader, anchor)) = leaders.get(leader_entity) else {
            continue;
        };
        let anchor = on_ground(anchor.translation);

        // Diamond at the anchor
        let s = LEADER_MARKER_SIZE;
        let points = [
            anchor + Vec3::new(s, 0.0, 0.0),
            anchor + Vec3::new(0.0, 0.0, s),
            anchor + Vec3::new(-s, 0.0, 0.0),
            anchor + Vec3::new(0.0, 0.0, -s),
        ];
        for i in 0..points.len() {
            gizmos.line(points[i], points[(i + 1) % points.len()], UNIT_GROUPED_COLOR);
        }

        for &member in &leader.members {
            let Ok(transform) = units.get(member) else {
                continue;
            };
            gizmos.line(anchor, on_ground(transform.translation), LEADER_LINK_COLOR);
        }
    }
}
