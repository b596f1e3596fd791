// Visual systems for selection feedback
//
// Submodules:
// - selection: Unit highlight colors, selection pings, drag rectangle
// - group: Leader anchor markers and member links

mod selection;
mod group;

pub use selection::{
    unit_color,
    unit_highlight_system,
    spawn_selection_pings,
    selection_ping_system,
    selection_box_gizmo_system,
    SelectionPing,
};
pub use group::leader_gizmo_system;

use bevy::prelude::*;

use crate::constants::{GIZMO_GROUND_OFFSET, GROUND_Y};

/// Lift a position onto the gizmo layer just above the ground
#[inline]
fn on_ground(position: Vec3) -> Vec3 {
    position.with_y(GROUND_Y + GIZMO_GROUND_OFFSET)
}
