// Selection module - RTS-style drag selection and unit grouping
//
// Submodules:
// - state: SelectionState resource
// - selection_box: Drag rectangle and its overlap query
// - host: Engine primitives (spatial query, capability probes) on the ECS World
// - groups: Select, clear, group and ungroup operations
// - input: Bindings and per-frame input snapshot
// - controller: Idle/Dragging state machine driven once per tick
// - visuals: Visual feedback systems (tints, pings, gizmos)
// - ui: Selection summary panel
// - utils: Shared utility functions

mod state;
mod selection_box;
pub mod host;
pub mod groups;
mod input;
mod controller;
pub mod visuals;
mod ui;
pub mod utils;

use bevy::prelude::*;

use crate::types::UnitHighlight;

// Re-export main types for external use
pub use state::SelectionState;
pub use selection_box::SelectionBox;
pub use host::{SelectionHost, SpatialQuery, UnitView};
pub use input::{capture_selection_input, InputSnapshot, SelectionBindings};
pub use controller::{selection_tick_system, DragState, SelectionController};
pub use ui::{spawn_selection_summary_ui, update_selection_summary_ui};

/// Drag selection, grouping, and their visual feedback
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionBindings>()
            .init_resource::<InputSnapshot>()
            .init_resource::<SelectionState>()
            .init_resource::<SelectionController>()
            .add_event::<UnitHighlight>()
            .add_systems(Startup, spawn_selection_summary_ui)
            .add_systems(Update, (capture_selection_input, selection_tick_system).chain())
            .add_systems(
                Update,
                (
                    visuals::unit_highlight_system,
                    visuals::spawn_selection_pings,
                    visuals::selection_ping_system,
                    visuals::selection_box_gizmo_system,
                    visuals::leader_gizmo_system,
                    update_selection_summary_ui,
                )
                    .after(selection_tick_system),
            );
    }
}
