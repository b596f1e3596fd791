// Selection summary UI - panel showing what is currently selected

use bevy::prelude::*;

use crate::types::Leader;
use super::state::SelectionState;

/// Marker component for the selection summary panel
#[derive(Component)]
pub struct SelectionSummaryUI;

/// Spawn the selection summary panel (bottom-left corner)
pub fn spawn_selection_summary_ui(mut commands: Commands) {
    commands.spawn((
        Text::new("Nothing selected"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.9, 0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        SelectionSummaryUI,
    ));
}

/// Build the summary text for a selection
pub fn selection_summary(selection_state: &SelectionState, leaders: &Query<&Leader>) -> String {
    if selection_state.is_empty() {
        return "Nothing selected".to_string();
    }

    let mut lines = Vec::new();
    lines.push(format!(
        "=== Selected: {} unit(s), {} group(s) ===",
        selection_state.selected_units.len(),
        selection_state.selected_leaders.len()
    ));

    for (index, &leader) in selection_state.selected_leaders.iter().enumerate() {
        let members = leaders.get(leader).map_or(0, |leader| leader.members.len());
        lines.push(format!("  Group {}: {} units", index + 1, members));
    }

    lines.join("\n")
}

/// Update the summary panel when the selection changes
pub fn update_selection_summary_ui(
    selection_state: Res<SelectionState>,
    leaders: Query<&Leader>,
    mut ui_query: Query<&mut Text, With<SelectionSummaryUI>>,
) {
    if !selection_state.is_changed() {
        return;
    }
    let Ok(mut text) = ui_query.single_mut() else {
        return;
    };
    **text = selection_summary(&selection_state, &leaders);
}
