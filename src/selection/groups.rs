// Selection and grouping operations
use bevy::prelude::*;
use std::mem;

use super::host::SelectionHost;
use super::state::SelectionState;
use super::utils::mean_position;

/// Add every unit among `overlapping` to the selection.
///
/// Ungrouped units are selected individually. A grouped unit pulls in its
/// whole leader, once. In additive mode units already selected are skipped
/// without re-triggering their highlight.
pub fn select_units(
    state: &mut SelectionState,
    host: &mut impl SelectionHost,
    overlapping: &[Entity],
    additive: bool,
) {
    let mut selected_units = 0;
    let mut selected_leaders = 0;

    for &entity in overlapping {
        let Some(unit) = host.unit(entity) else {
            continue;
        };

        if additive && state.contains_unit(entity) {
            continue;
        }

        // A back-reference to a leader that no longer exists counts as ungrouped
        let group = unit
            .leader
            .and_then(|leader| host.leader_members(leader).map(|members| (leader, members)));
        if group.is_none() && unit.leader.is_some() {
            host.set_leader(entity, None);
        }

        match group {
            None => {
                if state.insert_unit(entity) {
                    host.select(entity);
                    selected_units += 1;
                }
            }
            Some((leader, members)) => {
                if state.contains_leader(leader) {
                    continue;
                }
                for member in members {
                    host.select(member);
                }
                state.insert_leader(leader);
                selected_leaders += 1;
            }
        }
    }

    if selected_units > 0 || selected_leaders > 0 {
        info!(
            "Box selected {} units and {} groups ({} units, {} groups total)",
            selected_units,
            selected_leaders,
            state.selected_units.len(),
            state.selected_leaders.len()
        );
    }
}

/// Deselect everything. Leaders stay alive, they are only deselected.
pub fn clear_selection(state: &mut SelectionState, host: &mut impl SelectionHost) {
    if state.is_empty() {
        return;
    }

    for unit in mem::take(&mut state.selected_units) {
        host.deselect(unit);
    }

    for leader in mem::take(&mut state.selected_leaders) {
        let Some(members) = host.leader_members(leader) else {
            continue;
        };
        for unit in members {
            host.deselect(unit);
        }
    }

    info!("Selection cleared");
}

/// Form one group from the whole selection.
///
/// Always ungroups first, so previously grouped members are folded into
/// the new group. The leader is anchored at the mean member position.
pub fn group_selection(
    state: &mut SelectionState,
    host: &mut impl SelectionHost,
) -> Option<Entity> {
    if state.is_empty() {
        return None;
    }

    ungroup_selection(state, host);

    let mut members = Vec::with_capacity(state.selected_units.len());
    let mut positions = Vec::with_capacity(state.selected_units.len());
    for unit in mem::take(&mut state.selected_units) {
        if let Some(view) = host.unit(unit) {
            members.push(unit);
            positions.push(view.position);
        }
    }

    // Every member was despawned by gameplay since it was selected
    let Some(anchor) = mean_position(&positions) else {
        warn!("Tried to group a selection with no live units");
        return None;
    };

    let leader = host.spawn_leader(anchor, members.clone());
    for &unit in &members {
        host.set_leader(unit, Some(leader));
    }
    state.insert_leader(leader);

    info!("Created group {:?} with {} units", leader, members.len());
    Some(leader)
}

/// Dissolve every selected leader, leaving its members selected individually.
/// Returns the number of leaders destroyed.
pub fn ungroup_selection(state: &mut SelectionState, host: &mut impl SelectionHost) -> usize {
    if state.is_empty() {
        return 0;
    }

    let leaders = mem::take(&mut state.selected_leaders);
    for &leader in &leaders {
        if let Some(members) = host.leader_members(leader) {
            for unit in members {
                if host.unit(unit).is_none() {
                    continue;
                }
                host.set_leader(unit, None);
                state.insert_unit(unit);
            }
        }
        host.destroy(leader);
    }

    if !leaders.is_empty() {
        info!("Ungrouped {} groups into {} units", leaders.len(), state.selected_units.len());
    }
    leaders.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Leader, Unit, UnitHighlight};
    use crate::selection::test_support::*;
    use crate::selection::{InputSnapshot, SelectionController};

    fn sorted(mut entities: Vec<Entity>) -> Vec<Entity> {
        entities.sort();
        entities
    }

    #[test]
    fn additive_select_never_duplicates() {
        let mut world = test_world();
        let u1 = spawn_unit(&mut world, 0.0, 0.0);
        let u2 = spawn_unit(&mut world, 1.0, 0.0);
        let u3 = spawn_unit(&mut world, 2.0, 0.0);
        let u4 = spawn_unit(&mut world, 3.0, 0.0);
        let leader = world.spawn_leader(Vec3::new(2.5, 0.0, 0.0), vec![u3, u4]);
        world.set_leader(u3, Some(leader));
        world.set_leader(u4, Some(leader));

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[u1, u2, u3], true);
        select_units(&mut state, &mut world, &[u2, u3, u4, u1], true);
        select_units(&mut state, &mut world, &[u4, u4, u1], true);

        assert_eq!(sorted(state.selected_units.clone()), sorted(vec![u1, u2]));
        assert_eq!(state.selected_leaders, vec![leader]);
    }

    #[test]
    fn grouped_unit_selects_whole_leader_once() {
        let mut world = test_world();
        let u1 = spawn_unit(&mut world, 0.0, 0.0);
        let u2 = spawn_unit(&mut world, 1.0, 0.0);
        let leader = world.spawn_leader(Vec3::new(0.5, 0.0, 0.0), vec![u1, u2]);
        world.set_leader(u1, Some(leader));
        world.set_leader(u2, Some(leader));

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[u1, u2], false);

        assert!(state.selected_units.is_empty());
        assert_eq!(state.selected_leaders, vec![leader]);
        assert_eq!(
            highlights(&world),
            vec![UnitHighlight::Selected(u1), UnitHighlight::Selected(u2)]
        );
    }

    #[test]
    fn non_units_are_ignored() {
        let mut world = test_world();
        let rock = world.spawn(Transform::default()).id();

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[rock], false);
        assert!(state.is_empty());
    }

    #[test]
    fn stale_leader_reference_selects_unit_individually() {
        let mut world = test_world();
        let unit = spawn_unit(&mut world, 0.0, 0.0);
        let leader = world.spawn_leader(Vec3::ZERO, vec![unit]);
        world.set_leader(unit, Some(leader));
        world.destroy(leader);

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[unit], false);

        assert_eq!(state.selected_units, vec![unit]);
        assert_eq!(world.get::<Unit>(unit).unwrap().leader, None);
    }

    #[test]
    fn additive_select_does_not_retrigger_selected_unit() {
        let mut world = test_world();
        let u1 = spawn_unit(&mut world, 0.0, 0.0);
        let u2 = spawn_unit(&mut world, 1.0, 0.0);

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[u1], false);
        clear_highlights(&mut world);

        select_units(&mut state, &mut world, &[u1, u2], true);

        assert_eq!(state.selected_units, vec![u1, u2]);
        assert_eq!(highlights(&world), vec![UnitHighlight::Selected(u2)]);
    }

    #[test]
    fn clear_deselects_units_and_leader_members() {
        let mut world = test_world();
        let u1 = spawn_unit(&mut world, 0.0, 0.0);
        let u2 = spawn_unit(&mut world, 1.0, 0.0);
        let u3 = spawn_unit(&mut world, 2.0, 0.0);

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[u1, u2], false);
        let leader = group_selection(&mut state, &mut world).unwrap();
        select_units(&mut state, &mut world, &[u3], true);
        clear_highlights(&mut world);

        clear_selection(&mut state, &mut world);

        assert!(state.is_empty());
        for unit in [u1, u2, u3] {
            assert!(!world.get::<Unit>(unit).unwrap().selected);
        }
        assert_eq!(
            highlights(&world),
            vec![
                UnitHighlight::Deselected(u3),
                UnitHighlight::Deselected(u1),
                UnitHighlight::Deselected(u2),
            ]
        );
        // Only deselected, not destroyed
        assert!(world.get::<Leader>(leader).is_some());
    }

    #[test]
    fn clear_on_empty_selection_is_noop() {
        let mut world = test_world();
        let mut state = SelectionState::default();
        clear_selection(&mut state, &mut world);
        assert!(state.is_empty());
        assert!(highlights(&world).is_empty());
    }

    #[test]
    fn group_two_units_anchors_at_midpoint() {
        let mut world = test_world();
        let u1 = spawn_unit(&mut world, 0.0, 0.0);
        let u2 = spawn_unit(&mut world, 4.0, 2.0);

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[u1, u2], false);
        let leader = group_selection(&mut state, &mut world).unwrap();

        assert!(state.selected_units.is_empty());
        assert_eq!(state.selected_leaders, vec![leader]);
        assert_eq!(world.leader_members(leader), Some(vec![u1, u2]));
        assert_eq!(world.get::<Transform>(leader).unwrap().translation, Vec3::new(2.0, 0.0, 1.0));
        assert_eq!(world.unit(u1).unwrap().leader, Some(leader));
        assert_eq!(world.unit(u2).unwrap().leader, Some(leader));
    }

    #[test]
    fn group_on_empty_selection_is_noop() {
        let mut world = test_world();
        let mut state = SelectionState::default();
        assert_eq!(group_selection(&mut state, &mut world), None);
        assert_eq!(world.query::<&Leader>().iter(&world).count(), 0);
    }

    #[test]
    fn regroup_folds_existing_leader_into_new_group() {
        let mut world = test_world();
        let u1 = spawn_unit(&mut world, 0.0, 0.0);
        let u2 = spawn_unit(&mut world, 2.0, 0.0);
        let u3 = spawn_unit(&mut world, 4.0, 0.0);

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[u1, u2], false);
        let old_leader = group_selection(&mut state, &mut world).unwrap();
        select_units(&mut state, &mut world, &[u3], true);

        let new_leader = group_selection(&mut state, &mut world).unwrap();

        assert!(world.get::<Leader>(old_leader).is_none());
        assert_eq!(state.selected_leaders, vec![new_leader]);
        assert_eq!(
            sorted(world.leader_members(new_leader).unwrap()),
            sorted(vec![u1, u2, u3])
        );
        assert_eq!(world.get::<Transform>(new_leader).unwrap().translation, Vec3::new(2.0, 0.0, 0.0));
        for unit in [u1, u2, u3] {
            assert_eq!(world.unit(unit).unwrap().leader, Some(new_leader));
        }
    }

    #[test]
    fn ungroup_moves_members_to_units_and_destroys_leader() {
        let mut world = test_world();
        let u1 = spawn_unit(&mut world, 0.0, 0.0);
        let u2 = spawn_unit(&mut world, 1.0, 0.0);
        let u3 = spawn_unit(&mut world, 2.0, 0.0);

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[u1, u2, u3], false);
        let leader = group_selection(&mut state, &mut world).unwrap();

        assert_eq!(ungroup_selection(&mut state, &mut world), 1);

        assert_eq!(sorted(state.selected_units.clone()), sorted(vec![u1, u2, u3]));
        assert!(state.selected_leaders.is_empty());
        assert!(world.get::<Leader>(leader).is_none());
        for unit in [u1, u2, u3] {
            assert_eq!(world.unit(unit).unwrap().leader, None);
            assert!(world.unit(unit).unwrap().selected);
        }
    }

    #[test]
    fn ungroup_skips_despawned_members() {
        let mut world = test_world();
        let u1 = spawn_unit(&mut world, 0.0, 0.0);
        let u2 = spawn_unit(&mut world, 1.0, 0.0);

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[u1, u2], false);
        group_selection(&mut state, &mut world);
        world.destroy(u2);

        ungroup_selection(&mut state, &mut world);
        assert_eq!(state.selected_units, vec![u1]);
    }

    #[test]
    fn group_key_after_all_members_despawned_is_noop() {
        let mut world = test_world();
        let unit = spawn_unit(&mut world, 0.0, 0.0);

        let mut state = SelectionState::default();
        select_units(&mut state, &mut world, &[unit], false);
        let leader = group_selection(&mut state, &mut world).unwrap();
        world.destroy(unit);

        let mut controller = SelectionController::default();
        let group = InputSnapshot { group_pressed: true, ..default() };
        controller.tick(&group, &mut state, &mut world);

        assert!(state.is_empty());
        assert!(world.get::<Leader>(leader).is_none());
        assert_eq!(world.query::<&Leader>().iter(&world).count(), 0);
    }

    #[test]
    fn regroup_of_leader_with_no_live_members_returns_none() {
        let mut world = test_world();
        let unit = spawn_unit(&mut world, 0.0, 0.0);
        let leader = world.spawn_leader(Vec3::ZERO, vec![unit]);
        world.set_leader(unit, Some(leader));
        world.destroy(unit);

        let mut state = SelectionState {
            selected_units: Vec::new(),
            selected_leaders: vec![leader],
        };

        assert_eq!(group_selection(&mut state, &mut world), None);
        assert!(state.is_empty());
        assert!(world.get::<Leader>(leader).is_none());
    }
}
