// Per-tick selection state machine
use bevy::prelude::*;

use super::groups::{clear_selection, group_selection, select_units, ungroup_selection};
use super::host::SelectionHost;
use super::input::InputSnapshot;
use super::selection_box::SelectionBox;
use super::state::SelectionState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        selection_box: Entity,
        additive: bool,
    },
}

/// Drives drag selection and the clear/group hotkeys from an `InputSnapshot`
#[derive(Resource, Default, Debug)]
pub struct SelectionController {
    drag: DragState,
}

impl SelectionController {
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Advance one frame. Steps run in a fixed order:
    /// drag update or release, then clear, then group/ungroup.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        state: &mut SelectionState,
        host: &mut impl SelectionHost,
    ) {
        state.retain_live(host);

        if input.primary_held {
            self.update_drag(input, host);
        } else {
            self.finish_drag(state, host);
        }

        if input.clear_pressed {
            clear_selection(state, host);
        }

        if input.group_pressed {
            if input.ungroup_held {
                ungroup_selection(state, host);
            } else {
                group_selection(state, host);
            }
        }
    }

    fn update_drag(&mut self, input: &InputSnapshot, host: &mut impl SelectionHost) {
        match &mut self.drag {
            DragState::Idle => {
                let Some(pointer) = input.pointer_world else {
                    return;
                };
                let selection_box = host.spawn_selection_box(SelectionBox::new(pointer));
                self.drag = DragState::Dragging {
                    selection_box,
                    additive: input.additive_held,
                };
                debug!("Drag started at {:?} (additive: {})", pointer, input.additive_held);
            }
            DragState::Dragging { selection_box, additive } => {
                // Releasing the modifier mid-drag cancels additive mode for good
                if !input.additive_held {
                    *additive = false;
                }

                let entity = *selection_box;
                let Some(pointer) = input.pointer_world else {
                    return;
                };
                match host.selection_box_mut(entity) {
                    Some(selection_box) => selection_box.set_end(pointer),
                    None => {
                        warn!("Selection box {:?} disappeared mid-drag", entity);
                        self.drag = DragState::Idle;
                    }
                }
            }
        }
    }

    fn finish_drag(&mut self, state: &mut SelectionState, host: &mut impl SelectionHost) {
        let DragState::Dragging { selection_box, additive } = self.drag else {
            return;
        };
        self.drag = DragState::Idle;

        if !additive {
            clear_selection(state, host);
        }

        let Some(area) = host.selection_box(selection_box).copied() else {
            return;
        };
        let overlapping = area.query_overlaps(host);
        select_units(state, host, &overlapping, additive);
        host.destroy(selection_box);
    }
}

/// System: Run one controller tick against the ECS world
pub fn selection_tick_system(world: &mut World) {
    let input = *world.resource::<InputSnapshot>();
    world.resource_scope(|world, mut controller: Mut<SelectionController>| {
        world.resource_scope(|world, mut state: Mut<SelectionState>| {
            controller.tick(&input, &mut state, world);
        });
    });
}
