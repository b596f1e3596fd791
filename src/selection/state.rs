// Selection state resource
use bevy::prelude::*;
use std::mem;

use super::host::SelectionHost;

/// Current selection: ungrouped units and grouped leaders.
///
/// Both lists behave as ordered sets. A unit whose leader is selected is
/// represented only through that leader, never in `selected_units`.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub selected_units: Vec<Entity>,
    pub selected_leaders: Vec<Entity>,
}

impl SelectionState {
    pub fn is_empty(&self) -> bool {
        self.selected_units.is_empty() && self.selected_leaders.is_empty()
    }

    pub fn contains_unit(&self, unit: Entity) -> bool {
        self.selected_units.contains(&unit)
    }

    pub fn contains_leader(&self, leader: Entity) -> bool {
        self.selected_leaders.contains(&leader)
    }

    /// Returns false if the unit was already selected
    pub fn insert_unit(&mut self, unit: Entity) -> bool {
        if self.contains_unit(unit) {
            return false;
        }
        self.selected_units.push(unit);
        true
    }

    /// Returns false if the leader was already selected
    pub fn insert_leader(&mut self, leader: Entity) -> bool {
        if self.contains_leader(leader) {
            return false;
        }
        self.selected_leaders.push(leader);
        true
    }

    /// Drop handles to units and leaders that no longer exist.
    ///
    /// Units of a despawned leader are released and deselected. A live
    /// leader with no live members left is destroyed.
    pub fn retain_live(&mut self, host: &mut impl SelectionHost) {
        self.selected_units.retain(|&unit| host.unit(unit).is_some());

        for leader in mem::take(&mut self.selected_leaders) {
            match host.leader_members(leader) {
                None => {
                    for unit in host.units_led_by(leader) {
                        host.set_leader(unit, None);
                        host.deselect(unit);
                    }
                    debug!("Dropped despawned group {:?} from selection", leader);
                }
                Some(members) if !members.iter().any(|&unit| host.unit(unit).is_some()) => {
                    host.destroy(leader);
                    debug!("Destroyed group {:?} with no live units", leader);
                }
                Some(_) => self.selected_leaders.push(leader),
            }
        }
    }
}
