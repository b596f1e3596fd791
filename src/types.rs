use bevy::prelude::*;

use crate::constants::UNIT_FOOTPRINT_HALF;

/// A selectable unit.
///
/// `leader` is a back-reference to the [`Leader`] this unit was grouped
/// under; the leader organizes units but never owns them.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
#[require(Selectable)]
pub struct Unit {
    pub leader: Option<Entity>,
    pub selected: bool,
}

/// A formed group. Spawned at the mean position of its members.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct Leader {
    pub members: Vec<Entity>,
}

/// Ground footprint used by the drag-rectangle overlap query
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Selectable {
    pub half_extents: Vec2, // Half-size on X (x) and Z (y)
}

impl Default for Selectable {
    fn default() -> Self {
        Self {
            half_extents: Vec2::splat(UNIT_FOOTPRINT_HALF),
        }
    }
}

/// Emitted whenever a unit's selection visual is switched on or off
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitHighlight {
    Selected(Entity),
    Deselected(Entity),
}

impl UnitHighlight {
    pub fn unit(&self) -> Entity {
        match *self {
            UnitHighlight::Selected(unit) | UnitHighlight::Deselected(unit) => unit,
        }
    }
}

#[derive(Component)]
pub struct RtsCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}
