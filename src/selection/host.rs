// Engine primitives consumed by the selection controller, implemented on the ECS World
use bevy::prelude::*;
use rayon::prelude::*;

use crate::types::{Leader, Selectable, Unit, UnitHighlight};

use super::selection_box::{footprint_overlaps, SelectionBox};
use super::utils::ground;

/// Returns every entity whose ground footprint overlaps `area`
pub trait SpatialQuery {
    fn overlapping(&mut self, area: Rect) -> Vec<Entity>;
}

/// Read-only view of an entity's unit capability
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitView {
    pub leader: Option<Entity>,
    pub position: Vec3,
    pub selected: bool,
}

/// Everything the selection state machine needs from its host.
///
/// Capability probes return `None` for entities that are gone or don't
/// carry the capability. Mutators on such entities are no-ops.
pub trait SelectionHost: SpatialQuery {
    fn unit(&self, entity: Entity) -> Option<UnitView>;
    fn leader_members(&self, leader: Entity) -> Option<Vec<Entity>>;
    /// Units whose back-reference points at `leader`, even if it is gone
    fn units_led_by(&mut self, leader: Entity) -> Vec<Entity>;

    fn select(&mut self, unit: Entity);
    fn deselect(&mut self, unit: Entity);
    fn set_leader(&mut self, unit: Entity, leader: Option<Entity>);

    fn spawn_leader(&mut self, anchor: Vec3, members: Vec<Entity>) -> Entity;
    fn spawn_selection_box(&mut self, selection_box: SelectionBox) -> Entity;
    fn selection_box(&self, entity: Entity) -> Option<&SelectionBox>;
    fn selection_box_mut(&mut self, entity: Entity) -> Option<&mut SelectionBox>;

    fn destroy(&mut self, entity: Entity);
}

impl SpatialQuery for World {
    fn overlapping(&mut self, area: Rect) -> Vec<Entity> {
        let mut query = self.query::<(Entity, &Transform, &Selectable)>();
        let candidates: Vec<(Entity, Vec2, Vec2)> = query
            .iter(self)
            .map(|(entity, transform, selectable)| {
                (entity, ground(transform.translation), selectable.half_extents)
            })
            .collect();

        candidates
            .par_iter()
            .filter(|(_, center, half_extents)| footprint_overlaps(area, *center, *half_extents))
            .map(|(entity, _, _)| *entity)
            .collect()
    }
}

impl SelectionHost for World {
    fn unit(&self, entity: Entity) -> Option<UnitView> {
        let unit = self.get::<Unit>(entity)?;
        let position = self
            .get::<Transform>(entity)
            .map(|transform| transform.translation)
            .unwrap_or(Vec3::ZERO);
        Some(UnitView {
            leader: unit.leader,
            position,
            selected: unit.selected,
        })
    }

    fn leader_members(&self, leader: Entity) -> Option<Vec<Entity>> {
        self.get::<Leader>(leader).map(|leader| leader.members.clone())
    }

    fn units_led_by(&mut self, leader: Entity) -> Vec<Entity> {
        let mut query = self.query::<(Entity, &Unit)>();
        query
            .iter(self)
            .filter(|(_, unit)| unit.leader == Some(leader))
            .map(|(entity, _)| entity)
            .collect()
    }

    fn select(&mut self, unit: Entity) {
        let Some(mut state) = self.get_mut::<Unit>(unit) else {
            return;
        };
        state.selected = true;
        self.send_event(UnitHighlight::Selected(unit));
    }

    fn deselect(&mut self, unit: Entity) {
        let Some(mut state) = self.get_mut::<Unit>(unit) else {
            return;
        };
        state.selected = false;
        self.send_event(UnitHighlight::Deselected(unit));
    }

    fn set_leader(&mut self, unit: Entity, leader: Option<Entity>) {
        if let Some(mut state) = self.get_mut::<Unit>(unit) {
            state.leader = leader;
        }
    }

    fn spawn_leader(&mut self, anchor: Vec3, members: Vec<Entity>) -> Entity {
        self.spawn((
            Leader { members },
            Transform::from_translation(anchor),
            Name::new("Group Leader"),
        ))
        .id()
    }

    fn spawn_selection_box(&mut self, selection_box: SelectionBox) -> Entity {
        self.spawn((selection_box, Name::new("Selection Box"))).id()
    }

    fn selection_box(&self, entity: Entity) -> Option<&SelectionBox> {
        self.get::<SelectionBox>(entity)
    }

    fn selection_box_mut(&mut self, entity: Entity) -> Option<&mut SelectionBox> {
        self.get_mut::<SelectionBox>(entity).map(Mut::into_inner)
    }

    fn destroy(&mut self, entity: Entity) {
        if !self.despawn(entity) {
            debug!("Tried to destroy missing entity {:?}", entity);
        }
    }
}
