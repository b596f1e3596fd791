// Drag-selection rectangle
use bevy::prelude::*;

use super::host::SpatialQuery;
use super::utils::ground;

/// Transient rectangle swept between pointer-down and the current pointer.
/// Lives as an entity for the duration of one drag.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SelectionBox {
    start: Vec3,
    end: Vec3,
}

impl SelectionBox {
    /// Zero-size box anchored at `at`
    pub fn new(at: Vec3) -> Self {
        Self { start: at, end: at }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    pub fn set_start(&mut self, start: Vec3) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Vec3) {
        self.end = end;
    }

    /// Normalized ground rectangle. Corner order doesn't matter.
    pub fn area(&self) -> Rect {
        Rect::from_corners(ground(self.start), ground(self.end))
    }

    pub fn query_overlaps(&self, spatial: &mut impl SpatialQuery) -> Vec<Entity> {
        spatial.overlapping(self.area())
    }
}

/// True when a footprint centered at `center` touches `area` (edges inclusive)
#[inline]
pub fn footprint_overlaps(area: Rect, center: Vec2, half_extents: Vec2) -> bool {
    let footprint = Rect::from_center_half_size(center, half_extents);
    footprint.min.x <= area.max.x
        && footprint.max.x >= area.min.x
        && footprint.min.y <= area.max.y
        && footprint.max.y >= area.min.y
}
