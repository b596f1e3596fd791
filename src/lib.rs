//! RTS drag selection and unit grouping for Bevy.
//!
//! Drag a rectangle with the primary button to select units, hold the
//! additive modifier to add to the selection, press the group key to form a
//! group from everything selected, and the group key with the ungroup
//! modifier to dissolve selected groups. See [`selection::SelectionPlugin`].

pub mod camera;
pub mod constants;
pub mod selection;
pub mod types;
