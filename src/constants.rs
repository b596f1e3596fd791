use bevy::prelude::Color;

// Ground plane
pub const GROUND_Y: f32 = 0.0;
pub const GROUND_SIZE: f32 = 200.0;

// Demo field settings
pub const FIELD_COLUMNS: usize = 10;
pub const FIELD_ROWS: usize = 6;
pub const FIELD_SPACING: f32 = 4.0;
pub const FIELD_JITTER: f32 = 0.8;          // Random offset so the grid doesn't look stamped
pub const UNIT_SIZE: f32 = 1.2;

// Selection footprint (half extents on the XZ plane)
pub const UNIT_FOOTPRINT_HALF: f32 = UNIT_SIZE / 2.0;

// RTS Camera settings
pub const CAMERA_SPEED: f32 = 40.0;
pub const CAMERA_ZOOM_SPEED: f32 = 5.0;
pub const CAMERA_MIN_DISTANCE: f32 = 15.0;
pub const CAMERA_MAX_DISTANCE: f32 = 150.0;
pub const CAMERA_ROTATION_SPEED: f32 = 0.005;
pub const CAMERA_INITIAL_DISTANCE: f32 = 60.0;
pub const CAMERA_INITIAL_PITCH: f32 = -0.9;

// Unit colors
pub const UNIT_IDLE_COLOR: Color = Color::srgb(0.55, 0.58, 0.62);
pub const UNIT_SELECTED_COLOR: Color = Color::srgb(0.2, 0.9, 1.0);     // Cyan
pub const UNIT_GROUPED_COLOR: Color = Color::srgb(1.0, 0.9, 0.2);      // Yellow

// Selection gizmos
pub const SELECTION_BOX_COLOR: Color = Color::srgba(0.3, 1.0, 0.4, 0.9);
pub const LEADER_LINK_COLOR: Color = Color::srgba(1.0, 0.9, 0.2, 0.5);
pub const LEADER_MARKER_SIZE: f32 = 0.8;
pub const GIZMO_GROUND_OFFSET: f32 = 0.05;    // Lift gizmos off the ground to prevent z-fighting

// Selection ping (short ring flashed when a unit becomes selected)
pub const PING_LIFETIME: f32 = 0.35;
pub const PING_START_RADIUS: f32 = 1.4;
pub const PING_SEGMENTS: usize = 16;
