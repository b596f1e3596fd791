use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use rts_select::camera::{camera_transform, rts_camera_movement};
use rts_select::constants::*;
use rts_select::selection::SelectionPlugin;
use rts_select::types::{RtsCamera, Unit};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(SelectionPlugin)
        .add_systems(Startup, (setup_scene, spawn_units))
        .add_systems(Update, rts_camera_movement)
        .run();
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground plane
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.32, 0.22),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::from_xyz(0.0, GROUND_Y, 0.0),
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform {
            translation: Vec3::new(0.0, 50.0, 0.0),
            rotation: Quat::from_rotation_x(-PI / 4.0),
            ..default()
        },
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.4, 0.4, 0.6),
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    let camera = RtsCamera {
        focus_point: Vec3::ZERO,
        yaw: 0.0,
        pitch: CAMERA_INITIAL_PITCH,
        distance: CAMERA_INITIAL_DISTANCE,
    };
    commands.spawn((Camera3d::default(), camera_transform(&camera), camera));

    commands.spawn((
        Text::new(
            "Left-drag: Select | Ctrl+drag: Add to selection | Esc: Clear\n\
             G: Group selection | Shift+G: Ungroup | WASD: Pan | Middle-drag: Rotate | Scroll: Zoom",
        ),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}

/// Spawn a loose grid of unit cubes, each with its own material so it can be tinted
fn spawn_units(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let mesh = meshes.add(Cuboid::from_length(UNIT_SIZE));

    let width = (FIELD_COLUMNS - 1) as f32 * FIELD_SPACING;
    let depth = (FIELD_ROWS - 1) as f32 * FIELD_SPACING;

    for row in 0..FIELD_ROWS {
        for column in 0..FIELD_COLUMNS {
            let x = column as f32 * FIELD_SPACING - width / 2.0
                + rng.gen_range(-FIELD_JITTER..FIELD_JITTER);
            let z = row as f32 * FIELD_SPACING - depth / 2.0
                + rng.gen_range(-FIELD_JITTER..FIELD_JITTER);

            commands.spawn((
                Unit::default(),
                Mesh3d(mesh.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: UNIT_IDLE_COLOR,
                    ..default()
                })),
                Transform::from_xyz(x, GROUND_Y + UNIT_SIZE / 2.0, z),
                Name::new(format!("Unit {}-{}", row, column)),
            ));
        }
    }

    info!("Spawned {} units", FIELD_ROWS * FIELD_COLUMNS);
}
