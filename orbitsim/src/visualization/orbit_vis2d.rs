use std::collections::VecDeque;
use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::export::snapshot::write_snapshot;
use crate::simulation::color::unpack_rgb;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2};
use crate::visualization::collision::{CollisionPolicy, PendingCollision};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct StatusText;

/// Viewer-side state that the simulator knows nothing about
#[derive(Resource)]
struct ViewerState {
    initial_bodies: Vec<Body>, // restored on R
    paused: bool,
    pending: Option<PendingCollision>,
    policy: CollisionPolicy,
    trails: Vec<VecDeque<Vec2>>,
    respawn: bool,
    export: Option<(PathBuf, Timer)>,
}

const MIN_RADIUS_PX: f32 = 1.0;

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.simulator.bodies().len());

    let state = ViewerState {
        initial_bodies: scenario.simulator.bodies().to_vec(),
        paused: false,
        pending: None,
        policy: CollisionPolicy::new(scenario.view.scale),
        trails: Vec::new(),
        respawn: true,
        export: scenario.export.as_ref().map(|e| {
            (
                PathBuf::from(&e.path),
                Timer::from_seconds(e.interval.max(0.01) as f32, TimerMode::Repeating),
            )
        }),
    };

    let window = Window {
        title: "orbitsim".into(),
        resolution: WindowResolution::new(scenario.view.width as f32, scenario.view.height as f32),
        ..default()
    };

    App::new()
        // env_logger already owns the `log` facade
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .insert_resource(ClearColor(Color::srgb_u8(10, 10, 20)))
        .insert_resource(scenario)
        .insert_resource(state)
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                input_system,
                physics_step_system,
                respawn_bodies_system,
                sync_transforms_system,
                trails_system,
                status_text_system,
                export_system,
            )
                .chain(),
        )
        .run();
}

fn setup_system(mut commands: Commands) {
    // 2D camera, world origin at window center with +y up
    commands.spawn(Camera2dBundle::default());

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 18.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        }),
        StatusText,
    ));
}

fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut state: ResMut<ViewerState>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
        return;
    }

    if let Some(pair) = state.pending {
        // Collision prompt: Y deletes the lighter body, N dismisses
        if keys.just_pressed(KeyCode::KeyY) {
            state.policy.delete_lighter(scenario.simulator.bodies_mut(), pair);
            state.pending = None;
            state.respawn = true;
        } else if keys.just_pressed(KeyCode::KeyN) {
            state.policy.dismiss(pair);
            state.pending = None;
        }
        return;
    }

    if keys.just_pressed(KeyCode::Space) {
        state.paused = !state.paused;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        let initial = state.initial_bodies.clone();
        scenario.simulator.set_bodies(initial);
        state.policy.clear_dismissed();
        state.trails.clear();
        state.respawn = true;
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut state: ResMut<ViewerState>) {
    if state.paused || state.pending.is_some() {
        return;
    }

    scenario.simulator.step();

    let before = scenario.simulator.bodies().len();
    let pending = state.policy.resolve(scenario.simulator.bodies_mut());
    if scenario.simulator.bodies().len() != before {
        state.respawn = true;
    }

    if let Some(pair) = pending {
        log::info!("collision between bodies {} and {}: press Y to delete the lighter, N to ignore", pair.a, pair.b);
        state.pending = Some(pair);
    }
}

fn respawn_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut state: ResMut<ViewerState>,
    query: Query<Entity, With<BodyIndex>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let bodies = scenario.simulator.bodies();
    if !state.respawn && query.iter().count() == bodies.len() {
        return;
    }

    for entity in &query {
        commands.entity(entity).despawn();
    }

    let scale = scenario.view.scale;
    for (i, body) in bodies.iter().enumerate() {
        let (r, g, b) = unpack_rgb(body.color());
        let radius_screen = (body.radius() as f32).max(MIN_RADIUS_PX);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_translation(world_to_screen(body.position, scale).extend(1.0)),
                ..default()
            },
            BodyIndex(i),
        ));
    }

    state.trails.clear();
    state.respawn = false;
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = scenario.view.scale;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.simulator.bodies().get(*i) {
            let p = world_to_screen(b.position, scale);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

fn trails_system(mut gizmos: Gizmos, scenario: Res<Scenario>, mut state: ResMut<ViewerState>) {
    let bodies = scenario.simulator.bodies();
    let scale = scenario.view.scale;
    let max_len = scenario.view.trail_length;

    if state.trails.len() != bodies.len() {
        state.trails = vec![VecDeque::with_capacity(max_len); bodies.len()];
    }

    for (body, trail) in bodies.iter().zip(state.trails.iter_mut()) {
        trail.push_back(world_to_screen(body.position, scale));
        while trail.len() > max_len {
            trail.pop_front();
        }

        if trail.len() < 2 {
            continue;
        }

        // Older segments fade out
        let (r, g, b) = unpack_rgb(body.color());
        let len = trail.len() as f32;
        gizmos.linestrip_gradient_2d(trail.iter().enumerate().map(|(idx, p)| {
            let alpha = 50.0 + 200.0 * (idx as f32 / len);
            (*p, Color::srgba_u8(r, g, b, alpha as u8))
        }));
    }
}

fn status_text_system(
    scenario: Res<Scenario>,
    state: Res<ViewerState>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    let sim = &scenario.simulator;
    let mode = match (state.pending, state.paused) {
        (Some(pair), _) => format!("collision {} / {}: [Y] delete lighter  [N] ignore", pair.a, pair.b),
        (None, true) => "paused".to_string(),
        (None, false) => "running".to_string(),
    };

    for mut text in &mut query {
        text.sections[0].value = format!(
            "t = {:.3e}  {:?} x{}  bodies: {}  {}",
            sim.time(),
            sim.integrator(),
            sim.substeps(),
            sim.bodies().len(),
            mode,
        );
    }
}

fn export_system(time: Res<Time>, scenario: Res<Scenario>, mut state: ResMut<ViewerState>) {
    let Some((path, timer)) = state.export.as_mut() else {
        return;
    };

    if !timer.tick(time.delta()).just_finished() {
        return;
    }

    if let Err(err) = write_snapshot(path, &scenario.simulator) {
        log::warn!("state export failed: {err:#}");
    }
}

/// World meters -> screen pixels, origin at the window center
fn world_to_screen(p: NVec2, scale: f64) -> Vec2 {
    Vec2::new((p.x * scale) as f32, (p.y * scale) as f32)
}
