//! Debug toggle headless runner.
//!
//! Builds the debug world, spawns a presenter and a long-press button, and
//! simulates a user holding the button for `--hold` seconds at `--fps`
//! frames per second. It then switches scene, lets the new scene's presenter
//! link to the surviving service, and shuts down.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --hold 1.2 --duration 1.0
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use debugtoggle::events::pointer::{PointerDownEvent, PointerUpEvent};
use debugtoggle::host::{
    build_update_schedule, init_world, is_debug_mode, load_next_scene, run_frame,
    shutdown, spawn_long_press_button, spawn_presenter,
};
use debugtoggle::reactive::Subscription;
use debugtoggle::resources::debugconfig::{BuildProfile, DebugConfig};
use debugtoggle::resources::debugservice::DebugCore;
use debugtoggle::resources::presenterlinks::PresenterLinks;
use debugtoggle::resources::servicelocator::ServiceLocator;

/// Long-press debug toggle simulator
#[derive(Parser)]
#[command(version, about = "Simulates a long-press debug toggle and presenter linking across scenes.")]
struct Cli {
    /// INI settings file (default: ./debug.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seconds the simulated pointer stays down.
    #[arg(long, default_value_t = 1.5)]
    hold: f32,

    /// Override the configured long-press duration in seconds.
    #[arg(long)]
    duration: Option<f32>,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Behave as a release build: presenters remove themselves.
    #[arg(long)]
    force_release_build: bool,

    /// Spawn a second presenter in the next scene to show duplicate removal.
    #[arg(long)]
    duplicate: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DebugConfig::with_path(path),
        None => DebugConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::info!("{}, using defaults", e);
    }
    if let Some(duration) = cli.duration {
        config.set_long_press_duration(duration);
    }
    if cli.force_release_build {
        config.force_release_build = true;
    }
    let fps = cli.fps.max(1);
    let dt = 1.0 / fps as f32;

    let mut world = init_world(config, BuildProfile::default());
    let mut update = build_update_schedule();

    // --------------- Scene 1 ---------------
    let _presenter = spawn_presenter(&mut world, false);
    let button = spawn_long_press_button(&mut world);
    run_frame(&mut world, &mut update, dt);

    let _watch = watch_debug_flag(&world);

    world.trigger(PointerDownEvent { entity: button });
    let mut held = 0.0;
    while held < cli.hold {
        run_frame(&mut world, &mut update, dt);
        held += dt;
    }
    world.trigger(PointerUpEvent { entity: button });
    run_frame(&mut world, &mut update, dt);

    println!(
        "Held for {:.2}s: debug mode is {}",
        cli.hold,
        if is_debug_mode(&world) { "ON" } else { "OFF" }
    );

    // --------------- Scene 2 ---------------
    load_next_scene(&mut world);
    spawn_presenter(&mut world, false);
    if cli.duplicate {
        spawn_presenter(&mut world, false);
    }
    run_frame(&mut world, &mut update, dt);
    run_frame(&mut world, &mut update, dt);

    let live = world.non_send_resource::<PresenterLinks>().len();
    println!(
        "Next scene: {} linked presenter(s), debug mode is {}",
        live,
        if is_debug_mode(&world) { "ON" } else { "OFF" }
    );

    shutdown(&mut world);
}

/// Log every debug-mode transition of the registered service.
fn watch_debug_flag(world: &World) -> Option<Subscription> {
    let core = world
        .non_send_resource::<ServiceLocator>()
        .try_get::<dyn DebugCore>()?;
    Some(
        core.is_debug_mode()
            .subscribe_skip_current(|on| log::info!("Debug mode changed: {}", on)),
    )
}
