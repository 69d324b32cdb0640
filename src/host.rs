//! World setup and frame loop helpers.
//!
//! Builds a `bevy_ecs` world carrying everything the debug components need,
//! registers observers, assembles the per-frame schedule, and spawns the
//! standard debug scene objects. The binary and the integration tests both go
//! through these functions.
//!
//! # Frame order
//!
//! 1. Pointer events are triggered by the host (observers run immediately).
//! 2. [`update_world_time`] advances the clock.
//! 3. The schedule runs: presenter start-up, button start-up, link cleanup,
//!    long-press tick, `DebugMode` mirror.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use log::{error, info};

use crate::components::debugpresenter::DebugPresenter;
use crate::components::fillimage::FillImage;
use crate::components::longpress::{LongPressButton, OnActivate};
use crate::components::persistent::Persistent;
use crate::events::appquit::{AppQuitEvent, app_quit_observer};
use crate::events::pointer::{pointer_down_observer, pointer_up_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::debugconfig::{BuildProfile, DebugConfig};
use crate::resources::debugservice::debug_mode_active;
use crate::resources::presenterlinks::PresenterLinks;
use crate::resources::presentersequence::PresenterSequence;
use crate::resources::servicelocator::ServiceLocator;
use crate::resources::worldtime::WorldTime;
use crate::systems::debugmode::sync_debug_mode_resource;
use crate::systems::debugpresenter::{
    debug_presenter_awake_system, debug_presenter_cleanup_system,
};
use crate::systems::longpress::{long_press_start_system, long_press_system};
use crate::systems::scene::switch_scene;
use crate::systems::time::update_world_time;

/// Create a world with all resources and observers installed.
pub fn init_world(config: DebugConfig, build: BuildProfile) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(config);
    world.insert_resource(build);
    world.insert_resource(PresenterSequence::new());
    world.insert_non_send_resource(ServiceLocator::new());
    world.insert_non_send_resource(PresenterLinks::new());

    world.spawn((Observer::new(pointer_down_observer), Persistent));
    world.spawn((Observer::new(pointer_up_observer), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(app_quit_observer), Persistent));
    // Ensure the observers are registered before anything triggers events.
    world.flush();
    world
}

/// Per-frame schedule.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(debug_presenter_awake_system);
    // Buttons start after presenters so a service created this frame is found.
    update.add_systems(long_press_start_system.after(debug_presenter_awake_system));
    update.add_systems(debug_presenter_cleanup_system.after(debug_presenter_awake_system));
    update.add_systems(long_press_system.after(long_press_start_system));
    update.add_systems(sync_debug_mode_resource.after(long_press_system));
    update
}

/// Advance the clock by `dt` and run one frame.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers(); // Clear changed components for next frame
}

/// Spawn a presenter using the world's [`DebugConfig`], stamped with the next
/// spawn-order ticket.
pub fn spawn_presenter(world: &mut World, initial_debug_mode: bool) -> Entity {
    let force = world.resource::<DebugConfig>().force_release_build;
    let ticket = world.resource_mut::<PresenterSequence>().next_ticket();
    world
        .spawn(
            DebugPresenter::new(initial_debug_mode)
                .with_force_release_build(force)
                .with_spawn_order(ticket),
        )
        .id()
}

/// Spawn a long-press button with the default action and configured duration.
pub fn spawn_long_press_button(world: &mut World) -> Entity {
    let duration = world.resource::<DebugConfig>().long_press_duration;
    world
        .spawn((LongPressButton::new(duration), FillImage::default()))
        .id()
}

/// Spawn a long-press button running `action` on activation.
pub fn spawn_long_press_button_with(world: &mut World, action: impl OnActivate) -> Entity {
    let duration = world.resource::<DebugConfig>().long_press_duration;
    world
        .spawn((LongPressButton::with_action(duration, action), FillImage::default()))
        .id()
}

/// Despawn every non-persistent entity.
pub fn load_next_scene(world: &mut World) {
    if let Err(e) = world.run_system_once(switch_scene) {
        error!("Scene switch failed: {}", e);
    }
    world.flush();
}

/// Whether the registered debug flag is on.
pub fn is_debug_mode(world: &World) -> bool {
    debug_mode_active(world.non_send_resource::<ServiceLocator>())
}

/// Application shutdown: let the owner unregister, then drop whatever is
/// left in the registry.
pub fn shutdown(world: &mut World) {
    world.trigger(AppQuitEvent {});
    let mut locator = world.non_send_resource_mut::<ServiceLocator>();
    if !locator.is_empty() {
        info!("Dropping {} remaining service(s) at shutdown", locator.len());
        locator.clear();
    }
}
