//! Integration tests driving the debug world frame by frame.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use debugtoggle::components::debugpresenter::DebugPresenter;
use debugtoggle::components::fillimage::FillImage;
use debugtoggle::components::longpress::{
    ActivationContext, ButtonReadiness, LongPressButton, OnActivate, enable_debug_mode,
};
use debugtoggle::events::longpress::LongPressActivatedEvent;
use debugtoggle::events::pointer::{PointerDownEvent, PointerUpEvent};
use debugtoggle::events::switchdebug::SwitchDebugEvent;
use debugtoggle::host::{
    build_update_schedule, init_world, is_debug_mode, load_next_scene, shutdown,
    spawn_long_press_button, spawn_long_press_button_with, spawn_presenter,
};
use debugtoggle::resources::debugconfig::{BuildProfile, DebugConfig};
use debugtoggle::resources::debugmode::DebugMode;
use debugtoggle::resources::debugservice::{DebugCore, DebugService};
use debugtoggle::resources::presenterlinks::{PresenterLinks, PresenterRole};
use debugtoggle::resources::servicelocator::ServiceLocator;
use debugtoggle::resources::worldtime::WorldTime;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    init_world(DebugConfig::new(), BuildProfile { debug_build: true })
}

/// Run one frame with the real-time clock set to `t`.
fn tick_at(world: &mut World, schedule: &mut Schedule, t: f32) {
    world.resource_mut::<WorldTime>().realtime = t;
    schedule.run(world);
    world.clear_trackers();
}

fn count_activations(world: &mut World) -> Arc<Mutex<usize>> {
    let count = Arc::new(Mutex::new(0));
    let count_clone = count.clone();
    world.add_observer(move |_trigger: On<LongPressActivatedEvent>| {
        *count_clone.lock().unwrap() += 1;
    });
    world.flush();
    count
}

fn fill(world: &World, entity: Entity) -> f32 {
    world.get::<FillImage>(entity).unwrap().amount
}

fn service_count(world: &World) -> usize {
    world.non_send_resource::<ServiceLocator>().len()
}

#[test]
fn long_press_scenario_one_second() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let activations = count_activations(&mut world);

    spawn_presenter(&mut world, false);
    let button = spawn_long_press_button(&mut world);
    tick_at(&mut world, &mut schedule, 0.0);
    assert_eq!(
        world.get::<LongPressButton>(button).unwrap().readiness,
        ButtonReadiness::Ready
    );

    world.trigger(PointerDownEvent { entity: button });
    for t in [0.3, 0.6, 0.9] {
        tick_at(&mut world, &mut schedule, t);
        assert!(approx_eq(fill(&world, button), t), "fill at {t}");
        assert!(!is_debug_mode(&world));
        assert_eq!(*activations.lock().unwrap(), 0);
    }

    tick_at(&mut world, &mut schedule, 1.0);
    assert_eq!(*activations.lock().unwrap(), 1);
    assert_eq!(fill(&world, button), 0.0);
    assert!(is_debug_mode(&world));
    assert!(world.contains_resource::<DebugMode>());

    // Further frames do not fire again.
    tick_at(&mut world, &mut schedule, 2.0);
    tick_at(&mut world, &mut schedule, 3.0);
    assert_eq!(*activations.lock().unwrap(), 1);
}

#[test]
fn release_before_duration_does_not_activate() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let activations = count_activations(&mut world);

    spawn_presenter(&mut world, false);
    let button = spawn_long_press_button(&mut world);
    tick_at(&mut world, &mut schedule, 0.0);

    world.resource_mut::<WorldTime>().realtime = 0.1;
    world.trigger(PointerDownEvent { entity: button });
    tick_at(&mut world, &mut schedule, 0.5);
    assert!(fill(&world, button) > 0.0);

    world.trigger(PointerUpEvent { entity: button });
    assert_eq!(fill(&world, button), 0.0);
    tick_at(&mut world, &mut schedule, 0.8);
    tick_at(&mut world, &mut schedule, 5.0);

    assert_eq!(*activations.lock().unwrap(), 0);
    assert_eq!(fill(&world, button), 0.0);
    assert!(!is_debug_mode(&world));
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn pointer_events_ignored_while_debug_mode_active() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let activations = count_activations(&mut world);

    spawn_presenter(&mut world, true);
    let button = spawn_long_press_button(&mut world);
    tick_at(&mut world, &mut schedule, 0.0);
    assert!(is_debug_mode(&world));

    world.trigger(PointerDownEvent { entity: button });
    tick_at(&mut world, &mut schedule, 0.5);
    tick_at(&mut world, &mut schedule, 2.0);

    let pressed = world.get::<LongPressButton>(button).unwrap();
    assert!(!pressed.press.is_pressing());
    assert_eq!(fill(&world, button), 0.0);
    assert_eq!(*activations.lock().unwrap(), 0);
}

#[test]
fn button_without_service_stays_disabled() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let activations = count_activations(&mut world);

    let button = spawn_long_press_button(&mut world);
    tick_at(&mut world, &mut schedule, 0.0);
    assert_eq!(
        world.get::<LongPressButton>(button).unwrap().readiness,
        ButtonReadiness::Unavailable
    );

    // A service showing up later does not revive the button.
    spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.1);
    assert_eq!(service_count(&world), 1);

    world.trigger(PointerDownEvent { entity: button });
    tick_at(&mut world, &mut schedule, 5.0);
    assert_eq!(*activations.lock().unwrap(), 0);
    assert!(!is_debug_mode(&world));
}

#[test]
fn two_presenters_in_first_scene_register_once() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    let first = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);
    let second = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.1);

    assert_eq!(service_count(&world), 1);
    assert!(world.get::<DebugPresenter>(first).is_some());
    assert!(world.get::<DebugPresenter>(second).is_none());

    let links = world.non_send_resource::<PresenterLinks>();
    assert_eq!(links.len(), 1);
    assert_eq!(links.owner(), Some(first));
}

#[test]
fn presenters_spawned_together_leave_one_registration() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    let first = spawn_presenter(&mut world, false);
    let second = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);

    assert_eq!(service_count(&world), 1);
    let links = world.non_send_resource::<PresenterLinks>();
    assert_eq!(links.len(), 1);
    assert_eq!(links.owner(), Some(first));
    assert!(world.get::<DebugPresenter>(second).is_none());
}

#[test]
fn presenters_on_recycled_entities_start_in_spawn_order() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    // Fill some rows, then free them so the presenters below reuse them.
    let buttons: Vec<Entity> = (0..3).map(|_| spawn_long_press_button(&mut world)).collect();
    tick_at(&mut world, &mut schedule, 0.0);
    load_next_scene(&mut world);
    assert!(buttons.iter().all(|b| world.get::<LongPressButton>(*b).is_none()));

    let first = spawn_presenter(&mut world, false);
    let second = spawn_presenter(&mut world, false);
    assert!(buttons.iter().any(|b| b.index() == first.index()));
    tick_at(&mut world, &mut schedule, 0.1);

    assert_eq!(service_count(&world), 1);
    let links = world.non_send_resource::<PresenterLinks>();
    assert_eq!(links.len(), 1);
    assert_eq!(links.owner(), Some(first));
    assert!(world.get::<DebugPresenter>(second).is_none());
}

#[test]
fn lower_spawn_order_wins_regardless_of_entity() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    let later = world.spawn(DebugPresenter::new(false).with_spawn_order(7)).id();
    let earlier = world.spawn(DebugPresenter::new(true).with_spawn_order(3)).id();
    tick_at(&mut world, &mut schedule, 0.0);

    let links = world.non_send_resource::<PresenterLinks>();
    assert_eq!(links.owner(), Some(earlier));
    assert!(world.get::<DebugPresenter>(later).is_none());
    // The owner's initial value seeded the service.
    assert!(is_debug_mode(&world));
}

#[test]
fn sole_presenter_in_next_scene_links_to_existing_service() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    let owner = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);
    let service = world
        .non_send_resource::<ServiceLocator>()
        .try_get::<dyn DebugCore>()
        .unwrap();
    service.is_debug_mode().set(true);

    load_next_scene(&mut world);
    let mirror = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.1);

    assert_eq!(service_count(&world), 1);
    let links = world.non_send_resource::<PresenterLinks>();
    assert!(links.get(owner).is_none());
    let link = links.get(mirror).unwrap();
    assert_eq!(link.role(), PresenterRole::Mirror);
    // Service value wins over the presenter's initial value.
    assert!(link.is_debug_mode.get());

    // Local changes flow back to the shared flag.
    link.is_debug_mode.set(false);
    assert!(!service.is_debug_mode().get());
    service.is_debug_mode().set(true);
    assert!(links.local_flag(mirror).unwrap().get());
}

#[test]
fn extra_presenters_in_next_scene_leave_one_survivor() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);

    load_next_scene(&mut world);
    let a = spawn_presenter(&mut world, false);
    let b = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.1);

    let survivors = [a, b]
        .iter()
        .filter(|e| world.get::<DebugPresenter>(**e).is_some())
        .count();
    assert_eq!(survivors, 1);
    assert_eq!(service_count(&world), 1);
    assert_eq!(world.non_send_resource::<PresenterLinks>().len(), 1);
}

#[test]
fn release_build_presenter_removes_itself() {
    let mut world = init_world(DebugConfig::new(), BuildProfile { debug_build: false });
    let mut schedule = build_update_schedule();

    let presenter = spawn_presenter(&mut world, true);
    let button = spawn_long_press_button(&mut world);
    tick_at(&mut world, &mut schedule, 0.0);

    assert!(world.get::<DebugPresenter>(presenter).is_none());
    assert_eq!(service_count(&world), 0);
    assert_eq!(
        world.get::<LongPressButton>(button).unwrap().readiness,
        ButtonReadiness::Unavailable
    );
}

#[test]
fn forced_release_build_presenter_removes_itself() {
    let mut config = DebugConfig::new();
    config.force_release_build = true;
    let mut world = init_world(config, BuildProfile { debug_build: true });
    let mut schedule = build_update_schedule();

    let presenter = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);

    assert!(world.get::<DebugPresenter>(presenter).is_none());
    assert!(world.non_send_resource::<PresenterLinks>().is_empty());
    assert_eq!(service_count(&world), 0);
}

#[test]
fn app_quit_unregisters_owned_service() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);
    assert_eq!(service_count(&world), 1);

    shutdown(&mut world);
    assert_eq!(service_count(&world), 0);
    assert!(world.non_send_resource::<PresenterLinks>().owner().is_none());
}

#[test]
fn mirror_does_not_unregister_on_app_quit() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    // Service registered by someone other than a presenter.
    let registration = world
        .non_send_resource_mut::<ServiceLocator>()
        .register::<dyn DebugCore>(std::rc::Rc::new(DebugService::new(false)))
        .unwrap();
    let mirror = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);
    assert_eq!(
        world
            .non_send_resource::<PresenterLinks>()
            .get(mirror)
            .unwrap()
            .role(),
        PresenterRole::Mirror
    );

    world.trigger(debugtoggle::events::appquit::AppQuitEvent {});
    assert_eq!(service_count(&world), 1);

    world
        .non_send_resource_mut::<ServiceLocator>()
        .unregister(registration)
        .unwrap();
    assert_eq!(service_count(&world), 0);
}

#[derive(Component)]
struct PanelOpened;

struct OpenPanelThenEnable;

impl OnActivate for OpenPanelThenEnable {
    fn on_activate(&self, ctx: &mut ActivationContext<'_, '_, '_>) {
        ctx.commands.entity(ctx.entity).insert(PanelOpened);
        enable_debug_mode(ctx.core);
    }
}

#[test]
fn custom_activation_runs_extra_setup() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    spawn_presenter(&mut world, false);
    let button = spawn_long_press_button_with(&mut world, OpenPanelThenEnable);
    tick_at(&mut world, &mut schedule, 0.0);

    world.trigger(PointerDownEvent { entity: button });
    tick_at(&mut world, &mut schedule, 0.5);
    assert!(world.get::<PanelOpened>(button).is_none());
    tick_at(&mut world, &mut schedule, 1.5);

    assert!(world.get::<PanelOpened>(button).is_some());
    assert!(is_debug_mode(&world));
    assert_eq!(fill(&world, button), 0.0);
}

struct DoNothing;

impl OnActivate for DoNothing {
    fn on_activate(&self, _ctx: &mut ActivationContext<'_, '_, '_>) {}
}

#[test]
fn replaced_activation_skips_default() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();
    let activations = count_activations(&mut world);

    spawn_presenter(&mut world, false);
    let button = spawn_long_press_button_with(&mut world, DoNothing);
    tick_at(&mut world, &mut schedule, 0.0);

    world.trigger(PointerDownEvent { entity: button });
    tick_at(&mut world, &mut schedule, 1.0);

    assert_eq!(*activations.lock().unwrap(), 1);
    assert!(!is_debug_mode(&world));
}

#[test]
fn switch_debug_event_toggles_shared_flag() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    let presenter = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);

    world.trigger(SwitchDebugEvent {});
    assert!(is_debug_mode(&world));
    assert!(
        world
            .non_send_resource::<PresenterLinks>()
            .local_flag(presenter)
            .unwrap()
            .get()
    );
    tick_at(&mut world, &mut schedule, 0.1);
    assert!(world.contains_resource::<DebugMode>());

    world.trigger(SwitchDebugEvent {});
    assert!(!is_debug_mode(&world));
    tick_at(&mut world, &mut schedule, 0.2);
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn switch_debug_without_service_is_harmless() {
    let mut world = make_world();
    world.trigger(SwitchDebugEvent {});
    assert!(!is_debug_mode(&world));
}

#[test]
fn presenter_local_flag_gates_button() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    let presenter = spawn_presenter(&mut world, false);
    let button = spawn_long_press_button(&mut world);
    tick_at(&mut world, &mut schedule, 0.0);

    world
        .non_send_resource::<PresenterLinks>()
        .local_flag(presenter)
        .unwrap()
        .set(true);
    assert!(is_debug_mode(&world));

    world.trigger(PointerDownEvent { entity: button });
    assert!(!world.get::<LongPressButton>(button).unwrap().press.is_pressing());
}

#[test]
fn destroyed_presenter_stops_mirroring() {
    let mut world = make_world();
    let mut schedule = build_update_schedule();

    let owner = spawn_presenter(&mut world, false);
    tick_at(&mut world, &mut schedule, 0.0);
    let local = world
        .non_send_resource::<PresenterLinks>()
        .local_flag(owner)
        .unwrap()
        .clone();

    world.entity_mut(owner).despawn();
    tick_at(&mut world, &mut schedule, 0.1);
    assert!(world.non_send_resource::<PresenterLinks>().is_empty());
    // Owner going away keeps the service registered.
    assert_eq!(service_count(&world), 1);

    world.trigger(SwitchDebugEvent {});
    assert!(is_debug_mode(&world));
    assert!(!local.get());
    assert_eq!(local.subscriber_count(), 0);
}
