//! Long-press button systems.
//!
//! - [`long_press_start_system`] runs once for each newly spawned button: it
//!   clears the fill and decides whether the button can work at all.
//! - [`long_press_system`] advances every pressed button to the current real
//!   time and fires activations.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::fillimage::FillImage;
use crate::components::longpress::{
    ActivationContext, ButtonReadiness, LongPressButton, PressOutcome,
};
use crate::events::longpress::LongPressActivatedEvent;
use crate::resources::debugservice::DebugCore;
use crate::resources::servicelocator::ServiceLocator;
use crate::resources::worldtime::WorldTime;

/// Start newly added buttons.
///
/// A button that cannot find the debug service now stays inert for the rest
/// of its life, even if a service is registered later.
pub fn long_press_start_system(
    locator: NonSend<ServiceLocator>,
    mut buttons: Query<
        (Entity, &mut LongPressButton, Option<&mut FillImage>),
        Added<LongPressButton>,
    >,
) {
    for (entity, mut button, fill) in buttons.iter_mut() {
        if button.readiness != ButtonReadiness::Unstarted {
            continue;
        }
        if !locator.contains::<dyn DebugCore>() {
            debug!("No debug service, long press {:?} disabled", entity);
            button.readiness = ButtonReadiness::Unavailable;
            continue;
        }
        button.readiness = ButtonReadiness::Ready;
        if let Some(mut fill) = fill {
            fill.clear();
        }
    }
}

/// Advance pressed buttons and run their activation action.
///
/// The fill is reset before the action runs, so whatever the action shows
/// is not overwritten afterwards.
pub fn long_press_system(
    mut commands: Commands,
    time: Res<WorldTime>,
    locator: NonSend<ServiceLocator>,
    mut buttons: Query<(Entity, &mut LongPressButton, Option<&mut FillImage>)>,
) {
    for (entity, mut button, mut fill) in buttons.iter_mut() {
        if !button.is_ready() || !button.press.is_pressing() {
            continue;
        }
        let outcome = button.press.tick(time.realtime);
        match outcome {
            PressOutcome::Idle => {}
            PressOutcome::Progress(progress) => {
                if let Some(fill) = fill.as_mut() {
                    fill.set_amount(progress);
                }
            }
            PressOutcome::Activated => {
                if let Some(fill) = fill.as_mut() {
                    fill.clear();
                }
                let Some(core) = locator.try_get::<dyn DebugCore>() else {
                    debug!("Long press {:?} completed without a debug service", entity);
                    continue;
                };
                info!("Long press {:?} activated", entity);
                let mut ctx = ActivationContext {
                    entity,
                    core: core.as_ref(),
                    commands: &mut commands,
                };
                button.action.on_activate(&mut ctx);
                commands.trigger(LongPressActivatedEvent { entity });
            }
        }
    }
}
