//! Pointer events delivered to long-press buttons.
//!
//! The host's input layer triggers [`PointerDownEvent`] and [`PointerUpEvent`]
//! with the entity under the pointer. Observers run immediately, so pointer
//! transitions of a frame are applied before that frame's
//! [`long_press_system`](crate::systems::longpress::long_press_system) tick
//! reads the press duration.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::fillimage::FillImage;
use crate::components::longpress::LongPressButton;
use crate::resources::debugservice::debug_mode_active;
use crate::resources::servicelocator::ServiceLocator;
use crate::resources::worldtime::WorldTime;

/// Pointer pressed on `entity`.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerDownEvent {
    pub entity: Entity,
}

/// Pointer released on `entity`.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerUpEvent {
    pub entity: Entity,
}

/// Start a press on the target button, unless debug mode is already active.
pub fn pointer_down_observer(
    trigger: On<PointerDownEvent>,
    time: Res<WorldTime>,
    locator: NonSend<ServiceLocator>,
    mut buttons: Query<&mut LongPressButton>,
) {
    let entity = trigger.event().entity;
    let Ok(mut button) = buttons.get_mut(entity) else {
        return;
    };
    if !button.is_ready() {
        return;
    }
    if button
        .press
        .pointer_down(time.realtime, debug_mode_active(&locator))
    {
        debug!("Long press started on {:?} at {:.3}", entity, time.realtime);
    }
}

/// Cancel the press on the target button, unless debug mode is already active.
pub fn pointer_up_observer(
    trigger: On<PointerUpEvent>,
    locator: NonSend<ServiceLocator>,
    mut buttons: Query<(&mut LongPressButton, Option<&mut FillImage>)>,
) {
    let entity = trigger.event().entity;
    let Ok((mut button, fill)) = buttons.get_mut(entity) else {
        return;
    };
    if !button.is_ready() {
        return;
    }
    if button.press.pointer_up(debug_mode_active(&locator)) {
        if let Some(mut fill) = fill {
            fill.clear();
        }
    }
}
