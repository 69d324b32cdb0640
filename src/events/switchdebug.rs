//! Event and observer to toggle debug mode.
//!
//! Emitting a [`SwitchDebugEvent`] flips the shared debug flag held by the
//! registered [`DebugCore`]. Unlike a long press this also turns debug mode
//! off again. Linked presenters and the [`DebugMode`] marker resource follow
//! the change.
//!
//! [`DebugMode`]: crate::resources::debugmode::DebugMode
use crate::resources::debugservice::DebugCore;
use crate::resources::servicelocator::ServiceLocator;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

/// Event used to toggle the shared debug flag on/off.
///
/// This carries no data; the observer simply inverts the flag.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that toggles the shared debug flag.
///
/// Without a registered service there is nothing to toggle; a warning is
/// logged and the event is dropped.
pub fn switch_debug_observer(_trigger: On<SwitchDebugEvent>, locator: NonSend<ServiceLocator>) {
    let Some(core) = locator.try_get::<dyn DebugCore>() else {
        warn!("SwitchDebugEvent ignored: no debug service registered");
        return;
    };
    let flag = core.is_debug_mode();
    let enabled = !flag.get();
    flag.set(enabled);
    if enabled {
        info!("Debug mode enabled");
    } else {
        info!("Debug mode disabled");
    }
}
