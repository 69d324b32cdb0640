//! Mirror the shared debug flag into the [`DebugMode`] marker resource.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::debugmode::DebugMode;
use crate::resources::debugservice::debug_mode_active;
use crate::resources::servicelocator::ServiceLocator;

/// Insert [`DebugMode`] while the shared flag is on, remove it otherwise.
pub fn sync_debug_mode_resource(
    mut commands: Commands,
    locator: NonSend<ServiceLocator>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let active = debug_mode_active(&locator);
    match (active, debug_mode.is_some()) {
        (true, false) => {
            debug!("Debug mode on, inserting DebugMode resource");
            commands.insert_resource(DebugMode {});
        }
        (false, true) => {
            debug!("Debug mode off, removing DebugMode resource");
            commands.remove_resource::<DebugMode>();
        }
        _ => {}
    }
}
