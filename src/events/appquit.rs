//! Application shutdown notification.
//!
//! Trigger [`AppQuitEvent`] once when the application is about to exit. The
//! presenter that owns the debug service unregisters it; mirrors never
//! registered anything and do nothing.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::presenterlinks::PresenterLinks;
use crate::resources::servicelocator::ServiceLocator;

#[derive(Event, Debug, Clone, Copy)]
pub struct AppQuitEvent {}

/// Unregister every service owned by a live presenter.
pub fn app_quit_observer(
    _trigger: On<AppQuitEvent>,
    mut locator: NonSendMut<ServiceLocator>,
    mut links: NonSendMut<PresenterLinks>,
) {
    for (entity, link) in links.iter_mut() {
        let Some(registration) = link.registration.take() else {
            continue;
        };
        match locator.unregister(registration) {
            Ok(_) => info!("Presenter {:?} unregistered the debug service", entity),
            Err(e) => warn!("Presenter {:?} could not unregister: {}", entity, e),
        }
    }
}
