//! Debug presenter lifecycle systems.
//!
//! - [`debug_presenter_awake_system`] runs the start-up protocol for every
//!   newly added [`DebugPresenter`]: drop out in release builds, otherwise
//!   create and register the shared service, link to the existing one, or
//!   remove itself as a duplicate.
//! - [`debug_presenter_cleanup_system`] drops the link of every presenter that
//!   was removed or despawned, releasing its subscriptions.
//!
//! Start-up order within a frame follows `DebugPresenter::spawn_order`. A
//! presenter that removed itself earlier in the same pass no longer counts as
//! live, so two presenters arriving together next to an existing service
//! leave exactly one survivor.
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use std::rc::Rc;

use crate::components::debugpresenter::DebugPresenter;
use crate::reactive::ReactiveBool;
use crate::resources::debugconfig::BuildProfile;
use crate::resources::debugservice::{DebugCore, DebugService};
use crate::resources::presenterlinks::{PresenterLink, PresenterLinks, PresenterRole};
use crate::resources::servicelocator::ServiceLocator;

/// What a starting presenter should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterStart {
    /// Release configuration: remove the presenter, do nothing else.
    Release,
    /// No service yet: create one, link to it and register it.
    CreateService,
    /// A service exists and this is the only presenter: link without
    /// registering.
    LinkExisting,
    /// A service exists and other presenters are live: remove this one.
    Duplicate,
}

/// Decide how a presenter starts.
///
/// `live_presenters` counts every live presenter, the starting one included.
pub fn decide_presenter_start(
    debug_build: bool,
    presenter: &DebugPresenter,
    service_registered: bool,
    live_presenters: usize,
) -> PresenterStart {
    if !debug_build || presenter.force_release_build {
        return PresenterStart::Release;
    }
    if !service_registered {
        return PresenterStart::CreateService;
    }
    if live_presenters <= 1 {
        PresenterStart::LinkExisting
    } else {
        PresenterStart::Duplicate
    }
}

/// Run the start-up protocol for newly added presenters.
pub fn debug_presenter_awake_system(
    mut commands: Commands,
    build: Res<BuildProfile>,
    added: Query<(Entity, &DebugPresenter), Added<DebugPresenter>>,
    presenters: Query<(), With<DebugPresenter>>,
    mut locator: NonSendMut<ServiceLocator>,
    mut links: NonSendMut<PresenterLinks>,
) {
    let mut starting: Vec<(Entity, DebugPresenter)> =
        added.iter().map(|(entity, presenter)| (entity, *presenter)).collect();
    if starting.is_empty() {
        return;
    }
    starting.sort_by_key(|(_, presenter)| presenter.spawn_order);

    let mut live = presenters.iter().count();
    for (entity, presenter) in starting {
        let decision = decide_presenter_start(
            build.debug_build,
            &presenter,
            locator.contains::<dyn DebugCore>(),
            live,
        );
        match decision {
            PresenterStart::Release => {
                debug!("Release configuration, removing presenter {:?}", entity);
                commands.entity(entity).remove::<DebugPresenter>();
                live -= 1;
            }
            PresenterStart::Duplicate => {
                info!("Duplicate debug presenter {:?} removed", entity);
                commands.entity(entity).remove::<DebugPresenter>();
                live -= 1;
            }
            PresenterStart::CreateService => {
                let local = ReactiveBool::new(presenter.initial_debug_mode);
                let service: Rc<dyn DebugCore> = Rc::new(DebugService::new(local.get()));
                let mut link = PresenterLink::new(local, Rc::clone(&service));
                match locator.register(service) {
                    Ok(registration) => {
                        info!(
                            "Presenter {:?} registered the debug service (debug mode {})",
                            entity, presenter.initial_debug_mode
                        );
                        link.registration = Some(registration);
                    }
                    Err(e) => warn!("Presenter {:?} could not register: {}", entity, e),
                }
                links.insert(entity, link);
            }
            PresenterStart::LinkExisting => {
                let Some(service) = locator.try_get::<dyn DebugCore>() else {
                    continue;
                };
                let local = ReactiveBool::new(presenter.initial_debug_mode);
                info!("Presenter {:?} linked to the existing debug service", entity);
                links.insert(entity, PresenterLink::new(local, service));
            }
        }
    }
}

/// Release the links of presenters that were removed or despawned.
///
/// An owner going away does not unregister the service; it stays available
/// to presenters of later scenes.
pub fn debug_presenter_cleanup_system(
    mut removed: RemovedComponents<DebugPresenter>,
    mut links: NonSendMut<PresenterLinks>,
) {
    for entity in removed.read() {
        let Some(link) = links.remove(entity) else {
            continue;
        };
        match link.role() {
            PresenterRole::Owner => {
                debug!("Owning presenter {:?} destroyed, service stays registered", entity)
            }
            PresenterRole::Mirror => debug!("Mirror presenter {:?} destroyed", entity),
        }
    }
}
