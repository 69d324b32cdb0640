//! Runtime state of live debug presenters.
//!
//! Each started [`DebugPresenter`](crate::components::debugpresenter::DebugPresenter)
//! gets a [`PresenterLink`] here, keyed by its entity: the local flag, the
//! subscriptions that tie it to the shared service, and the registration token
//! when this presenter owns the service. Removing the entry drops the
//! subscriptions, so a destroyed presenter never receives another update.
//!
//! This is a `NonSend` resource; insert it with `insert_non_send_resource`.

use bevy_ecs::prelude::Entity;
use rustc_hash::FxHashMap;
use std::rc::Rc;

use crate::reactive::{CompositeSubscription, ReactiveBool};
use crate::resources::debugservice::DebugCore;
use crate::resources::servicelocator::Registration;

/// Whether a presenter created the service or attached to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterRole {
    /// Created and registered the service.
    Owner,
    /// Linked to a service registered by someone else.
    Mirror,
}

/// Link between one presenter's local flag and the shared service.
pub struct PresenterLink {
    pub is_debug_mode: ReactiveBool,
    pub service: Rc<dyn DebugCore>,
    pub registration: Option<Registration<dyn DebugCore>>,
    subscriptions: CompositeSubscription,
}

impl PresenterLink {
    /// Link `local` to `service` in both directions.
    pub fn new(local: ReactiveBool, service: Rc<dyn DebugCore>) -> Self {
        let subscriptions = link_debug_mode_flags(&local, service.as_ref());
        PresenterLink {
            is_debug_mode: local,
            service,
            registration: None,
            subscriptions,
        }
    }

    pub fn role(&self) -> PresenterRole {
        if self.registration.is_some() {
            PresenterRole::Owner
        } else {
            PresenterRole::Mirror
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

/// Make `local` follow the service flag, and the service flag follow later
/// changes of `local`.
///
/// The service value is pushed into `local` right away. The reverse direction
/// skips the value `local` holds at subscription time. Both closures hold weak
/// handles so neither cell keeps the other alive.
pub fn link_debug_mode_flags(local: &ReactiveBool, service: &dyn DebugCore) -> CompositeSubscription {
    let mut subscriptions = CompositeSubscription::new();
    let shared = service.is_debug_mode();

    let local_weak = local.downgrade();
    subscriptions.add(shared.subscribe(move |value| {
        if let Some(local) = local_weak.upgrade() {
            local.set(value);
        }
    }));

    let shared_weak = shared.downgrade();
    subscriptions.add(local.subscribe_skip_current(move |value| {
        if let Some(shared) = shared_weak.upgrade() {
            shared.set(value);
        }
    }));

    subscriptions
}

/// Live presenter links keyed by presenter entity.
#[derive(Default)]
pub struct PresenterLinks {
    links: FxHashMap<Entity, PresenterLink>,
}

impl PresenterLinks {
    pub fn new() -> Self {
        PresenterLinks {
            links: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, entity: Entity, link: PresenterLink) {
        self.links.insert(entity, link);
    }

    pub fn get(&self, entity: Entity) -> Option<&PresenterLink> {
        self.links.get(&entity)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut PresenterLink> {
        self.links.get_mut(&entity)
    }

    /// Local flag of a live presenter.
    pub fn local_flag(&self, entity: Entity) -> Option<&ReactiveBool> {
        self.links.get(&entity).map(|link| &link.is_debug_mode)
    }

    pub fn remove(&mut self, entity: Entity) -> Option<PresenterLink> {
        self.links.remove(&entity)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Entity, &mut PresenterLink)> {
        self.links.iter_mut()
    }

    /// Entity of the presenter holding the service registration, if it is
    /// still alive.
    pub fn owner(&self) -> Option<Entity> {
        self.links
            .iter()
            .find(|(_, link)| link.role() == PresenterRole::Owner)
            .map(|(entity, _)| *entity)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
