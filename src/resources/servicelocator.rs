//! Process-wide service registry.
//!
//! Maps a capability type (usually a trait object such as
//! `dyn DebugCore`) to at most one live instance. Registration hands back a
//! [`Registration`] token; only the holder of that token can unregister the
//! instance, which keeps "who owns the service" explicit.
//!
//! Services are `Rc`-shared and therefore thread-confined. Insert the locator
//! with `insert_non_send_resource` and access it through `NonSend` /
//! `NonSendMut` in system parameters.

use log::debug;
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId, type_name};
use std::marker::PhantomData;
use std::rc::Rc;
use thiserror::Error;

/// Misuse of the [`ServiceLocator`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("a service for `{0}` is already registered")]
    AlreadyRegistered(&'static str),
    #[error("no matching service for `{0}` is registered")]
    NotRegistered(&'static str),
}

/// Ownership token returned by [`ServiceLocator::register`].
///
/// Not clonable. Dropping it does not unregister the service; pass it to
/// [`ServiceLocator::unregister`] for that.
#[must_use = "the registration token is the only way to unregister the service"]
pub struct Registration<S: ?Sized + 'static> {
    service: Rc<S>,
    _marker: PhantomData<*const S>,
}

impl<S: ?Sized + 'static> Registration<S> {
    /// The registered instance.
    pub fn service(&self) -> &Rc<S> {
        &self.service
    }
}

impl<S: ?Sized + 'static> std::fmt::Debug for Registration<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("service", &type_name::<S>())
            .finish()
    }
}

/// Registry of live services keyed by capability type.
#[derive(Default)]
pub struct ServiceLocator {
    services: FxHashMap<TypeId, Box<dyn Any>>,
}

impl ServiceLocator {
    /// Create an empty locator.
    pub fn new() -> Self {
        ServiceLocator {
            services: FxHashMap::default(),
        }
    }

    /// Register `service` as the live instance for capability `S`.
    ///
    /// Fails if an instance for `S` is already registered; the existing
    /// registration is left untouched.
    pub fn register<S: ?Sized + 'static>(
        &mut self,
        service: Rc<S>,
    ) -> Result<Registration<S>, ServiceError> {
        let key = TypeId::of::<S>();
        if self.services.contains_key(&key) {
            return Err(ServiceError::AlreadyRegistered(type_name::<S>()));
        }
        self.services.insert(key, Box::new(Rc::clone(&service)));
        debug!("Registered service {}", type_name::<S>());
        Ok(Registration {
            service,
            _marker: PhantomData,
        })
    }

    /// Remove the instance owned by `registration`.
    ///
    /// Returns the instance. Fails if the registry no longer holds that exact
    /// instance for `S`.
    pub fn unregister<S: ?Sized + 'static>(
        &mut self,
        registration: Registration<S>,
    ) -> Result<Rc<S>, ServiceError> {
        let key = TypeId::of::<S>();
        let matches = self
            .services
            .get(&key)
            .and_then(|entry| entry.downcast_ref::<Rc<S>>())
            .is_some_and(|current| Rc::ptr_eq(current, &registration.service));
        if !matches {
            return Err(ServiceError::NotRegistered(type_name::<S>()));
        }
        self.services.remove(&key);
        debug!("Unregistered service {}", type_name::<S>());
        Ok(registration.service)
    }

    /// The live instance for `S`, if any.
    pub fn try_get<S: ?Sized + 'static>(&self) -> Option<Rc<S>> {
        self.services
            .get(&TypeId::of::<S>())
            .and_then(|entry| entry.downcast_ref::<Rc<S>>())
            .map(Rc::clone)
    }

    pub fn contains<S: ?Sized + 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<S>())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Drop every registered service. Used at shutdown.
    pub fn clear(&mut self) {
        self.services.clear();
    }
}
