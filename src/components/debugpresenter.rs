//! Debug presenter component.
//!
//! A scene object that keeps a local debug-mode flag in sync with the
//! process-wide [`DebugService`](crate::resources::debugservice::DebugService).
//! The first presenter to start creates and registers the service; a lone
//! presenter in a later scene links to the service that already exists; any
//! extra presenter removes itself.
//!
//! The component only carries the inspector-style settings. The live flag and
//! its subscriptions are thread-confined and kept in
//! [`PresenterLinks`](crate::resources::presenterlinks::PresenterLinks).
use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DebugPresenter {
    /// Treat this presenter as running in a release build.
    pub force_release_build: bool,
    /// Value of the local flag before linking. Seeds the service when this
    /// presenter ends up creating it.
    pub initial_debug_mode: bool,
    /// Position in spawn order. Presenters starting in the same frame are
    /// processed lowest first.
    pub spawn_order: u64,
}

impl DebugPresenter {
    pub fn new(initial_debug_mode: bool) -> Self {
        DebugPresenter {
            force_release_build: false,
            initial_debug_mode,
            spawn_order: 0,
        }
    }

    pub fn with_force_release_build(mut self, force: bool) -> Self {
        self.force_release_build = force;
        self
    }

    pub fn with_spawn_order(mut self, spawn_order: u64) -> Self {
        self.spawn_order = spawn_order;
        self
    }
}
