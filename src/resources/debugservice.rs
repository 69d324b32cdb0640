//! The debug-mode capability and its default implementation.
//!
//! [`DebugCore`] is the capability other parts of the application look up in
//! the [`ServiceLocator`](crate::resources::servicelocator::ServiceLocator):
//! one observable boolean telling whether debug mode is active. Exactly one
//! [`DebugService`] is authoritative per process; presenters in other scenes
//! link their local flags to it instead of creating their own.

use crate::reactive::ReactiveBool;
use crate::resources::servicelocator::ServiceLocator;

/// Capability: access to the process-wide debug-mode flag.
pub trait DebugCore {
    /// The shared flag. Subscribe to react to debug-mode transitions.
    fn is_debug_mode(&self) -> &ReactiveBool;
}

/// Authoritative holder of the debug-mode flag.
#[derive(Debug)]
pub struct DebugService {
    is_debug_mode: ReactiveBool,
}

impl DebugService {
    /// Create a service whose flag starts at `initial`.
    pub fn new(initial: bool) -> Self {
        DebugService {
            is_debug_mode: ReactiveBool::new(initial),
        }
    }
}

impl DebugCore for DebugService {
    fn is_debug_mode(&self) -> &ReactiveBool {
        &self.is_debug_mode
    }
}

/// Current value of the registered debug flag; `false` when no service exists.
pub fn debug_mode_active(locator: &ServiceLocator) -> bool {
    locator
        .try_get::<dyn DebugCore>()
        .is_some_and(|core| core.is_debug_mode().get())
}
