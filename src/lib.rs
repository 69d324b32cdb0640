//! Debug toggle library.
//!
//! Two scene components built on `bevy_ecs`:
//!
//! - a long-press button that turns debug mode on after being held for a
//!   configurable time, reporting progress through a fill indicator;
//! - a presenter that owns or links to the single process-wide debug flag
//!   registered in a [`ServiceLocator`](resources::servicelocator::ServiceLocator),
//!   surviving scene switches and removing duplicate instances.
//!
//! The flag is a [`ReactiveBool`](reactive::ReactiveBool) so any part of the
//! application can subscribe to debug-mode transitions.

pub mod components;
pub mod events;
pub mod host;
pub mod reactive;
pub mod resources;
pub mod systems;
