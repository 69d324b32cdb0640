//! Debug toggle resource.
//!
//! Mirror of the shared debug flag for ordinary systems. The mere presence of
//! this resource indicates that debug mode is active; it is inserted and
//! removed by [`sync_debug_mode_resource`] each frame so `Send` systems can
//! gate on it with `run_if(resource_exists::<DebugMode>)` without touching the
//! thread-confined service.
//!
//! [`sync_debug_mode_resource`]: crate::systems::debugmode::sync_debug_mode_resource

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, systems may draw overlays or print extra logs.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
