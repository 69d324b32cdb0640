//! Long-press completion notification.
use bevy_ecs::prelude::*;

/// Triggered after a [`LongPressButton`](crate::components::longpress::LongPressButton)
/// has run its activation action.
#[derive(Event, Debug, Clone, Copy)]
pub struct LongPressActivatedEvent {
    pub entity: Entity,
}
