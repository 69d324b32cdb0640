//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive
//! [`switch_scene`](crate::systems::scene::switch_scene). Everything else,
//! presenters and buttons included, belongs to the scene that spawned it.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
