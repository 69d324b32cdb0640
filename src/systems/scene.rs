//! Scene switching.
//!
//! Despawns every entity that is not marked [`Persistent`]. Presenters and
//! buttons of the old scene go with it; the debug service lives in the
//! [`ServiceLocator`](crate::resources::servicelocator::ServiceLocator), not
//! on an entity, so it survives and the next scene's presenter links to it.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::persistent::Persistent;

/// Despawn all non-persistent entities. Observers are kept.
pub fn switch_scene(
    mut commands: Commands,
    query: Query<Entity, (Without<Persistent>, Without<Observer>)>,
) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    info!("Scene switched, {} entities despawned", count);
}
