//! Spawn counter for debug presenters.
//!
//! `Entity` ordering follows storage rows, which get recycled across scenes,
//! so it says nothing about which presenter was created first. Each presenter
//! takes a ticket from this counter when it is spawned.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default)]
pub struct PresenterSequence {
    next: u64,
}

impl PresenterSequence {
    pub fn new() -> Self {
        PresenterSequence { next: 0 }
    }

    /// Hand out the next ticket.
    pub fn next_ticket(&mut self) -> u64 {
        let ticket = self.next;
        self.next += 1;
        ticket
    }
}
