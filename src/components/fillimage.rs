//! Radial/linear fill indicator.
//!
//! Stores the fraction of an image that should be drawn, in `[0, 1]`. Long-press
//! buttons write their progress here; a renderer reads it.
use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct FillImage {
    pub amount: f32,
}

impl FillImage {
    pub fn new(amount: f32) -> Self {
        FillImage {
            amount: amount.clamp(0.0, 1.0),
        }
    }

    pub fn set_amount(&mut self, amount: f32) {
        self.amount = amount.clamp(0.0, 1.0);
    }

    pub fn clear(&mut self) {
        self.amount = 0.0;
    }
}
