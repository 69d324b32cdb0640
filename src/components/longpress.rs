//! Long-press button component.
//!
//! A [`LongPressButton`] fires its [`OnActivate`] action once the pointer has
//! been held on it for at least `duration` seconds without being released.
//! Progress is reported as a fraction of `duration`, suitable for driving a
//! [`FillImage`](crate::components::fillimage::FillImage).
//!
//! The gesture itself lives in [`LongPress`], a plain state machine with no
//! ECS dependencies. The component wraps it together with start-up readiness
//! and the activation strategy.
//!
//! Pointer transitions are ignored while debug mode is already active, so the
//! button stops interfering once it has done its job.

use bevy_ecs::prelude::*;

use crate::resources::debugservice::DebugCore;

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PressState {
    #[default]
    Idle,
    /// Pointer is down; `started_at` is the real time of the pointer-down.
    Pressing { started_at: f32 },
}

/// Result of advancing the gesture by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressOutcome {
    /// Not pressing; nothing to report.
    Idle,
    /// Still pressing; carries the progress fraction.
    Progress(f32),
    /// Held long enough. Progress has already been reset to 0.
    Activated,
}

/// Long-press detection state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct LongPress {
    duration: f32,
    state: PressState,
    progress: f32,
}

impl LongPress {
    pub fn new(duration: f32) -> Self {
        LongPress {
            duration,
            state: PressState::Idle,
            progress: 0.0,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn is_pressing(&self) -> bool {
        matches!(self.state, PressState::Pressing { .. })
    }

    /// Progress of the current press, `0.0` when idle.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Pointer went down at `now`. Ignored while `debug_active`.
    ///
    /// Returns `true` if the press was recorded.
    pub fn pointer_down(&mut self, now: f32, debug_active: bool) -> bool {
        if debug_active {
            return false;
        }
        self.state = PressState::Pressing { started_at: now };
        true
    }

    /// Pointer went up. Cancels any press in progress. Ignored while
    /// `debug_active`.
    ///
    /// Returns `true` if the state was reset.
    pub fn pointer_up(&mut self, debug_active: bool) -> bool {
        if debug_active {
            return false;
        }
        self.reset();
        true
    }

    /// Advance the gesture to `now`.
    pub fn tick(&mut self, now: f32) -> PressOutcome {
        let PressState::Pressing { started_at } = self.state else {
            return PressOutcome::Idle;
        };
        let held = now - started_at;
        if held < self.duration {
            self.progress = held / self.duration;
            return PressOutcome::Progress(self.progress);
        }
        self.reset();
        PressOutcome::Activated
    }

    fn reset(&mut self) {
        self.state = PressState::Idle;
        self.progress = 0.0;
    }
}

/// Context handed to [`OnActivate::on_activate`].
pub struct ActivationContext<'a, 'w, 's> {
    /// The button entity that fired.
    pub entity: Entity,
    /// The registered debug capability.
    pub core: &'a dyn DebugCore,
    /// Deferred world access for extra setup.
    pub commands: &'a mut Commands<'w, 's>,
}

/// Action run when a long press completes.
///
/// The default method turns debug mode on. Implement the trait on your own
/// type to do extra work first; call [`enable_debug_mode`] to keep the
/// default behaviour.
pub trait OnActivate: Send + Sync + 'static {
    fn on_activate(&self, ctx: &mut ActivationContext<'_, '_, '_>) {
        enable_debug_mode(ctx.core);
    }
}

/// Turn the shared debug flag on.
pub fn enable_debug_mode(core: &dyn DebugCore) {
    core.is_debug_mode().set(true);
}

/// Default action: enable debug mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnableDebugMode;

impl OnActivate for EnableDebugMode {}

/// Whether the button found the debug service when it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonReadiness {
    /// Spawned, start-up has not run yet.
    #[default]
    Unstarted,
    /// Service found; the button reacts to input.
    Ready,
    /// No service at start-up; the button stays inert for its lifetime.
    Unavailable,
}

/// Button that activates after being held for `duration` seconds.
#[derive(Component)]
pub struct LongPressButton {
    pub press: LongPress,
    pub readiness: ButtonReadiness,
    pub action: Box<dyn OnActivate>,
}

impl LongPressButton {
    /// Button with the default [`EnableDebugMode`] action.
    pub fn new(duration: f32) -> Self {
        Self::with_action(duration, EnableDebugMode)
    }

    pub fn with_action(duration: f32, action: impl OnActivate) -> Self {
        LongPressButton {
            press: LongPress::new(duration),
            readiness: ButtonReadiness::Unstarted,
            action: Box::new(action),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == ButtonReadiness::Ready
    }
}

impl std::fmt::Debug for LongPressButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LongPressButton")
            .field("press", &self.press)
            .field("readiness", &self.readiness)
            .finish_non_exhaustive()
    }
}
