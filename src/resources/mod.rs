//! ECS resources made available to systems.
//!
//! Overview
//! - `debugconfig` – user settings loaded from INI and the build profile
//! - `debugmode` – presence mirrors whether debug mode is active
//! - `debugservice` – the debug capability trait and its service
//! - `presenterlinks` – live presenter flags and their subscriptions (non-send)
//! - `presentersequence` – spawn-order tickets for presenters
//! - `servicelocator` – capability registry with ownership tokens (non-send)
//! - `worldtime` – scaled simulation time and unscaled real time
pub mod debugconfig;
pub mod debugmode;
pub mod debugservice;
pub mod presenterlinks;
pub mod presentersequence;
pub mod servicelocator;
pub mod worldtime;
