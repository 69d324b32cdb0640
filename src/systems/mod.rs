//! Engine systems.
//!
//! Submodules overview
//! - [`debugmode`] – mirror the shared debug flag into the `DebugMode` resource
//! - [`debugpresenter`] – presenter start-up protocol and link cleanup
//! - [`longpress`] – start long-press buttons, advance presses, fire actions
//! - [`scene`] – despawn non-persistent entities on scene change
//! - [`time`] – update simulation and real time

pub mod debugmode;
pub mod debugpresenter;
pub mod longpress;
pub mod scene;
pub mod time;
