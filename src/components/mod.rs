//! ECS components for entities.
//!
//! Submodules overview:
//! - [`debugpresenter`] – settings of a scene's debug-flag presenter
//! - [`fillimage`] – fill fraction of a progress indicator
//! - [`longpress`] – long-press gesture state machine and button component
//! - [`persistent`] – marker for entities that persist across scene changes

pub mod debugpresenter;
pub mod fillimage;
pub mod longpress;
pub mod persistent;
