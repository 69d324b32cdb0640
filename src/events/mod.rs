//! Event types and observers.
//!
//! Events decouple the host's input and lifecycle plumbing from the debug
//! components.
//!
//! Submodules:
//! - [`appquit`] – application shutdown; the owning presenter unregisters
//! - [`longpress`] – notification after a long-press button activates
//! - [`pointer`] – pointer down/up delivered to long-press buttons
//! - [`switchdebug`] – toggle the shared debug flag on/off
pub mod appquit;
pub mod longpress;
pub mod pointer;
pub mod switchdebug;
