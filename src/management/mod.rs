//! Stateful logic on top of the raw API modules: credential lifecycle,
//! the playlist registry, and release routing.

pub mod credentials;
pub mod registry;
pub mod router;
