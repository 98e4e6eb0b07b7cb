//! Background Updater Module
//!
//! A periodic task that mutates one randomly chosen node record per tick
//! through the store's update operation. The loop is cancellable so tests
//! and process shutdown can stop it deterministically.

pub mod service;

pub use service::{UpdateLoop, UpdaterHandle};
