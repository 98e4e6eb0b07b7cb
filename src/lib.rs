//! Distributed System Simulator Library
//!
//! This library crate defines the core modules of the node state server.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three small subsystems:
//!
//! - **`store`**: The shared state layer. Owns the fixed-size collection of
//!   node records behind a single reader/writer lock and is the only path
//!   through which record state is observed or changed.
//! - **`api`**: The HTTP layer. Axum handlers that serve a welcome message
//!   and point-in-time snapshots of the node collection.
//! - **`updater`**: The background mutation driver. A cancellable periodic
//!   task that rewrites one randomly chosen record per tick through the
//!   store's update operation.

pub mod api;
pub mod store;
pub mod updater;
