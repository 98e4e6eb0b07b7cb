//! HTTP API Module
//!
//! Axum handlers and router for the two public endpoints: the welcome
//! message at `/` and node snapshots at `/nodes`. Handlers only ever call
//! into `NodeStore::snapshot`; they never mutate state.

pub mod handlers;

pub use handlers::router;

#[cfg(test)]
mod tests;
