//! Shared State Module
//!
//! Implements the fixed-size, in-memory node collection and its locking
//! discipline.
//!
//! ## Core Concepts
//! - **Single authority**: `NodeStore` is the only path through which any
//!   reader or writer observes or changes record state.
//! - **Reader/writer lock**: snapshots take shared access and may run
//!   concurrently with each other; initialization and updates take exclusive
//!   access and exclude everything else.
//! - **Snapshots**: reads return a by-value copy of the whole collection, so
//!   a caller never sees a partially applied mutation.

pub mod memory;
pub mod types;
