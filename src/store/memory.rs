use super::types::NodeRecord;

use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;

/// Upper bound (exclusive) for randomly assigned node values.
pub const VALUE_RANGE: i32 = 100;

/// Exclusive authority over the node collection.
///
/// Every reader and writer goes through this type; the vector behind the
/// lock is never handed out by reference. Snapshots take shared access,
/// `initialize` and `update_random` take exclusive access.
pub struct NodeStore {
    nodes: RwLock<Vec<NodeRecord>>,
}

impl NodeStore {
    /// Creates an empty store. `initialize` must be called before any
    /// snapshot or update.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(Vec::new()),
        }
    }

    /// Replaces the entire collection with `count` freshly constructed
    /// records: record `i` gets id `i`, name `Node-{i}`, a random value in
    /// [0, 100) and the current time.
    ///
    /// May be called again to fully reset the store; readers never observe
    /// an intermediate state because the whole swap happens under the write
    /// lock. Snapshots taken before a re-initialization reflect the prior
    /// generation and must not be treated as live.
    pub async fn initialize(&self, count: usize) {
        assert!(count > 0, "node count must be positive");

        let mut nodes = self.nodes.write().await;
        let mut rng = rand::thread_rng();

        *nodes = (0..count)
            .map(|id| NodeRecord {
                id,
                name: format!("Node-{}", id),
                value: rng.gen_range(0..VALUE_RANGE),
                time: Utc::now(),
            })
            .collect();

        tracing::info!("Initialized {} nodes", nodes.len());
    }

    /// Returns a consistent point-in-time copy of the whole collection, in
    /// id-ascending order. The copy is never retroactively mutated by later
    /// updates.
    ///
    /// Must only be called after `initialize`.
    pub async fn snapshot(&self) -> Vec<NodeRecord> {
        self.nodes.read().await.clone()
    }

    /// Rewrites one uniformly chosen record: new random value in [0, 100)
    /// and the current time. All other fields and records are untouched.
    /// Returns the index of the updated record.
    ///
    /// Successive calls may pick the same index again; there is no
    /// exclusion of repeats.
    pub async fn update_random(&self) -> usize {
        let mut nodes = self.nodes.write().await;
        assert!(!nodes.is_empty(), "store must be initialized before update");

        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..nodes.len());

        nodes[index].value = rng.gen_range(0..VALUE_RANGE);
        nodes[index].time = Utc::now();

        index
    }
}
