//! Process-wide agent instance

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

/// Lazily constructed, shared agent
///
/// The first successful construction is kept for the lifetime of the
/// holder. A failed construction is not remembered, so a later call may
/// succeed once the environment is fixed.
#[derive(Debug)]
pub struct AgentHolder<A> {
    cell: OnceCell<Arc<A>>,
    constructions: AtomicUsize,
}

impl<A> AgentHolder<A> {
    /// Create an empty holder
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Return the agent, constructing it with `init` on first use
    ///
    /// Concurrent callers wait for a single construction.
    pub async fn get_or_create<F, Err>(&self, init: F) -> Result<Arc<A>, Err>
    where
        F: FnOnce() -> Result<A, Err>,
    {
        self.cell
            .get_or_try_init(|| async {
                let attempt = self.constructions.fetch_add(1, Ordering::SeqCst) + 1;
                info!("Constructing agent (attempt {})", attempt);
                init().map(Arc::new)
            })
            .await
            .cloned()
    }

    /// The agent, if already constructed
    pub fn get(&self) -> Option<Arc<A>> {
        self.cell.get().cloned()
    }

    /// Whether construction has succeeded
    pub fn is_ready(&self) -> bool {
        self.cell.initialized()
    }

    /// Number of construction attempts so far
    pub fn construction_attempts(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl<A> Default for AgentHolder<A> {
    fn default() -> Self {
        Self::new()
    }
}
