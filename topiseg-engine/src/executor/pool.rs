//! Dedicated rayon pool for a pinned thread count

use crate::error::{EngineError, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// A rayon pool owned by one segmenter
#[derive(Debug, Clone)]
pub struct DedicatedPool {
    pool: Arc<ThreadPool>,
    threads: usize,
}

impl DedicatedPool {
    /// Build a pool with exactly `threads` workers
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(EngineError::ConfigError(
                "thread count must be positive".to_string(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("topiseg-{i}"))
            .build()?;
        log::debug!("built dedicated pool with {threads} threads");
        Ok(Self {
            pool: Arc::new(pool),
            threads,
        })
    }

    /// Worker count
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `work` inside the pool
    pub fn install<T, F>(&self, work: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        self.pool.install(work)
    }
}
