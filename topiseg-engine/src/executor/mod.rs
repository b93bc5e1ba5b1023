//! Execution strategies for matrix construction
//!
//! The segmentation itself is always sequential; what varies is whether
//! the similarity and rank matrices are built row-parallel on rayon, and on
//! which pool.

#[cfg(feature = "parallel")]
pub mod pool;

use crate::error::Result;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded matrix construction
    Sequential,
    /// Row-parallel matrix construction
    Parallel,
    /// Parallel from a unit-count threshold on
    #[default]
    Adaptive,
}

impl ExecutionMode {
    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Automatically select execution mode based on document size
pub fn auto_select(unit_count: usize, threshold: usize) -> ExecutionMode {
    if unit_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Resolves the execution mode per document and runs work on the right pool
#[derive(Debug)]
pub struct Executor {
    mode: ExecutionMode,
    parallel_threshold: usize,
    #[cfg(feature = "parallel")]
    pool: Option<pool::DedicatedPool>,
}

impl Executor {
    /// Create an executor; a dedicated pool is built when `threads` is set
    pub fn new(mode: ExecutionMode, threads: Option<usize>, parallel_threshold: usize) -> Result<Self> {
        #[cfg(feature = "parallel")]
        let pool = match threads {
            Some(n) if mode != ExecutionMode::Sequential => Some(pool::DedicatedPool::new(n)?),
            _ => None,
        };
        #[cfg(not(feature = "parallel"))]
        let _ = threads;

        Ok(Self {
            mode,
            parallel_threshold,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    /// Sequential executor
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            parallel_threshold: usize::MAX,
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Configured mode
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Concrete mode for a document of `unit_count` units (never `Adaptive`)
    pub fn resolve(&self, unit_count: usize) -> ExecutionMode {
        match self.mode {
            ExecutionMode::Adaptive => auto_select(unit_count, self.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            other => other,
        }
    }

    /// Number of threads parallel work will use
    pub fn threads(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            match &self.pool {
                Some(pool) => pool.threads(),
                None => rayon::current_num_threads(),
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    /// Run `work`, inside the dedicated pool when one exists and `mode` is parallel
    pub fn run<T, F>(&self, mode: ExecutionMode, work: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        #[cfg(feature = "parallel")]
        {
            if mode == ExecutionMode::Parallel {
                if let Some(pool) = &self.pool {
                    return pool.install(work);
                }
            }
        }
        #[cfg(not(feature = "parallel"))]
        let _ = mode;
        work()
    }
}
