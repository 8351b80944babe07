use std::thread;

/// Configuration for the rainbow ranking scheduler
#[derive(Debug, Clone)]
pub struct RainbowConfig {
    /// Rows per window; entropy is computed window-locally
    pub window_size: usize,

    /// Number of {window entropy, global sort} passes
    pub iterations: usize,

    /// Process windows of one pass on a worker pool
    pub parallel: bool,

    /// Worker count; None sizes the pool to available parallelism
    pub workers: Option<usize>,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        RainbowConfig {
            window_size: 100,
            iterations: 2,
            parallel: true,
            workers: None,
        }
    }
}

impl RainbowConfig {
    /// Resolve the worker count, falling back to the number of logical processors.
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        })
    }
}
