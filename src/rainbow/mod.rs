/// Rainbow scheduler: windowed self-entropy passes with a global resort.
///
/// Each pass partitions the collection into disjoint contiguous windows,
/// scores every window independently with the self-entropy engine, then
/// sorts the whole collection ascending by entropy. Later passes see
/// different windows because the sort reorders rows, which is how ranking
/// information propagates across window boundaries over iterations.

use std::mem;
use std::thread;

use parking_lot::Mutex;

use crate::core::config::RainbowConfig;
use crate::core::errors::{RainbowError, Result};
use crate::entropy::self_entropy;
use crate::vector::types::{Vector, VectorCollection};

/// Execution strategy for the windows of one pass.
///
/// Implementations must be numerically interchangeable: only scheduling
/// may differ, never per-row results.
pub trait BlockProcessor: Send + Sync {
    /// Score every window of one pass over `rows`.
    fn process_pass(&self, rows: &mut [Vector], dimension: usize, window_size: usize)
        -> Result<()>;

    /// Get strategy name for logging/config.
    fn name(&self) -> &'static str;
}

/// Disjoint contiguous window bounds for one pass.
///
/// Windows start at 0 and step by `window_size` while a full window plus
/// at least one trailing row remains, so the final short window is never
/// processed. A collection no longer than one window is handled as a
/// single partial window instead, so short collections stay defined.
fn window_bounds(len: usize, window_size: usize) -> Vec<(usize, usize)> {
    if len == 0 {
        return Vec::new();
    }
    if len <= window_size {
        return vec![(0, len)];
    }

    let mut bounds = Vec::new();
    let mut start = 0;
    while start + window_size < len {
        bounds.push((start, start + window_size));
        start += window_size;
    }
    bounds
}

/// Split `rows` into the mutable window views named by `bounds`.
///
/// Bounds are contiguous from index 0, so each window is peeled off the
/// front; the unprocessed tail is dropped.
fn split_windows<'a>(rows: &'a mut [Vector], bounds: &[(usize, usize)]) -> Vec<&'a mut [Vector]> {
    let mut views = Vec::with_capacity(bounds.len());
    let mut rest = rows;
    for &(begin, end) in bounds {
        let slice = mem::take(&mut rest);
        let (window, tail) = slice.split_at_mut(end - begin);
        debug_assert_eq!(window.len(), end - begin);
        views.push(window);
        rest = tail;
    }
    views
}

/// Scores windows one after another on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct SequentialBlockProcessor;

impl BlockProcessor for SequentialBlockProcessor {
    fn process_pass(
        &self,
        rows: &mut [Vector],
        dimension: usize,
        window_size: usize,
    ) -> Result<()> {
        for (begin, end) in window_bounds(rows.len(), window_size) {
            self_entropy(&mut rows[begin..end], dimension)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// Scores windows on a bounded pool of worker threads.
///
/// Workers pull windows from a shared queue, so at most `workers` windows
/// are in flight and every completion frees capacity for the next pending
/// window. The scope join is the end-of-pass barrier: the caller's global
/// sort never runs while a window is still executing.
#[derive(Debug, Clone, Copy)]
pub struct PooledBlockProcessor {
    workers: usize,
}

impl PooledBlockProcessor {
    pub fn new(workers: usize) -> Self {
        PooledBlockProcessor {
            workers: workers.max(1),
        }
    }
}

impl BlockProcessor for PooledBlockProcessor {
    fn process_pass(
        &self,
        rows: &mut [Vector],
        dimension: usize,
        window_size: usize,
    ) -> Result<()> {
        let bounds = window_bounds(rows.len(), window_size);
        if bounds.is_empty() {
            return Ok(());
        }

        let mut views = split_windows(rows, &bounds);
        views.reverse(); // pop() serves windows in pass order
        let queue = Mutex::new(views);
        let first_err: Mutex<Option<RainbowError>> = Mutex::new(None);
        let workers = self.workers.min(bounds.len());

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| loop {
                    let window = queue.lock().pop();
                    let Some(window) = window else { break };
                    if let Err(e) = self_entropy(window, dimension) {
                        let mut slot = first_err.lock();
                        if slot.is_none() {
                            *slot = Some(e);
                        }
                        break;
                    }
                });
            }
        });

        match first_err.into_inner() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "pooled"
    }
}

/// Run the configured number of rainbow passes over `collection`.
///
/// Mutates row entropies and the row order in place. The execution
/// strategy is selected from `config.parallel`.
pub fn rainbow(collection: &mut VectorCollection, config: &RainbowConfig) -> Result<()> {
    if config.parallel {
        let processor = PooledBlockProcessor::new(config.effective_workers());
        rainbow_with(collection, config, &processor)
    } else {
        rainbow_with(collection, config, &SequentialBlockProcessor)
    }
}

/// Run rainbow passes with an explicit execution strategy.
pub fn rainbow_with(
    collection: &mut VectorCollection,
    config: &RainbowConfig,
    processor: &dyn BlockProcessor,
) -> Result<()> {
    if collection.is_empty() {
        return Err(RainbowError::EmptyInput("rainbow collection"));
    }
    if config.window_size == 0 {
        return Err(RainbowError::EmptyInput("rainbow window"));
    }

    let dimension = collection.dimension();
    for pass in 0..config.iterations {
        processor.process_pass(collection.rows_mut(), dimension, config.window_size)?;
        collection.sort_by_entropy();
        tracing::debug!(
            pass,
            strategy = processor.name(),
            rows = collection.len(),
            "rainbow pass complete"
        );
    }
    Ok(())
}
