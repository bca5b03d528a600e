//! Dynamic, load-balanced partitioning of one frame's work.
//!
//! Per-agent cost depends on local density, so equal static slices leave
//! workers idle behind the most crowded one. Instead a mutex-guarded cursor
//! hands out chunks of `⌈remaining / 2T⌉` indices: large while most work is
//! left, shrinking geometrically so workers finish at nearly the same time.
//!
//! Each chunk is an exclusive `&mut` sub-slice split off the output buffer,
//! so no two workers can ever write the same index.
//!
//! Workers are a persistent rayon pool created once; a frame is a rayon
//! scope, which returns only after every worker has drained the cursor.

use crate::error::Result;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

/// A contiguous run of indices owned by one worker.
pub struct Chunk<'a, T> {
    start: usize,
    items: &'a mut [T],
}

impl<'a, T> Chunk<'a, T> {
    /// Global indices covered by this chunk.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.items.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Runs `job` on every slot with its global index.
    pub fn for_each<F>(self, job: &F)
    where
        F: Fn(usize, &mut T),
    {
        for (offset, slot) in self.items.iter_mut().enumerate() {
            job(self.start + offset, slot);
        }
    }
}

struct Cursor<'a, T> {
    next: usize,
    rest: &'a mut [T],
    claims: usize,
}

/// Shared cursor over one frame's output slots.
pub struct WorkQueue<'a, T> {
    cursor: Mutex<Cursor<'a, T>>,
    workers: usize,
}

impl<'a, T> WorkQueue<'a, T> {
    /// # Panics
    /// If `workers` is zero.
    #[must_use]
    pub fn new(items: &'a mut [T], workers: usize) -> Self {
        assert!(workers > 0, "work queue needs at least one worker");
        Self {
            cursor: Mutex::new(Cursor {
                next: 0,
                rest: items,
                claims: 0,
            }),
            workers,
        }
    }

    /// Claims the next chunk, sized against what is still unclaimed, or
    /// `None` once every index has been handed out.
    pub fn claim(&self) -> Option<Chunk<'a, T>> {
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        if cursor.rest.is_empty() {
            return None;
        }
        let size = cursor.rest.len().div_ceil(2 * self.workers);
        let rest = std::mem::take(&mut cursor.rest);
        let (head, tail) = rest.split_at_mut(size);
        cursor.rest = tail;
        let start = cursor.next;
        cursor.next += size;
        cursor.claims += 1;
        tracing::trace!(start, len = size, "chunk claimed");
        Some(Chunk { start, items: head })
    }

    /// Number of chunks handed out so far.
    #[must_use]
    pub fn claims(&self) -> usize {
        self.cursor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .claims
    }

    /// Number of indices not yet claimed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cursor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .rest
            .len()
    }
}

/// Outcome of one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub workers: usize,
    pub claims: usize,
}

/// Picks the worker count: the override if given, otherwise the hardware
/// parallelism, never more than there are agents and never zero.
#[must_use]
pub fn resolve_worker_count(agents: usize, requested: Option<usize>) -> usize {
    let wanted = requested.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    });
    wanted.min(agents).max(1)
}

/// Fixed pool of worker threads that runs one frame at a time.
pub struct Scheduler {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

impl Scheduler {
    /// Starts `workers` threads.
    ///
    /// # Panics
    /// If `workers` is zero.
    pub fn new(workers: usize) -> Result<Self> {
        assert!(workers > 0, "scheduler needs at least one worker");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("flock-worker-{i}"))
            .build()?;
        tracing::debug!(workers, "worker pool started");
        Ok(Self { pool, workers })
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Calls `job(index, &mut items[index])` exactly once for every index,
    /// spread over the pool, and returns when all of them are done.
    pub fn run<T, F>(&self, items: &mut [T], job: F) -> FrameReport
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        let queue = WorkQueue::new(items, self.workers);
        let initial: Vec<Chunk<'_, T>> =
            std::iter::from_fn(|| queue.claim()).take(self.workers).collect();

        let queue_ref = &queue;
        let job = &job;
        self.pool.scope(move |s| {
            for chunk in initial {
                s.spawn(move |_| {
                    let mut next = Some(chunk);
                    while let Some(chunk) = next {
                        chunk.for_each(job);
                        next = queue_ref.claim();
                    }
                });
            }
        });

        FrameReport {
            workers: self.workers,
            claims: queue.claims(),
        }
    }
}
