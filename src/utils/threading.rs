//! # Threading Configuration
//!
//! ## Role
//! Build rayon thread pools and run per-individual work on a fixed number of
//! workers. Library calls never touch the global pool, so the thread count
//! stays an explicit per-call parameter.

use rayon::prelude::*;

use crate::error::{GenvalError, Result};

/// Create a configured thread pool.
pub fn build_thread_pool(n_threads: usize) -> Result<rayon::ThreadPool> {
    check_thread_count(n_threads)?;
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .thread_name(|i| format!("genval-worker-{}", i))
        .build()
        .map_err(|e| GenvalError::config(format!("Failed to create thread pool: {}", e)))
}

/// Reject a thread count of zero
pub fn check_thread_count(n_threads: usize) -> Result<()> {
    if n_threads < 1 {
        return Err(GenvalError::invalid_argument(format!(
            "thread count must be at least 1, got {}",
            n_threads
        )));
    }
    Ok(())
}

/// Fill `out[i] = f(i)` using exactly `n_threads` workers.
///
/// Each slot is written by one worker only. With one thread the loop runs on
/// the calling thread without building a pool.
pub fn par_fill<F>(out: &mut [f64], n_threads: usize, f: F) -> Result<()>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    check_thread_count(n_threads)?;

    if n_threads == 1 {
        out.iter_mut().enumerate().for_each(|(i, v)| *v = f(i));
        return Ok(());
    }

    let pool = build_thread_pool(n_threads)?;
    pool.install(|| {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, v)| *v = f(i));
    });
    Ok(())
}
