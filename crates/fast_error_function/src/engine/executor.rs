//! Parallel execution engine for erf evaluation.
//!
//! ## Purpose
//!
//! This module splits a slice into chunks and evaluates them on the rayon
//! thread pool. Every element is independent, so chunks are written straight
//! into disjoint parts of the output buffer.
//!
//! ## Design notes
//!
//! * **Chunking**: One chunk per worker, but never smaller than
//!   [`MIN_CHUNK_LEN`] elements.
//! * **Threshold**: Inputs shorter than the evaluator's `min_parallel_len`
//!   never reach this module.
//!
//! ## Invariants
//!
//! * Output order matches input order and equals the serial result exactly.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `Validator`).

// External dependencies
use rayon::prelude::*;
use log::trace;
use num_traits::Float;

// Export dependencies from error_function crate
use error_function::internals::engine::executor::ErfExecutor;

/// Smallest chunk handed to a worker.
pub const MIN_CHUNK_LEN: usize = 1024;

/// Chunk length used to split `len` elements across the pool.
pub fn chunk_len(len: usize) -> usize {
    len.div_ceil(rayon::current_num_threads().max(1))
        .max(MIN_CHUNK_LEN)
}

/// Evaluate `input` into `output` in parallel.
///
/// Both slices must have the same length.
pub fn eval_into_parallel<T>(executor: &ErfExecutor, input: &[T], output: &mut [T])
where
    T: Float + Send + Sync,
{
    let chunk = chunk_len(input.len());
    trace!(
        "splitting {} values into chunks of {} across {} threads",
        input.len(),
        chunk,
        rayon::current_num_threads()
    );
    executor.trace_promotion::<T>(input.len());

    output
        .par_chunks_mut(chunk)
        .zip(input.par_chunks(chunk))
        .for_each(|(out, xs)| {
            for (y, &x) in out.iter_mut().zip(xs) {
                *y = executor.eval(x);
            }
        });
}

/// Evaluate `input` into a new vector in parallel.
pub fn eval_slice_parallel<T>(executor: &ErfExecutor, input: &[T]) -> Vec<T>
where
    T: Float + Send + Sync,
{
    let mut output = vec![T::zero(); input.len()];
    eval_into_parallel(executor, input, &mut output);
    output
}

/// Evaluate integers, widened to `f64`, in parallel.
pub fn eval_integers_parallel(executor: &ErfExecutor, input: &[i64]) -> Vec<f64> {
    trace!("evaluating {} integers in parallel", input.len());
    input
        .par_iter()
        .with_min_len(MIN_CHUNK_LEN)
        .map(|&n| executor.eval(n as f64))
        .collect()
}
