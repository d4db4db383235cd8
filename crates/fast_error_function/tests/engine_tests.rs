#![cfg(all(feature = "dev", feature = "cpu"))]
//! Tests for the rayon executor.

use error_function::internals::engine::executor::{ErfConfig, ErfExecutor};
use error_function::internals::engine::method::{Function, Method};
use fast_error_function::internals::engine::executor::{
    MIN_CHUNK_LEN, chunk_len, eval_integers_parallel, eval_slice_parallel,
};

/// Test chunks never drop below the minimum and cover the input.
#[test]
fn test_chunk_len() {
    assert_eq!(chunk_len(10), MIN_CHUNK_LEN);
    let n = 10_000_000;
    let chunk = chunk_len(n);
    assert!(chunk >= MIN_CHUNK_LEN);
    assert!(chunk * rayon::current_num_threads() >= n);
}

/// Test the parallel executor against the serial one.
#[test]
fn test_parallel_executor() {
    let exec = ErfExecutor::new(ErfConfig {
        method: Method::NumericalRecipes,
        function: Function::Erfc,
    });

    let xs: Vec<f64> = (0..3_000).map(|i| i as f64 * 1e-3).collect();
    assert_eq!(eval_slice_parallel(&exec, &xs), exec.eval_slice(&xs).unwrap());

    let ns: Vec<i64> = (0..3_000).collect();
    assert_eq!(
        eval_integers_parallel(&exec, &ns),
        exec.eval_integers(&ns).unwrap()
    );
}
