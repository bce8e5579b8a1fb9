// Copyright 2024-2025 Shangmi Developers

use std::{env, sync::OnceLock};

/// In case when number of threads is set to 1, use rayon thread pool with
/// `use_current_thread` set to true, so single-threaded runs keep their call stacks
/// free of pool hand-offs.
///
/// NOTE: rayon doesn't allow initializing global thread pool several times, so
/// in case when it was initialized before this function returns an error.
/// Call it at the beginning of `main` or of a benchmark.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| match env::var("RAYON_NUM_THREADS") {
		Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global(),
		_ => Ok(()),
	})
}

/// Returns the base-2 logarithm of the number of threads that should be used for the task
pub fn get_log_max_threads() -> usize {
	(2 * rayon::current_num_threads() - 1).ilog2() as _
}

/// Smallest number of batch items handed to one rayon task, so that a batch of
/// `len` items is split into roughly four tasks per thread.
pub fn min_batch_chunk(len: usize) -> usize {
	let tasks = 4usize << get_log_max_threads();
	len.div_ceil(tasks).max(1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_log_max_threads_covers_pool() {
		let log = get_log_max_threads();
		assert!(1usize << log >= rayon::current_num_threads());
	}

	#[test]
	fn test_min_batch_chunk() {
		assert_eq!(min_batch_chunk(0), 1);
		assert_eq!(min_batch_chunk(1), 1);
		let len = 1 << 20;
		let chunk = min_batch_chunk(len);
		assert!(chunk >= 1 && chunk <= len);
	}
}
