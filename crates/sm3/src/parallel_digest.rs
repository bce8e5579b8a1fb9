// Copyright 2024-2025 Shangmi Developers

//! Hashing of many independent messages at once.
//!
//! Each message is hashed start to finish by one worker; only whole messages are
//! distributed. Results are stored by input index.

use rayon::prelude::*;
use shangmi_utils::{env::sequential_batches, ensure, rayon::min_batch_chunk};
use tracing::{debug, instrument};

use crate::{
	consts::DIGEST_SIZE,
	hasher::{digest, Sm3Digest},
	Error,
};

/// Hashes every message, returning digests in input order.
pub fn digest_batch<M: AsRef<[u8]> + Sync>(messages: &[M]) -> Vec<Sm3Digest> {
	let mut out = vec![[0u8; DIGEST_SIZE]; messages.len()];
	fill_digests(messages, &mut out);
	out
}

/// Hashes every message into the matching slot of `out`.
///
/// # Errors
/// Returns [`Error::OutputLengthMismatch`] if `out` does not have one slot per message.
pub fn digest_batch_into<M: AsRef<[u8]> + Sync>(
	messages: &[M],
	out: &mut [Sm3Digest],
) -> Result<(), Error> {
	ensure!(
		messages.len() == out.len(),
		Error::OutputLengthMismatch {
			messages: messages.len(),
			outputs: out.len(),
		}
	);
	fill_digests(messages, out);
	Ok(())
}

#[instrument(skip_all, fields(n_messages = messages.len()))]
fn fill_digests<M: AsRef<[u8]> + Sync>(messages: &[M], out: &mut [Sm3Digest]) {
	debug_assert_eq!(messages.len(), out.len());

	if sequential_batches() {
		debug!("sequential batch");
		for (message, out) in messages.iter().zip(out.iter_mut()) {
			*out = digest(message.as_ref());
		}
		return;
	}

	let min_len = min_batch_chunk(messages.len());
	debug!(min_len, "parallel batch");
	messages
		.par_iter()
		.zip(out.par_iter_mut())
		.with_min_len(min_len)
		.for_each(|(message, out)| *out = digest(message.as_ref()));
}
