// Copyright 2024-2025 Shangmi Developers

use std::fmt;

use rayon::prelude::*;
use shangmi_utils::{env::sequential_batches, ensure, rayon::min_batch_chunk};
use tracing::{debug, instrument};

use crate::{
	consts::{BLOCK_SIZE, KEY_SIZE},
	key_schedule::{expand_key, expand_key_block, RoundKeys},
	table::{round_function, CombinedTable, COMBINED_TABLE},
	Error,
};

/// Runs the 32 rounds over one block.
///
/// The same function encrypts (forward round keys) and decrypts (reversed round keys).
///
/// # Errors
/// Returns [`Error::InvalidLength`] if `block` is not exactly 16 bytes.
pub fn transform(block: &[u8], round_keys: &RoundKeys) -> Result<[u8; BLOCK_SIZE], Error> {
	ensure!(
		block.len() == BLOCK_SIZE,
		Error::InvalidLength {
			what: "block",
			expected: BLOCK_SIZE,
			actual: block.len(),
		}
	);
	let block: &[u8; BLOCK_SIZE] = block.try_into().expect("length checked above");
	Ok(transform_block(block, round_keys))
}

pub fn transform_block(block: &[u8; BLOCK_SIZE], round_keys: &RoundKeys) -> [u8; BLOCK_SIZE] {
	let table: &CombinedTable = &COMBINED_TABLE;

	let mut x = [0u32; 4];
	for (word, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
	}

	for &rk in round_keys.as_words() {
		let next = x[0] ^ round_function(table, x[1] ^ x[2] ^ x[3] ^ rk);
		x = [x[1], x[2], x[3], next];
	}

	// Output is X35, X34, X33, X32.
	let mut out = [0u8; BLOCK_SIZE];
	for (chunk, word) in out.chunks_exact_mut(4).zip(x.iter().rev()) {
		chunk.copy_from_slice(&word.to_be_bytes());
	}
	out
}

/// Transforms many independent blocks in place, spreading them across the rayon pool.
///
/// Each block is processed exactly as by [`transform_block`]; no state carries between blocks.
#[instrument(skip_all, fields(n_blocks = blocks.len()))]
pub fn transform_blocks(blocks: &mut [[u8; BLOCK_SIZE]], round_keys: &RoundKeys) {
	crate::table::init();

	if sequential_batches() {
		debug!("sequential batch");
		for block in blocks.iter_mut() {
			*block = transform_block(block, round_keys);
		}
		return;
	}

	let min_len = min_batch_chunk(blocks.len());
	debug!(min_len, "parallel batch");
	blocks
		.par_iter_mut()
		.with_min_len(min_len)
		.for_each(|block| *block = transform_block(block, round_keys));
}

/// An SM4 key with both round-key orders precomputed.
#[derive(Clone)]
pub struct Sm4 {
	encrypt_keys: RoundKeys,
	decrypt_keys: RoundKeys,
}

impl Sm4 {
	/// # Errors
	/// Returns [`Error::InvalidLength`] if `key` is not exactly 16 bytes.
	pub fn new(key: &[u8]) -> Result<Self, Error> {
		Ok(Self::from_round_keys(expand_key(key)?))
	}

	pub fn from_key(key: &[u8; KEY_SIZE]) -> Self {
		Self::from_round_keys(expand_key_block(key))
	}

	pub fn from_round_keys(encrypt_keys: RoundKeys) -> Self {
		Self {
			encrypt_keys,
			decrypt_keys: encrypt_keys.reversed(),
		}
	}

	pub fn round_keys(&self) -> &RoundKeys {
		&self.encrypt_keys
	}

	pub fn decryption_round_keys(&self) -> &RoundKeys {
		&self.decrypt_keys
	}

	pub fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
		*block = transform_block(block, &self.encrypt_keys);
	}

	pub fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
		*block = transform_block(block, &self.decrypt_keys);
	}

	pub fn encrypt_blocks(&self, blocks: &mut [[u8; BLOCK_SIZE]]) {
		transform_blocks(blocks, &self.encrypt_keys);
	}

	pub fn decrypt_blocks(&self, blocks: &mut [[u8; BLOCK_SIZE]]) {
		transform_blocks(blocks, &self.decrypt_keys);
	}
}

impl fmt::Debug for Sm4 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sm4 { ... }")
	}
}
