// Copyright 2024-2025 Shangmi Developers

use ::digest::{
	consts::{U32, U64},
	core_api::BlockSizeUser,
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use crate::{
	compression::compress,
	consts::{BLOCK_SIZE, DIGEST_SIZE, IV},
	padding::{pad_and_chunk, Blocks},
};

pub type Sm3Digest = [u8; DIGEST_SIZE];

/// Serializes a chaining state as the 32-byte digest, big-endian per word.
pub fn state_to_bytes(state: &[u32; 8]) -> Sm3Digest {
	let mut out = [0u8; DIGEST_SIZE];
	for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
		chunk.copy_from_slice(&word.to_be_bytes());
	}
	out
}

/// Hashes a complete message.
pub fn digest(message: &[u8]) -> Sm3Digest {
	let mut state = IV;
	for block in pad_and_chunk(message) {
		compress(&mut state, &block);
	}
	state_to_bytes(&state)
}

/// Incremental SM3 hasher.
///
/// Feeding a message in any number of pieces gives the same result as [`digest`].
#[derive(Clone)]
pub struct Sm3 {
	state: [u32; 8],
	buffer: [u8; BLOCK_SIZE],
	filled_bytes: usize,
	blocks_len: u64,
}

impl Default for Sm3 {
	fn default() -> Self {
		Self {
			state: IV,
			buffer: [0; BLOCK_SIZE],
			filled_bytes: 0,
			blocks_len: 0,
		}
	}
}

impl Sm3 {
	fn compress_block(&mut self, block: &[u8; BLOCK_SIZE]) {
		compress(&mut self.state, block);
		self.blocks_len += 1;
	}

	fn finalize_into(&mut self, out: &mut Output<Self>) {
		let total_len = self
			.blocks_len
			.wrapping_mul(BLOCK_SIZE as u64)
			.wrapping_add(self.filled_bytes as u64);
		for block in Blocks::new(&self.buffer[..self.filled_bytes], total_len) {
			compress(&mut self.state, &block);
		}
		out.copy_from_slice(&state_to_bytes(&self.state));
	}
}

impl HashMarker for Sm3 {}

impl Update for Sm3 {
	fn update(&mut self, mut data: &[u8]) {
		if self.filled_bytes != 0 {
			let to_copy = std::cmp::min(data.len(), BLOCK_SIZE - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_SIZE {
				let block = self.buffer;
				self.compress_block(&block);
				self.filled_bytes = 0;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_SIZE);
		for chunk in &mut chunks {
			self.compress_block(chunk.try_into().expect("chunk is 64 bytes"));
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.filled_bytes = remaining.len();
		}
	}
}

impl OutputSizeUser for Sm3 {
	type OutputSize = U32;
}

impl BlockSizeUser for Sm3 {
	type BlockSize = U64;
}

impl FixedOutput for Sm3 {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		Self::finalize_into(&mut self, out);
	}
}

impl Reset for Sm3 {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl FixedOutputReset for Sm3 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		Self::finalize_into(self, out);
		Reset::reset(self);
	}
}

impl std::fmt::Debug for Sm3 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("Sm3 { ... }")
	}
}
