// Copyright 2024-2025 Shangmi Developers

//! Message padding: `0x80`, zeros up to 56 mod 64, then the message bit length as a
//! big-endian `u64`.

use std::iter::FusedIterator;

use crate::consts::BLOCK_SIZE;

const PADDING_START: u8 = 0x80;
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// Splits `message` into padded 64-byte blocks, lazily.
///
/// The iterator borrows the message and can be cloned to restart from the same position.
pub fn pad_and_chunk(message: &[u8]) -> Blocks<'_> {
	Blocks::new(message, message.len() as u64)
}

/// Number of padded blocks for a message of `len` bytes.
pub const fn padded_block_count(len: usize) -> usize {
	(len + 9).div_ceil(BLOCK_SIZE)
}

/// Iterator over the padded blocks of a message.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
	data: &'a [u8],
	bit_len: u64,
	index: usize,
	count: usize,
}

impl<'a> Blocks<'a> {
	/// Blocks for `data`, where `data` is the unprocessed tail of a message whose total
	/// length is `total_len` bytes.
	pub(crate) fn new(data: &'a [u8], total_len: u64) -> Self {
		Self {
			data,
			bit_len: total_len.wrapping_mul(8),
			index: 0,
			count: padded_block_count(data.len()),
		}
	}

	fn block(&self, index: usize) -> [u8; BLOCK_SIZE] {
		let mut block = [0u8; BLOCK_SIZE];
		let start = index * BLOCK_SIZE;
		let len = self.data.len();

		if start < len {
			let end = len.min(start + BLOCK_SIZE);
			block[..end - start].copy_from_slice(&self.data[start..end]);
		}
		if (start..start + BLOCK_SIZE).contains(&len) {
			block[len - start] = PADDING_START;
		}
		if index + 1 == self.count {
			block[LENGTH_OFFSET..].copy_from_slice(&self.bit_len.to_be_bytes());
		}
		block
	}
}

impl Iterator for Blocks<'_> {
	type Item = [u8; BLOCK_SIZE];

	fn next(&mut self) -> Option<Self::Item> {
		if self.index == self.count {
			return None;
		}
		let block = self.block(self.index);
		self.index += 1;
		Some(block)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.count - self.index;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}
