// Copyright 2024-2025 Shangmi Developers

//! Message expansion and the 64-round compression function.

use shangmi_utils::ensure;

use crate::{
	consts::{BLOCK_SIZE, T_ROTATED},
	Error,
};

#[inline(always)]
fn p0(x: u32) -> u32 {
	x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
	x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

#[inline(always)]
fn ff(x: u32, y: u32, z: u32, round: usize) -> u32 {
	if round < 16 {
		x ^ y ^ z
	} else {
		(x & y) | (x & z) | (y & z)
	}
}

#[inline(always)]
fn gg(x: u32, y: u32, z: u32, round: usize) -> u32 {
	if round < 16 {
		x ^ y ^ z
	} else {
		(x & y) | (!x & z)
	}
}

/// Expands one block into the 68 words `W` and the 64 words `W'`.
pub fn expand(block: &[u8; BLOCK_SIZE]) -> ([u32; 68], [u32; 64]) {
	let mut w = [0u32; 68];
	for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
	}
	for i in 16..68 {
		w[i] = p1(w[i - 16] ^ w[i - 9] ^ w[i - 3].rotate_left(15))
			^ w[i - 13].rotate_left(7)
			^ w[i - 6];
	}

	let mut w1 = [0u32; 64];
	for (i, word) in w1.iter_mut().enumerate() {
		*word = w[i] ^ w[i + 4];
	}
	(w, w1)
}

/// Absorbs one block into `state`.
///
/// Blocks of one message must be compressed in order against the same state.
pub fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_SIZE]) {
	let (w, w1) = expand(block);
	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

	for j in 0..64 {
		let a12 = a.rotate_left(12);
		let ss1 = a12
			.wrapping_add(e)
			.wrapping_add(T_ROTATED[j])
			.rotate_left(7);
		let ss2 = ss1 ^ a12;
		let tt1 = ff(a, b, c, j)
			.wrapping_add(d)
			.wrapping_add(ss2)
			.wrapping_add(w1[j]);
		let tt2 = gg(e, f, g, j)
			.wrapping_add(h)
			.wrapping_add(ss1)
			.wrapping_add(w[j]);

		d = c;
		c = b.rotate_left(9);
		b = a;
		a = tt1;
		h = g;
		g = f.rotate_left(19);
		f = e;
		e = p0(tt2);
	}

	for (s, r) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*s ^= r;
	}
}

/// [`compress`] for an unsized block.
///
/// # Errors
/// Returns [`Error::InvalidLength`] unless `block` is exactly 64 bytes. The state is left
/// untouched in that case.
pub fn compress_slice(state: &mut [u32; 8], block: &[u8]) -> Result<(), Error> {
	ensure!(
		block.len() == BLOCK_SIZE,
		Error::InvalidLength {
			expected: BLOCK_SIZE,
			actual: block.len(),
		}
	);
	compress(state, block.try_into().expect("length checked above"));
	Ok(())
}
