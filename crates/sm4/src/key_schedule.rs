// Copyright 2024-2025 Shangmi Developers

use std::{array, fmt};

use shangmi_utils::ensure;

use crate::{
	consts::{CK, FK, KEY_SIZE, ROUNDS},
	table::substitute,
	Error,
};

/// The 32 round keys derived from one cipher key, round 0 first.
///
/// Encryption applies them in this order; decryption applies [`RoundKeys::reversed`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys([u32; ROUNDS]);

impl RoundKeys {
	pub const fn new(words: [u32; ROUNDS]) -> Self {
		Self(words)
	}

	pub const fn as_words(&self) -> &[u32; ROUNDS] {
		&self.0
	}

	/// The same schedule with round 31 first, for decryption.
	#[must_use]
	pub fn reversed(&self) -> Self {
		let mut words = self.0;
		words.reverse();
		Self(words)
	}
}

impl From<[u32; ROUNDS]> for RoundKeys {
	fn from(words: [u32; ROUNDS]) -> Self {
		Self(words)
	}
}

impl AsRef<[u32]> for RoundKeys {
	fn as_ref(&self) -> &[u32] {
		&self.0
	}
}

impl fmt::Debug for RoundKeys {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("RoundKeys { ... }")
	}
}

/// The key schedule's linear transform `L'`.
#[inline]
pub fn diffuse_key(x: u32) -> u32 {
	x ^ x.rotate_left(13) ^ x.rotate_left(23)
}

/// Expands a 16-byte key into its round keys.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if `key` is not exactly 16 bytes.
pub fn expand_key(key: &[u8]) -> Result<RoundKeys, Error> {
	ensure!(
		key.len() == KEY_SIZE,
		Error::InvalidLength {
			what: "key",
			expected: KEY_SIZE,
			actual: key.len(),
		}
	);
	let key: &[u8; KEY_SIZE] = key.try_into().expect("length checked above");
	Ok(expand_key_block(key))
}

pub fn expand_key_block(key: &[u8; KEY_SIZE]) -> RoundKeys {
	let mut k: [u32; 4] = array::from_fn(|i| {
		let word = u32::from_be_bytes(key[4 * i..4 * i + 4].try_into().expect("chunk is 4 bytes"));
		word ^ FK[i]
	});

	let mut round_keys = [0u32; ROUNDS];
	for (rk, &ck) in round_keys.iter_mut().zip(CK.iter()) {
		let next = k[0] ^ diffuse_key(substitute(k[1] ^ k[2] ^ k[3] ^ ck));
		k = [k[1], k[2], k[3], next];
		*rk = next;
	}
	RoundKeys(round_keys)
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;

	const KEY: [u8; 16] = hex!("0123456789abcdeffedcba9876543210");

	#[test]
	fn test_standard_round_keys() {
		let round_keys = expand_key(&KEY).unwrap();
		let words = round_keys.as_words();
		assert_eq!(words[0], 0xf12186f9);
		assert_eq!(words[1], 0x41662b61);
		assert_eq!(words[31], 0x9124a012);
	}

	#[test]
	fn test_invalid_key_length() {
		for len in [0, 15, 17, 32] {
			let key = vec![0u8; len];
			assert_eq!(
				expand_key(&key),
				Err(Error::InvalidLength {
					what: "key",
					expected: 16,
					actual: len
				})
			);
		}
	}

	#[test]
	fn test_reversed() {
		let round_keys = expand_key_block(&KEY);
		let reversed = round_keys.reversed();
		for i in 0..ROUNDS {
			assert_eq!(reversed.as_words()[i], round_keys.as_words()[ROUNDS - 1 - i]);
		}
		assert_eq!(reversed.reversed(), round_keys);
	}

	#[test]
	fn test_debug_hides_words() {
		let round_keys = expand_key_block(&KEY);
		assert_eq!(format!("{round_keys:?}"), "RoundKeys { ... }");
	}
}
