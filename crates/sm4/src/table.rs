// Copyright 2024-2025 Shangmi Developers

//! Fused S-box and linear transform lookup tables.

use std::array;

use lazy_static::lazy_static;

use crate::consts::SBOX;

/// `CombinedTable[i][b]` is `diffuse(SBOX[b] << 8 * i)`: the round transform's
/// contribution of byte value `b` sitting at byte position `i` (0 = least significant).
pub type CombinedTable = [[u32; 256]; 4];

lazy_static! {
	/// The process-wide combined table, built on first use and read-only afterwards.
	pub static ref COMBINED_TABLE: CombinedTable = {
		tracing::debug!("building SM4 combined substitution/diffusion table");
		build_combined_table()
	};
}

/// Forces construction of [`COMBINED_TABLE`] so the first block operation does not pay for it.
pub fn init() {
	lazy_static::initialize(&COMBINED_TABLE);
}

/// Applies the S-box to each byte of `x`.
#[inline]
pub fn substitute(x: u32) -> u32 {
	u32::from_be_bytes(x.to_be_bytes().map(|b| SBOX[b as usize]))
}

/// The round function's linear transform `L`.
#[inline]
pub fn diffuse(x: u32) -> u32 {
	x ^ x.rotate_left(2) ^ x.rotate_left(10) ^ x.rotate_left(18) ^ x.rotate_left(24)
}

pub fn build_combined_table() -> CombinedTable {
	array::from_fn(|i| array::from_fn(|b| diffuse(u32::from(SBOX[b]) << (8 * i))))
}

/// `diffuse(substitute(x))` evaluated with four table lookups.
#[inline(always)]
pub(crate) fn round_function(table: &CombinedTable, x: u32) -> u32 {
	let [b3, b2, b1, b0] = x.to_be_bytes();
	table[0][b0 as usize] ^ table[1][b1 as usize] ^ table[2][b2 as usize] ^ table[3][b3 as usize]
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_table_matches_definition() {
		let table = build_combined_table();
		for i in 0..4 {
			for b in 0..256 {
				assert_eq!(table[i][b], diffuse(u32::from(SBOX[b]) << (8 * i)));
			}
		}
	}

	#[test]
	fn test_build_is_idempotent() {
		assert_eq!(build_combined_table(), build_combined_table());
		init();
		assert_eq!(*COMBINED_TABLE, build_combined_table());
	}

	proptest! {
		#[test]
		fn test_lookup_equals_substitute_then_diffuse(x in any::<u32>()) {
			prop_assert_eq!(round_function(&COMBINED_TABLE, x), diffuse(substitute(x)));
		}
	}
}
