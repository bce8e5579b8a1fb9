// Copyright 2024-2025 Shangmi Developers

/// Compression input size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Initial chaining value.
pub const IV: [u32; 8] = [
	0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e,
];

/// Round constant for rounds 0..16.
pub const T_LOW: u32 = 0x79cc4519;

/// Round constant for rounds 16..64.
pub const T_HIGH: u32 = 0x7a879d8a;

/// `T_j <<< (j mod 32)` for every round `j`.
pub(crate) const T_ROTATED: [u32; 64] = {
	let mut table = [0u32; 64];
	let mut j = 0;
	while j < 64 {
		let t = if j < 16 { T_LOW } else { T_HIGH };
		table[j] = t.rotate_left((j % 32) as u32);
		j += 1;
	}
	table
};
