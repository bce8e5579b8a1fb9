// Copyright 2024-2025 Shangmi Developers

use hex_literal::hex;
use shangmi_sm4::{build_combined_table, expand_key, init, transform, transform_block, Sm4};

const KEY: [u8; 16] = hex!("0123456789abcdeffedcba9876543210");
const PLAINTEXT: [u8; 16] = hex!("0123456789abcdeffedcba9876543210");

#[test]
fn test_single_encryption() {
	let round_keys = expand_key(&KEY).unwrap();
	let ciphertext = transform(&PLAINTEXT, &round_keys).unwrap();
	assert_eq!(ciphertext, hex!("681edf34d206965e86b3e94f536e4246"));
}

#[test]
fn test_decryption_of_published_ciphertext() {
	let round_keys = expand_key(&KEY).unwrap().reversed();
	let plaintext = transform(&hex!("681edf34d206965e86b3e94f536e4246"), &round_keys).unwrap();
	assert_eq!(plaintext, PLAINTEXT);
}

#[test]
fn test_million_encryptions() {
	// Second example of GB/T 32907-2016: encrypt the output 1,000,000 times.
	let cipher = Sm4::from_key(&KEY);
	let mut block = PLAINTEXT;
	for _ in 0..1_000_000 {
		cipher.encrypt_block(&mut block);
	}
	assert_eq!(block, hex!("595298c7c6fd271f0402f804c33d3f66"));
}

#[test]
fn test_table_rebuild_does_not_change_output() {
	let round_keys = expand_key(&KEY).unwrap();
	let before = transform_block(&PLAINTEXT, &round_keys);
	for _ in 0..3 {
		let _ = build_combined_table();
		init();
	}
	assert_eq!(transform_block(&PLAINTEXT, &round_keys), before);
}
