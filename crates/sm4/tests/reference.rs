// Copyright 2024-2025 Shangmi Developers

use proptest::prelude::*;
use shangmi_sm4::Sm4;
use sm4_reference::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

proptest! {
	#[test]
	fn test_sm4_vs_reference(key in any::<[u8; 16]>(), plaintext in any::<[u8; 16]>()) {
		let reference = sm4_reference::Sm4::new(&key.into());
		let mut expected = plaintext.into();
		reference.encrypt_block(&mut expected);
		let expected: [u8; 16] = expected.into();

		let cipher = Sm4::from_key(&key);
		let mut block = plaintext;
		cipher.encrypt_block(&mut block);
		prop_assert_eq!(block, expected);

		let mut decrypted = expected.into();
		reference.decrypt_block(&mut decrypted);
		cipher.decrypt_block(&mut block);
		prop_assert_eq!(block, <[u8; 16]>::from(decrypted));
	}
}
