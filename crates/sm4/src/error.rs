// Copyright 2024-2025 Shangmi Developers

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("{what} must be exactly {expected} bytes, got {actual}")]
	InvalidLength {
		what: &'static str,
		expected: usize,
		actual: usize,
	},
}
