// Copyright 2024-2025 Shangmi Developers

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("compression input must be exactly {expected} bytes, got {actual}")]
	InvalidLength { expected: usize, actual: usize },
	#[error("batch has {messages} messages but {outputs} output slots")]
	OutputLengthMismatch { messages: usize, outputs: usize },
}
