// Copyright 2024-2025 Shangmi Developers

//! The SM3 cryptographic hash function (GB/T 32905-2016).
//!
//! [`digest`] hashes a whole message; [`Sm3`] is the incremental equivalent and
//! implements the RustCrypto [`digest`](::digest) traits. [`digest_batch`] hashes many
//! independent messages on the rayon pool. Blocks of a single message are always
//! compressed in order, one after another.

pub mod compression;
pub mod consts;
mod error;
pub mod hasher;
pub mod padding;
pub mod parallel_digest;

pub use ::digest;
pub use compression::{compress, compress_slice};
pub use consts::{BLOCK_SIZE, DIGEST_SIZE, IV};
pub use error::*;
pub use hasher::{digest, state_to_bytes, Sm3, Sm3Digest};
pub use padding::{pad_and_chunk, Blocks};
pub use parallel_digest::{digest_batch, digest_batch_into};
