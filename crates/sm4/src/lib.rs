// Copyright 2024-2025 Shangmi Developers

//! The SM4 block cipher (GB/T 32907-2016).
//!
//! Encryption and decryption share one [`transform`]; decryption applies the
//! round keys in reverse order. The S-box and the round linear transform are fused
//! into a process-wide [`COMBINED_TABLE`] that is built once on first use.

mod block;
pub mod consts;
mod error;
mod key_schedule;
pub mod table;

pub use block::*;
pub use consts::{BLOCK_SIZE, KEY_SIZE, ROUNDS};
pub use error::*;
pub use key_schedule::*;
pub use table::{build_combined_table, diffuse, init, substitute, CombinedTable, COMBINED_TABLE};
