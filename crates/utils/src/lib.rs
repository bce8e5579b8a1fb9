// Copyright 2024-2025 Shangmi Developers

//! Ambient plumbing shared by the SM3 and SM4 crates: error macros, environment
//! configuration, thread-pool setup and tracing initialisation.

pub mod env;
pub mod error_utils;
pub mod rayon;
pub mod tracing;
