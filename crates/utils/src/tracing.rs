// Copyright 2024-2025 Shangmi Developers

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Calling it more than once is harmless: only the first call installs the subscriber.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer())
		.try_init();
}
