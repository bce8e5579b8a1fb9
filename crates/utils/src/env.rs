// Copyright 2024-2025 Shangmi Developers

/// Environment flag that keeps batch operations on the calling thread.
pub const SEQUENTIAL_FLAG: &str = "SHANGMI_SEQUENTIAL";

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => parse_flag(&val),
		Err(_) => false,
	}
}

/// Whether batch operations should skip the rayon pool.
pub fn sequential_batches() -> bool {
	boolean_env_flag_set(SEQUENTIAL_FLAG)
}

fn parse_flag(val: &str) -> bool {
	["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_flag() {
		for val in ["1", "on", "ON", "true", "TRUE", "yes", "YES"] {
			assert!(parse_flag(val), "{val}");
		}
		for val in ["", "0", "off", "no", "True"] {
			assert!(!parse_flag(val), "{val}");
		}
	}

	#[test]
	fn test_unset_flag() {
		assert!(!boolean_env_flag_set("SHANGMI_FLAG_THAT_IS_NEVER_SET"));
	}
}
