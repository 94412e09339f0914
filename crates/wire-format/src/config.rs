// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while decoding an untrusted byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
	/// Maximum nesting of sub-expressions.
	pub max_depth: usize,
	/// Whether bytes may follow the top-level value.
	pub allow_trailing_bytes: bool,
}

impl DecodeConfig {
	pub fn new() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			allow_trailing_bytes: false,
		}
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn with_trailing_bytes(mut self, allow: bool) -> Self {
		self.allow_trailing_bytes = allow;
		self
	}
}

impl Default for DecodeConfig {
	fn default() -> Self {
		Self::new()
	}
}
