// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use meridian_type::{
	Diagnostic, IntoDiagnostic,
	error::diagnostic::wire::{
		invalid_boolean, invalid_float, invalid_utf8, nesting_too_deep, trailing_bytes, truncated,
		unknown_type_tag,
	},
};

/// Every way a byte stream can fail to decode.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WireError {
	#[error("truncated while reading {field}: needed {needed}, remaining {remaining}")]
	Truncated {
		field: &'static str,
		needed: usize,
		remaining: usize,
	},

	#[error("invalid boolean byte {byte:#04x} at offset {offset}")]
	InvalidBoolean {
		byte: u8,
		offset: usize,
	},

	#[error("unknown type tag {tag:#04x} at offset {offset}")]
	UnknownTypeTag {
		tag: u8,
		offset: usize,
	},

	#[error("invalid utf-8 at offset {offset}: {reason}")]
	InvalidUtf8 {
		offset: usize,
		reason: String,
	},

	#[error("NaN float at offset {offset}")]
	InvalidFloat {
		offset: usize,
	},

	#[error("nesting exceeds {max_depth}")]
	NestingTooDeep {
		max_depth: usize,
	},

	#[error("{count} trailing byte(s)")]
	TrailingBytes {
		count: usize,
	},
}

impl IntoDiagnostic for WireError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			WireError::Truncated {
				field,
				needed,
				remaining,
			} => truncated(field, needed, remaining),
			WireError::InvalidBoolean {
				byte,
				offset,
			} => invalid_boolean(byte, offset),
			WireError::UnknownTypeTag {
				tag,
				offset,
			} => unknown_type_tag(tag, offset),
			WireError::InvalidUtf8 {
				offset,
				reason,
			} => invalid_utf8(offset, reason),
			WireError::InvalidFloat {
				offset,
			} => invalid_float(offset),
			WireError::NestingTooDeep {
				max_depth,
			} => nesting_too_deep(max_depth),
			WireError::TrailingBytes {
				count,
			} => trailing_bytes(count),
		}
	}
}
