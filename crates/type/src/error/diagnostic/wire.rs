// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub const CODE_PREFIX: &str = "WIRE_";

fn malformed(code: &str, message: String, label: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: code.to_string(),
		message,
		label: Some(label.into()),
		help: Some("The encoded expression is corrupted or was produced by an incompatible peer".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Stream ended before a field could be read
pub fn truncated(field: &str, needed: usize, remaining: usize) -> Diagnostic {
	malformed(
		"WIRE_001",
		format!("Unexpected end of input while reading {}: needed {} byte(s), {} remaining", field, needed, remaining),
		"truncated stream",
	)
}

/// Boolean byte outside of the two-value domain
pub fn invalid_boolean(byte: u8, offset: usize) -> Diagnostic {
	malformed(
		"WIRE_002",
		format!("Invalid boolean byte 0x{:02x} at offset {}, expected 0x00 or 0x01", byte, offset),
		"invalid boolean",
	)
}

pub fn unknown_type_tag(tag: u8, offset: usize) -> Diagnostic {
	malformed("WIRE_003", format!("Unknown type tag 0x{:02x} at offset {}", tag, offset), "unknown type")
}

pub fn invalid_utf8(offset: usize, reason: impl Into<String>) -> Diagnostic {
	malformed(
		"WIRE_004",
		format!("Invalid UTF-8 text at offset {}: {}", offset, reason.into()),
		"invalid text",
	)
}

pub fn nesting_too_deep(max_depth: usize) -> Diagnostic {
	let mut diagnostic = malformed(
		"WIRE_005",
		format!("Expression nesting exceeds the configured maximum depth of {}", max_depth),
		"nesting too deep",
	);
	diagnostic.notes.push("The limit can be raised through DecodeConfig::max_depth".to_string());
	diagnostic
}

pub fn trailing_bytes(count: usize) -> Diagnostic {
	malformed(
		"WIRE_006",
		format!("{} unexpected trailing byte(s) after the encoded expression", count),
		"trailing bytes",
	)
}

pub fn unknown_expression_tag(tag: u8, offset: usize) -> Diagnostic {
	malformed("WIRE_007", format!("Unknown expression tag 0x{:02x} at offset {}", tag, offset), "unknown expression")
}

pub fn invalid_float(offset: usize) -> Diagnostic {
	malformed("WIRE_008", format!("NaN float at offset {}", offset), "invalid float")
}
