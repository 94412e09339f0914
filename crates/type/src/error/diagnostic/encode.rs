// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub const CODE_PREFIX: &str = "ENCODE_";

/// An expression that has no wire representation was handed to an encoder
pub fn not_encodable(expression: &str) -> Diagnostic {
	Diagnostic {
		code: "ENCODE_001".to_string(),
		message: format!("Expression `{}` cannot be encoded", expression),
		label: Some("not encodable".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn text_too_long(len: usize) -> Diagnostic {
	Diagnostic {
		code: "ENCODE_002".to_string(),
		message: format!("Text of {} bytes does not fit a u32 length prefix", len),
		label: Some("text too long".to_string()),
		help: None,
		notes: vec![format!("At most {} bytes can be encoded", u32::MAX)],
		cause: None,
	}
}
