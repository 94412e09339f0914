// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

pub mod encode;
pub mod evaluate;
pub mod logical;
pub mod render;
pub mod wire;

/// A structured, user-facing description of a failure.
///
/// Every error surfaced by the engine carries exactly one diagnostic. The
/// `code` is stable and grouped by subsystem (`LOGICAL_*`, `WIRE_*`,
/// `ENCODE_*`, `EVAL_*`), so callers can classify errors without parsing messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_diagnostic_survives_json() {
		let diagnostic = wire::truncated("bool", 1, 0).with_cause(logical::operand_not_boolean(
			crate::error::diagnostic::logical::Side::Left,
			"and",
			crate::Type::Int4,
		));

		let json = serde_json::to_string(&diagnostic).unwrap();
		let back: Diagnostic = serde_json::from_str(&json).unwrap();

		assert_eq!(back, diagnostic);
		assert_eq!(back.cause.unwrap().code, "LOGICAL_001");
	}
}
