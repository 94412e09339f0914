// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Column index outside of the row
pub fn column_not_found(index: usize, width: usize) -> Diagnostic {
	Diagnostic {
		code: "EVAL_001".to_string(),
		message: format!("Column {} does not exist in a row of {} column(s)", index, width),
		label: Some("unknown column".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Positional parameter was referenced but not bound
pub fn parameter_not_bound(index: usize) -> Diagnostic {
	Diagnostic {
		code: "EVAL_002".to_string(),
		message: format!("Parameter ${} is not bound", index + 1),
		label: Some("unbound parameter".to_string()),
		help: Some("Pass the parameter when executing the query, e.g. params![...]".to_string()),
		notes: vec![],
		cause: None,
	}
}
