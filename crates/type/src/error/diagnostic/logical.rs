// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::{Type, error::diagnostic::Diagnostic};

pub const CODE_PREFIX: &str = "LOGICAL_";

/// Which operand of a binary connective a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	Left,
	Right,
}

impl Display for Side {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Side::Left => f.write_str("left"),
			Side::Right => f.write_str("right"),
		}
	}
}

/// The operand's declared type is not boolean
pub fn operand_not_boolean(side: Side, operator: &str, declared: Type) -> Diagnostic {
	let code = match side {
		Side::Left => "LOGICAL_001",
		Side::Right => "LOGICAL_002",
	};

	Diagnostic {
		code: code.to_string(),
		message: format!(
			"Cannot apply {} operator: {} operand is of type {}, expected {}",
			operator.to_uppercase(),
			side,
			declared,
			Type::Boolean
		),
		label: Some(format!("{} operand is not boolean", side)),
		help: Some(
			"Logical connectives only accept boolean operands. Use a comparison such as `value != 0` to derive a boolean"
				.to_string(),
		),
		notes: vec![format!("{} combines boolean values under three-valued logic", operator.to_uppercase())],
		cause: None,
	}
}

/// The operand claims to be boolean but produced a value of another type
pub fn operand_value_not_boolean(side: Side, operator: &str, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "LOGICAL_003".to_string(),
		message: format!(
			"Cannot apply {} operator: {} operand evaluated to a value of type {}",
			operator.to_uppercase(),
			side,
			actual
		),
		label: Some(format!("{} operand produced a non-boolean value", side)),
		help: None,
		notes: vec![format!("the {} operand declares type {}", side, Type::Boolean)],
		cause: None,
	}
}
