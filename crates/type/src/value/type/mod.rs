// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// All data types an expression can declare
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false. Also the result type of three-valued logic.
	Boolean,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text.
	Utf8,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	/// Stable single byte used on the wire; never reorder.
	pub fn to_u8(&self) -> u8 {
		match self {
			Type::Undefined => 0x00,
			Type::Boolean => 0x01,
			Type::Int4 => 0x02,
			Type::Int8 => 0x03,
			Type::Float8 => 0x04,
			Type::Utf8 => 0x05,
		}
	}

	pub fn from_u8(value: u8) -> Option<Self> {
		match value {
			0x00 => Some(Type::Undefined),
			0x01 => Some(Type::Boolean),
			0x02 => Some(Type::Int4),
			0x03 => Some(Type::Int8),
			0x04 => Some(Type::Float8),
			0x05 => Some(Type::Utf8),
			_ => None,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Undefined => f.write_str("UNDEFINED"),
		}
	}
}
