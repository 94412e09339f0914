// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use meridian_type::Result;
use meridian_wire_format::{Decode, Encode, Reader, Writer};

use crate::CallOperator;

/// The boolean operator applied by an [`AndOrExpression`](super::AndOrExpression).
///
/// Encoded as a single boolean: `true` for OR, `false` for AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKind {
	And,
	Or,
}

impl LogicalKind {
	/// Two-valued combination; both operands are already known.
	pub fn apply(&self, left: bool, right: bool) -> bool {
		match self {
			LogicalKind::And => left && right,
			LogicalKind::Or => left || right,
		}
	}

	pub fn is_or(&self) -> bool {
		matches!(self, LogicalKind::Or)
	}

	pub fn operator(&self) -> CallOperator {
		match self {
			LogicalKind::And => CallOperator::And,
			LogicalKind::Or => CallOperator::Or,
		}
	}
}

impl From<bool> for LogicalKind {
	fn from(or: bool) -> Self {
		if or { LogicalKind::Or } else { LogicalKind::And }
	}
}

impl Encode for LogicalKind {
	fn encode(&self, writer: &mut Writer) -> Result<()> {
		writer.write_bool(self.is_or());
		Ok(())
	}
}

impl Decode for LogicalKind {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		Ok(LogicalKind::from(reader.read_bool()?))
	}
}

impl Display for LogicalKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.operator(), f)
	}
}
