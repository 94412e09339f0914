// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Identifies the operator applied by a call-style expression, for plan
/// display and rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallOperator {
	And,
	Or,
}

impl CallOperator {
	pub fn name(&self) -> &'static str {
		match self {
			CallOperator::And => "and",
			CallOperator::Or => "or",
		}
	}
}

impl Display for CallOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
