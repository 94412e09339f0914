// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use meridian_type::Params;

/// Per-query state shared by every row evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
	pub params: Params,
}

impl EvaluationContext {
	pub fn new(params: impl Into<Params>) -> Self {
		Self {
			params: params.into(),
		}
	}

	pub fn testing() -> Self {
		Self {
			params: Params::None,
		}
	}
}
