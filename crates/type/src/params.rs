// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Value;

/// Query parameters, addressed by position (`$1` is index 0).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Params {
	#[default]
	None,
	Positional(Vec<Value>),
}

impl Params {
	pub fn get_positional(&self, index: usize) -> Option<&Value> {
		match self {
			Params::Positional(values) => values.get(index),
			Params::None => None,
		}
	}
}

impl From<Vec<Value>> for Params {
	fn from(values: Vec<Value>) -> Self {
		Params::Positional(values)
	}
}

#[macro_export]
macro_rules! params {
	() => {
		$crate::Params::None
	};

	[ $($value:expr),+ $(,)? ] => {
		{
			let values = vec![
				$($crate::IntoValue::into_value($value)),*
			];
			$crate::Params::Positional(values)
		}
	};
}
