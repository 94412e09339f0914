// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{IntoValue, Value};

/// A single row handed to an expression during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
	values: Vec<Value>,
}

impl Row {
	pub fn new(values: Vec<Value>) -> Self {
		Self {
			values,
		}
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.values.get(index)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl<T: IntoValue> FromIterator<T> for Row {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Row::new(iter.into_iter().map(IntoValue::into_value).collect())
	}
}

impl From<Vec<Value>> for Row {
	fn from(values: Vec<Value>) -> Self {
		Row::new(values)
	}
}
