// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// An `f64` that is never NaN, which makes it totally ordered.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct OrderedF64(f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("NaN is not a valid ordered float")]
pub struct NanError;

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = NanError;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if value.is_nan() {
			return Err(NanError);
		}
		// canonical zero, so that 0.0 and -0.0 hash alike
		if value == 0.0 {
			return Ok(OrderedF64(0.0));
		}
		Ok(OrderedF64(value))
	}
}

impl From<OrderedF64> for f64 {
	fn from(value: OrderedF64) -> Self {
		value.0
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nan_rejected() {
		assert_eq!(OrderedF64::try_from(f64::NAN), Err(NanError));
	}

	#[test]
	fn test_negative_zero_is_zero() {
		let neg = OrderedF64::try_from(-0.0).unwrap();
		let pos = OrderedF64::try_from(0.0).unwrap();
		assert_eq!(neg, pos);
		assert_eq!(neg.value().to_bits(), pos.value().to_bits());
	}
}
