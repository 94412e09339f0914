// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use meridian_type::Result;
use meridian_wire_format::{Decode, Encode, Reader, Writer};

use crate::{Expression, codec::decode_nested};

/// The two children of a binary expression, and their shared encoding:
/// `left` then `right`, each as a tagged sub-expression.
#[derive(Debug, Clone)]
pub struct BinaryOperands {
	pub left: Box<dyn Expression>,
	pub right: Box<dyn Expression>,
}

impl BinaryOperands {
	pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
		Self {
			left,
			right,
		}
	}
}

impl Encode for BinaryOperands {
	fn encode(&self, writer: &mut Writer) -> Result<()> {
		Expression::encode(self.left.as_ref(), writer)?;
		Expression::encode(self.right.as_ref(), writer)
	}
}

impl Decode for BinaryOperands {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		let left = decode_nested(reader)?;
		let right = decode_nested(reader)?;
		Ok(Self::new(left, right))
	}
}
