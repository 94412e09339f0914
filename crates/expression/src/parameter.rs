// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	fmt::{Display, Formatter},
};

use meridian_type::{
	GetType, Result, Row, Type, Value, error::diagnostic::evaluate::parameter_not_bound, return_error,
};
use meridian_wire_format::{Decode, Encode, Reader, Writer};

use crate::{EvaluationContext, Expression, ExpressionTag};

/// Positional query parameter (`$1`, `$2`, ...), resolved from the context.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterExpression {
	index: u32,
	ty: Type,
}

impl ParameterExpression {
	/// `index` is zero based; `$1` is index 0.
	pub fn new(index: u32, ty: Type) -> Self {
		Self {
			index,
			ty,
		}
	}

	pub fn typed<T: GetType>(index: u32) -> Self {
		Self::new(index, T::get_type())
	}
}

impl Expression for ParameterExpression {
	fn evaluate(&self, ctx: &EvaluationContext, _row: &Row) -> Result<Value> {
		match ctx.params.get_positional(self.index as usize) {
			Some(value) => Ok(value.clone()),
			None => return_error!(parameter_not_bound(self.index as usize)),
		}
	}

	fn declared_type(&self) -> Type {
		self.ty
	}

	fn encode(&self, writer: &mut Writer) -> Result<()> {
		ExpressionTag::Parameter.encode(writer)?;
		self.index.encode(writer)?;
		self.ty.encode(writer)
	}

	fn clone_expression(&self) -> Box<dyn Expression> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl Decode for ParameterExpression {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		let index = u32::decode(reader)?;
		let ty = Type::decode(reader)?;
		Ok(Self::new(index, ty))
	}
}

impl Display for ParameterExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "${}", u64::from(self.index) + 1)
	}
}

#[cfg(test)]
mod tests {
	use meridian_type::params;

	use super::*;

	#[test]
	fn test_resolves_positional_parameter() {
		let ctx = EvaluationContext::new(params![false, true]);
		let param = ParameterExpression::new(1, Type::Boolean);

		assert_eq!(param.evaluate(&ctx, &Row::empty()).unwrap(), Value::Boolean(true));
		assert_eq!(param.to_string(), "$2");
	}

	#[test]
	fn test_unbound_parameter() {
		let param = ParameterExpression::new(0, Type::Boolean);
		let err = param.evaluate(&EvaluationContext::testing(), &Row::empty()).unwrap_err();

		assert_eq!(err.code, "EVAL_002");
	}

	#[test]
	fn test_typed_declares_rust_type() {
		assert_eq!(ParameterExpression::typed::<bool>(0).declared_type(), Type::Boolean);
		assert_eq!(ParameterExpression::typed::<i64>(0).declared_type(), Type::Int8);
		assert_eq!(ParameterExpression::typed::<String>(0).declared_type(), Type::Utf8);
	}

	#[test]
	fn test_display_of_highest_index() {
		let decoded = crate::decode_expression(&[0x03, 0xff, 0xff, 0xff, 0xff, 0x01]).unwrap();

		assert_eq!(decoded.to_string(), "$4294967296");
	}
}
