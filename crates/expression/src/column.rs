// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	fmt::{Display, Formatter},
};

use meridian_type::{
	GetType, Result, Row, Type, Value, error::diagnostic::evaluate::column_not_found, return_error,
};
use meridian_wire_format::{Decode, Encode, Reader, Writer};

use crate::{EvaluationContext, Expression, ExpressionTag};

/// Reference to a column of the current row, by position.
///
/// The declared type comes from the plan; the row is trusted to hold either a
/// value of that type or `Undefined`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnExpression {
	index: u32,
	ty: Type,
}

impl ColumnExpression {
	pub fn new(index: u32, ty: Type) -> Self {
		Self {
			index,
			ty,
		}
	}

	/// Declared type taken from a Rust type, e.g. `ColumnExpression::typed::<bool>(0)`.
	pub fn typed<T: GetType>(index: u32) -> Self {
		Self::new(index, T::get_type())
	}
}

impl Expression for ColumnExpression {
	fn evaluate(&self, _ctx: &EvaluationContext, row: &Row) -> Result<Value> {
		match row.get(self.index as usize) {
			Some(value) => Ok(value.clone()),
			None => return_error!(column_not_found(self.index as usize, row.len())),
		}
	}

	fn declared_type(&self) -> Type {
		self.ty
	}

	fn encode(&self, writer: &mut Writer) -> Result<()> {
		ExpressionTag::Column.encode(writer)?;
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

impl Decode for ColumnExpression {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		let index = u32::decode(reader)?;
		let ty = Type::decode(reader)?;
		Ok(Self::new(index, ty))
	}
}

impl Display for ColumnExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "col[{}]", self.index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_reads_value_at_index() {
		let row = Row::from_iter([Value::Int4(1), Value::Boolean(true)]);
		let column = ColumnExpression::new(1, Type::Boolean);

		assert_eq!(column.evaluate(&EvaluationContext::testing(), &row).unwrap(), Value::Boolean(true));
	}

	#[test]
	fn test_missing_column() {
		let column = ColumnExpression::new(3, Type::Boolean);
		let err = column.evaluate(&EvaluationContext::testing(), &Row::empty()).unwrap_err();

		assert_eq!(err.code, "EVAL_001");
		assert!(!err.is_type_mismatch());
	}

	#[test]
	fn test_typed() {
		assert_eq!(ColumnExpression::typed::<bool>(2), ColumnExpression::new(2, Type::Boolean));
		assert_eq!(ColumnExpression::typed::<i32>(0).declared_type(), Type::Int4);
	}
}
