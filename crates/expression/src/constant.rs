// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	fmt::{Display, Formatter},
};

use meridian_type::{IntoValue, Result, Row, Type, Value};
use meridian_wire_format::{Decode, Encode, Reader, Writer};

use crate::{EvaluationContext, Expression, ExpressionTag};

/// A literal. Its declared type is the type of the value it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpression {
	value: Value,
}

impl ConstantExpression {
	pub fn new(value: impl IntoValue) -> Self {
		Self {
			value: value.into_value(),
		}
	}

	pub fn undefined() -> Self {
		Self::new(Value::Undefined)
	}

	pub fn value(&self) -> &Value {
		&self.value
	}
}

impl Expression for ConstantExpression {
	fn evaluate(&self, _ctx: &EvaluationContext, _row: &Row) -> Result<Value> {
		Ok(self.value.clone())
	}

	fn declared_type(&self) -> Type {
		self.value.get_type()
	}

	fn encode(&self, writer: &mut Writer) -> Result<()> {
		ExpressionTag::Constant.encode(writer)?;
		self.value.encode(writer)
	}

	fn clone_expression(&self) -> Box<dyn Expression> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl Decode for ConstantExpression {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		Ok(Self {
			value: Value::decode(reader)?,
		})
	}
}

impl Display for ConstantExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.value, f)
	}
}
