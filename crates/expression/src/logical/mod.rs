// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	cell::Cell,
	fmt::{Display, Formatter},
};

use meridian_type::{
	Result, Row, Type, Value,
	error::diagnostic::logical::{Side, operand_not_boolean, operand_value_not_boolean},
	return_error,
};
use meridian_wire_format::{Decode, Encode, Reader, Writer};
use tracing::{debug, trace};

use crate::{BinaryOperands, CallOperator, EvaluationContext, Expression, ExpressionTag};

mod kind;

pub use kind::LogicalKind;

/// Binary AND / OR under three-valued logic.
///
/// Evaluation order is fixed: the left operand first, then the right one.
/// An `Undefined` operand makes the whole expression `Undefined`; an
/// `Undefined` left operand skips the right operand entirely. Known values
/// never short-circuit, so `false AND x` still evaluates `x`.
///
/// The declared type of each operand is checked the first time that operand
/// yields a known value, and then never again for this instance. These checks
/// are not part of the encoded form: a decoded or cloned expression checks
/// again.
#[derive(Debug)]
pub struct AndOrExpression {
	operands: BinaryOperands,
	kind: LogicalKind,
	left_verified: Verified,
	right_verified: Verified,
}

/// Evaluation-local flag, set once the operand's declared type passed.
#[derive(Debug, Default)]
struct Verified(Cell<bool>);

impl Verified {
	fn get(&self) -> bool {
		self.0.get()
	}

	fn set(&self) {
		self.0.set(true);
	}
}

impl AndOrExpression {
	pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>, kind: LogicalKind) -> Self {
		Self::from_operands(BinaryOperands::new(left, right), kind)
	}

	fn from_operands(operands: BinaryOperands, kind: LogicalKind) -> Self {
		Self {
			operands,
			kind,
			left_verified: Verified::default(),
			right_verified: Verified::default(),
		}
	}

	pub fn kind(&self) -> LogicalKind {
		self.kind
	}

	pub fn operator(&self) -> CallOperator {
		self.kind.operator()
	}

	pub fn left(&self) -> &dyn Expression {
		self.operands.left.as_ref()
	}

	pub fn right(&self) -> &dyn Expression {
		self.operands.right.as_ref()
	}

	/// `None` stands for `Undefined`.
	fn operand(&self, side: Side, ctx: &EvaluationContext, row: &Row) -> Result<Option<bool>> {
		let (operand, verified) = match side {
			Side::Left => (self.left(), &self.left_verified),
			Side::Right => (self.right(), &self.right_verified),
		};

		let value = operand.evaluate(ctx, row)?;
		if value.is_undefined() {
			return Ok(None);
		}

		if !verified.get() {
			let declared = operand.declared_type();
			if !declared.is_bool() {
				debug!(%side, %declared, operator = %self.kind, "logical operand is not boolean");
				return_error!(operand_not_boolean(side, self.kind.operator().name(), declared));
			}
			trace!(%side, operator = %self.kind, "logical operand verified");
			verified.set();
		}

		let Some(value) = value.as_bool() else {
			let actual = value.get_type();
			debug!(%side, %actual, "logical operand produced a non-boolean value");
			return_error!(operand_value_not_boolean(side, self.kind.operator().name(), actual));
		};

		Ok(Some(value))
	}
}

impl Expression for AndOrExpression {
	fn evaluate(&self, ctx: &EvaluationContext, row: &Row) -> Result<Value> {
		let Some(left) = self.operand(Side::Left, ctx, row)? else {
			return Ok(Value::Undefined);
		};

		let Some(right) = self.operand(Side::Right, ctx, row)? else {
			return Ok(Value::Undefined);
		};

		Ok(Value::Boolean(self.kind.apply(left, right)))
	}

	fn declared_type(&self) -> Type {
		Type::Boolean
	}

	fn encode(&self, writer: &mut Writer) -> Result<()> {
		ExpressionTag::AndOr.encode(writer)?;
		self.operands.encode(writer)?;
		self.kind.encode(writer)
	}

	fn clone_expression(&self) -> Box<dyn Expression> {
		Box::new(Self::from_operands(self.operands.clone(), self.kind))
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl Decode for AndOrExpression {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		let operands = BinaryOperands::decode(reader)?;
		let kind = LogicalKind::decode(reader)?;
		Ok(Self::from_operands(operands, kind))
	}
}

impl Display for AndOrExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "({} {} {})", self.operands.left, self.kind, self.operands.right)
	}
}

pub fn and(left: impl Expression, right: impl Expression) -> AndOrExpression {
	AndOrExpression::new(Box::new(left), Box::new(right), LogicalKind::And)
}

pub fn or(left: impl Expression, right: impl Expression) -> AndOrExpression {
	AndOrExpression::new(Box::new(left), Box::new(right), LogicalKind::Or)
}
