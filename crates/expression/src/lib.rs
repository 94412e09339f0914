// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row-level expression tree of the query executor.
//!
//! Expressions are evaluated once per row through [`Expression::evaluate`] and
//! shipped between cluster members through [`encode_expression`] /
//! [`decode_expression`].

use std::{
	any::Any,
	fmt::{Debug, Display},
};

use meridian_type::{Result, Row, Type, Value};
use meridian_wire_format::Writer;

mod binary;
mod codec;
mod column;
mod constant;
mod context;
mod logical;
mod operator;
mod parameter;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use binary::BinaryOperands;
pub use codec::{ExpressionTag, decode_expression, decode_expression_with, encode_expression};
pub use column::ColumnExpression;
pub use constant::ConstantExpression;
pub use context::EvaluationContext;
pub use logical::{AndOrExpression, LogicalKind, and, or};
pub use operator::CallOperator;
pub use parameter::ParameterExpression;

/// A node of the expression tree.
///
/// Implementations are `Send` but not required to be `Sync`: a node may keep
/// per-instance caches that are mutated during evaluation, so one instance is
/// evaluated by one thread at a time. Use [`Expression::clone_expression`] or
/// decode a fresh copy for every parallel partition.
pub trait Expression: Debug + Display + Send + 'static {
	/// Evaluates the expression against a single row.
	fn evaluate(&self, ctx: &EvaluationContext, row: &Row) -> Result<Value>;

	/// The static result type, independent of any particular row.
	fn declared_type(&self) -> Type;

	/// Writes the tag of the expression followed by its payload.
	fn encode(&self, writer: &mut Writer) -> Result<()>;

	/// Deep copy; transient evaluation caches start over.
	fn clone_expression(&self) -> Box<dyn Expression>;

	fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn Expression> {
	fn clone(&self) -> Self {
		self.clone_expression()
	}
}
