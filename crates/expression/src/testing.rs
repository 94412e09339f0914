// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Scriptable expressions for exercising evaluation order in tests.

use std::{
	any::Any,
	fmt::{Display, Formatter},
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use meridian_type::{
	Diagnostic, Result, Row, Type, Value, error::diagnostic::encode::not_encodable, return_error,
};
use meridian_wire_format::Writer;

use crate::{EvaluationContext, Expression};

/// Shared call counter that stays readable after the probe was moved into a tree.
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
	pub fn get(&self) -> usize {
		self.0.load(Ordering::SeqCst)
	}

	fn next(&self) -> usize {
		self.0.fetch_add(1, Ordering::SeqCst)
	}
}

#[derive(Debug, Clone)]
enum Outcome {
	Value(Value),
	Fail,
}

/// Returns scripted outcomes, one per evaluation; the last one repeats.
#[derive(Debug, Clone)]
pub struct ProbeExpression {
	declared: Type,
	outcomes: Vec<Outcome>,
	calls: Counter,
	declared_type_calls: Counter,
}

pub fn probe_failure() -> Diagnostic {
	Diagnostic {
		code: "PROBE_001".to_string(),
		message: "probe evaluation failed".to_string(),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

impl ProbeExpression {
	fn with_outcomes(declared: Type, outcomes: Vec<Outcome>) -> Self {
		Self {
			declared,
			outcomes,
			calls: Counter::default(),
			declared_type_calls: Counter::default(),
		}
	}

	pub fn returning(declared: Type, value: Value) -> Self {
		Self::with_outcomes(declared, vec![Outcome::Value(value)])
	}

	pub fn sequence(declared: Type, values: Vec<Value>) -> Self {
		Self::with_outcomes(declared, values.into_iter().map(Outcome::Value).collect())
	}

	/// Fails with `PROBE_001` on every evaluation.
	pub fn failing(declared: Type) -> Self {
		Self::with_outcomes(declared, vec![Outcome::Fail])
	}

	pub fn calls(&self) -> Counter {
		self.calls.clone()
	}

	pub fn declared_type_calls(&self) -> Counter {
		self.declared_type_calls.clone()
	}
}

impl Expression for ProbeExpression {
	fn evaluate(&self, _ctx: &EvaluationContext, _row: &Row) -> Result<Value> {
		let call = self.calls.next();
		let outcome = self.outcomes.get(call).or_else(|| self.outcomes.last());
		match outcome {
			Some(Outcome::Value(value)) => Ok(value.clone()),
			Some(Outcome::Fail) => return_error!(probe_failure()),
			None => Ok(Value::Undefined),
		}
	}

	fn declared_type(&self) -> Type {
		self.declared_type_calls.next();
		self.declared
	}

	fn encode(&self, _writer: &mut Writer) -> Result<()> {
		return_error!(not_encodable("probe"))
	}

	fn clone_expression(&self) -> Box<dyn Expression> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl Display for ProbeExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("probe")
	}
}
