// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::thread;

use meridian_expression::{
	ColumnExpression, EvaluationContext, Expression, ParameterExpression, and, decode_expression,
	encode_expression, or,
};
use meridian_type::{Row, Type, Value, params};

fn plan() -> Box<dyn Expression> {
	Box::new(or(
		and(ColumnExpression::new(0, Type::Boolean), ColumnExpression::new(1, Type::Boolean)),
		ParameterExpression::new(0, Type::Boolean),
	))
}

fn rows(partition: usize) -> Vec<Row> {
	let values = [Value::Boolean(true), Value::Boolean(false), Value::Undefined];
	(0..27)
		.map(|i| Row::new(vec![values[(i + partition) % 3].clone(), values[(i / 3 + partition) % 3].clone()]))
		.collect()
}

fn evaluate_all(expr: &dyn Expression, ctx: &EvaluationContext, rows: &[Row]) -> Vec<Value> {
	rows.iter().map(|row| expr.evaluate(ctx, row).unwrap()).collect()
}

#[test]
fn test_cloned_partitions_evaluate_independently() {
	let plan = plan();
	let ctx = EvaluationContext::new(params![false]);

	let expected: Vec<Vec<Value>> = (0..4).map(|p| evaluate_all(plan.as_ref(), &ctx, &rows(p))).collect();

	let handles: Vec<_> = (0..4)
		.map(|partition| {
			let local = plan.clone_expression();
			let ctx = ctx.clone();
			thread::spawn(move || evaluate_all(local.as_ref(), &ctx, &rows(partition)))
		})
		.collect();

	for (partition, handle) in handles.into_iter().enumerate() {
		assert_eq!(handle.join().unwrap(), expected[partition]);
	}
}

#[test]
fn test_decoded_partitions_evaluate_independently() {
	let bytes = encode_expression(plan().as_ref()).unwrap();
	let ctx = EvaluationContext::new(params![true]);

	let handles: Vec<_> = (0..4)
		.map(|partition| {
			let bytes = bytes.clone();
			let ctx = ctx.clone();
			thread::spawn(move || {
				let local = decode_expression(&bytes).unwrap();
				evaluate_all(local.as_ref(), &ctx, &rows(partition))
			})
		})
		.collect();

	for handle in handles {
		let values = handle.join().unwrap();
		// col0 AND col1 OR true: true unless col0 AND col1 is undefined
		for value in values {
			assert!(matches!(value, Value::Boolean(true) | Value::Undefined));
		}
	}
}
