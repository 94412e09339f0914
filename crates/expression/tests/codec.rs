// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use meridian_expression::{
	AndOrExpression, ColumnExpression, ConstantExpression, EvaluationContext, Expression, LogicalKind,
	ParameterExpression, and, decode_expression, decode_expression_with, encode_expression, or,
};
use meridian_type::{Row, Type, Value, params};
use meridian_wire_format::DecodeConfig;

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

fn operands() -> Vec<Box<dyn Expression>> {
	vec![
		Box::new(ConstantExpression::new(true)),
		Box::new(ConstantExpression::new(false)),
		Box::new(ConstantExpression::undefined()),
		Box::new(ColumnExpression::new(0, Type::Boolean)),
		Box::new(ColumnExpression::new(1, Type::Int4)),
		Box::new(ParameterExpression::new(0, Type::Boolean)),
	]
}

fn fixtures() -> Vec<(EvaluationContext, Row)> {
	let mut result = Vec::new();
	for param in [Value::Boolean(true), Value::Boolean(false), Value::Undefined] {
		for first in [Value::Boolean(true), Value::Boolean(false), Value::Undefined] {
			for second in [Value::Int4(7), Value::Undefined] {
				result.push((
					EvaluationContext::new(params![param.clone()]),
					Row::new(vec![first.clone(), second]),
				));
			}
		}
	}
	result
}

/// Outcome reduced to something comparable: the value or the diagnostic code.
fn outcome(expr: &dyn Expression, ctx: &EvaluationContext, row: &Row) -> Result<Value, String> {
	expr.evaluate(ctx, row).map_err(|err| err.code.clone())
}

#[test]
fn test_round_trip_preserves_evaluation() {
	init_tracing();

	for kind in [LogicalKind::And, LogicalKind::Or] {
		for left in operands() {
			for right in operands() {
				let original = AndOrExpression::new(left.clone(), right.clone(), kind);
				let bytes = encode_expression(&original).unwrap();

				for (ctx, row) in fixtures() {
					// fresh decode per fixture, so no verification state is shared
					let decoded = decode_expression(&bytes).unwrap();
					let fresh = AndOrExpression::new(left.clone(), right.clone(), kind);

					assert_eq!(
						outcome(decoded.as_ref(), &ctx, &row),
						outcome(&fresh, &ctx, &row),
						"{} with {:?} / {:?}",
						original,
						ctx.params,
						row
					);
				}

				// one decoded instance across every fixture, against one original instance
				let decoded = decode_expression(&bytes).unwrap();
				for (ctx, row) in fixtures() {
					assert_eq!(outcome(decoded.as_ref(), &ctx, &row), outcome(&original, &ctx, &row));
				}
			}
		}
	}
}

#[test]
fn test_decoded_node_keeps_kind_and_shape() {
	let original = or(
		ColumnExpression::new(2, Type::Boolean),
		and(ConstantExpression::new(true), ConstantExpression::undefined()),
	);

	let decoded = decode_expression(&encode_expression(&original).unwrap()).unwrap();

	assert_eq!(decoded.to_string(), original.to_string());
	assert_eq!(decoded.declared_type(), Type::Boolean);

	let node = decoded.as_any().downcast_ref::<AndOrExpression>().unwrap();
	assert_eq!(node.kind(), LogicalKind::Or);

	let inner = node.right().as_any().downcast_ref::<AndOrExpression>().unwrap();
	assert_eq!(inner.kind(), LogicalKind::And);
}

#[test]
fn test_wire_layout() {
	let expr = and(ColumnExpression::new(0, Type::Boolean), ConstantExpression::new(true));

	assert_eq!(
		encode_expression(&expr).unwrap(),
		vec![
			0x04, // and/or
			0x02, 0x00, 0x00, 0x00, 0x00, 0x01, // col[0] boolean
			0x01, 0x01, 0x01, // constant true
			0x00, // and
		]
	);

	let expr = or(ColumnExpression::new(0, Type::Boolean), ConstantExpression::new(true));
	assert_eq!(encode_expression(&expr).unwrap().last(), Some(&0x01));
}

#[test]
fn test_missing_kind_is_malformed() {
	init_tracing();

	let bytes = encode_expression(&and(ConstantExpression::new(true), ConstantExpression::new(false))).unwrap();
	let err = decode_expression(&bytes[..bytes.len() - 1]).err().unwrap();

	assert!(err.is_malformed_encoding());
	assert_eq!(err.code, "WIRE_001");
}

#[test]
fn test_every_truncation_is_malformed() {
	let expr = or(
		and(ColumnExpression::new(3, Type::Boolean), ParameterExpression::new(1, Type::Boolean)),
		ConstantExpression::new("text"),
	);
	let bytes = encode_expression(&expr).unwrap();

	for len in 0..bytes.len() {
		let err = decode_expression(&bytes[..len]).err().unwrap();
		assert!(err.is_malformed_encoding(), "prefix of {} bytes: {}", len, err);
	}
}

#[test]
fn test_kind_byte_out_of_domain() {
	let mut bytes = encode_expression(&or(ConstantExpression::new(true), ConstantExpression::new(false))).unwrap();
	let last = bytes.len() - 1;
	bytes[last] = 0x02;

	let err = decode_expression(&bytes).err().unwrap();
	assert_eq!(err.code, "WIRE_002");
}

#[test]
fn test_nesting_limit() {
	let mut expr = and(ConstantExpression::new(true), ConstantExpression::new(true));
	for _ in 0..200 {
		expr = and(expr, ConstantExpression::new(true));
	}
	let bytes = encode_expression(&expr).unwrap();

	let err = decode_expression(&bytes).err().unwrap();
	assert_eq!(err.code, "WIRE_005");

	let config = DecodeConfig::new().with_max_depth(512);
	let decoded = decode_expression_with(&bytes, &config).unwrap();
	assert_eq!(decoded.evaluate(&EvaluationContext::testing(), &Row::empty()).unwrap(), Value::Boolean(true));
}

#[test]
fn test_non_encodable_types_fail_on_evaluation_not_decode() {
	let expr = and(ColumnExpression::new(0, Type::Utf8), ConstantExpression::new(true));
	let decoded = decode_expression(&encode_expression(&expr).unwrap()).unwrap();

	let ctx = EvaluationContext::testing();
	assert_eq!(decoded.evaluate(&ctx, &Row::new(vec![Value::Undefined])).unwrap(), Value::Undefined);

	let err = decoded.evaluate(&ctx, &Row::new(vec![Value::utf8("x")])).unwrap_err();
	assert!(err.is_type_mismatch());
	assert_eq!(err.code, "LOGICAL_001");
}
