// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use meridian_type::{Result, error::diagnostic::wire::unknown_expression_tag, return_error};
use meridian_wire_format::{Decode, DecodeConfig, Encode, Reader, Writer};
use tracing::{debug, instrument};

use crate::{AndOrExpression, ColumnExpression, ConstantExpression, Expression, ParameterExpression};

/// Leading byte of every encoded expression; never renumber.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionTag {
	Constant = 0x01,
	Column = 0x02,
	Parameter = 0x03,
	AndOr = 0x04,
}

impl ExpressionTag {
	pub fn from_u8(value: u8) -> Option<Self> {
		match value {
			0x01 => Some(ExpressionTag::Constant),
			0x02 => Some(ExpressionTag::Column),
			0x03 => Some(ExpressionTag::Parameter),
			0x04 => Some(ExpressionTag::AndOr),
			_ => None,
		}
	}
}

impl Encode for ExpressionTag {
	fn encode(&self, writer: &mut Writer) -> Result<()> {
		writer.write_u8(*self as u8);
		Ok(())
	}
}

impl Decode for ExpressionTag {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		let offset = reader.offset();
		let tag = reader.read_u8()?;
		match ExpressionTag::from_u8(tag) {
			Some(tag) => Ok(tag),
			None => {
				debug!(tag, offset, "unknown expression tag");
				return_error!(unknown_expression_tag(tag, offset))
			}
		}
	}
}

/// Reads one tagged expression, counting one level of nesting.
pub(crate) fn decode_nested(reader: &mut Reader<'_>) -> Result<Box<dyn Expression>> {
	reader.enter()?;
	let result = decode_tagged(reader);
	reader.leave();
	result
}

fn decode_tagged(reader: &mut Reader<'_>) -> Result<Box<dyn Expression>> {
	Ok(match ExpressionTag::decode(reader)? {
		ExpressionTag::Constant => Box::new(ConstantExpression::decode(reader)?),
		ExpressionTag::Column => Box::new(ColumnExpression::decode(reader)?),
		ExpressionTag::Parameter => Box::new(ParameterExpression::decode(reader)?),
		ExpressionTag::AndOr => Box::new(AndOrExpression::decode(reader)?),
	})
}

#[instrument(name = "expression::encode", level = "trace", skip(expression))]
pub fn encode_expression(expression: &dyn Expression) -> Result<Vec<u8>> {
	let mut writer = Writer::new();
	Expression::encode(expression, &mut writer)?;
	Ok(writer.into_bytes())
}

/// Decodes a complete expression tree using [`DecodeConfig::default`].
pub fn decode_expression(input: &[u8]) -> Result<Box<dyn Expression>> {
	decode_expression_with(input, &DecodeConfig::default())
}

/// Decodes a complete expression tree.
///
/// Either the whole tree is returned or an error; a failure anywhere in the
/// stream drops every sub-expression decoded so far.
#[instrument(name = "expression::decode", level = "trace", skip(input, config), fields(len = input.len()))]
pub fn decode_expression_with(input: &[u8], config: &DecodeConfig) -> Result<Box<dyn Expression>> {
	let mut reader = Reader::with_config(input, config.clone());
	let expression = decode_nested(&mut reader)?;
	reader.finish()?;
	Ok(expression)
}
