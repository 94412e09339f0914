// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use meridian_type::{Error, OrderedF64, Result, Type, Value};
use tracing::debug;

use crate::{DecodeConfig, error::WireError};

/// Cursor over an encoded byte stream.
///
/// Every read either consumes exactly the bytes of one field or fails without
/// consuming anything. The reader also tracks how deep the caller has
/// descended into nested structures, bounded by [`DecodeConfig::max_depth`].
#[derive(Debug)]
pub struct Reader<'a> {
	input: &'a [u8],
	offset: usize,
	depth: usize,
	config: DecodeConfig,
}

impl<'a> Reader<'a> {
	pub fn new(input: &'a [u8]) -> Self {
		Self::with_config(input, DecodeConfig::default())
	}

	pub fn with_config(input: &'a [u8], config: DecodeConfig) -> Self {
		Self {
			input,
			offset: 0,
			depth: 0,
			config,
		}
	}

	pub fn offset(&self) -> usize {
		self.offset
	}

	pub fn remaining(&self) -> usize {
		self.input.len() - self.offset
	}

	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	fn fail(&self, err: WireError) -> Error {
		debug!(offset = self.offset, error = %err, "malformed encoding");
		err.into()
	}

	fn take(&mut self, field: &'static str, len: usize) -> Result<&'a [u8]> {
		if self.remaining() < len {
			return Err(self.fail(WireError::Truncated {
				field,
				needed: len,
				remaining: self.remaining(),
			}));
		}
		let bytes = &self.input[self.offset..self.offset + len];
		self.offset += len;
		Ok(bytes)
	}

	fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.take(field, N)?);
		Ok(out)
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.take("u8", 1)?[0])
	}

	/// Only `0x00` and `0x01` are accepted.
	pub fn read_bool(&mut self) -> Result<bool> {
		let offset = self.offset;
		match self.take("bool", 1)?[0] {
			0x00 => Ok(false),
			0x01 => Ok(true),
			byte => {
				self.offset = offset;
				Err(self.fail(WireError::InvalidBoolean {
					byte,
					offset,
				}))
			}
		}
	}

	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.take_array("u32")?))
	}

	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.take_array("i32")?))
	}

	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.take_array("i64")?))
	}

	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_bits(u64::from_le_bytes(self.take_array("f64")?)))
	}

	pub fn read_str(&mut self) -> Result<String> {
		let start = self.offset;
		let len = self.read_u32()? as usize;
		let bytes = match self.take("utf8", len) {
			Ok(bytes) => bytes,
			Err(err) => {
				self.offset = start;
				return Err(err);
			}
		};
		match std::str::from_utf8(bytes) {
			Ok(text) => Ok(text.to_string()),
			Err(err) => {
				self.offset = start;
				Err(self.fail(WireError::InvalidUtf8 {
					offset: start,
					reason: err.to_string(),
				}))
			}
		}
	}

	pub fn read_type(&mut self) -> Result<Type> {
		let offset = self.offset;
		let tag = self.read_u8()?;
		match Type::from_u8(tag) {
			Some(ty) => Ok(ty),
			None => {
				self.offset = offset;
				Err(self.fail(WireError::UnknownTypeTag {
					tag,
					offset,
				}))
			}
		}
	}

	pub fn read_value(&mut self) -> Result<Value> {
		let start = self.offset;
		let result = self.read_value_inner();
		if result.is_err() {
			self.offset = start;
		}
		result
	}

	fn read_value_inner(&mut self) -> Result<Value> {
		Ok(match self.read_type()? {
			Type::Undefined => Value::Undefined,
			Type::Boolean => Value::Boolean(self.read_bool()?),
			Type::Int4 => Value::Int4(self.read_i32()?),
			Type::Int8 => Value::Int8(self.read_i64()?),
			Type::Float8 => {
				let offset = self.offset;
				let raw = self.read_f64()?;
				match OrderedF64::try_from(raw) {
					Ok(v) => Value::Float8(v),
					Err(_) => {
						return Err(self.fail(WireError::InvalidFloat {
							offset,
						}));
					}
				}
			}
			Type::Utf8 => Value::Utf8(self.read_str()?),
		})
	}

	/// Marks entry into one nested level; pair with [`Reader::leave`].
	pub fn enter(&mut self) -> Result<()> {
		if self.depth >= self.config.max_depth {
			return Err(self.fail(WireError::NestingTooDeep {
				max_depth: self.config.max_depth,
			}));
		}
		self.depth += 1;
		Ok(())
	}

	pub fn leave(&mut self) {
		debug_assert!(self.depth > 0, "leave without enter");
		self.depth = self.depth.saturating_sub(1);
	}

	/// Fails on left-over input unless the config allows it.
	pub fn finish(&self) -> Result<()> {
		if !self.config.allow_trailing_bytes && !self.is_empty() {
			return Err(self.fail(WireError::TrailingBytes {
				count: self.remaining(),
			}));
		}
		Ok(())
	}
}
