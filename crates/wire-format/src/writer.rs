// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use meridian_type::{Result, Type, Value, error::diagnostic::encode::text_too_long, return_error};

/// Append-only binary sink. Multi-byte integers are little endian.
#[derive(Debug, Default)]
pub struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn write_u8(&mut self, value: u8) {
		self.buf.push(value);
	}

	pub fn write_bool(&mut self, value: bool) {
		self.buf.push(if value { 0x01 } else { 0x00 });
	}

	pub fn write_u32(&mut self, value: u32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn write_i32(&mut self, value: i32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn write_i64(&mut self, value: i64) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	pub fn write_f64(&mut self, value: f64) {
		self.buf.extend_from_slice(&value.to_bits().to_le_bytes());
	}

	/// u32 byte length followed by the UTF-8 bytes.
	pub fn write_str(&mut self, value: &str) -> Result<()> {
		self.write_u32(length_prefix(value.len())?);
		self.buf.extend_from_slice(value.as_bytes());
		Ok(())
	}

	pub fn write_type(&mut self, ty: Type) {
		self.write_u8(ty.to_u8());
	}

	/// Type tag followed by the payload; `Undefined` has no payload.
	pub fn write_value(&mut self, value: &Value) -> Result<()> {
		self.write_type(value.get_type());
		match value {
			Value::Undefined => {}
			Value::Boolean(v) => self.write_bool(*v),
			Value::Int4(v) => self.write_i32(*v),
			Value::Int8(v) => self.write_i64(*v),
			Value::Float8(v) => self.write_f64(v.value()),
			Value::Utf8(v) => self.write_str(v)?,
		}
		Ok(())
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.buf
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}
}

fn length_prefix(len: usize) -> Result<u32> {
	match u32::try_from(len) {
		Ok(len) => Ok(len),
		Err(_) => return_error!(text_too_long(len)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bool_bytes() {
		let mut writer = Writer::new();
		writer.write_bool(true);
		writer.write_bool(false);
		assert_eq!(writer.into_bytes(), vec![0x01, 0x00]);
	}

	#[test]
	fn test_value_layout() {
		let mut writer = Writer::new();
		writer.write_value(&Value::Undefined).unwrap();
		writer.write_value(&Value::Boolean(true)).unwrap();
		writer.write_value(&Value::Int4(-2)).unwrap();
		writer.write_value(&Value::utf8("ab")).unwrap();

		assert_eq!(
			writer.into_bytes(),
			vec![
				0x00, // undefined
				0x01, 0x01, // boolean true
				0x02, 0xfe, 0xff, 0xff, 0xff, // int4 -2
				0x05, 0x02, 0x00, 0x00, 0x00, b'a', b'b', // utf8 "ab"
			]
		);
	}

	#[test]
	fn test_length_prefix_fits_u32() {
		assert_eq!(length_prefix(0).unwrap(), 0);
		assert_eq!(length_prefix(u32::MAX as usize).unwrap(), u32::MAX);
	}

	#[test]
	#[cfg(target_pointer_width = "64")]
	fn test_length_prefix_overflow() {
		let err = length_prefix(u32::MAX as usize + 1).unwrap_err();

		assert_eq!(err.code, "ENCODE_002");
		assert!(!err.is_malformed_encoding());
	}
}
