// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use meridian_type::{Result, Type, Value};

use crate::{DecodeConfig, Reader, Writer};

pub trait Encode {
	fn encode(&self, writer: &mut Writer) -> Result<()>;
}

pub trait Decode: Sized {
	fn decode(reader: &mut Reader<'_>) -> Result<Self>;
}

impl Encode for bool {
	fn encode(&self, writer: &mut Writer) -> Result<()> {
		writer.write_bool(*self);
		Ok(())
	}
}

impl Decode for bool {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		reader.read_bool()
	}
}

impl Encode for u32 {
	fn encode(&self, writer: &mut Writer) -> Result<()> {
		writer.write_u32(*self);
		Ok(())
	}
}

impl Decode for u32 {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		reader.read_u32()
	}
}

impl Encode for String {
	fn encode(&self, writer: &mut Writer) -> Result<()> {
		writer.write_str(self)
	}
}

impl Decode for String {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		reader.read_str()
	}
}

impl Encode for Type {
	fn encode(&self, writer: &mut Writer) -> Result<()> {
		writer.write_type(*self);
		Ok(())
	}
}

impl Decode for Type {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		reader.read_type()
	}
}

impl Encode for Value {
	fn encode(&self, writer: &mut Writer) -> Result<()> {
		writer.write_value(self)
	}
}

impl Decode for Value {
	fn decode(reader: &mut Reader<'_>) -> Result<Self> {
		reader.read_value()
	}
}

pub fn encode_to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
	let mut writer = Writer::new();
	value.encode(&mut writer)?;
	Ok(writer.into_bytes())
}

/// Decodes exactly one `T`, subject to the limits in `config`.
pub fn decode_from_slice<T: Decode>(input: &[u8], config: &DecodeConfig) -> Result<T> {
	let mut reader = Reader::with_config(input, config.clone());
	let value = T::decode(&mut reader)?;
	reader.finish()?;
	Ok(value)
}
