// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Binary wire format for shipping expression plans between cluster members.
//!
//! The format is positional: fields carry no names and are read back in the
//! order they were written. Booleans occupy one byte (`0x01` = true,
//! `0x00` = false, anything else is rejected), integers are little endian,
//! text is a `u32` byte length followed by UTF-8, and values are prefixed by
//! their [`Type`](meridian_type::Type) tag.

mod codec;
mod config;
pub mod error;
mod reader;
mod writer;

pub use codec::{Decode, Encode, decode_from_slice, encode_to_vec};
pub use config::{DEFAULT_MAX_DEPTH, DecodeConfig};
pub use error::WireError;
pub use reader::Reader;
pub use writer::Writer;
