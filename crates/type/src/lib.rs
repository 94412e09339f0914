// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
mod params;
mod row;
pub mod value;

pub use error::{
	Error,
	diagnostic::{Diagnostic, IntoDiagnostic},
};
pub use params::Params;
pub use row::Row;
pub use value::{GetType, IntoValue, OrderedF64, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
