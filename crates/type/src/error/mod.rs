// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, IntoDiagnostic, render::DefaultRenderer};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	/// A non-boolean operand reached a logical connective.
	pub fn is_type_mismatch(&self) -> bool {
		self.0.code.starts_with(diagnostic::logical::CODE_PREFIX)
	}

	/// The byte stream handed to a decoder was truncated or corrupted.
	pub fn is_malformed_encoding(&self) -> bool {
		self.0.code.starts_with(diagnostic::wire::CODE_PREFIX)
	}
}

impl std::error::Error for Error {}

impl<T: IntoDiagnostic> From<T> for Error {
	fn from(value: T) -> Self {
		Error(value.into_diagnostic())
	}
}
