// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::error::diagnostic::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}

	fn render_into(&self, output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{}  = {}", indent, label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "\n{}help: {}", indent, help);
		}

		for note in &d.notes {
			let _ = writeln!(output, "\n{}note: {}", indent, note);
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "\n{}caused by:", indent);
			self.render_into(output, cause, depth + 1);
		}
	}
}

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		self.render_into(&mut output, diagnostic, 0);
		output
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::diagnostic::wire;

	#[test]
	fn test_render_includes_code_and_help() {
		let out = DefaultRenderer::render_string(&wire::invalid_boolean(0x07, 12));

		assert!(out.starts_with("error[WIRE_002]: Invalid boolean byte 0x07 at offset 12"));
		assert!(out.contains("help: "));
	}

	#[test]
	fn test_render_nested_cause() {
		let d = wire::nesting_too_deep(4).with_cause(wire::truncated("tag", 1, 0));
		let out = DefaultRenderer::render_string(&d);

		assert!(out.contains("caused by:"));
		assert!(out.contains("  error[WIRE_001]"));
	}
}
