// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

pub mod function;
pub mod internal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Attaches the diagnostic that led to this one
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.code, self.message)?;
		if let Some(help) = &self.help {
			write!(f, "\n  help: {}", help)?;
		}
		for note in &self.notes {
			write!(f, "\n  note: {}", note)?;
		}
		if let Some(cause) = &self.cause {
			write!(f, "\ncaused by: {}", cause)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_with_help_and_cause() {
		let diagnostic = function::arity_mismatch(Fragment::internal("LPAD"), 2, 5)
			.with_cause(function::unknown_function("PAD".to_string()));
		let rendered = diagnostic.to_string();
		assert!(rendered.starts_with("FUNCTION_002: Function LPAD expects 2 arguments, got 5"));
		assert!(rendered.contains("help: Provide exactly 2 arguments to function LPAD"));
		assert!(rendered.contains("caused by: FUNCTION_001"));
	}

	#[test]
	fn test_serialize() {
		let diagnostic = function::unknown_function("FOO".to_string());
		let json = serde_json::to_string(&diagnostic).unwrap();
		let back: Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(back, diagnostic);
	}
}
