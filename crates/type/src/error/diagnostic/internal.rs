// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Creates a detailed internal error diagnostic with source location and
/// context
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	function: &str,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	let error_id = format!("ERR-{}:{}", file.rsplit('/').next().unwrap_or(file).replace(".rs", ""), line);

	let help_message = format!(
		"This is an internal error that should never occur in normal operation.\n\
		 Error ID: {}\n\
		 Location: {}:{}:{}\n\
		 Function: {}\n\
		 Module: {}\n\
		 Version: {}",
		error_id,
		file,
		line,
		column,
		function,
		module_path,
		env!("CARGO_PKG_VERSION"),
	);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error [{}]: {}", error_id, reason),
		fragment: Fragment::None,
		label: Some(format!("Internal invariant violated at {}:{}:{}", file, line, column)),
		help: Some(help_message),
		notes: vec![
			format!("Error occurred in function: {}", function),
			"This error indicates a bug in the caller's internal dispatch table.".to_string(),
		],
		cause: None,
	}
}
