// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Function is not recognized or does not exist
pub fn unknown_function(name: String) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_001".to_string(),
		message: format!("Unknown function: {}", name),
		fragment: Fragment::internal(name),
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and available functions".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Function called with wrong number of arguments
pub fn arity_mismatch(function: Fragment, expected: usize, actual: usize) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		message: format!("Function {} expects {} arguments, got {}", name, expected, actual),
		fragment: function,
		label: Some("wrong number of arguments".to_string()),
		help: Some(format!("Provide exactly {} arguments to function {}", expected, name)),
		notes: vec![],
		cause: None,
	}
}

/// Too many arguments provided to function
pub fn too_many_arguments(function: Fragment, max_args: usize, actual: usize) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_003".to_string(),
		message: format!("Function {} accepts at most {} arguments, got {}", name, max_args, actual),
		fragment: function,
		label: Some("too many arguments".to_string()),
		help: Some(format!("Provide at most {} arguments to function {}", max_args, name)),
		notes: vec![],
		cause: None,
	}
}

/// Internal function error - should not normally occur
pub fn internal_error(function: Fragment, details: String) -> Diagnostic {
	let name = function.text().to_string();
	Diagnostic {
		code: "FUNCTION_008".to_string(),
		message: format!("Internal error in function {}: {}", name, details),
		fragment: function,
		label: Some("internal error".to_string()),
		help: Some("This is an internal error - please report this issue".to_string()),
		notes: vec![],
		cause: None,
	}
}
