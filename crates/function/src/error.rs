// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use weave_type::{
	Error,
	error::{Diagnostic, IntoDiagnostic, diagnostic::function},
	fragment::Fragment,
};

use crate::FunctionId;

/// Contract violations raised while binding or dispatching a string function.
/// Data-dependent edge cases never end up here; they evaluate to undefined.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
	#[error("Unknown function: {name}")]
	UnknownFunction {
		name: String,
	},

	#[error("Function {function} expects {expected} arguments, got {actual}")]
	ArityMismatch {
		function: FunctionId,
		expected: usize,
		actual: usize,
	},

	#[error("Function {function} accepts at most {max_args} arguments, got {actual}")]
	TooManyArguments {
		function: FunctionId,
		max_args: usize,
		actual: usize,
	},

	#[error("Internal error in function {function}: {details}")]
	Internal {
		function: FunctionId,
		details: String,
	},
}

impl IntoDiagnostic for FunctionError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			FunctionError::UnknownFunction {
				name,
			} => function::unknown_function(name),
			FunctionError::ArityMismatch {
				function: id,
				expected,
				actual,
			} => function::arity_mismatch(Fragment::internal(id.name()), expected, actual),
			FunctionError::TooManyArguments {
				function: id,
				max_args,
				actual,
			} => function::too_many_arguments(Fragment::internal(id.name()), max_args, actual),
			FunctionError::Internal {
				function: id,
				details,
			} => function::internal_error(Fragment::internal(id.name()), details),
		}
	}
}

impl From<FunctionError> for Error {
	fn from(err: FunctionError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_message_matches_diagnostic() {
		let err = FunctionError::ArityMismatch {
			function: FunctionId::Insert,
			expected: 4,
			actual: 2,
		};
		let message = err.to_string();
		let diagnostic = err.into_diagnostic();
		assert_eq!(diagnostic.code, "FUNCTION_002");
		assert_eq!(diagnostic.message, message);
		assert_eq!(diagnostic.fragment.text(), "INSERT");
	}

	#[test]
	fn test_too_many_arguments() {
		let err: Error = FunctionError::TooManyArguments {
			function: FunctionId::Translate,
			max_args: 3,
			actual: 5,
		}
		.into();
		let diagnostic = err.diagnostic();
		assert_eq!(diagnostic.code, "FUNCTION_003");
		assert_eq!(diagnostic.message, "Function TRANSLATE accepts at most 3 arguments, got 5");
	}

	#[test]
	fn test_internal() {
		let err: Error = FunctionError::Internal {
			function: FunctionId::Levenshtein,
			details: "bad".to_string(),
		}
		.into();
		assert_eq!(err.code, "FUNCTION_008");
		assert_eq!(err.message, "Internal error in function LEVENSHTEIN: bad");
	}
}
