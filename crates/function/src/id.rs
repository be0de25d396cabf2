// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use weave_type::{Result, Type, error::IntoDiagnostic, internal_err, return_error};

use crate::error::FunctionError;

/// The string functions this crate evaluates. The numeric codes are stable and
/// used by callers that keep functions in a dispatch table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionId {
	Locate,
	Insert,
	Replace,
	Lpad,
	Rpad,
	Translate,
	Levenshtein,
}

impl FunctionId {
	pub const ALL: [FunctionId; 7] = [
		FunctionId::Locate,
		FunctionId::Insert,
		FunctionId::Replace,
		FunctionId::Lpad,
		FunctionId::Rpad,
		FunctionId::Translate,
		FunctionId::Levenshtein,
	];

	pub fn name(&self) -> &'static str {
		match self {
			FunctionId::Locate => "LOCATE",
			FunctionId::Insert => "INSERT",
			FunctionId::Replace => "REPLACE",
			FunctionId::Lpad => "LPAD",
			FunctionId::Rpad => "RPAD",
			FunctionId::Translate => "TRANSLATE",
			FunctionId::Levenshtein => "LEVENSHTEIN",
		}
	}

	pub fn code(&self) -> u8 {
		match self {
			FunctionId::Locate => 0,
			FunctionId::Insert => 1,
			FunctionId::Replace => 2,
			FunctionId::Lpad => 3,
			FunctionId::Rpad => 4,
			FunctionId::Translate => 5,
			FunctionId::Levenshtein => 6,
		}
	}

	/// Resolves a dispatch-table code. An unknown code is a bug in the caller,
	/// reported as an internal error.
	pub fn from_code(code: u8) -> Result<Self> {
		match Self::ALL.into_iter().find(|id| id.code() == code) {
			Some(id) => Ok(id),
			None => internal_err!("function={}", code),
		}
	}

	/// Case-insensitive lookup by SQL name
	pub fn from_name(name: &str) -> Result<Self> {
		match Self::ALL.into_iter().find(|id| id.name().eq_ignore_ascii_case(name)) {
			Some(id) => Ok(id),
			None => return_error!(FunctionError::UnknownFunction {
				name: name.to_string()
			}
			.into_diagnostic()),
		}
	}

	/// Statically resolved result type, independent of argument values
	pub fn return_type(&self) -> Type {
		match self {
			FunctionId::Locate | FunctionId::Levenshtein => Type::Int8,
			FunctionId::Insert
			| FunctionId::Replace
			| FunctionId::Lpad
			| FunctionId::Rpad
			| FunctionId::Translate => Type::Utf8,
		}
	}

	/// Accepted argument count as `(min, max)`
	pub fn arity(&self) -> (usize, usize) {
		match self {
			FunctionId::Locate => (2, 3),
			FunctionId::Insert => (4, 4),
			FunctionId::Replace => (2, 3),
			FunctionId::Lpad | FunctionId::Rpad => (2, 3),
			FunctionId::Translate => (3, 3),
			FunctionId::Levenshtein => (2, 3),
		}
	}

	pub(crate) fn check_arity(&self, actual: usize) -> std::result::Result<(), FunctionError> {
		let (min, max) = self.arity();
		if actual < min {
			return Err(FunctionError::ArityMismatch {
				function: *self,
				expected: min,
				actual,
			});
		}
		if actual > max {
			return Err(FunctionError::TooManyArguments {
				function: *self,
				max_args: max,
				actual,
			});
		}
		Ok(())
	}
}

impl Display for FunctionId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
