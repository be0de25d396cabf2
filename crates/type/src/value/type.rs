// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Static result types a string function can resolve to
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// An 8-byte signed integer
	Int8,
	/// A UTF-8 encoded text
	Utf8,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	/// The name used when printing a typed NULL
	pub fn sql_name(&self) -> &'static str {
		match self {
			Type::Int8 => "INTEGER",
			Type::Utf8 => "VARCHAR",
			Type::Undefined => "UNDEFINED",
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.sql_name())
	}
}
