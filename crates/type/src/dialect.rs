// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

/// SQL vendor compatibility mode selected by the caller's session.
///
/// Only a handful of functions look at it: REPLACE treats a NULL replacement
/// as empty text under [`DialectMode::Oracle`], and TRANSLATE swaps its find
/// and replace sets under [`DialectMode::Db2`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectMode {
	#[default]
	Default,
	Oracle,
	Db2,
}

impl DialectMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			DialectMode::Default => "default",
			DialectMode::Oracle => "oracle",
			DialectMode::Db2 => "db2",
		}
	}

	pub fn is_oracle(&self) -> bool {
		matches!(self, DialectMode::Oracle)
	}

	pub fn is_db2(&self) -> bool {
		matches!(self, DialectMode::Db2)
	}
}

impl Display for DialectMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialect(pub String);

impl Display for UnknownDialect {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "unknown dialect mode: {}", self.0)
	}
}

impl std::error::Error for UnknownDialect {}

impl FromStr for DialectMode {
	type Err = UnknownDialect;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"default" | "regular" => Ok(DialectMode::Default),
			"oracle" => Ok(DialectMode::Oracle),
			"db2" => Ok(DialectMode::Db2),
			_ => Err(UnknownDialect(s.to_string())),
		}
	}
}
