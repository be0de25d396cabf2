// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use weave_type::DialectMode;

pub mod edit_distance;
pub mod error;
mod id;
pub mod string;
pub mod text;

pub use edit_distance::EditDistanceAlgorithm;
pub use error::FunctionError;
pub use id::FunctionId;
pub use string::{Argument, StringFunction, TypedValue, evaluate};

/// Per-call settings handed down by the caller's session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalContext {
	pub dialect: DialectMode,
}

impl EvalContext {
	pub fn new(dialect: DialectMode) -> Self {
		Self {
			dialect,
		}
	}
}
