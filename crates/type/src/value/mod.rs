// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod r#type;

pub use r#type::Type;

/// A scalar argument or result, already evaluated by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A UTF-8 encoded text
	Utf8(String),
	/// An 8-byte signed integer
	Int8(i64),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Utf8(_) => Type::Utf8,
			Value::Int8(_) => Type::Int8,
		}
	}

	/// Text view of the value. Integers are rendered in decimal, the way the
	/// surrounding engine converts numbers passed where text is expected.
	pub fn as_utf8(&self) -> Option<String> {
		match self {
			Value::Undefined => None,
			Value::Utf8(s) => Some(s.clone()),
			Value::Int8(v) => Some(v.to_string()),
		}
	}

	/// Integer view of the value. Text holding a decimal integer is parsed;
	/// anything else yields `None`.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Undefined => None,
			Value::Int8(v) => Some(*v),
			Value::Utf8(s) => s.trim().parse::<i64>().ok(),
		}
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		match v {
			Some(v) => v.into(),
			None => Value::Undefined,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Utf8(s) => f.write_str(s),
			Value::Int8(v) => Display::fmt(v, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_type() {
		assert_eq!(Value::undefined().get_type(), Type::Undefined);
		assert_eq!(Value::utf8("a").get_type(), Type::Utf8);
		assert_eq!(Value::int8(1).get_type(), Type::Int8);
	}

	#[test]
	fn test_as_int_coerces_decimal_text() {
		assert_eq!(Value::int8(7).as_int(), Some(7));
		assert_eq!(Value::utf8(" -3 ").as_int(), Some(-3));
		assert_eq!(Value::utf8("abc").as_int(), None);
		assert_eq!(Value::undefined().as_int(), None);
	}

	#[test]
	fn test_as_utf8_renders_integers() {
		assert_eq!(Value::int8(42).as_utf8().as_deref(), Some("42"));
		assert_eq!(Value::utf8("x").as_utf8().as_deref(), Some("x"));
		assert_eq!(Value::undefined().as_utf8(), None);
	}

	#[test]
	fn test_from_option() {
		assert_eq!(Value::from(None::<&str>), Value::Undefined);
		assert_eq!(Value::from(Some(5i64)), Value::Int8(5));
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::undefined().to_string(), "undefined");
		assert_eq!(Value::utf8("hi").to_string(), "hi");
		assert_eq!(Value::int8(-9).to_string(), "-9");
	}
}
