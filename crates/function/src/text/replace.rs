// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use weave_type::DialectMode;

/// Replaces every non-overlapping occurrence of `pattern` in `s`.
///
/// A NULL `replacement` makes the whole result NULL, except under
/// [`DialectMode::Oracle`] where it deletes the matches instead. An empty
/// pattern matches nothing.
pub fn replace(s: &str, pattern: &str, replacement: Option<&str>, dialect: DialectMode) -> Option<String> {
	let replacement = match replacement {
		Some(replacement) => replacement,
		None if dialect.is_oracle() => "",
		None => return None,
	};

	if pattern.is_empty() {
		return Some(s.to_string());
	}

	Some(s.replace(pattern, replacement))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_replace_all_occurrences() {
		assert_eq!(replace("abcabc", "a", Some("X"), DialectMode::Default).as_deref(), Some("XbcXbc"));
		assert_eq!(replace("aaaa", "aa", Some("b"), DialectMode::Default).as_deref(), Some("bb"));
		assert_eq!(replace("aaa", "aa", Some("b"), DialectMode::Default).as_deref(), Some("ba"));
	}

	#[test]
	fn test_replace_with_empty_deletes() {
		assert_eq!(replace("abcabc", "b", Some(""), DialectMode::Default).as_deref(), Some("acac"));
	}

	#[test]
	fn test_null_replacement() {
		assert_eq!(replace("abc", "a", None, DialectMode::Default), None);
		assert_eq!(replace("abc", "a", None, DialectMode::Db2), None);
		assert_eq!(replace("abc", "a", None, DialectMode::Oracle).as_deref(), Some("bc"));
	}

	#[test]
	fn test_empty_pattern_is_noop() {
		assert_eq!(replace("abc", "", Some("X"), DialectMode::Default).as_deref(), Some("abc"));
	}

	#[test]
	fn test_pattern_absent() {
		assert_eq!(replace("abc", "z", Some("X"), DialectMode::Default).as_deref(), Some("abc"));
	}
}
