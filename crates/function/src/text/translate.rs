// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use weave_type::DialectMode;

/// Maps every character of `original` found in the find set to the character
/// at the same index of the replace set, deleting it when the replace set is
/// too short.
///
/// Under [`DialectMode::Db2`] the second and third operands swap roles: the
/// third names the characters to find.
pub fn translate(original: &str, find_chars: &str, replace_chars: Option<&str>, dialect: DialectMode) -> String {
	if dialect.is_db2() {
		translate_chars(original, replace_chars.unwrap_or_default(), Some(find_chars))
	} else {
		translate_chars(original, find_chars, replace_chars)
	}
}

fn translate_chars(original: &str, find_chars: &str, replace_chars: Option<&str>) -> String {
	if original.is_empty() || find_chars.is_empty() {
		return original.to_string();
	}

	let find: Vec<char> = find_chars.chars().collect();
	let replace: Vec<char> = replace_chars.map(|r| r.chars().collect()).unwrap_or_default();

	original
		.chars()
		.filter_map(|c| match find.iter().position(|f| *f == c) {
			Some(idx) => replace.get(idx).copied(),
			None => Some(c),
		})
		.collect()
}
