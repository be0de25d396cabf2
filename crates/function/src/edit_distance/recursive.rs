// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::min3;

/// Plain recursion over the Levenshtein recurrence. Exponential time and
/// `O(len1 + len2)` stack depth; there is no memoization.
pub fn recursive(s1: &[char], s2: &[char]) -> usize {
	if s1.is_empty() || s2.is_empty() {
		return s1.len().max(s2.len());
	}

	let replace = recursive(&s1[1..], &s2[1..]) + usize::from(s1[0] != s2[0]);
	let insert = recursive(s1, &s2[1..]) + 1;
	let delete = recursive(&s1[1..], s2) + 1;

	min3(replace, insert, delete)
}
