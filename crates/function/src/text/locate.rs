// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// 1-based position of `search` in `s`, or 0 when it does not occur.
///
/// A positive `start` is a 1-based offset to search forward from, 0 searches
/// from the beginning, and a negative `start` searches backwards from
/// `len(s) + start`, returning the last occurrence at or before that point.
pub fn locate(search: &str, s: &str, start: i64) -> i64 {
	let haystack: Vec<char> = s.chars().collect();
	let needle: Vec<char> = search.chars().collect();

	let found = if start < 0 {
		let from = haystack.len() as i64 + start;
		if from < 0 {
			None
		} else {
			rfind_from(&haystack, &needle, from as usize)
		}
	} else {
		let from = if start == 0 {
			0
		} else {
			start - 1
		};
		find_from(&haystack, &needle, usize::try_from(from).unwrap_or(usize::MAX))
	};

	found.map(|idx| idx as i64 + 1).unwrap_or(0)
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
	if from > haystack.len() {
		return needle.is_empty().then_some(haystack.len());
	}
	let last = haystack.len().checked_sub(needle.len())?;
	(from..=last).find(|&idx| haystack[idx..idx + needle.len()] == *needle)
}

fn rfind_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
	let last = haystack.len().checked_sub(needle.len())?;
	(0..=from.min(last)).rev().find(|&idx| haystack[idx..idx + needle.len()] == *needle)
}
