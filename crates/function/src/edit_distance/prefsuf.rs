// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::optimized_wagner;

/// Strips the common prefix and suffix, then runs [`optimized_wagner`] on
/// what is left. Common affixes never contribute to the distance.
pub fn prefsuf(s1: &[char], s2: &[char]) -> usize {
	if s1.len() < s2.len() {
		return prefsuf(s2, s1);
	}

	let prefix = mismatch(s1.iter(), s2.iter());
	let (s1, s2) = (&s1[prefix..], &s2[prefix..]);

	let suffix = mismatch(s1.iter().rev(), s2.iter().rev());
	let (s1, s2) = (&s1[..s1.len() - suffix], &s2[..s2.len() - suffix]);

	if s1.is_empty() {
		return s2.len();
	}
	if s2.is_empty() {
		return s1.len();
	}

	optimized_wagner(s1, s2)
}

/// Index of the first position where the two sequences differ, or the
/// length of the shorter one when it is a prefix of the other.
fn mismatch<'a>(a: impl Iterator<Item = &'a char>, b: impl Iterator<Item = &'a char>) -> usize {
	a.zip(b).take_while(|(x, y)| x == y).count()
}
