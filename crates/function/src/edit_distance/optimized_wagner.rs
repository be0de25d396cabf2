// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::min3;

/// Wagner-Fischer rolled into a single row of `len2 + 1` cells.
///
/// `buffer[j]` holds the previous row until it is overwritten left to right;
/// the overwritten cell's old value becomes the next diagonal.
pub fn optimized_wagner(s1: &[char], s2: &[char]) -> usize {
	let mut buffer: Vec<usize> = (0..=s2.len()).collect();

	for (i, c1) in s1.iter().enumerate() {
		// the diagonal of column 0 is the previous row's first cell
		let mut prev_diagonal = buffer[0];
		buffer[0] = i + 1;

		for (j, c2) in s2.iter().enumerate() {
			let cost = usize::from(c1 != c2);
			let prev_above = buffer[j + 1];
			buffer[j + 1] = min3(prev_above + 1, buffer[j] + 1, prev_diagonal + cost);
			prev_diagonal = prev_above;
		}
	}

	buffer[s2.len()]
}
