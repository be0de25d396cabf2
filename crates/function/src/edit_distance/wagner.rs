// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::min3;

/// Wagner-Fischer over the full `(len1 + 1) x (len2 + 1)` matrix.
pub fn wagner(s1: &[char], s2: &[char]) -> usize {
	let mut d = vec![vec![0usize; s2.len() + 1]; s1.len() + 1];

	for (i, row) in d.iter_mut().enumerate() {
		row[0] = i;
	}
	for (j, cell) in d[0].iter_mut().enumerate() {
		*cell = j;
	}

	for i in 1..=s1.len() {
		for j in 1..=s2.len() {
			d[i][j] = if s1[i - 1] == s2[j - 1] {
				d[i - 1][j - 1]
			} else {
				let insertion = d[i][j - 1];
				let deletion = d[i - 1][j];
				let substitution = d[i - 1][j - 1];
				1 + min3(insertion, deletion, substitution)
			};
		}
	}

	d[s1.len()][s2.len()]
}
