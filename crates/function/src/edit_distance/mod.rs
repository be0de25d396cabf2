// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Levenshtein distance with four interchangeable algorithms.
//!
//! Every algorithm answers the same question and must agree on every input;
//! they only differ in time and memory profile. `recursive` is the
//! exponential reference variant and is deliberately left unmemoized.

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

mod optimized_wagner;
mod prefsuf;
mod recursive;
mod wagner;

pub use optimized_wagner::optimized_wagner;
pub use prefsuf::prefsuf;
pub use recursive::recursive;
pub use wagner::wagner;

type DistanceFn = fn(&[char], &[char]) -> usize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditDistanceAlgorithm {
	#[default]
	Wagner,
	OptimizedWagner,
	PrefSuf,
	Recursive,
}

impl EditDistanceAlgorithm {
	pub const ALL: [EditDistanceAlgorithm; 4] = [
		EditDistanceAlgorithm::Wagner,
		EditDistanceAlgorithm::OptimizedWagner,
		EditDistanceAlgorithm::PrefSuf,
		EditDistanceAlgorithm::Recursive,
	];

	pub fn name(&self) -> &'static str {
		match self {
			EditDistanceAlgorithm::Wagner => "wagner",
			EditDistanceAlgorithm::OptimizedWagner => "optimized_wagner",
			EditDistanceAlgorithm::PrefSuf => "prefsuf",
			EditDistanceAlgorithm::Recursive => "recursive",
		}
	}

	/// Case-insensitive lookup; `None` for anything outside the fixed set.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
	}

	fn implementation(&self) -> DistanceFn {
		match self {
			EditDistanceAlgorithm::Wagner => wagner,
			EditDistanceAlgorithm::OptimizedWagner => optimized_wagner,
			EditDistanceAlgorithm::PrefSuf => prefsuf,
			EditDistanceAlgorithm::Recursive => recursive,
		}
	}

	/// Edit distance between two texts, measured in characters.
	///
	/// When either side is empty the answer is the other side's length and no
	/// algorithm runs.
	pub fn distance(&self, s1: &str, s2: &str) -> usize {
		let s1: Vec<char> = s1.chars().collect();
		let s2: Vec<char> = s2.chars().collect();
		if s1.is_empty() || s2.is_empty() {
			return s1.len().max(s2.len());
		}
		(self.implementation())(&s1, &s2)
	}
}

impl Display for EditDistanceAlgorithm {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl Display for UnknownAlgorithm {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "unknown edit distance algorithm: {}", self.0)
	}
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for EditDistanceAlgorithm {
	type Err = UnknownAlgorithm;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_name(s).ok_or_else(|| UnknownAlgorithm(s.to_string()))
	}
}

pub(crate) fn min3(x: usize, y: usize, z: usize) -> usize {
	x.min(y).min(z)
}
