// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Replaces `length` characters of `s1` starting at the 1-based `start` with
/// `s2`.
///
/// A missing `s1` yields `s2` and a missing `s2` leaves `s1` untouched. Out of
/// range positions, non-positive lengths and an empty `s2` are no-ops; a
/// length reaching past the end is clamped to the end of `s1`.
pub fn insert(s1: Option<&str>, start: i64, length: i64, s2: Option<&str>) -> Option<String> {
	let Some(s1) = s1 else {
		return s2.map(str::to_string);
	};
	let Some(s2) = s2 else {
		return Some(s1.to_string());
	};

	let chars: Vec<char> = s1.chars().collect();
	let len1 = chars.len() as i64;
	let start = start.saturating_sub(1);

	if start < 0 || length <= 0 || s2.is_empty() || start > len1 {
		return Some(s1.to_string());
	}

	let length = length.min(len1 - start);
	let (start, end) = (start as usize, (start + length) as usize);

	let mut result = String::with_capacity(s1.len() + s2.len());
	result.extend(&chars[..start]);
	result.push_str(s2);
	result.extend(&chars[end..]);
	Some(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_replace_in_middle() {
		assert_eq!(insert(Some("Hello World"), 7, 5, Some("Apache")).as_deref(), Some("Hello Apache"));
		assert_eq!(insert(Some("abcdef"), 2, 2, Some("XY")).as_deref(), Some("aXYdef"));
	}

	#[test]
	fn test_missing_operands() {
		assert_eq!(insert(None, 1, 1, Some("x")).as_deref(), Some("x"));
		assert_eq!(insert(Some("abc"), 1, 1, None).as_deref(), Some("abc"));
		assert_eq!(insert(None, 1, 1, None), None);
	}

	#[test]
	fn test_no_modification() {
		assert_eq!(insert(Some("abc"), 0, 1, Some("x")).as_deref(), Some("abc"));
		assert_eq!(insert(Some("abc"), 1, 0, Some("x")).as_deref(), Some("abc"));
		assert_eq!(insert(Some("abc"), 1, -4, Some("x")).as_deref(), Some("abc"));
		assert_eq!(insert(Some("abc"), 1, 1, Some("")).as_deref(), Some("abc"));
		assert_eq!(insert(Some("abc"), 5, 1, Some("x")).as_deref(), Some("abc"));
		assert_eq!(insert(Some("abc"), i64::MIN, 1, Some("x")).as_deref(), Some("abc"));
	}

	#[test]
	fn test_start_just_past_end_appends() {
		assert_eq!(insert(Some("abc"), 4, 2, Some("xyz")).as_deref(), Some("abcxyz"));
	}

	#[test]
	fn test_length_clamped_to_end() {
		assert_eq!(insert(Some("abcdef"), 4, 100, Some("X")).as_deref(), Some("abcX"));
		assert_eq!(insert(Some("abcdef"), 4, i64::MAX, Some("X")).as_deref(), Some("abcX"));
	}

	#[test]
	fn test_multibyte() {
		assert_eq!(insert(Some("grüße"), 3, 2, Some("ue")).as_deref(), Some("gruee"));
	}
}
