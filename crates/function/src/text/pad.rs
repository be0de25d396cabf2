// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadSide {
	Left,
	Right,
}

/// Pads or truncates `s` to exactly `target` characters.
///
/// Truncation always keeps the leading characters, whichever side pads. The
/// pad unit defaults to a single space and is cycled when it holds more than
/// one character. An empty pad unit adds nothing, leaving the result shorter
/// than `target`. Targets are 32-bit; wider operands are rejected by the caller.
pub fn pad(s: &str, target: i32, padding: Option<&str>, side: PadSide) -> String {
	let target = target.max(0) as usize;
	let len = s.chars().count();

	if target <= len {
		return s.chars().take(target).collect();
	}

	let unit = padding.unwrap_or(" ");
	if unit.is_empty() {
		return s.to_string();
	}

	let fill = unit.chars().cycle().take(target - len);
	let mut result = String::new();
	match side {
		PadSide::Left => {
			result.extend(fill);
			result.push_str(s);
		}
		PadSide::Right => {
			result.push_str(s);
			result.extend(fill);
		}
	}
	result
}
