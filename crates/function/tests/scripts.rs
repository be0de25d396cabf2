// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Script driven tests. Each non-empty line not starting with `#` reads
//!
//! ```text
//! [dialect] NAME(arg, ...) => expected
//! ```
//!
//! where operands and the expectation are `'text'` (a doubled quote escapes a
//! quote), integers or `null`, and the dialect prefix is optional. An
//! expectation of `error CODE` asserts a contract violation with that code.

use std::{error::Error, fs, path::Path};

use test_each_file::test_each_path;
use weave_function::{EvalContext, FunctionId, evaluate};
use weave_type::{DialectMode, Value};

test_each_path! { in "crates/function/tests/scripts" as scripts => run_test }

fn run_test(path: &Path) {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();

	let content = fs::read_to_string(path).expect("failed to read script");
	for (idx, line) in content.lines().enumerate() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		if let Err(err) = run_line(line) {
			panic!("{}:{}: {}\n  {}", path.display(), idx + 1, err, line);
		}
	}
}

enum Expected {
	Value(Value),
	Error(String),
}

fn run_line(line: &str) -> Result<(), Box<dyn Error>> {
	let (call, expected) = line.split_once("=>").ok_or("missing '=>'")?;
	let (dialect, call) = parse_dialect(call.trim())?;
	let (name, args) = parse_call(call)?;
	let expected = parse_expected(expected.trim())?;

	let ctx = EvalContext::new(dialect);
	let actual = FunctionId::from_name(&name).and_then(|id| evaluate(id, &args, &ctx));

	match (expected, actual) {
		(Expected::Value(expected), Ok(actual)) if expected == actual => Ok(()),
		(Expected::Error(code), Err(err)) if err.code == code => Ok(()),
		(Expected::Value(expected), actual) => Err(format!("expected {:?}, got {:?}", expected, actual).into()),
		(Expected::Error(code), actual) => Err(format!("expected error {}, got {:?}", code, actual).into()),
	}
}

fn parse_dialect(call: &str) -> Result<(DialectMode, &str), Box<dyn Error>> {
	let Some(rest) = call.strip_prefix('[') else {
		return Ok((DialectMode::Default, call));
	};
	let (dialect, rest) = rest.split_once(']').ok_or("unterminated dialect")?;
	Ok((dialect.trim().parse()?, rest.trim()))
}

fn parse_call(call: &str) -> Result<(String, Vec<Value>), Box<dyn Error>> {
	let open = call.find('(').ok_or("missing '('")?;
	let body = call[open + 1..].strip_suffix(')').ok_or("missing ')'")?;
	let name = call[..open].trim().to_string();

	let mut args = Vec::new();
	let mut rest = body.trim();
	while !rest.is_empty() {
		let (value, tail) = parse_literal(rest)?;
		args.push(value);
		rest = tail.trim_start();
		if let Some(tail) = rest.strip_prefix(',') {
			rest = tail.trim_start();
		} else if !rest.is_empty() {
			return Err(format!("unexpected input: {}", rest).into());
		}
	}
	Ok((name, args))
}

fn parse_expected(expected: &str) -> Result<Expected, Box<dyn Error>> {
	if let Some(code) = expected.strip_prefix("error") {
		return Ok(Expected::Error(code.trim().to_string()));
	}
	let (value, rest) = parse_literal(expected)?;
	if !rest.trim().is_empty() {
		return Err(format!("trailing input after expectation: {}", rest).into());
	}
	Ok(Expected::Value(value))
}

/// Parses one literal from the front of `input`, returning the rest
fn parse_literal(input: &str) -> Result<(Value, &str), Box<dyn Error>> {
	if let Some(mut rest) = input.strip_prefix('\'') {
		let mut text = String::new();
		loop {
			let end = rest.find('\'').ok_or("unterminated text literal")?;
			text.push_str(&rest[..end]);
			rest = &rest[end + 1..];
			match rest.strip_prefix('\'') {
				Some(tail) => {
					text.push('\'');
					rest = tail;
				}
				None => return Ok((Value::Utf8(text), rest)),
			}
		}
	}

	let end = input.find([',', ' ']).unwrap_or(input.len());
	let (token, rest) = input.split_at(end);
	if token.eq_ignore_ascii_case("null") {
		return Ok((Value::Undefined, rest));
	}
	Ok((Value::Int8(token.parse()?), rest))
}
