// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument, warn};
use weave_type::{Result, Type, Value};

use crate::{
	EvalContext, FunctionError, FunctionId,
	edit_distance::EditDistanceAlgorithm,
	text::{self, PadSide},
};

/// An operand bound to a string function. Plain values are constants; callers
/// with deferred expressions implement this for their own nodes.
pub trait Argument: Send + Sync {
	fn evaluate(&self, ctx: &EvalContext) -> Value;

	fn is_constant(&self) -> bool {
		false
	}
}

impl Argument for Value {
	fn evaluate(&self, _ctx: &EvalContext) -> Value {
		self.clone()
	}

	fn is_constant(&self) -> bool {
		true
	}
}

/// A folded constant together with its static type, so that an undefined
/// result still carries the function's declared type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedValue {
	pub value: Value,
	pub ty: Type,
}

/// A string function bound to its operands
pub struct StringFunction {
	id: FunctionId,
	args: Vec<Box<dyn Argument>>,
}

impl StringFunction {
	pub fn new(id: FunctionId, args: Vec<Box<dyn Argument>>) -> Result<Self> {
		if let Err(err) = id.check_arity(args.len()) {
			warn!(function = %id, args = args.len(), "string function bound with wrong arity");
			return Err(err.into());
		}
		Ok(Self {
			id,
			args,
		})
	}

	/// Binds a function to constant operands
	pub fn with_values(id: FunctionId, values: Vec<Value>) -> Result<Self> {
		Self::new(id, values.into_iter().map(|v| Box::new(v) as Box<dyn Argument>).collect())
	}

	pub fn id(&self) -> FunctionId {
		self.id
	}

	pub fn name(&self) -> &'static str {
		self.id.name()
	}

	pub fn return_type(&self) -> Type {
		self.id.return_type()
	}

	pub fn evaluate(&self, ctx: &EvalContext) -> Result<Value> {
		let values: Vec<Value> = self.args.iter().map(|arg| arg.evaluate(ctx)).collect();
		evaluate(self.id, &values, ctx)
	}

	/// Evaluates the function ahead of time when every operand is constant
	pub fn optimize(&self, ctx: &EvalContext) -> Result<Option<TypedValue>> {
		if !self.args.iter().all(|arg| arg.is_constant()) {
			return Ok(None);
		}
		let value = self.evaluate(ctx)?;
		Ok(Some(TypedValue {
			value,
			ty: self.return_type(),
		}))
	}
}

/// Evaluates `id` over already evaluated operands.
///
/// Only a wrong argument count is an error. NULL operands, unknown algorithm
/// names and out of range positions all resolve to a value.
#[instrument(name = "function::string::evaluate", level = "trace", skip_all, fields(function = %id))]
pub fn evaluate(id: FunctionId, args: &[Value], ctx: &EvalContext) -> Result<Value> {
	if let Err(err) = id.check_arity(args.len()) {
		warn!(function = %id, args = args.len(), "string function called with wrong arity");
		return Err(err.into());
	}

	let result = match id {
		FunctionId::Locate => eval_locate(args),
		FunctionId::Insert => eval_insert(args),
		FunctionId::Replace => eval_replace(args, ctx),
		FunctionId::Lpad => eval_pad(args, PadSide::Left),
		FunctionId::Rpad => eval_pad(args, PadSide::Right),
		FunctionId::Translate => eval_translate(args, ctx),
		FunctionId::Levenshtein => eval_levenshtein(args)?,
	};

	Ok(result.unwrap_or(Value::Undefined))
}

/// Optional trailing operand: `None` when omitted, `Some(None)` when NULL
fn optional_text(args: &[Value], idx: usize) -> Option<Option<String>> {
	args.get(idx).map(Value::as_utf8)
}

fn eval_locate(args: &[Value]) -> Option<Value> {
	let search = args[0].as_utf8()?;
	let s = args[1].as_utf8()?;
	let start = match args.get(2) {
		Some(start) => start.as_int()?,
		None => 1,
	};
	Some(Value::int8(text::locate(&search, &s, start)))
}

fn eval_insert(args: &[Value]) -> Option<Value> {
	let start = args[1].as_int()?;
	let length = args[2].as_int()?;
	let s1 = args[0].as_utf8();
	let s2 = args[3].as_utf8();
	text::insert(s1.as_deref(), start, length, s2.as_deref()).map(Value::Utf8)
}

fn eval_replace(args: &[Value], ctx: &EvalContext) -> Option<Value> {
	let s = args[0].as_utf8()?;
	let pattern = args[1].as_utf8()?;
	let replacement = optional_text(args, 2).unwrap_or_else(|| Some(String::new()));
	text::replace(&s, &pattern, replacement.as_deref(), ctx.dialect).map(Value::Utf8)
}

fn eval_pad(args: &[Value], side: PadSide) -> Option<Value> {
	let s = args[0].as_utf8()?;
	let target = args[1].as_int()?;
	let target = match i32::try_from(target) {
		Ok(target) => target,
		Err(_) => {
			debug!(target, "pad target does not fit a 32-bit integer");
			return None;
		}
	};
	let padding = match optional_text(args, 2) {
		Some(padding) => Some(padding?),
		None => None,
	};
	Some(Value::Utf8(text::pad(&s, target, padding.as_deref(), side)))
}

fn eval_translate(args: &[Value], ctx: &EvalContext) -> Option<Value> {
	let original = args[0].as_utf8()?;
	let find_chars = args[1].as_utf8()?;
	let replace_chars = args[2].as_utf8()?;
	Some(Value::Utf8(text::translate(&original, &find_chars, Some(&replace_chars), ctx.dialect)))
}

fn eval_levenshtein(args: &[Value]) -> Result<Option<Value>> {
	let algorithm = match args.get(2) {
		None => EditDistanceAlgorithm::default(),
		Some(name) if name.is_undefined() => {
			debug!("edit distance algorithm is undefined");
			return Ok(None);
		}
		Some(name) => {
			let Some(name) = name.as_utf8() else {
				return Ok(None);
			};
			match EditDistanceAlgorithm::from_name(&name) {
				Some(algorithm) => algorithm,
				None => {
					debug!(algorithm = %name, "unknown edit distance algorithm");
					return Ok(None);
				}
			}
		}
	};

	let (Some(s1), Some(s2)) = (args[0].as_utf8(), args[1].as_utf8()) else {
		return Ok(None);
	};
	distance_value(FunctionId::Levenshtein, algorithm.distance(&s1, &s2)).map(Some)
}

/// Widens a character count into an integer value
fn distance_value(id: FunctionId, distance: usize) -> Result<Value> {
	match i64::try_from(distance) {
		Ok(distance) => Ok(Value::int8(distance)),
		Err(_) => Err(FunctionError::Internal {
			function: id,
			details: format!("distance {} does not fit an integer", distance),
		}
		.into()),
	}
}
