//! Regex leaf predicate (§4.3).

use crate::err::Error;
use crate::path::FieldRef;
use crate::predicate::{LeafPredicate, ValueTest};
use crate::value::Value;
use regex::{Regex as CompiledRegex, RegexBuilder};

/// Compiles `pattern`/`flags` into a `regex::Regex`, rejecting embedded
/// NULs and unsupported flags up front (§4.3, §8.1 "Regex NUL safety").
/// Shared between `RegexMatch` and `In`'s regex alternatives so both own
/// an identically-behaving compiled matcher (§5 "Predicates own their
/// compiled regexes").
pub(crate) fn compile_pattern(pattern: &str, flags: &str) -> Result<CompiledRegex, Error> {
	if pattern.contains('\0') || flags.contains('\0') {
		return Err(Error::bad_value("regex pattern/flags must not contain an embedded NUL"));
	}
	let mut builder = RegexBuilder::new(pattern);
	for f in flags.chars() {
		match f {
			'i' => {
				builder.case_insensitive(true);
			}
			'm' => {
				builder.multi_line(true);
			}
			's' => {
				builder.dot_matches_new_line(true);
			}
			'x' => {
				builder.ignore_whitespace(true);
			}
			other => return Err(Error::bad_value(format!("unsupported regex flag '{other}'"))),
		}
	}
	builder.build().map_err(|e| Error::RegexCompile {
		pattern: pattern.to_owned(),
		flags: flags.to_owned(),
		message: e.to_string(),
	})
}

/// Matches a string (partial match, over its full byte range) or an exact
/// literal-regex value (§4.3).
pub struct RegexMatch {
	path: FieldRef,
	pattern: String,
	flags: String,
	compiled: CompiledRegex,
}

impl RegexMatch {
	pub fn new(path: FieldRef, pattern: impl Into<String>, flags: impl Into<String>) -> Result<Self, Error> {
		let pattern = pattern.into();
		let flags = flags.into();
		let compiled = compile_pattern(&pattern, &flags)?;
		tracing::debug!(pattern = %pattern, flags = %flags, "compiled regex predicate");
		Ok(Self {
			path,
			pattern,
			flags,
			compiled,
		})
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn flags(&self) -> &str {
		&self.flags
	}

	pub fn debug_string(&self) -> String {
		format!("{} =~ /{}/{}", self.path, self.pattern, self.flags)
	}
}

impl ValueTest for RegexMatch {
	fn matches_single_value(&self, value: &Value) -> bool {
		match value {
			Value::String(s) | Value::Symbol(s) => self.compiled.is_match(s),
			Value::Regex(r) => r.pattern == self.pattern && r.flags == self.flags,
			_ => false,
		}
	}
}

impl LeafPredicate for RegexMatch {
	fn path(&self) -> &FieldRef {
		&self.path
	}
}
