//! `$in` (§4.6): a sorted-and-deduplicated equality vector plus a list of
//! regex alternatives, rebuilt whenever the collation changes.

use crate::collator::{same_collation, Collator};
use crate::err::Error;
use crate::path::FieldRef;
use crate::predicate::regex::compile_pattern;
use crate::predicate::{LeafPredicate, ValueTest};
use crate::value::Value;
use regex::Regex as CompiledRegex;
use std::cmp::Ordering;

struct RegexAlternative {
	pattern: String,
	flags: String,
	compiled: CompiledRegex,
}

impl RegexAlternative {
	fn new(pattern: String, flags: String) -> Result<Self, Error> {
		let compiled = compile_pattern(&pattern, &flags)?;
		Ok(Self {
			pattern,
			flags,
			compiled,
		})
	}

	fn matches(&self, value: &Value) -> bool {
		match value {
			Value::String(s) | Value::Symbol(s) => self.compiled.is_match(s),
			Value::Regex(r) => r.pattern == self.pattern && r.flags == self.flags,
			_ => false,
		}
	}
}

/// The result of `In::optimize` (§4.6 "Optimizer rewrites"): a degenerate
/// `$in` with exactly one alternative collapses to that alternative's own
/// predicate kind.
pub enum InRewrite {
	Regex(String, String),
	Eq(Value),
}

/// `'c` is the lifetime of a borrowed collator, guaranteed by the caller to
/// outlive the predicate (§5).
pub struct In<'c> {
	path: FieldRef,
	/// The source-of-truth list as constructed, retained separately from
	/// `equalities` so a collation rebind can rebuild the sorted view
	/// losslessly (§4.6 "Collation rebind").
	raw: Vec<Value>,
	equalities: Vec<Value>,
	regexes: Vec<RegexAlternative>,
	has_null: bool,
	/// Tracked per §4.6's state list; not read by `matches_single_value`
	/// itself (the spec's matching formula never consults it) — it exists
	/// for a future logical-combinator layer that needs to know an `$in`
	/// set contains `[]`, which is outside this crate's scope (§1).
	#[allow(dead_code)]
	has_empty_array: bool,
	collator: Option<&'c dyn Collator>,
}

impl<'c> In<'c> {
	/// Regex literals and `Undefined` are rejected from the equality set
	/// at construction (§4.6 "Construction invariants").
	pub fn new(path: FieldRef, equalities: Vec<Value>, regex_alternatives: Vec<(String, String)>) -> Result<Self, Error> {
		for v in &equalities {
			if matches!(v, Value::Regex(_)) {
				return Err(Error::bad_value("$in equality set must not contain a regex literal"));
			}
			if matches!(v, Value::Undefined) {
				return Err(Error::bad_value("$in equality set must not contain undefined"));
			}
		}
		if equalities.len() > crate::cnf::IN_SET_WARN_THRESHOLD {
			tracing::warn!(size = equalities.len(), "large $in equality set; consider an index instead");
		}
		let has_null = equalities.iter().any(|v| matches!(v, Value::Null));
		let has_empty_array = equalities.iter().any(|v| matches!(v, Value::Array(a) if a.is_empty()));
		let regexes = regex_alternatives
			.into_iter()
			.map(|(p, f)| RegexAlternative::new(p, f))
			.collect::<Result<Vec<_>, _>>()?;
		let mut this = Self {
			path,
			raw: equalities,
			equalities: Vec::new(),
			regexes,
			has_null,
			has_empty_array,
			collator: None,
		};
		this.rebuild_equalities();
		Ok(this)
	}

	fn less(&self, a: &Value, b: &Value) -> Ordering {
		match (a.as_str(), b.as_str()) {
			(Some(sa), Some(sb)) => match self.collator {
				Some(c) => c.compare_str(sa, sb),
				None => sa.as_bytes().cmp(sb.as_bytes()),
			},
			_ => a.cmp(b),
		}
	}

	fn rebuild_equalities(&mut self) {
		let mut v = self.raw.clone();
		v.sort_by(|a, b| self.less(a, b));
		v.dedup_by(|a, b| self.less(a, b) == Ordering::Equal);
		self.equalities = v;
	}

	/// Rebinds the collator, re-sorting and re-deduplicating the equality
	/// vector iff the collation actually changed (§4.6 "Collation rebind",
	/// §8.2 idempotence: `setCollator(x); setCollator(y); setCollator(x)`
	/// must land back on the `x` ordering without drifting).
	pub fn set_collator(&mut self, collator: Option<&'c dyn Collator>) {
		let current = self.collator.map(|c| c as &dyn Collator);
		if same_collation(current, collator) {
			return;
		}
		tracing::debug!("$in collator rebind; re-sorting equality set");
		self.collator = collator;
		self.rebuild_equalities();
	}

	fn binary_search(&self, e: &Value) -> bool {
		self.equalities.binary_search_by(|probe| self.less(probe, e)).is_ok()
	}

	/// §4.6 "Optimizer rewrites": a lone regex with no equalities
	/// simplifies to a bare `Regex` predicate; a lone equality with no
	/// regexes simplifies to an `Eq` comparison. Anything else is
	/// unchanged. Applying this twice is a no-op past the first call
	/// (§8.1 "Optimizer idempotence") since the rewritten form is never
	/// itself an `In`.
	pub fn optimize(&self) -> Option<InRewrite> {
		match (self.equalities.len(), self.regexes.len()) {
			(0, 1) => Some(InRewrite::Regex(self.regexes[0].pattern.clone(), self.regexes[0].flags.clone())),
			(1, 0) => Some(InRewrite::Eq(self.equalities[0].clone())),
			_ => None,
		}
	}

	pub fn debug_string(&self) -> String {
		format!(
			"{} $in [{} equalities, {} regexes]",
			self.path,
			self.equalities.len(),
			self.regexes.len()
		)
	}
}

impl<'c> ValueTest for In<'c> {
	fn matches_single_value(&self, value: &Value) -> bool {
		(self.has_null && value.is_missing()) || self.binary_search(value) || self.regexes.iter().any(|r| r.matches(value))
	}
}

impl<'c> LeafPredicate for In<'c> {
	fn path(&self) -> &FieldRef {
		&self.path
	}
}
