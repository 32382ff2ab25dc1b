//! `$eq`/`$lt`/`$lte`/`$gt`/`$gte` (§4.2).

use crate::collator::Collator;
use crate::err::Error;
use crate::path::FieldRef;
use crate::predicate::{LeafPredicate, ValueTest};
use crate::value::Value;
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
	Eq,
	Lt,
	Lte,
	Gt,
	Gte,
}

impl fmt::Display for CompareOp {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			CompareOp::Eq => "$eq",
			CompareOp::Lt => "$lt",
			CompareOp::Lte => "$lte",
			CompareOp::Gt => "$gt",
			CompareOp::Gte => "$gte",
		})
	}
}

/// A range/equality comparison against a fixed right-hand value (§3.4,
/// §4.2). `'c` is the lifetime of a borrowed collator, which the caller
/// guarantees outlives the predicate (§5 "Memory ownership").
pub struct Comparison<'c> {
	path: FieldRef,
	op: CompareOp,
	rhs: Value,
	collator: Option<&'c dyn Collator>,
}

impl<'c> Comparison<'c> {
	/// `$eq`/`$lt`/`$lte`/`$gt`/`$gte` forbid `rhs == Undefined` at
	/// construction time (§4.2 "Construction constraint").
	pub fn new(path: FieldRef, op: CompareOp, rhs: Value) -> Result<Self, Error> {
		if matches!(rhs, Value::Undefined) {
			return Err(Error::bad_value("comparison rhs must not be undefined"));
		}
		Ok(Self {
			path,
			op,
			rhs,
			collator: None,
		})
	}

	pub fn set_collator(&mut self, collator: Option<&'c dyn Collator>) {
		self.collator = collator;
	}

	pub fn debug_string(&self) -> String {
		format!("{} {} {}", self.path, self.op, self.rhs)
	}

	/// Computes the candidate-vs-rhs ordering per §4.2 steps 1-4, or `None`
	/// when the two sides are unordered (cross-type with no sentinel
	/// involved, or exactly one side NaN). `None` maps to "false" for
	/// every comparison operator, which matches the spec's per-operator
	/// tables for each of those cases.
	fn compare(e: &Value, rhs: &Value, collator: Option<&dyn Collator>) -> Option<Ordering> {
		let (ct, rt) = (e.canonical_type(), rhs.canonical_type());
		if ct != rt {
			if e.is_nullish() && rhs.is_nullish() {
				return Some(Ordering::Equal);
			}
			if matches!(rhs, Value::MinKey) {
				return Some(Ordering::Greater);
			}
			if matches!(rhs, Value::MaxKey) {
				return Some(Ordering::Less);
			}
			return None;
		}
		if let (Some(a), Some(b)) = (e.as_number(), rhs.as_number()) {
			if a.is_nan() || b.is_nan() {
				return (a.is_nan() && b.is_nan()).then_some(Ordering::Equal);
			}
		}
		if let (Some(a), Some(b)) = (e.as_str(), rhs.as_str()) {
			return Some(match collator {
				Some(c) => c.compare_str(a, b),
				None => a.as_bytes().cmp(b.as_bytes()),
			});
		}
		Some(e.cmp(rhs))
	}
}

impl<'c> ValueTest for Comparison<'c> {
	fn matches_single_value(&self, value: &Value) -> bool {
		match Self::compare(value, &self.rhs, self.collator) {
			Some(ord) => match self.op {
				CompareOp::Eq => ord == Ordering::Equal,
				CompareOp::Lt => ord == Ordering::Less,
				CompareOp::Lte => ord != Ordering::Greater,
				CompareOp::Gt => ord == Ordering::Greater,
				CompareOp::Gte => ord != Ordering::Less,
			},
			None => false,
		}
	}
}

impl<'c> LeafPredicate for Comparison<'c> {
	fn path(&self) -> &FieldRef {
		&self.path
	}

	/// The implicit-null rule (§4.2 "Implicit null matching", §4.9 step
	/// 3): an `$eq: null` predicate also matches a document where the
	/// field is absent along its entire path, not just one whose leaf
	/// value happens to be `Null`.
	fn matches_on_empty(&self) -> bool {
		self.op == CompareOp::Eq && matches!(self.rhs, Value::Null)
	}
}
