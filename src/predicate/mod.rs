//! The leaf predicate kinds (§3.4, §4.2-§4.9) and the shared dispatch
//! shell (§4.9, §9 "Polymorphic predicate tree → tagged sum") every one of
//! them runs on top of.

pub mod allowed_properties;
pub mod bittest;
pub mod comparison;
pub mod exists;
pub mod in_;
pub mod modulo;
pub mod regex;

use crate::path::{ArrayTraversalPolicy, FieldRef, PathIterator};
use crate::value::Value;

/// A predicate that tests a single already-resolved value with no path of
/// its own. This is the shape `AllowedProperties`' pattern/otherwise
/// children need (§4.8): they are applied directly to a field's value, not
/// re-walked through a `PathIterator` against the outer document.
pub trait ValueTest {
	fn matches_single_value(&self, value: &Value) -> bool;
}

/// The common shell every leaf predicate shares. `matches` walks a
/// `PathIterator` over the predicate's own path and applies
/// `matches_single_value` to every emitted candidate, short-circuiting on
/// the first hit (§4.9 steps 1-2).
pub trait LeafPredicate: ValueTest {
	fn path(&self) -> &FieldRef;

	/// Most predicates are indifferent to array-traversal policy and take
	/// the default (`Traverse`/`Traverse`); a predicate built against
	/// `LeafArrayBehavior::NoTraversal` semantics overrides this.
	fn array_policy(&self) -> ArrayTraversalPolicy {
		ArrayTraversalPolicy::default()
	}

	/// What to report when the path iterator produced no candidates at
	/// all. Only `Comparison`'s `Eq` variant against `Null` overrides this
	/// default (§4.9 step 3, the implicit-null rule); every other leaf —
	/// including `Exists`, whose positive sense must return `false` on an
	/// absent path (§4.9 step 4) — is already correct with `false`, since
	/// `false` is exactly what an empty first-hit search would yield.
	fn matches_on_empty(&self) -> bool {
		false
	}

	fn matches(&self, document: &Value) -> bool {
		let mut saw_any = false;
		for (value, _offset) in PathIterator::new(self.path(), document, self.array_policy()) {
			saw_any = true;
			if self.matches_single_value(&value) {
				return true;
			}
		}
		if saw_any {
			false
		} else {
			self.matches_on_empty()
		}
	}
}
