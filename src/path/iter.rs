//! The lazy path-traversal cursor (§4.1). The resolution algorithm is
//! expressed as a pair of mutually-recursive free functions (`resolve` /
//! `walk_array`) that eagerly populate an internal buffer; `PathIterator`
//! then exposes that buffer through the `more()`/`next()` pair the rest of
//! the engine expects, so callers never observe the eager construction —
//! only the state-machine contract (§9 "Path iterator: explicit state
//! machine, no coroutines").

use crate::path::{is_numeric_component, ArrayTraversalPolicy, FieldRef, LeafArrayBehavior, NonLeafArrayBehavior};
use crate::value::{Array, Value};

/// One candidate produced by the iterator: the value itself, and the
/// decimal-string name of the outermost implicitly-traversed array slot
/// that produced it (or `None` if no implicit array was traversed to reach
/// it — §4.1 "Outermost-offset rule").
pub type Candidate = (Value, Option<String>);

/// A lazy cursor over `(value, arrayOffset)` contexts reachable from a
/// field path against a root document (§4.1).
pub struct PathIterator {
	candidates: std::vec::IntoIter<Candidate>,
}

impl PathIterator {
	pub fn new(path: &FieldRef, root: &Value, policy: ArrayTraversalPolicy) -> Self {
		let mut out = Vec::new();
		emit_for(path.parts(), root, policy, None, 0, &mut out);
		Self {
			candidates: out.into_iter(),
		}
	}

	/// True iff a further candidate is available.
	pub fn more(&self) -> bool {
		self.candidates.as_slice().first().is_some()
	}
}

impl Iterator for PathIterator {
	type Item = Candidate;

	fn next(&mut self) -> Option<Self::Item> {
		self.candidates.next()
	}
}

/// Resolves `components` against `value`, descending through exact object
/// field names. Stops at whichever comes first: the path is fully
/// consumed, an array is reached (returned along with the components still
/// unconsumed), or a non-object non-array value blocks further descent
/// while components remain (in which case the dead end collapses to a
/// single `Missing`, with no remaining components — §4.1 step 1,
/// `NestedPartialMatchScalar`).
fn resolve<'a>(components: &'a [String], value: &Value) -> (Value, &'a [String]) {
	let mut cur = value;
	let mut i = 0;
	while i < components.len() {
		match cur {
			Value::Object(o) => match o.get(&components[i]) {
				Some(v) => {
					cur = v;
					i += 1;
				}
				None => return (Value::Missing, &[]),
			},
			Value::Array(_) => return (cur.clone(), &components[i..]),
			_ => return (Value::Missing, &[]),
		}
	}
	(cur.clone(), &[])
}

/// Resolves `components` against `value` and emits whatever candidates
/// result, applying the non-leaf/leaf array policies at the point an array
/// is reached (§4.1 steps 2-6).
///
/// `depth` counts recursions from `walk_array` back into `emit_for` along
/// the object-field-lookup branch, the one place the same (unconsumed)
/// remaining-components slice crosses a recursive call. Each such crossing
/// still consumes at least one path component before it can recurse again
/// (`resolve` always tries the current object's fields first), so total
/// depth is bounded by the path's own component count — but a sufficiently
/// long dotted path matched against correspondingly nested arrays-of-objects
/// can still recurse deep enough to threaten the stack. Past
/// `cnf::MAX_PATH_DEPTH` the branch collapses to a dead end, the same way an
/// unresolvable scalar does.
fn emit_for(
	components: &[String],
	value: &Value,
	policy: ArrayTraversalPolicy,
	outer_offset: Option<&str>,
	depth: u32,
	out: &mut Vec<Candidate>,
) {
	if depth > *crate::cnf::MAX_PATH_DEPTH {
		tracing::warn!(depth, "path traversal exceeded MAX_PATH_DEPTH, truncating");
		return;
	}
	let (resolved, rest) = resolve(components, value);
	let Value::Array(ref arr) = resolved else {
		out.push((resolved, outer_offset.map(str::to_owned)));
		return;
	};
	if !rest.is_empty() {
		match policy.non_leaf {
			NonLeafArrayBehavior::NoTraversal => {}
			NonLeafArrayBehavior::MatchSubpath => {
				out.push((resolved.clone(), outer_offset.map(str::to_owned)));
			}
			NonLeafArrayBehavior::Traverse => walk_array(arr, rest, policy, outer_offset, depth + 1, out),
		}
	} else {
		match policy.leaf {
			LeafArrayBehavior::NoTraversal => {
				out.push((resolved.clone(), outer_offset.map(str::to_owned)));
			}
			LeafArrayBehavior::Traverse => walk_array(arr, rest, policy, outer_offset, depth + 1, out),
		}
	}
}

/// Iterates the elements of an array that is being implicitly or
/// explicitly traversed, applying the "object field lookup" and "explicit
/// numeric index" rules independently per element (§4.1 step 6) — both can
/// fire for the same element (`ArrayIndex3`/`ArrayIndexNested1` in the
/// base corpus: an object element whose numeric-looking field matches the
/// array index produces candidates from *both* branches).
fn walk_array(
	arr: &Array,
	remaining: &[String],
	policy: ArrayTraversalPolicy,
	outer_offset: Option<&str>,
	depth: u32,
	out: &mut Vec<Candidate>,
) {
	for (i, e) in arr.iter().enumerate() {
		let idx = i.to_string();
		if remaining.is_empty() {
			let offset = outer_offset.map(str::to_owned).or(Some(idx));
			out.push((e.clone(), offset));
			continue;
		}
		let effective_offset = outer_offset.map(str::to_owned).unwrap_or_else(|| idx.clone());
		if matches!(e, Value::Object(_)) {
			emit_for(remaining, e, policy, Some(effective_offset.as_str()), depth, out);
		}
		if is_numeric_component(&remaining[0]) && remaining[0] == idx {
			if remaining.len() == 1 {
				out.push((e.clone(), None));
			} else {
				emit_for(&remaining[1..], e, policy, None, depth, out);
			}
		}
	}
	if remaining.is_empty() {
		out.push((Value::Array(arr.clone()), outer_offset.map(str::to_owned)));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::map;
	use crate::path::{ArrayTraversalPolicy, LeafArrayBehavior, NonLeafArrayBehavior};

	fn run(path: &str, doc: Value, policy: ArrayTraversalPolicy) -> Vec<Candidate> {
		PathIterator::new(&FieldRef::parse(path), &doc, policy).collect()
	}

	fn default_policy() -> ArrayTraversalPolicy {
		ArrayTraversalPolicy::default()
	}

	#[test]
	fn root1_simple_field() {
		let doc = Value::Object(map! {"x" => 4, "a" => 5});
		let got = run("a", doc, default_policy());
		assert_eq!(got, vec![(Value::from(5), None)]);
	}

	#[test]
	fn root_array1_implicit_traversal_plus_terminal_array() {
		let doc = Value::Object(map! {"x" => 4, "a" => Value::from(vec![Value::from(5), Value::from(6)])});
		let got = run("a", doc, default_policy());
		assert_eq!(
			got,
			vec![
				(Value::from(5), Some("0".into())),
				(Value::from(6), Some("1".into())),
				(Value::from(vec![Value::from(5), Value::from(6)]), None),
			]
		);
	}

	#[test]
	fn root_array2_leaf_no_traversal_emits_array_only() {
		let doc = Value::Object(map! {"x" => 4, "a" => Value::from(vec![Value::from(5), Value::from(6)])});
		let policy = ArrayTraversalPolicy::new(NonLeafArrayBehavior::Traverse, LeafArrayBehavior::NoTraversal);
		let got = run("a", doc, policy);
		assert_eq!(got, vec![(Value::from(vec![Value::from(5), Value::from(6)]), None)]);
	}

	#[test]
	fn nested1_mixed_array_of_objects_and_scalars() {
		let doc = Value::Object(map! {
			"a" => Value::from(vec![
				Value::Object(map!{"b" => 5}),
				Value::from(3),
				Value::Object(Default::default()),
				Value::Object(map!{"b" => Value::from(vec![Value::from(9), Value::from(11)])}),
				Value::Object(map!{"b" => 7}),
			])
		});
		let got = run("a.b", doc, default_policy());
		assert_eq!(
			got,
			vec![
				(Value::from(5), Some("0".into())),
				(Value::Missing, Some("2".into())),
				(Value::from(9), Some("3".into())),
				(Value::from(11), Some("3".into())),
				(Value::from(vec![Value::from(9), Value::from(11)]), Some("3".into())),
				(Value::from(7), Some("4".into())),
			]
		);
	}

	#[test]
	fn nested_partial_match_scalar_emits_single_missing() {
		let doc = Value::Object(map! {"a" => 4});
		let got = run("a.b", doc, default_policy());
		assert_eq!(got, vec![(Value::Missing, None)]);
	}

	#[test]
	fn nested_partial_match_array_emits_nothing() {
		let doc = Value::Object(map! {"a" => Value::from(vec![Value::from(4)])});
		let got = run("a.b", doc, default_policy());
		assert!(got.is_empty());
	}

	#[test]
	fn nested_empty_array_emits_the_empty_array() {
		let doc = Value::Object(map! {"a" => Value::Object(map!{"b" => Value::from(Vec::<Value>::new())})});
		let got = run("a.b", doc, default_policy());
		assert_eq!(got, vec![(Value::from(Vec::<Value>::new()), None)]);
	}

	#[test]
	fn match_subpath_returns_array_on_subpath() {
		let doc = Value::Object(map! {"a" => Value::from(vec![Value::Object(map!{"b" => 5})])});
		let policy = ArrayTraversalPolicy::new(NonLeafArrayBehavior::MatchSubpath, LeafArrayBehavior::NoTraversal);
		let got = run("a.b.c", doc.clone(), policy);
		assert_eq!(got.len(), 1);
		assert_eq!(got[0].0, doc.as_object().unwrap().get("a").unwrap().clone());
	}

	#[test]
	fn array_index1_explicit_index_no_offset() {
		let doc = Value::Object(map! {"a" => Value::from(vec![Value::from(5), Value::from(7), Value::from(3)])});
		let got = run("a.1", doc, default_policy());
		assert_eq!(got, vec![(Value::from(7), None)]);
	}

	#[test]
	fn array_index2_explicit_index_on_nested_array() {
		let doc = Value::Object(map! {"a" => Value::from(vec![
			Value::from(5),
			Value::from(vec![Value::from(2), Value::from(4)]),
			Value::from(3),
		])});
		let got = run("a.1", doc, default_policy());
		assert_eq!(got, vec![(Value::from(vec![Value::from(2), Value::from(4)]), None)]);
	}

	#[test]
	fn array_index3_object_field_lookup_and_explicit_index_both_fire() {
		let inner = map! {"1" => 4};
		let doc = Value::Object(map! {"a" => Value::from(vec![
			Value::from(5),
			Value::Object(inner.clone()),
			Value::from(3),
		])});
		let got = run("a.1", doc, default_policy());
		assert_eq!(got, vec![(Value::from(4), None), (Value::Object(inner), None)]);
	}

	#[test]
	fn array_index_nested1_missing_then_explicit_match() {
		let doc = Value::Object(map! {"a" => Value::from(vec![
			Value::from(5),
			Value::Object(map!{"b" => 4}),
			Value::from(3),
		])});
		let got = run("a.1.b", doc, default_policy());
		assert_eq!(got, vec![(Value::Missing, Some("1".into())), (Value::from(4), None)]);
	}

	#[test]
	fn outermost_offset_rule_for_nested_implicit_arrays() {
		let doc = Value::Object(map! {"a" => Value::from(vec![
			Value::Object(map!{"b" => Value::from(vec![Value::from(2), Value::from(3)])}),
			Value::Object(map!{"b" => Value::from(vec![Value::from(4), Value::from(5)])}),
		])});
		let got = run("a.b", doc, default_policy());
		let offsets: Vec<Option<String>> = got.iter().map(|(_, o)| o.clone()).collect();
		assert_eq!(offsets, vec![Some("0".into()), Some("0".into()), Some("1".into()), Some("1".into())]);
	}

	#[test]
	fn pathologically_long_path_truncates_rather_than_overflowing() {
		// A single path component only ever unwraps one implicit array level
		// (see `nested1_mixed_array_of_objects_and_scalars`), so recursion
		// depth tracks the *path's* component count, not bare document
		// nesting. Build a document/path pair shaped so each "a" component
		// consumes one level and re-enters an array mid-path, the one
		// pattern that actually recurses, and make the chain long enough to
		// trip the guard well before the path is exhausted.
		let levels = *crate::cnf::MAX_PATH_DEPTH as usize + 10;
		let mut doc = Value::from(1);
		for _ in 0..levels {
			doc = Value::Object(map! {"a" => Value::from(vec![doc])});
		}
		let path = vec!["a"; levels].join(".");
		let got = run(&path, doc, default_policy());
		assert!(got.is_empty());
	}

	#[test]
	fn array_offset_with_implicit_and_explicit_traversal() {
		let doc = Value::Object(map! {"a" => Value::from(vec![
			Value::Object(map!{"b" => Value::from(vec![Value::from(2), Value::from(3)])}),
			Value::Object(map!{"b" => Value::from(vec![Value::from(4), Value::from(5)])}),
		])});
		let got = run("a.0.b", doc, default_policy());
		assert_eq!(
			got,
			vec![
				(Value::Missing, Some("0".into())),
				(Value::from(2), Some("0".into())),
				(Value::from(3), Some("1".into())),
				(Value::from(vec![Value::from(2), Value::from(3)]), None),
				(Value::Missing, Some("1".into())),
			]
		);
	}
}
