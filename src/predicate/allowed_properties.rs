//! A JSON-schema-style "allowed properties" constraint (§4.8): every field
//! of a candidate object must either match a pattern property (whose child
//! predicate then governs its value), be one of a fixed set of allowed
//! names, or satisfy a fallback predicate.

use crate::path::FieldRef;
use crate::predicate::{LeafPredicate, ValueTest};
use crate::value::Value;
use regex::Regex as CompiledRegex;

/// One `patternProperties` entry: a compiled regex over field names, plus
/// the predicate every matching field's value must satisfy.
pub struct PatternProperty {
	pub regex: CompiledRegex,
	pub child: Box<dyn ValueTest>,
}

impl PatternProperty {
	pub fn new(regex: CompiledRegex, child: Box<dyn ValueTest>) -> Self {
		Self {
			regex,
			child,
		}
	}
}

pub struct AllowedProperties {
	path: FieldRef,
	properties: Vec<String>,
	pattern_properties: Vec<PatternProperty>,
	otherwise: Box<dyn ValueTest>,
}

impl AllowedProperties {
	pub fn new(path: FieldRef, properties: Vec<String>, pattern_properties: Vec<PatternProperty>, otherwise: Box<dyn ValueTest>) -> Self {
		Self {
			path,
			properties,
			pattern_properties,
			otherwise,
		}
	}

	pub fn debug_string(&self) -> String {
		format!(
			"{} allowedProperties({} names, {} patterns)",
			self.path,
			self.properties.len(),
			self.pattern_properties.len()
		)
	}
}

impl ValueTest for AllowedProperties {
	/// A non-object candidate never satisfies the constraint (§4.8
	/// "candidate must be an object; otherwise false").
	fn matches_single_value(&self, value: &Value) -> bool {
		let Some(obj) = value.as_object() else {
			return false;
		};
		for (field, field_value) in obj.iter() {
			let pattern_hits: Vec<&PatternProperty> = self.pattern_properties.iter().filter(|p| p.regex.is_match(field)).collect();
			if !pattern_hits.is_empty() {
				if !pattern_hits.iter().all(|p| p.child.matches_single_value(field_value)) {
					return false;
				}
			} else if self.properties.iter().any(|name| name == field) {
				// Accepted outright; no child predicate to run.
			} else if !self.otherwise.matches_single_value(field_value) {
				return false;
			}
		}
		true
	}
}

impl LeafPredicate for AllowedProperties {
	fn path(&self) -> &FieldRef {
		&self.path
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::map;
	use crate::predicate::comparison::{CompareOp, Comparison};

	// A child predicate only ever runs via `matches_single_value`, never
	// `matches`, so its own path is inert; "$value" is a placeholder.
	fn eq_child(n: i32) -> Box<dyn ValueTest> {
		Box::new(Comparison::new(FieldRef::parse("$value"), CompareOp::Eq, Value::from(n)).unwrap())
	}

	fn build() -> AllowedProperties {
		AllowedProperties::new(
			FieldRef::parse("doc"),
			vec!["a".to_string()],
			vec![PatternProperty::new(CompiledRegex::new("^b").unwrap(), eq_child(1))],
			eq_child(0),
		)
	}

	#[test]
	fn allowed_properties_end_to_end_scenario() {
		let p = build();
		assert!(p.matches_single_value(&Value::Object(map! {"a" => "x", "bb" => 1, "c" => 0})));
		assert!(!p.matches_single_value(&Value::Object(map! {"a" => "x", "bb" => 2, "c" => 0})));
		assert!(!p.matches_single_value(&Value::Object(map! {"a" => "x", "bb" => 1, "c" => 1})));
	}

	#[test]
	fn non_object_candidate_never_matches() {
		let p = build();
		assert!(!p.matches_single_value(&Value::from(5)));
	}

	#[test]
	fn multiple_pattern_matches_must_all_accept() {
		let p = AllowedProperties::new(
			FieldRef::parse("doc"),
			vec![],
			vec![
				PatternProperty::new(CompiledRegex::new("^b").unwrap(), eq_child(1)),
				PatternProperty::new(CompiledRegex::new("b$").unwrap(), eq_child(2)),
			],
			eq_child(0),
		);
		// "bb" matches both patterns; only the first child (==1) is satisfied, so it must fail.
		assert!(!p.matches_single_value(&Value::Object(map! {"bb" => 1})));
	}
}
