//! `$exists` (§4.5).

use crate::path::FieldRef;
use crate::predicate::{LeafPredicate, ValueTest};
use crate::value::Value;

pub struct Exists {
	path: FieldRef,
}

impl Exists {
	pub fn new(path: FieldRef) -> Self {
		Self {
			path,
		}
	}

	pub fn debug_string(&self) -> String {
		format!("{} exists", self.path)
	}
}

impl ValueTest for Exists {
	/// `Null` exists; only `Missing` does not (§4.5).
	fn matches_single_value(&self, value: &Value) -> bool {
		!value.is_missing()
	}
}

impl LeafPredicate for Exists {
	fn path(&self) -> &FieldRef {
		&self.path
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::map;

	#[test]
	fn null_exists_missing_does_not() {
		let e = Exists::new(FieldRef::parse("a"));
		assert!(e.matches_single_value(&Value::Null));
		assert!(!e.matches_single_value(&Value::Missing));
	}

	#[test]
	fn absent_path_does_not_exist() {
		let e = Exists::new(FieldRef::parse("a.b"));
		let doc = Value::Object(map! {"x" => 1});
		assert!(!e.matches(&doc));
	}

	#[test]
	fn present_field_exists() {
		let e = Exists::new(FieldRef::parse("a"));
		let doc = Value::Object(map! {"a" => Value::Null});
		assert!(e.matches(&doc));
	}
}
