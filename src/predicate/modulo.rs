//! `$mod` (§4.4).

use crate::err::Error;
use crate::path::FieldRef;
use crate::predicate::{LeafPredicate, ValueTest};
use crate::value::Value;

pub struct Modulo {
	path: FieldRef,
	divisor: i64,
	remainder: i64,
}

impl Modulo {
	/// `divisor` of zero is rejected at construction (§4.4, parser-enforced
	/// in the base spec, which we hoist into the constructor since there is
	/// no separate parser stage in this crate's scope).
	pub fn new(path: FieldRef, divisor: i64, remainder: i64) -> Result<Self, Error> {
		if divisor == 0 {
			return Err(Error::bad_value("$mod divisor must not be zero"));
		}
		Ok(Self {
			path,
			divisor,
			remainder,
		})
	}

	pub fn debug_string(&self) -> String {
		format!("{} % {} == {}", self.path, self.divisor, self.remainder)
	}
}

impl ValueTest for Modulo {
	fn matches_single_value(&self, value: &Value) -> bool {
		match value.as_number() {
			// Rust's `%` on i64 truncates toward zero, matching the spec's
			// "truncation toward zero ... on signed 64-bit" directly.
			Some(n) => n.to_i64_truncated() % self.divisor == self.remainder,
			None => false,
		}
	}
}

impl LeafPredicate for Modulo {
	fn path(&self) -> &FieldRef {
		&self.path
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_zero_divisor() {
		assert!(Modulo::new(FieldRef::parse("a"), 0, 0).is_err());
	}

	#[test]
	fn matches_by_remainder() {
		let m = Modulo::new(FieldRef::parse("a"), 4, 2).unwrap();
		assert!(m.matches_single_value(&Value::from(10)));
		assert!(!m.matches_single_value(&Value::from(9)));
	}

	#[test]
	fn non_numeric_never_matches() {
		let m = Modulo::new(FieldRef::parse("a"), 4, 2).unwrap();
		assert!(!m.matches_single_value(&Value::from("10")));
	}

	#[test]
	fn truncates_doubles_toward_zero() {
		let m = Modulo::new(FieldRef::parse("a"), 4, 2).unwrap();
		assert!(m.matches_single_value(&Value::from(10.9)));
	}
}
