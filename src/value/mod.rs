//! The document value model: a tagged union over the canonical document
//! type set, with type introspection, numeric coercion and a cross-type
//! total ordering (§3.1).

mod array;
mod bytes;
mod number;
mod object;
mod regex;

pub use array::Array;
pub use bytes::Binary;
pub use number::Number;
pub use object::Object;
pub use regex::RegexLiteral;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// An opaque 12-byte object id, as used by document stores for generated
/// primary keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub [u8; 12]);

impl Display for ObjectId {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		for b in self.0 {
			write!(f, "{b:02x}")?;
		}
		Ok(())
	}
}

/// A replication-clock-style timestamp: seconds since epoch plus an
/// ordinal increment, distinct from `Value::Date` (a wall-clock instant).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Timestamp {
	pub seconds: u32,
	pub increment: u32,
}

/// The tagged union over the document type set (§3.1). Every `Value` has
/// exactly one variant; there is no "uninitialized" state.
///
/// `PartialEq` here is plain structural equality, variant-by-variant — it
/// does *not* conflate `Null`/`Undefined`/`Missing` the way the EQ/LTE/GTE
/// comparison operators do (§3.1 invariants: "Missing ... compares equal to
/// Null for EQ/LTE/GTE"). That conflation is a property of the comparison
/// predicate (§4.2 step 2), not of value identity, so it lives in
/// `predicate::comparison` instead of here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Value {
	/// The field is not present along its path at all.
	#[default]
	Missing,
	Null,
	/// Distinct variant from `Null` but the *same* canonical type (§3.1);
	/// carried for round-trip fidelity with document stores whose wire
	/// format distinguishes the two.
	Undefined,
	Bool(bool),
	Number(Number),
	String(String),
	/// Same canonical type as `String`; legacy document formats that still
	/// emit a distinct "symbol" type decode into this variant.
	Symbol(String),
	Object(Object),
	Array(Array),
	Binary(Binary),
	/// A literal regex *value*, as opposed to a Regex predicate.
	Regex(RegexLiteral),
	ObjectId(ObjectId),
	Date(DateTime<Utc>),
	Timestamp(Timestamp),
	/// A database reference: a collection name plus a referenced id.
	DbRef {
		collection: String,
		id: Box<Value>,
	},
	JsCode(String),
	JsCodeWScope(String, Object),
	/// Sentinel strictly below every other value, including itself under
	/// strict inequality.
	MinKey,
	/// Sentinel strictly above every other value.
	MaxKey,
}

/// The coarser type class used for cross-type ordering and comparison
/// (§3.1). Several `Value` variants collapse onto the same canonical type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CanonicalType {
	MinKey = 0,
	/// `Null`, `Undefined` and `Missing` all share this canonical type
	/// (§3.1, "Nullish").
	Nullish = 1,
	Numeric = 2,
	/// `String` and `Symbol` share this canonical type.
	Str = 3,
	Object = 4,
	Array = 5,
	Binary = 6,
	ObjectId = 7,
	Bool = 8,
	Date = 9,
	Timestamp = 10,
	DbRef = 11,
	JsCode = 12,
	Regex = 13,
	MaxKey = 14,
}

impl Value {
	pub fn canonical_type(&self) -> CanonicalType {
		match self {
			Value::MinKey => CanonicalType::MinKey,
			Value::Null | Value::Undefined | Value::Missing => CanonicalType::Nullish,
			Value::Number(_) => CanonicalType::Numeric,
			Value::String(_) | Value::Symbol(_) => CanonicalType::Str,
			Value::Object(_) => CanonicalType::Object,
			Value::Array(_) => CanonicalType::Array,
			Value::Binary(_) => CanonicalType::Binary,
			Value::ObjectId(_) => CanonicalType::ObjectId,
			Value::Bool(_) => CanonicalType::Bool,
			Value::Date(_) => CanonicalType::Date,
			Value::Timestamp(_) => CanonicalType::Timestamp,
			Value::DbRef {
				..
			} => CanonicalType::DbRef,
			Value::JsCode(_) | Value::JsCodeWScope(_, _) => CanonicalType::JsCode,
			Value::Regex(_) => CanonicalType::Regex,
			Value::MaxKey => CanonicalType::MaxKey,
		}
	}

	/// "field not present" — distinct from `Null` (§3.1 invariants).
	pub fn is_missing(&self) -> bool {
		matches!(self, Value::Missing)
	}

	/// `Null`, `Undefined` or `Missing` — all treated equivalently for
	/// EQ/LTE/GTE (§3.1, glossary "Nullish").
	pub fn is_nullish(&self) -> bool {
		matches!(self, Value::Null | Value::Undefined | Value::Missing)
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, Value::Number(_))
	}

	pub fn as_number(&self) -> Option<&Number> {
		match self {
			Value::Number(n) => Some(n),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) | Value::Symbol(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(o) => Some(o),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&Array> {
		match self {
			Value::Array(a) => Some(a),
			_ => None,
		}
	}

	pub fn as_binary(&self) -> Option<&Binary> {
		match self {
			Value::Binary(b) => Some(b),
			_ => None,
		}
	}

	pub fn as_regex_literal(&self) -> Option<&RegexLiteral> {
		match self {
			Value::Regex(r) => Some(r),
			_ => None,
		}
	}

	/// Renders this value at the JSON storage/wire boundary (§2.1 ambient
	/// stack). Types with no JSON equivalent (`Binary`, `Regex`, `MinKey`,
	/// `MaxKey`, …) still round-trip through serde's derived enum
	/// representation; this is a debugging/interchange convenience, not
	/// the document store's own wire format, which is out of scope (§1).
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	pub fn from_json(s: &str) -> serde_json::Result<Self> {
		serde_json::from_str(s)
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Number(Number::from(v))
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Number(Number::from(v))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Number(Number::from(v))
	}
}

impl From<Decimal> for Value {
	fn from(v: Decimal) -> Self {
		Value::Number(Number::from(v))
	}
}

impl From<Number> for Value {
	fn from(v: Number) -> Self {
		Value::Number(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_owned())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<Array> for Value {
	fn from(v: Array) -> Self {
		Value::Array(v)
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Value::Array(Array::from(v))
	}
}

impl From<Object> for Value {
	fn from(v: Object) -> Self {
		Value::Object(v)
	}
}

impl From<Binary> for Value {
	fn from(v: Binary) -> Self {
		Value::Binary(v)
	}
}

impl From<RegexLiteral> for Value {
	fn from(v: RegexLiteral) -> Self {
		Value::Regex(v)
	}
}

impl Eq for Value {}

/// The cross-type total ordering of §3.1/§4.2: values of different
/// canonical types order by canonical type first; within a canonical type,
/// by the type's own comparison. `MinKey`/`MaxKey` are sentinels handled
/// before the canonical-type dispatch so they stay strictly outside every
/// other value even relative to other `MinKey`/`MaxKey` instances of a
/// different concrete variant (there is only one of each, so this is moot
/// in practice, but keeps the dispatch total).
impl Ord for Value {
	fn cmp(&self, other: &Self) -> Ordering {
		let (ct, ot) = (self.canonical_type(), other.canonical_type());
		if ct != ot {
			return ct.cmp(&ot);
		}
		match (self, other) {
			(Value::MinKey, Value::MinKey) => Ordering::Equal,
			(Value::MaxKey, Value::MaxKey) => Ordering::Equal,
			// Within the Nullish canonical type, distinct variants still
			// order as equal (§8.1 "Null/Missing conflation").
			(a, b) if a.is_nullish() && b.is_nullish() => Ordering::Equal,
			(Value::Number(a), Value::Number(b)) => a.cmp(b),
			(Value::Bool(a), Value::Bool(b)) => a.cmp(b),
			(Value::String(a), Value::String(b))
			| (Value::String(a), Value::Symbol(b))
			| (Value::Symbol(a), Value::String(b))
			| (Value::Symbol(a), Value::Symbol(b)) => a.as_bytes().cmp(b.as_bytes()),
			(Value::Object(a), Value::Object(b)) => compare_objects(a, b),
			(Value::Array(a), Value::Array(b)) => a.0.cmp(&b.0),
			(Value::Binary(a), Value::Binary(b)) => {
				a.subtype.cmp(&b.subtype).then_with(|| a.bytes.cmp(&b.bytes))
			}
			(Value::ObjectId(a), Value::ObjectId(b)) => a.cmp(b),
			(Value::Date(a), Value::Date(b)) => a.cmp(b),
			(Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
			(
				Value::DbRef {
					collection: ca,
					id: ia,
				},
				Value::DbRef {
					collection: cb,
					id: ib,
				},
			) => ca.cmp(cb).then_with(|| ia.cmp(ib)),
			(Value::JsCode(a), Value::JsCode(b)) => a.cmp(b),
			(Value::JsCodeWScope(a, oa), Value::JsCodeWScope(b, ob)) => {
				a.cmp(b).then_with(|| compare_objects(oa, ob))
			}
			(Value::JsCode(_), Value::JsCodeWScope(_, _)) => Ordering::Less,
			(Value::JsCodeWScope(_, _), Value::JsCode(_)) => Ordering::Greater,
			(Value::Regex(a), Value::Regex(b)) => {
				a.pattern.cmp(&b.pattern).then_with(|| a.flags.cmp(&b.flags))
			}
			// Unreachable: ct == ot guarantees both sides match one of the
			// arms above for every CanonicalType.
			_ => Ordering::Equal,
		}
	}
}

fn compare_objects(a: &Object, b: &Object) -> Ordering {
	a.0.iter().cmp(b.0.iter())
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(Ord::cmp(self, other))
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Value::Missing => f.write_str("MISSING"),
			Value::Null => f.write_str("NULL"),
			Value::Undefined => f.write_str("undefined"),
			Value::Bool(v) => write!(f, "{v}"),
			Value::Number(v) => write!(f, "{v}"),
			Value::String(v) | Value::Symbol(v) => write!(f, "{v:?}"),
			Value::Object(v) => write!(f, "{v}"),
			Value::Array(v) => write!(f, "{v}"),
			Value::Binary(v) => write!(f, "{v}"),
			Value::Regex(v) => write!(f, "{v}"),
			Value::ObjectId(v) => write!(f, "ObjectId({v})"),
			Value::Date(v) => write!(f, "{v:?}"),
			Value::Timestamp(v) => write!(f, "Timestamp({}, {})", v.seconds, v.increment),
			Value::DbRef {
				collection,
				id,
			} => write!(f, "DBRef({collection}, {id})"),
			Value::JsCode(v) => write!(f, "js({v})"),
			Value::JsCodeWScope(v, _) => write!(f, "js({v}, ..)"),
			Value::MinKey => f.write_str("MinKey"),
			Value::MaxKey => f.write_str("MaxKey"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nullish_variants_compare_equal() {
		assert_eq!(Value::Null.cmp(&Value::Missing), Ordering::Equal);
		assert_eq!(Value::Null.cmp(&Value::Undefined), Ordering::Equal);
	}

	#[test]
	fn cross_type_ordering_is_total() {
		assert!(Value::Number(Number::from(1)) < Value::from("a"));
		assert!(Value::from("a") < Value::Object(Object::default()));
		assert!(Value::Object(Object::default()) < Value::Array(Array::default()));
		assert!(Value::MinKey < Value::Number(Number::from(0)));
		assert!(Value::Bool(true) < Value::MaxKey);
	}

	#[test]
	fn min_max_key_bound_everything() {
		let v = Value::from("anything");
		assert!(Value::MinKey < v);
		assert!(v < Value::MaxKey);
	}

	#[test]
	fn string_and_symbol_share_canonical_type_and_compare_by_bytes() {
		assert_eq!(
			Value::String("a".into()).canonical_type(),
			Value::Symbol("a".into()).canonical_type()
		);
		assert_eq!(Value::String("a".into()).cmp(&Value::Symbol("a".into())), Ordering::Equal);
	}

	#[test]
	fn json_round_trips_an_object() {
		let v = Value::Object(crate::map! {"a" => 1, "b" => "x"});
		let json = v.to_json().unwrap();
		assert_eq!(Value::from_json(&json).unwrap(), v);
	}
}
