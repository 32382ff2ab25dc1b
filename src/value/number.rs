use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// The numeric canonical type, split across four concrete widths. All four
/// share one canonical type for cross-type comparison purposes (§3.1): a
/// `Number::Int32(3)` and a `Number::Double(3.0)` are the same canonical
/// type and compare by value, not by variant.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Number {
	Int32(i32),
	Int64(i64),
	Double(f64),
	Decimal(Decimal),
}

impl Default for Number {
	fn default() -> Self {
		Self::Int32(0)
	}
}

macro_rules! from_prim_ints {
	($($int:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$int> for Number {
				fn from(v: $int) -> Self {
					Self::$variant(v as _)
				}
			}
		)*
	};
}

from_prim_ints!(i8 => Int32, i16 => Int32, i32 => Int32, u8 => Int32, u16 => Int32);
from_prim_ints!(i64 => Int64, u32 => Int64, isize => Int64);

impl From<f32> for Number {
	fn from(v: f32) -> Self {
		Self::Double(v as f64)
	}
}

impl From<f64> for Number {
	fn from(v: f64) -> Self {
		Self::Double(v)
	}
}

impl From<Decimal> for Number {
	fn from(v: Decimal) -> Self {
		Self::Decimal(v)
	}
}

impl Number {
	/// True iff this number is a NaN value. Int32/Int64 can never be NaN.
	/// `rust_decimal::Decimal` has no NaN representation (it is a bounded
	/// fixed-point type), so Decimal is never NaN either; the uniform
	/// cross-width NaN rule from the base spec's open question is
	/// consequently a no-op for both integer widths and for Decimal, and
	/// only ever fires for Double (see DESIGN.md).
	pub fn is_nan(&self) -> bool {
		match self {
			Number::Double(v) => v.is_nan(),
			Number::Decimal(_) | Number::Int32(_) | Number::Int64(_) => false,
		}
	}

	/// Coerces to a signed 64-bit integer, truncating toward zero. Used by
	/// `$mod` and by `BitTest` after their own range checks have passed.
	pub fn to_i64_truncated(&self) -> i64 {
		match self {
			Number::Int32(v) => *v as i64,
			Number::Int64(v) => *v,
			Number::Double(v) => *v as i64,
			Number::Decimal(v) => v.trunc().to_i64().unwrap_or(if v.is_sign_negative() {
				i64::MIN
			} else {
				i64::MAX
			}),
		}
	}

	pub fn to_f64(&self) -> f64 {
		match self {
			Number::Int32(v) => *v as f64,
			Number::Int64(v) => *v as f64,
			Number::Double(v) => *v,
			Number::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
		}
	}

	fn to_decimal(&self) -> Option<Decimal> {
		match self {
			Number::Int32(v) => Some(Decimal::from(*v)),
			Number::Int64(v) => Some(Decimal::from(*v)),
			Number::Double(v) => Decimal::from_f64_retain(*v),
			Number::Decimal(v) => Some(*v),
		}
	}

	/// True iff the numeric value has no fractional part (used by `BitTest`
	/// to reject non-integral doubles).
	pub fn is_integral(&self) -> bool {
		match self {
			Number::Int32(_) | Number::Int64(_) => true,
			Number::Double(v) => v.fract() == 0.0,
			Number::Decimal(v) => v.fract().is_zero(),
		}
	}
}

impl Eq for Number {}

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Ord for Number {
	fn cmp(&self, other: &Self) -> Ordering {
		fn total_cmp_f64(a: f64, b: f64) -> Ordering {
			if a == 0.0 && b == 0.0 {
				Ordering::Equal
			} else {
				a.total_cmp(&b)
			}
		}
		match (self, other) {
			(Number::Int32(v), Number::Int32(w)) => v.cmp(w),
			(Number::Int64(v), Number::Int64(w)) => v.cmp(w),
			(Number::Double(v), Number::Double(w)) => total_cmp_f64(*v, *w),
			(Number::Decimal(v), Number::Decimal(w)) => v.cmp(w),
			// Mixed widths: promote to the wider representation and compare.
			(Number::Int32(v), Number::Int64(w)) => (*v as i64).cmp(w),
			(Number::Int64(v), Number::Int32(w)) => v.cmp(&(*w as i64)),
			(Number::Int32(v), Number::Double(w)) => total_cmp_f64(*v as f64, *w),
			(Number::Double(v), Number::Int32(w)) => total_cmp_f64(*v, *w as f64),
			(Number::Int64(v), Number::Double(w)) => total_cmp_f64(*v as f64, *w),
			(Number::Double(v), Number::Int64(w)) => total_cmp_f64(*v, *w as f64),
			(v @ Number::Int32(_), w @ Number::Decimal(_)) => {
				v.to_decimal().unwrap().cmp(&w.to_decimal().unwrap())
			}
			(v @ Number::Decimal(_), w @ Number::Int32(_)) => {
				v.to_decimal().unwrap().cmp(&w.to_decimal().unwrap())
			}
			(v @ Number::Int64(_), w @ Number::Decimal(_)) => {
				v.to_decimal().unwrap().cmp(&w.to_decimal().unwrap())
			}
			(v @ Number::Decimal(_), w @ Number::Int64(_)) => {
				v.to_decimal().unwrap().cmp(&w.to_decimal().unwrap())
			}
			(Number::Double(v), Number::Decimal(w)) => match Decimal::from_f64_retain(*v) {
				Some(vd) => vd.cmp(w),
				None if v.is_sign_positive() => Ordering::Greater,
				None => Ordering::Less,
			},
			(Number::Decimal(v), Number::Double(w)) => {
				Number::cmp(&Number::Double(*w), &Number::Decimal(*v)).reverse()
			}
		}
	}
}

impl PartialOrd for Number {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Number::Int32(v) => write!(f, "{v}"),
			Number::Int64(v) => write!(f, "{v}"),
			Number::Double(v) => write!(f, "{v}"),
			Number::Decimal(v) => write!(f, "{v}dec"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cross_width_equality() {
		assert_eq!(Number::from(3i32), Number::from(3i64));
		assert_eq!(Number::from(3i32), Number::from(3.0f64));
		assert_eq!(Number::Decimal(Decimal::from(3)), Number::from(3i32));
	}

	#[test]
	fn nan_is_not_integral_is_nan() {
		let n = Number::Double(f64::NAN);
		assert!(n.is_nan());
	}

	#[test]
	fn ordering_is_value_correct_across_widths() {
		assert!(Number::from(2i32) < Number::from(3i64));
		assert!(Number::from(2.5f64) > Number::from(2i32));
	}

	#[test]
	fn negative_zero_equals_positive_zero() {
		assert_eq!(Number::Double(0.0), Number::Double(-0.0));
	}
}
