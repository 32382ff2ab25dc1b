use thiserror::Error;

/// Errors returned at predicate-construction time.
///
/// Evaluation itself never fails: callers that want resilience validate
/// predicates once, at parse time, and treat the resulting tree as infallible
/// from then on.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// A predicate was constructed with a malformed or out-of-domain value,
	/// e.g. a `$mod` divisor of zero, a regex pattern containing an embedded
	/// NUL, an `$eq` against `undefined`, or an `$in` set containing a regex
	/// literal.
	#[error("bad value: {0}")]
	BadValue(String),

	/// The regex engine rejected a pattern or flag set.
	#[error("invalid regex /{pattern}/{flags}: {message}")]
	RegexCompile {
		pattern: String,
		flags: String,
		message: String,
	},

	/// A code path the ordering invariants declare impossible was reached.
	/// This is a programmer error, not a recoverable condition.
	#[error("unreachable: {0}")]
	Unreachable(String),
}

impl Error {
	pub fn bad_value(msg: impl Into<String>) -> Self {
		Self::BadValue(msg.into())
	}

	/// Numeric error code, stable for diagnostics but not a wire contract.
	pub fn code(&self) -> u32 {
		match self {
			Error::BadValue(_) => 2,
			Error::RegexCompile {
				..
			} => 51091,
			Error::Unreachable(_) => 8,
		}
	}
}
