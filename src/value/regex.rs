use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A literal regex *value* — as might appear as the right-hand side of an
/// equality, or nested inside a document — distinct from a Regex
/// *predicate* (`crate::predicate::regex::RegexMatch`), which tests a path
/// against a pattern rather than representing a value to compare.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub struct RegexLiteral {
	pub pattern: String,
	pub flags: String,
}

impl RegexLiteral {
	pub fn new(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
			flags: flags.into(),
		}
	}
}

impl Display for RegexLiteral {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "/{}/{}", self.pattern, self.flags)
	}
}
