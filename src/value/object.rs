use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Deref, DerefMut};

/// A keyed container of `(field-name, Value)` pairs. Field order is
/// insertion order (§3.1), so this wraps an `IndexMap` rather than the
/// `BTreeMap` the reference crate uses for its own `Object` type — a
/// document store that must echo back fields in the order a client wrote
/// them cannot sort keys underneath the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Object(pub IndexMap<String, Value>);

impl Deref for Object {
	type Target = IndexMap<String, Value>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Object {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl From<IndexMap<String, Value>> for Object {
	fn from(v: IndexMap<String, Value>) -> Self {
		Self(v)
	}
}

impl FromIterator<(String, Value)> for Object {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Display for Object {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("{ ")?;
		for (i, (k, v)) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{k}: {v}")?;
		}
		f.write_str(" }")
	}
}
