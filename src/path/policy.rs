/// Governs what happens when the path has remaining components and an
/// array is reached mid-traversal (§3.3, §4.1 step 4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NonLeafArrayBehavior {
	/// Descend into the array, emitting one candidate per element (§4.1
	/// step 6).
	#[default]
	Traverse,
	/// Emit nothing; the path dead-ends at the array.
	NoTraversal,
	/// Emit the array itself, without descending, as a single candidate.
	MatchSubpath,
}

/// Governs what happens when the path is fully consumed and the final
/// value reached is an array (§3.3, §4.1 step 5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LeafArrayBehavior {
	/// Descend into the array, emitting one candidate per element plus the
	/// array itself (§4.1 step 6).
	#[default]
	Traverse,
	/// Emit the array itself once, without descending into its elements.
	NoTraversal,
}

/// The pair of policies that parameterize a `PathIterator` (§3.3). Both
/// default to `Traverse`, matching the implicit-array-descent behavior
/// most document-query languages use unless the caller opts into stricter
/// array-exact-match semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayTraversalPolicy {
	pub non_leaf: NonLeafArrayBehavior,
	pub leaf: LeafArrayBehavior,
}

impl ArrayTraversalPolicy {
	pub fn new(non_leaf: NonLeafArrayBehavior, leaf: LeafArrayBehavior) -> Self {
		Self {
			non_leaf,
			leaf,
		}
	}
}
