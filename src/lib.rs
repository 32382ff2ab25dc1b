//! Leaf match-expression engine and path traversal iterator for a
//! document-database query evaluator: given a predicate tree and a
//! hierarchical document, decides whether the document satisfies each leaf
//! predicate.
//!
//! Logical combinators (AND/OR/NOT/NOR), the predicate parser, index
//! planning and the collation factory are external collaborators and out
//! of scope here (§1) — this crate owns the leaf evaluation engine and the
//! path iterator that feeds it.

#[macro_use]
extern crate tracing;

pub mod cnf;
pub mod collator;
pub mod err;
#[macro_use]
pub mod mac;
pub mod path;
pub mod predicate;
pub mod value;

pub use collator::{Collator, SimpleCollator};
pub use err::Error;
pub use path::{ArrayTraversalPolicy, FieldRef, LeafArrayBehavior, NonLeafArrayBehavior, PathIterator};
pub use predicate::allowed_properties::AllowedProperties;
pub use predicate::bittest::{BitTest, BitTestOp};
pub use predicate::comparison::{CompareOp, Comparison};
pub use predicate::exists::Exists;
pub use predicate::in_::In;
pub use predicate::modulo::Modulo;
pub use predicate::regex::RegexMatch;
pub use predicate::{LeafPredicate, ValueTest};
pub use value::Value;
