use once_cell::sync::Lazy;

/// Caps recursion through the path iterator's implicit-array traversal.
/// Depth there tracks the number of dotted path components that have been
/// matched against array-wrapped objects, so this is really a guard against
/// an abnormally long field path combined with correspondingly deep
/// document nesting, not document nesting alone.
///
/// For reference, use ~15 per MiB of stack in release mode.
pub static MAX_PATH_DEPTH: Lazy<u32> = lazy_env_parse!("DOCMATCH_MAX_PATH_DEPTH", u32, 128);

/// Above this many elements in an `$in` equality set, a construction-time
/// warning is logged suggesting the caller push the filter down into an index.
pub const IN_SET_WARN_THRESHOLD: usize = 10_000;
