/// Creates a new ordered map of key-value pairs, for building test documents tersely.
#[macro_export]
#[doc(hidden)]
macro_rules! map {
    ($($k:expr => $v:expr),* $(,)?) => {{
        let mut m = $crate::value::Object::default();
        $(m.insert($k.to_string(), $v.into());)*
        m
    }};
}

/// Lazily parses a value from the environment, falling back to a default
/// if the variable is unset or fails to parse.
#[macro_export]
#[doc(hidden)]
macro_rules! lazy_env_parse {
	($key:expr, $t:ty, $default:expr) => {
		once_cell::sync::Lazy::new(|| {
			std::env::var($key).ok().and_then(|s| s.parse::<$t>().ok()).unwrap_or($default)
		})
	};
}
