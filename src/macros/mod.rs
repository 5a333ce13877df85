//! Ergonomic macros for building details and errors.
//!
//! - [`macro@crate::details`] - Builds a [`DetailVec`](crate::types::DetailVec)
//!   from `key => value` pairs, keeping their order.
//! - [`macro@crate::decorate`] - Creates an error from a format string, the
//!   counterpart of `format!` for [`ErrorFactory`](crate::ErrorFactory).
//!
//! # Examples
//!
//! ```
//! use error_detail::{decorate, details, ErrorFactory};
//!
//! let factory = ErrorFactory::default();
//! let user_id = 42;
//!
//! let err = decorate!(factory, "user {} not found", user_id)
//!     .caused("rendering profile", details!["Page" => "profile", "Cached" => false]);
//!
//! assert_eq!(err.detailed(), "rendering profile caused by: user 42 not found\nCached\nPage : profile\n");
//! ```

/// Builds a [`DetailVec`](crate::types::DetailVec) from `key => value` pairs.
///
/// Keys and values accept anything convertible into
/// [`DetailValue`](crate::DetailValue). Use `()` as the value for presence
/// flags.
///
/// # Examples
///
/// ```
/// use error_detail::{details, Detail};
///
/// let empty = details![];
/// assert!(empty.is_empty());
///
/// let pairs = details!["Is Retriable" => (), "Attempt" => 3_u8];
/// assert_eq!(pairs[0], Detail::flag("Is Retriable"));
/// assert_eq!(pairs[1], Detail::new("Attempt", 3_u8));
/// ```
#[macro_export]
macro_rules! details {
    () => {
        $crate::types::DetailVec::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut details = $crate::types::DetailVec::new();
        $(
            details.push($crate::types::Detail::new($key, $value));
        )+
        details
    }};
}

/// Creates a [`DecoratedError`](crate::DecoratedError) with a formatted
/// message through the given factory.
///
/// Expands to `factory.error(format!(...))`, so the factory's detalizers still
/// run.
///
/// # Examples
///
/// ```
/// use error_detail::{decorate, ErrorFactory};
///
/// let factory = ErrorFactory::default();
/// let err = decorate!(factory, "timeout after {}ms", 250);
///
/// assert_eq!(err.to_string(), "timeout after 250ms");
/// ```
#[macro_export]
macro_rules! decorate {
    ($factory:expr, $($arg:tt)*) => {
        $factory.error(format!($($arg)*))
    };
}
