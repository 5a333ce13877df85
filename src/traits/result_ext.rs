//! Extension trait for decorating the error side of a `Result`.
//!
//! # Examples
//!
//! ```
//! use error_detail::{details, traits::ResultExt, DecoratedError, DetailValue, ErrorFactory};
//!
//! fn load_config(factory: &ErrorFactory) -> Result<String, DecoratedError> {
//!     std::fs::read_to_string("does-not-exist.toml")
//!         .caused(factory, "loading configuration", details!["Path" => "does-not-exist.toml"])
//! }
//!
//! let err = load_config(&ErrorFactory::default()).unwrap_err();
//! assert!(err.message().starts_with("loading configuration caused by: "));
//! assert_eq!(err.get("Path"), Some(&DetailValue::from("does-not-exist.toml")));
//! ```
use crate::factory::ErrorFactory;
use crate::types::{DecoratedError, Detail};
use std::error::Error;

/// Converts `Result` errors into [`DecoratedError`]s.
pub trait ResultExt<T> {
    /// Converts the error through [`ErrorFactory::convert`].
    fn decorate(self, factory: &ErrorFactory) -> Result<T, DecoratedError>;

    /// Converts the error and wraps it as the cause of a new error.
    fn caused<M, I>(self, factory: &ErrorFactory, message: M, details: I) -> Result<T, DecoratedError>
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: Into<Detail>;

    /// Like [`ResultExt::caused`], building the message only on `Err`.
    fn caused_with<F, M>(self, factory: &ErrorFactory, message: F) -> Result<T, DecoratedError>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    #[inline]
    fn decorate(self, factory: &ErrorFactory) -> Result<T, DecoratedError> {
        self.map_err(|err| factory.convert(err))
    }

    #[inline]
    fn caused<M, I>(self, factory: &ErrorFactory, message: M, details: I) -> Result<T, DecoratedError>
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        self.map_err(|err| factory.convert(err).caused(message, details))
    }

    #[inline]
    fn caused_with<F, M>(self, factory: &ErrorFactory, message: F) -> Result<T, DecoratedError>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|err| factory.convert(err).caused(message(), Vec::<Detail>::new()))
    }
}
