//! Creation of decorated errors.
//!
//! An [`ErrorFactory`] owns two pieces of configuration:
//!
//! - a [`StoreBuilder`] that turns a pair sequence into a detail store;
//! - an ordered list of [`Detalizer`]s run on every created error.
//!
//! There is no process-wide factory. Callers construct one, usually once per
//! crate or service, and hand it to the code that builds errors. Use
//! [`ErrorFactory::default`] for a chain-backed factory without detalizers.
//!
//! # Examples
//!
//! ```
//! use error_detail::{decorate, details, Detail, ErrorFactory};
//!
//! let factory = ErrorFactory::builder()
//!     .chain_store()
//!     .detalizer(|| vec![Detail::new("Component", "ingest")])
//!     .build();
//!
//! let err = factory.new_error("payload rejected", details!["Size" => "12MB"]);
//! assert_eq!(err.detailed(), "payload rejected\nComponent : ingest\nSize : 12MB\n");
//!
//! let formatted = decorate!(factory, "shard {} unavailable", 7);
//! assert_eq!(formatted.message(), "shard 7 unavailable");
//! ```
use crate::traits::{chain_store, Detalizer, StoreBuilder};
use crate::types::{DecoratedError, Detail, DetailError, DetailVec};
use core::fmt::{self, Debug};
use std::error::Error;
use std::sync::Arc;

mod builder;

pub use builder::ErrorFactoryBuilder;

/// Builds [`DecoratedError`]s from a message and details.
///
/// Cloning is cheap; clones share the same configuration.
#[derive(Clone)]
pub struct ErrorFactory(Arc<FactoryInner>);

struct FactoryInner {
    store_builder: Arc<dyn StoreBuilder>,
    detalizers: Vec<Arc<dyn Detalizer>>,
}

impl ErrorFactory {
    /// Starts an [`ErrorFactoryBuilder`] with no store builder and no
    /// detalizers.
    #[inline]
    pub fn builder() -> ErrorFactoryBuilder {
        ErrorFactoryBuilder::new()
    }

    /// Factory using `store_builder` and running `detalizers` in order.
    pub fn new<S, I>(store_builder: S, detalizers: I) -> Self
    where
        S: StoreBuilder + 'static,
        I: IntoIterator<Item = Arc<dyn Detalizer>>,
    {
        Self::from_parts(Arc::new(store_builder), detalizers.into_iter().collect())
    }

    #[inline]
    pub(crate) fn from_parts(
        store_builder: Arc<dyn StoreBuilder>,
        detalizers: Vec<Arc<dyn Detalizer>>,
    ) -> Self {
        Self(Arc::new(FactoryInner { store_builder, detalizers }))
    }

    /// Number of registered detalizers.
    #[inline]
    pub fn detalizer_count(&self) -> usize {
        self.0.detalizers.len()
    }

    /// Creates an error from `message` and `details`.
    ///
    /// The caller's details come first, followed by the output of every
    /// detalizer in registration order.
    ///
    /// # Panics
    ///
    /// Panics with [`DetailError::InvalidKeyKind`] when a key, including one
    /// produced by a detalizer, does not support equality.
    pub fn new_error<M, I>(&self, message: M, details: I) -> DecoratedError
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        match self.try_new_error(message, details) {
            Ok(error) => error,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible counterpart of [`ErrorFactory::new_error`].
    pub fn try_new_error<M, I>(&self, message: M, details: I) -> Result<DecoratedError, DetailError>
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        let mut pairs: DetailVec = details.into_iter().map(Into::into).collect();
        for detalizer in &self.0.detalizers {
            pairs.extend(detalizer.details());
        }

        let store = self.0.store_builder.build(pairs)?;
        Ok(DecoratedError::from_parts(message.into(), store, self.clone()))
    }

    /// Creates an error carrying only detalizer output.
    #[inline]
    pub fn error<M: Into<String>>(&self, message: M) -> DecoratedError {
        self.new_error(message, DetailVec::new())
    }

    /// Upgrades any error into a [`DecoratedError`].
    ///
    /// A `DecoratedError`, boxed or not, is returned unchanged. Any other
    /// error becomes a new error whose message is the source's `Display`
    /// text; nothing else of the source is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_detail::ErrorFactory;
    ///
    /// let factory = ErrorFactory::default();
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    ///
    /// let once = factory.convert(io);
    /// let twice = factory.convert(once.clone());
    ///
    /// assert_eq!(once.message(), "config.toml missing");
    /// assert!(twice.ptr_eq(&once));
    /// ```
    pub fn convert<E>(&self, error: E) -> DecoratedError
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        let error: Box<dyn Error + Send + Sync + 'static> = error.into();
        match error.downcast::<DecoratedError>() {
            Ok(decorated) => *decorated,
            Err(other) => self.error(other.to_string()),
        }
    }

    /// [`ErrorFactory::convert`] lifted over an optional error.
    #[inline]
    pub fn convert_opt<E>(&self, error: Option<E>) -> Option<DecoratedError>
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        error.map(|error| self.convert(error))
    }
}

impl Default for ErrorFactory {
    /// Chain-backed factory without detalizers.
    fn default() -> Self {
        Self::from_parts(Arc::new(chain_store), Vec::new())
    }
}

impl Debug for ErrorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorFactory")
            .field("detalizers", &self.0.detalizers.len())
            .finish_non_exhaustive()
    }
}
