use super::ErrorFactory;
use crate::traits::{chain_store, Detalizer, StoreBuilder};
use crate::types::DetailError;
use std::sync::Arc;

/// Builder for [`ErrorFactory`].
///
/// A store builder is mandatory; building without one is a configuration
/// mistake reported as [`DetailError::MisconfiguredFactory`].
///
/// # Examples
///
/// ```
/// use error_detail::{CallStackDetalizer, DetailError, ErrorFactory};
///
/// let factory = ErrorFactory::builder()
///     .chain_store()
///     .detalizer(CallStackDetalizer::new())
///     .build();
/// assert_eq!(factory.detalizer_count(), 1);
///
/// let missing = ErrorFactory::builder().try_build();
/// assert_eq!(missing.unwrap_err(), DetailError::MisconfiguredFactory);
/// ```
#[must_use]
#[derive(Default)]
pub struct ErrorFactoryBuilder {
    store_builder: Option<Arc<dyn StoreBuilder>>,
    detalizers: Vec<Arc<dyn Detalizer>>,
}

impl ErrorFactoryBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the builder that materializes detail stores.
    pub fn store_builder<S>(mut self, store_builder: S) -> Self
    where
        S: StoreBuilder + 'static,
    {
        self.store_builder = Some(Arc::new(store_builder));
        self
    }

    /// Uses [`chain_store`], the [`DetailChain`](crate::DetailChain) backed
    /// default.
    #[inline]
    pub fn chain_store(self) -> Self {
        self.store_builder(chain_store)
    }

    /// Appends a detalizer. Detalizers run in the order they are added.
    pub fn detalizer<D>(mut self, detalizer: D) -> Self
    where
        D: Detalizer + 'static,
    {
        self.detalizers.push(Arc::new(detalizer));
        self
    }

    /// Appends a detalizer when present; `None` leaves the builder unchanged.
    #[inline]
    pub fn maybe_detalizer<D>(self, detalizer: Option<D>) -> Self
    where
        D: Detalizer + 'static,
    {
        match detalizer {
            Some(detalizer) => self.detalizer(detalizer),
            None => self,
        }
    }

    /// Appends already shared detalizers, e.g. ones reused across factories.
    pub fn shared_detalizers<I>(mut self, detalizers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Detalizer>>,
    {
        self.detalizers.extend(detalizers);
        self
    }

    pub fn try_build(self) -> Result<ErrorFactory, DetailError> {
        let store_builder = self.store_builder.ok_or(DetailError::MisconfiguredFactory)?;
        Ok(ErrorFactory::from_parts(store_builder, self.detalizers))
    }

    /// # Panics
    ///
    /// Panics with [`DetailError::MisconfiguredFactory`] when no store
    /// builder was set.
    pub fn build(self) -> ErrorFactory {
        match self.try_build() {
            Ok(factory) => factory,
            Err(err) => panic!("{}", err),
        }
    }
}
