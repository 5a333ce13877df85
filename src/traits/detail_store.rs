//! Storage seam between an [`ErrorFactory`](crate::ErrorFactory) and the
//! details of the errors it builds.
//!
//! The factory hands every pair sequence to a [`StoreBuilder`]. The default
//! builder, [`chain_store`], materializes a [`DetailChain`]; custom builders
//! may index details differently or decline to store them at all by
//! returning `Ok(None)`, in which case lookups miss and nothing renders.
use crate::types::renderer::{render_details, DetailFormatter, PlainFormatter};
use crate::types::{Detail, DetailChain, DetailError, DetailValue, DetailVec};
use core::fmt::Debug;
use std::sync::Arc;

/// Result produced by a [`StoreBuilder`].
pub type StoreResult = Result<Option<Arc<dyn DetailStore>>, DetailError>;

/// Read access to the details of one error.
pub trait DetailStore: Debug + Send + Sync {
    /// Value of the most recently stored detail whose key matches `key`.
    fn lookup(&self, key: &DetailValue) -> Option<&DetailValue>;

    /// Every stored detail, most recent first.
    fn details(&self) -> Box<dyn Iterator<Item = &Detail> + '_>;

    fn render_with(&self, formatter: &dyn DetailFormatter) -> String {
        render_details(formatter, self.details())
    }

    fn render(&self) -> String {
        self.render_with(&PlainFormatter)
    }
}

/// Builds a [`DetailStore`] from details in insertion order.
pub trait StoreBuilder: Send + Sync {
    fn build(&self, details: DetailVec) -> StoreResult;
}

impl<F> StoreBuilder for F
where
    F: Fn(DetailVec) -> StoreResult + Send + Sync,
{
    #[inline]
    fn build(&self, details: DetailVec) -> StoreResult {
        self(details)
    }
}

/// Default store builder backed by [`DetailChain`].
///
/// Rejects keys without equality with [`DetailError::InvalidKeyKind`].
pub fn chain_store(details: DetailVec) -> StoreResult {
    let chain = DetailChain::try_from_pairs(details)?;
    Ok(Some(Arc::new(chain)))
}
