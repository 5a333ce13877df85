use crate::types::Detail;

/// Provider of automatic details, invoked once per created error.
///
/// Registered providers run in registration order and their output is
/// appended after the details supplied by the caller. Closures returning a
/// `Vec<Detail>` are detalizers too.
///
/// # Examples
///
/// ```
/// use error_detail::{Detail, ErrorFactory};
///
/// let factory = ErrorFactory::builder()
///     .chain_store()
///     .detalizer(|| vec![Detail::new("Service", "billing")])
///     .build();
///
/// let err = factory.error("charge failed");
/// assert_eq!(err.detailed(), "charge failed\nService : billing\n");
/// ```
pub trait Detalizer: Send + Sync {
    fn details(&self) -> Vec<Detail>;
}

impl<F> Detalizer for F
where
    F: Fn() -> Vec<Detail> + Send + Sync,
{
    #[inline]
    fn details(&self) -> Vec<Detail> {
        self()
    }
}
