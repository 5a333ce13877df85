//! Error value carrying a message plus queryable, renderable details.
//!
//! A [`DecoratedError`] offers two independent read models over the same
//! details:
//!
//! - **for code**: [`DecoratedError::get`] returns the latest value stored
//!   under a key, so control flow can branch on it;
//! - **for operators**: [`DecoratedError::detailed`] renders the message
//!   followed by every renderable detail, newest first.
//!
//! Errors are created by an [`ErrorFactory`] and never change afterwards.
//! [`DecoratedError::caused`] builds a new error through the same factory and
//! stores the current one under [`CAUSED_BY_DETAIL_KEY`], giving a walkable
//! causal history.
//!
//! # Examples
//!
//! ```
//! use error_detail::{details, ErrorFactory, CAUSED_BY_DETAIL_KEY};
//!
//! let factory = ErrorFactory::default();
//! let root = factory.error("connection reset");
//! let err = root.caused("fetching invoices", details!["Retriable" => "yes"]);
//!
//! assert_eq!(err.message(), "fetching invoices caused by: connection reset");
//! assert_eq!(err.detailed(), "fetching invoices caused by: connection reset\nRetriable : yes\n");
//! assert_eq!(err.get(CAUSED_BY_DETAIL_KEY).and_then(|v| v.as_error()), Some(&root));
//! ```
use crate::factory::ErrorFactory;
use crate::traits::DetailStore;
use crate::types::renderer::{DetailFormatter, PlainFormatter};
use crate::types::{Detail, DetailError, DetailValue};
use core::cell::{Cell, RefCell};
use core::iter;
use std::sync::Arc;

mod report;
mod traits;

pub use report::{ErrorReport, ReportEntry};

/// Key type of [`CAUSED_BY_DETAIL_KEY`].
///
/// Deliberately has no text, so the cause never shows up in rendered details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CausedBy;

/// Reserved key holding the immediate cause of an error built by
/// [`DecoratedError::caused`]. Its value is always a [`DecoratedError`].
pub const CAUSED_BY_DETAIL_KEY: CausedBy = CausedBy;

impl From<CausedBy> for DetailValue {
    #[inline]
    fn from(key: CausedBy) -> Self {
        DetailValue::new(key)
    }
}

/// Error with a message, details and a handle to the factory that built it.
///
/// Cloning is cheap and keeps identity: clones compare equal to each other
/// and to nothing else.
#[must_use]
#[derive(Clone)]
pub struct DecoratedError(Arc<Inner>);

struct Inner {
    message: String,
    store: Option<Arc<dyn DetailStore>>,
    factory: ErrorFactory,
}

// Every `caused` nests the previous error inside the new store, so dropping
// the newest error would otherwise recurse once per level of history.
// Stores released while another release is running on this thread are queued
// and dropped by the outermost release instead.
struct DropQueue {
    draining: Cell<bool>,
    pending: RefCell<Vec<Arc<dyn DetailStore>>>,
}

thread_local! {
    static DROP_QUEUE: DropQueue = const {
        DropQueue { draining: Cell::new(false), pending: RefCell::new(Vec::new()) }
    };
}

struct Draining<'a>(&'a Cell<bool>);

impl Drop for Draining<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl DropQueue {
    fn release(&self, store: Arc<dyn DetailStore>) {
        if self.draining.replace(true) {
            self.pending.borrow_mut().push(store);
            return;
        }

        let _draining = Draining(&self.draining);
        drop(store);
        loop {
            let next = self.pending.borrow_mut().pop();
            match next {
                Some(store) => drop(store),
                None => break,
            }
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(store) = self.store.take() {
            // During thread teardown the closure is discarded and the store
            // drops in place.
            let _ = DROP_QUEUE.try_with(move |queue| queue.release(store));
        }
    }
}

impl DecoratedError {
    #[inline]
    pub(crate) fn from_parts(
        message: String,
        store: Option<Arc<dyn DetailStore>>,
        factory: ErrorFactory,
    ) -> Self {
        Self(Arc::new(Inner { message, store, factory }))
    }

    /// The message verbatim, never including details.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// Message line followed by one line per renderable detail.
    #[must_use]
    pub fn detailed(&self) -> String {
        self.detailed_with(&PlainFormatter)
    }

    /// Like [`DecoratedError::detailed`] with a custom line formatter.
    #[must_use]
    pub fn detailed_with(&self, formatter: &dyn DetailFormatter) -> String {
        let details = self.0.store.as_deref().map(|store| store.render_with(formatter));
        let details = details.unwrap_or_default();

        let mut text = String::with_capacity(self.0.message.len() + 1 + details.len());
        text.push_str(&self.0.message);
        text.push('\n');
        text.push_str(&details);
        text
    }

    /// Value of the most recently added detail stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_detail::{details, DetailValue, ErrorFactory};
    ///
    /// let err = ErrorFactory::default()
    ///     .new_error("quota exceeded", details!["Limit" => 10_u32, "Limit" => 20_u32]);
    ///
    /// assert_eq!(err.get("Limit").and_then(|v| v.downcast_ref::<u32>()), Some(&20));
    /// assert_eq!(err.get("Missing"), None);
    /// ```
    pub fn get<K: Into<DetailValue>>(&self, key: K) -> Option<&DetailValue> {
        let key = key.into();
        self.0.store.as_deref()?.lookup(&key)
    }

    /// Whether any detail is stored under `key`.
    #[inline]
    pub fn contains<K: Into<DetailValue>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Every stored detail, most recent first.
    pub fn details(&self) -> Box<dyn Iterator<Item = &Detail> + '_> {
        match self.0.store.as_deref() {
            Some(store) => store.details(),
            None => Box::new(iter::empty()),
        }
    }

    /// Builds a new error caused by `self`.
    ///
    /// The new message is `"{message} caused by: {self.message()}"`. The
    /// `details` come first, followed by `(CAUSED_BY_DETAIL_KEY, self)`, so
    /// the reserved key always resolves to the immediate cause.
    ///
    /// # Panics
    ///
    /// Panics when one of `details` has a key without equality.
    pub fn caused<M, I>(&self, message: M, details: I) -> DecoratedError
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        let (message, details) = self.caused_parts(message, details);
        self.0.factory.new_error(message, details)
    }

    /// Fallible counterpart of [`DecoratedError::caused`].
    pub fn try_caused<M, I>(&self, message: M, details: I) -> Result<DecoratedError, DetailError>
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        let (message, details) = self.caused_parts(message, details);
        self.0.factory.try_new_error(message, details)
    }

    fn caused_parts<M, I>(&self, message: M, details: I) -> (String, impl Iterator<Item = Detail>)
    where
        M: Into<String>,
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        let message = format!("{} caused by: {}", message.into(), self.message());
        let cause = Detail::new(CAUSED_BY_DETAIL_KEY, self.clone());
        (message, details.into_iter().map(Into::into).chain(iter::once(cause)))
    }

    /// The immediate cause, if this error was built by
    /// [`DecoratedError::caused`].
    #[inline]
    pub fn cause(&self) -> Option<&DecoratedError> {
        self.get(CAUSED_BY_DETAIL_KEY)?.as_error()
    }

    /// Walks the causal history from the immediate cause to the oldest error.
    #[inline]
    pub fn causes(&self) -> Causes<'_> {
        Causes { next: self.cause() }
    }

    /// The oldest error in the causal history, `self` when there is no cause.
    pub fn root_cause(&self) -> &DecoratedError {
        self.causes().last().unwrap_or(self)
    }

    /// The factory that built this error.
    #[inline]
    pub fn factory(&self) -> &ErrorFactory {
        &self.0.factory
    }

    /// Whether both handles point at the same error.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Emits the error as a single `tracing` event at `ERROR` level.
    #[cfg(feature = "tracing")]
    pub fn trace(&self) {
        let details = self.0.store.as_deref().map(|store| store.render()).unwrap_or_default();
        tracing::error!(
            error.message = %self.message(),
            error.details = %details.trim_end(),
            "decorated error"
        );
    }
}

/// Iterator over the causal history of a [`DecoratedError`].
#[derive(Clone)]
pub struct Causes<'a> {
    next: Option<&'a DecoratedError>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a DecoratedError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
