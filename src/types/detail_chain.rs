//! Persistent association list backing error details.
//!
//! A [`DetailChain`] is a singly linked list of [`Detail`]s whose head is the
//! most recently added pair. Extending a chain produces a new head that shares
//! the existing nodes, so chains are never mutated and may be shared freely
//! between threads.
//!
//! # Examples
//!
//! ```
//! use error_detail::{Detail, DetailChain, DetailValue};
//!
//! let chain = DetailChain::from_pairs([
//!     Detail::new("attempt", "1"),
//!     Detail::new("attempt", "2"),
//! ]);
//!
//! // Lookups see the latest pair, rendering shows every pair.
//! assert_eq!(chain.lookup(&"attempt".into()), Some(&DetailValue::from("2")));
//! assert_eq!(chain.render(), "attempt : 2\nattempt : 1\n");
//! ```
use crate::traits::DetailStore;
use crate::types::renderer::{render_details, DetailFormatter, PlainFormatter};
use crate::types::{Detail, DetailError, DetailValue};
use core::fmt::{self, Debug};
use std::sync::Arc;

/// Immutable, structurally shared list of details.
#[derive(Clone, Default)]
pub struct DetailChain {
    head: Option<Arc<Node>>,
    len: usize,
}

struct Node {
    detail: Detail,
    parent: Option<Arc<Node>>,
}

impl DetailChain {
    /// The empty chain.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Builds a chain by folding `pairs` in order: the first pair ends up at
    /// the tail, the last one at the head.
    ///
    /// Fails on the first key that does not support equality.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, DetailError>
    where
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        pairs.into_iter().try_fold(Self::new(), |chain, pair| chain.push(pair.into()))
    }

    /// Panicking counterpart of [`DetailChain::try_from_pairs`].
    ///
    /// # Panics
    ///
    /// Panics with [`DetailError::InvalidKeyKind`] when a key cannot be
    /// compared for equality.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        match Self::try_from_pairs(pairs) {
            Ok(chain) => chain,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns a new chain with `detail` as its head and `self` as its tail.
    pub fn push(&self, detail: Detail) -> Result<Self, DetailError> {
        if !detail.key.is_comparable() {
            return Err(DetailError::invalid_key(detail.key.type_name()));
        }

        let node = Node { detail, parent: self.head.clone() };
        Ok(Self { head: Some(Arc::new(node)), len: self.len + 1 })
    }

    /// Value of the most recently added detail whose key matches `key`.
    pub fn lookup(&self, key: &DetailValue) -> Option<&DetailValue> {
        self.iter().find(|detail| detail.key.matches(key)).map(|detail| &detail.value)
    }

    /// Renders every detail, most recent first, one line each.
    #[inline]
    pub fn render(&self) -> String {
        self.render_with(&PlainFormatter)
    }

    #[inline]
    pub fn render_with(&self, formatter: &dyn DetailFormatter) -> String {
        render_details(formatter, self.iter())
    }

    /// Iterates details from head (newest) to tail (oldest).
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head.as_deref() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

/// Head-to-tail iterator over a [`DetailChain`].
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Detail;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.parent.as_deref();
            &node.detail
        })
    }
}

impl<'a> IntoIterator for &'a DetailChain {
    type Item = &'a Detail;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Unlinks uniquely owned parents one by one so long chains cannot overflow
// the stack on drop.
impl Drop for Node {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Arc::try_unwrap(node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for DetailChain {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Debug for DetailChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl DetailStore for DetailChain {
    #[inline]
    fn lookup(&self, key: &DetailValue) -> Option<&DetailValue> {
        DetailChain::lookup(self, key)
    }

    #[inline]
    fn details(&self) -> Box<dyn Iterator<Item = &Detail> + '_> {
        Box::new(self.iter())
    }

    #[inline]
    fn render_with(&self, formatter: &dyn DetailFormatter) -> String {
        DetailChain::render_with(self, formatter)
    }
}
