//! Tracing integration.
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-detail = { version = "0.1", features = ["tracing"] }
//! ```
use crate::traits::Detalizer;
use crate::types::{Detail, DetailValue};
use core::fmt::{self, Display};
use tracing::Span;

/// Key type of [`SPAN_DETAIL_KEY`]. Renders as `Span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanKey;

/// Key under which [`SpanDetalizer`] stores the current span name.
pub const SPAN_DETAIL_KEY: SpanKey = SpanKey;

impl Display for SpanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Span")
    }
}

impl From<SpanKey> for DetailValue {
    #[inline]
    fn from(key: SpanKey) -> Self {
        DetailValue::shown(key)
    }
}

/// Detalizer recording the name of the span the error was created in.
///
/// Outside of any enabled span it attaches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanDetalizer;

impl SpanDetalizer {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl Detalizer for SpanDetalizer {
    fn details(&self) -> Vec<Detail> {
        span_details(&Span::current())
    }
}

fn span_details(span: &Span) -> Vec<Detail> {
    match span.metadata() {
        Some(metadata) => {
            vec![Detail::new(SPAN_DETAIL_KEY, DetailValue::from_static(metadata.name()))]
        },
        None => Vec::new(),
    }
}
