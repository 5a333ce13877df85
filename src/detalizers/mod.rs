//! Ready-made detalizers.
//!
//! - [`CallStackDetalizer`]: lazily rendered call stack
//! - [`TimestampDetalizer`]: creation time (`timestamp` feature, on by default)
//! - [`SpanDetalizer`]: current `tracing` span name (`tracing` feature)

pub mod call_stack;
#[cfg(feature = "tracing")]
pub mod span;
#[cfg(feature = "timestamp")]
pub mod timestamp;

pub use call_stack::{CallStack, CallStackDetalizer, CallStackKey, CALL_STACK_DETAIL_KEY};
#[cfg(feature = "tracing")]
pub use span::{SpanDetalizer, SpanKey, SPAN_DETAIL_KEY};
#[cfg(feature = "timestamp")]
pub use timestamp::{TimestampDetalizer, TimestampKey, TIMESTAMP_DETAIL_KEY};
