//! Typed, shadowing key/value details for error values.
//!
//! Errors built by an [`ErrorFactory`] carry a message plus details attached at
//! the point of creation. The same details serve two readers that never
//! interfere:
//!
//! - **code** asks [`DecoratedError::get`] for the latest value under a key and
//!   branches on it;
//! - **operators** read [`DecoratedError::detailed`], the message followed by
//!   every renderable detail, newest first.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_detail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Details for code and for operators
//!
//! ```
//! use error_detail::{Detail, DetailValue, ErrorFactory};
//!
//! #[derive(Debug, PartialEq)]
//! struct IsCritical;
//!
//! impl std::fmt::Display for IsCritical {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("Is Critical")
//!     }
//! }
//!
//! let factory = ErrorFactory::default();
//! let err = factory.new_error(
//!     "replica lag too high",
//!     [Detail::flag(DetailValue::shown(IsCritical)), Detail::new("Lag", "42s")],
//! );
//!
//! assert!(err.contains(DetailValue::shown(IsCritical)));
//! assert_eq!(err.detailed(), "replica lag too high\nLag : 42s\nIs Critical\n");
//! ```
//!
//! ## Causal chaining
//!
//! ```
//! use error_detail::{details, ErrorFactory};
//!
//! let factory = ErrorFactory::default();
//! let low = factory.error("socket closed");
//! let mid = low.caused("reading frame", details![]);
//! let top = mid.caused("syncing ledger", details![]);
//!
//! assert_eq!(top.message(), "syncing ledger caused by: reading frame caused by: socket closed");
//! assert_eq!(top.root_cause(), &low);
//! assert_eq!(top.causes().count(), 2);
//! ```
//!
//! ## Automatic details
//!
//! ```
//! use error_detail::{CallStackDetalizer, ErrorFactory, CALL_STACK_DETAIL_KEY};
//!
//! let factory = ErrorFactory::builder()
//!     .chain_store()
//!     .detalizer(CallStackDetalizer::forced())
//!     .build();
//!
//! let err = factory.error("invariant violated");
//! assert!(err.detailed().contains("Call Stack : "));
//! assert!(err.contains(CALL_STACK_DETAIL_KEY));
//! ```

/// Ready-made detalizers
pub mod detalizers;
/// Error factory and its builder
pub mod factory;
/// Detail and error macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits for rendering, detalizers and detail stores
pub mod traits;
/// Detail values, the detail chain and the decorated error
pub mod types;

pub use detalizers::*;
pub use factory::{ErrorFactory, ErrorFactoryBuilder};
pub use traits::*;
pub use types::{
    render_pair, CausedBy, Causes, DecoratedError, DecoratedResult, Detail, DetailChain,
    DetailError, DetailFormatter, DetailValue, DetailVec, ErrorReport, PlainFormatter,
    RenderConfig, ReportEntry, CAUSED_BY_DETAIL_KEY, PAIR_SEPARATOR,
};
