//! Detail values, the detail chain and the decorated error type.
//!
//! # Examples
//!
//! ```
//! use error_detail::{details, ErrorFactory};
//!
//! let err = ErrorFactory::default()
//!     .new_error("database connection failed", details!["Host" => "db-1", "Port" => "5432"]);
//!
//! println!("{:#}", err);
//! // database connection failed
//! // Port : 5432
//! // Host : db-1
//! ```
use smallvec::SmallVec;

pub mod decorated_error;
pub mod detail;
pub mod detail_chain;
pub mod detail_error;
pub mod detail_value;
pub mod renderer;

pub use decorated_error::*;
pub use detail::*;
pub use detail_chain::DetailChain;
pub use detail_error::*;
pub use detail_value::*;
pub use renderer::{render_pair, DetailFormatter, PlainFormatter, RenderConfig, PAIR_SEPARATOR};

/// SmallVec-backed buffer collecting the details of one error.
///
/// Uses inline storage for up to 4 details, which covers a caller detail or
/// two plus the usual detalizer output without touching the heap.
pub type DetailVec = SmallVec<[Detail; 4]>;

/// Result alias with [`DecoratedError`] as the failure type.
pub type DecoratedResult<T> = Result<T, DecoratedError>;
