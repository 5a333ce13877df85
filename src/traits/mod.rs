//! Capability traits at the seams of the crate.
//!
//! - [`Render`]: operator-facing text of a detail key or value
//! - [`Detalizer`]: automatic detail provider run on every created error
//! - [`DetailStore`] / [`StoreBuilder`]: pluggable storage of error details
//! - [`ResultExt`]: decorating the error side of a `Result`
//!
//! # Examples
//!
//! ```
//! use error_detail::traits::{DetailStore, Render};
//! use error_detail::{Detail, DetailChain};
//!
//! let chain = DetailChain::from_pairs([Detail::new("Region", "eu-west-1")]);
//! let store: &dyn DetailStore = &chain;
//!
//! assert_eq!(store.lookup(&"Region".into()).and_then(Render::render).as_deref(), Some("eu-west-1"));
//! ```

pub mod detail_store;
pub mod detalizer;
pub mod render;
pub mod result_ext;

pub use detail_store::{chain_store, DetailStore, StoreBuilder, StoreResult};
pub use detalizer::Detalizer;
pub use render::Render;
pub use result_ext::ResultExt;
