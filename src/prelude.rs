//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_detail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`details!`], [`decorate!`]
//! - **Types**: [`ErrorFactory`], [`DecoratedError`], [`Detail`], [`DetailValue`]
//! - **Traits**: [`ResultExt`], [`Render`]
//!
//! # Examples
//!
//! ```
//! use error_detail::prelude::*;
//!
//! fn parse_port(factory: &ErrorFactory, raw: &str) -> DecoratedResult<u16> {
//!     raw.parse::<u16>().caused(factory, "parsing port", details!["Input" => raw.to_owned()])
//! }
//!
//! let err = parse_port(&ErrorFactory::default(), "http").unwrap_err();
//! assert_eq!(err.detailed(), "parsing port caused by: invalid digit found in string\nInput : http\n");
//! ```

// Macros
pub use crate::{decorate, details};

// Core types
pub use crate::factory::ErrorFactory;
pub use crate::types::{
    DecoratedError, DecoratedResult, Detail, DetailValue, CAUSED_BY_DETAIL_KEY,
};

// Traits
pub use crate::traits::{Render, ResultExt};
