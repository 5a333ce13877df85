//! Structured snapshot of a decorated error.
//!
//! [`ErrorReport`] captures the same information as
//! [`DecoratedError::detailed`] but keeps keys, values and causes apart, which
//! suits structured log sinks. With the `serde` feature it serializes as:
//!
//! ```json
//! {
//!   "message": "fetching invoices caused by: connection reset",
//!   "details": [{ "key": "Retriable", "value": "yes" }],
//!   "cause": { "message": "connection reset", "details": [] }
//! }
//! ```
use super::DecoratedError;
use crate::traits::Render;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One rendered detail. At least one side is present.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub key: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub value: Option<String>,
}

/// Message, rendered details (newest first) and the report of the cause.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    pub details: Vec<ReportEntry>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub cause: Option<Box<ErrorReport>>,
}

impl DecoratedError {
    /// Builds an [`ErrorReport`] for this error and its causal history.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_detail::{details, ErrorFactory, ReportEntry};
    ///
    /// let err = ErrorFactory::default().new_error("disk full", details!["Mount" => "/var"]);
    /// let report = err.report();
    ///
    /// assert_eq!(report.message, "disk full");
    /// assert_eq!(
    ///     report.details,
    ///     vec![ReportEntry { key: Some("Mount".into()), value: Some("/var".into()) }]
    /// );
    /// assert!(report.cause.is_none());
    /// ```
    pub fn report(&self) -> ErrorReport {
        // Built from the oldest cause outwards so deep histories need no
        // recursion.
        let mut history: Vec<&DecoratedError> = self.causes().collect();
        let mut cause = None;
        while let Some(error) = history.pop() {
            cause = Some(error.report_level(cause));
        }
        self.report_level(cause)
    }

    fn report_level(&self, cause: Option<ErrorReport>) -> ErrorReport {
        let details = self
            .details()
            .filter_map(|detail| {
                let key = detail.key.render().filter(|text| !text.is_empty());
                let value = detail.value.render().filter(|text| !text.is_empty());
                (key.is_some() || value.is_some()).then_some(ReportEntry { key, value })
            })
            .collect();

        ErrorReport { message: self.message().to_owned(), details, cause: cause.map(Box::new) }
    }
}
