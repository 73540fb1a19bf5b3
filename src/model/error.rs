//! Error types for vmgraph.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the command-line driver
//!   - [`ViewModelError`] - Rejected view-model construction or update
//!   - [`ConfigError`] - Configuration file could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - `std::io::Error` - Writing frames to stdout failed
//!   - `serde_json::Error` - Serializing a render description failed
//!
//! # Recovery Strategy
//!
//! View-model errors are raised *before* any state is touched: a rejected
//! update leaves the node exactly as it was. Every other view-model operation
//! is total. Configuration and logging errors are fatal for the driver and
//! propagate to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes of the driver.
#[derive(Debug, Error)]
pub enum AppError {
    /// A view-model value was rejected.
    #[error("Invalid view-model state: {0}")]
    ViewModel(#[from] ViewModelError),

    /// Configuration could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Frame output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// A render description could not be serialized.
    #[error("Failed to serialize frame: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by view-model constructors and updates.
///
/// # Design Notes
///
/// Validation happens at the boundary where an untyped number enters the
/// model. Once a [`LayoutSpec`](crate::model::LayoutSpec) exists it is valid by
/// construction, so downstream code never re-checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewModelError {
    /// An argument was outside its domain.
    ///
    /// **When this occurs**: `LayoutSpec::new` or `with_updated_wrap` receives a
    /// negative (or absurdly large) line-wrap count.
    ///
    /// **Recovery**: None needed. The caller still holds the previous value,
    /// which is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use vmgraph::model::{Alignment, LayoutSpec, ViewModelError};
    ///
    /// let err = LayoutSpec::new(None, None, Alignment::Leading, -1).unwrap_err();
    /// assert!(matches!(err, ViewModelError::InvalidArgument { field: "max_lines", .. }));
    /// assert!(err.to_string().contains("-1"));
    /// ```
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        field: &'static str,
        /// Human-readable explanation including the rejected value.
        reason: String,
    },
}
