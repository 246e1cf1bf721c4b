//! Error types for dialog control operations.

use thiserror::Error;

/// Error type for the dynamic-descriptor entry points.
///
/// Raised synchronously by [`show_named`](crate::DialogContext::show_named)
/// and [`switch_named`](crate::DialogContext::switch_named); it never travels
/// through the pending-result future.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DialogError {
    /// The descriptor does not name a registered dialog content component.
    ///
    /// Register content types with [`register_content!`](crate::register_content)
    /// before resolving them by name.
    #[error("not a registered dialog content component: {0}")]
    UnknownContent(String),
}
