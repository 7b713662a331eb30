//! Turning store failures into command errors.

use crate::error::{Error, Result};
use crate::port::ApiResult;

/// Attach the message a store recorded to a failed operation.
pub trait Recorded<T> {
    /// `recorded` is the store's `error` read after the operation settled.
    fn recorded(self, recorded: Option<String>) -> Result<T>;
}

impl<T> Recorded<T> for ApiResult<T> {
    fn recorded(self, recorded: Option<String>) -> Result<T> {
        self.map_err(|source| Error::Operation {
            message: recorded.unwrap_or_else(|| source.to_string()),
            source,
        })
    }
}
