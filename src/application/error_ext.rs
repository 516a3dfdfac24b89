//! Error conversion helpers for common I/O operations

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add an action description to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{}", line).with_context("write demo output")?;
    /// ```
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: action.to_string(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_source() {
        let result: io::Result<()> = Err(io::Error::from(io::ErrorKind::BrokenPipe));
        let err = result.with_context("write demo output").unwrap_err();
        assert_eq!(err.to_string(), "operation failed: write demo output");
        assert!(std::error::Error::source(&err).is_some());
    }
}
