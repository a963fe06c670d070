//! Error types for dcdm-core operations.
//!
//! The transfer functions themselves never fail: NaN and infinities flow
//! through the IEEE-754 arithmetic untouched. The only error source is
//! configuration, namely an unknown domain-range scale, which is reported
//! at the point where the scale is parsed.
//!
//! # Usage
//!
//! ```rust
//! use dcdm_core::{Error, Scale};
//!
//! let err = "percent".parse::<Scale>().unwrap_err();
//! assert!(matches!(err, Error::InvalidScale { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::scale::Scale`] - Scale parsing
//! - `dcdm-cli` - Wrapped into `anyhow` at the command boundary

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring DCDM encoding.
#[derive(Debug, Error)]
pub enum Error {
    /// Domain-range scale is not one of `reference`, `1` or `100`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dcdm_core::Error;
    ///
    /// let err = Error::invalid_scale("10");
    /// assert!(err.to_string().contains("10"));
    /// ```
    #[error("invalid domain-range scale '{value}', expected one of: reference, 1, 100")]
    InvalidScale {
        /// Rejected value as given by the caller
        value: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidScale`] error.
    #[inline]
    pub fn invalid_scale(value: impl Into<String>) -> Self {
        Self::InvalidScale {
            value: value.into(),
        }
    }

    /// Returns `true` if this is a scale configuration error.
    #[inline]
    pub fn is_scale_error(&self) -> bool {
        matches!(self, Self::InvalidScale { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_scale() {
        let err = Error::invalid_scale("1000");
        let msg = err.to_string();
        assert!(msg.contains("1000"));
        assert!(msg.contains("reference"));
        assert!(err.is_scale_error());
    }
}
