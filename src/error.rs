// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for platform construction

use thiserror::Error;

/// Result type alias for geometric operations
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Errors raised while building frames and platforms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlatformError {
    /// An argument does not satisfy the contract of the operation
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },
}

impl PlatformError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the parameter that was rejected
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlatformError::invalid_argument("base_frame", "expected 6 attachment points, got 4");
        let msg = format!("{err}");
        assert!(msg.contains("base_frame"));
        assert!(msg.contains("got 4"));
        assert_eq!(err.parameter(), "base_frame");
    }
}
