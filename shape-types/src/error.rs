/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response metadata and the generic unmodeled error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata attached to every service response.
///
/// For many services this carries nothing beyond the request ID, but every
/// output shape exposes it so callers can correlate responses with AWS-side
/// request logs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// The unique request ID assigned by the service.
    #[serde(rename = "RequestId", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ResponseMetadata {
    /// Returns true when no metadata was recorded for the response.
    pub fn is_empty(&self) -> bool {
        self.request_id.is_none()
    }
}

/// GenericError represents an error from a service that is not modeled.
///
/// For many services, errors are fully modeled. However, services add new
/// error codes over time, and some only partially model their errors. In
/// those cases this type exposes the `code`, `message` and `request_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericError {
    /// The error code returned by the service, if any.
    pub code: Option<String>,
    /// The human-readable error message, if any.
    pub message: Option<String>,
    /// The request ID of the failed call, if any.
    pub request_id: Option<String>,
}

impl GenericError {
    /// Creates a `GenericError` builder.
    pub fn builder() -> GenericErrorBuilder {
        GenericErrorBuilder::default()
    }

    /// Returns the error code, if there is one.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message, if there is one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Builder for [`GenericError`].
#[derive(Debug, Default)]
pub struct GenericErrorBuilder {
    inner: GenericError,
}

impl GenericErrorBuilder {
    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the request ID.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error.
    pub fn build(self) -> GenericError {
        self.inner
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("GenericError");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for GenericError {}

#[cfg(test)]
mod test {
    use super::GenericError;

    #[test]
    fn display_includes_code_and_message() {
        let err = GenericError::builder()
            .code("ThrottlingException")
            .message("Rate exceeded")
            .build();
        let formatted = format!("{}", err);
        assert!(formatted.contains("ThrottlingException"));
        assert!(formatted.contains("Rate exceeded"));
    }
}
