/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shared data types for AWS service shape crates.
//!
//! Every service crate in this workspace (`elbv2`, `glue`, `cloudfront`)
//! models its API shapes as plain structs; this crate holds the handful of
//! protocol-agnostic carrier types those shapes have in common: timestamps
//! ([`Instant`]), binary payloads ([`Blob`]), open content ([`Document`]),
//! response metadata, and the pagination seam.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod instant;
pub mod macros;
pub mod pagination;
pub mod serde_util;

mod blob;
mod document;
mod number;

// Re-exported for the `string_enum!` macro expansion; not part of the public API.
#[doc(hidden)]
pub use serde;

pub use blob::Blob;
pub use document::Document;
pub use error::{GenericError, ResponseMetadata};
pub use instant::Instant;
pub use number::Number;
pub use pagination::{PageableRequest, PagedOutput, Paginator};
