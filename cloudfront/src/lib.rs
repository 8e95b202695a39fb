/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>Amazon CloudFront</fullname>
//!
//! <p>This is the <i>Amazon CloudFront API Reference</i>. This guide is for
//! developers who need detailed information about CloudFront API actions,
//! data types, and errors. For detailed information about CloudFront
//! features, see the <i>Amazon CloudFront Developer Guide</i>.</p>
//!
//! This crate holds only the data shapes of the service: the structs and
//! enums exchanged with it, their wire names, and the pagination plumbing.
//! Transport is out of scope; pair the shapes with the connector of your
//! choice.
//!
//! Unlike the query and JSON services, CloudFront returns its continuation
//! token inside the list body (`DistributionList.NextMarker`) and flags the
//! final page with `IsTruncated`; the [`shape_types::PagedOutput`] impls on
//! the list outputs read through that nesting.

pub mod error;
pub mod input;
pub mod model;
pub mod output;

pub use error::Error;
