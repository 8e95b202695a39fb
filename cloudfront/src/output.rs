/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */


//! Response shapes for Amazon CloudFront operations.
//!
//! Every output carries a [`shape_types::ResponseMetadata`] with the request
//! ID the service assigned. The list outputs expose their continuation token
//! through [`shape_types::PagedOutput`]; CloudFront nests it inside the list
//! body and only honors it while `IsTruncated` is set.

use serde::{Deserialize, Serialize};
use shape_types::PagedOutput;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateDistributionOutput {
    /// <p>The distribution's information.</p>
    #[serde(rename = "Distribution", default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<crate::model::Distribution>,
    /// <p>The fully qualified URI of the new distribution resource just created. For example: <code>https://cloudfront.amazonaws.com/2010-11-01/distribution/EDFDVBD632BHDS5</code>.</p>
    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// <p>The current version of the distribution created.</p>
    #[serde(rename = "ETag", default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetDistributionOutput {
    /// <p>The distribution's information.</p>
    #[serde(rename = "Distribution", default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<crate::model::Distribution>,
    /// <p>The current version of the distribution's information. For example: <code>E2QWRUHAPOMQZL</code>.</p>
    #[serde(rename = "ETag", default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetDistributionConfigOutput {
    /// <p>The distribution's configuration information.</p>
    #[serde(rename = "DistributionConfig", default, skip_serializing_if = "Option::is_none")]
    pub distribution_config: Option<crate::model::DistributionConfig>,
    /// <p>The current version of the configuration. For example: <code>E2QWRUHAPOMQZL</code>.</p>
    #[serde(rename = "ETag", default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateDistributionOutput {
    /// <p>The distribution's information.</p>
    #[serde(rename = "Distribution", default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<crate::model::Distribution>,
    /// <p>The current version of the configuration. For example: <code>E2QWRUHAPOMQZL</code>.</p>
    #[serde(rename = "ETag", default, skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteDistributionOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListDistributionsOutput {
    /// <p>The <code>DistributionList</code> type.</p>
    #[serde(rename = "DistributionList", default, skip_serializing_if = "Option::is_none")]
    pub distribution_list: Option<crate::model::DistributionList>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateInvalidationOutput {
    /// <p>The fully qualified URI of the distribution and invalidation batch request, including the <code>Invalidation ID</code>.</p>
    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// <p>The invalidation's information.</p>
    #[serde(rename = "Invalidation", default, skip_serializing_if = "Option::is_none")]
    pub invalidation: Option<crate::model::Invalidation>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetInvalidationOutput {
    /// <p>The invalidation's information. For more information, see Invalidation Complex Type.</p>
    #[serde(rename = "Invalidation", default, skip_serializing_if = "Option::is_none")]
    pub invalidation: Option<crate::model::Invalidation>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListInvalidationsOutput {
    /// <p>Information about invalidation batches.</p>
    #[serde(rename = "InvalidationList", default, skip_serializing_if = "Option::is_none")]
    pub invalidation_list: Option<crate::model::InvalidationList>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagResourceOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UntagResourceOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListTagsForResourceOutput {
    /// <p>A complex type that contains zero or more <code>Tag</code> elements.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<crate::model::Tags>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

impl PagedOutput for ListDistributionsOutput {
    fn next_page_token(&self) -> Option<&str> {
        let list = self.distribution_list.as_ref()?;
        if list.is_truncated == Some(true) {
            list.next_marker.as_deref()
        } else {
            None
        }
    }
}

impl PagedOutput for ListInvalidationsOutput {
    fn next_page_token(&self) -> Option<&str> {
        let list = self.invalidation_list.as_ref()?;
        if list.is_truncated == Some(true) {
            list.next_marker.as_deref()
        } else {
            None
        }
    }
}
