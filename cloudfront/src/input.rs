/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */


//! Request shapes for Amazon CloudFront operations.
//!
//! Every input carries optional fields only; required-ness is enforced by the
//! service, not the client. Inputs for paginated operations implement
//! [`shape_types::PageableRequest`] through their `Marker` field.

use serde::{Deserialize, Serialize};
use shape_types::PageableRequest;

/// <p>The request to create a new distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateDistributionInput {
    /// <p>The distribution's configuration information.</p>
    #[serde(rename = "DistributionConfig", default, skip_serializing_if = "Option::is_none")]
    pub distribution_config: Option<crate::model::DistributionConfig>,
}

impl CreateDistributionInput {
    /// Creates a builder for `CreateDistributionInput`.
    pub fn builder() -> create_distribution_input::Builder {
        create_distribution_input::Builder::default()
    }
}

/// See [`CreateDistributionInput`](super::CreateDistributionInput).
pub mod create_distribution_input {

    /// A builder for [`CreateDistributionInput`](super::CreateDistributionInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        distribution_config: Option<crate::model::DistributionConfig>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn distribution_config(mut self, input: crate::model::DistributionConfig) -> Self {
            self.distribution_config = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateDistributionInput`](super::CreateDistributionInput).
        pub fn build(self) -> super::CreateDistributionInput {
            super::CreateDistributionInput {
                distribution_config: self.distribution_config,
            }
        }
    }
}

/// <p>The request to get a distribution's information.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetDistributionInput {
    /// <p>The distribution's ID.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetDistributionInput {
    /// Creates a builder for `GetDistributionInput`.
    pub fn builder() -> get_distribution_input::Builder {
        get_distribution_input::Builder::default()
    }
}

/// See [`GetDistributionInput`](super::GetDistributionInput).
pub mod get_distribution_input {

    /// A builder for [`GetDistributionInput`](super::GetDistributionInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        id: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetDistributionInput`](super::GetDistributionInput).
        pub fn build(self) -> super::GetDistributionInput {
            super::GetDistributionInput {
                id: self.id,
            }
        }
    }
}

/// <p>The request to get a distribution configuration.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetDistributionConfigInput {
    /// <p>The distribution's ID.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetDistributionConfigInput {
    /// Creates a builder for `GetDistributionConfigInput`.
    pub fn builder() -> get_distribution_config_input::Builder {
        get_distribution_config_input::Builder::default()
    }
}

/// See [`GetDistributionConfigInput`](super::GetDistributionConfigInput).
pub mod get_distribution_config_input {

    /// A builder for [`GetDistributionConfigInput`](super::GetDistributionConfigInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        id: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetDistributionConfigInput`](super::GetDistributionConfigInput).
        pub fn build(self) -> super::GetDistributionConfigInput {
            super::GetDistributionConfigInput {
                id: self.id,
            }
        }
    }
}

/// <p>The request to update a distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateDistributionInput {
    /// <p>The distribution's configuration information.</p>
    #[serde(rename = "DistributionConfig", default, skip_serializing_if = "Option::is_none")]
    pub distribution_config: Option<crate::model::DistributionConfig>,
    /// <p>The distribution's id.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The value of the <code>ETag</code> header that you received when retrieving the distribution's configuration. For example: <code>E2QWRUHAPOMQZL</code>.</p>
    #[serde(rename = "IfMatch", default, skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
}

impl UpdateDistributionInput {
    /// Creates a builder for `UpdateDistributionInput`.
    pub fn builder() -> update_distribution_input::Builder {
        update_distribution_input::Builder::default()
    }
}

/// See [`UpdateDistributionInput`](super::UpdateDistributionInput).
pub mod update_distribution_input {

    /// A builder for [`UpdateDistributionInput`](super::UpdateDistributionInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        distribution_config: Option<crate::model::DistributionConfig>,
        id: Option<String>,
        if_match: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn distribution_config(mut self, input: crate::model::DistributionConfig) -> Self {
            self.distribution_config = Some(input);
            self
        }

        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        pub fn if_match(mut self, input: impl Into<String>) -> Self {
            self.if_match = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`UpdateDistributionInput`](super::UpdateDistributionInput).
        pub fn build(self) -> super::UpdateDistributionInput {
            super::UpdateDistributionInput {
                distribution_config: self.distribution_config,
                id: self.id,
                if_match: self.if_match,
            }
        }
    }
}

/// <p>This action deletes a web distribution. To delete a web distribution using the CloudFront API, perform the steps documented for disabling and then deleting a distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteDistributionInput {
    /// <p>The distribution ID.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The value of the <code>ETag</code> header that you received when you disabled the distribution. For example: <code>E2QWRUHAPOMQZL</code>.</p>
    #[serde(rename = "IfMatch", default, skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
}

impl DeleteDistributionInput {
    /// Creates a builder for `DeleteDistributionInput`.
    pub fn builder() -> delete_distribution_input::Builder {
        delete_distribution_input::Builder::default()
    }
}

/// See [`DeleteDistributionInput`](super::DeleteDistributionInput).
pub mod delete_distribution_input {

    /// A builder for [`DeleteDistributionInput`](super::DeleteDistributionInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        id: Option<String>,
        if_match: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        pub fn if_match(mut self, input: impl Into<String>) -> Self {
            self.if_match = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteDistributionInput`](super::DeleteDistributionInput).
        pub fn build(self) -> super::DeleteDistributionInput {
            super::DeleteDistributionInput {
                id: self.id,
                if_match: self.if_match,
            }
        }
    }
}

/// <p>The request to list your distributions.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListDistributionsInput {
    /// <p>Use this when paginating results to indicate where to begin in your list of distributions. The results include distributions in the list that occur after the marker. To get the next page of results, set the <code>Marker</code> to the value of the <code>NextMarker</code> from the current page's response (which is also the ID of the last distribution on that page).</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of distributions you want in the response body.</p>
    #[serde(rename = "MaxItems", default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
}

impl ListDistributionsInput {
    /// Creates a builder for `ListDistributionsInput`.
    pub fn builder() -> list_distributions_input::Builder {
        list_distributions_input::Builder::default()
    }
}

/// See [`ListDistributionsInput`](super::ListDistributionsInput).
pub mod list_distributions_input {

    /// A builder for [`ListDistributionsInput`](super::ListDistributionsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        marker: Option<String>,
        max_items: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn max_items(mut self, input: i64) -> Self {
            self.max_items = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`ListDistributionsInput`](super::ListDistributionsInput).
        pub fn build(self) -> super::ListDistributionsInput {
            super::ListDistributionsInput {
                marker: self.marker,
                max_items: self.max_items,
            }
        }
    }
}

/// <p>The request to create an invalidation.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateInvalidationInput {
    /// <p>The distribution's id.</p>
    #[serde(rename = "DistributionId", default, skip_serializing_if = "Option::is_none")]
    pub distribution_id: Option<String>,
    /// <p>The batch information for the invalidation.</p>
    #[serde(rename = "InvalidationBatch", default, skip_serializing_if = "Option::is_none")]
    pub invalidation_batch: Option<crate::model::InvalidationBatch>,
}

impl CreateInvalidationInput {
    /// Creates a builder for `CreateInvalidationInput`.
    pub fn builder() -> create_invalidation_input::Builder {
        create_invalidation_input::Builder::default()
    }
}

/// See [`CreateInvalidationInput`](super::CreateInvalidationInput).
pub mod create_invalidation_input {

    /// A builder for [`CreateInvalidationInput`](super::CreateInvalidationInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        distribution_id: Option<String>,
        invalidation_batch: Option<crate::model::InvalidationBatch>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn distribution_id(mut self, input: impl Into<String>) -> Self {
            self.distribution_id = Some(input.into());
            self
        }

        pub fn invalidation_batch(mut self, input: crate::model::InvalidationBatch) -> Self {
            self.invalidation_batch = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateInvalidationInput`](super::CreateInvalidationInput).
        pub fn build(self) -> super::CreateInvalidationInput {
            super::CreateInvalidationInput {
                distribution_id: self.distribution_id,
                invalidation_batch: self.invalidation_batch,
            }
        }
    }
}

/// <p>The request to get an invalidation's information.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetInvalidationInput {
    /// <p>The distribution's ID.</p>
    #[serde(rename = "DistributionId", default, skip_serializing_if = "Option::is_none")]
    pub distribution_id: Option<String>,
    /// <p>The identifier for the invalidation request, for example, <code>IDFDVBD632BHDS5</code>.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetInvalidationInput {
    /// Creates a builder for `GetInvalidationInput`.
    pub fn builder() -> get_invalidation_input::Builder {
        get_invalidation_input::Builder::default()
    }
}

/// See [`GetInvalidationInput`](super::GetInvalidationInput).
pub mod get_invalidation_input {

    /// A builder for [`GetInvalidationInput`](super::GetInvalidationInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        distribution_id: Option<String>,
        id: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn distribution_id(mut self, input: impl Into<String>) -> Self {
            self.distribution_id = Some(input.into());
            self
        }

        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetInvalidationInput`](super::GetInvalidationInput).
        pub fn build(self) -> super::GetInvalidationInput {
            super::GetInvalidationInput {
                distribution_id: self.distribution_id,
                id: self.id,
            }
        }
    }
}

/// <p>The request to list invalidations.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListInvalidationsInput {
    /// <p>The distribution's ID.</p>
    #[serde(rename = "DistributionId", default, skip_serializing_if = "Option::is_none")]
    pub distribution_id: Option<String>,
    /// <p>Use this parameter when paginating results to indicate where to begin in your list of invalidation batches. Because the results are returned in decreasing order from most recent to oldest, the most recent results are on the first page, the second page will contain earlier results, and so on. To get the next page of results, set <code>Marker</code> to the value of the <code>NextMarker</code> from the current page's response.</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of invalidation batches that you want in the response body.</p>
    #[serde(rename = "MaxItems", default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
}

impl ListInvalidationsInput {
    /// Creates a builder for `ListInvalidationsInput`.
    pub fn builder() -> list_invalidations_input::Builder {
        list_invalidations_input::Builder::default()
    }
}

/// See [`ListInvalidationsInput`](super::ListInvalidationsInput).
pub mod list_invalidations_input {

    /// A builder for [`ListInvalidationsInput`](super::ListInvalidationsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        distribution_id: Option<String>,
        marker: Option<String>,
        max_items: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn distribution_id(mut self, input: impl Into<String>) -> Self {
            self.distribution_id = Some(input.into());
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn max_items(mut self, input: i64) -> Self {
            self.max_items = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`ListInvalidationsInput`](super::ListInvalidationsInput).
        pub fn build(self) -> super::ListInvalidationsInput {
            super::ListInvalidationsInput {
                distribution_id: self.distribution_id,
                marker: self.marker,
                max_items: self.max_items,
            }
        }
    }
}

/// <p>The request to add tags to a CloudFront resource.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagResourceInput {
    /// <p>An ARN of a CloudFront resource.</p>
    #[serde(rename = "Resource", default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// <p>A complex type that contains zero or more <code>Tag</code> elements.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<crate::model::Tags>,
}

impl TagResourceInput {
    /// Creates a builder for `TagResourceInput`.
    pub fn builder() -> tag_resource_input::Builder {
        tag_resource_input::Builder::default()
    }
}

/// See [`TagResourceInput`](super::TagResourceInput).
pub mod tag_resource_input {

    /// A builder for [`TagResourceInput`](super::TagResourceInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource: Option<String>,
        tags: Option<crate::model::Tags>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn resource(mut self, input: impl Into<String>) -> Self {
            self.resource = Some(input.into());
            self
        }

        pub fn tags(mut self, input: crate::model::Tags) -> Self {
            self.tags = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`TagResourceInput`](super::TagResourceInput).
        pub fn build(self) -> super::TagResourceInput {
            super::TagResourceInput {
                resource: self.resource,
                tags: self.tags,
            }
        }
    }
}

/// <p>The request to remove tags from a CloudFront resource.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UntagResourceInput {
    /// <p>An ARN of a CloudFront resource.</p>
    #[serde(rename = "Resource", default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// <p>A complex type that contains zero or more <code>Tag</code> key elements.</p>
    #[serde(rename = "TagKeys", default, skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<crate::model::TagKeys>,
}

impl UntagResourceInput {
    /// Creates a builder for `UntagResourceInput`.
    pub fn builder() -> untag_resource_input::Builder {
        untag_resource_input::Builder::default()
    }
}

/// See [`UntagResourceInput`](super::UntagResourceInput).
pub mod untag_resource_input {

    /// A builder for [`UntagResourceInput`](super::UntagResourceInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource: Option<String>,
        tag_keys: Option<crate::model::TagKeys>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn resource(mut self, input: impl Into<String>) -> Self {
            self.resource = Some(input.into());
            self
        }

        pub fn tag_keys(mut self, input: crate::model::TagKeys) -> Self {
            self.tag_keys = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`UntagResourceInput`](super::UntagResourceInput).
        pub fn build(self) -> super::UntagResourceInput {
            super::UntagResourceInput {
                resource: self.resource,
                tag_keys: self.tag_keys,
            }
        }
    }
}

/// <p>The request to list tags for a CloudFront resource.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListTagsForResourceInput {
    /// <p>An ARN of a CloudFront resource.</p>
    #[serde(rename = "Resource", default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl ListTagsForResourceInput {
    /// Creates a builder for `ListTagsForResourceInput`.
    pub fn builder() -> list_tags_for_resource_input::Builder {
        list_tags_for_resource_input::Builder::default()
    }
}

/// See [`ListTagsForResourceInput`](super::ListTagsForResourceInput).
pub mod list_tags_for_resource_input {

    /// A builder for [`ListTagsForResourceInput`](super::ListTagsForResourceInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn resource(mut self, input: impl Into<String>) -> Self {
            self.resource = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`ListTagsForResourceInput`](super::ListTagsForResourceInput).
        pub fn build(self) -> super::ListTagsForResourceInput {
            super::ListTagsForResourceInput {
                resource: self.resource,
            }
        }
    }
}

impl PageableRequest for ListDistributionsInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

impl PageableRequest for ListInvalidationsInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}
