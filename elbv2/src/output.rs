/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response shapes for Elastic Load Balancing operations.
//!
//! Every output carries a [`shape_types::ResponseMetadata`] with the request
//! ID the service assigned. Outputs for paginated operations implement
//! [`shape_types::PagedOutput`] through their `NextMarker` field.

use serde::{Deserialize, Serialize};
use shape_types::PagedOutput;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateLoadBalancerOutput {
    /// <p>Information about the load balancer.</p>
    #[serde(rename = "LoadBalancers", default, skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<crate::model::LoadBalancer>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteLoadBalancerOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeLoadBalancersOutput {
    /// <p>Information about the load balancers.</p>
    #[serde(rename = "LoadBalancers", default, skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<crate::model::LoadBalancer>>,
    /// <p>If there are additional results, this is the marker for the next set of results. Otherwise, this is null.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyLoadBalancerAttributesOutput {
    /// <p>Information about the load balancer attributes.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<crate::model::LoadBalancerAttribute>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeLoadBalancerAttributesOutput {
    /// <p>Information about the load balancer attributes.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<crate::model::LoadBalancerAttribute>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetIpAddressTypeOutput {
    /// <p>The IP address type.</p>
    #[serde(rename = "IpAddressType", default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<crate::model::IpAddressType>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetSecurityGroupsOutput {
    /// <p>The IDs of the security groups associated with the load balancer.</p>
    #[serde(rename = "SecurityGroupIds", default, skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetSubnetsOutput {
    /// <p>Information about the subnets.</p>
    #[serde(rename = "AvailabilityZones", default, skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<crate::model::AvailabilityZone>>,
    /// <p>[Network Load Balancers] The IP address type.</p>
    #[serde(rename = "IpAddressType", default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<crate::model::IpAddressType>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateListenerOutput {
    /// <p>Information about the listener.</p>
    #[serde(rename = "Listeners", default, skip_serializing_if = "Option::is_none")]
    pub listeners: Option<Vec<crate::model::Listener>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyListenerOutput {
    /// <p>Information about the modified listener.</p>
    #[serde(rename = "Listeners", default, skip_serializing_if = "Option::is_none")]
    pub listeners: Option<Vec<crate::model::Listener>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteListenerOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeListenersOutput {
    /// <p>Information about the listeners.</p>
    #[serde(rename = "Listeners", default, skip_serializing_if = "Option::is_none")]
    pub listeners: Option<Vec<crate::model::Listener>>,
    /// <p>If there are additional results, this is the marker for the next set of results. Otherwise, this is null.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddListenerCertificatesOutput {
    /// <p>Information about the certificates in the certificate list.</p>
    #[serde(rename = "Certificates", default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<crate::model::Certificate>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoveListenerCertificatesOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeListenerCertificatesOutput {
    /// <p>Information about the certificates.</p>
    #[serde(rename = "Certificates", default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<crate::model::Certificate>>,
    /// <p>If there are additional results, this is the marker for the next set of results. Otherwise, this is null.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateRuleOutput {
    /// <p>Information about the rule.</p>
    #[serde(rename = "Rules", default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<crate::model::Rule>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyRuleOutput {
    /// <p>Information about the modified rule.</p>
    #[serde(rename = "Rules", default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<crate::model::Rule>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteRuleOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeRulesOutput {
    /// <p>Information about the rules.</p>
    #[serde(rename = "Rules", default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<crate::model::Rule>>,
    /// <p>If there are additional results, this is the marker for the next set of results. Otherwise, this is null.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetRulePrioritiesOutput {
    /// <p>Information about the rules.</p>
    #[serde(rename = "Rules", default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<crate::model::Rule>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTargetGroupOutput {
    /// <p>Information about the target group.</p>
    #[serde(rename = "TargetGroups", default, skip_serializing_if = "Option::is_none")]
    pub target_groups: Option<Vec<crate::model::TargetGroup>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyTargetGroupOutput {
    /// <p>Information about the modified target group.</p>
    #[serde(rename = "TargetGroups", default, skip_serializing_if = "Option::is_none")]
    pub target_groups: Option<Vec<crate::model::TargetGroup>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteTargetGroupOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeTargetGroupsOutput {
    /// <p>Information about the target groups.</p>
    #[serde(rename = "TargetGroups", default, skip_serializing_if = "Option::is_none")]
    pub target_groups: Option<Vec<crate::model::TargetGroup>>,
    /// <p>If there are additional results, this is the marker for the next set of results. Otherwise, this is null.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyTargetGroupAttributesOutput {
    /// <p>Information about the attributes.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<crate::model::TargetGroupAttribute>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeTargetGroupAttributesOutput {
    /// <p>Information about the target group attributes.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<crate::model::TargetGroupAttribute>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterTargetsOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeregisterTargetsOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeTargetHealthOutput {
    /// <p>Information about the health of the targets.</p>
    #[serde(rename = "TargetHealthDescriptions", default, skip_serializing_if = "Option::is_none")]
    pub target_health_descriptions: Option<Vec<crate::model::TargetHealthDescription>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddTagsOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoveTagsOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeTagsOutput {
    /// <p>Information about the tags.</p>
    #[serde(rename = "TagDescriptions", default, skip_serializing_if = "Option::is_none")]
    pub tag_descriptions: Option<Vec<crate::model::TagDescription>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeAccountLimitsOutput {
    /// <p>Information about the limits.</p>
    #[serde(rename = "Limits", default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<Vec<crate::model::Limit>>,
    /// <p>If there are additional results, this is the marker for the next set of results. Otherwise, this is null.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeSslPoliciesOutput {
    /// <p>Information about the security policies.</p>
    #[serde(rename = "SslPolicies", default, skip_serializing_if = "Option::is_none")]
    pub ssl_policies: Option<Vec<crate::model::SslPolicy>>,
    /// <p>If there are additional results, this is the marker for the next set of results. Otherwise, this is null.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

impl PagedOutput for DescribeLoadBalancersOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }
}

impl PagedOutput for DescribeListenersOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }
}

impl PagedOutput for DescribeListenerCertificatesOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }
}

impl PagedOutput for DescribeRulesOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }
}

impl PagedOutput for DescribeTargetGroupsOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }
}

impl PagedOutput for DescribeAccountLimitsOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }
}

impl PagedOutput for DescribeSslPoliciesOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }
}
