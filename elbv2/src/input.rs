/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request shapes for Elastic Load Balancing operations.
//!
//! Every input carries optional fields only; required-ness is enforced by the
//! service, not the client. Inputs for paginated operations implement
//! [`shape_types::PageableRequest`] through their `Marker` field.

use serde::{Deserialize, Serialize};
use shape_types::PageableRequest;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateLoadBalancerInput {
    /// <p>The name of the load balancer.</p>
    /// <p>This name must be unique per region per account, can have a maximum of 32 characters, must contain only alphanumeric characters or hyphens, must not begin or end with a hyphen, and must not begin with "internal-".</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The IDs of the public subnets. You can specify only one subnet per Availability Zone. You must specify either subnets or subnet mappings.</p>
    #[serde(rename = "Subnets", default, skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<String>>,
    /// <p>The IDs of the public subnets. You can specify only one subnet mapping per Availability Zone. You must specify either subnets or subnet mappings.</p>
    #[serde(rename = "SubnetMappings", default, skip_serializing_if = "Option::is_none")]
    pub subnet_mappings: Option<Vec<crate::model::SubnetMapping>>,
    /// <p>[Application Load Balancers] The IDs of the security groups for the load balancer.</p>
    #[serde(rename = "SecurityGroups", default, skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    /// <p>The nodes of an Internet-facing load balancer have public IP addresses. The nodes of an internal load balancer have only private IP addresses. The default is an Internet-facing load balancer.</p>
    #[serde(rename = "Scheme", default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<crate::model::LoadBalancerSchemeEnum>,
    /// <p>The tags to assign to the load balancer.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
    /// <p>The type of load balancer. The default is <code>application</code>.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<crate::model::LoadBalancerTypeEnum>,
    /// <p>The type of IP addresses used by the subnets for your load balancer. The possible values are <code>ipv4</code> (for IPv4 addresses) and <code>dualstack</code> (for IPv4 and IPv6 addresses).</p>
    #[serde(rename = "IpAddressType", default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<crate::model::IpAddressType>,
    /// <p>[Application Load Balancers on Outposts] The ID of the customer-owned address pool (CoIP pool).</p>
    #[serde(rename = "CustomerOwnedIpv4Pool", default, skip_serializing_if = "Option::is_none")]
    pub customer_owned_ipv4_pool: Option<String>,
}

impl CreateLoadBalancerInput {
    /// Creates a builder for `CreateLoadBalancerInput`.
    pub fn builder() -> create_load_balancer_input::Builder {
        create_load_balancer_input::Builder::default()
    }
}

/// See [`CreateLoadBalancerInput`](super::CreateLoadBalancerInput).
pub mod create_load_balancer_input {

    /// A builder for [`CreateLoadBalancerInput`](super::CreateLoadBalancerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        subnets: Option<Vec<String>>,
        subnet_mappings: Option<Vec<crate::model::SubnetMapping>>,
        security_groups: Option<Vec<String>>,
        scheme: Option<crate::model::LoadBalancerSchemeEnum>,
        tags: Option<Vec<crate::model::Tag>>,
        type_: Option<crate::model::LoadBalancerTypeEnum>,
        ip_address_type: Option<crate::model::IpAddressType>,
        customer_owned_ipv4_pool: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn subnets(mut self, input: Vec<String>) -> Self {
            self.subnets = Some(input);
            self
        }

        pub fn subnet_mappings(mut self, input: Vec<crate::model::SubnetMapping>) -> Self {
            self.subnet_mappings = Some(input);
            self
        }

        pub fn security_groups(mut self, input: Vec<String>) -> Self {
            self.security_groups = Some(input);
            self
        }

        pub fn scheme(mut self, input: crate::model::LoadBalancerSchemeEnum) -> Self {
            self.scheme = Some(input);
            self
        }

        pub fn tags(mut self, input: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(input);
            self
        }

        pub fn type_(mut self, input: crate::model::LoadBalancerTypeEnum) -> Self {
            self.type_ = Some(input);
            self
        }

        pub fn ip_address_type(mut self, input: crate::model::IpAddressType) -> Self {
            self.ip_address_type = Some(input);
            self
        }

        pub fn customer_owned_ipv4_pool(mut self, input: impl Into<String>) -> Self {
            self.customer_owned_ipv4_pool = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`CreateLoadBalancerInput`](super::CreateLoadBalancerInput).
        pub fn build(self) -> super::CreateLoadBalancerInput {
            super::CreateLoadBalancerInput {
                name: self.name,
                subnets: self.subnets,
                subnet_mappings: self.subnet_mappings,
                security_groups: self.security_groups,
                scheme: self.scheme,
                tags: self.tags,
                type_: self.type_,
                ip_address_type: self.ip_address_type,
                customer_owned_ipv4_pool: self.customer_owned_ipv4_pool,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteLoadBalancerInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
}

impl DeleteLoadBalancerInput {
    /// Creates a builder for `DeleteLoadBalancerInput`.
    pub fn builder() -> delete_load_balancer_input::Builder {
        delete_load_balancer_input::Builder::default()
    }
}

/// See [`DeleteLoadBalancerInput`](super::DeleteLoadBalancerInput).
pub mod delete_load_balancer_input {

    /// A builder for [`DeleteLoadBalancerInput`](super::DeleteLoadBalancerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteLoadBalancerInput`](super::DeleteLoadBalancerInput).
        pub fn build(self) -> super::DeleteLoadBalancerInput {
            super::DeleteLoadBalancerInput {
                load_balancer_arn: self.load_balancer_arn,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeLoadBalancersInput {
    /// <p>The Amazon Resource Names (ARN) of the load balancers. You can specify up to 20 load balancers in a single call.</p>
    #[serde(rename = "LoadBalancerArns", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arns: Option<Vec<String>>,
    /// <p>The names of the load balancers.</p>
    #[serde(rename = "Names", default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    /// <p>The marker for the next set of results. (You received this marker from a previous call.)</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of results to return with this call.</p>
    #[serde(rename = "PageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl DescribeLoadBalancersInput {
    /// Creates a builder for `DescribeLoadBalancersInput`.
    pub fn builder() -> describe_load_balancers_input::Builder {
        describe_load_balancers_input::Builder::default()
    }
}

/// See [`DescribeLoadBalancersInput`](super::DescribeLoadBalancersInput).
pub mod describe_load_balancers_input {

    /// A builder for [`DescribeLoadBalancersInput`](super::DescribeLoadBalancersInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arns: Option<Vec<String>>,
        names: Option<Vec<String>>,
        marker: Option<String>,
        page_size: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arns(mut self, input: Vec<String>) -> Self {
            self.load_balancer_arns = Some(input);
            self
        }

        pub fn names(mut self, input: Vec<String>) -> Self {
            self.names = Some(input);
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn page_size(mut self, input: i64) -> Self {
            self.page_size = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeLoadBalancersInput`](super::DescribeLoadBalancersInput).
        pub fn build(self) -> super::DescribeLoadBalancersInput {
            super::DescribeLoadBalancersInput {
                load_balancer_arns: self.load_balancer_arns,
                names: self.names,
                marker: self.marker,
                page_size: self.page_size,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyLoadBalancerAttributesInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The load balancer attributes.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<crate::model::LoadBalancerAttribute>>,
}

impl ModifyLoadBalancerAttributesInput {
    /// Creates a builder for `ModifyLoadBalancerAttributesInput`.
    pub fn builder() -> modify_load_balancer_attributes_input::Builder {
        modify_load_balancer_attributes_input::Builder::default()
    }
}

/// See [`ModifyLoadBalancerAttributesInput`](super::ModifyLoadBalancerAttributesInput).
pub mod modify_load_balancer_attributes_input {

    /// A builder for [`ModifyLoadBalancerAttributesInput`](super::ModifyLoadBalancerAttributesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
        attributes: Option<Vec<crate::model::LoadBalancerAttribute>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        pub fn attributes(mut self, input: Vec<crate::model::LoadBalancerAttribute>) -> Self {
            self.attributes = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`ModifyLoadBalancerAttributesInput`](super::ModifyLoadBalancerAttributesInput).
        pub fn build(self) -> super::ModifyLoadBalancerAttributesInput {
            super::ModifyLoadBalancerAttributesInput {
                load_balancer_arn: self.load_balancer_arn,
                attributes: self.attributes,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeLoadBalancerAttributesInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
}

impl DescribeLoadBalancerAttributesInput {
    /// Creates a builder for `DescribeLoadBalancerAttributesInput`.
    pub fn builder() -> describe_load_balancer_attributes_input::Builder {
        describe_load_balancer_attributes_input::Builder::default()
    }
}

/// See [`DescribeLoadBalancerAttributesInput`](super::DescribeLoadBalancerAttributesInput).
pub mod describe_load_balancer_attributes_input {

    /// A builder for [`DescribeLoadBalancerAttributesInput`](super::DescribeLoadBalancerAttributesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DescribeLoadBalancerAttributesInput`](super::DescribeLoadBalancerAttributesInput).
        pub fn build(self) -> super::DescribeLoadBalancerAttributesInput {
            super::DescribeLoadBalancerAttributesInput {
                load_balancer_arn: self.load_balancer_arn,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetIpAddressTypeInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The IP address type. The possible values are <code>ipv4</code> (for IPv4 addresses) and <code>dualstack</code> (for IPv4 and IPv6 addresses). Internal load balancers must use <code>ipv4</code>.</p>
    #[serde(rename = "IpAddressType", default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<crate::model::IpAddressType>,
}

impl SetIpAddressTypeInput {
    /// Creates a builder for `SetIpAddressTypeInput`.
    pub fn builder() -> set_ip_address_type_input::Builder {
        set_ip_address_type_input::Builder::default()
    }
}

/// See [`SetIpAddressTypeInput`](super::SetIpAddressTypeInput).
pub mod set_ip_address_type_input {

    /// A builder for [`SetIpAddressTypeInput`](super::SetIpAddressTypeInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
        ip_address_type: Option<crate::model::IpAddressType>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        pub fn ip_address_type(mut self, input: crate::model::IpAddressType) -> Self {
            self.ip_address_type = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`SetIpAddressTypeInput`](super::SetIpAddressTypeInput).
        pub fn build(self) -> super::SetIpAddressTypeInput {
            super::SetIpAddressTypeInput {
                load_balancer_arn: self.load_balancer_arn,
                ip_address_type: self.ip_address_type,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetSecurityGroupsInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The IDs of the security groups.</p>
    #[serde(rename = "SecurityGroups", default, skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
}

impl SetSecurityGroupsInput {
    /// Creates a builder for `SetSecurityGroupsInput`.
    pub fn builder() -> set_security_groups_input::Builder {
        set_security_groups_input::Builder::default()
    }
}

/// See [`SetSecurityGroupsInput`](super::SetSecurityGroupsInput).
pub mod set_security_groups_input {

    /// A builder for [`SetSecurityGroupsInput`](super::SetSecurityGroupsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
        security_groups: Option<Vec<String>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        pub fn security_groups(mut self, input: Vec<String>) -> Self {
            self.security_groups = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`SetSecurityGroupsInput`](super::SetSecurityGroupsInput).
        pub fn build(self) -> super::SetSecurityGroupsInput {
            super::SetSecurityGroupsInput {
                load_balancer_arn: self.load_balancer_arn,
                security_groups: self.security_groups,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetSubnetsInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The IDs of the public subnets. You can specify only one subnet per Availability Zone. You must specify either subnets or subnet mappings.</p>
    #[serde(rename = "Subnets", default, skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<String>>,
    /// <p>The IDs of the public subnets. You can specify only one subnet mapping per Availability Zone. You must specify either subnets or subnet mappings.</p>
    #[serde(rename = "SubnetMappings", default, skip_serializing_if = "Option::is_none")]
    pub subnet_mappings: Option<Vec<crate::model::SubnetMapping>>,
    /// <p>[Network Load Balancers] The type of IP addresses used by the subnets for your load balancer.</p>
    #[serde(rename = "IpAddressType", default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<crate::model::IpAddressType>,
}

impl SetSubnetsInput {
    /// Creates a builder for `SetSubnetsInput`.
    pub fn builder() -> set_subnets_input::Builder {
        set_subnets_input::Builder::default()
    }
}

/// See [`SetSubnetsInput`](super::SetSubnetsInput).
pub mod set_subnets_input {

    /// A builder for [`SetSubnetsInput`](super::SetSubnetsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
        subnets: Option<Vec<String>>,
        subnet_mappings: Option<Vec<crate::model::SubnetMapping>>,
        ip_address_type: Option<crate::model::IpAddressType>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        pub fn subnets(mut self, input: Vec<String>) -> Self {
            self.subnets = Some(input);
            self
        }

        pub fn subnet_mappings(mut self, input: Vec<crate::model::SubnetMapping>) -> Self {
            self.subnet_mappings = Some(input);
            self
        }

        pub fn ip_address_type(mut self, input: crate::model::IpAddressType) -> Self {
            self.ip_address_type = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`SetSubnetsInput`](super::SetSubnetsInput).
        pub fn build(self) -> super::SetSubnetsInput {
            super::SetSubnetsInput {
                load_balancer_arn: self.load_balancer_arn,
                subnets: self.subnets,
                subnet_mappings: self.subnet_mappings,
                ip_address_type: self.ip_address_type,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateListenerInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The protocol for connections from clients to the load balancer. For Application Load Balancers, the supported protocols are HTTP and HTTPS. For Network Load Balancers, the supported protocols are TCP, TLS, UDP, and TCP_UDP. You cannot specify a protocol for a Gateway Load Balancer.</p>
    #[serde(rename = "Protocol", default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<crate::model::ProtocolEnum>,
    /// <p>The port on which the load balancer is listening. You cannot specify a port for a Gateway Load Balancer.</p>
    #[serde(rename = "Port", default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// <p>[HTTPS and TLS listeners] The security policy that defines which protocols and ciphers are supported.</p>
    #[serde(rename = "SslPolicy", default, skip_serializing_if = "Option::is_none")]
    pub ssl_policy: Option<String>,
    /// <p>[HTTPS and TLS listeners] The default certificate for the listener. You must provide exactly one certificate. Set <code>CertificateArn</code> to the certificate ARN but do not set <code>IsDefault</code>.</p>
    #[serde(rename = "Certificates", default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<crate::model::Certificate>>,
    /// <p>The actions for the default rule.</p>
    #[serde(rename = "DefaultActions", default, skip_serializing_if = "Option::is_none")]
    pub default_actions: Option<Vec<crate::model::Action>>,
    /// <p>[TLS listeners] The name of the Application-Layer Protocol Negotiation (ALPN) policy.</p>
    #[serde(rename = "AlpnPolicy", default, skip_serializing_if = "Option::is_none")]
    pub alpn_policy: Option<Vec<String>>,
    /// <p>The tags to assign to the listener.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}

impl CreateListenerInput {
    /// Creates a builder for `CreateListenerInput`.
    pub fn builder() -> create_listener_input::Builder {
        create_listener_input::Builder::default()
    }
}

/// See [`CreateListenerInput`](super::CreateListenerInput).
pub mod create_listener_input {

    /// A builder for [`CreateListenerInput`](super::CreateListenerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
        protocol: Option<crate::model::ProtocolEnum>,
        port: Option<i64>,
        ssl_policy: Option<String>,
        certificates: Option<Vec<crate::model::Certificate>>,
        default_actions: Option<Vec<crate::model::Action>>,
        alpn_policy: Option<Vec<String>>,
        tags: Option<Vec<crate::model::Tag>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        pub fn protocol(mut self, input: crate::model::ProtocolEnum) -> Self {
            self.protocol = Some(input);
            self
        }

        pub fn port(mut self, input: i64) -> Self {
            self.port = Some(input);
            self
        }

        pub fn ssl_policy(mut self, input: impl Into<String>) -> Self {
            self.ssl_policy = Some(input.into());
            self
        }

        pub fn certificates(mut self, input: Vec<crate::model::Certificate>) -> Self {
            self.certificates = Some(input);
            self
        }

        pub fn default_actions(mut self, input: Vec<crate::model::Action>) -> Self {
            self.default_actions = Some(input);
            self
        }

        pub fn alpn_policy(mut self, input: Vec<String>) -> Self {
            self.alpn_policy = Some(input);
            self
        }

        pub fn tags(mut self, input: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateListenerInput`](super::CreateListenerInput).
        pub fn build(self) -> super::CreateListenerInput {
            super::CreateListenerInput {
                load_balancer_arn: self.load_balancer_arn,
                protocol: self.protocol,
                port: self.port,
                ssl_policy: self.ssl_policy,
                certificates: self.certificates,
                default_actions: self.default_actions,
                alpn_policy: self.alpn_policy,
                tags: self.tags,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyListenerInput {
    /// <p>The Amazon Resource Name (ARN) of the listener.</p>
    #[serde(rename = "ListenerArn", default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
    /// <p>The port for connections from clients to the load balancer. You cannot specify a port for a Gateway Load Balancer.</p>
    #[serde(rename = "Port", default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// <p>The protocol for connections from clients to the load balancer. You cannot change the protocol to UDP or TCP_UDP if dual-stack mode is enabled. You cannot specify a protocol for a Gateway Load Balancer.</p>
    #[serde(rename = "Protocol", default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<crate::model::ProtocolEnum>,
    /// <p>[HTTPS and TLS listeners] The security policy that defines which protocols and ciphers are supported.</p>
    #[serde(rename = "SslPolicy", default, skip_serializing_if = "Option::is_none")]
    pub ssl_policy: Option<String>,
    /// <p>[HTTPS and TLS listeners] The default certificate for the listener. You must provide exactly one certificate. Set <code>CertificateArn</code> to the certificate ARN but do not set <code>IsDefault</code>.</p>
    #[serde(rename = "Certificates", default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<crate::model::Certificate>>,
    /// <p>The actions for the default rule.</p>
    #[serde(rename = "DefaultActions", default, skip_serializing_if = "Option::is_none")]
    pub default_actions: Option<Vec<crate::model::Action>>,
    /// <p>[TLS listeners] The name of the Application-Layer Protocol Negotiation (ALPN) policy.</p>
    #[serde(rename = "AlpnPolicy", default, skip_serializing_if = "Option::is_none")]
    pub alpn_policy: Option<Vec<String>>,
}

impl ModifyListenerInput {
    /// Creates a builder for `ModifyListenerInput`.
    pub fn builder() -> modify_listener_input::Builder {
        modify_listener_input::Builder::default()
    }
}

/// See [`ModifyListenerInput`](super::ModifyListenerInput).
pub mod modify_listener_input {

    /// A builder for [`ModifyListenerInput`](super::ModifyListenerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        listener_arn: Option<String>,
        port: Option<i64>,
        protocol: Option<crate::model::ProtocolEnum>,
        ssl_policy: Option<String>,
        certificates: Option<Vec<crate::model::Certificate>>,
        default_actions: Option<Vec<crate::model::Action>>,
        alpn_policy: Option<Vec<String>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn listener_arn(mut self, input: impl Into<String>) -> Self {
            self.listener_arn = Some(input.into());
            self
        }

        pub fn port(mut self, input: i64) -> Self {
            self.port = Some(input);
            self
        }

        pub fn protocol(mut self, input: crate::model::ProtocolEnum) -> Self {
            self.protocol = Some(input);
            self
        }

        pub fn ssl_policy(mut self, input: impl Into<String>) -> Self {
            self.ssl_policy = Some(input.into());
            self
        }

        pub fn certificates(mut self, input: Vec<crate::model::Certificate>) -> Self {
            self.certificates = Some(input);
            self
        }

        pub fn default_actions(mut self, input: Vec<crate::model::Action>) -> Self {
            self.default_actions = Some(input);
            self
        }

        pub fn alpn_policy(mut self, input: Vec<String>) -> Self {
            self.alpn_policy = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`ModifyListenerInput`](super::ModifyListenerInput).
        pub fn build(self) -> super::ModifyListenerInput {
            super::ModifyListenerInput {
                listener_arn: self.listener_arn,
                port: self.port,
                protocol: self.protocol,
                ssl_policy: self.ssl_policy,
                certificates: self.certificates,
                default_actions: self.default_actions,
                alpn_policy: self.alpn_policy,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteListenerInput {
    /// <p>The Amazon Resource Name (ARN) of the listener.</p>
    #[serde(rename = "ListenerArn", default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
}

impl DeleteListenerInput {
    /// Creates a builder for `DeleteListenerInput`.
    pub fn builder() -> delete_listener_input::Builder {
        delete_listener_input::Builder::default()
    }
}

/// See [`DeleteListenerInput`](super::DeleteListenerInput).
pub mod delete_listener_input {

    /// A builder for [`DeleteListenerInput`](super::DeleteListenerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        listener_arn: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn listener_arn(mut self, input: impl Into<String>) -> Self {
            self.listener_arn = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteListenerInput`](super::DeleteListenerInput).
        pub fn build(self) -> super::DeleteListenerInput {
            super::DeleteListenerInput {
                listener_arn: self.listener_arn,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeListenersInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The Amazon Resource Names (ARN) of the listeners.</p>
    #[serde(rename = "ListenerArns", default, skip_serializing_if = "Option::is_none")]
    pub listener_arns: Option<Vec<String>>,
    /// <p>The marker for the next set of results. (You received this marker from a previous call.)</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of results to return with this call.</p>
    #[serde(rename = "PageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl DescribeListenersInput {
    /// Creates a builder for `DescribeListenersInput`.
    pub fn builder() -> describe_listeners_input::Builder {
        describe_listeners_input::Builder::default()
    }
}

/// See [`DescribeListenersInput`](super::DescribeListenersInput).
pub mod describe_listeners_input {

    /// A builder for [`DescribeListenersInput`](super::DescribeListenersInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
        listener_arns: Option<Vec<String>>,
        marker: Option<String>,
        page_size: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        pub fn listener_arns(mut self, input: Vec<String>) -> Self {
            self.listener_arns = Some(input);
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn page_size(mut self, input: i64) -> Self {
            self.page_size = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeListenersInput`](super::DescribeListenersInput).
        pub fn build(self) -> super::DescribeListenersInput {
            super::DescribeListenersInput {
                load_balancer_arn: self.load_balancer_arn,
                listener_arns: self.listener_arns,
                marker: self.marker,
                page_size: self.page_size,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddListenerCertificatesInput {
    /// <p>The Amazon Resource Name (ARN) of the listener.</p>
    #[serde(rename = "ListenerArn", default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
    /// <p>The certificate to add. You can specify one certificate per call. Set <code>CertificateArn</code> to the certificate ARN but do not set <code>IsDefault</code>.</p>
    #[serde(rename = "Certificates", default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<crate::model::Certificate>>,
}

impl AddListenerCertificatesInput {
    /// Creates a builder for `AddListenerCertificatesInput`.
    pub fn builder() -> add_listener_certificates_input::Builder {
        add_listener_certificates_input::Builder::default()
    }
}

/// See [`AddListenerCertificatesInput`](super::AddListenerCertificatesInput).
pub mod add_listener_certificates_input {

    /// A builder for [`AddListenerCertificatesInput`](super::AddListenerCertificatesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        listener_arn: Option<String>,
        certificates: Option<Vec<crate::model::Certificate>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn listener_arn(mut self, input: impl Into<String>) -> Self {
            self.listener_arn = Some(input.into());
            self
        }

        pub fn certificates(mut self, input: Vec<crate::model::Certificate>) -> Self {
            self.certificates = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`AddListenerCertificatesInput`](super::AddListenerCertificatesInput).
        pub fn build(self) -> super::AddListenerCertificatesInput {
            super::AddListenerCertificatesInput {
                listener_arn: self.listener_arn,
                certificates: self.certificates,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoveListenerCertificatesInput {
    /// <p>The Amazon Resource Name (ARN) of the listener.</p>
    #[serde(rename = "ListenerArn", default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
    /// <p>The certificate to remove. You can specify one certificate per call. Set <code>CertificateArn</code> to the certificate ARN but do not set <code>IsDefault</code>.</p>
    #[serde(rename = "Certificates", default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<crate::model::Certificate>>,
}

impl RemoveListenerCertificatesInput {
    /// Creates a builder for `RemoveListenerCertificatesInput`.
    pub fn builder() -> remove_listener_certificates_input::Builder {
        remove_listener_certificates_input::Builder::default()
    }
}

/// See [`RemoveListenerCertificatesInput`](super::RemoveListenerCertificatesInput).
pub mod remove_listener_certificates_input {

    /// A builder for [`RemoveListenerCertificatesInput`](super::RemoveListenerCertificatesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        listener_arn: Option<String>,
        certificates: Option<Vec<crate::model::Certificate>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn listener_arn(mut self, input: impl Into<String>) -> Self {
            self.listener_arn = Some(input.into());
            self
        }

        pub fn certificates(mut self, input: Vec<crate::model::Certificate>) -> Self {
            self.certificates = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`RemoveListenerCertificatesInput`](super::RemoveListenerCertificatesInput).
        pub fn build(self) -> super::RemoveListenerCertificatesInput {
            super::RemoveListenerCertificatesInput {
                listener_arn: self.listener_arn,
                certificates: self.certificates,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeListenerCertificatesInput {
    /// <p>The Amazon Resource Names (ARN) of the listener.</p>
    #[serde(rename = "ListenerArn", default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
    /// <p>The marker for the next set of results. (You received this marker from a previous call.)</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of results to return with this call.</p>
    #[serde(rename = "PageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl DescribeListenerCertificatesInput {
    /// Creates a builder for `DescribeListenerCertificatesInput`.
    pub fn builder() -> describe_listener_certificates_input::Builder {
        describe_listener_certificates_input::Builder::default()
    }
}

/// See [`DescribeListenerCertificatesInput`](super::DescribeListenerCertificatesInput).
pub mod describe_listener_certificates_input {

    /// A builder for [`DescribeListenerCertificatesInput`](super::DescribeListenerCertificatesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        listener_arn: Option<String>,
        marker: Option<String>,
        page_size: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn listener_arn(mut self, input: impl Into<String>) -> Self {
            self.listener_arn = Some(input.into());
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn page_size(mut self, input: i64) -> Self {
            self.page_size = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeListenerCertificatesInput`](super::DescribeListenerCertificatesInput).
        pub fn build(self) -> super::DescribeListenerCertificatesInput {
            super::DescribeListenerCertificatesInput {
                listener_arn: self.listener_arn,
                marker: self.marker,
                page_size: self.page_size,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateRuleInput {
    /// <p>The Amazon Resource Name (ARN) of the listener.</p>
    #[serde(rename = "ListenerArn", default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
    /// <p>The conditions.</p>
    #[serde(rename = "Conditions", default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<crate::model::RuleCondition>>,
    /// <p>The rule priority. A listener can't have multiple rules with the same priority.</p>
    #[serde(rename = "Priority", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// <p>The actions.</p>
    #[serde(rename = "Actions", default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<crate::model::Action>>,
    /// <p>The tags to assign to the rule.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}

impl CreateRuleInput {
    /// Creates a builder for `CreateRuleInput`.
    pub fn builder() -> create_rule_input::Builder {
        create_rule_input::Builder::default()
    }
}

/// See [`CreateRuleInput`](super::CreateRuleInput).
pub mod create_rule_input {

    /// A builder for [`CreateRuleInput`](super::CreateRuleInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        listener_arn: Option<String>,
        conditions: Option<Vec<crate::model::RuleCondition>>,
        priority: Option<i64>,
        actions: Option<Vec<crate::model::Action>>,
        tags: Option<Vec<crate::model::Tag>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn listener_arn(mut self, input: impl Into<String>) -> Self {
            self.listener_arn = Some(input.into());
            self
        }

        pub fn conditions(mut self, input: Vec<crate::model::RuleCondition>) -> Self {
            self.conditions = Some(input);
            self
        }

        pub fn priority(mut self, input: i64) -> Self {
            self.priority = Some(input);
            self
        }

        pub fn actions(mut self, input: Vec<crate::model::Action>) -> Self {
            self.actions = Some(input);
            self
        }

        pub fn tags(mut self, input: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateRuleInput`](super::CreateRuleInput).
        pub fn build(self) -> super::CreateRuleInput {
            super::CreateRuleInput {
                listener_arn: self.listener_arn,
                conditions: self.conditions,
                priority: self.priority,
                actions: self.actions,
                tags: self.tags,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyRuleInput {
    /// <p>The Amazon Resource Name (ARN) of the rule.</p>
    #[serde(rename = "RuleArn", default, skip_serializing_if = "Option::is_none")]
    pub rule_arn: Option<String>,
    /// <p>The conditions.</p>
    #[serde(rename = "Conditions", default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<crate::model::RuleCondition>>,
    /// <p>The actions.</p>
    #[serde(rename = "Actions", default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<crate::model::Action>>,
}

impl ModifyRuleInput {
    /// Creates a builder for `ModifyRuleInput`.
    pub fn builder() -> modify_rule_input::Builder {
        modify_rule_input::Builder::default()
    }
}

/// See [`ModifyRuleInput`](super::ModifyRuleInput).
pub mod modify_rule_input {

    /// A builder for [`ModifyRuleInput`](super::ModifyRuleInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        rule_arn: Option<String>,
        conditions: Option<Vec<crate::model::RuleCondition>>,
        actions: Option<Vec<crate::model::Action>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn rule_arn(mut self, input: impl Into<String>) -> Self {
            self.rule_arn = Some(input.into());
            self
        }

        pub fn conditions(mut self, input: Vec<crate::model::RuleCondition>) -> Self {
            self.conditions = Some(input);
            self
        }

        pub fn actions(mut self, input: Vec<crate::model::Action>) -> Self {
            self.actions = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`ModifyRuleInput`](super::ModifyRuleInput).
        pub fn build(self) -> super::ModifyRuleInput {
            super::ModifyRuleInput {
                rule_arn: self.rule_arn,
                conditions: self.conditions,
                actions: self.actions,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteRuleInput {
    /// <p>The Amazon Resource Name (ARN) of the rule.</p>
    #[serde(rename = "RuleArn", default, skip_serializing_if = "Option::is_none")]
    pub rule_arn: Option<String>,
}

impl DeleteRuleInput {
    /// Creates a builder for `DeleteRuleInput`.
    pub fn builder() -> delete_rule_input::Builder {
        delete_rule_input::Builder::default()
    }
}

/// See [`DeleteRuleInput`](super::DeleteRuleInput).
pub mod delete_rule_input {

    /// A builder for [`DeleteRuleInput`](super::DeleteRuleInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        rule_arn: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn rule_arn(mut self, input: impl Into<String>) -> Self {
            self.rule_arn = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteRuleInput`](super::DeleteRuleInput).
        pub fn build(self) -> super::DeleteRuleInput {
            super::DeleteRuleInput {
                rule_arn: self.rule_arn,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeRulesInput {
    /// <p>The Amazon Resource Name (ARN) of the listener.</p>
    #[serde(rename = "ListenerArn", default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
    /// <p>The Amazon Resource Names (ARN) of the rules.</p>
    #[serde(rename = "RuleArns", default, skip_serializing_if = "Option::is_none")]
    pub rule_arns: Option<Vec<String>>,
    /// <p>The marker for the next set of results. (You received this marker from a previous call.)</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of results to return with this call.</p>
    #[serde(rename = "PageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl DescribeRulesInput {
    /// Creates a builder for `DescribeRulesInput`.
    pub fn builder() -> describe_rules_input::Builder {
        describe_rules_input::Builder::default()
    }
}

/// See [`DescribeRulesInput`](super::DescribeRulesInput).
pub mod describe_rules_input {

    /// A builder for [`DescribeRulesInput`](super::DescribeRulesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        listener_arn: Option<String>,
        rule_arns: Option<Vec<String>>,
        marker: Option<String>,
        page_size: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn listener_arn(mut self, input: impl Into<String>) -> Self {
            self.listener_arn = Some(input.into());
            self
        }

        pub fn rule_arns(mut self, input: Vec<String>) -> Self {
            self.rule_arns = Some(input);
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn page_size(mut self, input: i64) -> Self {
            self.page_size = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeRulesInput`](super::DescribeRulesInput).
        pub fn build(self) -> super::DescribeRulesInput {
            super::DescribeRulesInput {
                listener_arn: self.listener_arn,
                rule_arns: self.rule_arns,
                marker: self.marker,
                page_size: self.page_size,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SetRulePrioritiesInput {
    /// <p>The rule priorities.</p>
    #[serde(rename = "RulePriorities", default, skip_serializing_if = "Option::is_none")]
    pub rule_priorities: Option<Vec<crate::model::RulePriorityPair>>,
}

impl SetRulePrioritiesInput {
    /// Creates a builder for `SetRulePrioritiesInput`.
    pub fn builder() -> set_rule_priorities_input::Builder {
        set_rule_priorities_input::Builder::default()
    }
}

/// See [`SetRulePrioritiesInput`](super::SetRulePrioritiesInput).
pub mod set_rule_priorities_input {

    /// A builder for [`SetRulePrioritiesInput`](super::SetRulePrioritiesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        rule_priorities: Option<Vec<crate::model::RulePriorityPair>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn rule_priorities(mut self, input: Vec<crate::model::RulePriorityPair>) -> Self {
            self.rule_priorities = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`SetRulePrioritiesInput`](super::SetRulePrioritiesInput).
        pub fn build(self) -> super::SetRulePrioritiesInput {
            super::SetRulePrioritiesInput {
                rule_priorities: self.rule_priorities,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTargetGroupInput {
    /// <p>The name of the target group.</p>
    /// <p>This name must be unique per region per account, can have a maximum of 32 characters, must contain only alphanumeric characters or hyphens, and must not begin or end with a hyphen.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The protocol to use for routing traffic to the targets. For Application Load Balancers, the supported protocols are HTTP and HTTPS. For Network Load Balancers, the supported protocols are TCP, TLS, UDP, or TCP_UDP. For Gateway Load Balancers, the supported protocol is GENEVE. If the target is a Lambda function, this parameter does not apply.</p>
    #[serde(rename = "Protocol", default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<crate::model::ProtocolEnum>,
    /// <p>[HTTP/HTTPS protocol] The protocol version. Specify <code>GRPC</code> to send requests to targets using gRPC. Specify <code>HTTP2</code> to send requests to targets using HTTP/2. The default is <code>HTTP1</code>, which sends requests to targets using HTTP/1.1.</p>
    #[serde(rename = "ProtocolVersion", default, skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<String>,
    /// <p>The port on which the targets receive traffic. This port is used unless you specify a port override when registering the target. If the target is a Lambda function, this parameter does not apply. If the protocol is GENEVE, the supported port is 6081.</p>
    #[serde(rename = "Port", default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// <p>The identifier of the virtual private cloud (VPC). If the target is a Lambda function, this parameter does not apply. Otherwise, this parameter is required.</p>
    #[serde(rename = "VpcId", default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// <p>The protocol the load balancer uses when performing health checks on targets. The GENEVE, TLS, UDP, and TCP_UDP protocols are not supported for health checks.</p>
    #[serde(rename = "HealthCheckProtocol", default, skip_serializing_if = "Option::is_none")]
    pub health_check_protocol: Option<crate::model::ProtocolEnum>,
    /// <p>The port the load balancer uses when performing health checks on targets. The default is <code>traffic-port</code>, which is the port on which each target receives traffic from the load balancer.</p>
    #[serde(rename = "HealthCheckPort", default, skip_serializing_if = "Option::is_none")]
    pub health_check_port: Option<String>,
    /// <p>Indicates whether health checks are enabled. If the target type is <code>lambda</code>, health checks are disabled by default but can be enabled. Otherwise, health checks are always enabled and cannot be disabled.</p>
    #[serde(rename = "HealthCheckEnabled", default, skip_serializing_if = "Option::is_none")]
    pub health_check_enabled: Option<bool>,
    /// <p>[HTTP/HTTPS health checks] The destination for health checks on the targets.</p>
    #[serde(rename = "HealthCheckPath", default, skip_serializing_if = "Option::is_none")]
    pub health_check_path: Option<String>,
    /// <p>The approximate amount of time, in seconds, between health checks of an individual target.</p>
    #[serde(rename = "HealthCheckIntervalSeconds", default, skip_serializing_if = "Option::is_none")]
    pub health_check_interval_seconds: Option<i64>,
    /// <p>The amount of time, in seconds, during which no response from a target means a failed health check.</p>
    #[serde(rename = "HealthCheckTimeoutSeconds", default, skip_serializing_if = "Option::is_none")]
    pub health_check_timeout_seconds: Option<i64>,
    /// <p>The number of consecutive health checks successes required before considering an unhealthy target healthy.</p>
    #[serde(rename = "HealthyThresholdCount", default, skip_serializing_if = "Option::is_none")]
    pub healthy_threshold_count: Option<i64>,
    /// <p>The number of consecutive health check failures required before considering a target unhealthy.</p>
    #[serde(rename = "UnhealthyThresholdCount", default, skip_serializing_if = "Option::is_none")]
    pub unhealthy_threshold_count: Option<i64>,
    /// <p>[HTTP/HTTPS health checks] The HTTP or gRPC codes to use when checking for a successful response from a target.</p>
    #[serde(rename = "Matcher", default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<crate::model::Matcher>,
    /// <p>The type of target that you must specify when registering targets with this target group. You can't specify targets for a target group using more than one target type.</p>
    #[serde(rename = "TargetType", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<crate::model::TargetTypeEnum>,
    /// <p>The tags to assign to the target group.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}

impl CreateTargetGroupInput {
    /// Creates a builder for `CreateTargetGroupInput`.
    pub fn builder() -> create_target_group_input::Builder {
        create_target_group_input::Builder::default()
    }
}

/// See [`CreateTargetGroupInput`](super::CreateTargetGroupInput).
pub mod create_target_group_input {

    /// A builder for [`CreateTargetGroupInput`](super::CreateTargetGroupInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        protocol: Option<crate::model::ProtocolEnum>,
        protocol_version: Option<String>,
        port: Option<i64>,
        vpc_id: Option<String>,
        health_check_protocol: Option<crate::model::ProtocolEnum>,
        health_check_port: Option<String>,
        health_check_enabled: Option<bool>,
        health_check_path: Option<String>,
        health_check_interval_seconds: Option<i64>,
        health_check_timeout_seconds: Option<i64>,
        healthy_threshold_count: Option<i64>,
        unhealthy_threshold_count: Option<i64>,
        matcher: Option<crate::model::Matcher>,
        target_type: Option<crate::model::TargetTypeEnum>,
        tags: Option<Vec<crate::model::Tag>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn protocol(mut self, input: crate::model::ProtocolEnum) -> Self {
            self.protocol = Some(input);
            self
        }

        pub fn protocol_version(mut self, input: impl Into<String>) -> Self {
            self.protocol_version = Some(input.into());
            self
        }

        pub fn port(mut self, input: i64) -> Self {
            self.port = Some(input);
            self
        }

        pub fn vpc_id(mut self, input: impl Into<String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }

        pub fn health_check_protocol(mut self, input: crate::model::ProtocolEnum) -> Self {
            self.health_check_protocol = Some(input);
            self
        }

        pub fn health_check_port(mut self, input: impl Into<String>) -> Self {
            self.health_check_port = Some(input.into());
            self
        }

        pub fn health_check_enabled(mut self, input: bool) -> Self {
            self.health_check_enabled = Some(input);
            self
        }

        pub fn health_check_path(mut self, input: impl Into<String>) -> Self {
            self.health_check_path = Some(input.into());
            self
        }

        pub fn health_check_interval_seconds(mut self, input: i64) -> Self {
            self.health_check_interval_seconds = Some(input);
            self
        }

        pub fn health_check_timeout_seconds(mut self, input: i64) -> Self {
            self.health_check_timeout_seconds = Some(input);
            self
        }

        pub fn healthy_threshold_count(mut self, input: i64) -> Self {
            self.healthy_threshold_count = Some(input);
            self
        }

        pub fn unhealthy_threshold_count(mut self, input: i64) -> Self {
            self.unhealthy_threshold_count = Some(input);
            self
        }

        pub fn matcher(mut self, input: crate::model::Matcher) -> Self {
            self.matcher = Some(input);
            self
        }

        pub fn target_type(mut self, input: crate::model::TargetTypeEnum) -> Self {
            self.target_type = Some(input);
            self
        }

        pub fn tags(mut self, input: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateTargetGroupInput`](super::CreateTargetGroupInput).
        pub fn build(self) -> super::CreateTargetGroupInput {
            super::CreateTargetGroupInput {
                name: self.name,
                protocol: self.protocol,
                protocol_version: self.protocol_version,
                port: self.port,
                vpc_id: self.vpc_id,
                health_check_protocol: self.health_check_protocol,
                health_check_port: self.health_check_port,
                health_check_enabled: self.health_check_enabled,
                health_check_path: self.health_check_path,
                health_check_interval_seconds: self.health_check_interval_seconds,
                health_check_timeout_seconds: self.health_check_timeout_seconds,
                healthy_threshold_count: self.healthy_threshold_count,
                unhealthy_threshold_count: self.unhealthy_threshold_count,
                matcher: self.matcher,
                target_type: self.target_type,
                tags: self.tags,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyTargetGroupInput {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// <p>The protocol the load balancer uses when performing health checks on targets. The GENEVE, TLS, UDP, and TCP_UDP protocols are not supported for health checks.</p>
    #[serde(rename = "HealthCheckProtocol", default, skip_serializing_if = "Option::is_none")]
    pub health_check_protocol: Option<crate::model::ProtocolEnum>,
    /// <p>The port the load balancer uses when performing health checks on targets.</p>
    #[serde(rename = "HealthCheckPort", default, skip_serializing_if = "Option::is_none")]
    pub health_check_port: Option<String>,
    /// <p>[HTTP/HTTPS health checks] The destination for health checks on the targets.</p>
    #[serde(rename = "HealthCheckPath", default, skip_serializing_if = "Option::is_none")]
    pub health_check_path: Option<String>,
    /// <p>Indicates whether health checks are enabled.</p>
    #[serde(rename = "HealthCheckEnabled", default, skip_serializing_if = "Option::is_none")]
    pub health_check_enabled: Option<bool>,
    /// <p>The approximate amount of time, in seconds, between health checks of an individual target.</p>
    #[serde(rename = "HealthCheckIntervalSeconds", default, skip_serializing_if = "Option::is_none")]
    pub health_check_interval_seconds: Option<i64>,
    /// <p>[HTTP/HTTPS health checks] The amount of time, in seconds, during which no response means a failed health check.</p>
    #[serde(rename = "HealthCheckTimeoutSeconds", default, skip_serializing_if = "Option::is_none")]
    pub health_check_timeout_seconds: Option<i64>,
    /// <p>The number of consecutive health checks successes required before considering an unhealthy target healthy.</p>
    #[serde(rename = "HealthyThresholdCount", default, skip_serializing_if = "Option::is_none")]
    pub healthy_threshold_count: Option<i64>,
    /// <p>The number of consecutive health check failures required before considering the target unhealthy.</p>
    #[serde(rename = "UnhealthyThresholdCount", default, skip_serializing_if = "Option::is_none")]
    pub unhealthy_threshold_count: Option<i64>,
    /// <p>[HTTP/HTTPS health checks] The HTTP or gRPC codes to use when checking for a successful response from a target.</p>
    #[serde(rename = "Matcher", default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<crate::model::Matcher>,
}

impl ModifyTargetGroupInput {
    /// Creates a builder for `ModifyTargetGroupInput`.
    pub fn builder() -> modify_target_group_input::Builder {
        modify_target_group_input::Builder::default()
    }
}

/// See [`ModifyTargetGroupInput`](super::ModifyTargetGroupInput).
pub mod modify_target_group_input {

    /// A builder for [`ModifyTargetGroupInput`](super::ModifyTargetGroupInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        target_group_arn: Option<String>,
        health_check_protocol: Option<crate::model::ProtocolEnum>,
        health_check_port: Option<String>,
        health_check_path: Option<String>,
        health_check_enabled: Option<bool>,
        health_check_interval_seconds: Option<i64>,
        health_check_timeout_seconds: Option<i64>,
        healthy_threshold_count: Option<i64>,
        unhealthy_threshold_count: Option<i64>,
        matcher: Option<crate::model::Matcher>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn target_group_arn(mut self, input: impl Into<String>) -> Self {
            self.target_group_arn = Some(input.into());
            self
        }

        pub fn health_check_protocol(mut self, input: crate::model::ProtocolEnum) -> Self {
            self.health_check_protocol = Some(input);
            self
        }

        pub fn health_check_port(mut self, input: impl Into<String>) -> Self {
            self.health_check_port = Some(input.into());
            self
        }

        pub fn health_check_path(mut self, input: impl Into<String>) -> Self {
            self.health_check_path = Some(input.into());
            self
        }

        pub fn health_check_enabled(mut self, input: bool) -> Self {
            self.health_check_enabled = Some(input);
            self
        }

        pub fn health_check_interval_seconds(mut self, input: i64) -> Self {
            self.health_check_interval_seconds = Some(input);
            self
        }

        pub fn health_check_timeout_seconds(mut self, input: i64) -> Self {
            self.health_check_timeout_seconds = Some(input);
            self
        }

        pub fn healthy_threshold_count(mut self, input: i64) -> Self {
            self.healthy_threshold_count = Some(input);
            self
        }

        pub fn unhealthy_threshold_count(mut self, input: i64) -> Self {
            self.unhealthy_threshold_count = Some(input);
            self
        }

        pub fn matcher(mut self, input: crate::model::Matcher) -> Self {
            self.matcher = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`ModifyTargetGroupInput`](super::ModifyTargetGroupInput).
        pub fn build(self) -> super::ModifyTargetGroupInput {
            super::ModifyTargetGroupInput {
                target_group_arn: self.target_group_arn,
                health_check_protocol: self.health_check_protocol,
                health_check_port: self.health_check_port,
                health_check_path: self.health_check_path,
                health_check_enabled: self.health_check_enabled,
                health_check_interval_seconds: self.health_check_interval_seconds,
                health_check_timeout_seconds: self.health_check_timeout_seconds,
                healthy_threshold_count: self.healthy_threshold_count,
                unhealthy_threshold_count: self.unhealthy_threshold_count,
                matcher: self.matcher,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteTargetGroupInput {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
}

impl DeleteTargetGroupInput {
    /// Creates a builder for `DeleteTargetGroupInput`.
    pub fn builder() -> delete_target_group_input::Builder {
        delete_target_group_input::Builder::default()
    }
}

/// See [`DeleteTargetGroupInput`](super::DeleteTargetGroupInput).
pub mod delete_target_group_input {

    /// A builder for [`DeleteTargetGroupInput`](super::DeleteTargetGroupInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        target_group_arn: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn target_group_arn(mut self, input: impl Into<String>) -> Self {
            self.target_group_arn = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteTargetGroupInput`](super::DeleteTargetGroupInput).
        pub fn build(self) -> super::DeleteTargetGroupInput {
            super::DeleteTargetGroupInput {
                target_group_arn: self.target_group_arn,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeTargetGroupsInput {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The Amazon Resource Names (ARN) of the target groups.</p>
    #[serde(rename = "TargetGroupArns", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arns: Option<Vec<String>>,
    /// <p>The names of the target groups.</p>
    #[serde(rename = "Names", default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    /// <p>The marker for the next set of results. (You received this marker from a previous call.)</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of results to return with this call.</p>
    #[serde(rename = "PageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl DescribeTargetGroupsInput {
    /// Creates a builder for `DescribeTargetGroupsInput`.
    pub fn builder() -> describe_target_groups_input::Builder {
        describe_target_groups_input::Builder::default()
    }
}

/// See [`DescribeTargetGroupsInput`](super::DescribeTargetGroupsInput).
pub mod describe_target_groups_input {

    /// A builder for [`DescribeTargetGroupsInput`](super::DescribeTargetGroupsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        load_balancer_arn: Option<String>,
        target_group_arns: Option<Vec<String>>,
        names: Option<Vec<String>>,
        marker: Option<String>,
        page_size: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn load_balancer_arn(mut self, input: impl Into<String>) -> Self {
            self.load_balancer_arn = Some(input.into());
            self
        }

        pub fn target_group_arns(mut self, input: Vec<String>) -> Self {
            self.target_group_arns = Some(input);
            self
        }

        pub fn names(mut self, input: Vec<String>) -> Self {
            self.names = Some(input);
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn page_size(mut self, input: i64) -> Self {
            self.page_size = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeTargetGroupsInput`](super::DescribeTargetGroupsInput).
        pub fn build(self) -> super::DescribeTargetGroupsInput {
            super::DescribeTargetGroupsInput {
                load_balancer_arn: self.load_balancer_arn,
                target_group_arns: self.target_group_arns,
                names: self.names,
                marker: self.marker,
                page_size: self.page_size,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModifyTargetGroupAttributesInput {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// <p>The attributes.</p>
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<crate::model::TargetGroupAttribute>>,
}

impl ModifyTargetGroupAttributesInput {
    /// Creates a builder for `ModifyTargetGroupAttributesInput`.
    pub fn builder() -> modify_target_group_attributes_input::Builder {
        modify_target_group_attributes_input::Builder::default()
    }
}

/// See [`ModifyTargetGroupAttributesInput`](super::ModifyTargetGroupAttributesInput).
pub mod modify_target_group_attributes_input {

    /// A builder for [`ModifyTargetGroupAttributesInput`](super::ModifyTargetGroupAttributesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        target_group_arn: Option<String>,
        attributes: Option<Vec<crate::model::TargetGroupAttribute>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn target_group_arn(mut self, input: impl Into<String>) -> Self {
            self.target_group_arn = Some(input.into());
            self
        }

        pub fn attributes(mut self, input: Vec<crate::model::TargetGroupAttribute>) -> Self {
            self.attributes = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`ModifyTargetGroupAttributesInput`](super::ModifyTargetGroupAttributesInput).
        pub fn build(self) -> super::ModifyTargetGroupAttributesInput {
            super::ModifyTargetGroupAttributesInput {
                target_group_arn: self.target_group_arn,
                attributes: self.attributes,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeTargetGroupAttributesInput {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
}

impl DescribeTargetGroupAttributesInput {
    /// Creates a builder for `DescribeTargetGroupAttributesInput`.
    pub fn builder() -> describe_target_group_attributes_input::Builder {
        describe_target_group_attributes_input::Builder::default()
    }
}

/// See [`DescribeTargetGroupAttributesInput`](super::DescribeTargetGroupAttributesInput).
pub mod describe_target_group_attributes_input {

    /// A builder for [`DescribeTargetGroupAttributesInput`](super::DescribeTargetGroupAttributesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        target_group_arn: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn target_group_arn(mut self, input: impl Into<String>) -> Self {
            self.target_group_arn = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DescribeTargetGroupAttributesInput`](super::DescribeTargetGroupAttributesInput).
        pub fn build(self) -> super::DescribeTargetGroupAttributesInput {
            super::DescribeTargetGroupAttributesInput {
                target_group_arn: self.target_group_arn,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterTargetsInput {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// <p>The targets.</p>
    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<crate::model::TargetDescription>>,
}

impl RegisterTargetsInput {
    /// Creates a builder for `RegisterTargetsInput`.
    pub fn builder() -> register_targets_input::Builder {
        register_targets_input::Builder::default()
    }
}

/// See [`RegisterTargetsInput`](super::RegisterTargetsInput).
pub mod register_targets_input {

    /// A builder for [`RegisterTargetsInput`](super::RegisterTargetsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        target_group_arn: Option<String>,
        targets: Option<Vec<crate::model::TargetDescription>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn target_group_arn(mut self, input: impl Into<String>) -> Self {
            self.target_group_arn = Some(input.into());
            self
        }

        pub fn targets(mut self, input: Vec<crate::model::TargetDescription>) -> Self {
            self.targets = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`RegisterTargetsInput`](super::RegisterTargetsInput).
        pub fn build(self) -> super::RegisterTargetsInput {
            super::RegisterTargetsInput {
                target_group_arn: self.target_group_arn,
                targets: self.targets,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeregisterTargetsInput {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// <p>The targets. If you specified a port override when you registered a target, you must specify both the target ID and the port when you deregister it.</p>
    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<crate::model::TargetDescription>>,
}

impl DeregisterTargetsInput {
    /// Creates a builder for `DeregisterTargetsInput`.
    pub fn builder() -> deregister_targets_input::Builder {
        deregister_targets_input::Builder::default()
    }
}

/// See [`DeregisterTargetsInput`](super::DeregisterTargetsInput).
pub mod deregister_targets_input {

    /// A builder for [`DeregisterTargetsInput`](super::DeregisterTargetsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        target_group_arn: Option<String>,
        targets: Option<Vec<crate::model::TargetDescription>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn target_group_arn(mut self, input: impl Into<String>) -> Self {
            self.target_group_arn = Some(input.into());
            self
        }

        pub fn targets(mut self, input: Vec<crate::model::TargetDescription>) -> Self {
            self.targets = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DeregisterTargetsInput`](super::DeregisterTargetsInput).
        pub fn build(self) -> super::DeregisterTargetsInput {
            super::DeregisterTargetsInput {
                target_group_arn: self.target_group_arn,
                targets: self.targets,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeTargetHealthInput {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// <p>The targets.</p>
    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<crate::model::TargetDescription>>,
}

impl DescribeTargetHealthInput {
    /// Creates a builder for `DescribeTargetHealthInput`.
    pub fn builder() -> describe_target_health_input::Builder {
        describe_target_health_input::Builder::default()
    }
}

/// See [`DescribeTargetHealthInput`](super::DescribeTargetHealthInput).
pub mod describe_target_health_input {

    /// A builder for [`DescribeTargetHealthInput`](super::DescribeTargetHealthInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        target_group_arn: Option<String>,
        targets: Option<Vec<crate::model::TargetDescription>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn target_group_arn(mut self, input: impl Into<String>) -> Self {
            self.target_group_arn = Some(input.into());
            self
        }

        pub fn targets(mut self, input: Vec<crate::model::TargetDescription>) -> Self {
            self.targets = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeTargetHealthInput`](super::DescribeTargetHealthInput).
        pub fn build(self) -> super::DescribeTargetHealthInput {
            super::DescribeTargetHealthInput {
                target_group_arn: self.target_group_arn,
                targets: self.targets,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddTagsInput {
    /// <p>The Amazon Resource Name (ARN) of the resource.</p>
    #[serde(rename = "ResourceArns", default, skip_serializing_if = "Option::is_none")]
    pub resource_arns: Option<Vec<String>>,
    /// <p>The tags.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}

impl AddTagsInput {
    /// Creates a builder for `AddTagsInput`.
    pub fn builder() -> add_tags_input::Builder {
        add_tags_input::Builder::default()
    }
}

/// See [`AddTagsInput`](super::AddTagsInput).
pub mod add_tags_input {

    /// A builder for [`AddTagsInput`](super::AddTagsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource_arns: Option<Vec<String>>,
        tags: Option<Vec<crate::model::Tag>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn resource_arns(mut self, input: Vec<String>) -> Self {
            self.resource_arns = Some(input);
            self
        }

        pub fn tags(mut self, input: Vec<crate::model::Tag>) -> Self {
            self.tags = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`AddTagsInput`](super::AddTagsInput).
        pub fn build(self) -> super::AddTagsInput {
            super::AddTagsInput {
                resource_arns: self.resource_arns,
                tags: self.tags,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RemoveTagsInput {
    /// <p>The Amazon Resource Name (ARN) of the resource.</p>
    #[serde(rename = "ResourceArns", default, skip_serializing_if = "Option::is_none")]
    pub resource_arns: Option<Vec<String>>,
    /// <p>The tag keys for the tags to remove.</p>
    #[serde(rename = "TagKeys", default, skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl RemoveTagsInput {
    /// Creates a builder for `RemoveTagsInput`.
    pub fn builder() -> remove_tags_input::Builder {
        remove_tags_input::Builder::default()
    }
}

/// See [`RemoveTagsInput`](super::RemoveTagsInput).
pub mod remove_tags_input {

    /// A builder for [`RemoveTagsInput`](super::RemoveTagsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource_arns: Option<Vec<String>>,
        tag_keys: Option<Vec<String>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn resource_arns(mut self, input: Vec<String>) -> Self {
            self.resource_arns = Some(input);
            self
        }

        pub fn tag_keys(mut self, input: Vec<String>) -> Self {
            self.tag_keys = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`RemoveTagsInput`](super::RemoveTagsInput).
        pub fn build(self) -> super::RemoveTagsInput {
            super::RemoveTagsInput {
                resource_arns: self.resource_arns,
                tag_keys: self.tag_keys,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeTagsInput {
    /// <p>The Amazon Resource Names (ARN) of the resources. You can specify up to 20 resources in a single call.</p>
    #[serde(rename = "ResourceArns", default, skip_serializing_if = "Option::is_none")]
    pub resource_arns: Option<Vec<String>>,
}

impl DescribeTagsInput {
    /// Creates a builder for `DescribeTagsInput`.
    pub fn builder() -> describe_tags_input::Builder {
        describe_tags_input::Builder::default()
    }
}

/// See [`DescribeTagsInput`](super::DescribeTagsInput).
pub mod describe_tags_input {

    /// A builder for [`DescribeTagsInput`](super::DescribeTagsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        resource_arns: Option<Vec<String>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn resource_arns(mut self, input: Vec<String>) -> Self {
            self.resource_arns = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeTagsInput`](super::DescribeTagsInput).
        pub fn build(self) -> super::DescribeTagsInput {
            super::DescribeTagsInput {
                resource_arns: self.resource_arns,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeAccountLimitsInput {
    /// <p>The marker for the next set of results. (You received this marker from a previous call.)</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of results to return with this call.</p>
    #[serde(rename = "PageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl DescribeAccountLimitsInput {
    /// Creates a builder for `DescribeAccountLimitsInput`.
    pub fn builder() -> describe_account_limits_input::Builder {
        describe_account_limits_input::Builder::default()
    }
}

/// See [`DescribeAccountLimitsInput`](super::DescribeAccountLimitsInput).
pub mod describe_account_limits_input {

    /// A builder for [`DescribeAccountLimitsInput`](super::DescribeAccountLimitsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        marker: Option<String>,
        page_size: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn page_size(mut self, input: i64) -> Self {
            self.page_size = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeAccountLimitsInput`](super::DescribeAccountLimitsInput).
        pub fn build(self) -> super::DescribeAccountLimitsInput {
            super::DescribeAccountLimitsInput {
                marker: self.marker,
                page_size: self.page_size,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescribeSslPoliciesInput {
    /// <p>The names of the policies.</p>
    #[serde(rename = "Names", default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    /// <p>The marker for the next set of results. (You received this marker from a previous call.)</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>The maximum number of results to return with this call.</p>
    #[serde(rename = "PageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl DescribeSslPoliciesInput {
    /// Creates a builder for `DescribeSslPoliciesInput`.
    pub fn builder() -> describe_ssl_policies_input::Builder {
        describe_ssl_policies_input::Builder::default()
    }
}

/// See [`DescribeSslPoliciesInput`](super::DescribeSslPoliciesInput).
pub mod describe_ssl_policies_input {

    /// A builder for [`DescribeSslPoliciesInput`](super::DescribeSslPoliciesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        names: Option<Vec<String>>,
        marker: Option<String>,
        page_size: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn names(mut self, input: Vec<String>) -> Self {
            self.names = Some(input);
            self
        }

        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }

        pub fn page_size(mut self, input: i64) -> Self {
            self.page_size = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`DescribeSslPoliciesInput`](super::DescribeSslPoliciesInput).
        pub fn build(self) -> super::DescribeSslPoliciesInput {
            super::DescribeSslPoliciesInput {
                names: self.names,
                marker: self.marker,
                page_size: self.page_size,
            }
        }
    }
}

impl PageableRequest for DescribeLoadBalancersInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

impl PageableRequest for DescribeListenersInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

impl PageableRequest for DescribeListenerCertificatesInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

impl PageableRequest for DescribeRulesInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

impl PageableRequest for DescribeTargetGroupsInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

impl PageableRequest for DescribeAccountLimitsInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}

impl PageableRequest for DescribeSslPoliciesInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.marker = token;
    }
}
