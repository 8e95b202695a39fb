/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */


//! Data structures used by Elastic Load Balancing operations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

shape_types::string_enum! {
    /// The protocol for connections from clients to a load balancer or from a load balancer to targets.
    pub enum ProtocolEnum {
        /// HTTP
        Http => "HTTP",
        /// HTTPS
        Https => "HTTPS",
        /// TCP
        Tcp => "TCP",
        /// TLS
        Tls => "TLS",
        /// UDP
        Udp => "UDP",
        /// TCP and UDP on the same port
        TcpUdp => "TCP_UDP",
        /// GENEVE (Gateway Load Balancers)
        Geneve => "GENEVE",
    }
}

shape_types::string_enum! {
    /// Whether a load balancer is reachable from the internet or only from within its VPC.
    pub enum LoadBalancerSchemeEnum {
        /// The load balancer has a public DNS name that resolves to public IP addresses.
        InternetFacing => "internet-facing",
        /// The load balancer has a public DNS name that resolves to private IP addresses.
        Internal => "internal",
    }
}

shape_types::string_enum! {
    /// The type of load balancer.
    pub enum LoadBalancerTypeEnum {
        /// Application Load Balancer
        Application => "application",
        /// Network Load Balancer
        Network => "network",
        /// Gateway Load Balancer
        Gateway => "gateway",
    }
}

shape_types::string_enum! {
    /// The state code of a load balancer.
    pub enum LoadBalancerStateEnum {
        /// The load balancer is fully set up and ready to route traffic.
        Active => "active",
        /// The load balancer is being set up.
        Provisioning => "provisioning",
        /// The load balancer is routing traffic but requires attention.
        ActiveImpaired => "active_impaired",
        /// The load balancer could not be set up.
        Failed => "failed",
    }
}

shape_types::string_enum! {
    /// The type of IP addresses used by the subnets for a load balancer.
    pub enum IpAddressType {
        /// IPv4 addresses only.
        Ipv4 => "ipv4",
        /// IPv4 and IPv6 addresses.
        Dualstack => "dualstack",
    }
}

shape_types::string_enum! {
    /// The type of action.
    pub enum ActionTypeEnum {
        /// Forward to one or more target groups.
        Forward => "forward",
        /// Authenticate with an OIDC-compliant identity provider.
        AuthenticateOidc => "authenticate-oidc",
        /// Authenticate with Amazon Cognito.
        AuthenticateCognito => "authenticate-cognito",
        /// Redirect the request.
        Redirect => "redirect",
        /// Return a fixed response.
        FixedResponse => "fixed-response",
    }
}

shape_types::string_enum! {
    /// The behavior when a user is not authenticated through an OIDC identity provider.
    pub enum AuthenticateOidcActionConditionalBehaviorEnum {
        /// Return an HTTP 401 Unauthorized error.
        Deny => "deny",
        /// Allow the request to be forwarded.
        Allow => "allow",
        /// Redirect the request to the IdP authorization endpoint.
        Authenticate => "authenticate",
    }
}

shape_types::string_enum! {
    /// The behavior when a user is not authenticated through Amazon Cognito.
    pub enum AuthenticateCognitoActionConditionalBehaviorEnum {
        /// Return an HTTP 401 Unauthorized error.
        Deny => "deny",
        /// Allow the request to be forwarded.
        Allow => "allow",
        /// Redirect the request to the IdP authorization endpoint.
        Authenticate => "authenticate",
    }
}

shape_types::string_enum! {
    /// The HTTP redirect code.
    pub enum RedirectActionStatusCodeEnum {
        /// The redirect is permanent.
        Http301 => "HTTP_301",
        /// The redirect is temporary.
        Http302 => "HTTP_302",
    }
}

shape_types::string_enum! {
    /// The type of target to register with a target group.
    pub enum TargetTypeEnum {
        /// Register targets by instance ID.
        Instance => "instance",
        /// Register targets by IP address.
        Ip => "ip",
        /// Register a single Lambda function as a target.
        Lambda => "lambda",
        /// Register a single Application Load Balancer as a target.
        Alb => "alb",
    }
}

shape_types::string_enum! {
    /// The state of a target.
    pub enum TargetHealthStateEnum {
        /// The initial health checks on the target are in progress.
        Initial => "initial",
        /// The target is healthy.
        Healthy => "healthy",
        /// The target did not respond or failed health checks.
        Unhealthy => "unhealthy",
        /// The target is registered but not receiving traffic.
        Unused => "unused",
        /// The target is deregistering and connection draining is in progress.
        Draining => "draining",
        /// Health checks are disabled for the target group.
        Unavailable => "unavailable",
    }
}

shape_types::string_enum! {
    /// The reason code for the target health state.
    pub enum TargetHealthReasonEnum {
        /// The target registration is in progress.
        ElbRegistrationInProgress => "Elb.RegistrationInProgress",
        /// The initial health checks are in progress.
        ElbInitialHealthChecking => "Elb.InitialHealthChecking",
        /// The health checks did not return an expected HTTP code.
        TargetResponseCodeMismatch => "Target.ResponseCodeMismatch",
        /// The health check requests timed out.
        TargetTimeout => "Target.Timeout",
        /// The health checks failed.
        TargetFailedHealthChecks => "Target.FailedHealthChecks",
        /// The target is not registered with the target group.
        TargetNotRegistered => "Target.NotRegistered",
        /// The target group is not used by any load balancer.
        TargetNotInUse => "Target.NotInUse",
        /// The target is being deregistered and connection draining is in progress.
        TargetDeregistrationInProgress => "Target.DeregistrationInProgress",
        /// The target is in a stopped or terminated state.
        TargetInvalidState => "Target.InvalidState",
        /// The IP address cannot be used as a target because it is in use by a load balancer.
        TargetIpUnusable => "Target.IpUnusable",
        /// Health checks are disabled for the target group.
        TargetHealthCheckDisabled => "Target.HealthCheckDisabled",
        /// An internal error occurred.
        ElbInternalError => "Elb.InternalError",
    }
}

/// <p>Information about a tag.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tag {
    /// <p>The key of the tag.</p>
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>The value of the tag.</p>
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// <p>The tags associated with a resource.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagDescription {
    /// <p>The Amazon Resource Name (ARN) of the resource.</p>
    #[serde(rename = "ResourceArn", default, skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// <p>Information about the tags.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// <p>Information about a load balancer.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancer {
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The public DNS name of the load balancer.</p>
    #[serde(rename = "DNSName", default, skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    /// <p>The ID of the Amazon Route 53 hosted zone associated with the load balancer.</p>
    #[serde(rename = "CanonicalHostedZoneId", default, skip_serializing_if = "Option::is_none")]
    pub canonical_hosted_zone_id: Option<String>,
    /// <p>The date and time the load balancer was created.</p>
    #[serde(rename = "CreatedTime", with = "shape_types::serde_util::instant_iso8601::option", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<shape_types::Instant>,
    /// <p>The name of the load balancer.</p>
    #[serde(rename = "LoadBalancerName", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
    /// <p>The nodes of an Internet-facing load balancer have public IP addresses. The nodes of an internal load balancer have only private IP addresses.</p>
    #[serde(rename = "Scheme", default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<LoadBalancerSchemeEnum>,
    /// <p>The ID of the VPC for the load balancer.</p>
    #[serde(rename = "VpcId", default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// <p>The state of the load balancer.</p>
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<LoadBalancerState>,
    /// <p>The type of load balancer.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<LoadBalancerTypeEnum>,
    /// <p>The subnets for the load balancer.</p>
    #[serde(rename = "AvailabilityZones", default, skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<AvailabilityZone>>,
    /// <p>The IDs of the security groups for the load balancer.</p>
    #[serde(rename = "SecurityGroups", default, skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    /// <p>The type of IP addresses used by the subnets for your load balancer.</p>
    #[serde(rename = "IpAddressType", default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<IpAddressType>,
    /// <p>[Application Load Balancers on Outposts] The ID of the customer-owned address pool.</p>
    #[serde(rename = "CustomerOwnedIpv4Pool", default, skip_serializing_if = "Option::is_none")]
    pub customer_owned_ipv4_pool: Option<String>,
}

/// <p>Information about the state of the load balancer.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerState {
    /// <p>The state code. The initial state of the load balancer is <code>provisioning</code>. After the load balancer is fully set up and ready to route traffic, its state is <code>active</code>. If the load balancer could not be set up, its state is <code>failed</code>.</p>
    #[serde(rename = "Code", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<LoadBalancerStateEnum>,
    /// <p>A description of the state.</p>
    #[serde(rename = "Reason", default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// <p>Information about an Availability Zone.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AvailabilityZone {
    /// <p>The name of the Availability Zone.</p>
    #[serde(rename = "ZoneName", default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    /// <p>The ID of the subnet. You can specify one subnet per Availability Zone.</p>
    #[serde(rename = "SubnetId", default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// <p>[Application Load Balancers on Outposts] The ID of the Outpost.</p>
    #[serde(rename = "OutpostId", default, skip_serializing_if = "Option::is_none")]
    pub outpost_id: Option<String>,
    /// <p>[Network Load Balancers] If you need static IP addresses for your load balancer, you can specify one Elastic IP address per Availability Zone when you create an internal-facing load balancer.</p>
    #[serde(rename = "LoadBalancerAddresses", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_addresses: Option<Vec<LoadBalancerAddress>>,
}

/// <p>Information about a static IP address for a load balancer.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerAddress {
    /// <p>The static IP address.</p>
    #[serde(rename = "IpAddress", default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// <p>[Network Load Balancers] The allocation ID of the Elastic IP address for an internal-facing load balancer.</p>
    #[serde(rename = "AllocationId", default, skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<String>,
    /// <p>[Network Load Balancers] The private IPv4 address for an internal load balancer.</p>
    #[serde(rename = "PrivateIPv4Address", default, skip_serializing_if = "Option::is_none")]
    pub private_ipv4_address: Option<String>,
    /// <p>[Network Load Balancers] The IPv6 address.</p>
    #[serde(rename = "IPv6Address", default, skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
}

/// <p>Information about a subnet mapping.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubnetMapping {
    /// <p>The ID of the subnet.</p>
    #[serde(rename = "SubnetId", default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    /// <p>[Network Load Balancers] The allocation ID of the Elastic IP address for an internet-facing load balancer.</p>
    #[serde(rename = "AllocationId", default, skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<String>,
    /// <p>[Network Load Balancers] The private IPv4 address for an internal load balancer.</p>
    #[serde(rename = "PrivateIPv4Address", default, skip_serializing_if = "Option::is_none")]
    pub private_ipv4_address: Option<String>,
    /// <p>[Network Load Balancers] The IPv6 address.</p>
    #[serde(rename = "IPv6Address", default, skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
}

/// <p>Information about a load balancer attribute.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadBalancerAttribute {
    /// <p>The name of the attribute.</p>
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>The value of the attribute.</p>
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// <p>Information about a listener.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Listener {
    /// <p>The Amazon Resource Name (ARN) of the listener.</p>
    #[serde(rename = "ListenerArn", default, skip_serializing_if = "Option::is_none")]
    pub listener_arn: Option<String>,
    /// <p>The Amazon Resource Name (ARN) of the load balancer.</p>
    #[serde(rename = "LoadBalancerArn", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arn: Option<String>,
    /// <p>The port on which the load balancer is listening.</p>
    #[serde(rename = "Port", default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// <p>The protocol for connections from clients to the load balancer.</p>
    #[serde(rename = "Protocol", default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ProtocolEnum>,
    /// <p>[HTTPS or TLS listener] The default certificate for the listener.</p>
    #[serde(rename = "Certificates", default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<Certificate>>,
    /// <p>[HTTPS or TLS listener] The security policy that defines which protocols and ciphers are supported.</p>
    #[serde(rename = "SslPolicy", default, skip_serializing_if = "Option::is_none")]
    pub ssl_policy: Option<String>,
    /// <p>The default actions for the listener.</p>
    #[serde(rename = "DefaultActions", default, skip_serializing_if = "Option::is_none")]
    pub default_actions: Option<Vec<Action>>,
    /// <p>[TLS listener] The name of the Application-Layer Protocol Negotiation (ALPN) policy.</p>
    #[serde(rename = "AlpnPolicy", default, skip_serializing_if = "Option::is_none")]
    pub alpn_policy: Option<Vec<String>>,
}

/// <p>Information about an SSL server certificate.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Certificate {
    /// <p>The Amazon Resource Name (ARN) of the certificate.</p>
    #[serde(rename = "CertificateArn", default, skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
    /// <p>Indicates whether the certificate is the default certificate. Do not set this value when specifying a certificate as an input. This value is not included in the output when describing a listener, but is included when describing listener certificates.</p>
    #[serde(rename = "IsDefault", default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// <p>Information about an action.</p>
/// <p>Each rule must include exactly one of the following types of actions: <code>forward</code>, <code>fixed-response</code>, or <code>redirect</code>, and it must be the last action to be performed.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    /// <p>The type of action.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<ActionTypeEnum>,
    /// <p>The Amazon Resource Name (ARN) of the target group. Specify only when <code>Type</code> is <code>forward</code> and you want to route to a single target group. To route to one or more target groups, use <code>ForwardConfig</code> instead.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// <p>[HTTPS listeners] Information about an identity provider that is compliant with OpenID Connect (OIDC). Specify only when <code>Type</code> is <code>authenticate-oidc</code>.</p>
    #[serde(rename = "AuthenticateOidcConfig", default, skip_serializing_if = "Option::is_none")]
    pub authenticate_oidc_config: Option<AuthenticateOidcActionConfig>,
    /// <p>[HTTPS listeners] Information for using Amazon Cognito to authenticate users. Specify only when <code>Type</code> is <code>authenticate-cognito</code>.</p>
    #[serde(rename = "AuthenticateCognitoConfig", default, skip_serializing_if = "Option::is_none")]
    pub authenticate_cognito_config: Option<AuthenticateCognitoActionConfig>,
    /// <p>The order for the action. This value is required for rules with multiple actions. The action with the lowest value for order is performed first.</p>
    #[serde(rename = "Order", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// <p>[Application Load Balancer] Information for creating a redirect action. Specify only when <code>Type</code> is <code>redirect</code>.</p>
    #[serde(rename = "RedirectConfig", default, skip_serializing_if = "Option::is_none")]
    pub redirect_config: Option<RedirectActionConfig>,
    /// <p>[Application Load Balancer] Information for creating an action that returns a custom HTTP response. Specify only when <code>Type</code> is <code>fixed-response</code>.</p>
    #[serde(rename = "FixedResponseConfig", default, skip_serializing_if = "Option::is_none")]
    pub fixed_response_config: Option<FixedResponseActionConfig>,
    /// <p>Information for creating an action that distributes requests among one or more target groups.</p>
    #[serde(rename = "ForwardConfig", default, skip_serializing_if = "Option::is_none")]
    pub forward_config: Option<ForwardActionConfig>,
}

/// <p>Request parameters when using an identity provider (IdP) that is compliant with OpenID Connect (OIDC) to authenticate users.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthenticateOidcActionConfig {
    /// <p>The OIDC issuer identifier of the IdP. This must be a full URL, including the HTTPS protocol, the domain, and the path.</p>
    #[serde(rename = "Issuer", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// <p>The authorization endpoint of the IdP.</p>
    #[serde(rename = "AuthorizationEndpoint", default, skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,
    /// <p>The token endpoint of the IdP.</p>
    #[serde(rename = "TokenEndpoint", default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    /// <p>The user info endpoint of the IdP.</p>
    #[serde(rename = "UserInfoEndpoint", default, skip_serializing_if = "Option::is_none")]
    pub user_info_endpoint: Option<String>,
    /// <p>The OAuth 2.0 client identifier.</p>
    #[serde(rename = "ClientId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// <p>The OAuth 2.0 client secret. This parameter is required if you are creating a rule. If you are modifying a rule, you can omit this parameter if you set <code>UseExistingClientSecret</code> to true.</p>
    #[serde(rename = "ClientSecret", default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// <p>The name of the cookie used to maintain session information. The default is AWSELBAuthSessionCookie.</p>
    #[serde(rename = "SessionCookieName", default, skip_serializing_if = "Option::is_none")]
    pub session_cookie_name: Option<String>,
    /// <p>The set of user claims to be requested from the IdP. The default is <code>openid</code>.</p>
    #[serde(rename = "Scope", default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// <p>The maximum duration of the authentication session, in seconds. The default is 604800 seconds (7 days).</p>
    #[serde(rename = "SessionTimeout", default, skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<i64>,
    /// <p>The query parameters (up to 10) to include in the redirect request to the authorization endpoint.</p>
    #[serde(rename = "AuthenticationRequestExtraParams", default, skip_serializing_if = "Option::is_none")]
    pub authentication_request_extra_params: Option<HashMap<String, String>>,
    /// <p>The behavior if the user is not authenticated.</p>
    #[serde(rename = "OnUnauthenticatedRequest", default, skip_serializing_if = "Option::is_none")]
    pub on_unauthenticated_request: Option<AuthenticateOidcActionConditionalBehaviorEnum>,
    /// <p>Indicates whether to use the existing client secret when modifying a rule. If you are creating a rule, you can omit this parameter or set it to false.</p>
    #[serde(rename = "UseExistingClientSecret", default, skip_serializing_if = "Option::is_none")]
    pub use_existing_client_secret: Option<bool>,
}

/// <p>Request parameters to use when integrating with Amazon Cognito to authenticate users.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthenticateCognitoActionConfig {
    /// <p>The Amazon Resource Name (ARN) of the Amazon Cognito user pool.</p>
    #[serde(rename = "UserPoolArn", default, skip_serializing_if = "Option::is_none")]
    pub user_pool_arn: Option<String>,
    /// <p>The ID of the Amazon Cognito user pool client.</p>
    #[serde(rename = "UserPoolClientId", default, skip_serializing_if = "Option::is_none")]
    pub user_pool_client_id: Option<String>,
    /// <p>The domain prefix or fully-qualified domain name of the Amazon Cognito user pool.</p>
    #[serde(rename = "UserPoolDomain", default, skip_serializing_if = "Option::is_none")]
    pub user_pool_domain: Option<String>,
    /// <p>The name of the cookie used to maintain session information. The default is AWSELBAuthSessionCookie.</p>
    #[serde(rename = "SessionCookieName", default, skip_serializing_if = "Option::is_none")]
    pub session_cookie_name: Option<String>,
    /// <p>The set of user claims to be requested from the IdP. The default is <code>openid</code>.</p>
    #[serde(rename = "Scope", default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// <p>The maximum duration of the authentication session, in seconds. The default is 604800 seconds (7 days).</p>
    #[serde(rename = "SessionTimeout", default, skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<i64>,
    /// <p>The query parameters (up to 10) to include in the redirect request to the authorization endpoint.</p>
    #[serde(rename = "AuthenticationRequestExtraParams", default, skip_serializing_if = "Option::is_none")]
    pub authentication_request_extra_params: Option<HashMap<String, String>>,
    /// <p>The behavior if the user is not authenticated.</p>
    #[serde(rename = "OnUnauthenticatedRequest", default, skip_serializing_if = "Option::is_none")]
    pub on_unauthenticated_request: Option<AuthenticateCognitoActionConditionalBehaviorEnum>,
}

/// <p>Information about a redirect action.</p>
/// <p>A URI consists of the following components: protocol://hostname:port/path?query. You must modify at least one of the following components to avoid a redirect loop: protocol, hostname, port, or path. Any components that you do not modify retain their original values.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RedirectActionConfig {
    /// <p>The protocol. You can specify HTTP, HTTPS, or #{protocol}. You can redirect HTTP to HTTP, HTTP to HTTPS, and HTTPS to HTTPS. You cannot redirect HTTPS to HTTP.</p>
    #[serde(rename = "Protocol", default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// <p>The port. You can specify a value from 1 to 65535 or #{port}.</p>
    #[serde(rename = "Port", default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// <p>The hostname. This component is not percent-encoded. The hostname can contain #{host}.</p>
    #[serde(rename = "Host", default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// <p>The absolute path, starting with the leading "/". This component is not percent-encoded. The path can contain #{host}, #{path}, and #{port}.</p>
    #[serde(rename = "Path", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// <p>The query parameters, URL-encoded when necessary, but not percent-encoded. Do not include the leading "?", as it is automatically added. You can specify any of the reserved keywords.</p>
    #[serde(rename = "Query", default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// <p>The HTTP redirect code. The redirect is either permanent (HTTP 301) or temporary (HTTP 302).</p>
    #[serde(rename = "StatusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<RedirectActionStatusCodeEnum>,
}

/// <p>Information about an action that returns a custom HTTP response.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FixedResponseActionConfig {
    /// <p>The message.</p>
    #[serde(rename = "MessageBody", default, skip_serializing_if = "Option::is_none")]
    pub message_body: Option<String>,
    /// <p>The HTTP response code (2XX, 4XX, or 5XX).</p>
    #[serde(rename = "StatusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    /// <p>The content type.</p>
    #[serde(rename = "ContentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// <p>Information about a forward action.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForwardActionConfig {
    /// <p>The target groups. For Network Load Balancers, you can specify a single target group.</p>
    #[serde(rename = "TargetGroups", default, skip_serializing_if = "Option::is_none")]
    pub target_groups: Option<Vec<TargetGroupTuple>>,
    /// <p>The target group stickiness for the rule.</p>
    #[serde(rename = "TargetGroupStickinessConfig", default, skip_serializing_if = "Option::is_none")]
    pub target_group_stickiness_config: Option<TargetGroupStickinessConfig>,
}

/// <p>Information about how traffic will be distributed between multiple target groups in a forward rule.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetGroupTuple {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// <p>The weight. The range is 0 to 999.</p>
    #[serde(rename = "Weight", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

/// <p>Information about the target group stickiness for a rule.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetGroupStickinessConfig {
    /// <p>Indicates whether target group stickiness is enabled.</p>
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// <p>The time period, in seconds, during which requests from a client should be routed to the same target group. The range is 1-604800 seconds (7 days).</p>
    #[serde(rename = "DurationSeconds", default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
}

/// <p>Information about a rule.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rule {
    /// <p>The Amazon Resource Name (ARN) of the rule.</p>
    #[serde(rename = "RuleArn", default, skip_serializing_if = "Option::is_none")]
    pub rule_arn: Option<String>,
    /// <p>The priority.</p>
    #[serde(rename = "Priority", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// <p>The conditions. Each rule can include zero or one of the following conditions: <code>http-request-method</code>, <code>host-header</code>, <code>path-pattern</code>, and <code>source-ip</code>, and zero or more of the following conditions: <code>http-header</code> and <code>query-string</code>.</p>
    #[serde(rename = "Conditions", default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<RuleCondition>>,
    /// <p>The actions. Each rule must include exactly one of the following types of actions: <code>forward</code>, <code>redirect</code>, or <code>fixed-response</code>, and it must be the last action to be performed.</p>
    #[serde(rename = "Actions", default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    /// <p>Indicates whether this is the default rule.</p>
    #[serde(rename = "IsDefault", default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// <p>Information about a condition for a rule.</p>
/// <p>Each rule can optionally include up to one of each of the following conditions: <code>http-request-method</code>, <code>host-header</code>, <code>path-pattern</code>, and <code>source-ip</code>. Each rule can also optionally include one or more of each of the following conditions: <code>http-header</code> and <code>query-string</code>.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleCondition {
    /// <p>The field in the HTTP request. The following are the possible values: <code>http-header</code>, <code>http-request-method</code>, <code>host-header</code>, <code>path-pattern</code>, <code>query-string</code>, and <code>source-ip</code>.</p>
    #[serde(rename = "Field", default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// <p>The condition value. Specify only when <code>Field</code> is <code>host-header</code> or <code>path-pattern</code>. Alternatively, to specify multiple host names or multiple paths, use <code>HostHeaderConfig</code> or <code>PathPatternConfig</code>.</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// <p>Information for a host header condition. Specify only when <code>Field</code> is <code>host-header</code>.</p>
    #[serde(rename = "HostHeaderConfig", default, skip_serializing_if = "Option::is_none")]
    pub host_header_config: Option<HostHeaderConditionConfig>,
    /// <p>Information for a path pattern condition. Specify only when <code>Field</code> is <code>path-pattern</code>.</p>
    #[serde(rename = "PathPatternConfig", default, skip_serializing_if = "Option::is_none")]
    pub path_pattern_config: Option<PathPatternConditionConfig>,
    /// <p>Information for an HTTP header condition. Specify only when <code>Field</code> is <code>http-header</code>.</p>
    #[serde(rename = "HttpHeaderConfig", default, skip_serializing_if = "Option::is_none")]
    pub http_header_config: Option<HttpHeaderConditionConfig>,
    /// <p>Information for a query string condition. Specify only when <code>Field</code> is <code>query-string</code>.</p>
    #[serde(rename = "QueryStringConfig", default, skip_serializing_if = "Option::is_none")]
    pub query_string_config: Option<QueryStringConditionConfig>,
    /// <p>Information for an HTTP method condition. Specify only when <code>Field</code> is <code>http-request-method</code>.</p>
    #[serde(rename = "HttpRequestMethodConfig", default, skip_serializing_if = "Option::is_none")]
    pub http_request_method_config: Option<HttpRequestMethodConditionConfig>,
    /// <p>Information for a source IP condition. Specify only when <code>Field</code> is <code>source-ip</code>.</p>
    #[serde(rename = "SourceIpConfig", default, skip_serializing_if = "Option::is_none")]
    pub source_ip_config: Option<SourceIpConditionConfig>,
}

/// <p>Information about a host header condition.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HostHeaderConditionConfig {
    /// <p>One or more host names. The maximum size of each name is 128 characters. The comparison is case insensitive. Wildcard characters supported: * (matches 0 or more characters) and ? (matches exactly 1 character).</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// <p>Information about a path pattern condition.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathPatternConditionConfig {
    /// <p>One or more path patterns to compare against the request URL. The maximum size of each string is 128 characters. The comparison is case sensitive. Wildcard characters supported: * (matches 0 or more characters) and ? (matches exactly 1 character).</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// <p>Information about an HTTP header condition.</p>
/// <p>There is a set of standard HTTP header fields. You can also define custom HTTP header fields.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HttpHeaderConditionConfig {
    /// <p>The name of the HTTP header field. The maximum size is 40 characters. The header name is case insensitive. The allowed characters are specified by RFC 7230. Wildcards are not supported.</p>
    #[serde(rename = "HttpHeaderName", default, skip_serializing_if = "Option::is_none")]
    pub http_header_name: Option<String>,
    /// <p>One or more strings to compare against the value of the HTTP header. The maximum size of each string is 128 characters. The comparison strings are case insensitive.</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// <p>Information about a query string condition.</p>
/// <p>The query string component of a URI starts after the first '?' character and is terminated by either a '#' character or the end of the URI. A typical query string contains key/value pairs separated by '&amp;' characters. The allowed characters are specified by RFC 3986. Any character can be percentage encoded.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryStringConditionConfig {
    /// <p>One or more key/value pairs or values to find in the query string. The maximum size of each string is 128 characters. The comparison is case insensitive.</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<QueryStringKeyValuePair>>,
}

/// <p>Information about a key/value pair.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryStringKeyValuePair {
    /// <p>The key. You can omit the key.</p>
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>The value.</p>
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// <p>Information about an HTTP method condition.</p>
/// <p>HTTP defines a set of request methods, also referred to as HTTP verbs. For more information, see the <a href="https://www.iana.org/assignments/http-methods/http-methods.xhtml">HTTP Method Registry</a>. You can also define custom HTTP methods.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HttpRequestMethodConditionConfig {
    /// <p>The name of the request method. The maximum size is 40 characters. The allowed characters are A-Z, hyphen (-), and underscore (_). The comparison is case sensitive. Wildcards are not supported; therefore, the method name must be an exact match.</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// <p>Information about a source IP condition.</p>
/// <p>You can use this condition to route based on the IP address of the source that connects to the load balancer. If a client is behind a proxy, this is the IP address of the proxy not the IP address of the client.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceIpConditionConfig {
    /// <p>One or more source IP addresses, in CIDR format. You can use both IPv4 and IPv6 addresses. Wildcards are not supported.</p>
    #[serde(rename = "Values", default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// <p>Information about the priorities for the rules for a listener.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RulePriorityPair {
    /// <p>The Amazon Resource Name (ARN) of the rule.</p>
    #[serde(rename = "RuleArn", default, skip_serializing_if = "Option::is_none")]
    pub rule_arn: Option<String>,
    /// <p>The rule priority.</p>
    #[serde(rename = "Priority", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// <p>Information about a target group.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetGroup {
    /// <p>The Amazon Resource Name (ARN) of the target group.</p>
    #[serde(rename = "TargetGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub target_group_arn: Option<String>,
    /// <p>The name of the target group.</p>
    #[serde(rename = "TargetGroupName", default, skip_serializing_if = "Option::is_none")]
    pub target_group_name: Option<String>,
    /// <p>The protocol to use for routing traffic to the targets.</p>
    #[serde(rename = "Protocol", default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ProtocolEnum>,
    /// <p>The port on which the targets are listening. Not used if the target is a Lambda function.</p>
    #[serde(rename = "Port", default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// <p>The ID of the VPC for the targets.</p>
    #[serde(rename = "VpcId", default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// <p>The protocol to use to connect with the target.</p>
    #[serde(rename = "HealthCheckProtocol", default, skip_serializing_if = "Option::is_none")]
    pub health_check_protocol: Option<ProtocolEnum>,
    /// <p>The port to use to connect with the target.</p>
    #[serde(rename = "HealthCheckPort", default, skip_serializing_if = "Option::is_none")]
    pub health_check_port: Option<String>,
    /// <p>Indicates whether health checks are enabled.</p>
    #[serde(rename = "HealthCheckEnabled", default, skip_serializing_if = "Option::is_none")]
    pub health_check_enabled: Option<bool>,
    /// <p>The approximate amount of time, in seconds, between health checks of an individual target.</p>
    #[serde(rename = "HealthCheckIntervalSeconds", default, skip_serializing_if = "Option::is_none")]
    pub health_check_interval_seconds: Option<i64>,
    /// <p>The amount of time, in seconds, during which no response means a failed health check.</p>
    #[serde(rename = "HealthCheckTimeoutSeconds", default, skip_serializing_if = "Option::is_none")]
    pub health_check_timeout_seconds: Option<i64>,
    /// <p>The number of consecutive health checks successes required before considering an unhealthy target healthy.</p>
    #[serde(rename = "HealthyThresholdCount", default, skip_serializing_if = "Option::is_none")]
    pub healthy_threshold_count: Option<i64>,
    /// <p>The number of consecutive health check failures required before considering the target unhealthy.</p>
    #[serde(rename = "UnhealthyThresholdCount", default, skip_serializing_if = "Option::is_none")]
    pub unhealthy_threshold_count: Option<i64>,
    /// <p>The destination for health checks on the targets.</p>
    #[serde(rename = "HealthCheckPath", default, skip_serializing_if = "Option::is_none")]
    pub health_check_path: Option<String>,
    /// <p>The HTTP or gRPC codes to use when checking for a successful response from a target.</p>
    #[serde(rename = "Matcher", default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<Matcher>,
    /// <p>The Amazon Resource Names (ARN) of the load balancers that route traffic to this target group.</p>
    #[serde(rename = "LoadBalancerArns", default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_arns: Option<Vec<String>>,
    /// <p>The type of target that you must specify when registering targets with this target group.</p>
    #[serde(rename = "TargetType", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetTypeEnum>,
    /// <p>[HTTP/HTTPS protocol] The protocol version. The possible values are <code>GRPC</code>, <code>HTTP1</code>, and <code>HTTP2</code>.</p>
    #[serde(rename = "ProtocolVersion", default, skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<String>,
}

/// <p>The codes to use when checking for a successful response from a target. If the protocol version is gRPC, these are gRPC codes. Otherwise, these are HTTP codes.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Matcher {
    /// <p>For Application Load Balancers, you can specify values between 200 and 499, and the default value is 200. You can specify multiple values (for example, "200,202") or a range of values (for example, "200-299").</p>
    #[serde(rename = "HttpCode", default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<String>,
    /// <p>You can specify values between 0 and 99. You can specify multiple values (for example, "0,1") or a range of values (for example, "0-5"). The default value is 12.</p>
    #[serde(rename = "GrpcCode", default, skip_serializing_if = "Option::is_none")]
    pub grpc_code: Option<String>,
}

/// <p>Information about a target group attribute.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetGroupAttribute {
    /// <p>The name of the attribute.</p>
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>The value of the attribute.</p>
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// <p>Information about a target.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetDescription {
    /// <p>The ID of the target. If the target type of the target group is <code>instance</code>, specify an instance ID. If the target type is <code>ip</code>, specify an IP address. If the target type is <code>lambda</code>, specify the ARN of the Lambda function.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The port on which the target is listening. If the target group protocol is GENEVE, the supported port is 6081. Not used if the target is a Lambda function.</p>
    #[serde(rename = "Port", default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// <p>An Availability Zone or <code>all</code>. This determines whether the target receives traffic from the load balancer nodes in the specified Availability Zone or from all enabled Availability Zones for the load balancer.</p>
    #[serde(rename = "AvailabilityZone", default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
}

/// <p>Information about the current health of a target.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetHealth {
    /// <p>The state of the target.</p>
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<TargetHealthStateEnum>,
    /// <p>The reason code.</p>
    /// <p>If the target state is <code>healthy</code>, a reason code is not provided.</p>
    #[serde(rename = "Reason", default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<TargetHealthReasonEnum>,
    /// <p>A description of the target health that provides additional details. If the state is <code>healthy</code>, a description is not provided.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// <p>Information about the health of a target.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetHealthDescription {
    /// <p>The description of the target.</p>
    #[serde(rename = "Target", default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetDescription>,
    /// <p>The port to use to connect with the target.</p>
    #[serde(rename = "HealthCheckPort", default, skip_serializing_if = "Option::is_none")]
    pub health_check_port: Option<String>,
    /// <p>The health information for the target.</p>
    #[serde(rename = "TargetHealth", default, skip_serializing_if = "Option::is_none")]
    pub target_health: Option<TargetHealth>,
}

/// <p>Information about an Elastic Load Balancing resource limit for your AWS account.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Limit {
    /// <p>The name of the limit.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The maximum value of the limit.</p>
    #[serde(rename = "Max", default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// <p>Information about a policy used for SSL negotiation.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SslPolicy {
    /// <p>The protocols.</p>
    #[serde(rename = "SslProtocols", default, skip_serializing_if = "Option::is_none")]
    pub ssl_protocols: Option<Vec<String>>,
    /// <p>The ciphers.</p>
    #[serde(rename = "Ciphers", default, skip_serializing_if = "Option::is_none")]
    pub ciphers: Option<Vec<Cipher>>,
    /// <p>The name of the policy.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// <p>Information about a cipher used in a policy.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cipher {
    /// <p>The name of the cipher.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The priority of the cipher.</p>
    #[serde(rename = "Priority", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}
