/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled errors for Elastic Load Balancing.

shape_types::modeled_errors! {
    /// All errors Elastic Load Balancing models, plus [`Error::Unhandled`]
    /// for codes this client has no model for.
    pub enum Error {
        /// <p>The specified allocation ID does not exist.</p>
        AllocationIdNotFoundException => "AllocationIdNotFound",
        /// <p>The specified ALPN policy is not supported.</p>
        AlpnPolicyNotSupportedException => "ALPNPolicyNotFound",
        /// <p>The specified Availability Zone is not supported.</p>
        AvailabilityZoneNotSupportedException => "AvailabilityZoneNotSupported",
        /// <p>The specified certificate does not exist.</p>
        CertificateNotFoundException => "CertificateNotFound",
        /// <p>A listener with the specified port already exists.</p>
        DuplicateListenerException => "DuplicateListener",
        /// <p>A load balancer with the specified name already exists.</p>
        DuplicateLoadBalancerNameException => "DuplicateLoadBalancerName",
        /// <p>A tag key was specified more than once.</p>
        DuplicateTagKeysException => "DuplicateTagKeys",
        /// <p>A target group with the specified name already exists.</p>
        DuplicateTargetGroupNameException => "DuplicateTargetGroupName",
        /// <p>The health of the specified targets could not be retrieved due to an internal error.</p>
        HealthUnavailableException => "HealthUnavailable",
        /// <p>The specified configuration is not valid with this protocol.</p>
        IncompatibleProtocolsException => "IncompatibleProtocols",
        /// <p>The requested configuration is not valid.</p>
        InvalidConfigurationRequestException => "InvalidConfigurationRequest",
        /// <p>The requested action is not valid.</p>
        InvalidLoadBalancerActionException => "InvalidLoadBalancerAction",
        /// <p>The requested scheme is not valid.</p>
        InvalidSchemeException => "InvalidScheme",
        /// <p>The specified security group does not exist.</p>
        InvalidSecurityGroupException => "InvalidSecurityGroup",
        /// <p>The specified subnet is out of available addresses.</p>
        InvalidSubnetException => "InvalidSubnet",
        /// <p>The specified target does not exist, is not in the same VPC as the target group, or has an unsupported instance type.</p>
        InvalidTargetException => "InvalidTarget",
        /// <p>The specified listener does not exist.</p>
        ListenerNotFoundException => "ListenerNotFound",
        /// <p>The specified load balancer does not exist.</p>
        LoadBalancerNotFoundException => "LoadBalancerNotFound",
        /// <p>This operation is not allowed.</p>
        OperationNotPermittedException => "OperationNotPermitted",
        /// <p>The specified priority is in use.</p>
        PriorityInUseException => "PriorityInUse",
        /// <p>A specified resource is in use.</p>
        ResourceInUseException => "ResourceInUse",
        /// <p>The specified rule does not exist.</p>
        RuleNotFoundException => "RuleNotFound",
        /// <p>The specified SSL policy does not exist.</p>
        SslPolicyNotFoundException => "SSLPolicyNotFound",
        /// <p>The specified subnet does not exist.</p>
        SubnetNotFoundException => "SubnetNotFound",
        /// <p>The specified target group does not exist.</p>
        TargetGroupNotFoundException => "TargetGroupNotFound",
        /// <p>You've reached the limit on the number of load balancers per target group.</p>
        TargetGroupAssociationLimitException => "TargetGroupAssociationLimit",
        /// <p>You've reached the limit on the number of actions per rule.</p>
        TooManyActionsException => "TooManyActions",
        /// <p>You've reached the limit on the number of certificates per load balancer.</p>
        TooManyCertificatesException => "TooManyCertificates",
        /// <p>You've reached the limit on the number of listeners per load balancer.</p>
        TooManyListenersException => "TooManyListeners",
        /// <p>You've reached the limit on the number of load balancers for your AWS account.</p>
        TooManyLoadBalancersException => "TooManyLoadBalancers",
        /// <p>You've reached the limit on the number of times a target can be registered with a load balancer.</p>
        TooManyRegistrationsForTargetIdException => "TooManyRegistrationsForTargetId",
        /// <p>You've reached the limit on the number of rules per load balancer.</p>
        TooManyRulesException => "TooManyRules",
        /// <p>You've reached the limit on the number of tags per load balancer.</p>
        TooManyTagsException => "TooManyTags",
        /// <p>You've reached the limit on the number of target groups for your AWS account.</p>
        TooManyTargetGroupsException => "TooManyTargetGroups",
        /// <p>You've reached the limit on the number of targets.</p>
        TooManyTargetsException => "TooManyTargets",
        /// <p>You've reached the limit on the number of unique target groups per load balancer across all listeners.</p>
        TooManyUniqueTargetGroupsPerLoadBalancerException => "TooManyUniqueTargetGroupsPerLoadBalancer",
        /// <p>The specified protocol is not supported.</p>
        UnsupportedProtocolException => "UnsupportedProtocol",
    }
}
