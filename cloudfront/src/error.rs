/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled errors for Amazon CloudFront.
//!
//! CloudFront error codes carry the service's own capitalization
//! (`CNAMEAlreadyExists`, `InvalidTTLOrder`); the exception type names
//! follow Rust casing and map back to the wire code through `CODE`.

shape_types::modeled_errors! {
    /// All errors Amazon CloudFront models, plus [`Error::Unhandled`]
    /// for codes this client has no model for.
    pub enum Error {
        /// <p>Access denied.</p>
        AccessDenied => "AccessDenied",
        /// <p>Invalidation batch specified is too large.</p>
        BatchTooLarge => "BatchTooLarge",
        /// <p>The CNAME specified is already defined for CloudFront.</p>
        CnameAlreadyExists => "CNAMEAlreadyExists",
        /// <p>The caller reference you attempted to create the distribution with is associated with another distribution.</p>
        DistributionAlreadyExists => "DistributionAlreadyExists",
        /// <p>The specified CloudFront distribution is not disabled. You must disable the distribution before you can delete it.</p>
        DistributionNotDisabled => "DistributionNotDisabled",
        /// <p>Origin and <code>CallerReference</code> cannot be updated.</p>
        IllegalUpdate => "IllegalUpdate",
        /// <p>The value of <code>Quantity</code> and the size of <code>Items</code> don't match.</p>
        InconsistentQuantities => "InconsistentQuantities",
        /// <p>The argument is invalid.</p>
        InvalidArgument => "InvalidArgument",
        /// <p>The default root object file name is too big or contains an invalid character.</p>
        InvalidDefaultRootObject => "InvalidDefaultRootObject",
        /// <p>Your request contains forward cookies option which doesn't match with the expectation for the <code>whitelisted</code> list of cookie names. Either list of cookie names has been specified when not allowed or list of cookie names is missing when expected.</p>
        InvalidForwardCookies => "InvalidForwardCookies",
        /// <p>The specified geo restriction parameter is not valid.</p>
        InvalidGeoRestrictionParameter => "InvalidGeoRestrictionParameter",
        /// <p>The headers specified are not valid for an Amazon S3 origin.</p>
        InvalidHeadersForS3Origin => "InvalidHeadersForS3Origin",
        /// <p>The <code>If-Match</code> version is missing or not valid for the distribution.</p>
        InvalidIfMatchVersion => "InvalidIfMatchVersion",
        /// <p>The specified Lambda function association is invalid.</p>
        InvalidLambdaFunctionAssociation => "InvalidLambdaFunctionAssociation",
        /// <p>The location code specified is not valid.</p>
        InvalidLocationCode => "InvalidLocationCode",
        /// <p>The Amazon S3 origin server specified does not refer to a valid Amazon S3 bucket.</p>
        InvalidOrigin => "InvalidOrigin",
        /// <p>The origin access identity is not valid or doesn't exist.</p>
        InvalidOriginAccessIdentity => "InvalidOriginAccessIdentity",
        /// <p>You cannot specify SSLv3 as the minimum protocol version if you only want to support only clients that support Server Name Indication (SNI).</p>
        InvalidProtocolSettings => "InvalidProtocolSettings",
        /// <p>This operation requires the HTTPS protocol. Ensure that you specify the HTTPS protocol in your request, or omit the <code>RequiredProtocols</code> element from your distribution configuration.</p>
        InvalidRequiredProtocol => "InvalidRequiredProtocol",
        /// <p>A response code specified in the response body is not valid.</p>
        InvalidResponseCode => "InvalidResponseCode",
        /// <p>Tagging specified in the request is not valid.</p>
        InvalidTagging => "InvalidTagging",
        /// <p>TTL order specified in the response body is not valid.</p>
        InvalidTtlOrder => "InvalidTTLOrder",
        /// <p>A viewer certificate specified in the request is not valid.</p>
        InvalidViewerCertificate => "InvalidViewerCertificate",
        /// <p>A web ACL id specified in the request is not valid. To specify a web ACL created using the latest version of AWS WAF, use the ACL ARN. To specify a web ACL created using AWS WAF Classic, use the ACL ID.</p>
        InvalidWebAclId => "InvalidWebACLId",
        /// <p>This operation requires a body. Ensure that the body is present and the <code>Content-Type</code> header is set.</p>
        MissingBody => "MissingBody",
        /// <p>The specified distribution does not exist.</p>
        NoSuchDistribution => "NoSuchDistribution",
        /// <p>The specified invalidation does not exist.</p>
        NoSuchInvalidation => "NoSuchInvalidation",
        /// <p>No origin exists with the specified <code>Origin Id</code>.</p>
        NoSuchOrigin => "NoSuchOrigin",
        /// <p>A resource that was specified is not valid.</p>
        NoSuchResource => "NoSuchResource",
        /// <p>The precondition given in one or more of the request header fields evaluated to <code>false</code>.</p>
        PreconditionFailed => "PreconditionFailed",
        /// <p>You cannot create more cache behaviors for the distribution.</p>
        TooManyCacheBehaviors => "TooManyCacheBehaviors",
        /// <p>You cannot create anymore custom SSL/TLS certificates.</p>
        TooManyCertificates => "TooManyCertificates",
        /// <p>Your request contains more cookie names in the whitelist than are allowed per cache behavior.</p>
        TooManyCookieNamesInWhiteList => "TooManyCookieNamesInWhiteList",
        /// <p>Your request contains more CNAMEs than are allowed per distribution.</p>
        TooManyDistributionCnames => "TooManyDistributionCNAMEs",
        /// <p>Processing your request would cause you to exceed the maximum number of distributions allowed.</p>
        TooManyDistributions => "TooManyDistributions",
        /// <p>Your request contains too many headers in forwarded values.</p>
        TooManyHeadersInForwardedValues => "TooManyHeadersInForwardedValues",
        /// <p>You have exceeded the maximum number of allowable InProgress invalidation batch requests, or invalidation objects.</p>
        TooManyInvalidationsInProgress => "TooManyInvalidationsInProgress",
        /// <p>Your request contains more Lambda function associations than are allowed per distribution.</p>
        TooManyLambdaFunctionAssociations => "TooManyLambdaFunctionAssociations",
        /// <p>Your request contains too many origin custom headers.</p>
        TooManyOriginCustomHeaders => "TooManyOriginCustomHeaders",
        /// <p>You cannot create more origins for the distribution.</p>
        TooManyOrigins => "TooManyOrigins",
        /// <p>Your request contains too many query string parameters.</p>
        TooManyQueryStringParameters => "TooManyQueryStringParameters",
        /// <p>Your request contains more trusted signers than are allowed per distribution.</p>
        TooManyTrustedSigners => "TooManyTrustedSigners",
        /// <p>One or more of your trusted signers don't exist.</p>
        TrustedSignerDoesNotExist => "TrustedSignerDoesNotExist",
    }
}
