/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */


//! Data structures exchanged with Amazon CloudFront.
//!
//! CloudFront models its collections as complex types carrying a `Quantity`
//! count alongside the `Items` list; both travel explicitly on the wire, and
//! the shapes here keep that convention rather than flattening it away.

use serde::{Deserialize, Serialize};

shape_types::string_enum! {
    /// An HTTP method CloudFront processes and forwards to your origin.
    pub enum Method {
        /// GET
        Get => "GET",
        /// HEAD
        Head => "HEAD",
        /// POST
        Post => "POST",
        /// PUT
        Put => "PUT",
        /// PATCH
        Patch => "PATCH",
        /// OPTIONS
        Options => "OPTIONS",
        /// DELETE
        Delete => "DELETE",
    }
}

shape_types::string_enum! {
    /// The protocol policy CloudFront uses when fetching objects from your origin.
    pub enum OriginProtocolPolicy {
        /// CloudFront always uses HTTP to connect to the origin.
        HttpOnly => "http-only",
        /// CloudFront uses the same protocol as the viewer request.
        MatchViewer => "match-viewer",
        /// CloudFront always uses HTTPS to connect to the origin.
        HttpsOnly => "https-only",
    }
}

shape_types::string_enum! {
    /// An SSL/TLS protocol CloudFront can use when connecting to your origin.
    pub enum SslProtocol {
        /// SSLv3
        Sslv3 => "SSLv3",
        /// TLSv1
        Tlsv1 => "TLSv1",
        /// TLSv1.1
        Tlsv11 => "TLSv1.1",
        /// TLSv1.2
        Tlsv12 => "TLSv1.2",
    }
}

shape_types::string_enum! {
    /// Which cookies CloudFront forwards to the origin.
    pub enum ItemSelection {
        /// Forward no cookies.
        None => "none",
        /// Forward only the whitelisted cookies.
        Whitelist => "whitelist",
        /// Forward all cookies.
        All => "all",
    }
}

shape_types::string_enum! {
    /// The protocol viewers can use to access your content.
    pub enum ViewerProtocolPolicy {
        /// Viewers can use HTTP or HTTPS.
        AllowAll => "allow-all",
        /// HTTPS only; HTTP requests receive a 403.
        HttpsOnly => "https-only",
        /// HTTP requests are redirected to HTTPS with a 301.
        RedirectToHttps => "redirect-to-https",
    }
}

shape_types::string_enum! {
    /// How CloudFront serves HTTPS requests for your custom certificate.
    pub enum SslSupportMethod {
        /// Serve HTTPS using server name indication (SNI).
        SniOnly => "sni-only",
        /// Serve HTTPS from dedicated IP addresses.
        Vip => "vip",
    }
}

shape_types::string_enum! {
    /// The minimum TLS/SSL protocol CloudFront uses with viewers.
    pub enum MinimumProtocolVersion {
        /// SSLv3
        Sslv3 => "SSLv3",
        /// TLSv1
        Tlsv1 => "TLSv1",
        /// TLSv1 with 2016 security policy.
        Tlsv12016 => "TLSv1_2016",
        /// TLSv1.1 with 2016 security policy.
        Tlsv112016 => "TLSv1.1_2016",
        /// TLSv1.2 with 2018 security policy.
        Tlsv122018 => "TLSv1.2_2018",
    }
}

shape_types::string_enum! {
    /// The method used to restrict distribution of your content by country.
    pub enum GeoRestrictionType {
        /// Prevent the listed countries from accessing your content.
        Blacklist => "blacklist",
        /// Allow only the listed countries to access your content.
        Whitelist => "whitelist",
        /// No restriction.
        None => "none",
    }
}

shape_types::string_enum! {
    /// The price class that corresponds with the maximum price you want to pay.
    pub enum PriceClass {
        /// North America and Europe edge locations.
        PriceClass100 => "PriceClass_100",
        /// North America, Europe, Asia, Middle East, and Africa edge locations.
        PriceClass200 => "PriceClass_200",
        /// All edge locations (best performance).
        PriceClassAll => "PriceClass_All",
    }
}

shape_types::string_enum! {
    /// The maximum HTTP version viewers can use to communicate with CloudFront.
    pub enum HttpVersion {
        /// HTTP/1.1
        Http11 => "http1.1",
        /// HTTP/2 (viewers that don't support it fall back to HTTP/1.1).
        Http2 => "http2",
    }
}

shape_types::string_enum! {
    /// The event that triggers a Lambda@Edge function.
    pub enum EventType {
        /// The function executes when CloudFront receives a request from a viewer.
        ViewerRequest => "viewer-request",
        /// The function executes before CloudFront returns the response to the viewer.
        ViewerResponse => "viewer-response",
        /// The function executes before CloudFront forwards a request to the origin.
        OriginRequest => "origin-request",
        /// The function executes after CloudFront receives a response from the origin.
        OriginResponse => "origin-response",
    }
}

/// <p>A complex type that contains information about the objects that you want to invalidate.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paths {
    /// <p>The number of invalidation paths.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains a list of the paths that you want to invalidate.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// <p>A complex type that contains information about CNAMEs (alternate domain names), if any, for this distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aliases {
    /// <p>The number of CNAME aliases, if any, that you want to associate with this distribution.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains the CNAME aliases, if any, that you want to associate with this distribution.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// <p>A complex type that controls whether CloudFront caches the response to requests using the specified HTTP methods.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CachedMethods {
    /// <p>The number of HTTP methods for which you want CloudFront to cache responses. Valid values are <code>2</code> (for <code>GET</code> and <code>HEAD</code> requests) and <code>3</code> (for <code>GET</code>, <code>HEAD</code>, and <code>OPTIONS</code> requests).</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains the HTTP methods that you want CloudFront to cache responses to.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Method>>,
}

/// <p>A complex type that controls which HTTP methods CloudFront processes and forwards to your Amazon S3 bucket or your custom origin.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllowedMethods {
    /// <p>The number of HTTP methods that you want CloudFront to forward to your origin. Valid values are 2 (for <code>GET</code> and <code>HEAD</code> requests), 3 (for <code>GET</code>, <code>HEAD</code>, and <code>OPTIONS</code> requests) and 7 (for all requests).</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains the HTTP methods that you want CloudFront to process and forward to your origin.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Method>>,
    #[serde(rename = "CachedMethods", default, skip_serializing_if = "Option::is_none")]
    pub cached_methods: Option<CachedMethods>,
}

/// <p>A complex type that contains <code>HeaderName</code> and <code>HeaderValue</code> elements, if any, for this distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OriginCustomHeader {
    /// <p>The name of a header that you want CloudFront to forward to your origin.</p>
    #[serde(rename = "HeaderName", default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
    /// <p>The value for the header that you specified in the <code>HeaderName</code> field.</p>
    #[serde(rename = "HeaderValue", default, skip_serializing_if = "Option::is_none")]
    pub header_value: Option<String>,
}

/// <p>A complex type that contains the list of Custom Headers for each origin.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomHeaders {
    /// <p>The number of custom headers, if any, for this distribution.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p><b>Optional</b>: A list that contains one <code>OriginCustomHeader</code> element for each custom header that you want CloudFront to forward to the origin. If Quantity is <code>0</code>, omit <code>Items</code>.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OriginCustomHeader>>,
}

/// <p>A complex type that contains information about the Amazon S3 origin. If the origin is a custom origin, use the <code>CustomOriginConfig</code> element instead.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct S3OriginConfig {
    /// <p>The CloudFront origin access identity to associate with the origin. Use an origin access identity to configure the origin so that viewers can <i>only</i> access objects in an Amazon S3 bucket through CloudFront.</p>
    #[serde(rename = "OriginAccessIdentity", default, skip_serializing_if = "Option::is_none")]
    pub origin_access_identity: Option<String>,
}

/// <p>A complex type that contains information about the SSL/TLS protocols that CloudFront can use when establishing an HTTPS connection with your origin.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OriginSslProtocols {
    /// <p>The number of SSL/TLS protocols that you want to allow CloudFront to use when establishing an HTTPS connection with this origin.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A list that contains allowed SSL/TLS protocols for this origin.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SslProtocol>>,
}

/// <p>A customer origin or an Amazon S3 bucket configured as a website endpoint.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomOriginConfig {
    /// <p>The HTTP port the custom origin listens on.</p>
    #[serde(rename = "HTTPPort", default, skip_serializing_if = "Option::is_none")]
    pub http_port: Option<i64>,
    /// <p>The HTTPS port the custom origin listens on.</p>
    #[serde(rename = "HTTPSPort", default, skip_serializing_if = "Option::is_none")]
    pub https_port: Option<i64>,
    /// <p>The origin protocol policy to apply to your origin.</p>
    #[serde(rename = "OriginProtocolPolicy", default, skip_serializing_if = "Option::is_none")]
    pub origin_protocol_policy: Option<OriginProtocolPolicy>,
    /// <p>The SSL/TLS protocols that you want CloudFront to use when communicating with your origin over HTTPS.</p>
    #[serde(rename = "OriginSslProtocols", default, skip_serializing_if = "Option::is_none")]
    pub origin_ssl_protocols: Option<OriginSslProtocols>,
    /// <p>You can create a custom origin read timeout. All timeout units are in seconds. The default origin read timeout is 30 seconds, but you can configure custom timeout lengths. The minimum timeout length is 4 seconds; the maximum is 60 seconds.</p>
    #[serde(rename = "OriginReadTimeout", default, skip_serializing_if = "Option::is_none")]
    pub origin_read_timeout: Option<i64>,
    /// <p>You can create a custom keep-alive timeout. All timeout units are in seconds. The default keep-alive timeout is 5 seconds, but you can configure custom timeout lengths. The minimum timeout length is 1 second; the maximum is 60 seconds.</p>
    #[serde(rename = "OriginKeepaliveTimeout", default, skip_serializing_if = "Option::is_none")]
    pub origin_keepalive_timeout: Option<i64>,
}

/// <p>A complex type that describes the Amazon S3 bucket or the HTTP server (for example, a web server) from which CloudFront gets your files. You must create at least one origin.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Origin {
    /// <p>A unique identifier for the origin. The value of <code>Id</code> must be unique within the distribution.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p><b>Amazon S3 origins</b>: The DNS name of the Amazon S3 bucket from which you want CloudFront to get objects for this origin, for example, <code>myawsbucket.s3.amazonaws.com</code>. <b>Custom origins</b>: The DNS domain name for the HTTP server from which you want CloudFront to get objects for this origin, for example, <code>www.example.com</code>.</p>
    #[serde(rename = "DomainName", default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// <p>An optional element that causes CloudFront to request your content from a directory in your Amazon S3 bucket or your custom origin.</p>
    #[serde(rename = "OriginPath", default, skip_serializing_if = "Option::is_none")]
    pub origin_path: Option<String>,
    /// <p>A complex type that contains names and values for the custom headers that you want.</p>
    #[serde(rename = "CustomHeaders", default, skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<CustomHeaders>,
    /// <p>A complex type that contains information about the Amazon S3 origin. If the origin is a custom origin, use the <code>CustomOriginConfig</code> element instead.</p>
    #[serde(rename = "S3OriginConfig", default, skip_serializing_if = "Option::is_none")]
    pub s3_origin_config: Option<S3OriginConfig>,
    /// <p>A complex type that contains information about a custom origin. If the origin is an Amazon S3 bucket, use the <code>S3OriginConfig</code> element instead.</p>
    #[serde(rename = "CustomOriginConfig", default, skip_serializing_if = "Option::is_none")]
    pub custom_origin_config: Option<CustomOriginConfig>,
}

/// <p>A complex type that contains information about origins for this distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Origins {
    /// <p>The number of origins for this distribution.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains origins for this distribution.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Origin>>,
}

/// <p>A complex type that specifies the whitelisted cookies, if any, that you want CloudFront to forward to your origin.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CookieNames {
    /// <p>The number of different cookies that you want CloudFront to forward to the origin.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains one <code>Name</code> element for each cookie that you want CloudFront to forward to the origin.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// <p>A complex type that specifies whether you want CloudFront to forward cookies to the origin and, if so, which ones.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CookiePreference {
    /// <p>Specifies which cookies to forward to the origin for this cache behavior: all, none, or the list of cookies specified in the <code>WhitelistedNames</code> complex type.</p>
    #[serde(rename = "Forward", default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<ItemSelection>,
    /// <p>Required if you specify <code>whitelist</code> for the value of <code>Forward</code>.</p>
    #[serde(rename = "WhitelistedNames", default, skip_serializing_if = "Option::is_none")]
    pub whitelisted_names: Option<CookieNames>,
}

/// <p>A complex type that specifies the request headers, if any, that you want CloudFront to base caching on for this cache behavior.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Headers {
    /// <p>The number of different headers that you want CloudFront to base caching on for this cache behavior.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A list that contains one <code>Name</code> element for each header that you want CloudFront to use for caching in this cache behavior. If <code>Quantity</code> is <code>0</code>, omit <code>Items</code>.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// <p>A complex type that contains information about the query string parameters that you want CloudFront to use for caching for a cache behavior.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryStringCacheKeys {
    /// <p>The number of <code>whitelisted</code> query string parameters for a cache behavior.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A list that contains the query string parameters that you want CloudFront to use as a basis for caching for a cache behavior. If <code>Quantity</code> is 0, you can omit <code>Items</code>.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// <p>A complex type that specifies how CloudFront handles query strings and cookies.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForwardedValues {
    /// <p>Indicates whether you want CloudFront to forward query strings to the origin that is associated with this cache behavior and cache based on the query string parameters.</p>
    #[serde(rename = "QueryString", default, skip_serializing_if = "Option::is_none")]
    pub query_string: Option<bool>,
    /// <p>A complex type that specifies whether you want CloudFront to forward cookies to the origin and, if so, which ones.</p>
    #[serde(rename = "Cookies", default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<CookiePreference>,
    /// <p>A complex type that specifies the <code>Headers</code>, if any, that you want CloudFront to base caching on for this cache behavior.</p>
    #[serde(rename = "Headers", default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    /// <p>A complex type that contains information about the query string parameters that you want CloudFront to use for caching for this cache behavior.</p>
    #[serde(rename = "QueryStringCacheKeys", default, skip_serializing_if = "Option::is_none")]
    pub query_string_cache_keys: Option<QueryStringCacheKeys>,
}

/// <p>A complex type that specifies the AWS accounts, if any, that you want to allow to create signed URLs for private content.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrustedSigners {
    /// <p>Specifies whether you want to require viewers to use signed URLs to access the files specified by <code>PathPattern</code> and <code>TargetOriginId</code>.</p>
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// <p>The number of trusted signers for this cache behavior.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p><b>Optional</b>: A complex type that contains trusted signers for this cache behavior. If <code>Quantity</code> is <code>0</code>, you can omit <code>Items</code>.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// <p>A complex type that contains a Lambda function association.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LambdaFunctionAssociation {
    /// <p>The ARN of the Lambda function. You must specify the ARN of a function version; you can't specify a Lambda alias or $LATEST.</p>
    #[serde(rename = "LambdaFunctionARN", default, skip_serializing_if = "Option::is_none")]
    pub lambda_function_arn: Option<String>,
    /// <p>Specifies the event type that triggers a Lambda function invocation.</p>
    #[serde(rename = "EventType", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    /// <p>A flag that allows a Lambda function to have read access to the body content.</p>
    #[serde(rename = "IncludeBody", default, skip_serializing_if = "Option::is_none")]
    pub include_body: Option<bool>,
}

/// <p>A complex type that specifies a list of Lambda functions associations for a cache behavior.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LambdaFunctionAssociations {
    /// <p>The number of Lambda function associations for this cache behavior.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p><b>Optional</b>: A complex type that contains <code>LambdaFunctionAssociation</code> items for this cache behavior. If <code>Quantity</code> is <code>0</code>, you can omit <code>Items</code>.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LambdaFunctionAssociation>>,
}

/// <p>A complex type that describes the default cache behavior if you don't specify a <code>CacheBehavior</code> element or if files don't match any of the values of <code>PathPattern</code> in <code>CacheBehavior</code> elements. You must create exactly one default cache behavior.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultCacheBehavior {
    /// <p>The value of <code>ID</code> for the origin that you want CloudFront to route requests to when a request matches the path pattern either for a cache behavior or for the default cache behavior in your distribution.</p>
    #[serde(rename = "TargetOriginId", default, skip_serializing_if = "Option::is_none")]
    pub target_origin_id: Option<String>,
    /// <p>A complex type that specifies how CloudFront handles query strings and cookies.</p>
    #[serde(rename = "ForwardedValues", default, skip_serializing_if = "Option::is_none")]
    pub forwarded_values: Option<ForwardedValues>,
    /// <p>A complex type that specifies the AWS accounts, if any, that you want to allow to create signed URLs for private content.</p>
    #[serde(rename = "TrustedSigners", default, skip_serializing_if = "Option::is_none")]
    pub trusted_signers: Option<TrustedSigners>,
    /// <p>The protocol that viewers can use to access the files in the origin specified by <code>TargetOriginId</code> when a request matches the path pattern in <code>PathPattern</code>.</p>
    #[serde(rename = "ViewerProtocolPolicy", default, skip_serializing_if = "Option::is_none")]
    pub viewer_protocol_policy: Option<ViewerProtocolPolicy>,
    /// <p>The minimum amount of time that you want objects to stay in CloudFront caches before CloudFront forwards another request to your origin to determine whether the object has been updated.</p>
    #[serde(rename = "MinTTL", default, skip_serializing_if = "Option::is_none")]
    pub min_ttl: Option<i64>,
    #[serde(rename = "AllowedMethods", default, skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<AllowedMethods>,
    /// <p>Indicates whether you want to distribute media files in the Microsoft Smooth Streaming format using the origin that is associated with this cache behavior.</p>
    #[serde(rename = "SmoothStreaming", default, skip_serializing_if = "Option::is_none")]
    pub smooth_streaming: Option<bool>,
    /// <p>The default amount of time that you want objects to stay in CloudFront caches before CloudFront forwards another request to your origin to determine whether the object has been updated.</p>
    #[serde(rename = "DefaultTTL", default, skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<i64>,
    #[serde(rename = "MaxTTL", default, skip_serializing_if = "Option::is_none")]
    pub max_ttl: Option<i64>,
    /// <p>Whether you want CloudFront to automatically compress certain files for this cache behavior.</p>
    #[serde(rename = "Compress", default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
    /// <p>A complex type that contains zero or more Lambda function associations for a cache behavior.</p>
    #[serde(rename = "LambdaFunctionAssociations", default, skip_serializing_if = "Option::is_none")]
    pub lambda_function_associations: Option<LambdaFunctionAssociations>,
    /// <p>The value of <code>ID</code> for the field-level encryption configuration that you want CloudFront to use for encrypting specific fields of data for a cache behavior or for the default cache behavior in your distribution.</p>
    #[serde(rename = "FieldLevelEncryptionId", default, skip_serializing_if = "Option::is_none")]
    pub field_level_encryption_id: Option<String>,
}

/// <p>A complex type that describes how CloudFront processes requests.</p>
/// <p>You must create at least as many cache behaviors (including the default cache behavior) as you have origins if you want CloudFront to distribute objects from all of the origins.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CacheBehavior {
    /// <p>The pattern (for example, <code>images/*.jpg</code>) that specifies which requests to apply the behavior to. When CloudFront receives a viewer request, the requested path is compared with path patterns in the order in which cache behaviors are listed in the distribution.</p>
    #[serde(rename = "PathPattern", default, skip_serializing_if = "Option::is_none")]
    pub path_pattern: Option<String>,
    /// <p>The value of <code>ID</code> for the origin that you want CloudFront to route requests to when a request matches the path pattern either for a cache behavior or for the default cache behavior in your distribution.</p>
    #[serde(rename = "TargetOriginId", default, skip_serializing_if = "Option::is_none")]
    pub target_origin_id: Option<String>,
    /// <p>A complex type that specifies how CloudFront handles query strings and cookies.</p>
    #[serde(rename = "ForwardedValues", default, skip_serializing_if = "Option::is_none")]
    pub forwarded_values: Option<ForwardedValues>,
    /// <p>A complex type that specifies the AWS accounts, if any, that you want to allow to create signed URLs for private content.</p>
    #[serde(rename = "TrustedSigners", default, skip_serializing_if = "Option::is_none")]
    pub trusted_signers: Option<TrustedSigners>,
    /// <p>The protocol that viewers can use to access the files in the origin specified by <code>TargetOriginId</code> when a request matches the path pattern in <code>PathPattern</code>.</p>
    #[serde(rename = "ViewerProtocolPolicy", default, skip_serializing_if = "Option::is_none")]
    pub viewer_protocol_policy: Option<ViewerProtocolPolicy>,
    /// <p>The minimum amount of time that you want objects to stay in CloudFront caches before CloudFront forwards another request to your origin to determine whether the object has been updated.</p>
    #[serde(rename = "MinTTL", default, skip_serializing_if = "Option::is_none")]
    pub min_ttl: Option<i64>,
    #[serde(rename = "AllowedMethods", default, skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<AllowedMethods>,
    /// <p>Indicates whether you want to distribute media files in the Microsoft Smooth Streaming format using the origin that is associated with this cache behavior.</p>
    #[serde(rename = "SmoothStreaming", default, skip_serializing_if = "Option::is_none")]
    pub smooth_streaming: Option<bool>,
    /// <p>The default amount of time that you want objects to stay in CloudFront caches before CloudFront forwards another request to your origin to determine whether the object has been updated.</p>
    #[serde(rename = "DefaultTTL", default, skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<i64>,
    /// <p>The maximum amount of time that you want objects to stay in CloudFront caches before CloudFront forwards another request to your origin to determine whether the object has been updated.</p>
    #[serde(rename = "MaxTTL", default, skip_serializing_if = "Option::is_none")]
    pub max_ttl: Option<i64>,
    /// <p>Whether you want CloudFront to automatically compress certain files for this cache behavior.</p>
    #[serde(rename = "Compress", default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
    /// <p>A complex type that contains zero or more Lambda function associations for a cache behavior.</p>
    #[serde(rename = "LambdaFunctionAssociations", default, skip_serializing_if = "Option::is_none")]
    pub lambda_function_associations: Option<LambdaFunctionAssociations>,
    /// <p>The value of <code>ID</code> for the field-level encryption configuration that you want CloudFront to use for encrypting specific fields of data for a cache behavior or for the default cache behavior in your distribution.</p>
    #[serde(rename = "FieldLevelEncryptionId", default, skip_serializing_if = "Option::is_none")]
    pub field_level_encryption_id: Option<String>,
}

/// <p>A complex type that contains zero or more <code>CacheBehavior</code> elements.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CacheBehaviors {
    /// <p>The number of cache behaviors for this distribution.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>Optional: A complex type that contains cache behaviors for this distribution. If <code>Quantity</code> is <code>0</code>, you can omit <code>Items</code>.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CacheBehavior>>,
}

/// <p>A complex type that controls how CloudFront handles HTTP error codes from your origin, and how it caches the error responses.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomErrorResponse {
    /// <p>The HTTP status code for which you want to specify a custom error page and/or a caching duration.</p>
    #[serde(rename = "ErrorCode", default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    /// <p>The path to the custom error page that you want CloudFront to return to a viewer when your origin returns the HTTP status code specified by <code>ErrorCode</code>, for example, <code>/4xx-errors/403-forbidden.html</code>.</p>
    #[serde(rename = "ResponsePagePath", default, skip_serializing_if = "Option::is_none")]
    pub response_page_path: Option<String>,
    /// <p>The HTTP status code that you want CloudFront to return to the viewer along with the custom error page.</p>
    #[serde(rename = "ResponseCode", default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    /// <p>The minimum amount of time, in seconds, that you want CloudFront to cache the HTTP status code specified in <code>ErrorCode</code>.</p>
    #[serde(rename = "ErrorCachingMinTTL", default, skip_serializing_if = "Option::is_none")]
    pub error_caching_min_ttl: Option<i64>,
}

/// <p>A complex type that controls custom error responses.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomErrorResponses {
    /// <p>The number of HTTP status codes for which you want to specify a custom error page and/or a caching duration. If <code>Quantity</code> is <code>0</code>, you can omit <code>Items</code>.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains a <code>CustomErrorResponse</code> element for each HTTP status code for which you want to specify a custom error page and/or a caching duration.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CustomErrorResponse>>,
}

/// <p>A complex type that controls whether access logs are written for the distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// <p>Specifies whether you want CloudFront to save access logs to an Amazon S3 bucket. If you don't want to enable logging when you create a distribution or if you want to disable logging for an existing distribution, specify <code>false</code> for <code>Enabled</code>, and specify empty <code>Bucket</code> and <code>Prefix</code> elements.</p>
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// <p>Specifies whether you want CloudFront to include cookies in access logs.</p>
    #[serde(rename = "IncludeCookies", default, skip_serializing_if = "Option::is_none")]
    pub include_cookies: Option<bool>,
    /// <p>The Amazon S3 bucket to store the access logs in, for example, <code>myawslogbucket.s3.amazonaws.com</code>.</p>
    #[serde(rename = "Bucket", default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// <p>An optional string that you want CloudFront to prefix to the access log filenames for this distribution, for example, <code>myprefix/</code>.</p>
    #[serde(rename = "Prefix", default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// <p>A complex type that specifies the SSL/TLS configuration for communication with viewers.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewerCertificate {
    /// <p>True if you want viewers to use HTTPS to request your objects and you're using the CloudFront domain name for your distribution.</p>
    #[serde(rename = "CloudFrontDefaultCertificate", default, skip_serializing_if = "Option::is_none")]
    pub cloud_front_default_certificate: Option<bool>,
    /// <p>The ID of a certificate stored in AWS Identity and Access Management (IAM), if you want viewers to use HTTPS to request your objects and you're using an alternate domain name.</p>
    #[serde(rename = "IAMCertificateId", default, skip_serializing_if = "Option::is_none")]
    pub iam_certificate_id: Option<String>,
    /// <p>The ARN of a certificate stored in AWS Certificate Manager (ACM), if you want viewers to use HTTPS to request your objects and you're using an alternate domain name. The certificate must be in the US East (N. Virginia) Region.</p>
    #[serde(rename = "ACMCertificateArn", default, skip_serializing_if = "Option::is_none")]
    pub acm_certificate_arn: Option<String>,
    /// <p>If you specify a value for <code>ACMCertificateArn</code> or for <code>IAMCertificateId</code>, you must also specify how you want CloudFront to serve HTTPS requests.</p>
    #[serde(rename = "SSLSupportMethod", default, skip_serializing_if = "Option::is_none")]
    pub ssl_support_method: Option<SslSupportMethod>,
    /// <p>Specify the security policy that you want CloudFront to use for HTTPS connections.</p>
    #[serde(rename = "MinimumProtocolVersion", default, skip_serializing_if = "Option::is_none")]
    pub minimum_protocol_version: Option<MinimumProtocolVersion>,
}

/// <p>A complex type that controls the countries in which your content is distributed. CloudFront determines the location of your users using <code>MaxMind</code> GeoIP databases.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoRestriction {
    /// <p>The method that you want to use to restrict distribution of your content by country.</p>
    #[serde(rename = "RestrictionType", default, skip_serializing_if = "Option::is_none")]
    pub restriction_type: Option<GeoRestrictionType>,
    /// <p>The number of countries in your <code>blacklist</code> or <code>whitelist</code>.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains a <code>Location</code> element for each country in which you want CloudFront either to distribute your content (<code>whitelist</code>) or not distribute your content (<code>blacklist</code>).</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// <p>A complex type that identifies ways in which you want to restrict distribution of your content.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Restrictions {
    #[serde(rename = "GeoRestriction", default, skip_serializing_if = "Option::is_none")]
    pub geo_restriction: Option<GeoRestriction>,
}

/// <p>A distribution configuration.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// <p>A unique value (for example, a date-time stamp) that ensures that the request can't be replayed. If the <code>CallerReference</code> is a value that you already sent in a previous request to create a distribution, CloudFront returns a <code>DistributionAlreadyExists</code> error.</p>
    #[serde(rename = "CallerReference", default, skip_serializing_if = "Option::is_none")]
    pub caller_reference: Option<String>,
    /// <p>A complex type that contains information about CNAMEs (alternate domain names), if any, for this distribution.</p>
    #[serde(rename = "Aliases", default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Aliases>,
    /// <p>The object that you want CloudFront to request from your origin (for example, <code>index.html</code>) when a viewer requests the root URL for your distribution.</p>
    #[serde(rename = "DefaultRootObject", default, skip_serializing_if = "Option::is_none")]
    pub default_root_object: Option<String>,
    /// <p>A complex type that contains information about origins for this distribution.</p>
    #[serde(rename = "Origins", default, skip_serializing_if = "Option::is_none")]
    pub origins: Option<Origins>,
    /// <p>A complex type that describes the default cache behavior if you don't specify a <code>CacheBehavior</code> element or if files don't match any of the values of <code>PathPattern</code> in <code>CacheBehavior</code> elements.</p>
    #[serde(rename = "DefaultCacheBehavior", default, skip_serializing_if = "Option::is_none")]
    pub default_cache_behavior: Option<DefaultCacheBehavior>,
    /// <p>A complex type that contains zero or more <code>CacheBehavior</code> elements.</p>
    #[serde(rename = "CacheBehaviors", default, skip_serializing_if = "Option::is_none")]
    pub cache_behaviors: Option<CacheBehaviors>,
    /// <p>A complex type that controls custom error responses.</p>
    #[serde(rename = "CustomErrorResponses", default, skip_serializing_if = "Option::is_none")]
    pub custom_error_responses: Option<CustomErrorResponses>,
    /// <p>Any comments you want to include about the distribution. The comment cannot be longer than 128 characters.</p>
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// <p>A complex type that controls whether access logs are written for the distribution.</p>
    #[serde(rename = "Logging", default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
    /// <p>The price class that corresponds with the maximum price that you want to pay for CloudFront service.</p>
    #[serde(rename = "PriceClass", default, skip_serializing_if = "Option::is_none")]
    pub price_class: Option<PriceClass>,
    /// <p>From this field, you can enable or disable the selected distribution.</p>
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "ViewerCertificate", default, skip_serializing_if = "Option::is_none")]
    pub viewer_certificate: Option<ViewerCertificate>,
    #[serde(rename = "Restrictions", default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restrictions>,
    /// <p>A unique identifier that specifies the AWS WAF web ACL, if any, to associate with this distribution.</p>
    #[serde(rename = "WebACLId", default, skip_serializing_if = "Option::is_none")]
    pub web_acl_id: Option<String>,
    /// <p>(Optional) Specify the maximum HTTP version that you want viewers to use to communicate with CloudFront. The default value for new web distributions is http2.</p>
    #[serde(rename = "HttpVersion", default, skip_serializing_if = "Option::is_none")]
    pub http_version: Option<HttpVersion>,
    /// <p>If you want CloudFront to respond to IPv6 DNS requests with an IPv6 address for your distribution, specify <code>true</code>.</p>
    #[serde(rename = "IsIPV6Enabled", default, skip_serializing_if = "Option::is_none")]
    pub is_ipv6_enabled: Option<bool>,
}

/// <p>A complex type that lists the active CloudFront key pairs, if any, that are associated with <code>AwsAccountNumber</code>.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyPairIds {
    /// <p>The number of active CloudFront key pairs for <code>AwsAccountNumber</code>.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that lists the active CloudFront key pairs, if any, that are associated with <code>AwsAccountNumber</code>.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

/// <p>A complex type that lists the AWS accounts that were included in the <code>TrustedSigners</code> complex type, as well as their active CloudFront key pair IDs, if any.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signer {
    /// <p>An AWS account that is included in the <code>TrustedSigners</code> complex type for this distribution. <code>self</code> is the AWS account that contains the distribution.</p>
    #[serde(rename = "AwsAccountNumber", default, skip_serializing_if = "Option::is_none")]
    pub aws_account_number: Option<String>,
    #[serde(rename = "KeyPairIds", default, skip_serializing_if = "Option::is_none")]
    pub key_pair_ids: Option<KeyPairIds>,
}

/// <p>A complex type that lists the AWS accounts, if any, that you included in the <code>TrustedSigners</code> complex type for this distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActiveTrustedSigners {
    /// <p>Enabled is <code>true</code> if any of the AWS accounts listed in the <code>TrustedSigners</code> complex type for this distribution have active CloudFront key pairs. If not, <code>Enabled</code> is <code>false</code>.</p>
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// <p>The number of trusted signers specified in the <code>TrustedSigners</code> complex type.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains one <code>Signer</code> complex type for each trusted signer that is specified in the <code>TrustedSigners</code> complex type.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Signer>>,
}

/// <p>The distribution's information.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Distribution {
    /// <p>The identifier for the distribution. For example: <code>EDFDVBD632BHDS5</code>.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The ARN (Amazon Resource Name) for the distribution. For example: <code>arn:aws:cloudfront::123456789012:distribution/EDFDVBD632BHDS5</code>, where <code>123456789012</code> is your AWS account ID.</p>
    #[serde(rename = "ARN", default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// <p>This response element indicates the current status of the distribution. When the status is <code>Deployed</code>, the distribution's information is fully propagated to all CloudFront edge locations.</p>
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// <p>The date and time the distribution was last modified.</p>
    #[serde(rename = "LastModifiedTime", with = "shape_types::serde_util::instant_iso8601::option", default, skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<shape_types::Instant>,
    /// <p>The number of invalidation batches currently in progress.</p>
    #[serde(rename = "InProgressInvalidationBatches", default, skip_serializing_if = "Option::is_none")]
    pub in_progress_invalidation_batches: Option<i64>,
    /// <p>The domain name corresponding to the distribution, for example, <code>d111111abcdef8.cloudfront.net</code>.</p>
    #[serde(rename = "DomainName", default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// <p>CloudFront automatically adds this element to the response only if you've set up the distribution to serve private content with signed URLs.</p>
    #[serde(rename = "ActiveTrustedSigners", default, skip_serializing_if = "Option::is_none")]
    pub active_trusted_signers: Option<ActiveTrustedSigners>,
    /// <p>The current configuration information for the distribution.</p>
    #[serde(rename = "DistributionConfig", default, skip_serializing_if = "Option::is_none")]
    pub distribution_config: Option<DistributionConfig>,
}

/// <p>A summary of the information about a CloudFront distribution.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// <p>The identifier for the distribution. For example: <code>EDFDVBD632BHDS5</code>.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The ARN (Amazon Resource Name) for the distribution.</p>
    #[serde(rename = "ARN", default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// <p>The current status of the distribution. When the status is <code>Deployed</code>, the distribution's information is propagated to all CloudFront edge locations.</p>
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// <p>The date and time the distribution was last modified.</p>
    #[serde(rename = "LastModifiedTime", with = "shape_types::serde_util::instant_iso8601::option", default, skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<shape_types::Instant>,
    /// <p>The domain name that corresponds to the distribution, for example, <code>d111111abcdef8.cloudfront.net</code>.</p>
    #[serde(rename = "DomainName", default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// <p>A complex type that contains information about CNAMEs (alternate domain names), if any, for this distribution.</p>
    #[serde(rename = "Aliases", default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Aliases>,
    /// <p>A complex type that contains information about origins for this distribution.</p>
    #[serde(rename = "Origins", default, skip_serializing_if = "Option::is_none")]
    pub origins: Option<Origins>,
    /// <p>A complex type that describes the default cache behavior if you don't specify a <code>CacheBehavior</code> element or if files don't match any of the values of <code>PathPattern</code> in <code>CacheBehavior</code> elements.</p>
    #[serde(rename = "DefaultCacheBehavior", default, skip_serializing_if = "Option::is_none")]
    pub default_cache_behavior: Option<DefaultCacheBehavior>,
    /// <p>A complex type that contains zero or more <code>CacheBehavior</code> elements.</p>
    #[serde(rename = "CacheBehaviors", default, skip_serializing_if = "Option::is_none")]
    pub cache_behaviors: Option<CacheBehaviors>,
    /// <p>A complex type that contains zero or more <code>CustomErrorResponses</code> elements.</p>
    #[serde(rename = "CustomErrorResponses", default, skip_serializing_if = "Option::is_none")]
    pub custom_error_responses: Option<CustomErrorResponses>,
    /// <p>The comment originally specified when this distribution was created.</p>
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "PriceClass", default, skip_serializing_if = "Option::is_none")]
    pub price_class: Option<PriceClass>,
    /// <p>Whether the distribution is enabled to accept user requests for content.</p>
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "ViewerCertificate", default, skip_serializing_if = "Option::is_none")]
    pub viewer_certificate: Option<ViewerCertificate>,
    #[serde(rename = "Restrictions", default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Restrictions>,
    /// <p>The Web ACL Id (if any) associated with the distribution.</p>
    #[serde(rename = "WebACLId", default, skip_serializing_if = "Option::is_none")]
    pub web_acl_id: Option<String>,
    /// <p>Specify the maximum HTTP version that you want viewers to use to communicate with CloudFront.</p>
    #[serde(rename = "HttpVersion", default, skip_serializing_if = "Option::is_none")]
    pub http_version: Option<HttpVersion>,
    /// <p>Whether CloudFront responds to IPv6 DNS requests with an IPv6 address for your distribution.</p>
    #[serde(rename = "IsIPV6Enabled", default, skip_serializing_if = "Option::is_none")]
    pub is_ipv6_enabled: Option<bool>,
}

/// <p>A distribution list.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributionList {
    /// <p>The value you provided for the <code>Marker</code> request parameter.</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>If <code>IsTruncated</code> is <code>true</code>, this element is present and contains the value you can use for the <code>Marker</code> request parameter to continue listing your distributions where they left off.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// <p>The value you provided for the <code>MaxItems</code> request parameter.</p>
    #[serde(rename = "MaxItems", default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    /// <p>A flag that indicates whether more distributions remain to be listed. If your results were truncated, you can make a follow-up pagination request using the <code>Marker</code> request parameter to retrieve more distributions in the list.</p>
    #[serde(rename = "IsTruncated", default, skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    /// <p>The number of distributions that were created by the current AWS account.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains one <code>DistributionSummary</code> element for each distribution that was created by the current AWS account.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DistributionSummary>>,
}

/// <p>An invalidation batch.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvalidationBatch {
    /// <p>A complex type that contains information about the objects that you want to invalidate.</p>
    #[serde(rename = "Paths", default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Paths>,
    /// <p>A value that you specify to uniquely identify an invalidation request. CloudFront uses the value to prevent you from accidentally resubmitting an identical request.</p>
    #[serde(rename = "CallerReference", default, skip_serializing_if = "Option::is_none")]
    pub caller_reference: Option<String>,
}

/// <p>An invalidation.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Invalidation {
    /// <p>The identifier for the invalidation request. For example: <code>IDFDVBD632BHDS5</code>.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The status of the invalidation request. When the invalidation batch is finished, the status is <code>Completed</code>.</p>
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// <p>The date and time the invalidation request was first made.</p>
    #[serde(rename = "CreateTime", with = "shape_types::serde_util::instant_iso8601::option", default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<shape_types::Instant>,
    /// <p>The current invalidation information for the batch request.</p>
    #[serde(rename = "InvalidationBatch", default, skip_serializing_if = "Option::is_none")]
    pub invalidation_batch: Option<InvalidationBatch>,
}

/// <p>A summary of an invalidation request.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvalidationSummary {
    /// <p>The unique ID for an invalidation request.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "CreateTime", with = "shape_types::serde_util::instant_iso8601::option", default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<shape_types::Instant>,
    /// <p>The status of an invalidation request.</p>
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// <p>The <code>InvalidationList</code> complex type describes the list of invalidation objects.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvalidationList {
    /// <p>The value that you provided for the <code>Marker</code> request parameter.</p>
    #[serde(rename = "Marker", default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// <p>If <code>IsTruncated</code> is <code>true</code>, this element is present and contains the value that you can use for the <code>Marker</code> request parameter to continue listing your invalidation batches where they left off.</p>
    #[serde(rename = "NextMarker", default, skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    /// <p>The value that you provided for the <code>MaxItems</code> request parameter.</p>
    #[serde(rename = "MaxItems", default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    /// <p>A flag that indicates whether more invalidation batch requests remain to be listed. If your results were truncated, you can make a follow-up pagination request using the <code>Marker</code> request parameter to retrieve more invalidation batches in the list.</p>
    #[serde(rename = "IsTruncated", default, skip_serializing_if = "Option::is_none")]
    pub is_truncated: Option<bool>,
    /// <p>The number of invalidation batches that were created by the current AWS account.</p>
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// <p>A complex type that contains one <code>InvalidationSummary</code> element for each invalidation batch created by the current AWS account.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<InvalidationSummary>>,
}

/// <p>A complex type that contains <code>Tag</code> key and <code>Tag</code> value.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tag {
    /// <p>A string that contains <code>Tag</code> key. The string length should be between 1 and 128 characters. Valid characters include <code>a-z</code>, <code>A-Z</code>, <code>0-9</code>, space, and the special characters <code>_ - . : / = + @</code>.</p>
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// <p>A string that contains an optional <code>Tag</code> value. The string length should be between 0 and 256 characters.</p>
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// <p>A complex type that contains zero or more <code>Tag</code> elements.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tags {
    /// <p>A complex type that contains <code>Tag</code> elements.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Tag>>,
}

/// <p>A complex type that contains zero or more <code>Tag</code> elements.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagKeys {
    /// <p>A complex type that contains <code>Tag</code> key elements.</p>
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}
