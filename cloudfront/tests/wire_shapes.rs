/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudfront::model::{
    Aliases, Distribution, DistributionConfig, GeoRestriction, GeoRestrictionType, Method,
    MinimumProtocolVersion, PriceClass,
};
use cloudfront::output::GetDistributionOutput;
use shape_types::Instant;

#[test]
fn collections_keep_the_quantity_items_convention() {
    let aliases = Aliases {
        quantity: Some(2),
        items: Some(vec![
            "example.com".to_string(),
            "www.example.com".to_string(),
        ]),
    };
    assert_eq!(
        serde_json::to_string(&aliases).unwrap(),
        r#"{"Quantity":2,"Items":["example.com","www.example.com"]}"#
    );
}

#[test]
fn distribution_timestamps_serialize_as_iso8601() {
    let distribution = Distribution {
        id: Some("EDFDVBD632BHDS5".to_string()),
        last_modified_time: Some(Instant::from_secs(1576540098)),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_string(&distribution).unwrap(),
        r#"{"Id":"EDFDVBD632BHDS5","LastModifiedTime":"2019-12-16T23:48:18Z"}"#
    );
}

#[test]
fn acronym_heavy_wire_names_survive_the_round_trip() {
    let json = r#"{
        "CallerReference": "2020-03-01-0001",
        "WebACLId": "473e64fd-f30b-4765-81a0-62ad96dd167a",
        "IsIPV6Enabled": true,
        "PriceClass": "PriceClass_200"
    }"#;
    let config: DistributionConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
        config.web_acl_id.as_deref(),
        Some("473e64fd-f30b-4765-81a0-62ad96dd167a")
    );
    assert_eq!(config.is_ipv6_enabled, Some(true));
    assert_eq!(config.price_class, Some(PriceClass::PriceClass200));

    let round = serde_json::to_value(&config).unwrap();
    assert_eq!(round["WebACLId"], "473e64fd-f30b-4765-81a0-62ad96dd167a");
    assert_eq!(round["IsIPV6Enabled"], true);
}

#[test]
fn e_tag_keeps_its_wire_capitalization() {
    let json = r#"{"ETag":"E2QWRUHAPOMQZL","ResponseMetadata":{"RequestId":"req-1234"}}"#;
    let output: GetDistributionOutput = serde_json::from_str(json).unwrap();
    assert_eq!(output.e_tag.as_deref(), Some("E2QWRUHAPOMQZL"));
    assert_eq!(output.response_metadata.request_id.as_deref(), Some("req-1234"));
    assert_eq!(serde_json::to_string(&output).unwrap(), json);
}

#[test]
fn unknown_enum_values_are_preserved() {
    let method: Method = serde_json::from_str(r#""PURGE""#).unwrap();
    assert_eq!(method, Method::Unknown("PURGE".to_string()));
    assert_eq!(serde_json::to_string(&method).unwrap(), r#""PURGE""#);

    let version: MinimumProtocolVersion = serde_json::from_str(r#""TLSv1.2_2021""#).unwrap();
    assert_eq!(
        version,
        MinimumProtocolVersion::Unknown("TLSv1.2_2021".to_string())
    );
}

#[test]
fn geo_restriction_types_match_the_wire() {
    let restriction = GeoRestriction {
        restriction_type: Some(GeoRestrictionType::Whitelist),
        quantity: Some(1),
        items: Some(vec!["DE".to_string()]),
    };
    assert_eq!(
        serde_json::to_string(&restriction).unwrap(),
        r#"{"RestrictionType":"whitelist","Quantity":1,"Items":["DE"]}"#
    );
}
