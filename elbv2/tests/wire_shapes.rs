/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use elbv2::model::{
    Action, ActionTypeEnum, LoadBalancer, LoadBalancerSchemeEnum, LoadBalancerStateEnum,
    ProtocolEnum, TargetHealthReasonEnum,
};
use elbv2::output::DescribeLoadBalancersOutput;
use shape_types::Instant;

/// Field names on the wire are the service's CamelCase names, absent fields
/// are omitted entirely, and timestamps use the ISO-8601 format ELBv2 speaks.
#[test]
fn load_balancer_serializes_with_wire_names() {
    let lb = LoadBalancer {
        load_balancer_name: Some("my-load-balancer".to_string()),
        scheme: Some(LoadBalancerSchemeEnum::InternetFacing),
        created_time: Some(Instant::from_secs(1576540098)),
        ..Default::default()
    };
    let json = serde_json::to_string(&lb).unwrap();
    assert_eq!(
        json,
        "{\"CreatedTime\":\"2019-12-16T23:48:18Z\",\"LoadBalancerName\":\"my-load-balancer\",\
         \"Scheme\":\"internet-facing\"}"
    );
}

#[test]
fn describe_output_round_trips_request_id() {
    let body = r#"{
        "LoadBalancers": [
            {
                "LoadBalancerArn": "arn:aws:elasticloadbalancing:us-west-2:123456789012:loadbalancer/app/my-load-balancer/50dc6c495c0c9188",
                "State": { "Code": "active" },
                "Type": "application"
            }
        ],
        "NextMarker": "MJIxNjM0NDUzNDU2",
        "ResponseMetadata": { "RequestId": "34832b98-cd4e-11e6-86b0-8be3c50219cd" }
    }"#;
    let output: DescribeLoadBalancersOutput = serde_json::from_str(body).unwrap();
    assert_eq!(
        output.response_metadata.request_id.as_deref(),
        Some("34832b98-cd4e-11e6-86b0-8be3c50219cd")
    );
    let balancers = output.load_balancers.as_ref().unwrap();
    assert_eq!(
        balancers[0].state.as_ref().unwrap().code,
        Some(LoadBalancerStateEnum::Active)
    );
    assert_eq!(output.next_marker.as_deref(), Some("MJIxNjM0NDUzNDU2"));
}

/// A response body that never mentions `ResponseMetadata` still deserializes;
/// the metadata comes back empty and is skipped on re-serialization.
#[test]
fn missing_response_metadata_is_tolerated() {
    let output: DescribeLoadBalancersOutput = serde_json::from_str("{}").unwrap();
    assert!(output.response_metadata.is_empty());
    assert_eq!(serde_json::to_string(&output).unwrap(), "{}");
}

/// Enum values the client does not know yet survive a round trip unchanged.
#[test]
fn unknown_enum_values_are_preserved() {
    let action: Action = serde_json::from_str(r#"{"Type": "quantum-forward"}"#).unwrap();
    assert_eq!(
        action.type_,
        Some(ActionTypeEnum::Unknown("quantum-forward".to_string()))
    );
    assert_eq!(
        serde_json::to_string(&action).unwrap(),
        "{\"Type\":\"quantum-forward\"}"
    );
}

#[test]
fn dotted_health_reason_codes_resolve() {
    assert_eq!(
        TargetHealthReasonEnum::from("Elb.RegistrationInProgress"),
        TargetHealthReasonEnum::ElbRegistrationInProgress
    );
    assert_eq!(
        TargetHealthReasonEnum::ElbRegistrationInProgress.as_str(),
        "Elb.RegistrationInProgress"
    );
}

#[test]
fn protocol_enum_values_match_the_wire() {
    assert_eq!(ProtocolEnum::TcpUdp.as_str(), "TCP_UDP");
    assert_eq!(ProtocolEnum::from("GENEVE"), ProtocolEnum::Geneve);
}
