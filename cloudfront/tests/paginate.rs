/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use cloudfront::error::Error;
use cloudfront::input::ListDistributionsInput;
use cloudfront::model::{DistributionList, DistributionSummary};
use cloudfront::output::ListDistributionsOutput;
use shape_types::PageableRequest;

fn page(ids: &[&str], next_marker: Option<&str>, is_truncated: bool) -> ListDistributionsOutput {
    ListDistributionsOutput {
        distribution_list: Some(DistributionList {
            next_marker: next_marker.map(str::to_string),
            is_truncated: Some(is_truncated),
            quantity: Some(ids.len() as i64),
            items: Some(
                ids.iter()
                    .map(|id| DistributionSummary {
                        id: Some((*id).to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn paginate_reads_the_marker_out_of_the_list_body() {
    let mut seen_markers = Vec::new();
    let mut pages = vec![
        page(&["EDFDVBD632BHDS5"], Some("EMLARXS9EXAMPLE"), true),
        page(&["E2QWRUHAPOMQZL"], None, false),
    ]
    .into_iter();

    let input = ListDistributionsInput::builder().max_items(1).build();
    let results: Vec<ListDistributionsOutput> = input
        .paginate(|req: &ListDistributionsInput| -> Result<_, Error> {
            seen_markers.push(req.marker.clone());
            Ok(pages.next().expect("paginator requested too many pages"))
        })
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(
        seen_markers,
        vec![None, Some("EMLARXS9EXAMPLE".to_string())]
    );
}

#[test]
fn paginate_stops_when_is_truncated_is_false_even_with_a_marker() {
    // Some list responses still carry a NextMarker on the last page; the
    // IsTruncated flag is authoritative.
    let mut calls = 0;
    let input = ListDistributionsInput::builder().build();
    let results: Vec<Result<ListDistributionsOutput, Error>> = input
        .paginate(|_req: &ListDistributionsInput| {
            calls += 1;
            Ok(page(&["EDFDVBD632BHDS5"], Some("EMLARXS9EXAMPLE"), false))
        })
        .collect();

    assert_eq!(calls, 1);
    assert_eq!(results.len(), 1);
}

#[test]
fn cloudfront_error_codes_map_to_their_exceptions() {
    let err = Error::from_parts(
        "CNAMEAlreadyExists",
        Some("One or more of the CNAMEs you provided are already associated with a different resource.".to_string()),
        None,
    );
    assert!(matches!(err, Error::CnameAlreadyExists(_)));
    assert_eq!(err.code(), Some("CNAMEAlreadyExists"));

    let err = Error::from_parts("NoSuchDistribution", None, None);
    assert_eq!(err.to_string(), "NoSuchDistribution");
}
