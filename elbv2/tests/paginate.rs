/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use elbv2::error::Error;
use elbv2::input::DescribeLoadBalancersInput;
use elbv2::model::LoadBalancer;
use elbv2::output::DescribeLoadBalancersOutput;
use shape_types::PageableRequest;

fn page(names: &[&str], next_marker: Option<&str>) -> DescribeLoadBalancersOutput {
    DescribeLoadBalancersOutput {
        load_balancers: Some(
            names
                .iter()
                .map(|name| LoadBalancer {
                    load_balancer_name: Some((*name).to_string()),
                    ..Default::default()
                })
                .collect(),
        ),
        next_marker: next_marker.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn paginate_feeds_the_marker_back_into_the_request() {
    let mut seen_markers = Vec::new();
    let mut pages = vec![
        page(&["lb-1", "lb-2"], Some("marker-1")),
        page(&["lb-3"], None),
    ]
    .into_iter();

    let input = DescribeLoadBalancersInput::builder().page_size(2).build();
    let results: Vec<DescribeLoadBalancersOutput> = input
        .paginate(|req: &DescribeLoadBalancersInput| -> Result<_, Error> {
            seen_markers.push(req.marker.clone());
            Ok(pages.next().expect("paginator requested too many pages"))
        })
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(seen_markers, vec![None, Some("marker-1".to_string())]);
    let names: Vec<_> = results
        .iter()
        .flat_map(|out| out.load_balancers.iter().flatten())
        .filter_map(|lb| lb.load_balancer_name.as_deref())
        .collect();
    assert_eq!(names, vec!["lb-1", "lb-2", "lb-3"]);
}

#[test]
fn paginate_surfaces_the_error_and_stops() {
    let mut calls = 0;
    let input = DescribeLoadBalancersInput::builder().build();
    let results: Vec<Result<DescribeLoadBalancersOutput, Error>> = input
        .paginate(|_req: &DescribeLoadBalancersInput| {
            calls += 1;
            Err(Error::from_parts(
                "LoadBalancerNotFound",
                Some("not found".to_string()),
                None,
            ))
        })
        .collect();

    assert_eq!(calls, 1);
    assert_eq!(results.len(), 1);
    assert!(matches!(
        results[0],
        Err(Error::LoadBalancerNotFoundException(_))
    ));
}
