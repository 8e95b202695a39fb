/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use glue::error::Error;
use glue::input::StartJobRunInput;
use glue::model::{JobRun, JobRunState, WorkerType};
use glue::output::{GetJobRunsOutput, GetTablesOutput};
use shape_types::Instant;

/// Glue timestamps travel as fractional epoch seconds, not ISO-8601 strings.
#[test]
fn job_run_timestamps_serialize_as_epoch_seconds() {
    let run = JobRun {
        id: Some("jr_abc123".to_string()),
        started_on: Some(Instant::from_fractional_secs(1576540098, 0.5)),
        job_run_state: Some(JobRunState::Running),
        ..Default::default()
    };
    let json = serde_json::to_string(&run).unwrap();
    assert_eq!(
        json,
        "{\"Id\":\"jr_abc123\",\"StartedOn\":1576540098.5,\"JobRunState\":\"RUNNING\"}"
    );
}

#[test]
fn job_run_timestamps_deserialize_from_epoch_seconds() {
    let run: JobRun = serde_json::from_str("{\"StartedOn\":1576540098.5}").unwrap();
    assert_eq!(
        run.started_on,
        Some(Instant::from_fractional_secs(1576540098, 0.5))
    );
}

#[test]
fn worker_type_dotted_values_round_trip() {
    assert_eq!(WorkerType::G1x.as_str(), "G.1X");
    let parsed: WorkerType = serde_json::from_str("\"G.2X\"").unwrap();
    assert_eq!(parsed, WorkerType::G2x);
    let future: WorkerType = serde_json::from_str("\"Z.8X\"").unwrap();
    assert_eq!(future, WorkerType::Unknown("Z.8X".to_string()));
}

#[test]
fn get_tables_output_keeps_request_id_and_token() {
    let body = r#"{
        "TableList": [
            { "Name": "events", "DatabaseName": "analytics", "CreateTime": 1546351200 }
        ],
        "NextToken": "eyJsYXN0IjoiZXZlbnRzIn0=",
        "ResponseMetadata": { "RequestId": "5ba2b3f4-cd4e-11e6-86b0-8be3c50219cd" }
    }"#;
    let output: GetTablesOutput = serde_json::from_str(body).unwrap();
    let tables = output.table_list.as_ref().unwrap();
    assert_eq!(tables[0].create_time, Some(Instant::from_secs(1546351200)));
    assert_eq!(output.next_token.as_deref(), Some("eyJsYXN0IjoiZXZlbnRzIn0="));
    assert_eq!(
        output.response_metadata.request_id.as_deref(),
        Some("5ba2b3f4-cd4e-11e6-86b0-8be3c50219cd")
    );
}

#[test]
fn start_job_run_builder_serializes_arguments_map() {
    let mut input = StartJobRunInput::builder()
        .job_name("nightly-etl")
        .timeout(30)
        .build();
    let mut arguments = std::collections::HashMap::new();
    arguments.insert("--conf".to_string(), "spark.driver.memory=2g".to_string());
    input.arguments = Some(arguments);

    let json = serde_json::to_string(&input).unwrap();
    assert_eq!(
        json,
        "{\"JobName\":\"nightly-etl\",\"Arguments\":{\"--conf\":\"spark.driver.memory=2g\"},\
         \"Timeout\":30}"
    );
}

#[test]
fn glue_error_codes_are_the_exception_names() {
    let err = Error::from_parts(
        "EntityNotFoundException",
        Some("Database analytics not found".to_string()),
        None,
    );
    assert!(matches!(err, Error::EntityNotFoundException(_)));
    assert_eq!(
        err.to_string(),
        "EntityNotFoundException: Database analytics not found"
    );
}

#[test]
fn paged_job_runs_stop_on_missing_token() {
    use shape_types::PageableRequest;

    let mut pages = vec![
        GetJobRunsOutput {
            job_runs: Some(vec![JobRun::default()]),
            next_token: Some("page-2".to_string()),
            ..Default::default()
        },
        GetJobRunsOutput {
            job_runs: Some(vec![JobRun::default()]),
            ..Default::default()
        },
    ]
    .into_iter();

    let input = glue::input::GetJobRunsInput::builder()
        .job_name("nightly-etl")
        .build();
    let count = input
        .paginate(|_req: &glue::input::GetJobRunsInput| -> Result<_, Error> {
            Ok(pages.next().expect("requested too many pages"))
        })
        .count();
    assert_eq!(count, 2);
}
