/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */


//! Response shapes for AWS Glue operations.
//!
//! Every output carries a [`shape_types::ResponseMetadata`] with the request
//! ID the service assigned. Outputs for paginated operations implement
//! [`shape_types::PagedOutput`] through their `NextToken` field.

use serde::{Deserialize, Serialize};
use shape_types::PagedOutput;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateDatabaseOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetDatabaseOutput {
    /// <p>The definition of the specified database in the Data Catalog.</p>
    #[serde(rename = "Database", default, skip_serializing_if = "Option::is_none")]
    pub database: Option<crate::model::Database>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetDatabasesOutput {
    /// <p>A list of <code>Database</code> objects from the specified catalog.</p>
    #[serde(rename = "DatabaseList", default, skip_serializing_if = "Option::is_none")]
    pub database_list: Option<Vec<crate::model::Database>>,
    /// <p>A continuation token, if not all items have yet been returned.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateDatabaseOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteDatabaseOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTableOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTableOutput {
    /// <p>The <code>Table</code> object that defines the specified table.</p>
    #[serde(rename = "Table", default, skip_serializing_if = "Option::is_none")]
    pub table: Option<crate::model::Table>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTablesOutput {
    /// <p>A list of the requested <code>Table</code> objects.</p>
    #[serde(rename = "TableList", default, skip_serializing_if = "Option::is_none")]
    pub table_list: Option<Vec<crate::model::Table>>,
    /// <p>A continuation token, if not all items have yet been returned.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateTableOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteTableOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateJobOutput {
    /// <p>The unique name that was provided for this job definition.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetJobOutput {
    /// <p>The requested job definition.</p>
    #[serde(rename = "Job", default, skip_serializing_if = "Option::is_none")]
    pub job: Option<crate::model::Job>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetJobsOutput {
    /// <p>A list of job definitions.</p>
    #[serde(rename = "Jobs", default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<crate::model::Job>>,
    /// <p>A continuation token, if not all items have yet been returned.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateJobOutput {
    /// <p>Returns the name of the updated job definition.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteJobOutput {
    /// <p>The name of the job definition that was deleted.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StartJobRunOutput {
    /// <p>The ID assigned to this job run.</p>
    #[serde(rename = "JobRunId", default, skip_serializing_if = "Option::is_none")]
    pub job_run_id: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetJobRunOutput {
    /// <p>The requested job-run metadata.</p>
    #[serde(rename = "JobRun", default, skip_serializing_if = "Option::is_none")]
    pub job_run: Option<crate::model::JobRun>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetJobRunsOutput {
    /// <p>A list of job-run metadata objects.</p>
    #[serde(rename = "JobRuns", default, skip_serializing_if = "Option::is_none")]
    pub job_runs: Option<Vec<crate::model::JobRun>>,
    /// <p>A continuation token, if not all items have yet been returned.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchStopJobRunOutput {
    /// <p>A list of the JobRuns that were successfully submitted for stopping.</p>
    #[serde(rename = "SuccessfulSubmissions", default, skip_serializing_if = "Option::is_none")]
    pub successful_submissions: Option<Vec<crate::model::BatchStopJobRunSuccessfulSubmission>>,
    /// <p>A list of the errors that were encountered in trying to stop <code>JobRuns</code>, including the <code>JobRunId</code> for which each error was encountered and details about the error.</p>
    #[serde(rename = "Errors", default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<crate::model::BatchStopJobRunError>>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateCrawlerOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetCrawlerOutput {
    /// <p>The metadata for the specified crawler.</p>
    #[serde(rename = "Crawler", default, skip_serializing_if = "Option::is_none")]
    pub crawler: Option<crate::model::Crawler>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetCrawlersOutput {
    /// <p>A list of crawler metadata.</p>
    #[serde(rename = "Crawlers", default, skip_serializing_if = "Option::is_none")]
    pub crawlers: Option<Vec<crate::model::Crawler>>,
    /// <p>A continuation token, if not all items have yet been returned.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateCrawlerOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteCrawlerOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StartCrawlerOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StopCrawlerOutput {
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTriggerOutput {
    /// <p>The name of the trigger.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTriggerOutput {
    /// <p>The requested trigger definition.</p>
    #[serde(rename = "Trigger", default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<crate::model::Trigger>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTriggersOutput {
    /// <p>A list of triggers for the specified job.</p>
    #[serde(rename = "Triggers", default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<crate::model::Trigger>>,
    /// <p>A continuation token, if not all items have yet been returned.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateTriggerOutput {
    /// <p>The resulting trigger definition.</p>
    #[serde(rename = "Trigger", default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<crate::model::Trigger>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteTriggerOutput {
    /// <p>The name of the trigger that was deleted.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StartTriggerOutput {
    /// <p>The name of the trigger that was started.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StopTriggerOutput {
    /// <p>The name of the trigger that was stopped.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Metadata about the response, including the request ID assigned by the service.
    #[serde(
        rename = "ResponseMetadata",
        default,
        skip_serializing_if = "shape_types::ResponseMetadata::is_empty"
    )]
    pub response_metadata: shape_types::ResponseMetadata,
}

impl PagedOutput for GetDatabasesOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedOutput for GetTablesOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedOutput for GetJobsOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedOutput for GetJobRunsOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedOutput for GetCrawlersOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

impl PagedOutput for GetTriggersOutput {
    fn next_page_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}
