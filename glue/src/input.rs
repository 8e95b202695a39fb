/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */


//! Request shapes for AWS Glue operations.
//!
//! Every input carries optional fields only; required-ness is enforced by the
//! service, not the client. Inputs for paginated operations implement
//! [`shape_types::PageableRequest`] through their `NextToken` field.

use serde::{Deserialize, Serialize};
use shape_types::PageableRequest;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateDatabaseInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The metadata for the database.</p>
    #[serde(rename = "DatabaseInput", default, skip_serializing_if = "Option::is_none")]
    pub database_input: Option<crate::model::DatabaseInput>,
}

impl CreateDatabaseInput {
    /// Creates a builder for `CreateDatabaseInput`.
    pub fn builder() -> create_database_input::Builder {
        create_database_input::Builder::default()
    }
}

/// See [`CreateDatabaseInput`](super::CreateDatabaseInput).
pub mod create_database_input {

    /// A builder for [`CreateDatabaseInput`](super::CreateDatabaseInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_input: Option<crate::model::DatabaseInput>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn database_input(mut self, input: crate::model::DatabaseInput) -> Self {
            self.database_input = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateDatabaseInput`](super::CreateDatabaseInput).
        pub fn build(self) -> super::CreateDatabaseInput {
            super::CreateDatabaseInput {
                catalog_id: self.catalog_id,
                database_input: self.database_input,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetDatabaseInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The name of the database to retrieve. For Hive compatibility, this should be all lowercase.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GetDatabaseInput {
    /// Creates a builder for `GetDatabaseInput`.
    pub fn builder() -> get_database_input::Builder {
        get_database_input::Builder::default()
    }
}

/// See [`GetDatabaseInput`](super::GetDatabaseInput).
pub mod get_database_input {

    /// A builder for [`GetDatabaseInput`](super::GetDatabaseInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetDatabaseInput`](super::GetDatabaseInput).
        pub fn build(self) -> super::GetDatabaseInput {
            super::GetDatabaseInput {
                catalog_id: self.catalog_id,
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetDatabasesInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>A continuation token, if this is a continuation call.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// <p>The maximum size of the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

impl GetDatabasesInput {
    /// Creates a builder for `GetDatabasesInput`.
    pub fn builder() -> get_databases_input::Builder {
        get_databases_input::Builder::default()
    }
}

/// See [`GetDatabasesInput`](super::GetDatabasesInput).
pub mod get_databases_input {

    /// A builder for [`GetDatabasesInput`](super::GetDatabasesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        next_token: Option<String>,
        max_results: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }

        pub fn max_results(mut self, input: i64) -> Self {
            self.max_results = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`GetDatabasesInput`](super::GetDatabasesInput).
        pub fn build(self) -> super::GetDatabasesInput {
            super::GetDatabasesInput {
                catalog_id: self.catalog_id,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateDatabaseInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The name of the database to update in the catalog. For Hive compatibility, this is folded to lowercase.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>A <code>DatabaseInput</code> object specifying the new definition of the metadata database in the catalog.</p>
    #[serde(rename = "DatabaseInput", default, skip_serializing_if = "Option::is_none")]
    pub database_input: Option<crate::model::DatabaseInput>,
}

impl UpdateDatabaseInput {
    /// Creates a builder for `UpdateDatabaseInput`.
    pub fn builder() -> update_database_input::Builder {
        update_database_input::Builder::default()
    }
}

/// See [`UpdateDatabaseInput`](super::UpdateDatabaseInput).
pub mod update_database_input {

    /// A builder for [`UpdateDatabaseInput`](super::UpdateDatabaseInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        name: Option<String>,
        database_input: Option<crate::model::DatabaseInput>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn database_input(mut self, input: crate::model::DatabaseInput) -> Self {
            self.database_input = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`UpdateDatabaseInput`](super::UpdateDatabaseInput).
        pub fn build(self) -> super::UpdateDatabaseInput {
            super::UpdateDatabaseInput {
                catalog_id: self.catalog_id,
                name: self.name,
                database_input: self.database_input,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteDatabaseInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The name of the database to delete. For Hive compatibility, this must be all lowercase.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeleteDatabaseInput {
    /// Creates a builder for `DeleteDatabaseInput`.
    pub fn builder() -> delete_database_input::Builder {
        delete_database_input::Builder::default()
    }
}

/// See [`DeleteDatabaseInput`](super::DeleteDatabaseInput).
pub mod delete_database_input {

    /// A builder for [`DeleteDatabaseInput`](super::DeleteDatabaseInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteDatabaseInput`](super::DeleteDatabaseInput).
        pub fn build(self) -> super::DeleteDatabaseInput {
            super::DeleteDatabaseInput {
                catalog_id: self.catalog_id,
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTableInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The catalog database in which to create the new table. For Hive compatibility, this name is entirely lowercase.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>The <code>TableInput</code> object that defines the metadata table to create in the catalog.</p>
    #[serde(rename = "TableInput", default, skip_serializing_if = "Option::is_none")]
    pub table_input: Option<crate::model::TableInput>,
}

impl CreateTableInput {
    /// Creates a builder for `CreateTableInput`.
    pub fn builder() -> create_table_input::Builder {
        create_table_input::Builder::default()
    }
}

/// See [`CreateTableInput`](super::CreateTableInput).
pub mod create_table_input {

    /// A builder for [`CreateTableInput`](super::CreateTableInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_name: Option<String>,
        table_input: Option<crate::model::TableInput>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }

        pub fn table_input(mut self, input: crate::model::TableInput) -> Self {
            self.table_input = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateTableInput`](super::CreateTableInput).
        pub fn build(self) -> super::CreateTableInput {
            super::CreateTableInput {
                catalog_id: self.catalog_id,
                database_name: self.database_name,
                table_input: self.table_input,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTableInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The name of the database in the catalog in which the table resides. For Hive compatibility, this name is entirely lowercase.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>The name of the table for which to retrieve the definition. For Hive compatibility, this name is entirely lowercase.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GetTableInput {
    /// Creates a builder for `GetTableInput`.
    pub fn builder() -> get_table_input::Builder {
        get_table_input::Builder::default()
    }
}

/// See [`GetTableInput`](super::GetTableInput).
pub mod get_table_input {

    /// A builder for [`GetTableInput`](super::GetTableInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_name: Option<String>,
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }

        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetTableInput`](super::GetTableInput).
        pub fn build(self) -> super::GetTableInput {
            super::GetTableInput {
                catalog_id: self.catalog_id,
                database_name: self.database_name,
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTablesInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The database in the catalog whose tables to list. For Hive compatibility, this name is entirely lowercase.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>A regular expression pattern. If present, only those tables whose names match the pattern are returned.</p>
    #[serde(rename = "Expression", default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// <p>A continuation token, if this is a continuation call.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// <p>The maximum size of the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

impl GetTablesInput {
    /// Creates a builder for `GetTablesInput`.
    pub fn builder() -> get_tables_input::Builder {
        get_tables_input::Builder::default()
    }
}

/// See [`GetTablesInput`](super::GetTablesInput).
pub mod get_tables_input {

    /// A builder for [`GetTablesInput`](super::GetTablesInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_name: Option<String>,
        expression: Option<String>,
        next_token: Option<String>,
        max_results: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }

        pub fn expression(mut self, input: impl Into<String>) -> Self {
            self.expression = Some(input.into());
            self
        }

        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }

        pub fn max_results(mut self, input: i64) -> Self {
            self.max_results = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`GetTablesInput`](super::GetTablesInput).
        pub fn build(self) -> super::GetTablesInput {
            super::GetTablesInput {
                catalog_id: self.catalog_id,
                database_name: self.database_name,
                expression: self.expression,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateTableInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The name of the catalog database in which the table resides. For Hive compatibility, this name is entirely lowercase.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>An updated <code>TableInput</code> object to define the metadata table in the catalog.</p>
    #[serde(rename = "TableInput", default, skip_serializing_if = "Option::is_none")]
    pub table_input: Option<crate::model::TableInput>,
    /// <p>By default, <code>UpdateTable</code> always creates an archived version of the table before updating it. However, if <code>skipArchive</code> is set to true, <code>UpdateTable</code> does not create the archived version.</p>
    #[serde(rename = "SkipArchive", default, skip_serializing_if = "Option::is_none")]
    pub skip_archive: Option<bool>,
}

impl UpdateTableInput {
    /// Creates a builder for `UpdateTableInput`.
    pub fn builder() -> update_table_input::Builder {
        update_table_input::Builder::default()
    }
}

/// See [`UpdateTableInput`](super::UpdateTableInput).
pub mod update_table_input {

    /// A builder for [`UpdateTableInput`](super::UpdateTableInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_name: Option<String>,
        table_input: Option<crate::model::TableInput>,
        skip_archive: Option<bool>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }

        pub fn table_input(mut self, input: crate::model::TableInput) -> Self {
            self.table_input = Some(input);
            self
        }

        pub fn skip_archive(mut self, input: bool) -> Self {
            self.skip_archive = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`UpdateTableInput`](super::UpdateTableInput).
        pub fn build(self) -> super::UpdateTableInput {
            super::UpdateTableInput {
                catalog_id: self.catalog_id,
                database_name: self.database_name,
                table_input: self.table_input,
                skip_archive: self.skip_archive,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteTableInput {
    /// <p>The ID of the Data Catalog. If none is provided, the AWS account ID is used by default.</p>
    #[serde(rename = "CatalogId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
    /// <p>The name of the catalog database in which the table resides. For Hive compatibility, this name is entirely lowercase.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>The name of the table to be deleted. For Hive compatibility, this name is entirely lowercase.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeleteTableInput {
    /// Creates a builder for `DeleteTableInput`.
    pub fn builder() -> delete_table_input::Builder {
        delete_table_input::Builder::default()
    }
}

/// See [`DeleteTableInput`](super::DeleteTableInput).
pub mod delete_table_input {

    /// A builder for [`DeleteTableInput`](super::DeleteTableInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        catalog_id: Option<String>,
        database_name: Option<String>,
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn catalog_id(mut self, input: impl Into<String>) -> Self {
            self.catalog_id = Some(input.into());
            self
        }

        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }

        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteTableInput`](super::DeleteTableInput).
        pub fn build(self) -> super::DeleteTableInput {
            super::DeleteTableInput {
                catalog_id: self.catalog_id,
                database_name: self.database_name,
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateJobInput {
    /// <p>The name you assign to this job definition. It must be unique in your account.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>Description of the job being defined.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>This field is reserved for future use.</p>
    #[serde(rename = "LogUri", default, skip_serializing_if = "Option::is_none")]
    pub log_uri: Option<String>,
    /// <p>The name or Amazon Resource Name (ARN) of the IAM role associated with this job.</p>
    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// <p>An <code>ExecutionProperty</code> specifying the maximum number of concurrent runs allowed for this job.</p>
    #[serde(rename = "ExecutionProperty", default, skip_serializing_if = "Option::is_none")]
    pub execution_property: Option<crate::model::ExecutionProperty>,
    /// <p>The <code>JobCommand</code> that executes this job.</p>
    #[serde(rename = "Command", default, skip_serializing_if = "Option::is_none")]
    pub command: Option<crate::model::JobCommand>,
    /// <p>The default arguments for this job. You can specify arguments here that your own job-execution script consumes, as well as arguments that AWS Glue itself consumes.</p>
    #[serde(rename = "DefaultArguments", default, skip_serializing_if = "Option::is_none")]
    pub default_arguments: Option<HashMap<String, String>>,
    /// <p>The connections used for this job.</p>
    #[serde(rename = "Connections", default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<crate::model::ConnectionsList>,
    /// <p>The maximum number of times to retry this job if it fails.</p>
    #[serde(rename = "MaxRetries", default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
    /// <p>This parameter is deprecated. Use <code>MaxCapacity</code> instead.</p>
    #[serde(rename = "AllocatedCapacity", default, skip_serializing_if = "Option::is_none")]
    pub allocated_capacity: Option<i64>,
    /// <p>The job timeout in minutes. The default is 2,880 minutes (48 hours).</p>
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// <p>The number of AWS Glue data processing units (DPUs) that can be allocated when this job runs.</p>
    #[serde(rename = "MaxCapacity", default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used with this job.</p>
    #[serde(rename = "SecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    /// <p>The tags to use with this job. You may use tags to limit access to the job.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// <p>Specifies configuration properties of a job notification.</p>
    #[serde(rename = "NotificationProperty", default, skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<crate::model::NotificationProperty>,
    /// <p>Glue version determines the versions of Apache Spark and Python that AWS Glue supports.</p>
    #[serde(rename = "GlueVersion", default, skip_serializing_if = "Option::is_none")]
    pub glue_version: Option<String>,
    /// <p>The number of workers of a defined <code>workerType</code> that are allocated when a job runs.</p>
    #[serde(rename = "NumberOfWorkers", default, skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i64>,
    /// <p>The type of predefined worker that is allocated when a job runs.</p>
    #[serde(rename = "WorkerType", default, skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<crate::model::WorkerType>,
}

impl CreateJobInput {
    /// Creates a builder for `CreateJobInput`.
    pub fn builder() -> create_job_input::Builder {
        create_job_input::Builder::default()
    }
}

/// See [`CreateJobInput`](super::CreateJobInput).
pub mod create_job_input {
    use std::collections::HashMap;

    /// A builder for [`CreateJobInput`](super::CreateJobInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        description: Option<String>,
        log_uri: Option<String>,
        role: Option<String>,
        execution_property: Option<crate::model::ExecutionProperty>,
        command: Option<crate::model::JobCommand>,
        default_arguments: Option<HashMap<String, String>>,
        connections: Option<crate::model::ConnectionsList>,
        max_retries: Option<i64>,
        allocated_capacity: Option<i64>,
        timeout: Option<i64>,
        max_capacity: Option<f64>,
        security_configuration: Option<String>,
        tags: Option<HashMap<String, String>>,
        notification_property: Option<crate::model::NotificationProperty>,
        glue_version: Option<String>,
        number_of_workers: Option<i64>,
        worker_type: Option<crate::model::WorkerType>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }

        pub fn log_uri(mut self, input: impl Into<String>) -> Self {
            self.log_uri = Some(input.into());
            self
        }

        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }

        pub fn execution_property(mut self, input: crate::model::ExecutionProperty) -> Self {
            self.execution_property = Some(input);
            self
        }

        pub fn command(mut self, input: crate::model::JobCommand) -> Self {
            self.command = Some(input);
            self
        }

        pub fn default_arguments(mut self, input: HashMap<String, String>) -> Self {
            self.default_arguments = Some(input);
            self
        }

        pub fn connections(mut self, input: crate::model::ConnectionsList) -> Self {
            self.connections = Some(input);
            self
        }

        pub fn max_retries(mut self, input: i64) -> Self {
            self.max_retries = Some(input);
            self
        }

        pub fn allocated_capacity(mut self, input: i64) -> Self {
            self.allocated_capacity = Some(input);
            self
        }

        pub fn timeout(mut self, input: i64) -> Self {
            self.timeout = Some(input);
            self
        }

        pub fn max_capacity(mut self, input: f64) -> Self {
            self.max_capacity = Some(input);
            self
        }

        pub fn security_configuration(mut self, input: impl Into<String>) -> Self {
            self.security_configuration = Some(input.into());
            self
        }

        pub fn tags(mut self, input: HashMap<String, String>) -> Self {
            self.tags = Some(input);
            self
        }

        pub fn notification_property(mut self, input: crate::model::NotificationProperty) -> Self {
            self.notification_property = Some(input);
            self
        }

        pub fn glue_version(mut self, input: impl Into<String>) -> Self {
            self.glue_version = Some(input.into());
            self
        }

        pub fn number_of_workers(mut self, input: i64) -> Self {
            self.number_of_workers = Some(input);
            self
        }

        pub fn worker_type(mut self, input: crate::model::WorkerType) -> Self {
            self.worker_type = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateJobInput`](super::CreateJobInput).
        pub fn build(self) -> super::CreateJobInput {
            super::CreateJobInput {
                name: self.name,
                description: self.description,
                log_uri: self.log_uri,
                role: self.role,
                execution_property: self.execution_property,
                command: self.command,
                default_arguments: self.default_arguments,
                connections: self.connections,
                max_retries: self.max_retries,
                allocated_capacity: self.allocated_capacity,
                timeout: self.timeout,
                max_capacity: self.max_capacity,
                security_configuration: self.security_configuration,
                tags: self.tags,
                notification_property: self.notification_property,
                glue_version: self.glue_version,
                number_of_workers: self.number_of_workers,
                worker_type: self.worker_type,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetJobInput {
    /// <p>The name of the job definition to retrieve.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
}

impl GetJobInput {
    /// Creates a builder for `GetJobInput`.
    pub fn builder() -> get_job_input::Builder {
        get_job_input::Builder::default()
    }
}

/// See [`GetJobInput`](super::GetJobInput).
pub mod get_job_input {

    /// A builder for [`GetJobInput`](super::GetJobInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn job_name(mut self, input: impl Into<String>) -> Self {
            self.job_name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetJobInput`](super::GetJobInput).
        pub fn build(self) -> super::GetJobInput {
            super::GetJobInput {
                job_name: self.job_name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetJobsInput {
    /// <p>A continuation token, if this is a continuation call.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// <p>The maximum size of the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

impl GetJobsInput {
    /// Creates a builder for `GetJobsInput`.
    pub fn builder() -> get_jobs_input::Builder {
        get_jobs_input::Builder::default()
    }
}

/// See [`GetJobsInput`](super::GetJobsInput).
pub mod get_jobs_input {

    /// A builder for [`GetJobsInput`](super::GetJobsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        next_token: Option<String>,
        max_results: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }

        pub fn max_results(mut self, input: i64) -> Self {
            self.max_results = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`GetJobsInput`](super::GetJobsInput).
        pub fn build(self) -> super::GetJobsInput {
            super::GetJobsInput {
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateJobInput {
    /// <p>The name of the job definition to update.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>Specifies the values with which to update the job definition.</p>
    #[serde(rename = "JobUpdate", default, skip_serializing_if = "Option::is_none")]
    pub job_update: Option<crate::model::JobUpdate>,
}

impl UpdateJobInput {
    /// Creates a builder for `UpdateJobInput`.
    pub fn builder() -> update_job_input::Builder {
        update_job_input::Builder::default()
    }
}

/// See [`UpdateJobInput`](super::UpdateJobInput).
pub mod update_job_input {

    /// A builder for [`UpdateJobInput`](super::UpdateJobInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
        job_update: Option<crate::model::JobUpdate>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn job_name(mut self, input: impl Into<String>) -> Self {
            self.job_name = Some(input.into());
            self
        }

        pub fn job_update(mut self, input: crate::model::JobUpdate) -> Self {
            self.job_update = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`UpdateJobInput`](super::UpdateJobInput).
        pub fn build(self) -> super::UpdateJobInput {
            super::UpdateJobInput {
                job_name: self.job_name,
                job_update: self.job_update,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteJobInput {
    /// <p>The name of the job definition to delete.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
}

impl DeleteJobInput {
    /// Creates a builder for `DeleteJobInput`.
    pub fn builder() -> delete_job_input::Builder {
        delete_job_input::Builder::default()
    }
}

/// See [`DeleteJobInput`](super::DeleteJobInput).
pub mod delete_job_input {

    /// A builder for [`DeleteJobInput`](super::DeleteJobInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn job_name(mut self, input: impl Into<String>) -> Self {
            self.job_name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteJobInput`](super::DeleteJobInput).
        pub fn build(self) -> super::DeleteJobInput {
            super::DeleteJobInput {
                job_name: self.job_name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StartJobRunInput {
    /// <p>The name of the job definition to use.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>The ID of a previous <code>JobRun</code> to retry.</p>
    #[serde(rename = "JobRunId", default, skip_serializing_if = "Option::is_none")]
    pub job_run_id: Option<String>,
    /// <p>The job arguments specifically for this run. For this job run, they replace the default arguments set in the job definition itself.</p>
    #[serde(rename = "Arguments", default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<HashMap<String, String>>,
    /// <p>This field is deprecated. Use <code>MaxCapacity</code> instead.</p>
    #[serde(rename = "AllocatedCapacity", default, skip_serializing_if = "Option::is_none")]
    pub allocated_capacity: Option<i64>,
    /// <p>The <code>JobRun</code> timeout in minutes. This overrides the timeout value set in the parent job.</p>
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// <p>The number of AWS Glue data processing units (DPUs) that can be allocated when this job runs.</p>
    #[serde(rename = "MaxCapacity", default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used with this job run.</p>
    #[serde(rename = "SecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    /// <p>Specifies configuration properties of a job run notification.</p>
    #[serde(rename = "NotificationProperty", default, skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<crate::model::NotificationProperty>,
    /// <p>The type of predefined worker that is allocated when a job runs.</p>
    #[serde(rename = "WorkerType", default, skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<crate::model::WorkerType>,
    /// <p>The number of workers of a defined <code>workerType</code> that are allocated when a job runs.</p>
    #[serde(rename = "NumberOfWorkers", default, skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i64>,
}

impl StartJobRunInput {
    /// Creates a builder for `StartJobRunInput`.
    pub fn builder() -> start_job_run_input::Builder {
        start_job_run_input::Builder::default()
    }
}

/// See [`StartJobRunInput`](super::StartJobRunInput).
pub mod start_job_run_input {
    use std::collections::HashMap;

    /// A builder for [`StartJobRunInput`](super::StartJobRunInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
        job_run_id: Option<String>,
        arguments: Option<HashMap<String, String>>,
        allocated_capacity: Option<i64>,
        timeout: Option<i64>,
        max_capacity: Option<f64>,
        security_configuration: Option<String>,
        notification_property: Option<crate::model::NotificationProperty>,
        worker_type: Option<crate::model::WorkerType>,
        number_of_workers: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn job_name(mut self, input: impl Into<String>) -> Self {
            self.job_name = Some(input.into());
            self
        }

        pub fn job_run_id(mut self, input: impl Into<String>) -> Self {
            self.job_run_id = Some(input.into());
            self
        }

        pub fn arguments(mut self, input: HashMap<String, String>) -> Self {
            self.arguments = Some(input);
            self
        }

        pub fn allocated_capacity(mut self, input: i64) -> Self {
            self.allocated_capacity = Some(input);
            self
        }

        pub fn timeout(mut self, input: i64) -> Self {
            self.timeout = Some(input);
            self
        }

        pub fn max_capacity(mut self, input: f64) -> Self {
            self.max_capacity = Some(input);
            self
        }

        pub fn security_configuration(mut self, input: impl Into<String>) -> Self {
            self.security_configuration = Some(input.into());
            self
        }

        pub fn notification_property(mut self, input: crate::model::NotificationProperty) -> Self {
            self.notification_property = Some(input);
            self
        }

        pub fn worker_type(mut self, input: crate::model::WorkerType) -> Self {
            self.worker_type = Some(input);
            self
        }

        pub fn number_of_workers(mut self, input: i64) -> Self {
            self.number_of_workers = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`StartJobRunInput`](super::StartJobRunInput).
        pub fn build(self) -> super::StartJobRunInput {
            super::StartJobRunInput {
                job_name: self.job_name,
                job_run_id: self.job_run_id,
                arguments: self.arguments,
                allocated_capacity: self.allocated_capacity,
                timeout: self.timeout,
                max_capacity: self.max_capacity,
                security_configuration: self.security_configuration,
                notification_property: self.notification_property,
                worker_type: self.worker_type,
                number_of_workers: self.number_of_workers,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetJobRunInput {
    /// <p>Name of the job definition being run.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>The ID of the job run.</p>
    #[serde(rename = "RunId", default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    /// <p>True if a list of predecessor runs should be returned.</p>
    #[serde(rename = "PredecessorsIncluded", default, skip_serializing_if = "Option::is_none")]
    pub predecessors_included: Option<bool>,
}

impl GetJobRunInput {
    /// Creates a builder for `GetJobRunInput`.
    pub fn builder() -> get_job_run_input::Builder {
        get_job_run_input::Builder::default()
    }
}

/// See [`GetJobRunInput`](super::GetJobRunInput).
pub mod get_job_run_input {

    /// A builder for [`GetJobRunInput`](super::GetJobRunInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
        run_id: Option<String>,
        predecessors_included: Option<bool>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn job_name(mut self, input: impl Into<String>) -> Self {
            self.job_name = Some(input.into());
            self
        }

        pub fn run_id(mut self, input: impl Into<String>) -> Self {
            self.run_id = Some(input.into());
            self
        }

        pub fn predecessors_included(mut self, input: bool) -> Self {
            self.predecessors_included = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`GetJobRunInput`](super::GetJobRunInput).
        pub fn build(self) -> super::GetJobRunInput {
            super::GetJobRunInput {
                job_name: self.job_name,
                run_id: self.run_id,
                predecessors_included: self.predecessors_included,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetJobRunsInput {
    /// <p>The name of the job definition for which to retrieve all job runs.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>A continuation token, if this is a continuation call.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// <p>The maximum size of the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

impl GetJobRunsInput {
    /// Creates a builder for `GetJobRunsInput`.
    pub fn builder() -> get_job_runs_input::Builder {
        get_job_runs_input::Builder::default()
    }
}

/// See [`GetJobRunsInput`](super::GetJobRunsInput).
pub mod get_job_runs_input {

    /// A builder for [`GetJobRunsInput`](super::GetJobRunsInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
        next_token: Option<String>,
        max_results: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn job_name(mut self, input: impl Into<String>) -> Self {
            self.job_name = Some(input.into());
            self
        }

        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }

        pub fn max_results(mut self, input: i64) -> Self {
            self.max_results = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`GetJobRunsInput`](super::GetJobRunsInput).
        pub fn build(self) -> super::GetJobRunsInput {
            super::GetJobRunsInput {
                job_name: self.job_name,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchStopJobRunInput {
    /// <p>The name of the job definition for which to stop job runs.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>A list of the <code>JobRunIds</code> that should be stopped for that job definition.</p>
    #[serde(rename = "JobRunIds", default, skip_serializing_if = "Option::is_none")]
    pub job_run_ids: Option<Vec<String>>,
}

impl BatchStopJobRunInput {
    /// Creates a builder for `BatchStopJobRunInput`.
    pub fn builder() -> batch_stop_job_run_input::Builder {
        batch_stop_job_run_input::Builder::default()
    }
}

/// See [`BatchStopJobRunInput`](super::BatchStopJobRunInput).
pub mod batch_stop_job_run_input {

    /// A builder for [`BatchStopJobRunInput`](super::BatchStopJobRunInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        job_name: Option<String>,
        job_run_ids: Option<Vec<String>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn job_name(mut self, input: impl Into<String>) -> Self {
            self.job_name = Some(input.into());
            self
        }

        pub fn job_run_ids(mut self, input: Vec<String>) -> Self {
            self.job_run_ids = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`BatchStopJobRunInput`](super::BatchStopJobRunInput).
        pub fn build(self) -> super::BatchStopJobRunInput {
            super::BatchStopJobRunInput {
                job_name: self.job_name,
                job_run_ids: self.job_run_ids,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateCrawlerInput {
    /// <p>Name of the new crawler.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The IAM role or Amazon Resource Name (ARN) of an IAM role used by the new crawler to access customer resources.</p>
    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// <p>The AWS Glue database where results are written, such as: <code>arn:aws:daylight:us-east-1::database/sometable/*</code>.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>A description of the new crawler.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>A list of collection of targets to crawl.</p>
    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<crate::model::CrawlerTargets>,
    /// <p>A <code>cron</code> expression used to specify the schedule.</p>
    #[serde(rename = "Schedule", default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// <p>A list of custom classifiers that the user has registered. By default, all built-in classifiers are included in a crawl, but these custom classifiers always override the default classifiers for a given classification.</p>
    #[serde(rename = "Classifiers", default, skip_serializing_if = "Option::is_none")]
    pub classifiers: Option<Vec<String>>,
    /// <p>The table prefix used for catalog tables that are created.</p>
    #[serde(rename = "TablePrefix", default, skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,
    /// <p>The policy for the crawler's update and deletion behavior.</p>
    #[serde(rename = "SchemaChangePolicy", default, skip_serializing_if = "Option::is_none")]
    pub schema_change_policy: Option<crate::model::SchemaChangePolicy>,
    /// <p>Crawler configuration information. This versioned JSON string allows users to specify aspects of a crawler's behavior.</p>
    #[serde(rename = "Configuration", default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used by this crawler.</p>
    #[serde(rename = "CrawlerSecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub crawler_security_configuration: Option<String>,
    /// <p>The tags to use with this crawler request.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateCrawlerInput {
    /// Creates a builder for `CreateCrawlerInput`.
    pub fn builder() -> create_crawler_input::Builder {
        create_crawler_input::Builder::default()
    }
}

/// See [`CreateCrawlerInput`](super::CreateCrawlerInput).
pub mod create_crawler_input {
    use std::collections::HashMap;

    /// A builder for [`CreateCrawlerInput`](super::CreateCrawlerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        role: Option<String>,
        database_name: Option<String>,
        description: Option<String>,
        targets: Option<crate::model::CrawlerTargets>,
        schedule: Option<String>,
        classifiers: Option<Vec<String>>,
        table_prefix: Option<String>,
        schema_change_policy: Option<crate::model::SchemaChangePolicy>,
        configuration: Option<String>,
        crawler_security_configuration: Option<String>,
        tags: Option<HashMap<String, String>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }

        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }

        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }

        pub fn targets(mut self, input: crate::model::CrawlerTargets) -> Self {
            self.targets = Some(input);
            self
        }

        pub fn schedule(mut self, input: impl Into<String>) -> Self {
            self.schedule = Some(input.into());
            self
        }

        pub fn classifiers(mut self, input: Vec<String>) -> Self {
            self.classifiers = Some(input);
            self
        }

        pub fn table_prefix(mut self, input: impl Into<String>) -> Self {
            self.table_prefix = Some(input.into());
            self
        }

        pub fn schema_change_policy(mut self, input: crate::model::SchemaChangePolicy) -> Self {
            self.schema_change_policy = Some(input);
            self
        }

        pub fn configuration(mut self, input: impl Into<String>) -> Self {
            self.configuration = Some(input.into());
            self
        }

        pub fn crawler_security_configuration(mut self, input: impl Into<String>) -> Self {
            self.crawler_security_configuration = Some(input.into());
            self
        }

        pub fn tags(mut self, input: HashMap<String, String>) -> Self {
            self.tags = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateCrawlerInput`](super::CreateCrawlerInput).
        pub fn build(self) -> super::CreateCrawlerInput {
            super::CreateCrawlerInput {
                name: self.name,
                role: self.role,
                database_name: self.database_name,
                description: self.description,
                targets: self.targets,
                schedule: self.schedule,
                classifiers: self.classifiers,
                table_prefix: self.table_prefix,
                schema_change_policy: self.schema_change_policy,
                configuration: self.configuration,
                crawler_security_configuration: self.crawler_security_configuration,
                tags: self.tags,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetCrawlerInput {
    /// <p>The name of the crawler to retrieve metadata for.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GetCrawlerInput {
    /// Creates a builder for `GetCrawlerInput`.
    pub fn builder() -> get_crawler_input::Builder {
        get_crawler_input::Builder::default()
    }
}

/// See [`GetCrawlerInput`](super::GetCrawlerInput).
pub mod get_crawler_input {

    /// A builder for [`GetCrawlerInput`](super::GetCrawlerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetCrawlerInput`](super::GetCrawlerInput).
        pub fn build(self) -> super::GetCrawlerInput {
            super::GetCrawlerInput {
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetCrawlersInput {
    /// <p>The number of crawlers to return on each call.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// <p>A continuation token, if this is a continuation request.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetCrawlersInput {
    /// Creates a builder for `GetCrawlersInput`.
    pub fn builder() -> get_crawlers_input::Builder {
        get_crawlers_input::Builder::default()
    }
}

/// See [`GetCrawlersInput`](super::GetCrawlersInput).
pub mod get_crawlers_input {

    /// A builder for [`GetCrawlersInput`](super::GetCrawlersInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        max_results: Option<i64>,
        next_token: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn max_results(mut self, input: i64) -> Self {
            self.max_results = Some(input);
            self
        }

        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetCrawlersInput`](super::GetCrawlersInput).
        pub fn build(self) -> super::GetCrawlersInput {
            super::GetCrawlersInput {
                max_results: self.max_results,
                next_token: self.next_token,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateCrawlerInput {
    /// <p>Name of the new crawler.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The IAM role or Amazon Resource Name (ARN) of an IAM role that is used by the new crawler to access customer resources.</p>
    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// <p>The AWS Glue database where results are stored, such as: <code>arn:aws:daylight:us-east-1::database/sometable/*</code>.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>A description of the new crawler.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>A list of targets to crawl.</p>
    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<crate::model::CrawlerTargets>,
    /// <p>A <code>cron</code> expression used to specify the schedule.</p>
    #[serde(rename = "Schedule", default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// <p>A list of custom classifiers that the user has registered.</p>
    #[serde(rename = "Classifiers", default, skip_serializing_if = "Option::is_none")]
    pub classifiers: Option<Vec<String>>,
    /// <p>The table prefix used for catalog tables that are created.</p>
    #[serde(rename = "TablePrefix", default, skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,
    /// <p>The policy for the crawler's update and deletion behavior.</p>
    #[serde(rename = "SchemaChangePolicy", default, skip_serializing_if = "Option::is_none")]
    pub schema_change_policy: Option<crate::model::SchemaChangePolicy>,
    /// <p>Crawler configuration information. This versioned JSON string allows users to specify aspects of a crawler's behavior.</p>
    #[serde(rename = "Configuration", default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used by this crawler.</p>
    #[serde(rename = "CrawlerSecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub crawler_security_configuration: Option<String>,
}

impl UpdateCrawlerInput {
    /// Creates a builder for `UpdateCrawlerInput`.
    pub fn builder() -> update_crawler_input::Builder {
        update_crawler_input::Builder::default()
    }
}

/// See [`UpdateCrawlerInput`](super::UpdateCrawlerInput).
pub mod update_crawler_input {

    /// A builder for [`UpdateCrawlerInput`](super::UpdateCrawlerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        role: Option<String>,
        database_name: Option<String>,
        description: Option<String>,
        targets: Option<crate::model::CrawlerTargets>,
        schedule: Option<String>,
        classifiers: Option<Vec<String>>,
        table_prefix: Option<String>,
        schema_change_policy: Option<crate::model::SchemaChangePolicy>,
        configuration: Option<String>,
        crawler_security_configuration: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }

        pub fn database_name(mut self, input: impl Into<String>) -> Self {
            self.database_name = Some(input.into());
            self
        }

        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }

        pub fn targets(mut self, input: crate::model::CrawlerTargets) -> Self {
            self.targets = Some(input);
            self
        }

        pub fn schedule(mut self, input: impl Into<String>) -> Self {
            self.schedule = Some(input.into());
            self
        }

        pub fn classifiers(mut self, input: Vec<String>) -> Self {
            self.classifiers = Some(input);
            self
        }

        pub fn table_prefix(mut self, input: impl Into<String>) -> Self {
            self.table_prefix = Some(input.into());
            self
        }

        pub fn schema_change_policy(mut self, input: crate::model::SchemaChangePolicy) -> Self {
            self.schema_change_policy = Some(input);
            self
        }

        pub fn configuration(mut self, input: impl Into<String>) -> Self {
            self.configuration = Some(input.into());
            self
        }

        pub fn crawler_security_configuration(mut self, input: impl Into<String>) -> Self {
            self.crawler_security_configuration = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`UpdateCrawlerInput`](super::UpdateCrawlerInput).
        pub fn build(self) -> super::UpdateCrawlerInput {
            super::UpdateCrawlerInput {
                name: self.name,
                role: self.role,
                database_name: self.database_name,
                description: self.description,
                targets: self.targets,
                schedule: self.schedule,
                classifiers: self.classifiers,
                table_prefix: self.table_prefix,
                schema_change_policy: self.schema_change_policy,
                configuration: self.configuration,
                crawler_security_configuration: self.crawler_security_configuration,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteCrawlerInput {
    /// <p>The name of the crawler to remove.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeleteCrawlerInput {
    /// Creates a builder for `DeleteCrawlerInput`.
    pub fn builder() -> delete_crawler_input::Builder {
        delete_crawler_input::Builder::default()
    }
}

/// See [`DeleteCrawlerInput`](super::DeleteCrawlerInput).
pub mod delete_crawler_input {

    /// A builder for [`DeleteCrawlerInput`](super::DeleteCrawlerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteCrawlerInput`](super::DeleteCrawlerInput).
        pub fn build(self) -> super::DeleteCrawlerInput {
            super::DeleteCrawlerInput {
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StartCrawlerInput {
    /// <p>Name of the crawler to start.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StartCrawlerInput {
    /// Creates a builder for `StartCrawlerInput`.
    pub fn builder() -> start_crawler_input::Builder {
        start_crawler_input::Builder::default()
    }
}

/// See [`StartCrawlerInput`](super::StartCrawlerInput).
pub mod start_crawler_input {

    /// A builder for [`StartCrawlerInput`](super::StartCrawlerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`StartCrawlerInput`](super::StartCrawlerInput).
        pub fn build(self) -> super::StartCrawlerInput {
            super::StartCrawlerInput {
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StopCrawlerInput {
    /// <p>Name of the crawler to stop.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StopCrawlerInput {
    /// Creates a builder for `StopCrawlerInput`.
    pub fn builder() -> stop_crawler_input::Builder {
        stop_crawler_input::Builder::default()
    }
}

/// See [`StopCrawlerInput`](super::StopCrawlerInput).
pub mod stop_crawler_input {

    /// A builder for [`StopCrawlerInput`](super::StopCrawlerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`StopCrawlerInput`](super::StopCrawlerInput).
        pub fn build(self) -> super::StopCrawlerInput {
            super::StopCrawlerInput {
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTriggerInput {
    /// <p>The name of the trigger.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The name of the workflow associated with the trigger.</p>
    #[serde(rename = "WorkflowName", default, skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    /// <p>The type of the new trigger.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<crate::model::TriggerType>,
    /// <p>A <code>cron</code> expression used to specify the schedule. This field is required when the trigger type is SCHEDULED.</p>
    #[serde(rename = "Schedule", default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// <p>A predicate to specify when the new trigger should fire. This field is required when the trigger type is <code>CONDITIONAL</code>.</p>
    #[serde(rename = "Predicate", default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<crate::model::Predicate>,
    /// <p>The actions initiated by this trigger when it fires.</p>
    #[serde(rename = "Actions", default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<crate::model::Action>>,
    /// <p>A description of the new trigger.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>Set to <code>true</code> to start <code>SCHEDULED</code> and <code>CONDITIONAL</code> triggers when created. True is not supported for <code>ON_DEMAND</code> triggers.</p>
    #[serde(rename = "StartOnCreation", default, skip_serializing_if = "Option::is_none")]
    pub start_on_creation: Option<bool>,
    /// <p>The tags to use with this trigger.</p>
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateTriggerInput {
    /// Creates a builder for `CreateTriggerInput`.
    pub fn builder() -> create_trigger_input::Builder {
        create_trigger_input::Builder::default()
    }
}

/// See [`CreateTriggerInput`](super::CreateTriggerInput).
pub mod create_trigger_input {
    use std::collections::HashMap;

    /// A builder for [`CreateTriggerInput`](super::CreateTriggerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        workflow_name: Option<String>,
        type_: Option<crate::model::TriggerType>,
        schedule: Option<String>,
        predicate: Option<crate::model::Predicate>,
        actions: Option<Vec<crate::model::Action>>,
        description: Option<String>,
        start_on_creation: Option<bool>,
        tags: Option<HashMap<String, String>>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn workflow_name(mut self, input: impl Into<String>) -> Self {
            self.workflow_name = Some(input.into());
            self
        }

        pub fn type_(mut self, input: crate::model::TriggerType) -> Self {
            self.type_ = Some(input);
            self
        }

        pub fn schedule(mut self, input: impl Into<String>) -> Self {
            self.schedule = Some(input.into());
            self
        }

        pub fn predicate(mut self, input: crate::model::Predicate) -> Self {
            self.predicate = Some(input);
            self
        }

        pub fn actions(mut self, input: Vec<crate::model::Action>) -> Self {
            self.actions = Some(input);
            self
        }

        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }

        pub fn start_on_creation(mut self, input: bool) -> Self {
            self.start_on_creation = Some(input);
            self
        }

        pub fn tags(mut self, input: HashMap<String, String>) -> Self {
            self.tags = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`CreateTriggerInput`](super::CreateTriggerInput).
        pub fn build(self) -> super::CreateTriggerInput {
            super::CreateTriggerInput {
                name: self.name,
                workflow_name: self.workflow_name,
                type_: self.type_,
                schedule: self.schedule,
                predicate: self.predicate,
                actions: self.actions,
                description: self.description,
                start_on_creation: self.start_on_creation,
                tags: self.tags,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTriggerInput {
    /// <p>The name of the trigger to retrieve.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GetTriggerInput {
    /// Creates a builder for `GetTriggerInput`.
    pub fn builder() -> get_trigger_input::Builder {
        get_trigger_input::Builder::default()
    }
}

/// See [`GetTriggerInput`](super::GetTriggerInput).
pub mod get_trigger_input {

    /// A builder for [`GetTriggerInput`](super::GetTriggerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`GetTriggerInput`](super::GetTriggerInput).
        pub fn build(self) -> super::GetTriggerInput {
            super::GetTriggerInput {
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetTriggersInput {
    /// <p>A continuation token, if this is a continuation call.</p>
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// <p>The name of the job to retrieve triggers for. The trigger that can start this job is returned, and if there is no such trigger, all triggers are returned.</p>
    #[serde(rename = "DependentJobName", default, skip_serializing_if = "Option::is_none")]
    pub dependent_job_name: Option<String>,
    /// <p>The maximum size of the response.</p>
    #[serde(rename = "MaxResults", default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
}

impl GetTriggersInput {
    /// Creates a builder for `GetTriggersInput`.
    pub fn builder() -> get_triggers_input::Builder {
        get_triggers_input::Builder::default()
    }
}

/// See [`GetTriggersInput`](super::GetTriggersInput).
pub mod get_triggers_input {

    /// A builder for [`GetTriggersInput`](super::GetTriggersInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        next_token: Option<String>,
        dependent_job_name: Option<String>,
        max_results: Option<i64>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }

        pub fn dependent_job_name(mut self, input: impl Into<String>) -> Self {
            self.dependent_job_name = Some(input.into());
            self
        }

        pub fn max_results(mut self, input: i64) -> Self {
            self.max_results = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`GetTriggersInput`](super::GetTriggersInput).
        pub fn build(self) -> super::GetTriggersInput {
            super::GetTriggersInput {
                next_token: self.next_token,
                dependent_job_name: self.dependent_job_name,
                max_results: self.max_results,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateTriggerInput {
    /// <p>The name of the trigger to update.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The new values with which to update the trigger.</p>
    #[serde(rename = "TriggerUpdate", default, skip_serializing_if = "Option::is_none")]
    pub trigger_update: Option<crate::model::TriggerUpdate>,
}

impl UpdateTriggerInput {
    /// Creates a builder for `UpdateTriggerInput`.
    pub fn builder() -> update_trigger_input::Builder {
        update_trigger_input::Builder::default()
    }
}

/// See [`UpdateTriggerInput`](super::UpdateTriggerInput).
pub mod update_trigger_input {

    /// A builder for [`UpdateTriggerInput`](super::UpdateTriggerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
        trigger_update: Option<crate::model::TriggerUpdate>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn trigger_update(mut self, input: crate::model::TriggerUpdate) -> Self {
            self.trigger_update = Some(input);
            self
        }

        /// Consumes the builder and constructs a [`UpdateTriggerInput`](super::UpdateTriggerInput).
        pub fn build(self) -> super::UpdateTriggerInput {
            super::UpdateTriggerInput {
                name: self.name,
                trigger_update: self.trigger_update,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteTriggerInput {
    /// <p>The name of the trigger to delete.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeleteTriggerInput {
    /// Creates a builder for `DeleteTriggerInput`.
    pub fn builder() -> delete_trigger_input::Builder {
        delete_trigger_input::Builder::default()
    }
}

/// See [`DeleteTriggerInput`](super::DeleteTriggerInput).
pub mod delete_trigger_input {

    /// A builder for [`DeleteTriggerInput`](super::DeleteTriggerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`DeleteTriggerInput`](super::DeleteTriggerInput).
        pub fn build(self) -> super::DeleteTriggerInput {
            super::DeleteTriggerInput {
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StartTriggerInput {
    /// <p>The name of the trigger to start.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StartTriggerInput {
    /// Creates a builder for `StartTriggerInput`.
    pub fn builder() -> start_trigger_input::Builder {
        start_trigger_input::Builder::default()
    }
}

/// See [`StartTriggerInput`](super::StartTriggerInput).
pub mod start_trigger_input {

    /// A builder for [`StartTriggerInput`](super::StartTriggerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`StartTriggerInput`](super::StartTriggerInput).
        pub fn build(self) -> super::StartTriggerInput {
            super::StartTriggerInput {
                name: self.name,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StopTriggerInput {
    /// <p>The name of the trigger to stop.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StopTriggerInput {
    /// Creates a builder for `StopTriggerInput`.
    pub fn builder() -> stop_trigger_input::Builder {
        stop_trigger_input::Builder::default()
    }
}

/// See [`StopTriggerInput`](super::StopTriggerInput).
pub mod stop_trigger_input {

    /// A builder for [`StopTriggerInput`](super::StopTriggerInput).
    #[derive(Debug, Clone, Default)]
    pub struct Builder {
        name: Option<String>,
    }

    #[allow(missing_docs)]
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        /// Consumes the builder and constructs a [`StopTriggerInput`](super::StopTriggerInput).
        pub fn build(self) -> super::StopTriggerInput {
            super::StopTriggerInput {
                name: self.name,
            }
        }
    }
}

impl PageableRequest for GetDatabasesInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PageableRequest for GetTablesInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PageableRequest for GetJobsInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PageableRequest for GetJobRunsInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PageableRequest for GetCrawlersInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

impl PageableRequest for GetTriggersInput {
    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}
