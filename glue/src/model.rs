/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */


//! Data structures stored in and exchanged with the AWS Glue Data Catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

shape_types::string_enum! {
    /// The type of predefined worker that is allocated when a job runs.
    pub enum WorkerType {
        /// 4 vCPUs and 16 GB of memory with a 50 GB disk.
        Standard => "Standard",
        /// 1 DPU (4 vCPUs, 16 GB of memory, 64 GB disk) per worker.
        G1x => "G.1X",
        /// 2 DPUs (8 vCPUs, 32 GB of memory, 128 GB disk) per worker.
        G2x => "G.2X",
    }
}

shape_types::string_enum! {
    /// The condition state of a job run.
    pub enum JobRunState {
        /// The run is being started.
        Starting => "STARTING",
        /// The run is in progress.
        Running => "RUNNING",
        /// The run is being stopped.
        Stopping => "STOPPING",
        /// The run was stopped.
        Stopped => "STOPPED",
        /// The run completed successfully.
        Succeeded => "SUCCEEDED",
        /// The run failed.
        Failed => "FAILED",
        /// The run exceeded its timeout.
        Timeout => "TIMEOUT",
    }
}

shape_types::string_enum! {
    /// The state of a crawler.
    pub enum CrawlerState {
        /// The crawler is idle and can be started.
        Ready => "READY",
        /// The crawler is running.
        Running => "RUNNING",
        /// The crawler is finishing its run.
        Stopping => "STOPPING",
    }
}

shape_types::string_enum! {
    /// The state of a crawler schedule.
    pub enum ScheduleState {
        /// The schedule is active.
        Scheduled => "SCHEDULED",
        /// The schedule is paused.
        NotScheduled => "NOT_SCHEDULED",
        /// The schedule is being updated.
        Transitioning => "TRANSITIONING",
    }
}

shape_types::string_enum! {
    /// What the crawler does when it finds a changed schema.
    pub enum UpdateBehavior {
        /// Record the change without updating the table.
        Log => "LOG",
        /// Update the table definition in the Data Catalog.
        UpdateInDatabase => "UPDATE_IN_DATABASE",
    }
}

shape_types::string_enum! {
    /// What the crawler does when it finds a deleted object.
    pub enum DeleteBehavior {
        /// Record the deletion without touching the table.
        Log => "LOG",
        /// Delete the table from the Data Catalog.
        DeleteFromDatabase => "DELETE_FROM_DATABASE",
        /// Mark the table as deprecated in the Data Catalog.
        DeprecateInDatabase => "DEPRECATE_IN_DATABASE",
    }
}

shape_types::string_enum! {
    /// The status of the last crawl.
    pub enum LastCrawlStatus {
        /// The crawl completed successfully.
        Succeeded => "SUCCEEDED",
        /// The crawl was cancelled.
        Cancelled => "CANCELLED",
        /// The crawl failed.
        Failed => "FAILED",
    }
}

shape_types::string_enum! {
    /// The type of trigger.
    pub enum TriggerType {
        /// Fires on a cron schedule.
        Scheduled => "SCHEDULED",
        /// Fires when its predicate conditions are met.
        Conditional => "CONDITIONAL",
        /// Fires only when started explicitly.
        OnDemand => "ON_DEMAND",
    }
}

shape_types::string_enum! {
    /// The current state of a trigger.
    pub enum TriggerState {
        /// The trigger is being created.
        Creating => "CREATING",
        /// The trigger has been created but is not active.
        Created => "CREATED",
        /// The trigger is being activated.
        Activating => "ACTIVATING",
        /// The trigger is active and will fire.
        Activated => "ACTIVATED",
        /// The trigger is being deactivated.
        Deactivating => "DEACTIVATING",
        /// The trigger is inactive.
        Deactivated => "DEACTIVATED",
        /// The trigger is being deleted.
        Deleting => "DELETING",
        /// The trigger is being updated.
        Updating => "UPDATING",
    }
}

shape_types::string_enum! {
    /// How multiple conditions in a predicate combine.
    pub enum Logical {
        /// All conditions must be met.
        And => "AND",
        /// Any one condition must be met.
        Any => "ANY",
    }
}

shape_types::string_enum! {
    /// The comparison operator for a trigger condition.
    pub enum LogicalOperator {
        /// The watched state must equal the condition state.
        Equals => "EQUALS",
    }
}

shape_types::string_enum! {
    /// The state of a crawl watched by a trigger condition.
    pub enum CrawlState {
        /// The crawl is in progress.
        Running => "RUNNING",
        /// The crawl is being cancelled.
        Cancelling => "CANCELLING",
        /// The crawl was cancelled.
        Cancelled => "CANCELLED",
        /// The crawl completed successfully.
        Succeeded => "SUCCEEDED",
        /// The crawl failed.
        Failed => "FAILED",
    }
}

/// <p>The <code>Database</code> object represents a logical grouping of tables that might reside in a Hive metastore or an RDBMS.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Database {
    /// <p>The name of the database. For Hive compatibility, this is folded to lowercase when it is stored.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>A description of the database.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>The location of the database (for example, an HDFS path).</p>
    #[serde(rename = "LocationUri", default, skip_serializing_if = "Option::is_none")]
    pub location_uri: Option<String>,
    /// <p>These key-value pairs define parameters and properties of the database.</p>
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    /// <p>The time at which the metadata database was created in the catalog.</p>
    #[serde(rename = "CreateTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<shape_types::Instant>,
}

/// <p>The structure used to create or update a database.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatabaseInput {
    /// <p>The name of the database. For Hive compatibility, this is folded to lowercase when it is stored.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>A description of the database.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>The location of the database (for example, an HDFS path).</p>
    #[serde(rename = "LocationUri", default, skip_serializing_if = "Option::is_none")]
    pub location_uri: Option<String>,
    /// <p>These key-value pairs define parameters and properties of the database.</p>
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

/// <p>A column in a <code>Table</code>.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Column {
    /// <p>The name of the <code>Column</code>.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The data type of the <code>Column</code>.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// <p>A free-form text comment.</p>
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// <p>Specifies the sort order of a sorted column.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    /// <p>The name of the column.</p>
    #[serde(rename = "Column", default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// <p>Indicates that the column is sorted in ascending order (<code>== 1</code>), or in descending order (<code>==0</code>).</p>
    #[serde(rename = "SortOrder", default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

/// <p>Information about a serialization/deserialization program (SerDe) that serves as an extractor and loader.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SerDeInfo {
    /// <p>Name of the SerDe.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>Usually the class that implements the SerDe. An example is <code>org.apache.hadoop.hive.serde2.columnar.ColumnarSerDe</code>.</p>
    #[serde(rename = "SerializationLibrary", default, skip_serializing_if = "Option::is_none")]
    pub serialization_library: Option<String>,
    /// <p>These key-value pairs define initialization parameters for the SerDe.</p>
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

/// <p>Specifies skewed values in a table. Skewed values are those that occur with very high frequency.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkewedInfo {
    /// <p>A list of names of columns that contain skewed values.</p>
    #[serde(rename = "SkewedColumnNames", default, skip_serializing_if = "Option::is_none")]
    pub skewed_column_names: Option<Vec<String>>,
    /// <p>A list of values that appear so frequently as to be considered skewed.</p>
    #[serde(rename = "SkewedColumnValues", default, skip_serializing_if = "Option::is_none")]
    pub skewed_column_values: Option<Vec<String>>,
    /// <p>A mapping of skewed values to the columns that contain them.</p>
    #[serde(rename = "SkewedColumnValueLocationMaps", default, skip_serializing_if = "Option::is_none")]
    pub skewed_column_value_location_maps: Option<HashMap<String, String>>,
}

/// <p>Describes the physical storage of table data.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorageDescriptor {
    /// <p>A list of the <code>Columns</code> in the table.</p>
    #[serde(rename = "Columns", default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    /// <p>The physical location of the table. By default, this takes the form of the warehouse location, followed by the database location in the warehouse, followed by the table name.</p>
    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// <p>The input format: <code>SequenceFileInputFormat</code> (binary), or <code>TextInputFormat</code>, or a custom format.</p>
    #[serde(rename = "InputFormat", default, skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,
    /// <p>The output format: <code>SequenceFileOutputFormat</code> (binary), or <code>IgnoreKeyTextOutputFormat</code>, or a custom format.</p>
    #[serde(rename = "OutputFormat", default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    /// <p><code>True</code> if the data in the table is compressed, or <code>False</code> if not.</p>
    #[serde(rename = "Compressed", default, skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,
    /// <p>Must be specified if the table contains any dimension columns.</p>
    #[serde(rename = "NumberOfBuckets", default, skip_serializing_if = "Option::is_none")]
    pub number_of_buckets: Option<i64>,
    /// <p>The serialization/deserialization (SerDe) information.</p>
    #[serde(rename = "SerdeInfo", default, skip_serializing_if = "Option::is_none")]
    pub serde_info: Option<SerDeInfo>,
    /// <p>A list of reducer grouping columns, clustering columns, and bucketing columns in the table.</p>
    #[serde(rename = "BucketColumns", default, skip_serializing_if = "Option::is_none")]
    pub bucket_columns: Option<Vec<String>>,
    /// <p>A list specifying the sort order of each bucket in the table.</p>
    #[serde(rename = "SortColumns", default, skip_serializing_if = "Option::is_none")]
    pub sort_columns: Option<Vec<Order>>,
    /// <p>The user-supplied properties in key-value form.</p>
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    /// <p>The information about values that appear frequently in a column (skewed values).</p>
    #[serde(rename = "SkewedInfo", default, skip_serializing_if = "Option::is_none")]
    pub skewed_info: Option<SkewedInfo>,
    /// <p><code>True</code> if the table data is stored in subdirectories, or <code>False</code> if not.</p>
    #[serde(rename = "StoredAsSubDirectories", default, skip_serializing_if = "Option::is_none")]
    pub stored_as_sub_directories: Option<bool>,
}

/// <p>Represents a collection of related data organized in columns and rows.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    /// <p>The table name. For Hive compatibility, this must be entirely lowercase.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The name of the database where the table metadata resides. For Hive compatibility, this must be all lowercase.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>A description of the table.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>The owner of the table.</p>
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// <p>The time when the table definition was created in the Data Catalog.</p>
    #[serde(rename = "CreateTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<shape_types::Instant>,
    /// <p>The last time that the table was updated.</p>
    #[serde(rename = "UpdateTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<shape_types::Instant>,
    /// <p>The last time that the table was accessed. This is usually taken from HDFS, and might not be reliable.</p>
    #[serde(rename = "LastAccessTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<shape_types::Instant>,
    /// <p>The last time that column statistics were computed for this table.</p>
    #[serde(rename = "LastAnalyzedTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub last_analyzed_time: Option<shape_types::Instant>,
    /// <p>The retention time for this table.</p>
    #[serde(rename = "Retention", default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<i64>,
    /// <p>A storage descriptor containing information about the physical storage of this table.</p>
    #[serde(rename = "StorageDescriptor", default, skip_serializing_if = "Option::is_none")]
    pub storage_descriptor: Option<StorageDescriptor>,
    /// <p>A list of columns by which the table is partitioned. Only primitive types are supported as partition keys.</p>
    #[serde(rename = "PartitionKeys", default, skip_serializing_if = "Option::is_none")]
    pub partition_keys: Option<Vec<Column>>,
    /// <p>If the table is a view, the original text of the view; otherwise <code>null</code>.</p>
    #[serde(rename = "ViewOriginalText", default, skip_serializing_if = "Option::is_none")]
    pub view_original_text: Option<String>,
    /// <p>If the table is a view, the expanded text of the view; otherwise <code>null</code>.</p>
    #[serde(rename = "ViewExpandedText", default, skip_serializing_if = "Option::is_none")]
    pub view_expanded_text: Option<String>,
    /// <p>The type of this table (<code>EXTERNAL_TABLE</code>, <code>VIRTUAL_VIEW</code>, etc.).</p>
    #[serde(rename = "TableType", default, skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    /// <p>These key-value pairs define properties associated with the table.</p>
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    /// <p>The person or entity who created the table.</p>
    #[serde(rename = "CreatedBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// <p>The structure used to create or update a table.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableInput {
    /// <p>The table name. For Hive compatibility, this is folded to lowercase when it is stored.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>A description of the table.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>The table owner.</p>
    #[serde(rename = "Owner", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// <p>The last time that the table was accessed.</p>
    #[serde(rename = "LastAccessTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub last_access_time: Option<shape_types::Instant>,
    /// <p>The last time that column statistics were computed for this table.</p>
    #[serde(rename = "LastAnalyzedTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub last_analyzed_time: Option<shape_types::Instant>,
    /// <p>The retention time for this table.</p>
    #[serde(rename = "Retention", default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<i64>,
    /// <p>A storage descriptor containing information about the physical storage of this table.</p>
    #[serde(rename = "StorageDescriptor", default, skip_serializing_if = "Option::is_none")]
    pub storage_descriptor: Option<StorageDescriptor>,
    /// <p>A list of columns by which the table is partitioned. Only primitive types are supported as partition keys.</p>
    #[serde(rename = "PartitionKeys", default, skip_serializing_if = "Option::is_none")]
    pub partition_keys: Option<Vec<Column>>,
    /// <p>If the table is a view, the original text of the view; otherwise <code>null</code>.</p>
    #[serde(rename = "ViewOriginalText", default, skip_serializing_if = "Option::is_none")]
    pub view_original_text: Option<String>,
    /// <p>If the table is a view, the expanded text of the view; otherwise <code>null</code>.</p>
    #[serde(rename = "ViewExpandedText", default, skip_serializing_if = "Option::is_none")]
    pub view_expanded_text: Option<String>,
    /// <p>The type of this table (<code>EXTERNAL_TABLE</code>, <code>VIRTUAL_VIEW</code>, etc.).</p>
    #[serde(rename = "TableType", default, skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    /// <p>These key-value pairs define properties associated with the table.</p>
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

/// <p>An execution property of a job.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExecutionProperty {
    /// <p>The maximum number of concurrent runs allowed for the job. The default is 1. An error is returned when this threshold is reached. The maximum value you can specify is controlled by a service limit.</p>
    #[serde(rename = "MaxConcurrentRuns", default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_runs: Option<i64>,
}

/// <p>Specifies code executed when a job is run.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobCommand {
    /// <p>The name of the job command. For an Apache Spark ETL job, this must be <code>glueetl</code>. For a Python shell job, it must be <code>pythonshell</code>.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>Specifies the Amazon Simple Storage Service (Amazon S3) path to a script that executes a job.</p>
    #[serde(rename = "ScriptLocation", default, skip_serializing_if = "Option::is_none")]
    pub script_location: Option<String>,
    /// <p>The Python version being used to execute a Python shell job. Allowed values are 2 or 3.</p>
    #[serde(rename = "PythonVersion", default, skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,
}

/// <p>Specifies the connections used by a job.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectionsList {
    /// <p>A list of connections used by the job.</p>
    #[serde(rename = "Connections", default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<String>>,
}

/// <p>Specifies configuration properties of a notification.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationProperty {
    /// <p>After a job run starts, the number of minutes to wait before sending a job run delay notification.</p>
    #[serde(rename = "NotifyDelayAfter", default, skip_serializing_if = "Option::is_none")]
    pub notify_delay_after: Option<i64>,
}

/// <p>Specifies a job definition.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Job {
    /// <p>The name you assign to this job definition.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>A description of the job.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>This field is reserved for future use.</p>
    #[serde(rename = "LogUri", default, skip_serializing_if = "Option::is_none")]
    pub log_uri: Option<String>,
    /// <p>The name or Amazon Resource Name (ARN) of the IAM role associated with this job.</p>
    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// <p>The time and date that this job definition was created.</p>
    #[serde(rename = "CreatedOn", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<shape_types::Instant>,
    /// <p>The last point in time when this job definition was modified.</p>
    #[serde(rename = "LastModifiedOn", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<shape_types::Instant>,
    /// <p>An <code>ExecutionProperty</code> specifying the maximum number of concurrent runs allowed for this job.</p>
    #[serde(rename = "ExecutionProperty", default, skip_serializing_if = "Option::is_none")]
    pub execution_property: Option<ExecutionProperty>,
    /// <p>The <code>JobCommand</code> that executes this job.</p>
    #[serde(rename = "Command", default, skip_serializing_if = "Option::is_none")]
    pub command: Option<JobCommand>,
    /// <p>The default arguments for this job, specified as name-value pairs.</p>
    #[serde(rename = "DefaultArguments", default, skip_serializing_if = "Option::is_none")]
    pub default_arguments: Option<HashMap<String, String>>,
    /// <p>The connections used for this job.</p>
    #[serde(rename = "Connections", default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<ConnectionsList>,
    /// <p>The maximum number of times to retry this job after a JobRun fails.</p>
    #[serde(rename = "MaxRetries", default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
    /// <p>This field is deprecated. Use <code>MaxCapacity</code> instead.</p>
    #[serde(rename = "AllocatedCapacity", default, skip_serializing_if = "Option::is_none")]
    pub allocated_capacity: Option<i64>,
    /// <p>The job timeout in minutes. This is the maximum time that a job run can consume resources before it is terminated and enters <code>TIMEOUT</code> status. The default is 2,880 minutes (48 hours).</p>
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// <p>The number of AWS Glue data processing units (DPUs) that can be allocated when this job runs. A DPU is a relative measure of processing power that consists of 4 vCPUs of compute capacity and 16 GB of memory.</p>
    #[serde(rename = "MaxCapacity", default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    /// <p>The type of predefined worker that is allocated when a job runs.</p>
    #[serde(rename = "WorkerType", default, skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    /// <p>The number of workers of a defined <code>workerType</code> that are allocated when a job runs.</p>
    #[serde(rename = "NumberOfWorkers", default, skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i64>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used with this job.</p>
    #[serde(rename = "SecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    /// <p>Specifies configuration properties of a job notification.</p>
    #[serde(rename = "NotificationProperty", default, skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    /// <p>Glue version determines the versions of Apache Spark and Python that AWS Glue supports.</p>
    #[serde(rename = "GlueVersion", default, skip_serializing_if = "Option::is_none")]
    pub glue_version: Option<String>,
}

/// <p>Specifies information used to update an existing job definition. The previous job definition is completely overwritten by this information.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobUpdate {
    /// <p>A description of the job being defined.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>This field is reserved for future use.</p>
    #[serde(rename = "LogUri", default, skip_serializing_if = "Option::is_none")]
    pub log_uri: Option<String>,
    /// <p>The name or Amazon Resource Name (ARN) of the IAM role associated with this job (required).</p>
    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// <p>An <code>ExecutionProperty</code> specifying the maximum number of concurrent runs allowed for this job.</p>
    #[serde(rename = "ExecutionProperty", default, skip_serializing_if = "Option::is_none")]
    pub execution_property: Option<ExecutionProperty>,
    /// <p>The <code>JobCommand</code> that executes this job (required).</p>
    #[serde(rename = "Command", default, skip_serializing_if = "Option::is_none")]
    pub command: Option<JobCommand>,
    /// <p>The default arguments for this job.</p>
    #[serde(rename = "DefaultArguments", default, skip_serializing_if = "Option::is_none")]
    pub default_arguments: Option<HashMap<String, String>>,
    /// <p>The connections used for this job.</p>
    #[serde(rename = "Connections", default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<ConnectionsList>,
    /// <p>The maximum number of times to retry this job if it fails.</p>
    #[serde(rename = "MaxRetries", default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
    /// <p>This field is deprecated. Use <code>MaxCapacity</code> instead.</p>
    #[serde(rename = "AllocatedCapacity", default, skip_serializing_if = "Option::is_none")]
    pub allocated_capacity: Option<i64>,
    /// <p>The job timeout in minutes.</p>
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// <p>The number of AWS Glue data processing units (DPUs) that can be allocated when this job runs.</p>
    #[serde(rename = "MaxCapacity", default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    /// <p>The type of predefined worker that is allocated when a job runs.</p>
    #[serde(rename = "WorkerType", default, skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    /// <p>The number of workers of a defined <code>workerType</code> that are allocated when a job runs.</p>
    #[serde(rename = "NumberOfWorkers", default, skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i64>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used with this job.</p>
    #[serde(rename = "SecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    /// <p>Specifies the configuration properties of a job notification.</p>
    #[serde(rename = "NotificationProperty", default, skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    /// <p>Glue version determines the versions of Apache Spark and Python that AWS Glue supports.</p>
    #[serde(rename = "GlueVersion", default, skip_serializing_if = "Option::is_none")]
    pub glue_version: Option<String>,
}

/// <p>A job run that was used in the predicate of a conditional trigger that triggered this job run.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Predecessor {
    /// <p>The name of the job definition used by the predecessor job run.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>The job-run ID of the predecessor job run.</p>
    #[serde(rename = "RunId", default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

/// <p>Contains information about a job run.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRun {
    /// <p>The ID of this job run.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The number of the attempt to run this job.</p>
    #[serde(rename = "Attempt", default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<i64>,
    /// <p>The ID of the previous run of this job. For example, the <code>JobRunId</code> specified in the <code>StartJobRun</code> action.</p>
    #[serde(rename = "PreviousRunId", default, skip_serializing_if = "Option::is_none")]
    pub previous_run_id: Option<String>,
    /// <p>The name of the trigger that started this job run.</p>
    #[serde(rename = "TriggerName", default, skip_serializing_if = "Option::is_none")]
    pub trigger_name: Option<String>,
    /// <p>The name of the job definition being used in this run.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>The date and time at which this job run was started.</p>
    #[serde(rename = "StartedOn", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub started_on: Option<shape_types::Instant>,
    /// <p>The last time that this job run was modified.</p>
    #[serde(rename = "LastModifiedOn", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub last_modified_on: Option<shape_types::Instant>,
    /// <p>The date and time that this job run completed.</p>
    #[serde(rename = "CompletedOn", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<shape_types::Instant>,
    /// <p>The current state of the job run.</p>
    #[serde(rename = "JobRunState", default, skip_serializing_if = "Option::is_none")]
    pub job_run_state: Option<JobRunState>,
    /// <p>The job arguments associated with this run. For this job run, they replace the default arguments set in the job definition itself.</p>
    #[serde(rename = "Arguments", default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<HashMap<String, String>>,
    /// <p>An error message associated with this job run.</p>
    #[serde(rename = "ErrorMessage", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// <p>A list of predecessors to this job run.</p>
    #[serde(rename = "PredecessorRuns", default, skip_serializing_if = "Option::is_none")]
    pub predecessor_runs: Option<Vec<Predecessor>>,
    /// <p>This field is deprecated. Use <code>MaxCapacity</code> instead.</p>
    #[serde(rename = "AllocatedCapacity", default, skip_serializing_if = "Option::is_none")]
    pub allocated_capacity: Option<i64>,
    /// <p>The amount of time (in seconds) that the job run consumed resources.</p>
    #[serde(rename = "ExecutionTime", default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<i64>,
    /// <p>The <code>JobRun</code> timeout in minutes.</p>
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// <p>The number of AWS Glue data processing units (DPUs) that can be allocated when this job runs.</p>
    #[serde(rename = "MaxCapacity", default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
    /// <p>The type of predefined worker that is allocated when a job runs.</p>
    #[serde(rename = "WorkerType", default, skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<WorkerType>,
    /// <p>The number of workers of a defined <code>workerType</code> that are allocated when a job runs.</p>
    #[serde(rename = "NumberOfWorkers", default, skip_serializing_if = "Option::is_none")]
    pub number_of_workers: Option<i64>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used with this job run.</p>
    #[serde(rename = "SecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    /// <p>The name of the log group for secure logging that can be server-side encrypted in Amazon CloudWatch using AWS KMS. The default is <code>/aws-glue/jobs/</code>.</p>
    #[serde(rename = "LogGroupName", default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    /// <p>Specifies configuration properties of a job run notification.</p>
    #[serde(rename = "NotificationProperty", default, skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    /// <p>Glue version determines the versions of Apache Spark and Python that AWS Glue supports.</p>
    #[serde(rename = "GlueVersion", default, skip_serializing_if = "Option::is_none")]
    pub glue_version: Option<String>,
}

/// <p>Specifies a data store in Amazon Simple Storage Service (Amazon S3).</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct S3Target {
    /// <p>The path to the Amazon S3 target.</p>
    #[serde(rename = "Path", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// <p>A list of glob patterns used to exclude from the crawl.</p>
    #[serde(rename = "Exclusions", default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
}

/// <p>Specifies a JDBC data store to crawl.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JdbcTarget {
    /// <p>The name of the connection to use to connect to the JDBC target.</p>
    #[serde(rename = "ConnectionName", default, skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    /// <p>The path of the JDBC target.</p>
    #[serde(rename = "Path", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// <p>A list of glob patterns used to exclude from the crawl.</p>
    #[serde(rename = "Exclusions", default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
}

/// <p>Specifies an Amazon DynamoDB table to crawl.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DynamoDBTarget {
    /// <p>The name of the DynamoDB table to crawl.</p>
    #[serde(rename = "Path", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// <p>Specifies data stores to crawl.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrawlerTargets {
    /// <p>Specifies Amazon Simple Storage Service (Amazon S3) targets.</p>
    #[serde(rename = "S3Targets", default, skip_serializing_if = "Option::is_none")]
    pub s3_targets: Option<Vec<S3Target>>,
    /// <p>Specifies JDBC targets.</p>
    #[serde(rename = "JdbcTargets", default, skip_serializing_if = "Option::is_none")]
    pub jdbc_targets: Option<Vec<JdbcTarget>>,
    /// <p>Specifies Amazon DynamoDB targets.</p>
    #[serde(rename = "DynamoDBTargets", default, skip_serializing_if = "Option::is_none")]
    pub dynamo_db_targets: Option<Vec<DynamoDBTarget>>,
}

/// <p>A scheduling object using a <code>cron</code> statement to schedule an event.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// <p>A <code>cron</code> expression used to specify the schedule. For example, to run something every day at 12:15 UTC, you would specify <code>cron(15 12 * * ? *)</code>.</p>
    #[serde(rename = "ScheduleExpression", default, skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    /// <p>The state of the schedule.</p>
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ScheduleState>,
}

/// <p>A policy that specifies update and deletion behaviors for the crawler.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaChangePolicy {
    /// <p>The update behavior when the crawler finds a changed schema.</p>
    #[serde(rename = "UpdateBehavior", default, skip_serializing_if = "Option::is_none")]
    pub update_behavior: Option<UpdateBehavior>,
    /// <p>The deletion behavior when the crawler finds a deleted object.</p>
    #[serde(rename = "DeleteBehavior", default, skip_serializing_if = "Option::is_none")]
    pub delete_behavior: Option<DeleteBehavior>,
}

/// <p>Status and error information about the most recent crawl.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LastCrawlInfo {
    /// <p>Status of the last crawl.</p>
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LastCrawlStatus>,
    /// <p>If an error occurred, the error information about the last crawl.</p>
    #[serde(rename = "ErrorMessage", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// <p>The log group for the last crawl.</p>
    #[serde(rename = "LogGroup", default, skip_serializing_if = "Option::is_none")]
    pub log_group: Option<String>,
    /// <p>The log stream for the last crawl.</p>
    #[serde(rename = "LogStream", default, skip_serializing_if = "Option::is_none")]
    pub log_stream: Option<String>,
    /// <p>The prefix for a message about this crawl.</p>
    #[serde(rename = "MessagePrefix", default, skip_serializing_if = "Option::is_none")]
    pub message_prefix: Option<String>,
    /// <p>The time at which the crawl started.</p>
    #[serde(rename = "StartTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<shape_types::Instant>,
}

/// <p>Specifies a crawler program that examines a data source and uses classifiers to try to determine its schema. If successful, the crawler records metadata concerning the data source in the AWS Glue Data Catalog.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Crawler {
    /// <p>The name of the crawler.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The Amazon Resource Name (ARN) of an IAM role that's used to access customer resources, such as Amazon Simple Storage Service (Amazon S3) data.</p>
    #[serde(rename = "Role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// <p>A collection of targets to crawl.</p>
    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<CrawlerTargets>,
    /// <p>The name of the database in which the crawler's output is stored.</p>
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// <p>A description of the crawler.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>A list of UTF-8 strings that specify the custom classifiers that are associated with the crawler.</p>
    #[serde(rename = "Classifiers", default, skip_serializing_if = "Option::is_none")]
    pub classifiers: Option<Vec<String>>,
    /// <p>The policy that specifies update and delete behaviors for the crawler.</p>
    #[serde(rename = "SchemaChangePolicy", default, skip_serializing_if = "Option::is_none")]
    pub schema_change_policy: Option<SchemaChangePolicy>,
    /// <p>Indicates whether the crawler is running, or whether a run is pending.</p>
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<CrawlerState>,
    /// <p>The prefix added to the names of tables that are created.</p>
    #[serde(rename = "TablePrefix", default, skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,
    /// <p>For scheduled crawlers, the schedule when the crawler runs.</p>
    #[serde(rename = "Schedule", default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    /// <p>If the crawler is running, contains the total time elapsed since the last crawl began.</p>
    #[serde(rename = "CrawlElapsedTime", default, skip_serializing_if = "Option::is_none")]
    pub crawl_elapsed_time: Option<i64>,
    /// <p>The time that the crawler was created.</p>
    #[serde(rename = "CreationTime", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<shape_types::Instant>,
    /// <p>The time that the crawler was last updated.</p>
    #[serde(rename = "LastUpdated", with = "shape_types::serde_util::instant_epoch::option", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<shape_types::Instant>,
    /// <p>The status of the last crawl, and potentially error information if an error occurred.</p>
    #[serde(rename = "LastCrawl", default, skip_serializing_if = "Option::is_none")]
    pub last_crawl: Option<LastCrawlInfo>,
    /// <p>The version of the crawler.</p>
    #[serde(rename = "Version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// <p>Crawler configuration information. This versioned JSON string allows users to specify aspects of a crawler's behavior.</p>
    #[serde(rename = "Configuration", default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used by this crawler.</p>
    #[serde(rename = "CrawlerSecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub crawler_security_configuration: Option<String>,
}

/// <p>Defines a condition under which a trigger fires.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Condition {
    /// <p>A logical operator.</p>
    #[serde(rename = "LogicalOperator", default, skip_serializing_if = "Option::is_none")]
    pub logical_operator: Option<LogicalOperator>,
    /// <p>The name of the job whose <code>JobRuns</code> this condition applies to, and on which this trigger waits.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>The condition state. Currently, the only job states that a trigger can listen for are <code>SUCCEEDED</code>, <code>STOPPED</code>, <code>FAILED</code>, and <code>TIMEOUT</code>.</p>
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<JobRunState>,
    /// <p>The name of the crawler to which this condition applies.</p>
    #[serde(rename = "CrawlerName", default, skip_serializing_if = "Option::is_none")]
    pub crawler_name: Option<String>,
    /// <p>The state of the crawler to which this condition applies.</p>
    #[serde(rename = "CrawlState", default, skip_serializing_if = "Option::is_none")]
    pub crawl_state: Option<CrawlState>,
}

/// <p>Defines the predicate of the trigger, which determines when it fires.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Predicate {
    /// <p>An optional field if only one condition is listed. If multiple conditions are listed, then this field is required.</p>
    #[serde(rename = "Logical", default, skip_serializing_if = "Option::is_none")]
    pub logical: Option<Logical>,
    /// <p>A list of the conditions that determine when the trigger will fire.</p>
    #[serde(rename = "Conditions", default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

/// <p>Defines an action to be initiated by a trigger.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    /// <p>The name of a job to be executed.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>The job arguments used when this trigger fires. For this job run, they replace the default arguments set in the job definition itself.</p>
    #[serde(rename = "Arguments", default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<HashMap<String, String>>,
    /// <p>The <code>JobRun</code> timeout in minutes. This overrides the timeout value set in the parent job.</p>
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// <p>The name of the <code>SecurityConfiguration</code> structure to be used with this action.</p>
    #[serde(rename = "SecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    /// <p>Specifies configuration properties of a job run notification.</p>
    #[serde(rename = "NotificationProperty", default, skip_serializing_if = "Option::is_none")]
    pub notification_property: Option<NotificationProperty>,
    /// <p>The name of the crawler to be used with this action.</p>
    #[serde(rename = "CrawlerName", default, skip_serializing_if = "Option::is_none")]
    pub crawler_name: Option<String>,
}

/// <p>Information about a specific trigger.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trigger {
    /// <p>The name of the trigger.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>The name of the workflow associated with the trigger.</p>
    #[serde(rename = "WorkflowName", default, skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    /// <p>Reserved for future use.</p>
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The type of trigger that this is.</p>
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<TriggerType>,
    /// <p>The current state of the trigger.</p>
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<TriggerState>,
    /// <p>A description of this trigger.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>A <code>cron</code> expression used to specify the schedule.</p>
    #[serde(rename = "Schedule", default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// <p>The actions initiated by this trigger.</p>
    #[serde(rename = "Actions", default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    /// <p>The predicate of this trigger, which defines when it will fire.</p>
    #[serde(rename = "Predicate", default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
}

/// <p>A structure used to provide information used to update a trigger. This object updates the previous trigger definition by overwriting it completely.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TriggerUpdate {
    /// <p>Reserved for future use.</p>
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// <p>A description of this trigger.</p>
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// <p>A <code>cron</code> expression used to specify the schedule.</p>
    #[serde(rename = "Schedule", default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// <p>The actions initiated by this trigger.</p>
    #[serde(rename = "Actions", default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    /// <p>The predicate of this trigger, which defines when it will fire.</p>
    #[serde(rename = "Predicate", default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Predicate>,
}

/// <p>Contains details about an error.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// <p>The code associated with this error.</p>
    #[serde(rename = "ErrorCode", default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// <p>A message describing the error.</p>
    #[serde(rename = "ErrorMessage", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// <p>Records a successful request to stop a specified <code>JobRun</code>.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchStopJobRunSuccessfulSubmission {
    /// <p>The name of the job definition used in the job run that was stopped.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>The <code>JobRunId</code> of the job run that was stopped.</p>
    #[serde(rename = "JobRunId", default, skip_serializing_if = "Option::is_none")]
    pub job_run_id: Option<String>,
}

/// <p>Records an error that occurred when attempting to stop a specified job run.</p>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchStopJobRunError {
    /// <p>The name of the job definition that is used in the job run in question.</p>
    #[serde(rename = "JobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// <p>The <code>JobRunId</code> of the job run in question.</p>
    #[serde(rename = "JobRunId", default, skip_serializing_if = "Option::is_none")]
    pub job_run_id: Option<String>,
    /// <p>Specifies details about the error that was encountered.</p>
    #[serde(rename = "ErrorDetail", default, skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<ErrorDetail>,
}
