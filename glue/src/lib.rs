/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>AWS Glue</fullname>
//!
//! <p>Defines the public endpoint for the AWS Glue service. AWS Glue is a
//! fully managed extract, transform, and load (ETL) service that makes it
//! easy for customers to prepare and load their data for analytics. The Data
//! Catalog is a persistent metadata store holding table definitions, job
//! definitions, and other control information; crawlers populate it, jobs
//! transform the data it describes, and triggers start jobs on a schedule or
//! in response to other jobs and crawls.</p>
//!
//! This crate holds only the data shapes of the service: the structs and
//! enums exchanged with it, their wire names, and the pagination plumbing.
//! Transport is out of scope; pair the shapes with the connector of your
//! choice.

pub mod error;
pub mod input;
pub mod model;
pub mod output;

pub use error::Error;
