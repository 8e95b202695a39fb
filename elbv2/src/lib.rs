/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! <fullname>Elastic Load Balancing</fullname>
//!
//! <p>A load balancer distributes incoming traffic across targets, such as
//! your EC2 instances. This enables you to increase the availability of your
//! application. The load balancer also monitors the health of its registered
//! targets and ensures that it routes traffic only to healthy targets. You
//! configure your load balancer to accept incoming traffic by specifying one
//! or more listeners, which are configured with a protocol and port number
//! for connections from clients to the load balancer. You configure a target
//! group with a protocol and port number for connections from the load
//! balancer to the targets, and with health check settings to be used when
//! checking the health status of the targets.</p>
//!
//! <p>Elastic Load Balancing supports the following types of load balancers:
//! Application Load Balancers, Network Load Balancers, Gateway Load
//! Balancers, and Classic Load Balancers. This reference covers the
//! 2015-12-01 API, which supports Application Load Balancers, Network Load
//! Balancers, and Gateway Load Balancers.</p>
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
