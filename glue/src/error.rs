/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Modeled errors for AWS Glue.
//!
//! Glue is a JSON-protocol service; the wire code of each exception is its
//! type name.

shape_types::modeled_errors! {
    /// All errors AWS Glue models, plus [`Error::Unhandled`] for codes this
    /// client has no model for.
    pub enum Error {
        /// <p>Access to a resource was denied.</p>
        AccessDeniedException => "AccessDeniedException",
        /// <p>A resource to be created or added already exists.</p>
        AlreadyExistsException => "AlreadyExistsException",
        /// <p>Two processes are trying to modify a resource simultaneously.</p>
        ConcurrentModificationException => "ConcurrentModificationException",
        /// <p>Too many jobs are being run concurrently.</p>
        ConcurrentRunsExceededException => "ConcurrentRunsExceededException",
        /// <p>A specified condition was not satisfied.</p>
        ConditionCheckFailureException => "ConditionCheckFailureException",
        /// <p>The specified crawler is not running.</p>
        CrawlerNotRunningException => "CrawlerNotRunningException",
        /// <p>The operation cannot be performed because the crawler is already running.</p>
        CrawlerRunningException => "CrawlerRunningException",
        /// <p>The specified crawler is stopping.</p>
        CrawlerStoppingException => "CrawlerStoppingException",
        /// <p>A specified entity does not exist.</p>
        EntityNotFoundException => "EntityNotFoundException",
        /// <p>An encryption operation failed.</p>
        GlueEncryptionException => "GlueEncryptionException",
        /// <p>The same unique identifier was associated with two different records.</p>
        IdempotentParameterMismatchException => "IdempotentParameterMismatchException",
        /// <p>An internal service error occurred.</p>
        InternalServiceException => "InternalServiceException",
        /// <p>The input provided was not valid.</p>
        InvalidInputException => "InvalidInputException",
        /// <p>There is no applicable schedule.</p>
        NoScheduleException => "NoScheduleException",
        /// <p>The operation timed out.</p>
        OperationTimeoutException => "OperationTimeoutException",
        /// <p>A resource numerical limit was exceeded.</p>
        ResourceNumberLimitExceededException => "ResourceNumberLimitExceededException",
        /// <p>The specified scheduler is not running.</p>
        SchedulerNotRunningException => "SchedulerNotRunningException",
        /// <p>The specified scheduler is already running.</p>
        SchedulerRunningException => "SchedulerRunningException",
        /// <p>The specified scheduler is transitioning.</p>
        SchedulerTransitioningException => "SchedulerTransitioningException",
        /// <p>A value could not be validated.</p>
        ValidationException => "ValidationException",
        /// <p>There was a version conflict.</p>
        VersionMismatchException => "VersionMismatchException",
    }
}
