#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Ops
//!
//! A thin, type-safe convenience layer over the AWS SDK for common DynamoDB
//! table operations.
//!
//! ## Overview
//!
//! This library wraps the handful of calls most table-centric code makes all
//! day long - describe, scan, query, get, put, update, delete - behind plain
//! structs with public fields, so callers never assemble expression strings or
//! placeholder maps by hand. It deliberately adds nothing else:
//!
//! - No pagination loops: scan and query return a single raw page, and callers
//!   resume from the response's `last_evaluated_key` themselves
//! - No retries, batching, conditional writes, or transactions
//! - No error taxonomy: every failure is the SDK's own error, unmodified
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_dynamodb::Client;
//! use dynamodb_ops::{common, read};
//! use serde_json::Value;
//!
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! // Scan "movies" for items with runtime < 9, one page at a time.
//! let scan = read::scan::Scan {
//!     filter: Some(common::condition::Predicate {
//!         operator: common::condition::LogicalOperator::And,
//!         conditions: vec![common::condition::AttributeCondition {
//!             name: "runtime".to_string(),
//!             comparison: common::condition::Comparison::LessThan(Value::Number(9.into())),
//!         }],
//!     }),
//!     page_args: read::common::PageArgs {
//!         table_name: "movies".to_string(),
//!         ..Default::default()
//!     },
//! };
//! let page = scan.send(client).await?;
//! println!("{} items", page.count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Keys and the predicate (filter/condition) abstraction
//! - [`mod@metadata`] - Table metadata retrieval
//! - [`mod@read`] - Read operations (GetItem, Query, Scan)
//! - [`mod@write`] - Write operations (PutItem, UpdateItem, DeleteItem)

/// Common utilities for keys and condition predicates.
pub mod common;

/// Table metadata retrieval via DescribeTable.
pub mod metadata;

/// Read operations for retrieving data from DynamoDB tables.
///
/// This module provides operations for:
/// - Getting individual items by key
/// - Querying items with an optional key condition
/// - Scanning tables with an optional filter
pub mod read;

/// Write operations for modifying data in DynamoDB tables.
///
/// This module provides operations for:
/// - Putting whole items (insert or replace)
/// - Updating a single attribute or one nested sub-attribute
/// - Deleting items by key
pub mod write;
