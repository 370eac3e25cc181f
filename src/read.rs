//! Read operations for retrieving data from DynamoDB tables.
//!
//! This module provides operations for reading data:
//! - Getting individual items by primary key
//! - Querying items with an optional key condition
//! - Scanning tables with an optional filter
//!
//! Scan and query return one raw page each; callers resume from the
//! response's `last_evaluated_key`.

/// Common utilities and types for read operations.
pub mod common;

/// Get item operation for retrieving a single item by primary key.
pub mod get_item;

/// Query operation for key-indexed reads.
pub mod query;

/// Scan operation for full-table reads.
pub mod scan;
