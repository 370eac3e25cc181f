//! Common utilities for DynamoDB operations.
//!
//! This module provides the types shared across read and write operations:
//! primary keys and the condition predicate abstraction.

/// Condition predicates for filter and key-condition expressions.
pub mod condition;

/// Key types for identifying items in DynamoDB tables.
pub mod key;

use aws_sdk_dynamodb::types;
use std::collections;

/// A built expression with its name and value substitutions.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}
