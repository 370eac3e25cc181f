use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PageInput {
    pub(crate) exclusive_start_key: Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) limit: Option<i32>,
    pub(crate) table_name: String,
}

/// Arguments shared by the paged read operations (Query, Scan).
///
/// No pagination loop is run on the caller's behalf: each send returns one
/// page, and the caller feeds the response's `last_evaluated_key` back in as
/// `exclusive_start_key` to continue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageArgs<T> {
    /// Where to resume a previous operation from.
    ///
    /// Typically the `last_evaluated_key` of the previous response. `None`
    /// starts from the beginning.
    pub exclusive_start_key: Option<collections::HashMap<String, T>>,
    /// The maximum number of items to evaluate for this page.
    pub limit: Option<i32>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<PageArgs<T>> for PageInput {
    type Error = Error;

    fn try_from(page_args: PageArgs<T>) -> Result<Self> {
        let exclusive_start_key = match page_args.exclusive_start_key {
            Some(start_key) => {
                let mut serialized = collections::HashMap::with_capacity(start_key.len());
                for (name, value) in start_key {
                    let value = to_attribute_value(value)?;
                    serialized.insert(name, value);
                }
                Some(serialized)
            }
            None => None,
        };
        let operation = Self {
            exclusive_start_key,
            limit: page_args.limit,
            table_name: page_args.table_name,
        };
        Ok(operation)
    }
}

/// Apply the shared paged-read settings to an SDK fluent builder.
#[macro_export]
macro_rules! apply_page_args {
    ($builder:expr, $page:expr) => {
        $builder
            .set_exclusive_start_key($page.exclusive_start_key)
            .set_limit($page.limit)
            .table_name($page.table_name)
    };
}
