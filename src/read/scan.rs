use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// scan operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanInput {
    expression_attribute_names: Option<collections::HashMap<String, String>>,
    expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    filter_expression: Option<String>,
    page: read::common::PageInput,
}

/// Scan operation.
///
/// A full-table read with an optional post-filter. The response is one raw
/// page; its `last_evaluated_key` is the continuation token for the next
/// page. Filtering happens after items are read, so a filtered scan still
/// consumes capacity for everything it touches.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_ops::read;
/// use serde_json::Value;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan: read::scan::Scan<Value> = read::scan::Scan {
///     page_args: read::common::PageArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let page = scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan<T> {
    /// Filter applied to the scanned items, passed through unchanged.
    pub filter: Option<common::condition::Predicate<T>>,
    /// Table name, continuation token, and page size.
    pub page_args: read::common::PageArgs<T>,
}

impl<T: Serialize> TryFrom<Scan<T>> for ScanInput {
    type Error = Error;

    fn try_from(scan: Scan<T>) -> Result<Self> {
        let page = scan.page_args.try_into()?;
        let operation = match scan.filter {
            Some(filter) => {
                let filter: common::ExpressionInput = filter.try_into()?;
                Self {
                    expression_attribute_names: Some(filter.expression_attribute_names),
                    expression_attribute_values: Some(filter.expression_attribute_values),
                    filter_expression: Some(filter.expression),
                    page,
                }
            }
            None => Self {
                page,
                ..Default::default()
            },
        };
        Ok(operation)
    }
}

impl<T: Serialize> Scan<T> {
    /// Execute the scan operation, returning one raw page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_ops.scan", skip(self), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<operation::scan::ScanOutput, error::SdkError<operation::scan::ScanError>> {
        let scan: ScanInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .scan()
            .set_expression_attribute_names(scan.expression_attribute_names)
            .set_expression_attribute_values(scan.expression_attribute_values)
            .set_filter_expression(scan.filter_expression);
        crate::apply_page_args!(builder, scan.page).send().await
    }
}
