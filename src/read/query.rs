use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// query operation
#[derive(Clone, Debug, Default, PartialEq)]
struct QueryInput {
    expression_attribute_names: Option<collections::HashMap<String, String>>,
    expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    key_condition_expression: Option<String>,
    page: read::common::PageInput,
}

/// Query operation.
///
/// A key-indexed read with an optional key-condition predicate, passed
/// through unchanged. Unlike [`Scan`](crate::read::scan::Scan), the service
/// requires a key condition naming the partition key; a query sent without
/// one fails with the service's own validation error.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_ops::{common, read};
/// use serde_json::Value;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let query = read::query::Query {
///     key_condition: Some(common::condition::Predicate {
///         operator: common::condition::LogicalOperator::And,
///         conditions: vec![common::condition::AttributeCondition {
///             name: "id".to_string(),
///             comparison: common::condition::Comparison::Equals(
///                 Value::String("1".to_string()),
///             ),
///         }],
///     }),
///     page_args: read::common::PageArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// let page = query.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query<T> {
    /// Key condition selecting the items to read, passed through unchanged.
    pub key_condition: Option<common::condition::Predicate<T>>,
    /// Table name, continuation token, and page size.
    pub page_args: read::common::PageArgs<T>,
}

impl<T: Serialize> TryFrom<Query<T>> for QueryInput {
    type Error = Error;

    fn try_from(query: Query<T>) -> Result<Self> {
        let page = query.page_args.try_into()?;
        let operation = match query.key_condition {
            Some(key_condition) => {
                let key_condition: common::ExpressionInput = key_condition.try_into()?;
                Self {
                    expression_attribute_names: Some(key_condition.expression_attribute_names),
                    expression_attribute_values: Some(key_condition.expression_attribute_values),
                    key_condition_expression: Some(key_condition.expression),
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

impl<T: Serialize> Query<T> {
    /// Execute the query operation, returning one raw page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_ops.query", skip(self), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<operation::query::QueryOutput, error::SdkError<operation::query::QueryError>> {
        let query: QueryInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .query()
            .set_expression_attribute_names(query.expression_attribute_names)
            .set_expression_attribute_values(query.expression_attribute_values)
            .set_key_condition_expression(query.key_condition_expression);
        crate::apply_page_args!(builder, query.page).send().await
    }
}
