use crate::common;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// delete item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DeleteItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    table_name: String,
}

/// Delete item operation.
///
/// The key is built exactly like [`GetItem`](crate::read::get_item::GetItem)
/// builds its lookup key. Deleting an item that does not exist succeeds.
/// Fire-and-forget: returns nothing on success.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_ops::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let delete_item = write::delete_item::DeleteItem {
///     key: common::key::PrimaryKey {
///         partition_key: common::key::ItemKey {
///             name: "id".to_string(),
///             value: "1".to_string(),
///         },
///         ..Default::default()
///     },
///     table_name: "users".to_string(),
/// };
/// delete_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteItem<T> {
    /// The primary key of the item to delete.
    pub key: common::key::PrimaryKey<T>,
    /// The name of the table to write to.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<DeleteItem<T>> for DeleteItemInput {
    type Error = Error;

    fn try_from(delete_item: DeleteItem<T>) -> Result<Self> {
        let key = delete_item.key.try_into()?;
        let operation = Self {
            key,
            table_name: delete_item.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> DeleteItem<T> {
    /// Execute the delete item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_ops.delete_item", skip(self), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<(), error::SdkError<operation::delete_item::DeleteItemError>> {
        let delete_item: DeleteItemInput = self.try_into().map_err(error::BuildError::other)?;
        client
            .delete_item()
            .set_key(Some(delete_item.key))
            .table_name(delete_item.table_name)
            .send()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::partition_key_only(
        DeleteItem {
            key: common::key::PrimaryKey {
                partition_key: common::key::ItemKey {
                    name: "id".to_string(),
                    value: Value::String("1".to_string()),
                },
                ..Default::default()
            },
            table_name: "users".to_string(),
        },
        DeleteItemInput {
            key: collections::HashMap::from([(
                "id".to_string(),
                types::AttributeValue::S("1".to_string()),
            )]),
            table_name: "users".to_string(),
        }
    )]
    #[case::composite_key(
        DeleteItem {
            key: common::key::PrimaryKey {
                partition_key: common::key::ItemKey {
                    name: "id".to_string(),
                    value: Value::String("1".to_string()),
                },
                sort_key: Some(common::key::ItemKey {
                    name: "created_at".to_string(),
                    value: Value::String("2024-01-01".to_string()),
                }),
            },
            table_name: "users".to_string(),
        },
        DeleteItemInput {
            key: collections::HashMap::from([
                (
                    "id".to_string(),
                    types::AttributeValue::S("1".to_string()),
                ),
                (
                    "created_at".to_string(),
                    types::AttributeValue::S("2024-01-01".to_string()),
                ),
            ]),
            table_name: "users".to_string(),
        }
    )]
    fn test_delete_item(#[case] args: DeleteItem<Value>, #[case] expected: DeleteItemInput) {
        let actual: DeleteItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
