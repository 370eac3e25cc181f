use crate::common;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// get item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct GetItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    table_name: String,
}

/// Get item operation.
///
/// Returns the raw response; an item that does not exist comes back as an
/// empty response, not an error.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_ops::{common, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let get_item = read::get_item::GetItem {
///     key: common::key::PrimaryKey {
///         partition_key: common::key::ItemKey {
///             name: "id".to_string(),
///             value: "1".to_string(),
///         },
///         ..Default::default()
///     },
///     table_name: "users".to_string(),
/// };
/// let output = get_item.send(client).await?;
/// println!("{:?}", output.item);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItem<T> {
    /// The primary key of the item to retrieve.
    pub key: common::key::PrimaryKey<T>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<GetItem<T>> for GetItemInput {
    type Error = Error;

    fn try_from(get_item: GetItem<T>) -> Result<Self> {
        let key = get_item.key.try_into()?;
        let operation = Self {
            key,
            table_name: get_item.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> GetItem<T> {
    /// Execute the get item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_ops.get_item", skip(self), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::get_item::GetItemOutput,
        error::SdkError<operation::get_item::GetItemError>,
    > {
        let get_item: GetItemInput = self.try_into().map_err(error::BuildError::other)?;
        client
            .get_item()
            .set_key(Some(get_item.key))
            .table_name(get_item.table_name)
            .send()
            .await
    }
}
