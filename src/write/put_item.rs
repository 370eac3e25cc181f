use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_item};
use std::collections;

/// put item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct PutItemInput {
    item: collections::HashMap<String, types::AttributeValue>,
    table_name: String,
}

/// Put item operation.
///
/// Inserts the item, or replaces it entirely if one with the same key already
/// exists. The item must include its key attributes; the service rejects it
/// otherwise.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_ops::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: json!({"id": "1", "name": "John"}),
///     table_name: "users".to_string(),
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItem<T> {
    /// The item to put into the table, key attributes included.
    pub item: T,
    /// The name of the table to write to.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<PutItem<T>> for PutItemInput {
    type Error = Error;

    fn try_from(put_item: PutItem<T>) -> Result<Self> {
        let item = to_item(put_item.item)?;
        let operation = Self {
            item,
            table_name: put_item.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> PutItem<T> {
    /// Execute the put item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_ops.put_item", skip(self), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        let put_item: PutItemInput = self.try_into().map_err(error::BuildError::other)?;
        client
            .put_item()
            .set_item(Some(put_item.item))
            .table_name(put_item.table_name)
            .send()
            .await
    }
}
