//! Table metadata retrieval.
//!
//! A single pass-through over DescribeTable that reads the handful of fields
//! table-management code usually wants: item count, primary key name, status,
//! size, and the global secondary indices.

use aws_sdk_dynamodb::{Client, error, operation, types};

/// Metadata about a table, read off its description unmodified.
///
/// Every field is optional because the service models them as optional; a
/// table that is still being created may report none of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableMetadata {
    /// The global secondary indices of the table, if any.
    pub global_secondary_indices: Option<Vec<types::GlobalSecondaryIndexDescription>>,
    /// The approximate number of items in the table.
    ///
    /// The service updates this roughly every six hours, so it may lag recent
    /// writes.
    pub item_count: Option<i64>,
    /// The attribute name of the partition (HASH) key.
    pub primary_key_name: Option<String>,
    /// The approximate size of the table in bytes.
    pub size_bytes: Option<i64>,
    /// The current status of the table (creating, active, deleting, ...).
    pub status: Option<types::TableStatus>,
}

impl From<types::TableDescription> for TableMetadata {
    fn from(description: types::TableDescription) -> Self {
        let primary_key_name = description
            .key_schema
            .unwrap_or_default()
            .into_iter()
            .find(|element| element.key_type == types::KeyType::Hash)
            .map(|element| element.attribute_name);
        Self {
            global_secondary_indices: description.global_secondary_indexes,
            item_count: description.item_count,
            primary_key_name,
            size_bytes: description.table_size_bytes,
            status: description.table_status,
        }
    }
}

/// Get table metadata operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_ops::metadata;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let get_metadata = metadata::GetTableMetadata {
///     table_name: "users".to_string(),
/// };
/// let metadata = get_metadata.send(client).await?;
/// println!("{:?} items", metadata.item_count);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetTableMetadata {
    /// The name of the table to describe.
    pub table_name: String,
}

impl GetTableMetadata {
    /// Execute the describe table operation and project its metadata.
    ///
    /// A response carrying no table description yields an all-`None` metadata
    /// value rather than an error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_ops.get_table_metadata", err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<TableMetadata, error::SdkError<operation::describe_table::DescribeTableError>> {
        let output = client
            .describe_table()
            .table_name(self.table_name)
            .send()
            .await?;
        let metadata = output.table.map(TableMetadata::from).unwrap_or_default();
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty_description(
        types::TableDescription::builder().build(),
        TableMetadata::default()
    )]
    #[case::simple_key(
        types::TableDescription::builder()
            .table_name("users")
            .table_status(types::TableStatus::Active)
            .item_count(42)
            .table_size_bytes(1024)
            .key_schema(
                types::KeySchemaElement::builder()
                    .attribute_name("id")
                    .key_type(types::KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .build(),
        TableMetadata {
            item_count: Some(42),
            primary_key_name: Some("id".to_string()),
            size_bytes: Some(1024),
            status: Some(types::TableStatus::Active),
            ..Default::default()
        }
    )]
    #[case::composite_key_sort_key_first(
        types::TableDescription::builder()
            .table_status(types::TableStatus::Updating)
            .key_schema(
                types::KeySchemaElement::builder()
                    .attribute_name("created_at")
                    .key_type(types::KeyType::Range)
                    .build()
                    .unwrap(),
            )
            .key_schema(
                types::KeySchemaElement::builder()
                    .attribute_name("id")
                    .key_type(types::KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .build(),
        TableMetadata {
            primary_key_name: Some("id".to_string()),
            status: Some(types::TableStatus::Updating),
            ..Default::default()
        }
    )]
    #[case::with_global_secondary_index(
        types::TableDescription::builder()
            .table_status(types::TableStatus::Active)
            .key_schema(
                types::KeySchemaElement::builder()
                    .attribute_name("id")
                    .key_type(types::KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .global_secondary_indexes(
                types::GlobalSecondaryIndexDescription::builder()
                    .index_name("by_email")
                    .build(),
            )
            .build(),
        TableMetadata {
            global_secondary_indices: Some(vec![
                types::GlobalSecondaryIndexDescription::builder()
                    .index_name("by_email")
                    .build(),
            ]),
            primary_key_name: Some("id".to_string()),
            status: Some(types::TableStatus::Active),
            ..Default::default()
        }
    )]
    fn test_table_description_to_metadata(
        #[case] description: types::TableDescription,
        #[case] expected: TableMetadata,
    ) {
        let actual = TableMetadata::from(description);
        assert_eq!(actual, expected);
    }
}
