use crate::common;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Placeholder for the new value in a SET expression.
const VALUE_PLACEHOLDER: &str = ":value";

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    set_expression: common::ExpressionInput,
    table_name: String,
}

async fn send_update(
    client: &Client,
    update: UpdateItemInput,
) -> Result<(), error::SdkError<operation::update_item::UpdateItemError>> {
    client
        .update_item()
        .set_key(Some(update.key))
        .update_expression(update.set_expression.expression)
        .set_expression_attribute_names(Some(update.set_expression.expression_attribute_names))
        .set_expression_attribute_values(Some(update.set_expression.expression_attribute_values))
        .table_name(update.table_name)
        .send()
        .await?;
    Ok(())
}

/// Update a single top-level attribute of an existing item.
///
/// Issues `SET #attribute = :value` with exactly one name and one value
/// substitution. Fire-and-forget: returns nothing on success.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_ops::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update = write::update_item::UpdateAttribute {
///     key: common::key::PrimaryKey {
///         partition_key: common::key::ItemKey {
///             name: "id".to_string(),
///             value: "1".to_string(),
///         },
///         ..Default::default()
///     },
///     attribute: "name".to_string(),
///     value: "Jane".to_string(),
///     table_name: "users".to_string(),
/// };
/// update.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateAttribute<T> {
    /// The name of the attribute to set.
    pub attribute: String,
    /// The primary key of the item to update.
    pub key: common::key::PrimaryKey<T>,
    /// The name of the table to write to.
    pub table_name: String,
    /// The new value of the attribute.
    pub value: T,
}

impl<T: Serialize> TryFrom<UpdateAttribute<T>> for UpdateItemInput {
    type Error = Error;

    fn try_from(update: UpdateAttribute<T>) -> Result<Self> {
        let key = update.key.try_into()?;
        let value = to_attribute_value(update.value)?;
        let placeholder = format!("#{}", update.attribute);
        let set_expression = common::ExpressionInput {
            expression: format!("SET {placeholder} = {VALUE_PLACEHOLDER}"),
            expression_attribute_names: collections::HashMap::from([(
                placeholder,
                update.attribute,
            )]),
            expression_attribute_values: collections::HashMap::from([(
                VALUE_PLACEHOLDER.to_string(),
                value,
            )]),
        };
        let operation = Self {
            key,
            set_expression,
            table_name: update.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> UpdateAttribute<T> {
    /// Execute the update item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_ops.update_attribute", skip(self), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<(), error::SdkError<operation::update_item::UpdateItemError>> {
        let update: UpdateItemInput = self.try_into().map_err(error::BuildError::other)?;
        send_update(client, update).await
    }
}

/// Update one sub-attribute nested one level inside a map attribute.
///
/// Issues `SET #attribute.#sub_attribute = :value` with two name
/// substitutions and one value substitution. The outer attribute must already
/// exist as a map on the item. Fire-and-forget: returns nothing on success.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_ops::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update = write::update_item::UpdateSubAttribute {
///     key: common::key::PrimaryKey {
///         partition_key: common::key::ItemKey {
///             name: "id".to_string(),
///             value: "1".to_string(),
///         },
///         ..Default::default()
///     },
///     attribute: "address".to_string(),
///     sub_attribute: "city".to_string(),
///     value: "Rome".to_string(),
///     table_name: "users".to_string(),
/// };
/// update.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateSubAttribute<T> {
    /// The name of the outer map attribute.
    pub attribute: String,
    /// The primary key of the item to update.
    pub key: common::key::PrimaryKey<T>,
    /// The name of the sub-attribute inside the outer attribute.
    pub sub_attribute: String,
    /// The name of the table to write to.
    pub table_name: String,
    /// The new value of the sub-attribute.
    pub value: T,
}

impl<T: Serialize> TryFrom<UpdateSubAttribute<T>> for UpdateItemInput {
    type Error = Error;

    fn try_from(update: UpdateSubAttribute<T>) -> Result<Self> {
        let key = update.key.try_into()?;
        let value = to_attribute_value(update.value)?;
        let outer_placeholder = format!("#{}", update.attribute);
        let inner_placeholder = format!("#{}", update.sub_attribute);
        let set_expression = common::ExpressionInput {
            expression: format!(
                "SET {outer_placeholder}.{inner_placeholder} = {VALUE_PLACEHOLDER}"
            ),
            expression_attribute_names: collections::HashMap::from([
                (outer_placeholder, update.attribute),
                (inner_placeholder, update.sub_attribute),
            ]),
            expression_attribute_values: collections::HashMap::from([(
                VALUE_PLACEHOLDER.to_string(),
                value,
            )]),
        };
        let operation = Self {
            key,
            set_expression,
            table_name: update.table_name,
        };
        Ok(operation)
    }
}

impl<T: Serialize> UpdateSubAttribute<T> {
    /// Execute the update item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_ops.update_sub_attribute", skip(self), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<(), error::SdkError<operation::update_item::UpdateItemError>> {
        let update: UpdateItemInput = self.try_into().map_err(error::BuildError::other)?;
        send_update(client, update).await
    }
}
