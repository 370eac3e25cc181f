use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// One key attribute: a name and its value.
///
/// ```rust
/// use dynamodb_ops::common::key;
///
/// let key = key::ItemKey {
///     name: "id".to_string(),
///     value: "1".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemKey<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

/// The primary key of an item: a partition key and an optional sort key.
///
/// Tables with a simple primary key leave `sort_key` as `None`; tables with a
/// composite primary key must supply both.
///
/// ```rust
/// use dynamodb_ops::common::key;
///
/// let key = key::PrimaryKey {
///     partition_key: key::ItemKey {
///         name: "id".to_string(),
///         value: "1".to_string(),
///     },
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrimaryKey<T> {
    /// The partition key (required).
    pub partition_key: ItemKey<T>,
    /// The sort key (only for tables with composite primary keys).
    pub sort_key: Option<ItemKey<T>>,
}

impl<T: Serialize> TryFrom<PrimaryKey<T>> for collections::HashMap<String, types::AttributeValue> {
    type Error = Error;

    fn try_from(key: PrimaryKey<T>) -> Result<Self> {
        let partition_value = to_attribute_value(key.partition_key.value)?;
        let mut map = Self::from([(key.partition_key.name, partition_value)]);
        if let Some(sort_key) = key.sort_key {
            let sort_value = to_attribute_value(sort_key.value)?;
            map.insert(sort_key.name, sort_value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::partition_key_only(
        PrimaryKey {
            partition_key: ItemKey {
                name: "id".to_string(),
                value: Value::String("1".to_string()),
            },
            ..Default::default()
        },
        collections::HashMap::from([(
            "id".to_string(),
            types::AttributeValue::S("1".to_string()),
        )])
    )]
    #[case::partition_key_number(
        PrimaryKey {
            partition_key: ItemKey {
                name: "year".to_string(),
                value: Value::Number(1994.into()),
            },
            ..Default::default()
        },
        collections::HashMap::from([(
            "year".to_string(),
            types::AttributeValue::N("1994".to_string()),
        )])
    )]
    #[case::composite_key(
        PrimaryKey {
            partition_key: ItemKey {
                name: "id".to_string(),
                value: Value::String("1".to_string()),
            },
            sort_key: Some(ItemKey {
                name: "created_at".to_string(),
                value: Value::String("2024-01-01".to_string()),
            }),
        },
        collections::HashMap::from([
            (
                "id".to_string(),
                types::AttributeValue::S("1".to_string()),
            ),
            (
                "created_at".to_string(),
                types::AttributeValue::S("2024-01-01".to_string()),
            ),
        ])
    )]
    #[case::composite_key_mixed_types(
        PrimaryKey {
            partition_key: ItemKey {
                name: "artist".to_string(),
                value: Value::String("a".to_string()),
            },
            sort_key: Some(ItemKey {
                name: "track".to_string(),
                value: Value::Number(7.into()),
            }),
        },
        collections::HashMap::from([
            (
                "artist".to_string(),
                types::AttributeValue::S("a".to_string()),
            ),
            (
                "track".to_string(),
                types::AttributeValue::N("7".to_string()),
            ),
        ])
    )]
    fn test_primary_key_to_hash_map(
        #[case] key: PrimaryKey<Value>,
        #[case] expected: collections::HashMap<String, types::AttributeValue>,
    ) {
        let actual: collections::HashMap<String, types::AttributeValue> = key.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
