use crate::common;

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::{collections, ops};

/// Logical operator joining the conditions of a predicate.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicalOperator {
    /// Logical AND - all conditions must be true.
    And,
    /// Logical OR - at least one condition must be true.
    Or,
}

impl ops::Deref for LogicalOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Comparison applied to a single attribute.
///
/// Covers the comparator set of the SDK expression grammar: equality and
/// ordering, ranges, string prefixes, membership, containment, and existence.
///
/// ```rust
/// use dynamodb_ops::common::condition;
///
/// let eq = condition::Comparison::Equals("active".to_string());
/// let lt = condition::Comparison::LessThan(9);
/// let exists: condition::Comparison<String> = condition::Comparison::Exists;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Comparison<T> {
    /// The attribute begins with the given prefix (string attributes only).
    BeginsWith(String),
    /// The attribute value is between the two given values (inclusive).
    Between(T, T),
    /// The attribute contains the given value.
    Contains(T),
    /// The attribute value equals the given value.
    Equals(T),
    /// The attribute exists on the item.
    Exists,
    /// The attribute value is greater than the given value.
    GreaterThan(T),
    /// The attribute value is greater than or equal to the given value.
    GreaterThanOrEqual(T),
    /// The attribute value is one of the given values.
    In(Vec<T>),
    /// The attribute value is less than the given value.
    LessThan(T),
    /// The attribute value is less than or equal to the given value.
    LessThanOrEqual(T),
    /// The attribute does not contain the given value.
    NotContains(T),
    /// The attribute value does not equal the given value.
    NotEqual(T),
    /// The attribute does not exist on the item.
    NotExists,
}

impl<T: Serialize> Comparison<T> {
    fn build(
        self,
        name: &str,
        path: &str,
        index: &mut usize,
    ) -> Result<(String, collections::HashMap<String, types::AttributeValue>)> {
        let mut values = collections::HashMap::new();
        let expression = match self {
            Self::BeginsWith(prefix) => {
                let placeholder = format!(":{name}_begins_with{index}");
                *index += 1;
                let expression = format!("begins_with({path}, {placeholder})");
                values.insert(placeholder, types::AttributeValue::S(prefix));
                expression
            }
            Self::Between(low, high) => {
                let low = to_attribute_value(low)?;
                let high = to_attribute_value(high)?;
                let low_placeholder = format!(":{name}_between{index}");
                *index += 1;
                let high_placeholder = format!(":{name}_between{index}");
                *index += 1;
                let expression = format!("{path} BETWEEN {low_placeholder} AND {high_placeholder}");
                values.insert(low_placeholder, low);
                values.insert(high_placeholder, high);
                expression
            }
            Self::Contains(value) => {
                let value = to_attribute_value(value)?;
                let placeholder = format!(":{name}_contains{index}");
                *index += 1;
                let expression = format!("contains({path}, {placeholder})");
                values.insert(placeholder, value);
                expression
            }
            Self::Equals(value) => {
                let value = to_attribute_value(value)?;
                let placeholder = format!(":{name}_eq{index}");
                *index += 1;
                let expression = format!("{path} = {placeholder}");
                values.insert(placeholder, value);
                expression
            }
            Self::Exists => {
                format!("attribute_exists({path})")
            }
            Self::GreaterThan(value) => {
                let value = to_attribute_value(value)?;
                let placeholder = format!(":{name}_gt{index}");
                *index += 1;
                let expression = format!("{path} > {placeholder}");
                values.insert(placeholder, value);
                expression
            }
            Self::GreaterThanOrEqual(value) => {
                let value = to_attribute_value(value)?;
                let placeholder = format!(":{name}_gte{index}");
                *index += 1;
                let expression = format!("{path} >= {placeholder}");
                values.insert(placeholder, value);
                expression
            }
            Self::In(candidates) => {
                let mut placeholders = Vec::with_capacity(candidates.len());
                for (position, candidate) in candidates.into_iter().enumerate() {
                    let candidate = to_attribute_value(candidate)?;
                    let placeholder = format!(":{name}_in{index}_{position}");
                    *index += 1;
                    values.insert(placeholder.clone(), candidate);
                    placeholders.push(placeholder);
                }
                let placeholders = placeholders.join(", ");
                format!("{path} IN ({placeholders})")
            }
            Self::LessThan(value) => {
                let value = to_attribute_value(value)?;
                let placeholder = format!(":{name}_lt{index}");
                *index += 1;
                let expression = format!("{path} < {placeholder}");
                values.insert(placeholder, value);
                expression
            }
            Self::LessThanOrEqual(value) => {
                let value = to_attribute_value(value)?;
                let placeholder = format!(":{name}_lte{index}");
                *index += 1;
                let expression = format!("{path} <= {placeholder}");
                values.insert(placeholder, value);
                expression
            }
            Self::NotContains(value) => {
                let value = to_attribute_value(value)?;
                let placeholder = format!(":{name}_not_contains{index}");
                *index += 1;
                let expression = format!("NOT contains({path}, {placeholder})");
                values.insert(placeholder, value);
                expression
            }
            Self::NotEqual(value) => {
                let value = to_attribute_value(value)?;
                let placeholder = format!(":{name}_ne{index}");
                *index += 1;
                let expression = format!("{path} <> {placeholder}");
                values.insert(placeholder, value);
                expression
            }
            Self::NotExists => {
                format!("attribute_not_exists({path})")
            }
        };
        Ok((expression, values))
    }
}

/// A comparison bound to an attribute name.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeCondition<T> {
    /// The comparison to apply.
    pub comparison: Comparison<T>,
    /// The name of the attribute the comparison applies to.
    pub name: String,
}

/// An opaque predicate: a chain of attribute conditions joined by one logical
/// operator.
///
/// This is the value type the read and write operations accept wherever the
/// service takes a filter or key-condition expression. It is built by the
/// caller and passed through; the service validates it.
///
/// ```rust
/// use dynamodb_ops::common::condition;
///
/// let predicate = condition::Predicate {
///     operator: condition::LogicalOperator::And,
///     conditions: vec![condition::AttributeCondition {
///         name: "status".to_string(),
///         comparison: condition::Comparison::Equals("active".to_string()),
///     }],
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate<T> {
    /// The conditions to combine.
    pub conditions: Vec<AttributeCondition<T>>,
    /// The logical operator joining the conditions.
    pub operator: LogicalOperator,
}

impl<T: Serialize> TryFrom<Predicate<T>> for common::ExpressionInput {
    type Error = Error;

    fn try_from(predicate: Predicate<T>) -> Result<Self> {
        let mut fragments = Vec::with_capacity(predicate.conditions.len());
        let mut expression_attribute_names =
            collections::HashMap::with_capacity(predicate.conditions.len());
        let mut expression_attribute_values = collections::HashMap::new();
        let mut index = 0;
        for AttributeCondition { comparison, name } in predicate.conditions {
            let path = format!("#{name}");
            let (fragment, values) = comparison.build(&name, &path, &mut index)?;
            fragments.push(fragment);
            expression_attribute_names.insert(path, name);
            expression_attribute_values.extend(values);
        }
        let expression = fragments.join(predicate.operator.as_ref());
        let operation = common::ExpressionInput {
            expression,
            expression_attribute_names,
            expression_attribute_values,
        };
        Ok(operation)
    }
}
