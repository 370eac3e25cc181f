//! Write operations for modifying data in DynamoDB tables.
//!
//! This module provides operations for writing data:
//! - Putting whole items (insert or replace)
//! - Updating a single attribute or one nested sub-attribute
//! - Deleting items by primary key
//!
//! Updates and deletes are fire-and-forget: they return nothing on success.

/// Delete item operation for removing items from tables.
pub mod delete_item;

/// Put item operation for creating or replacing items.
pub mod put_item;

/// Update operations for modifying a single attribute of an existing item.
pub mod update_item;
