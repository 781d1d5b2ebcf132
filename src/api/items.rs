//! Items API
//!
//! CRUD operations for the `/api/items` resource.

use super::RemoteError;
use crate::models::{DeleteConfirmation, ShoppingItem, ShoppingItemCreate, ShoppingItemUpdate};

/// List all shopping items, in server-defined order
pub async fn get_all() -> Result<Vec<ShoppingItem>, RemoteError> {
    super::get("/api/items").await
}

/// Create an item; returns the record with its server-assigned id,
/// timestamps, and embedded store snapshot
pub async fn create(payload: &ShoppingItemCreate) -> Result<ShoppingItem, RemoteError> {
    payload.validate()?;
    super::post("/api/items", payload).await
}

/// Partially update an item; returns the full updated record
pub async fn update(id: u32, patch: &ShoppingItemUpdate) -> Result<ShoppingItem, RemoteError> {
    super::patch(&format!("/api/items/{id}"), patch).await
}

/// Delete an item
pub async fn delete(id: u32) -> Result<DeleteConfirmation, RemoteError> {
    super::delete(&format!("/api/items/{id}")).await
}
