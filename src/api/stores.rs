//! Stores API
//!
//! CRUD operations for the `/api/stores` resource.

use super::RemoteError;
use crate::models::{DeleteConfirmation, Store, StoreCreate, StoreUpdate};

/// List all stores, in server-defined order
pub async fn get_all() -> Result<Vec<Store>, RemoteError> {
    super::get("/api/stores").await
}

/// Create a store; returns the record with its server-assigned id and
/// timestamps
pub async fn create(payload: &StoreCreate) -> Result<Store, RemoteError> {
    payload.validate()?;
    super::post("/api/stores", payload).await
}

/// Partially update a store; returns the full updated record
pub async fn update(id: u32, patch: &StoreUpdate) -> Result<Store, RemoteError> {
    super::patch(&format!("/api/stores/{id}"), patch).await
}

/// Delete a store. The backend cascades to the store's items.
pub async fn delete(id: u32) -> Result<DeleteConfirmation, RemoteError> {
    super::delete(&format!("/api/stores/{id}")).await
}
