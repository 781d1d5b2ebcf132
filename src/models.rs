//! Frontend Models
//!
//! Data structures matching the backend REST schemas.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Backend-side default color for new stores, made explicit here
pub const DEFAULT_STORE_COLOR: &str = "#6366f1";
/// Backend-side default icon for new stores, made explicit here
pub const DEFAULT_STORE_ICON: &str = "🏪";
/// Backend-side default quantity for new items, made explicit here
pub const DEFAULT_QUANTITY: &str = "1";

/// Store data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Shopping item data structure (matches backend)
///
/// `store` is a denormalized snapshot embedded by the server; it can go
/// stale relative to the live store record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: u32,
    pub name: String,
    pub quantity: String,
    pub store_id: u32,
    pub need_by_date: Option<NaiveDate>,
    pub is_checked: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub store: Store,
}

/// Success body of a DELETE call
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

// ========================
// Request Payloads
// ========================

/// Create payload for stores
#[derive(Debug, Clone, Serialize)]
pub struct StoreCreate {
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl StoreCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: DEFAULT_STORE_COLOR.to_string(),
            icon: DEFAULT_STORE_ICON.to_string(),
        }
    }

    /// Rejects malformed payloads before any network call
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("store name must not be empty".to_string());
        }
        Ok(())
    }
}

/// Sparse update payload for stores; unset fields are omitted from the
/// JSON body and left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Create payload for shopping items
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingItemCreate {
    pub name: String,
    pub quantity: String,
    pub store_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_by_date: Option<NaiveDate>,
}

impl ShoppingItemCreate {
    pub fn new(name: impl Into<String>, store_id: u32) -> Self {
        Self {
            name: name.into(),
            quantity: DEFAULT_QUANTITY.to_string(),
            store_id,
            need_by_date: None,
        }
    }

    /// Rejects malformed payloads before any network call
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("item name must not be empty".to_string());
        }
        if self.quantity.trim().is_empty() {
            return Err("quantity must not be empty".to_string());
        }
        Ok(())
    }
}

/// Sparse update payload for shopping items
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShoppingItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_by_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_checked: Option<bool>,
}

impl ShoppingItemUpdate {
    /// Patch toggling only the checked flag
    pub fn checked(is_checked: bool) -> Self {
        Self {
            is_checked: Some(is_checked),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store_json() -> &'static str {
        r##"{
            "id": 3,
            "name": "Corner Market",
            "color": "#3b82f6",
            "icon": "🏪",
            "created_at": "2026-08-01T09:30:00",
            "updated_at": "2026-08-02T10:00:00"
        }"##
    }

    #[test]
    fn store_deserializes_from_backend_json() {
        let store: Store = serde_json::from_str(sample_store_json()).unwrap();
        assert_eq!(store.id, 3);
        assert_eq!(store.name, "Corner Market");
        assert_eq!(store.color, "#3b82f6");
    }

    #[test]
    fn item_deserializes_with_embedded_store() {
        let json = format!(
            r#"{{
                "id": 7,
                "name": "Milk",
                "quantity": "1",
                "store_id": 3,
                "need_by_date": "2026-09-01",
                "is_checked": false,
                "created_at": "2026-08-01T09:31:00",
                "updated_at": "2026-08-01T09:31:00",
                "store": {}
            }}"#,
            sample_store_json()
        );
        let item: ShoppingItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.store_id, item.store.id);
        assert!(!item.is_checked);
        assert_eq!(
            item.need_by_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
    }

    #[test]
    fn item_need_by_date_is_nullable() {
        let json = format!(
            r#"{{
                "id": 8,
                "name": "Bread",
                "quantity": "2",
                "store_id": 3,
                "need_by_date": null,
                "is_checked": true,
                "created_at": "2026-08-01T09:31:00",
                "updated_at": "2026-08-01T09:31:00",
                "store": {}
            }}"#,
            sample_store_json()
        );
        let item: ShoppingItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.need_by_date, None);
    }

    #[test]
    fn store_create_carries_explicit_defaults() {
        let payload = StoreCreate::new("Corner Market");
        assert_eq!(payload.color, DEFAULT_STORE_COLOR);
        assert_eq!(payload.icon, DEFAULT_STORE_ICON);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn item_create_defaults_quantity() {
        let payload = ShoppingItemCreate::new("Milk", 3);
        assert_eq!(payload.quantity, DEFAULT_QUANTITY);
        assert_eq!(payload.need_by_date, None);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["quantity"], "1");
        assert_eq!(body["store_id"], 3);
        // Unset optional date is omitted entirely
        assert!(body.get("need_by_date").is_none());
    }

    #[test]
    fn blank_names_are_rejected_before_the_network() {
        assert!(StoreCreate::new("   ").validate().is_err());
        assert!(ShoppingItemCreate::new("", 1).validate().is_err());
    }

    #[test]
    fn sparse_update_serializes_only_set_fields() {
        let patch = ShoppingItemUpdate::checked(true);
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "is_checked": true }));

        let empty = serde_json::to_value(ShoppingItemUpdate::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn update_can_clear_the_need_by_date() {
        let patch = ShoppingItemUpdate {
            need_by_date: Some(None),
            ..Default::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "need_by_date": null }));
    }

    #[test]
    fn store_update_skips_unset_fields() {
        let patch = StoreUpdate {
            name: Some("Bakery".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"name":"Bakery"}"#
        );
    }
}
