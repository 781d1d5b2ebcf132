//! List Grouping Utilities
//!
//! Pure helpers shaping the flat item collection for display.

use crate::models::ShoppingItem;

/// Keep only items belonging to `store_id`; `None` keeps everything
pub fn filter_by_store(items: &[ShoppingItem], store_id: Option<u32>) -> Vec<ShoppingItem> {
    match store_id {
        Some(id) => items.iter().filter(|i| i.store_id == id).cloned().collect(),
        None => items.to_vec(),
    }
}

/// Split into (unchecked, checked), preserving order within each half
pub fn partition_checked(items: &[ShoppingItem]) -> (Vec<ShoppingItem>, Vec<ShoppingItem>) {
    items.iter().cloned().partition(|i| !i.is_checked)
}

/// Group unchecked items under their store, in first-seen item order.
/// Checked items are excluded; they render in their own section.
pub fn group_unchecked_by_store(items: &[ShoppingItem]) -> Vec<(u32, Vec<ShoppingItem>)> {
    let mut groups: Vec<(u32, Vec<ShoppingItem>)> = Vec::new();
    for item in items.iter().filter(|i| !i.is_checked) {
        match groups.iter_mut().find(|(id, _)| *id == item.store_id) {
            Some((_, group)) => group.push(item.clone()),
            None => groups.push((item.store_id, vec![item.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Store;
    use chrono::NaiveDateTime;

    fn make_store(id: u32) -> Store {
        let ts = NaiveDateTime::parse_from_str("2026-08-01T09:30:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        Store {
            id,
            name: format!("Store {}", id),
            color: "#6366f1".to_string(),
            icon: "🏪".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn make_item(id: u32, store_id: u32, checked: bool) -> ShoppingItem {
        let store = make_store(store_id);
        ShoppingItem {
            id,
            name: format!("Item {}", id),
            quantity: "1".to_string(),
            store_id,
            need_by_date: None,
            is_checked: checked,
            created_at: store.created_at,
            updated_at: store.updated_at,
            store,
        }
    }

    #[test]
    fn test_filter_by_store() {
        let items = vec![
            make_item(1, 10, false),
            make_item(2, 20, false),
            make_item(3, 10, true),
        ];

        let filtered = filter_by_store(&items, Some(10));
        assert_eq!(filtered.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);

        let all = filter_by_store(&items, None);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_partition_checked() {
        let items = vec![
            make_item(1, 10, false),
            make_item(2, 10, true),
            make_item(3, 20, false),
        ];

        let (unchecked, checked) = partition_checked(&items);
        assert_eq!(unchecked.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(checked.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_group_unchecked_by_store() {
        let items = vec![
            make_item(1, 10, false),
            make_item(2, 20, false),
            make_item(3, 10, false),
            make_item(4, 20, true), // checked, excluded
        ];

        let groups = group_unchecked_by_store(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 10);
        assert_eq!(groups[0].1.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(groups[1].0, 20);
        assert_eq!(groups[1].1.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_group_skips_fully_checked_stores() {
        let items = vec![make_item(1, 10, true), make_item(2, 20, false)];
        let groups = group_unchecked_by_store(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, 20);
    }
}
