//! List View Sorting
//!
//! Derives the display order from the canonical sequence. Pure: the input
//! is never mutated and the output carries the same items, only reordered.

use crate::models::{Item, SortMode};

/// Reorder `items` for display according to `mode`
///
/// Rust's `sort_by` is stable, so ties keep their relative input order.
pub fn sort_items(items: &[Item], mode: SortMode) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match mode {
        SortMode::Input => {}
        SortMode::Description => {
            // Case-insensitive, standing in for localeCompare
            sorted.sort_by(|a, b| {
                a.description
                    .to_lowercase()
                    .cmp(&b.description.to_lowercase())
            });
        }
        SortMode::Packed => {
            // false < true puts unpacked items first
            sorted.sort_by(|a, b| a.packed.cmp(&b.packed));
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, description: &str, packed: bool) -> Item {
        Item {
            id,
            description: description.to_string(),
            quantity: 1,
            packed,
        }
    }

    #[test]
    fn test_input_mode_is_identity() {
        let items = vec![
            make_item(1, "Socks", true),
            make_item(2, "Passport", false),
            make_item(3, "Charger", false),
        ];
        assert_eq!(sort_items(&items, SortMode::Input), items);
    }

    #[test]
    fn test_description_mode_sorts_case_insensitively() {
        let items = vec![
            make_item(1, "socks", false),
            make_item(2, "Charger", false),
            make_item(3, "passport", false),
        ];
        let sorted = sort_items(&items, SortMode::Description);
        let ids: Vec<u32> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_description_mode_is_stable_permutation() {
        let items = vec![
            make_item(1, "Socks", false),
            make_item(2, "Charger", false),
            make_item(3, "Socks", true),
        ];
        let sorted = sort_items(&items, SortMode::Description);
        // Same multiset of ids, equal descriptions keep input order
        let ids: Vec<u32> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(sorted.len(), items.len());
    }

    #[test]
    fn test_packed_mode_puts_unpacked_first() {
        let items = vec![make_item(1, "A", true), make_item(2, "B", false)];
        let sorted = sort_items(&items, SortMode::Packed);
        let ids: Vec<u32> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_packed_mode_is_stable() {
        let items = vec![
            make_item(1, "A", false),
            make_item(2, "B", true),
            make_item(3, "C", false),
            make_item(4, "D", true),
        ];
        let sorted = sort_items(&items, SortMode::Packed);
        let ids: Vec<u32> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let items = vec![make_item(1, "Socks", false), make_item(2, "Charger", false)];
        let before = items.clone();
        let _ = sort_items(&items, SortMode::Description);
        assert_eq!(items, before);
    }
}
