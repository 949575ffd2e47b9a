//! Canonical List Operations
//!
//! Pure functions over the canonical item sequence. Every operation builds
//! a new sequence instead of mutating the old one, so an observer only ever
//! sees a complete pre- or post-operation value. A missing id is a silent
//! no-op, never an error.

use crate::models::Item;

/// Append `item` to the end of the sequence
///
/// No validation here; the form is responsible for rejecting blank
/// descriptions, and ids come from the store's counter.
pub fn add_item(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Drop the item with the given id, if present
pub fn delete_item(items: &[Item], id: u32) -> Vec<Item> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Flip `packed` on the item with the given id, if present
pub fn toggle_packed(items: &[Item], id: u32) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                Item {
                    packed: !item.packed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Empty sequence, replacing whatever was there
pub fn clear_items() -> Vec<Item> {
    Vec::new()
}
