//! Packing Stats
//!
//! Derives the footer summary from the canonical sequence.

use crate::models::Item;

/// Summary line for the stats footer
///
/// The empty case is checked before computing the percentage, so the
/// division is only reached when the list is non-empty.
pub fn summarize(items: &[Item]) -> String {
    if items.is_empty() {
        return "No Items in List..".to_string();
    }

    let total = items.len();
    let packed = items.iter().filter(|item| item.packed).count();
    let percent = (packed as f64 / total as f64 * 100.0).round() as u32;

    if percent == 100 {
        "You are all packed!".to_string()
    } else {
        format!(
            "You have {} items on your list. {} were already packed ({}%)",
            total, packed, percent
        )
    }
}
