//! Frontend Models
//!
//! Data structures for the packing list.

use serde::{Deserialize, Serialize};

/// A single packing-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// New unpacked item with the given id
    pub fn new(id: u32, description: String, quantity: u32) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }

    /// Build an item from raw form input
    ///
    /// Trims the description and returns `None` for blank input without
    /// minting an id; `mint_id` is only called once the input is accepted.
    pub fn from_input(
        description: &str,
        quantity: u32,
        mint_id: impl FnOnce() -> u32,
    ) -> Option<Self> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        Some(Self::new(mint_id(), description.to_string(), quantity))
    }
}

/// Display ordering for the packing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Insertion order (the canonical order)
    #[default]
    Input,
    /// Ascending by description, case-insensitive
    Description,
    /// Unpacked items first
    Packed,
}

impl SortMode {
    /// (mode, select value, select label) for the sort selector
    pub const ALL: &'static [(SortMode, &'static str, &'static str)] = &[
        (SortMode::Input, "input", "Sort by input order"),
        (SortMode::Description, "description", "Sort by description"),
        (SortMode::Packed, "packed", "Sort by packed"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Input => "input",
            SortMode::Description => "description",
            SortMode::Packed => "packed",
        }
    }

    /// Parse a select-option value; unknown values fall back to input order
    pub fn parse(value: &str) -> Self {
        match value {
            "description" => SortMode::Description,
            "packed" => SortMode::Packed,
            _ => SortMode::Input,
        }
    }
}
