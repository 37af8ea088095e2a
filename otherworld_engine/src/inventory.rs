//! Bounded, ordered item collections with letter-coded slots.
//!
//! The same type backs the player's inventory and the items lying on a map.
//! Entries are addressed by a slot code derived from their position: the first
//! entry is `a`, the second `b`, and so on. Codes are positional, not stable: removing
//! an entry shifts the code of every entry after it down by one letter.

use std::rc::Rc;

use crate::error::GameError;
use crate::item::ItemDefinition;

/// Maximum number of distinct entries an inventory can hold (`a`..=`z`).
pub const MAX_SLOTS: usize = otherworld_data::INVENTORY_SLOTS;

/// Translate a position into its slot code.
pub fn slot_code(index: usize) -> Option<char> {
    if index < MAX_SLOTS {
        u8::try_from(index).ok().map(|i| char::from(b'a' + i))
    } else {
        None
    }
}

/// Translate a slot code back into a position.
///
/// # Errors
/// - `InvalidCode` if `code` is not a single letter `a`..=`z`
pub fn slot_index(code: &str) -> Result<usize, GameError> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => ('a'..='z')
            .position(|letter| letter == c)
            .ok_or_else(|| GameError::InvalidCode(code.to_string())),
        _ => Err(GameError::InvalidCode(code.to_string())),
    }
}

/// A stack of identical items.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub item: Rc<ItemDefinition>,
    pub count: u32,
}

impl InventoryEntry {
    #[allow(clippy::cast_precision_loss)]
    pub fn weight(&self) -> f32 {
        self.item.weight * self.count as f32
    }
}

/// Ordered list of item stacks, unique by item id and capped at `max_slots`.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    name: String,
    max_slots: usize,
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    /// Create an empty inventory with the full number of slots.
    pub fn new(name: &str) -> Self {
        Self::with_capacity(name, MAX_SLOTS)
    }

    /// Create an empty inventory with a smaller capacity (never more than `MAX_SLOTS`).
    pub fn with_capacity(name: &str, max_slots: usize) -> Self {
        Self {
            name: name.to_string(),
            max_slots: max_slots.min(MAX_SLOTS),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no new kind of item can be added. Existing stacks can still grow.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_slots
    }

    /// Add `count` units of an item, stacking onto an existing entry when present.
    /// Adding zero units is a no-op.
    ///
    /// # Errors
    /// - `InventoryFull` if a new entry is needed and every slot is taken; nothing changes
    pub fn add(&mut self, item: &Rc<ItemDefinition>, count: u32) -> Result<(), GameError> {
        if count == 0 {
            return Ok(());
        }
        if let Some(idx) = self.index_of(&item.id) {
            self.entries[idx].count = self.entries[idx].count.saturating_add(count);
        } else if self.entries.len() < self.max_slots {
            self.entries.push(InventoryEntry {
                item: Rc::clone(item),
                count,
            });
        } else {
            return Err(GameError::InventoryFull(self.name.clone()));
        }
        Ok(())
    }

    /// Take `count` units of an item out. An entry whose count reaches zero is deleted.
    ///
    /// # Errors
    /// - `ItemNotFound` if no entry for `item_id` exists
    pub fn remove(&mut self, item_id: &str, count: u32) -> Result<(), GameError> {
        let idx = self
            .index_of(item_id)
            .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))?;
        let entry = &mut self.entries[idx];
        entry.count = entry.count.saturating_sub(count);
        if entry.count == 0 {
            self.entries.remove(idx);
        }
        Ok(())
    }

    /// Look up the entry currently sitting at slot `code`.
    ///
    /// # Errors
    /// - `InvalidCode` if the code is not a letter
    /// - `ItemNotFound` if the code points past the last occupied slot
    pub fn entry_by_code(&self, code: &str) -> Result<&InventoryEntry, GameError> {
        let idx = slot_index(code)?;
        self.entries
            .get(idx)
            .ok_or_else(|| GameError::ItemNotFound(code.to_string()))
    }

    pub fn entry_by_id(&self, item_id: &str) -> Option<&InventoryEntry> {
        self.entries.iter().find(|entry| entry.item.id == item_id)
    }

    pub fn index_of(&self, item_id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.item.id == item_id)
    }

    /// Iterate over entries paired with their current slot codes.
    pub fn iter_coded(&self) -> impl Iterator<Item = (char, &InventoryEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| slot_code(idx).map(|code| (code, entry)))
    }

    /// Combined weight of everything held.
    pub fn total_weight(&self) -> f32 {
        self.entries.iter().map(InventoryEntry::weight).sum()
    }
}
