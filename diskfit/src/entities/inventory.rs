use crate::entities::Item;
use anyhow::{Result, ensure};
use itertools::Itertools;

/// Ordered universe of [`Item`]s to be packed during a single run.
/// Read-only once created.
#[derive(Clone, Debug)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Result<Inventory> {
        ensure!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "all items should have consecutive IDs starting from 0. IDs: {:?}",
            items.iter().map(|item| item.id).collect_vec()
        );
        ensure!(
            items.iter().map(|item| &item.name).all_unique(),
            "all items should have unique names. Duplicates: {:?}",
            items
                .iter()
                .map(|item| &item.name)
                .duplicates()
                .collect_vec()
        );
        Ok(Inventory { items })
    }

    /// Builds an inventory from `(name, size)` pairs in discovery order,
    /// assigning consecutive ids.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, u64)>) -> Result<Inventory> {
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(id, (name, size))| Item { id, name, size })
            .collect_vec();
        Inventory::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Combined size of all items in the inventory.
    pub fn total_size(&self) -> u64 {
        self.items.iter().map(|item| item.size).sum()
    }
}
