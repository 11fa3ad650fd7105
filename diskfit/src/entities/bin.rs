use crate::entities::Item;
use crate::errors::PackError;

/// Fixed-capacity container in which items are collected.
///
/// Fields are private: [`Bin::add`] is the only mutation entry point, which
/// guarantees `free + sum(items) == capacity` at all times.
#[derive(Clone, Debug)]
pub struct Bin {
    capacity: u64,
    free: u64,
    items: Vec<Item>,
}

impl Bin {
    /// Creates an empty bin. A non-positive capacity is a configuration error
    /// to be caught before any packing begins.
    pub fn new(capacity: u64) -> Bin {
        assert!(capacity > 0, "bin capacity must be positive");
        Bin {
            capacity,
            free: capacity,
            items: vec![],
        }
    }

    /// Places `item` in the bin, or fails with [`PackError::CapacityExceeded`]
    /// if it does not fit in the remaining free space.
    /// The bin is left untouched on failure.
    pub fn add(&mut self, item: Item) -> Result<(), PackError> {
        if item.size > self.free {
            return Err(PackError::CapacityExceeded {
                name: item.name.clone(),
                size: item.size,
                free: self.free,
            });
        }
        self.free -= item.size;
        self.items.push(item);
        Ok(())
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Unused capacity (waste, once the bin is final).
    pub fn free(&self) -> u64 {
        self.free
    }

    pub fn used(&self) -> u64 {
        self.capacity - self.free
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn zero_capacity_is_a_config_error() {
        let _ = Bin::new(0);
    }

    #[test]
    fn add_maintains_free_space() {
        let mut bin = Bin::new(100);
        bin.add(Item::new(0, "a", 60)).unwrap();
        assert_eq!(bin.free(), 40);
        assert_eq!(bin.used(), 60);
        assert_eq!(bin.items().len(), 1);
    }

    #[test]
    fn overflowing_add_leaves_bin_untouched() {
        let mut bin = Bin::new(100);
        bin.add(Item::new(0, "a", 60)).unwrap();

        let err = bin.add(Item::new(1, "b", 50)).unwrap_err();
        assert_eq!(
            err,
            PackError::CapacityExceeded {
                name: "b".to_string(),
                size: 50,
                free: 40
            }
        );
        assert_eq!(bin.free(), 40);
        assert_eq!(bin.items().len(), 1);

        // an exact fill is still accepted afterwards
        bin.add(Item::new(2, "c", 40)).unwrap();
        assert_eq!(bin.free(), 0);
    }

    #[test]
    fn zero_sized_items_always_fit() {
        let mut bin = Bin::new(1);
        bin.add(Item::new(0, "a", 1)).unwrap();
        bin.add(Item::new(1, "b", 0)).unwrap();
        assert_eq!(bin.free(), 0);
        assert_eq!(bin.items().len(), 2);
    }
}
