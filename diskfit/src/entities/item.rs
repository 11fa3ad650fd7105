/// Item to be packed. Immutable once discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Position of the item in its [`Inventory`](crate::entities::Inventory)
    pub id: usize,
    /// Identifier of the item, unique within its inventory (for files: the path)
    pub name: String,
    /// Size of the item in bytes
    pub size: u64,
}

impl Item {
    pub fn new(id: usize, name: impl Into<String>, size: u64) -> Item {
        Item {
            id,
            name: name.into(),
            size,
        }
    }
}
