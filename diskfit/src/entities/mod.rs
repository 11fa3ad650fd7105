mod bin;
mod inventory;
mod item;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use inventory::Inventory;
#[doc(inline)]
pub use item::Item;
