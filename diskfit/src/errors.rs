use thiserror::Error;

/// Failure modes of the packing core.
///
/// A cancelled exact-fit search is not represented here: it still yields a
/// usable solution and is reported through
/// [`Outcome::Interrupted`](crate::probs::exact::Outcome::Interrupted).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// An item can never be packed because it exceeds the bin capacity on its own.
    /// Detected before any bin is opened.
    #[error("cannot fit {name} ({size}B) into a bin of {capacity}B")]
    ItemTooLarge {
        name: String,
        size: u64,
        capacity: u64,
    },

    /// An item was pushed into a bin with insufficient free space.
    /// A contract violation if the pre-flight checks are honored.
    #[error("cannot fit {name} ({size}B) into {free}B of free space")]
    CapacityExceeded { name: String, size: u64, free: u64 },

    /// The exact-fit target is moot: the entire inventory already fits.
    #[error("all items already fit ({total}B <= {capacity}B)")]
    AlreadyFits { total: u64, capacity: u64 },
}
