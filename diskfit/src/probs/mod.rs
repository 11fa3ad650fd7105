/// Exact-fit variant: fill a single bin exactly (or as closely as possible).
pub mod exact;

/// Split variant: cover every item with as few bins as possible.
pub mod split;
