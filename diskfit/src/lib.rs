//! `diskfit` partitions a collection of sized items (typically files) over
//! fixed-capacity bins (typically removable disks).
//!
//! Two independent solvers share one data model:
//! - [`probs::split`]: a best-fit decreasing heuristic that covers every item
//!   with as few bins as it can manage.
//! - [`probs::exact`]: an exhaustive backtracking search for a subset of items
//!   filling a single bin exactly, with incremental best-result tracking and
//!   cooperative cancellation.
//!
//! Discovering items, resolving human-entered capacities and presenting
//! results are the caller's concern.

/// Entities of the shared data model: [`entities::Item`], [`entities::Inventory`] and [`entities::Bin`].
pub mod entities;

/// Error taxonomy of the packing core.
pub mod errors;

/// The two packing problem variants.
pub mod probs;

/// Set of functions used throughout to assure the correctness of the library.
pub mod util;
