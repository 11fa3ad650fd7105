use std::time::Instant;

use crate::entities::{Bin, Inventory};
use crate::errors::PackError;
use crate::probs::split::SplitSolution;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info};

/// Covers every item of `inventory` with bins of the given `capacity` using a
/// best-fit decreasing heuristic: largest items are placed first, each in the
/// open bin with the least free space that can still hold it. A new bin is
/// only opened when no open bin qualifies.
///
/// Deterministic: items of equal size are processed in reverse discovery
/// order, and equal-free bins are broken toward the earliest-opened one.
///
/// Fails with [`PackError::ItemTooLarge`] if any single item exceeds
/// `capacity`; checked before any bin is opened, since no packing could ever
/// succeed. Once the pre-flight check passes the heuristic always succeeds.
pub fn split(inventory: &Inventory, capacity: u64) -> Result<SplitSolution, PackError> {
    assert!(capacity > 0, "bin capacity must be positive");

    if let Some(item) = inventory.iter().find(|item| item.size > capacity) {
        return Err(PackError::ItemTooLarge {
            name: item.name.clone(),
            size: item.size,
            capacity,
        });
    }

    let start = Instant::now();

    // stable ascending sort, consumed from the back so the largest remaining
    // item is always handled first
    let mut pending = inventory.iter().collect_vec();
    pending.sort_by_key(|item| item.size);

    let mut bins: Vec<Bin> = vec![];
    while let Some(item) = pending.pop() {
        let bin_idx = match tightest_fit(&bins, item.size) {
            Some(idx) => idx,
            None => {
                bins.push(Bin::new(capacity));
                bins.len() - 1
            }
        };
        debug!(
            "[SPLIT] placing {} ({}B) in bin {} ({}B free)",
            item.name,
            item.size,
            bin_idx,
            bins[bin_idx].free()
        );
        bins[bin_idx].add(item.clone())?;
    }

    let solution = SplitSolution { bins, capacity };
    debug_assert!(assertions::split_solution_covers_inventory(
        &solution, inventory
    ));
    debug_assert!(assertions::split_solution_bins_consistent(&solution));

    info!(
        "[SPLIT] packed {} items into {} bins in {:.3}ms (density {:.3}%)",
        inventory.len(),
        solution.bins.len(),
        start.elapsed().as_secs_f64() * 1000.0,
        solution.density() * 100.0
    );

    Ok(solution)
}

/// Index of the open bin with the smallest free space that still holds `size`.
/// Ties go to the earliest-opened bin.
fn tightest_fit(bins: &[Bin], size: u64) -> Option<usize> {
    bins.iter()
        .enumerate()
        .filter(|(_, bin)| size <= bin.free())
        .min_by_key(|(_, bin)| bin.free())
        .map(|(idx, _)| idx)
}
