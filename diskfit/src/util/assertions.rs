use crate::entities::Inventory;
use crate::probs::exact::ExactSolution;
use crate::probs::split::SplitSolution;
use itertools::Itertools;

/// Every item of the inventory appears exactly once across the bins.
pub fn split_solution_covers_inventory(sol: &SplitSolution, inventory: &Inventory) -> bool {
    let placed_ids = sol
        .bins
        .iter()
        .flat_map(|bin| bin.items())
        .map(|item| item.id)
        .sorted()
        .collect_vec();
    placed_ids == (0..inventory.len()).collect_vec()
}

/// Every bin carries the solution's capacity and wastes exactly what its
/// contents leave unused.
pub fn split_solution_bins_consistent(sol: &SplitSolution) -> bool {
    sol.bins.iter().all(|bin| {
        let content_size = bin.items().iter().map(|item| item.size).sum::<u64>();
        bin.capacity() == sol.capacity
            && content_size <= bin.capacity()
            && bin.free() == bin.capacity() - content_size
    })
}

/// The selection does not overshoot the target capacity and contains no
/// duplicate items.
pub fn exact_solution_within_capacity(sol: &ExactSolution) -> bool {
    sol.total_size() <= sol.capacity && sol.selection.iter().map(|item| item.id).all_unique()
}
