use crate::entities::Item;

/// How an exact-fit search run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The selection fills the bin exactly (zero waste).
    Exact,
    /// The search space was exhausted without an exact fit;
    /// the selection is the lowest-waste subset encountered.
    BestEffort,
    /// The search was cancelled; the selection is the lowest-waste subset
    /// encountered up to that point.
    Interrupted,
}

/// Result of the [`exact_fit`](crate::probs::exact::exact_fit) search:
/// a subset of the inventory destined for a single bin.
///
/// Always usable, whatever the [`Outcome`] — in the pathological case where
/// no item ever fit, the selection is simply empty.
#[derive(Clone, Debug)]
pub struct ExactSolution {
    /// Chosen items, in the order the search committed to them
    pub selection: Vec<Item>,
    /// Capacity of the target bin
    pub capacity: u64,
    pub outcome: Outcome,
}

impl ExactSolution {
    pub fn total_size(&self) -> u64 {
        self.selection.iter().map(|item| item.size).sum()
    }

    /// Capacity left unused by the selection.
    pub fn waste(&self) -> u64 {
        self.capacity - self.total_size()
    }
}
