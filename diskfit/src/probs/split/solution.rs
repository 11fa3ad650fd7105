use crate::entities::Bin;

/// Result of the [`split`](crate::probs::split::split) solver: a set of bins
/// covering every item of the inventory. Final and immutable once produced.
#[derive(Clone, Debug)]
pub struct SplitSolution {
    pub bins: Vec<Bin>,
    /// Capacity every bin was created with
    pub capacity: u64,
}

impl SplitSolution {
    /// Combined unused capacity over all bins.
    pub fn total_waste(&self) -> u64 {
        self.bins.iter().map(|bin| bin.free()).sum()
    }

    pub fn total_size(&self) -> u64 {
        self.bins.iter().map(|bin| bin.used()).sum()
    }

    /// Sum of the item sizes divided by the sum of the bin capacities.
    pub fn density(&self) -> f64 {
        match self.bins.len() {
            0 => 0.0,
            n => self.total_size() as f64 / (n as u64 * self.capacity) as f64,
        }
    }
}
