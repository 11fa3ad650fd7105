use diskfit::entities::{Bin, Item};
use diskfit::probs::exact::{ExactSolution, Outcome};
use diskfit::probs::split::SplitSolution;
use serde::{Deserialize, Serialize};

/// External representation of an [`Item`].
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtItem {
    pub name: String,
    pub size: u64,
}

/// External representation of a [`Bin`] and its final contents.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtBin {
    pub items: Vec<ExtItem>,
    /// Wasted (unused) capacity
    pub free: u64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SplitOutput {
    pub capacity: u64,
    pub bins: Vec<ExtBin>,
    pub total_waste: u64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ExactOutput {
    pub capacity: u64,
    pub outcome: ExtOutcome,
    pub selection: Vec<ExtItem>,
    pub waste: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ExtOutcome {
    Exact,
    BestEffort,
    Interrupted,
}

impl From<&Item> for ExtItem {
    fn from(item: &Item) -> Self {
        ExtItem {
            name: item.name.clone(),
            size: item.size,
        }
    }
}

impl From<&Bin> for ExtBin {
    fn from(bin: &Bin) -> Self {
        ExtBin {
            items: bin.items().iter().map(ExtItem::from).collect(),
            free: bin.free(),
        }
    }
}

impl From<&SplitSolution> for SplitOutput {
    fn from(sol: &SplitSolution) -> Self {
        SplitOutput {
            capacity: sol.capacity,
            bins: sol.bins.iter().map(ExtBin::from).collect(),
            total_waste: sol.total_waste(),
        }
    }
}

impl From<&ExactSolution> for ExactOutput {
    fn from(sol: &ExactSolution) -> Self {
        ExactOutput {
            capacity: sol.capacity,
            outcome: match sol.outcome {
                Outcome::Exact => ExtOutcome::Exact,
                Outcome::BestEffort => ExtOutcome::BestEffort,
                Outcome::Interrupted => ExtOutcome::Interrupted,
            },
            selection: sol.selection.iter().map(ExtItem::from).collect(),
            waste: sol.waste(),
        }
    }
}
