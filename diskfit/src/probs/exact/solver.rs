use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::entities::Inventory;
use crate::errors::PackError;
use crate::probs::exact::{ExactSolution, Outcome};
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info};
use thousands::Separable;

/// Cooperative cancellation flag for [`exact_fit`].
///
/// The search polls it once per step, at the top of the loop and never
/// mid-mutation, so cancelling always yields the last completed snapshot.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Searches `inventory` for a subset of items whose sizes sum exactly to
/// `capacity`, by depth-first inclusion/exclusion of each item relative to the
/// running selection. If no exact fit exists, the lowest-waste subset
/// encountered during the exhaustive search is returned instead.
///
/// The traversal is iterative over an explicit frame stack, so depth is
/// bounded only by the inventory size, not the call stack. Whenever the
/// running selection beats the best waste seen so far it is copied into an
/// independent snapshot; cancelling through `token` unwinds immediately and
/// returns that snapshot ([`Outcome::Interrupted`]).
///
/// Fails with [`PackError::AlreadyFits`] if the whole inventory fits within
/// `capacity`: there is nothing to select.
pub fn exact_fit(
    inventory: &Inventory,
    capacity: u64,
    token: &CancellationToken,
) -> Result<ExactSolution, PackError> {
    assert!(capacity > 0, "bin capacity must be positive");

    let total = inventory.total_size();
    if total <= capacity {
        return Err(PackError::AlreadyFits { total, capacity });
    }

    let start = Instant::now();
    let items = inventory.items();
    let n = items.len();

    // live selection
    let mut selected = vec![false; n];
    let mut chosen: Vec<usize> = vec![];
    let mut cursize: u64 = 0;

    // independent snapshot of the best selection seen so far; never aliases
    // the live selection, which keeps mutating after a snapshot is taken
    let mut best: Vec<usize> = vec![];
    let mut best_waste: u64 = capacity;

    // one frame per level of the inclusion/exclusion tree, holding the next
    // inventory index to consider at that level
    let mut frames: Vec<usize> = vec![0];
    let mut steps: u64 = 0;

    let outcome = loop {
        steps += 1;
        if token.is_cancelled() {
            break Outcome::Interrupted;
        }
        let Some(cursor) = frames.last_mut() else {
            // every branch exhausted without an exact fit
            break Outcome::BestEffort;
        };

        // advance to the next candidate: not yet selected, fits the remainder
        let mut idx = *cursor;
        while idx < n && (selected[idx] || items[idx].size > capacity - cursize) {
            idx += 1;
        }

        match idx < n {
            true => {
                // tentatively include the candidate and descend
                *cursor = idx + 1;
                selected[idx] = true;
                chosen.push(idx);
                cursize += items[idx].size;

                let waste = capacity - cursize;
                if waste < best_waste && cursize != capacity {
                    best_waste = waste;
                    best.clone_from(&chosen);
                    debug!(
                        "[EXACT] improved fit: {}B selected, {}B wasted",
                        cursize.separate_with_commas(),
                        waste.separate_with_commas()
                    );
                }
                if cursize == capacity {
                    break Outcome::Exact;
                }
                frames.push(0);
            }
            false => {
                // branch exhausted: drop the frame and undo the inclusion
                // that spawned it
                frames.pop();
                if let Some(idx) = chosen.pop() {
                    selected[idx] = false;
                    cursize -= items[idx].size;
                }
            }
        }
    };

    let selection = match outcome {
        Outcome::Exact => &chosen,
        Outcome::BestEffort | Outcome::Interrupted => &best,
    };
    let solution = ExactSolution {
        selection: selection.iter().map(|&idx| items[idx].clone()).collect_vec(),
        capacity,
        outcome,
    };
    debug_assert!(assertions::exact_solution_within_capacity(&solution));

    info!(
        "[EXACT] search finished in {:.3}ms ({} steps): {:?}, {}B wasted",
        start.elapsed().as_secs_f64() * 1000.0,
        steps.separate_with_commas(),
        solution.outcome,
        solution.waste().separate_with_commas()
    );

    Ok(solution)
}
