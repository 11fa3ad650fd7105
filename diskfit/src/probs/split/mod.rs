mod solution;
mod solver;

#[doc(inline)]
pub use solution::SplitSolution;
#[doc(inline)]
pub use solver::split;
