mod solution;
mod solver;

#[doc(inline)]
pub use solution::ExactSolution;
#[doc(inline)]
pub use solution::Outcome;
#[doc(inline)]
pub use solver::CancellationToken;
#[doc(inline)]
pub use solver::exact_fit;
