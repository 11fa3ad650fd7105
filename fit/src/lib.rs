use std::sync::LazyLock;
use std::time::Instant;

pub mod io;
pub mod units;

/// Moment the process started, used for relative timestamps in the log output.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
