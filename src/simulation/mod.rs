//! Batch simulation and statistics.
//!
//! Turns share no state, so a batch is spread over the rayon pool with one
//! deterministic die stream per turn.

pub mod batch;
pub mod stats;

pub use batch::{simulate_batch, sweep_cutoffs, SimulationReport, SweepPoint};
pub use stats::TurnStats;
