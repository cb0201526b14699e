//! Command implementations

pub mod classic;
pub mod simulate;

pub use classic::{Console, run_classic};
pub use simulate::{EntryResult, SimulationConfig, SimulationResult, run_simulation};
