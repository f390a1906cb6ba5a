pub mod simulation;

pub use simulation::{Outcome, RunResult, SaturationSeries, SimProps, Simulation};
