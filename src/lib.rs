#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod arrangement;
mod errors;
pub mod plot;
mod simulator;
mod sweep;

pub use arrangement::Arrangement;
pub use errors::PlotError;
pub use simulator::{Simulator, SimulatorConfig};
pub use sweep::{Sweep, DEFAULT_MAX_DISPLACEMENT, DEFAULT_STEPS};
