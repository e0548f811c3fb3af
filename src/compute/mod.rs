//! Compute module - Grid, neighbourhoods and rules of the cellular automaton.

mod analytics;
mod coordinate;
mod environment;
mod generation;
pub mod neighbourhood;
mod rules;

pub use analytics::*;
pub use coordinate::*;
pub use environment::*;
pub use generation::*;
pub use neighbourhood::Neighbourhood;
pub use rules::*;
