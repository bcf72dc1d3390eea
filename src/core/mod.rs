//! Core simulation: action rules, end-of-day settlement, and the day-cycle
//! controller.

pub mod actions;
pub mod constants;
pub mod day_cycle;
pub mod settlement;

pub use actions::*;
pub use day_cycle::*;
pub use settlement::*;
