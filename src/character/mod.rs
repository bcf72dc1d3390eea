//! Character identity, creation, and the mutable character sheet.

pub mod creation;
pub mod sheet;

pub use creation::*;
pub use sheet::*;
