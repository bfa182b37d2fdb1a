//! Model module - Routine and RoutineSet editing operations.

mod action;
mod config;
mod error;
mod routine;
mod routine_set;
mod selection;

pub use action::*;
pub use config::*;
pub use error::*;
pub use routine::*;
pub use routine_set::*;
pub use selection::*;
