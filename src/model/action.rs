//! Per-tab settings actions.

use super::routine::Position;

/// Whether a resize grows or shrinks every routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Remove,
}

/// The outcome of a servo tab's settings dialog.
///
/// The dialog commits exactly one of these; the controller consumes it
/// with a single `match` in [`RoutineSet::apply`]. An abandoned dialog
/// simply produces no action, leaving the set untouched.
///
/// [`RoutineSet::apply`]: super::RoutineSet::apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    /// Rename the servo's routine (and its tab).
    Rename(String),
    /// Replace the servo's angle limit pair.
    AdjustLimits { upper: i32, lower: i32 },
    /// Add seconds to every routine at one end.
    AddTime { seconds: u32, position: Position },
    /// Remove seconds from every routine at one end.
    DeleteTime { seconds: u32, position: Position },
    /// Remove this servo from the set.
    DeleteServo,
}
