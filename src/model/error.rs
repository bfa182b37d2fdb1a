//! Error types for routine editing operations.

/// Errors returned by `Routine` and `RoutineSet` edit operations.
///
/// Every variant is a local, recoverable condition: the operation that
/// reports it has left the set completely unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("limit of {0} servos reached")]
    ServoLimitExceeded(u32),
    #[error("total of all routines must be less than {0} seconds")]
    TimeLimitExceeded(u32),
    #[error("servo name '{0}' already in use")]
    DuplicateName(String),
    #[error("pin {0} already assigned to another servo")]
    DuplicatePin(u32),
    #[error("routine length must be at least 1 second")]
    InvalidLength,
    #[error("removing too many seconds")]
    InvalidRemoval,
    #[error("keyframe index {index} out of range (routine has {len} keyframes)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("selection must be a contiguous range of keyframes")]
    NonContiguousSelection,
    #[error("cannot delete the last remaining servo")]
    MinimumServoCount,
    #[error("no servo named '{0}'")]
    UnknownServo(String),
}

/// A single problem found by pre-export validation.
///
/// Violations are collected into a list rather than returned one at a
/// time so the UI can report every problem at once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("repeated servo name '{0}'")]
    DuplicateName(String),
    #[error("repeated servo pin {0}")]
    DuplicatePin(u32),
    #[error("no servos to export")]
    EmptySet,
}
