//! Servo Studio - Multi-servo motion routine designer core.
//!
//! This crate provides the data model and algorithms behind a visual
//! servo-routine editor: per-servo keyframe sequences sampled at two
//! keyframes per second, the editing operations a point-dragging UI
//! needs, linear expansion of keyframes into a dense firmware playback
//! sequence, and a session/export codec.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `model`: `Routine` and `RoutineSet` editing operations and invariants
//! - `interp`: pure keyframe-to-playback-sequence expansion
//! - `session`: session file round-trip and firmware export payload
//!
//! The GUI layer (windows, chart rendering, dialogs) is an external
//! collaborator: it owns a single `RoutineSet` and mutates it only through
//! the operations exposed here.
//!
//! # Example
//!
//! ```rust
//! use servo_studio::{
//!     model::{RoutineSet, SessionLimits},
//!     session::render_export_payload,
//! };
//!
//! // Two servos, ten seconds of routine each
//! let mut set = RoutineSet::generate(10, 2, SessionLimits::default()).unwrap();
//!
//! set.assign_pin("Servo1", 9).unwrap();
//! set.assign_pin("Servo2", 10).unwrap();
//!
//! // Drag keyframe 4 of the first servo up to 120 degrees
//! set.routine_mut("Servo1").unwrap().set_value_at(4, 120.0).unwrap();
//!
//! // Render the expanded sequences for the firmware template
//! let payload = render_export_payload(&set).unwrap();
//! assert_eq!(payload.pin_nums, vec![9, 10]);
//! ```

pub mod interp;
pub mod model;
pub mod session;

// Re-export commonly used types
pub use model::{EditError, Routine, RoutineSet, SessionLimits, Span};
pub use session::{ExportPayload, SessionRecord};
