//! Flat serializable form of a routine set.

use serde::{Deserialize, Serialize};

use crate::model::{OutputMode, RoutineSet};

/// One servo's saved state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServoRecord {
    pub name: String,
    pub pin: u32,
    /// Keyframe angles, one per half second.
    pub keyframes: Vec<i32>,
    pub upper_limit: i32,
    pub lower_limit: i32,
}

/// Everything a session file stores.
///
/// Only keyframes are persisted; the expanded playback sequences are
/// recomputed on demand and never stored. Round-trips structurally:
/// `RoutineSet::from_record(&SessionRecord::from_set(&set), limits)`
/// reproduces every name, pin, keyframe, and limit pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Shared routine length in seconds.
    pub seconds: u32,
    pub servos: Vec<ServoRecord>,
    pub button_pin: Option<u32>,
    pub output_mode: OutputMode,
}

impl SessionRecord {
    /// Capture a routine set as a flat record.
    pub fn from_set(set: &RoutineSet) -> Self {
        Self {
            seconds: set.length_seconds(),
            servos: set
                .routines()
                .iter()
                .map(|routine| ServoRecord {
                    name: routine.name().to_string(),
                    pin: routine.pin(),
                    keyframes: routine.keyframes().to_vec(),
                    upper_limit: routine.upper_limit(),
                    lower_limit: routine.lower_limit(),
                })
                .collect(),
            button_pin: set.button_pin(),
            output_mode: set.output_mode(),
        }
    }
}
