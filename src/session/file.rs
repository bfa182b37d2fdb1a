//! Session file save/load.
//!
//! Sessions are stored as pretty-printed JSON of [`SessionRecord`]. The
//! logical record shape is the contract; the byte layout only needs to
//! round-trip within this tool.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;

use crate::model::{EditError, RoutineSet, SessionLimits};

use super::record::SessionRecord;

/// Errors from reading or writing a session file.
#[derive(Debug, thiserror::Error)]
pub enum SessionFileError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("saved session violates a limit: {0}")]
    Invalid(#[from] EditError),
}

/// Save a routine set to a session file.
pub fn save<P: AsRef<Path>>(path: P, set: &RoutineSet) -> Result<(), SessionFileError> {
    let record = SessionRecord::from_set(set);
    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(writer, &record)?;
    info!("saved {} servos to {}", record.servos.len(), path.as_ref().display());
    Ok(())
}

/// Load a whole routine set from a session file.
pub fn load<P: AsRef<Path>>(path: P, limits: SessionLimits) -> Result<RoutineSet, SessionFileError> {
    let record = read_record(path)?;
    Ok(RoutineSet::from_record(&record, limits)?)
}

/// Read just the record, for merging into an existing set
/// ([`RoutineSet::merge_record`]).
pub fn read_record<P: AsRef<Path>>(path: P) -> Result<SessionRecord, SessionFileError> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let record: SessionRecord = serde_json::from_reader(reader)?;
    info!(
        "read {} servos at {}s from {}",
        record.servos.len(),
        record.seconds,
        path.as_ref().display()
    );
    Ok(record)
}
