//! The full collection of servo routines plus session-wide settings.

use std::collections::HashSet;

use log::{debug, info};

use crate::session::SessionRecord;

use super::action::{Direction, TabAction};
use super::config::{
    DEFAULT_LOWER_LIMIT, DEFAULT_SAMPLE_INTERVAL_MS, DEFAULT_UPPER_LIMIT, MIN_LIMIT_GAP,
    OutputMode, SessionLimits,
};
use super::error::{EditError, Violation};
use super::routine::{Position, Routine};

/// Longest allowed servo name, in characters.
const MAX_NAME_LEN: usize = 10;

/// Strip spaces and truncate to the allowed name length.
fn normalize_name(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ').take(MAX_NAME_LEN).collect()
}

/// Whether `seconds x servos` exceeds the total-time ceiling. An
/// overflowing product always exceeds it.
fn exceeds_budget(seconds: u32, servos: u32, max_total_seconds: u32) -> bool {
    seconds
        .checked_mul(servos)
        .is_none_or(|total| total > max_total_seconds)
}

/// The ordered collection of all servo routines plus session-wide
/// settings: ceilings, the optional start-button pin, and the output mode.
///
/// Insertion order is tab order is display order. The set owns every
/// invariant that spans routines: unique names, all routines sharing one
/// length, and the `seconds x servo-count` ceiling that models the
/// controller's memory budget. Multi-routine operations are atomic; on
/// failure nothing has changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineSet {
    routines: Vec<Routine>,
    limits: SessionLimits,
    button_pin: Option<u32>,
    output_mode: OutputMode,
    sample_interval_ms: u32,
}

impl RoutineSet {
    /// An empty set. Populate with [`generate`](Self::generate) or
    /// [`merge_record`](Self::merge_record).
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            routines: Vec::new(),
            limits,
            button_pin: None,
            output_mode: OutputMode::default(),
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
        }
    }

    /// Build the initial set: `servos` routines named `Servo1..ServoN`,
    /// each `seconds` long at the default angle.
    ///
    /// Out-of-range requests are pulled into `[1, max]` before the total
    /// time ceiling is checked, matching the settings form's behavior.
    pub fn generate(seconds: u32, servos: u32, limits: SessionLimits) -> Result<Self, EditError> {
        let seconds = seconds.clamp(1, limits.max_total_seconds);
        let servos = servos.clamp(1, limits.max_servos);

        if exceeds_budget(seconds, servos, limits.max_total_seconds) {
            return Err(EditError::TimeLimitExceeded(limits.max_total_seconds));
        }

        let mut set = Self::new(limits);
        for i in 1..=servos {
            set.routines.push(Routine::new(
                format!("Servo{i}"),
                0,
                seconds,
                limits.default_angle,
                DEFAULT_LOWER_LIMIT,
                DEFAULT_UPPER_LIMIT,
            )?);
        }
        info!("generated {servos} routines of {seconds}s");
        Ok(set)
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    /// Number of servos in the set.
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    pub fn limits(&self) -> SessionLimits {
        self.limits
    }

    pub fn button_pin(&self) -> Option<u32> {
        self.button_pin
    }

    pub fn set_button_pin(&mut self, pin: Option<u32>) {
        self.button_pin = pin;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Delay between expanded playback values, in milliseconds.
    pub fn sample_interval_ms(&self) -> u32 {
        self.sample_interval_ms
    }

    pub fn set_sample_interval_ms(&mut self, millis: u32) {
        self.sample_interval_ms = millis;
    }

    /// Shared routine length in seconds (0 for an empty set).
    pub fn length_seconds(&self) -> u32 {
        self.routines.first().map(Routine::seconds).unwrap_or(0)
    }

    fn index_of(&self, name: &str) -> Result<usize, EditError> {
        self.routines
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| EditError::UnknownServo(name.to_string()))
    }

    pub fn routine(&self, name: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.name() == name)
    }

    /// Mutable access to one routine for point-level edits
    /// ([`Routine::set_value_at`], [`Routine::drag_span`]).
    pub fn routine_mut(&mut self, name: &str) -> Result<&mut Routine, EditError> {
        let idx = self.index_of(name)?;
        Ok(&mut self.routines[idx])
    }

    /// Append a fresh routine matching the current shared length.
    pub fn add_routine(&mut self, name: &str, pin: u32) -> Result<(), EditError> {
        if self.routines.len() as u32 >= self.limits.max_servos {
            return Err(EditError::ServoLimitExceeded(self.limits.max_servos));
        }
        let seconds = self.length_seconds();
        if exceeds_budget(
            seconds,
            self.routines.len() as u32 + 1,
            self.limits.max_total_seconds,
        ) {
            return Err(EditError::TimeLimitExceeded(self.limits.max_total_seconds));
        }

        let name = normalize_name(name);
        if self.routines.iter().any(|r| r.name() == name) {
            return Err(EditError::DuplicateName(name));
        }

        self.routines.push(Routine::new(
            name,
            pin,
            seconds,
            self.limits.default_angle,
            DEFAULT_LOWER_LIMIT,
            DEFAULT_UPPER_LIMIT,
        )?);
        Ok(())
    }

    /// Remove a servo. The set never drops below one routine.
    pub fn remove_routine(&mut self, name: &str) -> Result<(), EditError> {
        let idx = self.index_of(name)?;
        if self.routines.len() <= 1 {
            return Err(EditError::MinimumServoCount);
        }
        self.routines.remove(idx);
        Ok(())
    }

    /// Rename a servo. The new name is space-stripped and truncated; an
    /// empty result leaves the routine unchanged, like cancelling the
    /// rename dialog.
    pub fn rename_routine(&mut self, old_name: &str, new_name: &str) -> Result<(), EditError> {
        let idx = self.index_of(old_name)?;
        let new_name = normalize_name(new_name);
        if new_name.is_empty() {
            return Ok(());
        }
        if self
            .routines
            .iter()
            .enumerate()
            .any(|(i, r)| i != idx && r.name() == new_name)
        {
            return Err(EditError::DuplicateName(new_name));
        }
        self.routines[idx].set_name(new_name);
        Ok(())
    }

    /// Assign a GPIO pin or I2C channel to a servo.
    pub fn assign_pin(&mut self, name: &str, pin: u32) -> Result<(), EditError> {
        let idx = self.index_of(name)?;
        if self
            .routines
            .iter()
            .enumerate()
            .any(|(i, r)| i != idx && r.pin() == pin)
        {
            return Err(EditError::DuplicatePin(pin));
        }
        self.routines[idx].set_pin(pin);
        Ok(())
    }

    /// Replace one servo's angle limit pair, re-clamping its keyframes.
    pub fn adjust_limits(&mut self, name: &str, upper: i32, lower: i32) -> Result<(), EditError> {
        let max_angle = self.limits.max_angle;
        let idx = self.index_of(name)?;
        self.routines[idx].set_limits(upper, lower, max_angle);
        Ok(())
    }

    /// Erase a contiguous block of one servo's keyframes, backfilling the
    /// same count of default-angle keyframes at the tail so the routine
    /// duration is unchanged.
    pub fn delete_range(&mut self, name: &str, indices: &[usize]) -> Result<(), EditError> {
        let fill = self.limits.default_angle;
        let idx = self.index_of(name)?;
        self.routines[idx].delete_range(indices, fill)
    }

    /// Grow or shrink every routine by `seconds` at one end, keeping all
    /// routines at one shared length.
    ///
    /// Ceilings are checked before anything is touched, so on failure
    /// every routine's length is unchanged.
    pub fn resize_all(
        &mut self,
        seconds: u32,
        position: Position,
        direction: Direction,
    ) -> Result<(), EditError> {
        if seconds == 0 || self.routines.is_empty() {
            return Ok(());
        }
        let count = seconds as usize * 2;

        match direction {
            Direction::Add => {
                let over_budget = self
                    .length_seconds()
                    .checked_add(seconds)
                    .is_none_or(|new_seconds| {
                        exceeds_budget(
                            new_seconds,
                            self.routines.len() as u32,
                            self.limits.max_total_seconds,
                        )
                    });
                if over_budget {
                    return Err(EditError::TimeLimitExceeded(self.limits.max_total_seconds));
                }
                let fill = self.limits.default_angle;
                for routine in self.routines.iter_mut() {
                    routine.insert_keyframes(position, count, fill);
                }
            }
            Direction::Remove => {
                // All routines share a length; one guard covers them all.
                if count >= self.routines[0].len() - 1 {
                    return Err(EditError::InvalidRemoval);
                }
                for routine in self.routines.iter_mut() {
                    routine.remove_keyframes(position, count)?;
                }
            }
        }
        debug!(
            "resized {} routines to {}s",
            self.routines.len(),
            self.length_seconds()
        );
        Ok(())
    }

    /// Dispatch one servo tab's settings-dialog outcome.
    pub fn apply(&mut self, name: &str, action: TabAction) -> Result<(), EditError> {
        match action {
            TabAction::Rename(new_name) => self.rename_routine(name, &new_name),
            TabAction::AdjustLimits { upper, lower } => self.adjust_limits(name, upper, lower),
            TabAction::AddTime { seconds, position } => {
                self.resize_all(seconds, position, Direction::Add)
            }
            TabAction::DeleteTime { seconds, position } => {
                self.resize_all(seconds, position, Direction::Remove)
            }
            TabAction::DeleteServo => self.remove_routine(name),
        }
    }

    /// Rebuild routines from a saved record, sanitizing each limit pair
    /// and re-clamping keyframes.
    fn build_routines(
        record: &SessionRecord,
        limits: SessionLimits,
    ) -> Result<Vec<Routine>, EditError> {
        let expected_len = record.seconds as usize * 2 + 1;
        let mut routines = Vec::with_capacity(record.servos.len());
        for servo in &record.servos {
            if servo.keyframes.len() != expected_len {
                return Err(EditError::InvalidLength);
            }
            let upper = servo.upper_limit.clamp(MIN_LIMIT_GAP, limits.max_angle);
            let lower = servo.lower_limit.clamp(0, upper - MIN_LIMIT_GAP);
            routines.push(Routine::from_parts(
                servo.name.clone(),
                servo.pin,
                servo.keyframes.clone(),
                lower,
                upper,
            )?);
        }
        Ok(routines)
    }

    /// Reconstruct a whole set from a saved session record.
    pub fn from_record(record: &SessionRecord, limits: SessionLimits) -> Result<Self, EditError> {
        if record.servos.is_empty() {
            return Err(EditError::InvalidLength);
        }
        if record.servos.len() as u32 > limits.max_servos {
            return Err(EditError::ServoLimitExceeded(limits.max_servos));
        }
        if exceeds_budget(
            record.seconds,
            record.servos.len() as u32,
            limits.max_total_seconds,
        ) {
            return Err(EditError::TimeLimitExceeded(limits.max_total_seconds));
        }

        let routines = Self::build_routines(record, limits)?;
        info!(
            "loaded {} routines of {}s from session record",
            routines.len(),
            record.seconds
        );
        Ok(Self {
            routines,
            limits,
            button_pin: record.button_pin,
            output_mode: record.output_mode,
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
        })
    }

    /// Import saved servos into an already-populated set.
    ///
    /// Mismatched lengths are reconciled by padding the shorter side at
    /// the tail with the default angle; the combined set is then checked
    /// against both ceilings. Either every routine is updated or, on
    /// failure, none is.
    pub fn merge_record(&mut self, record: &SessionRecord) -> Result<(), EditError> {
        if record.servos.is_empty() {
            return Ok(());
        }

        let combined = self.routines.len() + record.servos.len();
        if combined as u32 > self.limits.max_servos {
            return Err(EditError::ServoLimitExceeded(self.limits.max_servos));
        }

        let current_seconds = self.length_seconds();
        let target_seconds = current_seconds.max(record.seconds);
        if exceeds_budget(target_seconds, combined as u32, self.limits.max_total_seconds) {
            return Err(EditError::TimeLimitExceeded(self.limits.max_total_seconds));
        }

        let mut incoming = Self::build_routines(record, self.limits)?;

        // All checks passed; from here on the merge cannot fail.
        let fill = self.limits.default_angle;
        let pad_incoming = (target_seconds - record.seconds) as usize * 2;
        for routine in incoming.iter_mut() {
            routine.insert_keyframes(Position::End, pad_incoming, fill);
        }
        let pad_current = (target_seconds - current_seconds) as usize * 2;
        for routine in self.routines.iter_mut() {
            routine.insert_keyframes(Position::End, pad_current, fill);
        }

        info!(
            "imported {} routines; set now {} servos at {}s",
            incoming.len(),
            combined,
            target_seconds
        );
        self.routines.append(&mut incoming);
        Ok(())
    }

    /// Check everything the export templates assume, returning the full
    /// list of problems instead of stopping at the first.
    pub fn validate_for_export(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.routines.is_empty() {
            violations.push(Violation::EmptySet);
            return violations;
        }

        let mut seen_names: HashSet<&str> = HashSet::new();
        let mut seen_pins: HashSet<u32> = HashSet::new();
        let mut reported_names: HashSet<&str> = HashSet::new();
        let mut reported_pins: HashSet<u32> = HashSet::new();

        for routine in &self.routines {
            if !seen_names.insert(routine.name()) && reported_names.insert(routine.name()) {
                violations.push(Violation::DuplicateName(routine.name().to_string()));
            }
            if !seen_pins.insert(routine.pin()) && reported_pins.insert(routine.pin()) {
                violations.push(Violation::DuplicatePin(routine.pin()));
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ServoRecord, SessionRecord};

    fn two_servo_set() -> RoutineSet {
        let mut set = RoutineSet::generate(10, 2, SessionLimits::default()).unwrap();
        set.assign_pin("Servo1", 9).unwrap();
        set.assign_pin("Servo2", 10).unwrap();
        set
    }

    fn record(names_pins: &[(&str, u32)], seconds: u32) -> SessionRecord {
        SessionRecord {
            seconds,
            servos: names_pins
                .iter()
                .map(|(name, pin)| ServoRecord {
                    name: name.to_string(),
                    pin: *pin,
                    keyframes: vec![90; seconds as usize * 2 + 1],
                    upper_limit: 179,
                    lower_limit: 0,
                })
                .collect(),
            button_pin: None,
            output_mode: OutputMode::I2cBased,
        }
    }

    #[test]
    fn test_generate_names_and_length() {
        let set = two_servo_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.length_seconds(), 10);
        assert_eq!(set.routines()[0].name(), "Servo1");
        assert_eq!(set.routines()[1].name(), "Servo2");
    }

    #[test]
    fn test_generate_clamps_inputs() {
        // 0 servos and 0 seconds are pulled up to 1, like the entry form.
        let set = RoutineSet::generate(0, 0, SessionLimits::default()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.length_seconds(), 1);
    }

    #[test]
    fn test_generate_respects_total_budget() {
        let err = RoutineSet::generate(100, 4, SessionLimits::default()).unwrap_err();
        assert_eq!(err, EditError::TimeLimitExceeded(360));
    }

    #[test]
    fn test_add_routine_beyond_servo_limit() {
        let limits = SessionLimits {
            max_servos: 2,
            ..Default::default()
        };
        let mut set = RoutineSet::generate(5, 2, limits).unwrap();
        let before = set.clone();

        let err = set.add_routine("Extra", 3).unwrap_err();
        assert_eq!(err, EditError::ServoLimitExceeded(2));
        assert_eq!(set, before);
    }

    #[test]
    fn test_add_routine_beyond_time_budget() {
        let mut set = RoutineSet::generate(120, 3, SessionLimits::default()).unwrap();
        let err = set.add_routine("Extra", 3).unwrap_err();
        assert_eq!(err, EditError::TimeLimitExceeded(360));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_add_routine_matches_shared_length() {
        let mut set = two_servo_set();
        set.add_routine("Gripper", 11).unwrap();
        assert_eq!(set.routine("Gripper").unwrap().seconds(), 10);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_remove_routine_keeps_at_least_one() {
        let mut set = two_servo_set();
        set.remove_routine("Servo1").unwrap();
        assert_eq!(
            set.remove_routine("Servo2"),
            Err(EditError::MinimumServoCount)
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_rename_strips_spaces_and_truncates() {
        let mut set = two_servo_set();
        set.rename_routine("Servo1", "left arm gripper").unwrap();
        assert_eq!(set.routines()[0].name(), "leftarmgri");
    }

    #[test]
    fn test_rename_to_empty_is_noop() {
        let mut set = two_servo_set();
        set.rename_routine("Servo1", "   ").unwrap();
        assert_eq!(set.routines()[0].name(), "Servo1");
    }

    #[test]
    fn test_rename_duplicate_rejected() {
        let mut set = two_servo_set();
        assert_eq!(
            set.rename_routine("Servo1", "Servo2"),
            Err(EditError::DuplicateName("Servo2".into()))
        );
        // Renaming to its own name is allowed.
        set.rename_routine("Servo1", "Servo1").unwrap();
    }

    #[test]
    fn test_assign_pin_duplicate_rejected() {
        let mut set = two_servo_set();
        assert_eq!(
            set.assign_pin("Servo1", 10),
            Err(EditError::DuplicatePin(10))
        );
        // Re-assigning a servo its own pin is fine.
        set.assign_pin("Servo1", 9).unwrap();
    }

    #[test]
    fn test_unknown_servo() {
        let mut set = two_servo_set();
        assert_eq!(
            set.assign_pin("Nope", 3),
            Err(EditError::UnknownServo("Nope".into()))
        );
    }

    #[test]
    fn test_resize_all_adds_uniformly() {
        let mut set = two_servo_set();
        set.resize_all(5, Position::End, Direction::Add).unwrap();
        assert_eq!(set.length_seconds(), 15);
        for routine in set.routines() {
            assert_eq!(routine.len(), 31);
        }
    }

    #[test]
    fn test_resize_all_time_budget_is_atomic() {
        // 2 servos at 100s; adding 200s would make 2 x 300 = 600 > 360.
        let mut set = RoutineSet::generate(100, 2, SessionLimits::default()).unwrap();
        let before = set.clone();

        let err = set
            .resize_all(200, Position::End, Direction::Add)
            .unwrap_err();
        assert_eq!(err, EditError::TimeLimitExceeded(360));
        assert_eq!(set, before);
        assert_eq!(set.length_seconds(), 100);
    }

    #[test]
    fn test_resize_all_remove_guard() {
        let mut set = two_servo_set();
        assert_eq!(
            set.resize_all(10, Position::End, Direction::Remove),
            Err(EditError::InvalidRemoval)
        );
        assert_eq!(set.length_seconds(), 10);

        set.resize_all(9, Position::Start, Direction::Remove).unwrap();
        assert_eq!(set.length_seconds(), 1);
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut set = two_servo_set();

        set.apply("Servo1", TabAction::Rename("Base".into())).unwrap();
        assert_eq!(set.routines()[0].name(), "Base");

        set.apply(
            "Base",
            TabAction::AdjustLimits {
                upper: 150,
                lower: 30,
            },
        )
        .unwrap();
        assert_eq!(set.routine("Base").unwrap().upper_limit(), 150);

        set.apply(
            "Base",
            TabAction::AddTime {
                seconds: 2,
                position: Position::End,
            },
        )
        .unwrap();
        assert_eq!(set.length_seconds(), 12);

        set.apply("Base", TabAction::DeleteServo).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_merge_pads_shorter_incoming() {
        let mut set = two_servo_set(); // 10s
        set.merge_record(&record(&[("Imported", 4)], 6)).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.length_seconds(), 10);
        let imported = set.routine("Imported").unwrap();
        assert_eq!(imported.seconds(), 10);
        // Tail padding carries the default angle.
        assert_eq!(&imported.keyframes()[13..], &[90; 8]);
    }

    #[test]
    fn test_merge_pads_shorter_current() {
        let mut set = two_servo_set(); // 10s
        set.merge_record(&record(&[("Imported", 4)], 14)).unwrap();

        assert_eq!(set.length_seconds(), 14);
        for routine in set.routines() {
            assert_eq!(routine.seconds(), 14);
        }
    }

    #[test]
    fn test_merge_over_servo_limit_is_atomic() {
        let limits = SessionLimits {
            max_servos: 3,
            ..Default::default()
        };
        let mut set = RoutineSet::generate(10, 2, limits).unwrap();
        let before = set.clone();

        let err = set
            .merge_record(&record(&[("A", 4), ("B", 5)], 10))
            .unwrap_err();
        assert_eq!(err, EditError::ServoLimitExceeded(3));
        assert_eq!(set, before);
    }

    #[test]
    fn test_merge_over_time_budget_is_atomic() {
        let mut set = RoutineSet::generate(100, 2, SessionLimits::default()).unwrap();
        let before = set.clone();

        // 3 servos at 150s would be 450 > 360.
        let err = set.merge_record(&record(&[("A", 4)], 150)).unwrap_err();
        assert_eq!(err, EditError::TimeLimitExceeded(360));
        assert_eq!(set, before);
    }

    #[test]
    fn test_from_record_rejects_overflowing_seconds() {
        // seconds x servos would wrap a u32; the budget check must still
        // fire instead of panicking.
        let mut rec = record(&[("A", 1), ("B", 2)], 5);
        rec.seconds = 2_147_483_648;
        assert_eq!(
            RoutineSet::from_record(&rec, SessionLimits::default()),
            Err(EditError::TimeLimitExceeded(360))
        );
    }

    #[test]
    fn test_merge_rejects_overflowing_seconds() {
        let mut set = two_servo_set();
        let before = set.clone();

        let mut rec = record(&[("A", 4)], 5);
        rec.seconds = u32::MAX;
        let err = set.merge_record(&rec).unwrap_err();
        assert_eq!(err, EditError::TimeLimitExceeded(360));
        assert_eq!(set, before);
    }

    #[test]
    fn test_resize_all_rejects_overflowing_seconds() {
        let mut set = two_servo_set();
        let before = set.clone();

        let err = set
            .resize_all(u32::MAX, Position::End, Direction::Add)
            .unwrap_err();
        assert_eq!(err, EditError::TimeLimitExceeded(360));
        assert_eq!(set, before);
    }

    #[test]
    fn test_from_record_rejects_length_mismatch() {
        let mut rec = record(&[("A", 1)], 5);
        rec.servos[0].keyframes.pop();
        assert_eq!(
            RoutineSet::from_record(&rec, SessionLimits::default()),
            Err(EditError::InvalidLength)
        );
    }

    #[test]
    fn test_from_record_sanitizes_limits_and_keyframes() {
        let mut rec = record(&[("A", 1)], 1);
        rec.servos[0].upper_limit = 400;
        rec.servos[0].lower_limit = -20;
        rec.servos[0].keyframes = vec![-50, 90, 400];

        let set = RoutineSet::from_record(&rec, SessionLimits::default()).unwrap();
        let routine = &set.routines()[0];
        assert_eq!(routine.upper_limit(), 180);
        assert_eq!(routine.lower_limit(), 0);
        assert_eq!(routine.keyframes(), &[0, 90, 180]);
    }

    #[test]
    fn test_validate_reports_all_problems_at_once() {
        let mut set = RoutineSet::generate(5, 3, SessionLimits::default()).unwrap();
        // Leave every pin at 0 and force a name collision.
        set.routines[2].set_name("Servo1".into());

        let violations = set.validate_for_export();
        assert!(violations.contains(&Violation::DuplicateName("Servo1".into())));
        assert!(violations.contains(&Violation::DuplicatePin(0)));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_validate_clean_set() {
        let set = two_servo_set();
        assert!(set.validate_for_export().is_empty());
    }

    #[test]
    fn test_validate_empty_set() {
        let set = RoutineSet::new(SessionLimits::default());
        assert_eq!(set.validate_for_export(), vec![Violation::EmptySet]);
    }
}
