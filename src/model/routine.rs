//! A single servo's motion routine: keyframes plus angle limits.

use crate::interp::round_half_even;

use super::config::MIN_LIMIT_GAP;
use super::error::EditError;
use super::selection::Span;

/// Which end of the routine a length change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The beginning of the routine (time 0).
    Start,
    /// The tail of the routine.
    End,
}

/// One servo's full keyframe sequence plus its angle limits.
///
/// Keyframes are integer angles sampled at a fixed two per second, index 0
/// at time 0, so a routine of `n` seconds holds `2n + 1` keyframes. Every
/// keyframe always lies within `[lower_limit, upper_limit]`; edits that
/// could violate this re-clamp as they go.
///
/// Length-changing edits go through the owning [`RoutineSet`], which keeps
/// all routines at one shared length.
///
/// [`RoutineSet`]: super::RoutineSet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    name: String,
    pin: u32,
    keyframes: Vec<i32>,
    lower_limit: i32,
    upper_limit: i32,
}

impl Routine {
    /// Create a routine of `seconds` length with every keyframe at
    /// `default_angle` (clamped into the limit pair).
    pub(crate) fn new(
        name: String,
        pin: u32,
        seconds: u32,
        default_angle: i32,
        lower_limit: i32,
        upper_limit: i32,
    ) -> Result<Self, EditError> {
        if seconds < 1 {
            return Err(EditError::InvalidLength);
        }
        let fill = default_angle.clamp(lower_limit, upper_limit);
        Ok(Self {
            name,
            pin,
            keyframes: vec![fill; (seconds as usize) * 2 + 1],
            lower_limit,
            upper_limit,
        })
    }

    /// Rebuild a routine from saved parts, re-clamping keyframes into the
    /// stored limit pair.
    pub(crate) fn from_parts(
        name: String,
        pin: u32,
        mut keyframes: Vec<i32>,
        lower_limit: i32,
        upper_limit: i32,
    ) -> Result<Self, EditError> {
        // A valid routine is at least 1 second: 3 keyframes, odd count.
        if keyframes.len() < 3 || keyframes.len() % 2 == 0 {
            return Err(EditError::InvalidLength);
        }
        for v in keyframes.iter_mut() {
            *v = (*v).clamp(lower_limit, upper_limit);
        }
        Ok(Self {
            name,
            pin,
            keyframes,
            lower_limit,
            upper_limit,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pin(&self) -> u32 {
        self.pin
    }

    pub fn keyframes(&self) -> &[i32] {
        &self.keyframes
    }

    pub fn lower_limit(&self) -> i32 {
        self.lower_limit
    }

    pub fn upper_limit(&self) -> i32 {
        self.upper_limit
    }

    /// Number of keyframes in the routine.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Routine length in whole seconds.
    pub fn seconds(&self) -> u32 {
        ((self.keyframes.len() - 1) / 2) as u32
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_pin(&mut self, pin: u32) {
        self.pin = pin;
    }

    fn clamp_angle(&self, raw: f64) -> i32 {
        round_half_even(raw.clamp(self.lower_limit as f64, self.upper_limit as f64))
    }

    /// Set one keyframe from a raw (mouse-position) value.
    ///
    /// The value is clamped into the limit pair and rounded to the nearest
    /// whole degree.
    pub fn set_value_at(&mut self, index: usize, raw_value: f64) -> Result<(), EditError> {
        if index >= self.keyframes.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.keyframes.len(),
            });
        }
        self.keyframes[index] = self.clamp_angle(raw_value);
        Ok(())
    }

    /// Drag a span of keyframes together.
    ///
    /// The anchor keyframe takes the new (clamped, rounded) value; every
    /// other selected keyframe shifts by the same delta and is re-clamped
    /// individually, preserving the selection's relative shape. This is a
    /// relative shift, not a set-all-to-one-value.
    pub fn drag_span(&mut self, span: Span, anchor: usize, raw_value: f64) -> Result<(), EditError> {
        if span.end() >= self.keyframes.len() {
            return Err(EditError::IndexOutOfRange {
                index: span.end(),
                len: self.keyframes.len(),
            });
        }
        if !span.contains(anchor) {
            return Err(EditError::IndexOutOfRange {
                index: anchor,
                len: self.keyframes.len(),
            });
        }

        let new_anchor = self.clamp_angle(raw_value);
        let delta = new_anchor - self.keyframes[anchor];

        for i in span.indices() {
            let shifted = if i == anchor {
                new_anchor
            } else {
                self.keyframes[i] + delta
            };
            self.keyframes[i] = shifted.clamp(self.lower_limit, self.upper_limit);
        }
        Ok(())
    }

    /// Extend the routine by `count` keyframes of `fill` at one end.
    ///
    /// Only called by the owning set, which has already checked the total
    /// time ceiling.
    pub(crate) fn insert_keyframes(&mut self, position: Position, count: usize, fill: i32) {
        let fill = fill.clamp(self.lower_limit, self.upper_limit);
        match position {
            Position::Start => {
                self.keyframes.splice(0..0, std::iter::repeat_n(fill, count));
            }
            Position::End => {
                self.keyframes.extend(std::iter::repeat_n(fill, count));
            }
        }
    }

    /// Delete `count` keyframes from one end.
    ///
    /// Rejects removals that would not leave more than one keyframe
    /// (`count >= len - 1`).
    pub(crate) fn remove_keyframes(
        &mut self,
        position: Position,
        count: usize,
    ) -> Result<(), EditError> {
        if count >= self.keyframes.len() - 1 {
            return Err(EditError::InvalidRemoval);
        }
        match position {
            Position::Start => {
                self.keyframes.drain(..count);
            }
            Position::End => {
                let keep = self.keyframes.len() - count;
                self.keyframes.truncate(keep);
            }
        }
        Ok(())
    }

    /// Replace the angle limit pair and re-clamp every keyframe.
    ///
    /// The upper limit is clamped into `[MIN_LIMIT_GAP, max_angle]` and the
    /// lower into `[0, upper - MIN_LIMIT_GAP]`, so the result is always a
    /// valid pair. Keyframes outside the new range are pulled to the nearer
    /// limit; the caller is responsible for warning that this loses data.
    pub(crate) fn set_limits(&mut self, new_upper: i32, new_lower: i32, max_angle: i32) {
        self.upper_limit = new_upper.clamp(MIN_LIMIT_GAP, max_angle);
        self.lower_limit = new_lower.clamp(0, self.upper_limit - MIN_LIMIT_GAP);
        for v in self.keyframes.iter_mut() {
            *v = (*v).clamp(self.lower_limit, self.upper_limit);
        }
    }

    /// Erase a contiguous selection and backfill the same count of `fill`
    /// keyframes at the tail, keeping the routine duration fixed.
    pub(crate) fn delete_range(&mut self, indices: &[usize], fill: i32) -> Result<(), EditError> {
        if indices.is_empty() {
            return Ok(());
        }

        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let last = *sorted.last().unwrap_or(&0);
        if last >= self.keyframes.len() {
            return Err(EditError::IndexOutOfRange {
                index: last,
                len: self.keyframes.len(),
            });
        }
        if sorted.windows(2).any(|pair| pair[1] != pair[0] + 1) {
            return Err(EditError::NonContiguousSelection);
        }

        let start = sorted[0];
        let count = sorted.len();
        let fill = fill.clamp(self.lower_limit, self.upper_limit);

        self.keyframes.drain(start..start + count);
        self.keyframes.extend(std::iter::repeat_n(fill, count));
        Ok(())
    }
}
