//! Keyframe expansion for smooth firmware playback.
//!
//! Keyframes are sampled at a fixed two per second; the firmware replays
//! the routine at a much finer tick (one value every `millis`
//! milliseconds), so each half-second keyframe gap is divided linearly
//! into `floor(500 / millis)` intermediate steps.

/// Round to the nearest integer, ties to even.
///
/// Matches the reference outputs this expansion is checked against
/// (banker's rounding), which differs from `f64::round` on exact halves.
pub fn round_half_even(x: f64) -> i32 {
    let floor = x.floor();
    let diff = x - floor;
    if diff > 0.5 {
        floor as i32 + 1
    } else if diff < 0.5 {
        floor as i32
    } else if (floor as i64) % 2 == 0 {
        floor as i32
    } else {
        floor as i32 + 1
    }
}

/// Expand a keyframe sequence into the dense playback sequence.
///
/// For every consecutive keyframe pair `(v[i], v[i+1])` this emits
/// `steps = floor(500 / millis)` linearly interpolated values starting at
/// `v[i]`; the final keyframe, having no successor, is emitted once
/// unchanged. Output length is `(len - 1) * steps + 1`.
///
/// Pure and deterministic; safe to call concurrently for independent
/// routines. An interval longer than 500 ms degenerates to one step per
/// keyframe; a zero interval is treated as 1 ms.
pub fn expand(keyframes: &[i32], millis: u32) -> Vec<i32> {
    let steps = (500 / millis.max(1)).max(1) as usize;
    let mut out = Vec::with_capacity(keyframes.len().saturating_sub(1) * steps + 1);

    for (index, &value) in keyframes.iter().enumerate() {
        match keyframes.get(index + 1) {
            Some(&next) => {
                let step = (next - value) as f64 / steps as f64;
                for k in 0..steps {
                    out.push(round_half_even(value as f64 + step * k as f64));
                }
            }
            None => out.push(value),
        }
    }
    out
}
