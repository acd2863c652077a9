/// Maps a difficulty value onto a range anchored at difficulty 0, 5, and 10.
///
/// Values in between two anchors are interpolated linearly so the mapping is
/// piecewise linear rather than linear over the whole range.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

pub const fn reverse_lerp(x: f64, start: f64, end: f64) -> f64 {
    f64::clamp((x - start) / (end - start), 0.0, 1.0)
}

/// Progress of `time` through the fade `start..end` in `0.0..=1.0`.
///
/// Zero-length fades jump straight from `0.0` to `1.0` at `end`.
pub fn fade_progress(time: i64, start: i64, end: i64) -> f64 {
    if end <= start {
        return if time >= end { 1.0 } else { 0.0 };
    }

    reverse_lerp(time as f64, start as f64, end as f64)
}
