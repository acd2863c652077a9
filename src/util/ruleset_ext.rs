use crate::model::beatmap::BeatmapAttributes;

/// osu!stable's integer difficulty multiplier applied to the combo portion
/// of legacy score.
///
/// Uses unmodded attributes. Stable computes this with 80-bit floats so the
/// sum is rounded half-to-even to land on the same integer.
pub fn calculate_difficulty_peppy_stars(
    attrs: &BeatmapAttributes,
    object_count: i32,
    drain_len: i32,
) -> i32 {
    let density = match drain_len {
        0 => 16.0,
        secs => (f64::from(object_count) / f64::from(secs) * 8.0).clamp(0.0, 16.0),
    };

    let sum = attrs.hp + attrs.od + attrs.cs + density;

    (sum / 38.0 * 5.0).round_ties_even() as i32
}
