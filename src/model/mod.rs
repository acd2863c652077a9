/// Beatmap data and difficulty attributes.
pub mod beatmap;

/// Timing and difficulty control points.
pub mod control_point;

/// Hit objects as they appear in a beatmap.
pub mod hit_object;

/// Gamemode related types.
pub mod mode;

/// Game mods.
pub mod mods;
