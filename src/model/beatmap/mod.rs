pub use self::attributes::{BeatmapAttributes, BeatmapAttributesBuilder, ModsDependent};

use super::{
    control_point::{difficulty_point_at, timing_point_at, DifficultyPoint, TimingPoint},
    hit_object::HitObject,
    mode::{ConvertError, GameMode},
};

mod attributes;

/// All beatmap data that is relevant for gameplay judgement.
///
/// Decoding `.osu` files is out of scope; fill the fields from an already
/// decoded map, e.g. through [`rosu_map`].
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    pub version: i32,

    // General
    pub mode: GameMode,

    // Difficulty
    pub ar: f32,
    pub cs: f32,
    pub hp: f32,
    pub od: f32,
    pub slider_multiplier: f64,
    pub slider_tick_rate: f64,

    // TimingPoints
    pub timing_points: Vec<TimingPoint>,
    pub difficulty_points: Vec<DifficultyPoint>,

    // HitObjects
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified beatmap
    /// attributes.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// Return the [`TimingPoint`] for the given timestamp.
    ///
    /// If `time` is before the first timing point, the first timing point
    /// is returned.
    pub fn timing_point_at(&self, time: f64) -> Option<&TimingPoint> {
        timing_point_at(&self.timing_points, time)
    }

    /// Return the [`DifficultyPoint`] for the given timestamp.
    pub fn difficulty_point_at(&self, time: f64) -> Option<&DifficultyPoint> {
        difficulty_point_at(&self.difficulty_points, time)
    }

    /// Check whether the map can be played as osu!standard.
    pub const fn check_mode(&self) -> Result<(), ConvertError> {
        match self.mode {
            GameMode::Osu => Ok(()),
            from => Err(ConvertError::Convert {
                from,
                to: GameMode::Osu,
            }),
        }
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            version: 14,
            mode: GameMode::Osu,
            ar: 5.0,
            cs: 5.0,
            hp: 5.0,
            od: 5.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
            timing_points: Vec::new(),
            difficulty_points: Vec::new(),
            hit_objects: Vec::new(),
        }
    }
}
