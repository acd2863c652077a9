use crate::{
    model::{
        beatmap::{Beatmap, BeatmapAttributes},
        mods::{GameMods, Reflection},
    },
    util::difficulty::difficulty_range,
};

use super::{
    config::{GameplayConfig, TargetThresholds},
    hit_result::HitResult,
};

/// Immutable gameplay policy of a play session.
///
/// All times are song-time milliseconds, i.e. they are *not* scaled by the
/// clock rate.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRules {
    attrs: BeatmapAttributes,
    config: GameplayConfig,
    mods: ModFlags,
    approach_time: f64,
    hit_windows: HitWindows,
    circle_radius: f64,
    spins_per_second: f64,
}

/// Mods that change how objects are judged.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct ModFlags {
    auto: bool,
    relax: bool,
    autopilot: bool,
    spun_out: bool,
    hidden: bool,
    strict_tracking: bool,
    score_v2: bool,
    target_practice: bool,
    reflection: Option<Reflection>,
}

/// Hit windows in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    pub n300: f64,
    pub n100: f64,
    pub n50: f64,
    pub miss: f64,
}

impl HitWindows {
    const MISS: f64 = 400.0;

    /// The hit windows for the given overall difficulty.
    pub fn new(od: f64) -> Self {
        Self {
            n300: difficulty_range(od, 80.0, 50.0, 20.0),
            n100: difficulty_range(od, 140.0, 100.0, 60.0),
            n50: difficulty_range(od, 200.0, 150.0, 100.0),
            miss: Self::MISS,
        }
    }
}

impl GameRules {
    pub const OBJECT_RADIUS: f64 = 64.0;

    const PREEMPT_MIN: f64 = 450.0;
    const PREEMPT_MID: f64 = 1200.0;
    const PREEMPT_MAX: f64 = 1800.0;

    /// Create new [`GameRules`] from already mod-adjusted attributes.
    pub fn new(attrs: BeatmapAttributes, mods: &GameMods, config: GameplayConfig) -> Self {
        let mods = ModFlags {
            auto: mods.auto(),
            relax: mods.rx(),
            autopilot: mods.ap(),
            spun_out: mods.so(),
            hidden: mods.hd(),
            strict_tracking: mods.st(),
            score_v2: mods.sv2(),
            target_practice: mods.tp(),
            reflection: match mods.reflection() {
                Reflection::None => None,
                reflection => Some(reflection),
            },
        };

        let approach_time = difficulty_range(
            attrs.ar,
            Self::PREEMPT_MAX,
            Self::PREEMPT_MID,
            Self::PREEMPT_MIN,
        );

        let circle_radius = Self::OBJECT_RADIUS * (1.0 - 0.7 * (attrs.cs - 5.0) / 5.0) / 2.0;

        Self {
            hit_windows: HitWindows::new(attrs.od),
            spins_per_second: difficulty_range(attrs.od, 3.0, 5.0, 7.5),
            attrs,
            config,
            mods,
            approach_time,
            circle_radius,
        }
    }

    /// Create new [`GameRules`] for the given [`Beatmap`] and mods.
    pub fn from_map(map: &Beatmap, mods: impl Into<GameMods>, config: GameplayConfig) -> Self {
        let mods = mods.into();
        let attrs = map.attributes().mods(mods.clone()).build();

        Self::new(attrs, &mods, config)
    }

    /// Judge a click at `delta` milliseconds relative to an object's start
    /// time.
    ///
    /// Returns [`HitResult::None`] if the click is outside of the miss
    /// window.
    pub fn hit_result(&self, delta: i64) -> HitResult {
        let config = &self.config;
        let windows = &self.hit_windows;
        let abs = delta.saturating_abs();

        if config.half_window && delta > 0 && delta <= windows.miss as i64 {
            return if config.half_window_allow_300s && delta <= windows.n300 as i64 {
                HitResult::Hit300
            } else {
                HitResult::Hit100
            };
        }

        if abs <= windows.n300 as i64 {
            HitResult::Hit300
        } else if abs <= windows.n100 as i64 && config.allows_100s() {
            HitResult::Hit100
        } else if abs <= windows.n50 as i64 && config.allows_50s() {
            HitResult::Hit50
        } else if abs <= windows.miss as i64 {
            HitResult::Miss
        } else {
            HitResult::None
        }
    }

    /// Regrade a timing judgement by the normalized distance between the
    /// click and the object's center.
    pub(crate) fn target_result(&self, result: HitResult, target_delta: f64) -> HitResult {
        let TargetThresholds { n300, n100, n50 } = self.config.target_thresholds;

        if !result.is_hit() {
            result
        } else if target_delta < n300 && matches!(result, HitResult::Hit300 | HitResult::Hit100) {
            HitResult::Hit300
        } else if target_delta < n100 {
            HitResult::Hit100
        } else if target_delta < n50 {
            HitResult::Hit50
        } else {
            HitResult::Miss
        }
    }

    /// Grade a ratio of completion, e.g. of a spinner.
    pub(crate) const fn ratio_result(&self, ratio: f64) -> HitResult {
        if ratio >= 1.0 {
            HitResult::Hit300
        } else if ratio >= 0.9 && self.config.allows_100s() {
            HitResult::Hit100
        } else if ratio >= 0.75 && self.config.allows_50s() {
            HitResult::Hit50
        } else {
            HitResult::Miss
        }
    }

    /// Time between an object appearing and its start time.
    pub const fn approach_time(&self) -> i64 {
        self.approach_time as i64
    }

    pub const fn fade_in_time(&self) -> i64 {
        self.config.fade_in_time
    }

    pub const fn hit_windows(&self) -> &HitWindows {
        &self.hit_windows
    }

    pub const fn hit_window_300(&self) -> f64 {
        self.hit_windows.n300
    }

    pub const fn hit_window_100(&self) -> f64 {
        self.hit_windows.n100
    }

    pub const fn hit_window_50(&self) -> f64 {
        self.hit_windows.n50
    }

    pub const fn hit_window_miss(&self) -> f64 {
        self.hit_windows.miss
    }

    /// Circle radius in osu!pixels.
    pub const fn circle_radius(&self) -> f64 {
        self.circle_radius
    }

    /// Radius of the slider follow circle in osu!pixels.
    pub const fn follow_radius(&self) -> f64 {
        self.circle_radius * self.config.follow_circle_multiplier
    }

    /// Full spinner rotations per second required for a 300.
    pub const fn spins_per_second(&self) -> f64 {
        self.spins_per_second
    }

    pub const fn attributes(&self) -> &BeatmapAttributes {
        &self.attrs
    }

    pub const fn clock_rate(&self) -> f64 {
        self.attrs.clock_rate
    }

    pub const fn config(&self) -> &GameplayConfig {
        &self.config
    }

    /// Whether objects are judged without player input.
    pub const fn auto(&self) -> bool {
        self.mods.auto
    }

    pub const fn relax(&self) -> bool {
        self.mods.relax
    }

    pub const fn autopilot(&self) -> bool {
        self.mods.autopilot
    }

    pub const fn spun_out(&self) -> bool {
        self.mods.spun_out
    }

    pub const fn hidden(&self) -> bool {
        self.mods.hidden
    }

    pub const fn strict_tracking(&self) -> bool {
        self.mods.strict_tracking
    }

    /// Whether slider ends are graded the ScoreV2 way.
    pub const fn slider_score_v2(&self) -> bool {
        self.mods.score_v2 || self.config.slider_score_v2
    }

    pub const fn target_practice(&self) -> bool {
        self.mods.target_practice
    }

    pub(crate) fn reflection(&self) -> Reflection {
        self.mods.reflection.unwrap_or(Reflection::None)
    }
}
