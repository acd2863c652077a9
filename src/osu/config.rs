/// Which objects may be clicked while earlier objects are still pending.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NoteLock {
    /// Every object can be clicked at any time.
    None,
    /// An unfinished object blocks all later objects. Sliders whose head was
    /// judged and spinners do not block an object that starts before they
    /// end.
    #[default]
    Stable,
    /// Circles and unjudged slider heads block later objects until their
    /// start time passes.
    Lazer,
}

/// Gameplay settings that stay fixed for the duration of a play session.
///
/// # Example
///
/// ```
/// use rosu_judge::osu::{GameplayConfig, NoteLock};
///
/// let config = GameplayConfig::new()
///     .note_lock(NoteLock::Lazer)
///     .relax_offset(-5)
///     .slider_end_miss_breaks_combo(true);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct GameplayConfig {
    pub(crate) relax_offset: i64,
    pub(crate) note_lock: NoteLock,
    pub(crate) note_lock_2b_tolerance: i64,
    pub(crate) fade_in_time: i64,
    pub(crate) approach_scale_multiplier: f64,
    pub(crate) hidden_fade_in: (f64, f64),
    pub(crate) hidden_fade_out: (f64, f64),
    pub(crate) slider_end_inside_check_offset: i64,
    pub(crate) follow_circle_multiplier: f64,
    pub(crate) slider_end_miss_breaks_combo: bool,
    pub(crate) slider_score_v2: bool,
    pub(crate) slider_max_ticks: usize,
    pub(crate) half_window: bool,
    pub(crate) half_window_allow_300s: bool,
    pub(crate) no_100s: bool,
    pub(crate) no_50s: bool,
    pub(crate) ming3012: bool,
    pub(crate) target_thresholds: TargetThresholds,
}

/// Normalized target distances below which a hit is graded 300, 100, or 50
/// under the Target Practice mod.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetThresholds {
    pub n300: f64,
    pub n100: f64,
    pub n50: f64,
}

impl GameplayConfig {
    /// Create a new [`GameplayConfig`] with osu!stable's settings.
    pub const fn new() -> Self {
        Self {
            relax_offset: 0,
            note_lock: NoteLock::Stable,
            note_lock_2b_tolerance: 3,
            fade_in_time: 400,
            approach_scale_multiplier: 3.0,
            hidden_fade_in: (1.0, 0.6),
            hidden_fade_out: (0.6, 0.3),
            slider_end_inside_check_offset: 36,
            follow_circle_multiplier: 2.4,
            slider_end_miss_breaks_combo: false,
            slider_score_v2: false,
            slider_max_ticks: 2048,
            half_window: false,
            half_window_allow_300s: true,
            no_100s: false,
            no_50s: false,
            ming3012: false,
            target_thresholds: TargetThresholds {
                n300: 0.5,
                n100: 0.7,
                n50: 0.95,
            },
        }
    }

    /// Offset relative to an object's start time from which Relax hits it
    /// automatically.
    pub const fn relax_offset(self, relax_offset: i64) -> Self {
        Self {
            relax_offset,
            ..self
        }
    }

    pub const fn note_lock(self, note_lock: NoteLock) -> Self {
        Self { note_lock, ..self }
    }

    /// Minimum gap in milliseconds after a slider or spinner for the next
    /// object to escape [`NoteLock::Stable`].
    pub const fn note_lock_2b_tolerance(self, tolerance: i64) -> Self {
        Self {
            note_lock_2b_tolerance: tolerance,
            ..self
        }
    }

    pub const fn fade_in_time(self, fade_in_time: i64) -> Self {
        Self {
            fade_in_time,
            ..self
        }
    }

    /// Scale of the approach circle when it first appears, on top of the
    /// object's own size.
    pub const fn approach_scale_multiplier(self, multiplier: f64) -> Self {
        Self {
            approach_scale_multiplier: multiplier,
            ..self
        }
    }

    /// Start and end of the Hidden fade-in as fractions of the approach time
    /// before the object's start time.
    pub const fn hidden_fade_in(self, start: f64, end: f64) -> Self {
        Self {
            hidden_fade_in: (start, end),
            ..self
        }
    }

    /// Start and end of the Hidden fade-out as fractions of the approach time
    /// before the object's start time.
    pub const fn hidden_fade_out(self, start: f64, end: f64) -> Self {
        Self {
            hidden_fade_out: (start, end),
            ..self
        }
    }

    /// How long before a slider's end its "held till end" state is sampled.
    pub const fn slider_end_inside_check_offset(self, offset: i64) -> Self {
        Self {
            slider_end_inside_check_offset: offset,
            ..self
        }
    }

    pub const fn follow_circle_multiplier(self, multiplier: f64) -> Self {
        Self {
            follow_circle_multiplier: multiplier,
            ..self
        }
    }

    /// Whether releasing a slider before its end breaks combo.
    pub const fn slider_end_miss_breaks_combo(self, breaks: bool) -> Self {
        Self {
            slider_end_miss_breaks_combo: breaks,
            ..self
        }
    }

    /// Grade slider ends the way ScoreV2 does even without the mod.
    pub const fn slider_score_v2(self, score_v2: bool) -> Self {
        Self {
            slider_score_v2: score_v2,
            ..self
        }
    }

    /// Upper bound of ticks per slider span.
    pub const fn slider_max_ticks(self, max_ticks: usize) -> Self {
        Self {
            slider_max_ticks: max_ticks,
            ..self
        }
    }

    /// Early hits are judged normally while late hits within the miss window
    /// are graded 100, or 300 if `allow_300s` and within the 300 window.
    pub const fn half_window(self, half_window: bool, allow_300s: bool) -> Self {
        Self {
            half_window,
            half_window_allow_300s: allow_300s,
            ..self
        }
    }

    /// Only 300s and misses.
    pub const fn no_100s(self, no_100s: bool) -> Self {
        Self { no_100s, ..self }
    }

    /// Only 300s, 100s, and misses.
    pub const fn no_50s(self, no_50s: bool) -> Self {
        Self { no_50s, ..self }
    }

    /// Only 300s, 50s, and misses.
    pub const fn ming3012(self, ming3012: bool) -> Self {
        Self { ming3012, ..self }
    }

    pub const fn target_thresholds(self, thresholds: TargetThresholds) -> Self {
        Self {
            target_thresholds: thresholds,
            ..self
        }
    }

    pub(crate) const fn allows_100s(&self) -> bool {
        !(self.ming3012 || self.no_100s)
    }

    pub(crate) const fn allows_50s(&self) -> bool {
        !(self.no_100s || self.no_50s)
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
