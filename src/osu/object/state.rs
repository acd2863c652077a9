use rosu_map::util::Pos;

use crate::{osu::rules::GameRules, util::difficulty::fade_progress};

/// Where an object is in its lifetime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Before the object appears.
    #[default]
    Inactive,
    /// Approaching; its start time has not been reached yet.
    Visible,
    /// Its start time has passed but it has not been fully judged yet.
    Waiting,
    /// Fully judged.
    Finished,
}

/// Time-dependent values for drawing an object.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Visuals {
    /// Scale of the approach circle relative to the object.
    pub approach_scale: f64,
    pub alpha: f64,
    /// The alpha as if Hidden was not enabled.
    pub alpha_without_hidden: f64,
    pub approach_alpha: f64,
}

impl Default for Visuals {
    fn default() -> Self {
        Self {
            approach_scale: 1.0,
            alpha: 0.0,
            alpha_without_hidden: 0.0,
            approach_alpha: 0.0,
        }
    }
}

/// Combo metadata of an object.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboInfo {
    /// One-based number within the combo.
    pub number: u32,
    pub end_of_combo: bool,
    /// Index of the combo colour before skin-specific wrapping.
    pub color_counter: u32,
    pub color_offset: i32,
}

/// State shared by all object kinds.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectState {
    pub(crate) time: i64,
    pub(crate) duration: i64,
    pub(crate) pos: Pos,
    pub(crate) combo: ComboInfo,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) blocked: bool,
    pub(crate) visuals: Visuals,
}

/// Longest duration an object may have; longer sliders and spinners are
/// clamped or dropped.
pub(crate) const MAX_DURATION: i64 = i32::MAX as i64;

impl ObjectState {
    pub(crate) fn new(time: i64, duration: i64, pos: Pos, combo: ComboInfo) -> Self {
        Self {
            time,
            duration,
            pos,
            combo,
            lifecycle: Lifecycle::Inactive,
            blocked: false,
            visuals: Visuals::default(),
        }
    }

    pub(crate) const fn end_time(&self) -> i64 {
        self.time.saturating_add(self.duration)
    }

    pub(crate) const fn is_finished(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Finished)
    }

    pub(crate) fn finish(&mut self) {
        self.lifecycle = Lifecycle::Finished;
    }

    /// Advance lifecycle and visuals to `cur_pos`.
    pub(crate) fn update(&mut self, cur_pos: i64, rules: &GameRules) {
        let approach = rules.approach_time();
        let appear = self.time - approach;

        self.visuals = if cur_pos >= appear && cur_pos < self.end_time() {
            self.visuals_at(cur_pos, rules)
        } else {
            Visuals::default()
        };

        if self.is_finished() {
            return;
        }

        self.lifecycle = if cur_pos < appear {
            Lifecycle::Inactive
        } else if cur_pos < self.time {
            Lifecycle::Visible
        } else {
            Lifecycle::Waiting
        };
    }

    fn visuals_at(&self, cur_pos: i64, rules: &GameRules) -> Visuals {
        let config = rules.config();
        let approach = rules.approach_time();
        let appear = self.time - approach;
        let fade_in = rules.fade_in_time();

        let remaining = if approach > 0 {
            ((self.time - cur_pos) as f64 / approach as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let alpha_without_hidden =
            fade_progress(cur_pos, appear, self.time.min(appear + fade_in));

        let approach_alpha = if rules.hidden() {
            0.0
        } else {
            fade_progress(cur_pos, appear, self.time.min(appear + 2 * fade_in))
        };

        let alpha = if rules.hidden() {
            let at = |percent: f64| self.time - (approach as f64 * percent) as i64;
            let (in_start, in_end) = config.hidden_fade_in;
            let (out_start, out_end) = config.hidden_fade_out;

            let fade_in = fade_progress(cur_pos, at(in_start), at(in_end));
            let fade_out = fade_progress(cur_pos, at(out_start), at(out_end));

            fade_in * (1.0 - fade_out)
        } else {
            alpha_without_hidden
        };

        Visuals {
            approach_scale: 1.0 + remaining * config.approach_scale_multiplier,
            alpha,
            alpha_without_hidden,
            approach_alpha,
        }
    }

    /// Re-derive the lifecycle for `cur_pos` given whether the object counts
    /// as finished.
    pub(crate) fn reset(&mut self, cur_pos: i64, finished: bool, rules: &GameRules) {
        self.lifecycle = Lifecycle::Inactive;
        self.blocked = false;
        self.update(cur_pos, rules);

        if finished {
            self.finish();
        }
    }
}
