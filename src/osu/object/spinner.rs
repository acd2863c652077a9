use std::f64::consts::{PI, TAU};

use crate::osu::{
    hit_result::HitResult,
    input::InputState,
    judgement::{HitEvent, JudgementSink},
    rules::GameRules,
    PLAYFIELD_CENTER,
};

use super::state::ObjectState;

/// Judgement state of a spinner.
#[derive(Clone, Debug, PartialEq)]
pub struct Spinner {
    rotations_needed: i32,
    /// Accumulated rotation in radians.
    rotation: f64,
    last_angle: Option<f64>,
    last_time: Option<i64>,
    half_spins: i32,
    result: HitResult,
}

impl Spinner {
    /// Fastest possible spin in full rotations per second of real time.
    pub const MAX_ROTATIONS_PER_SECOND: f64 = 477.0 / 60.0;

    pub(crate) fn new(duration: i64, rules: &GameRules) -> Self {
        let seconds = duration as f64 / 1000.0 / rules.clock_rate();

        Self {
            rotations_needed: (seconds * rules.spins_per_second()) as i32,
            rotation: 0.0,
            last_angle: None,
            last_time: None,
            half_spins: 0,
            result: HitResult::None,
        }
    }

    /// Full rotations required for a 300.
    pub const fn rotations_needed(&self) -> i32 {
        self.rotations_needed
    }

    /// Full rotations so far.
    pub fn rotations(&self) -> f64 {
        self.rotation / TAU
    }

    /// Completion ratio; `1.0` or more means the spinner is cleared.
    pub fn ratio(&self) -> f64 {
        if self.rotations_needed <= 0 {
            1.0
        } else {
            self.rotations() / f64::from(self.rotations_needed)
        }
    }

    pub const fn result(&self) -> HitResult {
        self.result
    }

    pub(crate) fn update<S: JudgementSink>(
        &mut self,
        state: &mut ObjectState,
        cur_pos: i64,
        input: &InputState,
        rules: &GameRules,
        sink: &mut S,
    ) {
        if state.is_finished() || cur_pos < state.time {
            return;
        }

        let end_time = state.end_time();
        let now = cur_pos.min(end_time);
        let elapsed = now - self.last_time.unwrap_or(now);
        self.last_time = Some(now);

        let max_delta = if elapsed > 0 {
            let real_ms = elapsed as f64 / rules.clock_rate();

            Self::MAX_ROTATIONS_PER_SECOND * TAU * real_ms / 1000.0
        } else {
            0.0
        };

        let offset = input.cursor - PLAYFIELD_CENTER;
        let angle = f64::from(offset.y).atan2(f64::from(offset.x));
        let last_angle = self.last_angle.replace(angle);

        let delta = if rules.auto() || rules.autopilot() || rules.spun_out() {
            max_delta
        } else if input.keys.any() || rules.relax() {
            last_angle.map_or(0.0, |last| wrap_angle(angle - last).abs().min(max_delta))
        } else {
            0.0
        };

        self.rotation += delta;
        self.award_half_spins(sink);

        if cur_pos < end_time {
            return;
        }

        let result = if rules.auto() {
            HitResult::Hit300
        } else {
            rules.ratio_result(self.ratio())
        };

        log_event!(debug, time = state.time, ratio = self.ratio(), ?result, "spinner judged");

        self.result = result;
        state.finish();

        let event = HitEvent::new(result, 0, PLAYFIELD_CENTER)
            .end_of_combo(state.combo.end_of_combo)
            .on_hit_error_bar(false);

        sink.add_hit_result(event);
    }

    /// Every second half spin gives 100 points and, once the spinner is
    /// cleared with some margin, 1100 points instead.
    fn award_half_spins<S: JudgementSink>(&mut self, sink: &mut S) {
        let half_spins = (self.rotation / PI) as i32;
        let required_before_bonus = self.rotations_needed + 3;

        while self.half_spins < half_spins {
            self.half_spins += 1;
            let i = self.half_spins;

            if i > required_before_bonus && (i - required_before_bonus) % 2 == 0 {
                sink.add_score_points(1100);
            } else if i > 1 && i % 2 == 0 {
                sink.add_score_points(100);
            }
        }
    }

    pub(crate) fn on_reset(&mut self, state: &mut ObjectState, cur_pos: i64, rules: &GameRules) {
        self.rotation = 0.0;
        self.last_angle = None;
        self.last_time = None;
        self.half_spins = 0;
        self.result = HitResult::None;

        state.reset(cur_pos, cur_pos >= state.end_time(), rules);
    }
}

/// Wraps an angle into `(-PI, PI]`.
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);

    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
