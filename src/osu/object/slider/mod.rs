use rosu_map::{
    section::hit_objects::{Curve, CurveBuffers},
    util::Pos,
};

use crate::{
    model::{
        beatmap::Beatmap,
        control_point::{DifficultyPoint, TimingPoint},
        hit_object::Slider as SliderData,
    },
    osu::{
        hit_result::HitResult,
        input::{ClickQueue, InputState},
        judgement::{HitEvent, JudgementSink},
        rules::GameRules,
    },
    util::get_precision_adjusted_beat_len,
};

pub use self::clicks::{SliderClick, SliderClickKind};

use self::{clicks::SliderTiming, hold::HoldTracker};

use super::{
    circle::is_inside,
    state::{ObjectState, MAX_DURATION},
};

mod clicks;
mod hold;

/// Judgement state of one end of a slider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Judged {
    finished: bool,
    result: HitResult,
    delta: i64,
}

/// Judgement state of a slider.
#[derive(Clone, Debug)]
pub struct Slider {
    path: Option<Curve>,
    span_count: usize,
    slider_time: f64,
    clicks: Vec<SliderClick>,
    ball_pos: Pos,
    start: Judged,
    end: Judged,
    hold: HoldTracker,
    cursor_inside: bool,
    cursor_left: bool,
    held_till_end: bool,
    lenience_hack: bool,
    lenience_checked: bool,
    strict_last_held: Option<i64>,
    strict_missed: bool,
}

impl Slider {
    const BASE_SCORING_DIST: f64 = 100.0;

    /// Returns the slider and its duration in milliseconds.
    pub(crate) fn new(
        start_time: f64,
        head: Pos,
        slider: &SliderData,
        map: &Beatmap,
        rules: &GameRules,
        bufs: &mut CurveBuffers,
    ) -> (Self, i64) {
        let beat_len = map
            .timing_point_at(start_time)
            .map_or(TimingPoint::DEFAULT_BEAT_LEN, |point| point.beat_len);

        let (slider_velocity, generate_ticks) = map.difficulty_point_at(start_time).map_or(
            (
                DifficultyPoint::DEFAULT_SLIDER_VELOCITY,
                DifficultyPoint::DEFAULT_GENERATE_TICKS,
            ),
            |point| (point.slider_velocity, point.generate_ticks),
        );

        let path = slider.curve(rules.reflection(), bufs);

        let len = path
            .as_ref()
            .map_or_else(|| slider.expected_dist.unwrap_or(0.0), Curve::dist);

        let velocity = Self::BASE_SCORING_DIST * map.slider_multiplier
            / get_precision_adjusted_beat_len(slider_velocity, beat_len);
        let scoring_dist = velocity * beat_len;

        let tick_dist_multiplier = if map.version < 8 {
            slider_velocity.recip()
        } else {
            1.0
        };

        let tick_dist = if generate_ticks {
            scoring_dist / map.slider_tick_rate * tick_dist_multiplier
        } else {
            f64::INFINITY
        };

        let timing = SliderTiming {
            time: start_time as i64,
            len,
            velocity,
            tick_dist,
            span_count: slider.span_count(),
            max_ticks: rules.config().slider_max_ticks,
        };

        let slider_time = timing.span_duration() * slider.span_count() as f64;

        // Paths that can't be traversed in time are never judged
        let (path, slider_time) =
            if slider_time.is_finite() && slider_time <= MAX_DURATION as f64 {
                (path, slider_time)
            } else {
                (None, 0.0)
            };

        let mut duration = slider_time as i64;

        if duration < 0 {
            duration = 1;
        }

        let clicks = if path.is_some() {
            timing.clicks()
        } else {
            Vec::new()
        };

        let slider = Self {
            path,
            span_count: slider.span_count(),
            slider_time,
            clicks,
            ball_pos: head,
            start: Judged::default(),
            end: Judged::default(),
            hold: HoldTracker::default(),
            cursor_inside: false,
            cursor_left: true,
            held_till_end: false,
            lenience_hack: false,
            lenience_checked: false,
            strict_last_held: None,
            strict_missed: false,
        };

        (slider, duration)
    }

    /// Repeats and ticks sorted by trigger time.
    pub fn clicks(&self) -> &[SliderClick] {
        &self.clicks
    }

    /// Current position of the slider ball.
    pub const fn ball_pos(&self) -> Pos {
        self.ball_pos
    }

    pub const fn span_count(&self) -> usize {
        self.span_count
    }

    /// Whether the slider head has been judged.
    pub const fn is_start_finished(&self) -> bool {
        self.start.finished
    }

    pub const fn start_result(&self) -> HitResult {
        self.start.result
    }

    pub const fn start_delta(&self) -> i64 {
        self.start.delta
    }

    pub const fn is_end_finished(&self) -> bool {
        self.end.finished
    }

    /// The aggregate judgement of the slider.
    pub const fn end_result(&self) -> HitResult {
        self.end.result
    }

    pub const fn is_cursor_inside(&self) -> bool {
        self.cursor_inside
    }

    pub const fn is_held_till_end(&self) -> bool {
        self.held_till_end
    }

    /// Whether the path has no control points, in which case the slider is
    /// never judged.
    pub const fn is_empty(&self) -> bool {
        self.path.is_none()
    }

    /// Progress along the path in `0.0..=1.0`, mirrored on reverse spans.
    fn path_progress(&self, cur_pos: i64, time: i64) -> f64 {
        let span_count = self.span_count as f64;

        let progress = if self.slider_time > 0.0 {
            ((cur_pos - time) as f64 / self.slider_time).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let span_at = |progress: f64| (progress * span_count) as i32;

        let p = progress * span_count % 1.0;

        if span_at(progress) % 2 == 1 {
            1.0 - p
        } else {
            p
        }
    }

    #[allow(clippy::too_many_lines)]
    pub(crate) fn update<S: JudgementSink>(
        &mut self,
        state: &mut ObjectState,
        cur_pos: i64,
        input: &InputState,
        rules: &GameRules,
        clicks: &mut ClickQueue,
        sink: &mut S,
    ) {
        if state.is_finished() {
            return;
        }

        let time = state.time;
        let end_time = state.end_time();

        let Some(ref path) = self.path else {
            if cur_pos >= end_time {
                self.start.finished = true;
                self.end.finished = true;
                state.finish();
            }

            return;
        };

        self.ball_pos = state.pos + path.position_at(self.path_progress(cur_pos, time));

        let auto = rules.auto();
        let relax = rules.relax();
        let held = auto || self.hold.is_held(input);

        let follow_radius = if self.cursor_left {
            rules.circle_radius()
        } else {
            rules.follow_radius()
        };

        self.cursor_inside = auto || is_inside(input.cursor, self.ball_pos, follow_radius);
        self.cursor_left = !self.cursor_inside;

        if !self.start.finished {
            if auto {
                if cur_pos >= time {
                    self.judge_head(state, HitResult::Hit300, 0, sink);
                }
            } else {
                if relax
                    && cur_pos >= time + rules.config().relax_offset
                    && is_inside(input.cursor, state.pos, rules.circle_radius())
                {
                    let delta = cur_pos - time;
                    let result = rules.hit_result(delta);

                    if result != HitResult::None {
                        let radius = rules.circle_radius();

                        if clicks
                            .front()
                            .is_some_and(|click| is_inside(click.pos, state.pos, radius))
                        {
                            if let Some(click) = clicks.consume_front() {
                                self.hold.pin(click.key);
                            }
                        }

                        self.judge_head(state, result, delta, sink);
                    }
                }

                let delta = cur_pos - time;

                if !self.start.finished && delta > rules.hit_window_50() as i64 {
                    self.judge_head(state, HitResult::Miss, delta, sink);
                }
            }
        }

        if self.end.finished {
            return;
        }

        let strict = rules.strict_tracking() && (self.start.finished || cur_pos >= time);

        let lenience_end = time
            .saturating_add(state.duration / 2)
            .max(end_time - rules.config().slider_end_inside_check_offset);

        let tracking = (held || relax) && self.cursor_inside;

        if tracking {
            if strict {
                self.strict_last_held = Some(cur_pos);
            }

            if cur_pos >= lenience_end && !self.lenience_checked {
                self.lenience_checked = true;
                self.lenience_hack = true;
            }
        } else {
            self.cursor_left = true;
        }

        if cur_pos >= lenience_end {
            self.lenience_checked = true;
        }

        if strict
            && self.strict_last_held.is_some()
            && !tracking
            && !self.lenience_hack
            && self.end.result == HitResult::None
        {
            log_event!(debug, time, cur_pos, "strict tracking miss");

            sink.add_slider_break();
            self.held_till_end = false;
            self.lenience_hack = false;
            self.lenience_checked = true;
            self.end.result = HitResult::Miss;
            self.strict_missed = true;

            let event = HitEvent::new(HitResult::Miss, 0, self.ball_pos)
                .end_of_combo(state.combo.end_of_combo)
                .increases_combo(false);

            sink.add_hit_result(event);
        }

        let success = (held && self.cursor_inside) || auto || (relax && self.cursor_inside);

        for click in self.clicks.iter_mut() {
            if click.finished || cur_pos < click.time {
                continue;
            }

            click.finished = true;
            click.successful = success;

            if success {
                let result = if click.is_repeat() {
                    HitResult::Slider30
                } else {
                    HitResult::Slider10
                };

                sink.add_hit_result(HitEvent::tick(result, self.ball_pos));
            } else {
                log_event!(debug, time = click.time, "slider break");

                sink.add_slider_break();
                sink.add_hit_result(HitEvent::health_only(
                    HitResult::MissSliderBreak,
                    self.ball_pos,
                ));
            }
        }

        if cur_pos < end_time {
            return;
        }

        if self.strict_missed {
            self.finish(state);

            return;
        }

        if !self.start.finished {
            self.start.finished = true;
            self.start.result = HitResult::Miss;
            sink.add_slider_break();
            sink.add_hit_result(HitEvent::health_only(HitResult::MissSliderBreak, state.pos));
        }

        if self.end.result == HitResult::None {
            self.held_till_end = auto || self.lenience_hack;

            let result = if auto {
                HitResult::Hit300
            } else {
                self.aggregate_result(rules)
            };

            self.end.result = result;

            let mut broke_combo = false;

            if !self.held_till_end && rules.config().slider_end_miss_breaks_combo {
                sink.add_slider_break();
                broke_combo = true;
            }

            if result == HitResult::Miss && !broke_combo {
                sink.add_slider_break();
            }

            log_event!(debug, time, ?result, held = self.held_till_end, "slider judged");

            let event = HitEvent::new(result, 0, self.ball_pos)
                .end_of_combo(state.combo.end_of_combo)
                .increases_combo(self.held_till_end)
                .on_hit_error_bar(false);

            sink.add_hit_result(event);

            if self.held_till_end {
                sink.add_score_points(30);
            }
        }

        self.finish(state);
    }

    pub(crate) fn on_click<S: JudgementSink>(
        &mut self,
        state: &mut ObjectState,
        clicks: &mut ClickQueue,
        rules: &GameRules,
        sink: &mut S,
    ) {
        if state.is_finished() || state.blocked || self.start.finished || self.path.is_none() {
            return;
        }

        let Some(&click) = clicks.front() else {
            return;
        };

        if !is_inside(click.pos, state.pos, rules.circle_radius()) {
            return;
        }

        let delta = click.time - state.time;
        let result = rules.hit_result(delta);

        if result != HitResult::None {
            clicks.consume_front();
            self.hold.pin(click.key);
            self.judge_head(state, result, delta, sink);
        }
    }

    pub(crate) fn on_reset(&mut self, state: &mut ObjectState, cur_pos: i64, rules: &GameRules) {
        self.start = Judged::default();
        self.end = Judged::default();
        self.hold.reset();
        self.cursor_inside = false;
        self.cursor_left = true;
        self.held_till_end = false;
        self.lenience_hack = false;
        self.lenience_checked = false;
        self.strict_last_held = None;
        self.strict_missed = false;

        for click in self.clicks.iter_mut() {
            let passed = cur_pos > click.time;
            click.finished = passed;
            click.successful = passed;
        }

        let finished = if cur_pos < state.time {
            false
        } else if cur_pos < state.end_time() {
            self.start.finished = true;

            false
        } else {
            self.start.finished = true;
            self.end.finished = true;

            true
        };

        state.reset(cur_pos, finished, rules);
    }

    fn judge_head<S: JudgementSink>(
        &mut self,
        state: &ObjectState,
        result: HitResult,
        delta: i64,
        sink: &mut S,
    ) {
        log_event!(debug, time = state.time, delta, ?result, "slider head judged");

        self.start = Judged {
            finished: true,
            result,
            delta,
        };

        if result == HitResult::Miss {
            sink.add_slider_break();
            sink.add_hit_result(HitEvent::health_only(HitResult::MissSliderBreak, state.pos));
        } else {
            let event = HitEvent::new(HitResult::Slider30, delta, state.pos)
                .counts_for_accuracy(false)
                .increases_score(false)
                .on_hit_error_bar(true);

            sink.add_hit_result(event);
            sink.add_score_points(30);
        }
    }

    fn aggregate_result(&self, rules: &GameRules) -> HitResult {
        let config = rules.config();

        let successful_clicks = self.clicks.iter().filter(|click| click.successful).count();

        let actual = usize::from(self.start.result.is_hit())
            + usize::from(self.held_till_end)
            + successful_clicks;

        let max = 2 + self.clicks.len();
        let percent = actual as f64 / max as f64;

        let (allow_300, allow_100) = if rules.slider_score_v2() {
            (
                self.start.result == HitResult::Hit300,
                matches!(self.start.result, HitResult::Hit300 | HitResult::Hit100),
            )
        } else {
            (true, true)
        };

        if percent >= 0.999 && allow_300 {
            HitResult::Hit300
        } else if percent >= 0.5 && allow_100 && config.allows_100s() {
            HitResult::Hit100
        } else if percent > 0.0 && config.allows_50s() {
            HitResult::Hit50
        } else {
            HitResult::Miss
        }
    }

    fn finish(&mut self, state: &mut ObjectState) {
        self.end.finished = true;
        state.finish();
    }
}
