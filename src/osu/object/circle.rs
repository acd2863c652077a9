use rosu_map::util::Pos;

use crate::osu::{
    hit_result::HitResult,
    input::{ClickQueue, InputState},
    judgement::{HitEvent, JudgementSink, TargetOffset},
    rules::GameRules,
};

use super::state::ObjectState;

/// Judgement state of a hit circle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    result: HitResult,
    delta: i64,
    shake_time: Option<i64>,
}

impl Circle {
    /// The committed judgement, [`HitResult::None`] while pending.
    pub const fn result(&self) -> HitResult {
        self.result
    }

    /// The timing offset of the committed judgement.
    pub const fn delta(&self) -> i64 {
        self.delta
    }

    /// Time of the last click that was rejected because of note lock.
    pub const fn shake_time(&self) -> Option<i64> {
        self.shake_time
    }

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

        if rules.auto() {
            if cur_pos >= state.time {
                self.commit(state, HitResult::Hit300, 0, None, rules, sink);
            }

            return;
        }

        if rules.relax() && cur_pos >= state.time + rules.config().relax_offset {
            let radius = rules.circle_radius();

            if is_inside(input.cursor, state.pos, radius) {
                let delta = cur_pos - state.time;
                let result = rules.hit_result(delta);

                if result != HitResult::None {
                    if clicks
                        .front()
                        .is_some_and(|click| is_inside(click.pos, state.pos, radius))
                    {
                        clicks.consume_front();
                    }

                    let target = TargetOffset::new(input.cursor, state.pos, radius);
                    self.commit(state, result, delta, Some(target), rules, sink);

                    return;
                }
            }
        }

        let delta = cur_pos - state.time;

        if delta > rules.hit_window_50() as i64 {
            self.commit(state, HitResult::Miss, delta, None, rules, sink);
        }
    }

    pub(crate) fn on_click<S: JudgementSink>(
        &mut self,
        state: &mut ObjectState,
        clicks: &mut ClickQueue,
        rules: &GameRules,
        sink: &mut S,
    ) {
        if state.is_finished() {
            return;
        }

        let Some(&click) = clicks.front() else {
            return;
        };

        if !is_inside(click.pos, state.pos, rules.circle_radius()) {
            return;
        }

        if state.blocked {
            log_event!(trace, time = click.time, "note lock shake");
            self.shake_time = Some(click.time);

            return;
        }

        let delta = click.time - state.time;
        let result = rules.hit_result(delta);

        if result != HitResult::None {
            clicks.consume_front();
            let target = TargetOffset::new(click.pos, state.pos, rules.circle_radius());
            self.commit(state, result, delta, Some(target), rules, sink);
        }
    }

    pub(crate) fn on_reset(&mut self, state: &mut ObjectState, cur_pos: i64, rules: &GameRules) {
        *self = Self::default();
        state.reset(cur_pos, state.time <= cur_pos, rules);
    }

    fn commit<S: JudgementSink>(
        &mut self,
        state: &mut ObjectState,
        mut result: HitResult,
        delta: i64,
        target: Option<TargetOffset>,
        rules: &GameRules,
        sink: &mut S,
    ) {
        if let Some(target) = target.filter(|_| rules.target_practice()) {
            result = rules.target_result(result, target.delta);
        }

        log_event!(debug, time = state.time, delta, ?result, "circle judged");

        self.result = result;
        self.delta = delta;
        state.finish();

        let event = HitEvent::new(result, delta, state.pos)
            .end_of_combo(state.combo.end_of_combo)
            .target(target);

        sink.add_hit_result(event);
    }
}

pub(crate) fn is_inside(pos: Pos, center: Pos, radius: f64) -> bool {
    f64::from((pos - center).length()) < radius
}
