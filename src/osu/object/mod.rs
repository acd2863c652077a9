use rosu_map::{section::hit_objects::CurveBuffers, util::Pos};

use crate::model::{
    beatmap::Beatmap,
    hit_object::{HitObject, HitObjectKind},
};

use super::{
    hit_result::HitResult,
    input::{ClickQueue, InputState},
    judgement::JudgementSink,
    rules::GameRules,
};

pub use self::{
    circle::Circle,
    slider::{Slider, SliderClick, SliderClickKind},
    spinner::Spinner,
    state::{ComboInfo, Lifecycle, ObjectState, Visuals},
};

use self::state::MAX_DURATION;

mod circle;
mod slider;
mod spinner;
mod state;

/// A hit object during gameplay.
#[derive(Clone, Debug)]
pub struct OsuObject {
    pub(crate) state: ObjectState,
    pub(crate) kind: OsuObjectKind,
}

/// Kind-specific judgement state of an [`OsuObject`].
#[derive(Clone, Debug)]
pub enum OsuObjectKind {
    Circle(Circle),
    Slider(Slider),
    Spinner(Spinner),
}

impl OsuObject {
    pub(crate) fn new(
        h: &HitObject,
        map: &Beatmap,
        rules: &GameRules,
        combo: ComboInfo,
        curve_bufs: &mut CurveBuffers,
    ) -> Self {
        let time = h.start_time as i64;
        let pos = h.reflected_pos(rules.reflection());

        let (kind, duration) = match h.kind {
            HitObjectKind::Circle => (OsuObjectKind::Circle(Circle::default()), 0),
            HitObjectKind::Slider(ref slider) => {
                let (slider, duration) =
                    Slider::new(h.start_time, pos, slider, map, rules, curve_bufs);

                (OsuObjectKind::Slider(slider), duration)
            }
            HitObjectKind::Spinner(ref spinner) => {
                let duration = (spinner.duration as i64).clamp(0, MAX_DURATION);

                (
                    OsuObjectKind::Spinner(Spinner::new(duration, rules)),
                    duration,
                )
            }
        };

        Self {
            state: ObjectState::new(time, duration, pos, combo),
            kind,
        }
    }

    /// Advance the object to `cur_pos`.
    ///
    /// Handles the lifecycle, auto and relax hits, timeouts, and slider
    /// ticks.
    pub fn update<S: JudgementSink>(
        &mut self,
        cur_pos: i64,
        input: &InputState,
        rules: &GameRules,
        clicks: &mut ClickQueue,
        sink: &mut S,
    ) {
        self.state.update(cur_pos, rules);

        match self.kind {
            OsuObjectKind::Circle(ref mut circle) => {
                circle.update(&mut self.state, cur_pos, input, rules, clicks, sink);
            }
            OsuObjectKind::Slider(ref mut slider) => {
                slider.update(&mut self.state, cur_pos, input, rules, clicks, sink);
            }
            OsuObjectKind::Spinner(ref mut spinner) => {
                spinner.update(&mut self.state, cur_pos, input, rules, sink);
            }
        }
    }

    /// Offer the front click of the queue to the object.
    pub fn on_click<S: JudgementSink>(
        &mut self,
        clicks: &mut ClickQueue,
        rules: &GameRules,
        sink: &mut S,
    ) {
        match self.kind {
            OsuObjectKind::Circle(ref mut circle) => {
                circle.on_click(&mut self.state, clicks, rules, sink);
            }
            OsuObjectKind::Slider(ref mut slider) => {
                slider.on_click(&mut self.state, clicks, rules, sink);
            }
            OsuObjectKind::Spinner(_) => {}
        }
    }

    /// Re-derive the object's state for `cur_pos` as if everything before
    /// it was judged, e.g. after seeking.
    pub fn on_reset(&mut self, cur_pos: i64, rules: &GameRules) {
        match self.kind {
            OsuObjectKind::Circle(ref mut circle) => {
                circle.on_reset(&mut self.state, cur_pos, rules);
            }
            OsuObjectKind::Slider(ref mut slider) => {
                slider.on_reset(&mut self.state, cur_pos, rules);
            }
            OsuObjectKind::Spinner(ref mut spinner) => {
                spinner.on_reset(&mut self.state, cur_pos, rules);
            }
        }
    }

    pub const fn kind(&self) -> &OsuObjectKind {
        &self.kind
    }

    pub const fn state(&self) -> &ObjectState {
        &self.state
    }

    /// Start time in milliseconds.
    pub const fn time(&self) -> i64 {
        self.state.time
    }

    pub const fn duration(&self) -> i64 {
        self.state.duration
    }

    pub const fn end_time(&self) -> i64 {
        self.state.end_time()
    }

    /// Position on the playfield after applying mod reflections.
    pub const fn pos(&self) -> Pos {
        self.state.pos
    }

    pub const fn combo(&self) -> ComboInfo {
        self.state.combo
    }

    pub const fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    pub const fn visuals(&self) -> Visuals {
        self.state.visuals
    }

    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Whether clicks on this object are rejected because of note lock.
    pub const fn is_blocked(&self) -> bool {
        self.state.blocked
    }

    /// The object's final judgement, [`HitResult::None`] while pending.
    pub const fn result(&self) -> HitResult {
        match self.kind {
            OsuObjectKind::Circle(ref circle) => circle.result(),
            OsuObjectKind::Slider(ref slider) => slider.end_result(),
            OsuObjectKind::Spinner(ref spinner) => spinner.result(),
        }
    }

    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Circle(_))
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Slider(_))
    }

    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Spinner(_))
    }

    pub const fn as_slider(&self) -> Option<&Slider> {
        match self.kind {
            OsuObjectKind::Slider(ref slider) => Some(slider),
            OsuObjectKind::Circle(_) | OsuObjectKind::Spinner(_) => None,
        }
    }

    pub const fn as_circle(&self) -> Option<&Circle> {
        match self.kind {
            OsuObjectKind::Circle(ref circle) => Some(circle),
            OsuObjectKind::Slider(_) | OsuObjectKind::Spinner(_) => None,
        }
    }

    pub const fn as_spinner(&self) -> Option<&Spinner> {
        match self.kind {
            OsuObjectKind::Spinner(ref spinner) => Some(spinner),
            OsuObjectKind::Circle(_) | OsuObjectKind::Slider(_) => None,
        }
    }

    /// Whether the object is a slider whose head has been judged.
    pub(crate) const fn is_slider_head_judged(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Slider(ref slider) if slider.is_start_finished())
    }
}
