use rosu_map::section::hit_objects::CurveBuffers;

use crate::model::{beatmap::Beatmap, mode::ConvertError, mods::GameMods};

use super::{
    config::{GameplayConfig, NoteLock},
    input::{Click, ClickQueue, Frame, InputState, KeyState},
    judgement::JudgementSink,
    object::{ComboInfo, OsuObject},
    rules::GameRules,
};

/// All objects of a beatmap alongside the pending clicks.
///
/// Each call to [`Playfield::update`] is a single deterministic pass over
/// all objects in start time order.
///
/// # Example
///
/// ```
/// use rosu_judge::{
///     model::hit_object::{HitObject, Pos},
///     osu::{Click, Frame, GameplayConfig, GameplayKey, KeyState, LiveScore, Playfield},
///     Beatmap,
/// };
///
/// let map = Beatmap {
///     hit_objects: vec![HitObject::circle(Pos::new(256.0, 192.0), 1000.0)],
///     ..Beatmap::default()
/// };
///
/// let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
/// let mut score = LiveScore::for_map(&map, &playfield);
///
/// let cursor = Pos::new(256.0, 192.0);
/// playfield.push_click(Click::new(1010, cursor, GameplayKey::K1));
/// playfield.update(1010, Frame::new(cursor, KeyState::from(GameplayKey::K1)), &mut score);
///
/// assert_eq!(score.n300(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Playfield {
    objects: Vec<OsuObject>,
    rules: GameRules,
    clicks: ClickQueue,
    prev_keys: KeyState,
}

impl Playfield {
    /// Create a new [`Playfield`] for an osu!standard map.
    pub fn new(
        map: &Beatmap,
        mods: impl Into<GameMods>,
        config: GameplayConfig,
    ) -> Result<Self, ConvertError> {
        map.check_mode()?;
        let rules = GameRules::from_map(map, mods, config);

        Ok(Self::with_rules(map, rules))
    }

    /// Create a new [`Playfield`] with pre-built [`GameRules`].
    ///
    /// The map's mode is not checked.
    pub fn with_rules(map: &Beatmap, rules: GameRules) -> Self {
        let mut hit_objects: Vec<_> = map.hit_objects.iter().collect();
        hit_objects.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        let mut curve_bufs = CurveBuffers::default();
        let mut objects = Vec::with_capacity(hit_objects.len());

        let mut combo = ComboInfo::default();
        let mut prev_spinner = false;

        for (i, h) in hit_objects.iter().enumerate() {
            if i == 0 || h.new_combo || h.is_spinner() || prev_spinner {
                combo.number = 1;

                if i > 0 {
                    combo.color_counter += 1 + h.combo_offset.max(0) as u32;
                }

                combo.color_offset = h.combo_offset;
            } else {
                combo.number += 1;
            }

            combo.end_of_combo = hit_objects
                .get(i + 1)
                .is_none_or(|next| next.new_combo || next.is_spinner() || h.is_spinner());

            prev_spinner = h.is_spinner();
            objects.push(OsuObject::new(h, map, &rules, combo, &mut curve_bufs));
        }

        Self {
            objects,
            rules,
            clicks: ClickQueue::new(),
            prev_keys: KeyState::NONE,
        }
    }

    pub fn objects(&self) -> &[OsuObject] {
        &self.objects
    }

    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Clicks that will be offered on the next update.
    pub const fn clicks(&self) -> &ClickQueue {
        &self.clicks
    }

    /// Queue a click for the next update.
    pub fn push_click(&mut self, click: Click) {
        self.clicks.push(click);
    }

    /// Whole seconds from the first object's start to the last object's end.
    pub fn drain_len(&self) -> i32 {
        let Some(first) = self.objects.first() else {
            return 0;
        };

        let end = self
            .objects
            .iter()
            .map(OsuObject::end_time)
            .max()
            .unwrap_or(first.time());

        i32::try_from((end - first.time()) / 1000).unwrap_or(i32::MAX)
    }

    /// Whether all objects are judged.
    pub fn is_finished(&self) -> bool {
        self.objects.iter().all(OsuObject::is_finished)
    }

    /// Advance all objects to `cur_pos` and offer them the queued clicks.
    ///
    /// Clicks that no object consumed are dropped afterwards.
    pub fn update<S: JudgementSink>(&mut self, cur_pos: i64, frame: Frame, sink: &mut S) {
        let input = InputState::new(frame, self.prev_keys);
        let config = *self.rules.config();
        let tolerance = config.note_lock_2b_tolerance;

        let mut block_next = false;

        for i in 0..self.objects.len() {
            let next_time = self.objects.get(i + 1).map(OsuObject::time);
            let obj = &mut self.objects[i];

            obj.update(cur_pos, &input, &self.rules, &mut self.clicks, sink);
            obj.state.blocked = block_next;

            if obj.is_finished() {
                continue;
            }

            // Sliders with a judged head and spinners let objects through
            // that start while they are still active
            let allows_2b = |obj: &OsuObject| {
                (obj.is_slider_head_judged() || obj.is_spinner())
                    && next_time
                        .is_some_and(|next| next <= obj.end_time().saturating_add(tolerance))
            };

            match config.note_lock {
                NoteLock::None => {}
                NoteLock::Stable => {
                    if !allows_2b(obj) {
                        block_next = true;
                    }
                }
                NoteLock::Lazer => {
                    let blocks = obj.is_circle()
                        || (obj.is_slider() && !obj.is_slider_head_judged());

                    if blocks && cur_pos <= obj.time() {
                        block_next = true;
                    }
                }
            }

            if self.clicks.is_empty() {
                continue;
            }

            let head_was_judged = obj.is_slider_head_judged();
            obj.on_click(&mut self.clicks, &self.rules, sink);

            if obj.is_finished() {
                block_next = false;
            } else if config.note_lock == NoteLock::Stable
                && !head_was_judged
                && allows_2b(obj)
            {
                block_next = false;
            }
        }

        self.clicks.clear();
        self.prev_keys = frame.keys;
    }

    /// Re-derive all object states for `cur_pos`, e.g. after seeking.
    ///
    /// Pending clicks and key history are discarded.
    pub fn reset(&mut self, cur_pos: i64) {
        log_event!(debug, cur_pos, "playfield reset");

        for obj in self.objects.iter_mut() {
            obj.on_reset(cur_pos, &self.rules);
        }

        self.clicks.clear();
        self.prev_keys = KeyState::NONE;
    }
}
