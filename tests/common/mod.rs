#![allow(dead_code)]

use rosu_judge::{
    model::{
        control_point::TimingPoint,
        hit_object::{HitObject, PathControlPoint, PathType, Pos, Slider},
    },
    osu::{Frame, GameplayKey, HitEvent, HitResult, JudgementSink, KeyState, Playfield},
    Beatmap,
};

/// Everything a [`JudgementSink`] received, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Hit(HitEvent),
    SliderBreak,
    ScorePoints(u32),
}

#[derive(Default)]
pub struct Recorder {
    pub records: Vec<Record>,
}

impl JudgementSink for Recorder {
    fn add_hit_result(&mut self, event: HitEvent) {
        self.records.push(Record::Hit(event));
    }

    fn add_slider_break(&mut self) {
        self.records.push(Record::SliderBreak);
    }

    fn add_score_points(&mut self, points: u32) {
        self.records.push(Record::ScorePoints(points));
    }
}

impl Recorder {
    pub fn events(&self) -> impl Iterator<Item = &HitEvent> {
        self.records.iter().filter_map(|record| match record {
            Record::Hit(event) => Some(event),
            Record::SliderBreak | Record::ScorePoints(_) => None,
        })
    }

    pub fn results(&self) -> Vec<HitResult> {
        self.events().map(|event| event.result).collect()
    }

    /// Results of events that count for accuracy.
    pub fn judgements(&self) -> Vec<HitResult> {
        self.events()
            .filter(|event| event.counts_for_accuracy)
            .map(|event| event.result)
            .collect()
    }

    pub fn slider_breaks(&self) -> usize {
        self.records
            .iter()
            .filter(|record| matches!(record, Record::SliderBreak))
            .count()
    }

    pub fn score_points(&self) -> u32 {
        self.records
            .iter()
            .map(|record| match record {
                Record::ScorePoints(points) => *points,
                Record::Hit(_) | Record::SliderBreak => 0,
            })
            .sum()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Beat length that results in a slider velocity of 0.125 osu!pixels per
/// millisecond with a slider multiplier of 1.0.
pub const BEAT_LEN: f64 = 800.0;

/// Slider length for a span duration of exactly 1000ms.
pub const SLIDER_LEN: f64 = 125.0;

pub fn map(hit_objects: Vec<HitObject>) -> Beatmap {
    Beatmap {
        slider_multiplier: 1.0,
        slider_tick_rate: 2.0,
        timing_points: vec![TimingPoint::new(0.0, BEAT_LEN)],
        hit_objects,
        ..Beatmap::default()
    }
}

pub fn circle(x: f32, y: f32, time: f64) -> HitObject {
    HitObject::circle(Pos::new(x, y), time)
}

/// A horizontal slider moving to the right.
pub fn slider(x: f32, y: f32, time: f64, len: f64, repeats: usize) -> HitObject {
    let mut head = PathControlPoint::new(Pos::new(0.0, 0.0));
    head.path_type = Some(PathType::LINEAR);
    let tail = PathControlPoint::new(Pos::new(len as f32, 0.0));

    let slider = Slider {
        expected_dist: Some(len),
        repeats,
        control_points: vec![head, tail].into_boxed_slice(),
    };

    HitObject::slider(Pos::new(x, y), time, slider)
}

pub fn keys(keys: &[GameplayKey]) -> KeyState {
    keys.iter().copied().collect()
}

/// Updates the playfield every `step` milliseconds in `start..=end`.
pub fn play<F>(
    playfield: &mut Playfield,
    sink: &mut Recorder,
    start: i64,
    end: i64,
    step: usize,
    mut frame: F,
) where
    F: FnMut(i64) -> Frame,
{
    for cur_pos in (start..=end).step_by(step) {
        playfield.update(cur_pos, frame(cur_pos), sink);
    }
}
