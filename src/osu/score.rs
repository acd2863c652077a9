use crate::{
    model::beatmap::Beatmap,
    util::{difficulty::difficulty_range, ruleset_ext::calculate_difficulty_peppy_stars},
};

use super::{
    hit_result::HitResult,
    judgement::{HitEvent, JudgementSink},
    playfield::Playfield,
};

/// A [`JudgementSink`] keeping track of score, combo, accuracy, and health
/// the way osu!stable does.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveScore {
    n300: u32,
    n100: u32,
    n50: u32,
    misses: u32,
    slider_breaks: u32,
    combo: u32,
    max_combo: u32,
    score: u64,
    score_multiplier: f64,
    health: f64,
    miss_drain: f64,
    hit_errors: Vec<i64>,
}

impl LiveScore {
    pub const MAX_HEALTH: f64 = 200.0;

    /// Create a new [`LiveScore`].
    ///
    /// `hp` is the map's mod-adjusted drain rate and `score_multiplier` is
    /// applied onto the combo portion of each judgement.
    pub fn new(hp: f64, score_multiplier: f64) -> Self {
        Self {
            n300: 0,
            n100: 0,
            n50: 0,
            misses: 0,
            slider_breaks: 0,
            combo: 0,
            max_combo: 0,
            score: 0,
            score_multiplier,
            health: Self::MAX_HEALTH,
            miss_drain: difficulty_range(hp, 6.0, 25.0, 40.0),
            hit_errors: Vec::new(),
        }
    }

    /// Create a new [`LiveScore`] for a map played on the given playfield.
    ///
    /// The score multiplier is based on the map's attributes without mods.
    pub fn for_map(map: &Beatmap, playfield: &Playfield) -> Self {
        let map_attrs = map.attributes().build();
        let object_count = playfield.objects().len() as i32;
        let drain_len = playfield.drain_len();
        let multiplier = calculate_difficulty_peppy_stars(&map_attrs, object_count, drain_len);

        Self::new(playfield.rules().attributes().hp, f64::from(multiplier))
    }

    pub const fn n300(&self) -> u32 {
        self.n300
    }

    pub const fn n100(&self) -> u32 {
        self.n100
    }

    pub const fn n50(&self) -> u32 {
        self.n50
    }

    pub const fn misses(&self) -> u32 {
        self.misses
    }

    pub const fn slider_breaks(&self) -> u32 {
        self.slider_breaks
    }

    pub const fn combo(&self) -> u32 {
        self.combo
    }

    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Health between `0.0` and [`LiveScore::MAX_HEALTH`].
    pub const fn health(&self) -> f64 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Timing offsets of all hits in milliseconds.
    pub fn hit_errors(&self) -> &[i64] {
        &self.hit_errors
    }

    /// Total amount of judgements that count for accuracy.
    pub const fn total_hits(&self) -> u32 {
        self.n300 + self.n100 + self.n50 + self.misses
    }

    /// Accuracy between `0.0` and `1.0`.
    pub fn accuracy(&self) -> f64 {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 1.0;
        }

        let numerator = 300 * self.n300 + 100 * self.n100 + 50 * self.n50;
        let denominator = 300 * total_hits;

        f64::from(numerator) / f64::from(denominator)
    }

    /// Standard deviation of hit errors times ten.
    pub fn unstable_rate(&self) -> f64 {
        if self.hit_errors.is_empty() {
            return 0.0;
        }

        let len = self.hit_errors.len() as f64;
        let mean = self.hit_errors.iter().map(|&e| e as f64).sum::<f64>() / len;

        let variance = self
            .hit_errors
            .iter()
            .map(|&e| (e as f64 - mean).powi(2))
            .sum::<f64>()
            / len;

        variance.sqrt() * 10.0
    }

    fn health_change(&self, result: HitResult) -> f64 {
        match result {
            HitResult::Hit300 => 6.0,
            HitResult::Hit100 => 2.2,
            HitResult::Hit50 => 0.4,
            HitResult::Slider30 => 4.0,
            HitResult::Slider10 => 3.0,
            HitResult::Miss | HitResult::MissSliderBreak => -self.miss_drain,
            HitResult::None => 0.0,
        }
    }
}

impl JudgementSink for LiveScore {
    fn add_hit_result(&mut self, event: HitEvent) {
        let result = event.result;

        if event.counts_for_accuracy {
            match result {
                HitResult::Hit300 => self.n300 += 1,
                HitResult::Hit100 => self.n100 += 1,
                HitResult::Hit50 => self.n50 += 1,
                HitResult::Miss => self.misses += 1,
                _ => {}
            }
        }

        if event.increases_score {
            let value = result.base_score();
            self.score += u64::from(value);

            if event.counts_for_accuracy {
                let factor = f64::from(self.combo.saturating_sub(1)) * f64::from(value / 25);
                self.score += (factor * self.score_multiplier) as u64;
            }
        }

        if event.increases_combo {
            if result.is_miss() {
                self.combo = 0;
            } else {
                self.combo += 1;
                self.max_combo = self.max_combo.max(self.combo);
            }
        }

        if event.affects_health {
            self.health = (self.health + self.health_change(result)).clamp(0.0, Self::MAX_HEALTH);
        }

        if event.on_hit_error_bar {
            self.hit_errors.push(event.delta);
        }
    }

    fn add_slider_break(&mut self) {
        self.slider_breaks += 1;
        self.combo = 0;
    }

    fn add_score_points(&mut self, points: u32) {
        self.score += u64::from(points);
    }
}
