/// What a [`SliderClick`] represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SliderClickKind {
    Repeat,
    /// A tick; `index` is the position within its span.
    Tick { index: usize },
}

/// A repeat or tick of a slider with its fixed trigger time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SliderClick {
    pub time: i64,
    pub kind: SliderClickKind,
    pub finished: bool,
    pub successful: bool,
}

impl SliderClick {
    const fn new(time: i64, kind: SliderClickKind) -> Self {
        Self {
            time,
            kind,
            finished: false,
            successful: false,
        }
    }

    pub const fn is_repeat(&self) -> bool {
        matches!(self.kind, SliderClickKind::Repeat)
    }

    pub const fn is_tick(&self) -> bool {
        matches!(self.kind, SliderClickKind::Tick { .. })
    }
}

/// Geometry and timing needed to place a slider's repeats and ticks.
pub(crate) struct SliderTiming {
    pub time: i64,
    /// Path length in osu!pixels.
    pub len: f64,
    /// Osu!pixels per millisecond.
    pub velocity: f64,
    pub tick_dist: f64,
    pub span_count: usize,
    pub max_ticks: usize,
}

impl SliderTiming {
    pub(crate) fn span_duration(&self) -> f64 {
        self.len / self.velocity
    }

    /// Tick positions as fractions of a single span, sorted ascending.
    ///
    /// Ticks too close to the span's end are skipped.
    pub(crate) fn tick_percents(&self) -> Vec<f64> {
        let len = self.len.abs();

        if !(self.tick_dist.is_finite() && self.tick_dist > 0.0 && len.is_finite()) {
            return Vec::new();
        }

        let tick_count = ((len / self.tick_dist).ceil() - 1.0).min(self.max_ticks as f64);

        if tick_count.is_nan() || tick_count < 1.0 {
            return Vec::new();
        }

        let tick_pct = self.tick_dist / len.max(1.0);
        let min_remaining = self.velocity * 10.0;

        let mut percents = Vec::with_capacity(tick_count as usize);
        let mut t = tick_pct;

        for _ in 0..tick_count as usize {
            if (1.0 - t) * len <= min_remaining {
                break;
            }

            percents.push(t);
            t += tick_pct;
        }

        percents
    }

    /// All repeats and ticks sorted by trigger time.
    pub(crate) fn clicks(&self) -> Vec<SliderClick> {
        let span_duration = self.span_duration();

        if !span_duration.is_finite() {
            return Vec::new();
        }

        let percents = self.tick_percents();
        let repeats = self.span_count.saturating_sub(1);
        let mut clicks = Vec::with_capacity(repeats + percents.len() * self.span_count);

        for i in 0..repeats {
            let time = self.time + (span_duration * (i + 1) as f64) as i64;
            clicks.push(SliderClick::new(time, SliderClickKind::Repeat));
        }

        for span in 0..self.span_count {
            let span_start = self.time + (span_duration * span as f64) as i64;

            for (index, &percent) in percents.iter().enumerate() {
                // Ticks are placed in the direction of travel
                let percent = if span % 2 == 0 { percent } else { 1.0 - percent };
                let time = span_start + (percent * span_duration) as i64;
                clicks.push(SliderClick::new(time, SliderClickKind::Tick { index }));
            }
        }

        clicks.sort_by_key(|click| click.time);

        clicks
    }
}
