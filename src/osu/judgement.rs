use rosu_map::util::Pos;

use super::hit_result::HitResult;

/// Where a click landed relative to an object, used by Target Practice.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TargetOffset {
    /// Distance to the object's center divided by the circle radius.
    pub delta: f64,
    /// Angle in degrees.
    pub angle: f64,
}

impl TargetOffset {
    pub(crate) fn new(click: Pos, center: Pos, radius: f64) -> Self {
        let offset = click - center;

        Self {
            delta: f64::from(offset.length()) / radius,
            angle: f64::from(offset.y).atan2(f64::from(offset.x)).to_degrees(),
        }
    }
}

/// A judgement as it is reported to a [`JudgementSink`].
///
/// The flags describe which parts of the score state the judgement applies
/// to so that sub-judgements like slider ticks or health-only drains share
/// the same event type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitEvent {
    pub result: HitResult,
    /// Signed timing offset in milliseconds, positive meaning late.
    pub delta: i64,
    /// Whether the judged object is the last of its combo.
    pub end_of_combo: bool,
    pub pos: Pos,
    pub target: Option<TargetOffset>,
    pub counts_for_accuracy: bool,
    pub increases_combo: bool,
    pub increases_score: bool,
    pub affects_health: bool,
    pub on_hit_error_bar: bool,
}

impl HitEvent {
    /// A regular judgement that affects accuracy, combo, score, and health.
    ///
    /// Only hits end up on the hit error bar.
    pub const fn new(result: HitResult, delta: i64, pos: Pos) -> Self {
        Self {
            result,
            delta,
            end_of_combo: false,
            pos,
            target: None,
            counts_for_accuracy: true,
            increases_combo: true,
            increases_score: true,
            affects_health: true,
            on_hit_error_bar: result.is_hit(),
        }
    }

    /// A judgement that only affects health.
    pub const fn health_only(result: HitResult, pos: Pos) -> Self {
        Self {
            result,
            delta: 0,
            end_of_combo: false,
            pos,
            target: None,
            counts_for_accuracy: false,
            increases_combo: false,
            increases_score: false,
            affects_health: true,
            on_hit_error_bar: false,
        }
    }

    /// A slider tick or repeat: combo, score, and health but no accuracy.
    pub const fn tick(result: HitResult, pos: Pos) -> Self {
        Self {
            counts_for_accuracy: false,
            on_hit_error_bar: false,
            ..Self::new(result, 0, pos)
        }
    }

    #[must_use]
    pub const fn end_of_combo(self, end_of_combo: bool) -> Self {
        Self {
            end_of_combo,
            ..self
        }
    }

    #[must_use]
    pub const fn target(self, target: Option<TargetOffset>) -> Self {
        Self { target, ..self }
    }

    #[must_use]
    pub const fn increases_combo(self, increases_combo: bool) -> Self {
        Self {
            increases_combo,
            ..self
        }
    }

    #[must_use]
    pub const fn increases_score(self, increases_score: bool) -> Self {
        Self {
            increases_score,
            ..self
        }
    }

    #[must_use]
    pub const fn counts_for_accuracy(self, counts_for_accuracy: bool) -> Self {
        Self {
            counts_for_accuracy,
            ..self
        }
    }

    #[must_use]
    pub const fn on_hit_error_bar(self, on_hit_error_bar: bool) -> Self {
        Self {
            on_hit_error_bar,
            ..self
        }
    }
}

/// Receives judgements and keeps track of score, combo, and health.
///
/// [`LiveScore`] is a complete implementation; custom sinks may forward
/// events elsewhere.
///
/// [`LiveScore`]: crate::osu::LiveScore
pub trait JudgementSink {
    fn add_hit_result(&mut self, event: HitEvent);

    /// Reset the combo due to a failed slider sub-judgement.
    fn add_slider_break(&mut self);

    /// Add flat bonus points, e.g. for slider heads or spinner spins.
    fn add_score_points(&mut self, points: u32);
}

impl<S: JudgementSink + ?Sized> JudgementSink for &mut S {
    fn add_hit_result(&mut self, event: HitEvent) {
        (**self).add_hit_result(event);
    }

    fn add_slider_break(&mut self) {
        (**self).add_slider_break();
    }

    fn add_score_points(&mut self, points: u32) {
        (**self).add_score_points(points);
    }
}
