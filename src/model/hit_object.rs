use std::borrow::Cow;

use rosu_map::section::{
    general::GameMode,
    hit_objects::{Curve, CurveBuffers},
};

pub use rosu_map::{
    section::hit_objects::{PathControlPoint, PathType},
    util::Pos,
};

use crate::{
    model::mods::Reflection,
    osu::{PLAYFIELD_BASE_SIZE, PLAYFIELD_CENTER},
};

/// A hit object as it is placed in the beatmap.
///
/// Positions are in osu!pixels and times in milliseconds of song time.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    /// Whether the object starts a new combo.
    pub new_combo: bool,
    /// Amount of combo colours to skip.
    pub combo_offset: i32,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// A circle at the given position and time.
    pub const fn circle(pos: Pos, start_time: f64) -> Self {
        Self::new(pos, start_time, false, HitObjectKind::Circle)
    }

    /// A slider whose head is at the given position and time.
    pub const fn slider(pos: Pos, start_time: f64, slider: Slider) -> Self {
        Self::new(pos, start_time, false, HitObjectKind::Slider(slider))
    }

    /// A spinner in the center of the playfield.
    ///
    /// Spinners always start a new combo.
    pub const fn spinner(start_time: f64, duration: f64) -> Self {
        let kind = HitObjectKind::Spinner(Spinner { duration });

        Self::new(PLAYFIELD_CENTER, start_time, true, kind)
    }

    const fn new(pos: Pos, start_time: f64, new_combo: bool, kind: HitObjectKind) -> Self {
        Self {
            pos,
            start_time,
            new_combo,
            combo_offset: 0,
            kind,
        }
    }

    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle)
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider(_))
    }

    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, HitObjectKind::Spinner(_))
    }

    /// Position on the playfield after mirroring it.
    pub(crate) fn reflected_pos(&self, reflection: Reflection) -> Pos {
        reflection.mirror(self.pos, PLAYFIELD_BASE_SIZE)
    }
}

/// What kind of object a [`HitObject`] is.
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
}

/// The path and repeats of a slider.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    /// Length in osu!pixels as stored in the beatmap, if any.
    pub expected_dist: Option<f64>,
    /// How often the slider reverses; `0` for sliders without repeats.
    pub repeats: usize,
    /// Control points relative to the slider head.
    pub control_points: Box<[PathControlPoint]>,
}

impl Slider {
    /// One more than the amount of repeats.
    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }

    /// Builds the slider path with mirrored control points.
    ///
    /// Sliders without control points have no path.
    pub(crate) fn curve(&self, reflection: Reflection, bufs: &mut CurveBuffers) -> Option<Curve> {
        if self.control_points.is_empty() {
            return None;
        }

        let points = if reflection == Reflection::None {
            Cow::Borrowed(self.control_points.as_ref())
        } else {
            let mirrored = self
                .control_points
                .iter()
                .map(|point| {
                    let mut point = point.clone();
                    point.pos = reflection.mirror_offset(point.pos);

                    point
                })
                .collect();

            Cow::Owned(mirrored)
        };

        Some(Curve::new(
            GameMode::Osu,
            &points,
            self.expected_dist,
            bufs,
        ))
    }
}

/// Duration of a spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    /// Milliseconds between the spinner's start and end.
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_reflection_flips_head() {
        let circle = HitObject::circle(Pos::new(100.0, 50.0), 0.0);

        assert_eq!(
            circle.reflected_pos(Reflection::Vertical),
            Pos::new(100.0, 334.0)
        );
        assert_eq!(circle.reflected_pos(Reflection::None), circle.pos);
    }

    #[test]
    fn spinner_starts_new_combo() {
        let spinner = HitObject::spinner(1000.0, 2500.0);

        assert!(spinner.new_combo);
        assert!(spinner.is_spinner());
        assert_eq!(spinner.pos, PLAYFIELD_CENTER);
    }

    #[test]
    fn empty_slider_has_no_curve() {
        let slider = Slider {
            expected_dist: Some(100.0),
            repeats: 0,
            control_points: Box::default(),
        };

        assert!(slider
            .curve(Reflection::None, &mut CurveBuffers::default())
            .is_none());
    }
}
