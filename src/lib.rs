//! Hit judgement engine for [osu!]standard gameplay.
//!
//! ## Description
//!
//! `rosu-judge` turns song time, cursor position, and key presses into hit
//! judgements the way osu!stable does. It covers hit windows, circles,
//! sliders with their ticks, repeats, and follow circle, spinners, note
//! lock, and a reference score keeper for combo, accuracy, and health.
//!
//! Beatmaps are not decoded by this crate. Fill a [`Beatmap`] with data from
//! any decoder, e.g. [`rosu-map`].
//!
//! ## Usage
//!
//! ```
//! use rosu_judge::{
//!     model::hit_object::{HitObject, Pos},
//!     osu::{Click, Frame, GameplayConfig, GameplayKey, KeyState, LiveScore, Playfield},
//!     Beatmap,
//! };
//! use rosu_mods::GameModsLegacy;
//!
//! let map = Beatmap {
//!     od: 8.0,
//!     hit_objects: vec![
//!         HitObject::circle(Pos::new(100.0, 100.0), 1000.0),
//!         HitObject::circle(Pos::new(300.0, 100.0), 1500.0),
//!     ],
//!     ..Beatmap::default()
//! };
//!
//! let mut playfield = Playfield::new(&map, GameModsLegacy::Hidden, GameplayConfig::new())
//!     .expect("osu!standard map");
//!
//! let mut score = LiveScore::for_map(&map, &playfield);
//!
//! // Hit the first circle 20ms late
//! let cursor = Pos::new(100.0, 100.0);
//! let keys = KeyState::from(GameplayKey::K1);
//! playfield.push_click(Click::new(1020, cursor, GameplayKey::K1));
//! playfield.update(1020, Frame::new(cursor, keys), &mut score);
//!
//! // Ignore the second one
//! playfield.update(2000, Frame::new(cursor, KeyState::NONE), &mut score);
//!
//! assert_eq!(score.n300(), 1);
//! assert_eq!(score.misses(), 1);
//! assert!(playfield.is_finished());
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Judgements, slider breaks, and resets are logged through `tracing::debug!` and `tracing::trace!`. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`rosu-map`]: https://github.com/MaxOhn/rosu-map
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::match_same_arms,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::explicit_iter_loop,
    clippy::similar_names,
    clippy::cast_possible_wrap
)]

#[macro_use]
mod util;

#[doc(inline)]
pub use self::{
    model::{beatmap::Beatmap, mods::GameMods},
    osu::{GameRules, LiveScore, Playfield},
};

/// Types for osu!standard judgement.
pub mod osu;

/// Types used in and around this crate.
pub mod model;
