use rosu_map::util::Pos;

pub use self::{
    config::{GameplayConfig, NoteLock, TargetThresholds},
    hit_result::HitResult,
    input::{Click, ClickQueue, Frame, GameplayKey, InputState, KeyState},
    judgement::{HitEvent, JudgementSink, TargetOffset},
    object::{
        Circle, ComboInfo, Lifecycle, ObjectState, OsuObject, OsuObjectKind, Slider,
        SliderClick, SliderClickKind, Spinner, Visuals,
    },
    playfield::Playfield,
    rules::{GameRules, HitWindows},
    score::LiveScore,
};

mod config;
mod hit_result;
mod input;
mod judgement;
mod object;
mod playfield;
mod rules;
mod score;

/// Size of the playfield in osu!pixels.
pub const PLAYFIELD_BASE_SIZE: Pos = Pos::new(512.0, 384.0);

/// Center of the playfield where spinners are located.
pub const PLAYFIELD_CENTER: Pos = Pos::new(256.0, 192.0);
