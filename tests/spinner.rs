use std::f32::consts::TAU;

use rosu_judge::{
    model::hit_object::{HitObject, Pos},
    osu::{
        Click, Frame, GameplayConfig, GameplayKey, HitResult, KeyState, Playfield,
        PLAYFIELD_CENTER,
    },
};
use rosu_mods::GameModsLegacy;

use self::common::*;

mod common;

/// Spinner from 1000ms to 3000ms; 10 rotations at OD 5.
fn spinner_map() -> rosu_judge::Beatmap {
    map(vec![HitObject::spinner(1000.0, 2000.0)])
}

/// Cursor circling the center by `step` radians every 10ms.
fn circling(step: f32) -> impl Fn(i64) -> Pos {
    move |t| {
        let angle = ((t - 1000) / 10) as f32 * step % TAU;

        PLAYFIELD_CENTER + Pos::new(100.0 * angle.cos(), 100.0 * angle.sin())
    }
}

fn spin(step: f32, keys: KeyState) -> Recorder {
    let map = spinner_map();
    let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();
    let cursor = circling(step);

    play(&mut playfield, &mut sink, 900, 3000, 10, |t| Frame::new(cursor(t), keys));

    assert!(playfield.is_finished());

    sink
}

#[test]
fn rotations_needed() {
    let map = spinner_map();

    let playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let spinner = playfield.objects()[0].as_spinner().unwrap();
    assert_eq!(spinner.rotations_needed(), 10);

    // DT shortens the spinner in real time
    let playfield = Playfield::new(&map, GameModsLegacy::DoubleTime, GameplayConfig::new()).unwrap();
    let spinner = playfield.objects()[0].as_spinner().unwrap();
    assert_eq!(spinner.rotations_needed(), 6);
}

#[test]
fn auto_spins_at_max_speed() {
    let map = spinner_map();
    let mut playfield = Playfield::new(&map, GameModsLegacy::Autoplay, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    play(&mut playfield, &mut sink, 1000, 3000, 10, |_| Frame::default());

    assert_eq!(sink.results(), [HitResult::Hit300]);
    assert_eq!(sink.score_points(), 11_400);

    let spinner = playfield.objects()[0].as_spinner().unwrap();
    assert!((spinner.rotations() - 15.9).abs() < 0.01);
}

#[test]
fn cleared_spinner() {
    let sink = spin(0.4, KeyState::from(GameplayKey::K1));

    assert_eq!(sink.results(), [HitResult::Hit300]);
    assert!(sink.score_points() > 0);
}

#[test]
fn almost_cleared_spinner() {
    let sink = spin(0.3, KeyState::from(GameplayKey::M1));

    assert_eq!(sink.results(), [HitResult::Hit100]);
}

#[test]
fn spinning_requires_keys() {
    let sink = spin(0.4, KeyState::NONE);

    assert_eq!(sink.results(), [HitResult::Miss]);
    assert_eq!(sink.score_points(), 0);
}

#[test]
fn spin_speed_is_capped() {
    // the cap is just under 0.5 radians per 10ms
    let sink = spin(1.0, KeyState::from(GameplayKey::K2));
    let map = spinner_map();
    let mut auto = Playfield::new(&map, GameModsLegacy::Autoplay, GameplayConfig::new()).unwrap();
    let mut auto_sink = Recorder::default();

    play(&mut auto, &mut auto_sink, 1000, 3000, 10, |_| Frame::default());

    assert_eq!(sink.results(), [HitResult::Hit300]);
    assert!(sink.score_points() <= auto_sink.score_points());
}

#[test]
fn spun_out() {
    let map = spinner_map();
    let mut playfield = Playfield::new(&map, GameModsLegacy::SpunOut, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    play(&mut playfield, &mut sink, 1000, 3000, 10, |_| Frame::default());

    assert_eq!(sink.results(), [HitResult::Hit300]);
}

#[test]
fn circles_during_spinner_are_hittable() {
    let map = map(vec![
        HitObject::spinner(1000.0, 2000.0),
        circle(100.0, 100.0, 2000.0),
    ]);
    let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();
    let pos = Pos::new(100.0, 100.0);
    let k1 = KeyState::from(GameplayKey::K1);

    play(&mut playfield, &mut sink, 1000, 1990, 10, |_| Frame::new(pos, k1));

    playfield.push_click(Click::new(2000, pos, GameplayKey::K2));
    playfield.update(2000, Frame::new(pos, keys(&[GameplayKey::K1, GameplayKey::K2])), &mut sink);

    assert_eq!(sink.results(), [HitResult::Hit300]);
    assert!(playfield.objects()[1].is_finished());
    assert!(!playfield.objects()[0].is_finished());
}

#[test]
fn endless_spinner_is_clamped() {
    let map = map(vec![HitObject::spinner(1000.0, f64::INFINITY)]);
    let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    assert_eq!(playfield.objects()[0].end_time(), 1000 + i64::from(i32::MAX));

    play(&mut playfield, &mut sink, 900, 2000, 10, |_| Frame::default());

    assert!(sink.records.is_empty());
    assert!(!playfield.is_finished());
}
