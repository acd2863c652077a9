use rosu_judge::{
    model::hit_object::{HitObject, HitObjectKind, Pos},
    osu::{
        Click, Frame, GameplayConfig, GameplayKey, HitEvent, HitResult, KeyState, LiveScore,
        Playfield, Slider, SliderClickKind,
    },
    GameMods,
};
use rosu_mods::{GameModIntermode, GameModsIntermode, GameModsLegacy};

use self::common::*;

mod common;

const K1: GameplayKey = GameplayKey::K1;
const K2: GameplayKey = GameplayKey::K2;

const HEAD: Pos = Pos::new(100.0, 100.0);

/// Position of the slider ball of [`default_slider`] at `time`.
fn ball(time: i64) -> Pos {
    let offset = (time - 1000).clamp(0, 1000) as f32 * 0.125;

    Pos::new(HEAD.x + offset, HEAD.y)
}

/// Slider at 1000ms lasting 1000ms with ticks at 1400ms and 1800ms.
fn default_slider() -> HitObject {
    slider(HEAD.x, HEAD.y, 1000.0, SLIDER_LEN, 0)
}

fn playfield(mods: impl Into<GameMods>, config: GameplayConfig) -> Playfield {
    let map = map(vec![default_slider()]);

    Playfield::new(&map, mods, config).unwrap()
}

fn slider_state(playfield: &Playfield) -> &Slider {
    playfield.objects()[0].as_slider().unwrap()
}

/// Click the head at 1000ms and follow the ball while `held` returns keys.
fn play_slider<F>(playfield: &mut Playfield, sink: &mut Recorder, click_head: bool, held: F)
where
    F: Fn(i64) -> KeyState,
{
    if click_head {
        playfield.push_click(Click::new(1000, HEAD, K1));
    }

    play(playfield, sink, 1000, 2000, 10, |t| Frame::new(ball(t), held(t)));
}

#[test]
fn slider_timing() {
    let playfield = playfield(0_u32, GameplayConfig::new());
    let obj = &playfield.objects()[0];

    assert_eq!(obj.duration(), 1000);
    assert_eq!(obj.end_time(), 2000);

    let ticks: Vec<_> = slider_state(&playfield)
        .clicks()
        .iter()
        .map(|click| (click.time, click.kind))
        .collect();

    assert_eq!(
        ticks,
        [
            (1400, SliderClickKind::Tick { index: 0 }),
            (1800, SliderClickKind::Tick { index: 1 }),
        ]
    );
}

#[test]
fn full_hold() {
    let mut playfield = playfield(0_u32, GameplayConfig::new());
    let mut sink = Recorder::default();

    play_slider(&mut playfield, &mut sink, true, |_| KeyState::from(K1));

    assert_eq!(
        sink.results(),
        [
            HitResult::Slider30,
            HitResult::Slider10,
            HitResult::Slider10,
            HitResult::Hit300
        ]
    );
    assert_eq!(sink.judgements(), [HitResult::Hit300]);
    assert_eq!(sink.score_points(), 60);
    assert_eq!(sink.slider_breaks(), 0);

    let slider = slider_state(&playfield);
    assert_eq!(slider.start_result(), HitResult::Hit300);
    assert!(slider.is_held_till_end());
    assert!(playfield.is_finished());

    // The head is shown on the hit error bar
    let head = sink.events().next().unwrap();
    assert!(head.on_hit_error_bar);
    assert!(!head.counts_for_accuracy);
}

#[test]
fn early_release() {
    let mut playfield = playfield(0_u32, GameplayConfig::new());
    let mut sink = Recorder::default();

    play_slider(&mut playfield, &mut sink, true, |t| {
        if t < 1500 {
            KeyState::from(K1)
        } else {
            KeyState::NONE
        }
    });

    assert_eq!(
        sink.results(),
        [
            HitResult::Slider30,
            HitResult::Slider10,
            HitResult::MissSliderBreak,
            HitResult::Hit100
        ]
    );
    assert_eq!(sink.slider_breaks(), 1);

    let end = sink.events().last().unwrap();
    assert!(!end.increases_combo);
    assert!(!slider_state(&playfield).is_held_till_end());
}

#[test]
fn end_miss_breaks_combo() {
    let config = GameplayConfig::new().slider_end_miss_breaks_combo(true);
    let mut playfield = playfield(0_u32, config);
    let mut sink = Recorder::default();

    play_slider(&mut playfield, &mut sink, true, |t| {
        if t < 1500 {
            KeyState::from(K1)
        } else {
            KeyState::NONE
        }
    });

    // tick and slider end
    assert_eq!(sink.slider_breaks(), 2);
}

#[test]
fn missed_head_but_held() {
    let mut playfield = playfield(0_u32, GameplayConfig::new());
    let mut sink = Recorder::default();

    play_slider(&mut playfield, &mut sink, false, |_| KeyState::from(K1));

    assert_eq!(
        sink.results(),
        [
            HitResult::MissSliderBreak,
            HitResult::Slider10,
            HitResult::Slider10,
            HitResult::Hit100
        ]
    );
    assert_eq!(slider_state(&playfield).start_result(), HitResult::Miss);
    assert_eq!(slider_state(&playfield).start_delta(), 160);
}

#[test]
fn score_v2_caps_by_head() {
    let config = GameplayConfig::new().slider_score_v2(true);
    let mut playfield = playfield(0_u32, config);
    let mut sink = Recorder::default();

    play_slider(&mut playfield, &mut sink, false, |_| KeyState::from(K1));

    assert_eq!(sink.judgements(), [HitResult::Hit50]);
}

#[test]
fn score_v2_mod() {
    let mut playfield = playfield(GameModsLegacy::ScoreV2, GameplayConfig::new());
    let mut sink = Recorder::default();

    play_slider(&mut playfield, &mut sink, false, |_| KeyState::from(K1));

    assert_eq!(sink.judgements(), [HitResult::Hit50]);
}

#[test]
fn keys_held_before_release_do_not_count() {
    let mut playfield = playfield(0_u32, GameplayConfig::new());
    let mut sink = Recorder::default();

    play_slider(&mut playfield, &mut sink, true, |t| {
        if t < 1200 {
            KeyState::from(K1)
        } else if t < 1300 {
            keys(&[K1, K2])
        } else if t < 1500 {
            KeyState::from(K2)
        } else {
            keys(&[K1, K2])
        }
    });

    let ticks: Vec<_> = slider_state(&playfield)
        .clicks()
        .iter()
        .map(|click| click.successful)
        .collect();

    assert_eq!(ticks, [false, true]);
    assert_eq!(sink.judgements(), [HitResult::Hit100]);
    assert!(slider_state(&playfield).is_held_till_end());
}

#[test]
fn switching_keys_is_a_fresh_press() {
    let mut playfield = playfield(0_u32, GameplayConfig::new());
    let mut sink = Recorder::default();

    play_slider(&mut playfield, &mut sink, true, |t| {
        if t < 1300 {
            KeyState::from(K1)
        } else {
            KeyState::from(K2)
        }
    });

    assert_eq!(sink.judgements(), [HitResult::Hit300]);
}

#[test]
fn cursor_outside_follow_circle() {
    let mut playfield = playfield(0_u32, GameplayConfig::new());
    let mut sink = Recorder::default();

    // follow circle radius is 76.8 at CS 5
    playfield.push_click(Click::new(1000, HEAD, K1));
    play(&mut playfield, &mut sink, 1000, 2000, 10, |t| {
        let offset = if t < 1350 {
            0.0
        } else if t < 1450 {
            80.0
        } else {
            70.0
        };

        Frame::new(ball(t) + Pos::new(0.0, offset), KeyState::from(K1))
    });

    // after leaving, the cursor has to get within the circle radius again
    let ticks: Vec<_> = slider_state(&playfield)
        .clicks()
        .iter()
        .map(|click| click.successful)
        .collect();

    assert_eq!(ticks, [false, false]);
}

#[test]
fn lenience_at_the_end() {
    for (release, expected) in [(1980, HitResult::Hit300), (1960, HitResult::Hit100)] {
        let mut playfield = playfield(0_u32, GameplayConfig::new());
        let mut sink = Recorder::default();

        play_slider(&mut playfield, &mut sink, true, |t| {
            if t < release {
                KeyState::from(K1)
            } else {
                KeyState::NONE
            }
        });

        assert_eq!(sink.judgements(), [expected], "release at {release}");
    }
}

#[test]
fn strict_tracking_misses_immediately() {
    let mut mods = GameModsIntermode::new();
    mods.insert(GameModIntermode::StrictTracking);

    let mut playfield = playfield(mods, GameplayConfig::new());
    let mut sink = Recorder::default();

    playfield.push_click(Click::new(1000, HEAD, K1));

    play(&mut playfield, &mut sink, 1000, 1500, 10, |t| {
        let keys = if t < 1500 {
            KeyState::from(K1)
        } else {
            KeyState::NONE
        };

        Frame::new(ball(t), keys)
    });

    assert_eq!(sink.judgements(), [HitResult::Miss]);
    assert_eq!(slider_state(&playfield).end_result(), HitResult::Miss);
    assert!(!playfield.is_finished());

    play(&mut playfield, &mut sink, 1510, 2000, 10, |t| {
        Frame::new(ball(t), KeyState::NONE)
    });

    assert!(playfield.is_finished());
    assert_eq!(sink.judgements(), [HitResult::Miss]);
    assert_eq!(
        sink.results().last(),
        Some(&HitResult::MissSliderBreak),
        "ticks are still judged"
    );
}

#[test]
fn auto_slider() {
    let mut playfield = playfield(GameModsLegacy::Autoplay, GameplayConfig::new());
    let mut sink = Recorder::default();

    play(&mut playfield, &mut sink, 900, 2000, 10, |_| Frame::default());

    assert_eq!(
        sink.results(),
        [
            HitResult::Slider30,
            HitResult::Slider10,
            HitResult::Slider10,
            HitResult::Hit300
        ]
    );
    assert_eq!(slider_state(&playfield).start_delta(), 0);
}

#[test]
fn relax_slider() {
    let mut playfield = playfield(GameModsLegacy::Relax, GameplayConfig::new());
    let mut sink = Recorder::default();

    play(&mut playfield, &mut sink, 900, 2000, 10, |t| {
        Frame::new(ball(t), KeyState::NONE)
    });

    assert_eq!(sink.judgements(), [HitResult::Hit300]);
}

#[test]
fn drain_length_includes_slider_duration() {
    let map = map(vec![slider(HEAD.x, HEAD.y, 1000.0, SLIDER_LEN, 3)]);
    let playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();

    assert_eq!(playfield.objects()[0].end_time(), 5000);
    assert_eq!(playfield.drain_len(), 4);

    // density of 2 -> (5 + 5 + 5 + 2) / 38 * 5 rounds to 2
    assert_eq!(LiveScore::for_map(&map, &playfield), LiveScore::new(5.0, 2.0));
}

#[test]
fn repeats_are_mirrored() {
    let map = map(vec![slider(HEAD.x, HEAD.y, 1000.0, SLIDER_LEN, 1)]);
    let playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let obj = &playfield.objects()[0];

    assert_eq!(obj.end_time(), 3000);

    let clicks = obj.as_slider().unwrap().clicks();
    let times: Vec<_> = clicks.iter().map(|click| click.time).collect();

    assert_eq!(clicks.len(), 5);
    assert_eq!(&times[..3], [1400, 1800, 2000]);
    assert!((2199..=2200).contains(&times[3]));
    assert_eq!(times[4], 2600);
    assert!(clicks[2].is_repeat());
}

#[test]
fn repeat_gives_slider30() {
    let map = map(vec![slider(HEAD.x, HEAD.y, 1000.0, SLIDER_LEN, 1)]);
    let mut playfield = Playfield::new(&map, GameModsLegacy::Autoplay, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    play(&mut playfield, &mut sink, 1000, 3000, 10, |_| Frame::default());

    let results = sink.results();
    assert_eq!(results.len(), 7);
    assert_eq!(results[3], HitResult::Slider30);
    assert_eq!(results[6], HitResult::Hit300);
}

#[test]
fn empty_slider_is_never_judged() {
    let mut h = default_slider();

    let HitObjectKind::Slider(ref mut slider) = h.kind else {
        unreachable!()
    };

    slider.control_points = Box::default();

    let map = map(vec![h]);
    let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    playfield.push_click(Click::new(1000, HEAD, K1));
    play(&mut playfield, &mut sink, 1000, 1990, 10, |_| {
        Frame::new(HEAD, KeyState::from(K1))
    });

    assert!(!playfield.is_finished());

    play(&mut playfield, &mut sink, 2000, 2000, 10, |_| Frame::default());

    assert!(sink.records.is_empty());
    assert!(playfield.is_finished());
    assert!(slider_state(&playfield).is_empty());
}

#[test]
fn untraversable_slider_is_never_judged() {
    // without a slider multiplier the ball never moves
    let mut map = map(vec![default_slider(), circle(300.0, 300.0, 1500.0)]);
    map.slider_multiplier = 0.0;

    let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    assert_eq!(playfield.objects()[0].duration(), 0);
    assert!(slider_state(&playfield).is_empty());

    playfield.push_click(Click::new(1000, HEAD, K1));
    play(&mut playfield, &mut sink, 900, 1490, 10, |_| {
        Frame::new(HEAD, KeyState::from(K1))
    });

    assert!(sink.records.is_empty());
    assert!(playfield.objects()[0].is_finished());

    playfield.push_click(Click::new(1500, Pos::new(300.0, 300.0), K2));
    playfield.update(1500, Frame::new(Pos::new(300.0, 300.0), keys(&[K1, K2])), &mut sink);

    assert_eq!(sink.results(), [HitResult::Hit300]);
    assert!(playfield.is_finished());
}

#[test]
fn short_slider_without_input() {
    // 80ms long so it ends before the head times out
    let map = map(vec![slider(HEAD.x, HEAD.y, 1000.0, 10.0, 0)]);
    let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    play(&mut playfield, &mut sink, 1000, 1100, 10, |_| Frame::default());

    assert!(matches!(
        sink.records.as_slice(),
        [
            Record::SliderBreak,
            Record::Hit(head),
            Record::SliderBreak,
            Record::Hit(end),
        ] if *head == HitEvent::health_only(HitResult::MissSliderBreak, HEAD)
            && end.result == HitResult::Miss
            && end.counts_for_accuracy
            && !end.increases_combo
    ));
    assert!(playfield.is_finished());
}

#[test]
fn sliders_allow_2b() {
    // a circle during the slider body can be hit once the head is judged
    let map = map(vec![default_slider(), circle(300.0, 300.0, 1500.0)]);
    let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    playfield.push_click(Click::new(1000, HEAD, K1));
    play(&mut playfield, &mut sink, 1000, 1490, 10, |t| {
        Frame::new(ball(t), KeyState::from(K1))
    });

    playfield.push_click(Click::new(1500, Pos::new(300.0, 300.0), K2));
    playfield.update(1500, Frame::new(ball(1500), keys(&[K1, K2])), &mut sink);

    assert!(playfield.objects()[1].is_finished());
    assert_eq!(playfield.objects()[1].result(), HitResult::Hit300);
}

#[test]
fn objects_after_the_slider_are_locked() {
    let map = map(vec![default_slider(), circle(300.0, 300.0, 2100.0)]);
    let mut playfield = Playfield::new(&map, 0_u32, GameplayConfig::new()).unwrap();
    let mut sink = Recorder::default();

    playfield.push_click(Click::new(1000, HEAD, K1));
    play(&mut playfield, &mut sink, 1000, 1980, 10, |t| {
        Frame::new(ball(t), KeyState::from(K1))
    });

    playfield.push_click(Click::new(1990, Pos::new(300.0, 300.0), K2));
    playfield.update(1990, Frame::new(ball(1990), keys(&[K1, K2])), &mut sink);

    let circle = &playfield.objects()[1];
    assert!(!circle.is_finished());
    assert_eq!(circle.as_circle().and_then(|c| c.shake_time()), Some(1990));
}
