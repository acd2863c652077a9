use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_map::util::Pos;

use rosu_mods::{
    generated_mods::DifficultyAdjustOsu, GameMod, GameModIntermode, GameMods as GameModsLazer,
    GameModsIntermode, GameModsLegacy,
};

/// Collection of game mods.
///
/// This type can be created through its `From<T>` implementations where `T`
/// can be
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
/// - [`rosu_mods::GameMods`]
/// - [`rosu_mods::GameModsIntermode`]
/// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
///
/// # Example
///
/// ```
/// use rosu_judge::GameMods;
/// use rosu_mods::{GameModsIntermode, GameModsLegacy, GameMods as GameModsLazer};
///
/// let int = GameMods::from(128 + 8);
/// let legacy = GameMods::from(GameModsLegacy::Hidden | GameModsLegacy::Relax);
/// let lazer = GameMods::from(GameModsLazer::new());
/// let intermode = GameMods::from(GameModsIntermode::new());
/// ```
#[derive(Clone, PartialEq)]
pub struct GameMods {
    inner: GameModsInner,
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.inner {
            GameModsInner::Lazer(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Intermode(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Legacy(ref mods) => Debug::fmt(mods, f),
        }
    }
}

/// Inner type of [`GameMods`] so that remote types contained in variants don't
/// need to be re-exported.
#[derive(Clone, PartialEq)]
enum GameModsInner {
    Lazer(GameModsLazer),
    Intermode(GameModsIntermode),
    Legacy(GameModsLegacy),
}

impl GameMods {
    pub(crate) const DEFAULT: Self = Self {
        inner: GameModsInner::Legacy(GameModsLegacy::NoMod),
    };

    /// Returns the mods' clock rate.
    ///
    /// In case of variable clock rates like for `WindUp`, this will return
    /// `1.0`.
    pub(crate) fn clock_rate(&self) -> f64 {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.clock_rate().unwrap_or(1.0),
            GameModsInner::Intermode(ref mods) => mods.legacy_clock_rate(),
            GameModsInner::Legacy(mods) => mods.clock_rate(),
        }
    }

    pub(crate) fn od_ar_hp_multiplier(&self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    pub(crate) fn cs_multiplier(&self) -> f64 {
        if self.hr() {
            1.3
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    /// Whether objects are judged without player input.
    pub(crate) fn auto(&self) -> bool {
        self.at() || self.cn()
    }

    pub(crate) fn reflection(&self) -> Reflection {
        match self.inner {
            GameModsInner::Lazer(ref mods) => {
                if mods.contains_intermode(GameModIntermode::HardRock) {
                    return Reflection::Vertical;
                }

                mods.iter()
                    .find_map(|m| match m {
                        GameMod::MirrorOsu(mr) => match mr.reflection.as_deref() {
                            None => Some(Reflection::Horizontal),
                            Some("1") => Some(Reflection::Vertical),
                            Some("2") => Some(Reflection::Both),
                            Some(_) => Some(Reflection::None),
                        },
                        _ => None,
                    })
                    .unwrap_or(Reflection::None)
            }
            GameModsInner::Intermode(ref mods) => {
                if mods.contains(GameModIntermode::HardRock) {
                    Reflection::Vertical
                } else {
                    Reflection::None
                }
            }
            GameModsInner::Legacy(mods) => {
                if mods.contains(GameModsLegacy::HardRock) {
                    Reflection::Vertical
                } else {
                    Reflection::None
                }
            }
        }
    }
}

macro_rules! impl_map_attr {
    ( $( $fn:ident: $field:ident [$s:literal] ;)* ) => {
        impl GameMods {
            $(
                #[doc = "Check whether the mods specify a custom "]
                #[doc = $s]
                #[doc = "value."]
                pub(crate) fn $fn(&self) -> Option<f64> {
                    match self.inner {
                        GameModsInner::Lazer(ref mods) => mods.iter().find_map(|gamemod| match gamemod {
                            GameMod::DifficultyAdjustOsu(DifficultyAdjustOsu { $field, .. }) => *$field,
                            _ => None,
                        }),
                        GameModsInner::Intermode(_) | GameModsInner::Legacy(_) => None,
                    }
                }
            )*
        }
    };
}

impl_map_attr! {
    ar: approach_rate ["ar"];
    cs: circle_size ["cs"];
    hp: drain_rate ["hp"];
    od: overall_difficulty ["od"];
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $sign:tt $name:ident [ $s:literal ], )* ) => {
        impl GameMods {
            $(
                // workaround for <https://github.com/rust-lang/rust-analyzer/issues/8092>
                #[doc = "Check whether [`GameMods`] contain `"]
                #[doc = $s]
                #[doc = "`."]
                pub(crate) fn $fn(&self) -> bool {
                    match self.inner {
                        GameModsInner::Lazer(ref mods) => {
                            mods.contains_intermode(GameModIntermode::$name)
                        },
                        GameModsInner::Intermode(ref mods) => {
                            mods.contains(GameModIntermode::$name)
                        },
                        GameModsInner::Legacy(_mods) => {
                            impl_has_mod!(LEGACY $sign $name _mods)
                        },
                    }
                }
            )*
        }
    };

    ( LEGACY + $name:ident $mods:ident ) => {
        $mods.contains(GameModsLegacy::$name)
    };

    ( LEGACY - $name:ident $mods:ident ) => {
        false
    };
}

impl_has_mod! {
    ez: + Easy ["Easy"],
    hd: + Hidden ["Hidden"],
    hr: + HardRock ["HardRock"],
    rx: + Relax ["Relax"],
    so: + SpunOut ["SpunOut"],
    ap: + Autopilot ["Autopilot"],
    at: + Autoplay ["Autoplay"],
    cn: + Cinema ["Cinema"],
    sv2: + ScoreV2 ["ScoreV2"],
    st: - StrictTracking ["StrictTracking"],
    tp: - TargetPractice ["TargetPractice"],
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<GameModsLazer> for GameMods {
    fn from(mods: GameModsLazer) -> Self {
        Self {
            inner: GameModsInner::Lazer(mods),
        }
    }
}

impl From<GameModsIntermode> for GameMods {
    fn from(mods: GameModsIntermode) -> Self {
        Self {
            inner: GameModsInner::Intermode(mods),
        }
    }
}

impl From<&GameModsIntermode> for GameMods {
    fn from(mods: &GameModsIntermode) -> Self {
        // If only legacy mods are set, use `GameModsLegacy` and thus avoid
        // allocating an owned `GameModsIntermode` instance.
        match mods.checked_bits() {
            Some(bits) => bits.into(),
            None => mods.to_owned().into(),
        }
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self {
            inner: GameModsInner::Legacy(mods),
        }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        GameModsLegacy::from_bits(bits).into()
    }
}

/// How hit object positions are mirrored on the playfield.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reflection {
    None,
    Vertical,
    Horizontal,
    Both,
}

impl Reflection {
    const fn flips_x(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    const fn flips_y(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    /// Mirrors a position within a playfield of the given size.
    pub(crate) fn mirror(self, pos: Pos, size: Pos) -> Pos {
        let x = if self.flips_x() { size.x - pos.x } else { pos.x };
        let y = if self.flips_y() { size.y - pos.y } else { pos.y };

        Pos::new(x, y)
    }

    /// Mirrors an offset relative to some origin, e.g. a slider control
    /// point relative to the slider head.
    pub(crate) fn mirror_offset(self, offset: Pos) -> Pos {
        self.mirror(offset, Pos::default())
    }
}
