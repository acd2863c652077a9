use std::collections::{vec_deque, VecDeque};

use rosu_map::util::Pos;

/// A key or mouse button used for gameplay.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameplayKey {
    K1,
    K2,
    M1,
    M2,
}

impl GameplayKey {
    const ALL: [Self; 4] = [Self::K1, Self::K2, Self::M1, Self::M2];

    const fn bit(self) -> u8 {
        match self {
            Self::K1 => 1,
            Self::K2 => 1 << 1,
            Self::M1 => 1 << 2,
            Self::M2 => 1 << 3,
        }
    }
}

/// The set of gameplay keys that are held down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyState {
    bits: u8,
}

impl KeyState {
    /// No keys held.
    pub const NONE: Self = Self { bits: 0 };

    /// Returns the state with `key` held down.
    #[must_use]
    pub const fn with(self, key: GameplayKey) -> Self {
        Self {
            bits: self.bits | key.bit(),
        }
    }

    pub fn set(&mut self, key: GameplayKey, down: bool) {
        if down {
            self.bits |= key.bit();
        } else {
            self.bits &= !key.bit();
        }
    }

    pub const fn is_down(self, key: GameplayKey) -> bool {
        self.bits & key.bit() != 0
    }

    /// Whether any key is held down.
    pub const fn any(self) -> bool {
        self.bits != 0
    }

    /// The first key that is held down now but was not held in `prev`.
    pub fn newly_pressed(self, prev: Self) -> Option<GameplayKey> {
        GameplayKey::ALL
            .into_iter()
            .find(|&key| self.is_down(key) && !prev.is_down(key))
    }
}

impl From<GameplayKey> for KeyState {
    fn from(key: GameplayKey) -> Self {
        Self::NONE.with(key)
    }
}

impl FromIterator<GameplayKey> for KeyState {
    fn from_iter<I: IntoIterator<Item = GameplayKey>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Cursor and key snapshot of a single frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Cursor position in osu!pixels.
    pub cursor: Pos,
    pub keys: KeyState,
}

impl Frame {
    pub const fn new(cursor: Pos, keys: KeyState) -> Self {
        Self { cursor, keys }
    }
}

/// A [`Frame`] alongside the keys held on the previous frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub cursor: Pos,
    pub keys: KeyState,
    pub prev_keys: KeyState,
}

impl InputState {
    pub const fn new(frame: Frame, prev_keys: KeyState) -> Self {
        Self {
            cursor: frame.cursor,
            keys: frame.keys,
            prev_keys,
        }
    }

    /// The first key pressed on this frame.
    pub fn newly_pressed(&self) -> Option<GameplayKey> {
        self.keys.newly_pressed(self.prev_keys)
    }
}

/// A key press at a given song time and cursor position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Click {
    pub time: i64,
    pub pos: Pos,
    pub key: GameplayKey,
}

impl Click {
    pub const fn new(time: i64, pos: Pos, key: GameplayKey) -> Self {
        Self { time, pos, key }
    }
}

/// Clicks of the current frame in the order they happened.
///
/// Objects only ever look at the front click and consume it when they use
/// it so a click is never judged twice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickQueue {
    inner: VecDeque<Click>,
}

impl ClickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, click: Click) {
        self.inner.push_back(click);
    }

    /// The oldest unconsumed click.
    pub fn front(&self) -> Option<&Click> {
        self.inner.front()
    }

    /// Remove and return the oldest click.
    pub fn consume_front(&mut self) -> Option<Click> {
        self.inner.pop_front()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Click> {
        self.inner.iter()
    }
}

impl Extend<Click> for ClickQueue {
    fn extend<I: IntoIterator<Item = Click>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
