use crate::osu::input::{GameplayKey, InputState};

/// Decides whether a slider is being held.
///
/// After the head is hit, only the key that hit it counts. Once that key is
/// released, a key has to be pressed anew; keys that were already held down
/// do not count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct HoldTracker {
    pinned: Option<GameplayKey>,
    await_fresh_press: bool,
}

impl HoldTracker {
    pub(crate) fn pin(&mut self, key: GameplayKey) {
        self.pinned = Some(key);
        self.await_fresh_press = false;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn is_held(&mut self, input: &InputState) -> bool {
        if let Some(key) = self.pinned {
            if input.keys.is_down(key) {
                return true;
            }

            self.pinned = None;
            self.await_fresh_press = true;
        }

        if !self.await_fresh_press {
            return input.keys.any();
        }

        match input.newly_pressed() {
            Some(key) => {
                self.pin(key);

                true
            }
            None => false,
        }
    }
}
