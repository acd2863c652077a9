use std::{error::Error as StdError, fmt};

pub use rosu_map::section::general::GameMode;

/// Error when a [`Beatmap`] cannot be played as osu!standard.
///
/// [`Beatmap`]: crate::model::beatmap::Beatmap
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// Cannot convert from one mode to another.
    Convert { from: GameMode, to: GameMode },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Convert { from, to } => {
                write!(f, "cannot convert from {from:?} to {to:?}")
            }
        }
    }
}

impl StdError for ConvertError {}
