/// The kind of a judgement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HitResult {
    /// Not judgeable yet.
    #[default]
    None,
    Miss,
    Hit50,
    Hit100,
    Hit300,
    /// A successful slider tick.
    Slider10,
    /// A successful slider repeat or slider head.
    Slider30,
    /// A failed slider sub-judgement; only drains health.
    MissSliderBreak,
}

impl HitResult {
    pub const fn base_score(self) -> u32 {
        match self {
            Self::Hit300 => 300,
            Self::Hit100 => 100,
            Self::Hit50 => 50,
            Self::Slider30 => 30,
            Self::Slider10 => 10,
            Self::None | Self::Miss | Self::MissSliderBreak => 0,
        }
    }

    /// Whether the result is a 300, 100, or 50.
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit300 | Self::Hit100 | Self::Hit50)
    }

    pub const fn is_miss(self) -> bool {
        matches!(self, Self::Miss | Self::MissSliderBreak)
    }
}
