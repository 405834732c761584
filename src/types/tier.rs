//! Star tiers.
//!
//! A tier is one of the three fixed star-size classes. The layer selector,
//! point size and animation duration are fixed per tier; count and colour
//! have defaults that a project file may override.

use super::Colour;

/// The three star-size classes, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKind {
    Small,
    Medium,
    Large,
}

impl TierKind {
    /// All tiers in stylesheet order.
    pub const ALL: [TierKind; 3] = [TierKind::Small, TierKind::Medium, TierKind::Large];

    /// Class name of the layer, without the leading dot.
    pub fn selector(self) -> &'static str {
        match self {
            TierKind::Small => "stars",
            TierKind::Medium => "stars2",
            TierKind::Large => "stars3",
        }
    }

    /// Width and height of a single star, in pixels.
    pub fn size_px(self) -> u32 {
        match self {
            TierKind::Small => 1,
            TierKind::Medium => 2,
            TierKind::Large => 3,
        }
    }

    /// Duration of one pass of the scroll animation, in seconds.
    pub fn duration_secs(self) -> u32 {
        match self {
            TierKind::Small => 50,
            TierKind::Medium => 100,
            TierKind::Large => 150,
        }
    }

    pub fn default_count(self) -> usize {
        match self {
            TierKind::Small => 700,
            TierKind::Medium => 200,
            TierKind::Large => 100,
        }
    }

    pub fn default_colour(self) -> Colour {
        match self {
            TierKind::Small => Colour::GOLD,
            TierKind::Medium => Colour::LIGHT_GOLD,
            TierKind::Large => Colour::AMBER,
        }
    }

    /// Lowercase name as used in project files.
    pub fn name(self) -> &'static str {
        match self {
            TierKind::Small => "small",
            TierKind::Medium => "medium",
            TierKind::Large => "large",
        }
    }
}

/// A star tier with its resolved count and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub kind: TierKind,
    pub count: usize,
    pub colour: Colour,
}

impl Tier {
    pub fn new(kind: TierKind, count: usize, colour: Colour) -> Self {
        Self {
            kind,
            count,
            colour,
        }
    }

    /// The built-in tier for a kind.
    pub fn builtin(kind: TierKind) -> Self {
        Self::new(kind, kind.default_count(), kind.default_colour())
    }

    /// The three built-in tiers in stylesheet order.
    pub fn defaults() -> [Tier; 3] {
        TierKind::ALL.map(Tier::builtin)
    }

    pub fn selector(&self) -> &'static str {
        self.kind.selector()
    }

    pub fn size_px(&self) -> u32 {
        self.kind.size_px()
    }

    pub fn duration_secs(&self) -> u32 {
        self.kind.duration_secs()
    }
}
