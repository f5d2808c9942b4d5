use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Glyph shown on a reel before its first spin.
pub const PLACEHOLDER_GLYPH: &str = "❇️";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReelSymbol {
    Cross,
    BlueHeart,
    Gem,
    Star,
    Warning,
    Clover,
    LoveLetter,
    Sparkle,
}

/// Final symbols of the three reels, left to right.
pub type Finals = [ReelSymbol; 3];

impl ReelSymbol {
    /// Every symbol, in reel-strip order.
    pub const ALL: [ReelSymbol; 8] = [
        ReelSymbol::Cross,
        ReelSymbol::BlueHeart,
        ReelSymbol::Gem,
        ReelSymbol::Star,
        ReelSymbol::Warning,
        ReelSymbol::Clover,
        ReelSymbol::LoveLetter,
        ReelSymbol::Sparkle,
    ];

    /// The symbol every winning spin lands on.
    pub const JACKPOT: ReelSymbol = ReelSymbol::LoveLetter;

    pub const fn glyph(self) -> &'static str {
        use ReelSymbol::*;
        match self {
            Cross => "❌",
            BlueHeart => "💙",
            Gem => "💎",
            Star => "⭐",
            Warning => "⚠️",
            Clover => "🍀",
            LoveLetter => "💌",
            Sparkle => "🌟",
        }
    }

    pub const fn to_index(self) -> usize {
        self as usize
    }

    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % Self::ALL.len()]
    }

    /// Next symbol on the strip, wrapping after the last one.
    pub const fn next(self) -> Self {
        Self::from_index(self.to_index() + 1)
    }

    pub fn random(rng: &mut SmallRng) -> Self {
        Self::from_index(rng.random_range(0..Self::ALL.len()))
    }
}

pub const fn win_finals() -> Finals {
    [ReelSymbol::JACKPOT; 3]
}

/// Three random symbols that never line up.
pub fn loss_finals(rng: &mut SmallRng) -> Finals {
    let first = ReelSymbol::random(rng);
    let second = ReelSymbol::random(rng);
    let mut third = ReelSymbol::random(rng);
    if first == second && second == third {
        log::trace!("loss draw lined up on {:?}, nudging third reel", third);
        third = third.next();
    }
    [first, second, third]
}

pub fn is_line(finals: &Finals) -> bool {
    finals[0] == finals[1] && finals[1] == finals[2]
}
