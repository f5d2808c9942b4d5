#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use animation::*;
pub use confetti::*;
pub use controller::*;
pub use error::*;
pub use present::*;
pub use storage::*;
pub use symbols::*;
pub use timeline::*;

mod animation;
mod confetti;
mod controller;
mod error;
mod present;
mod storage;
mod symbols;
mod timeline;

/// Number of resolved attempts, as persisted.
pub type AttemptCount = u32;

/// Every attempt whose number is a multiple of this wins.
pub const WIN_EVERY: AttemptCount = 3;

/// Delays used by the reel animation and the settle phase, all in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    pub win_settle_ms: u32,
    pub lose_settle_ms: u32,
    pub spin_cycles: u32,
    pub cycle_step_ms: u32,
    pub settle_stagger_ms: u32,
}

impl Timings {
    pub const fn settle_ms(&self, will_win: bool) -> u32 {
        if will_win {
            self.win_settle_ms
        } else {
            self.lose_settle_ms
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            win_settle_ms: 1200,
            lose_settle_ms: 1100,
            spin_cycles: 10,
            cycle_step_ms: 80,
            settle_stagger_ms: 140,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub prize_url: String,
    pub timings: Timings,
}

impl GameConfig {
    pub const DEFAULT_PRIZE_URL: &'static str = "premio.html";

    pub fn with_prize_url(prize_url: impl Into<String>) -> Self {
        Self {
            prize_url: prize_url.into(),
            ..Default::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prize_url: Self::DEFAULT_PRIZE_URL.into(),
            timings: Timings::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub will_win: bool,
    pub next_count: AttemptCount,
}

/// Outcome of the attempt that follows `current` resolved attempts.
pub const fn determine_outcome(current: AttemptCount) -> Outcome {
    let next_count = current.saturating_add(1);
    Outcome {
        will_win: next_count % WIN_EVERY == 0,
        next_count,
    }
}

/// What the primary control does when activated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    Play,
    ClaimPrize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonState {
    Play,
    Retry,
    Prize,
}

impl ButtonState {
    pub const fn from_attempts(count: AttemptCount) -> Self {
        match count {
            0 => Self::Play,
            n if n % WIN_EVERY == 0 => Self::Prize,
            _ => Self::Retry,
        }
    }

    pub const fn label(self) -> &'static str {
        use ButtonState::*;
        match self {
            Play => "Jogar",
            Retry => "Tentar novamente",
            Prize => "Receber prêmio",
        }
    }

    pub const fn action(self) -> ButtonAction {
        use ButtonState::*;
        match self {
            Play | Retry => ButtonAction::Play,
            Prize => ButtonAction::ClaimPrize,
        }
    }

    /// CSS class for the control, if it has one.
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Prize => Some("prize"),
            _ => None,
        }
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::Play
    }
}
