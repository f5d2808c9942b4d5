use serde::Serialize;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ToastKind {
    Win,
    Lose,
    Neutral,
}

impl ToastKind {
    /// Extra CSS class for the toast; only losses are styled differently.
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Lose => Some("lose"),
            Self::Win | Self::Neutral => None,
        }
    }
}

/// A transient notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: &'static str,
    pub duration_ms: u32,
}

impl Toast {
    pub const WIN: Toast = Toast {
        kind: ToastKind::Win,
        text: "PARABÉNS, VOCÊ VENCEU!",
        duration_ms: 3500,
    };

    pub const LOSE: Toast = Toast {
        kind: ToastKind::Lose,
        text: "Você perdeu",
        duration_ms: 2200,
    };

    pub const PRIZE_CLAIMED: Toast = Toast {
        kind: ToastKind::Win,
        text: "Prêmio resgatado — bom uso!",
        duration_ms: 1800,
    };

    pub const RESET: Toast = Toast {
        kind: ToastKind::Neutral,
        text: "Contador reiniciado",
        duration_ms: 1400,
    };

    pub const fn for_outcome(will_win: bool) -> Self {
        if will_win { Self::WIN } else { Self::LOSE }
    }
}

/// Everything the controller needs from a UI toolkit.
///
/// Implementations are expected to be infallible from the controller's point
/// of view; anything that can fail should be logged on their side.
pub trait Presenter {
    /// Plays the frames of a spin on the reels, each at its own offset.
    fn animate_reels(&mut self, animation: &SpinAnimation);

    /// Shows `toast`, replacing any toast still on screen.
    fn show_toast(&mut self, toast: &Toast);

    /// Updates the primary control's label and handler and enables it.
    fn set_button(&mut self, state: ButtonState);

    fn disable_button(&mut self);

    fn fire_confetti(&mut self, particles: &[Particle]);

    /// Same-tab navigation to `url`.
    fn navigate(&mut self, url: &str);
}
