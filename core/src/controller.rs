use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// A spin whose reels are animating and whose result is not applied yet.
///
/// Hand it back to [`GameController::settle`] once
/// [`settle_after_ms`](Self::settle_after_ms) have elapsed.
#[derive(Debug, PartialEq)]
#[must_use = "a pending spin does nothing until it is settled"]
pub struct PendingSpin {
    outcome: Outcome,
    finals: Finals,
    settle_after_ms: u32,
}

impl PendingSpin {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn finals(&self) -> Finals {
        self.finals
    }

    pub fn settle_after_ms(&self) -> u32 {
        self.settle_after_ms
    }
}

/// Drives the play → win/lose → retry/prize cycle over a persisted counter.
#[derive(Debug)]
pub struct GameController<S, P> {
    slot: S,
    presenter: P,
    config: GameConfig,
    rng: SmallRng,
    button: ButtonState,
    in_flight: bool,
}

impl<S: AttemptSlot, P: Presenter> GameController<S, P> {
    pub fn new(slot: S, presenter: P, config: GameConfig, seed: u64) -> Self {
        Self {
            slot,
            presenter,
            config,
            rng: SmallRng::seed_from_u64(seed),
            button: ButtonState::default(),
            in_flight: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn button_state(&self) -> ButtonState {
        self.button
    }

    pub fn is_spinning(&self) -> bool {
        self.in_flight
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Stored attempt count, `0` when missing or unreadable.
    pub fn attempt_count(&self) -> AttemptCount {
        match self.slot.get() {
            None => 0,
            Some(raw) => parse_attempts(&raw).unwrap_or_else(|| {
                log::debug!("ignoring malformed attempt count {:?}", raw);
                0
            }),
        }
    }

    pub fn set_attempt_count(&mut self, count: AttemptCount) {
        if let Err(err) = self.slot.set(&encode_attempts(count)) {
            log::error!("failed to persist attempt count {}: {}", count, err);
        }
    }

    /// Seeds the counter if needed and binds the control to the state the
    /// stored count implies.
    pub fn initialize(&mut self) -> ButtonState {
        if self.slot.get().is_none() {
            self.set_attempt_count(0);
        }
        let count = self.attempt_count();
        let state = ButtonState::from_attempts(count);
        log::debug!("initialized with {} attempts, button {:?}", count, state);
        self.apply_button(state);
        state
    }

    /// Starts a spin: disables the control, picks the final symbols and
    /// starts the reel animation. Nothing persistent changes until the
    /// returned spin is settled.
    pub fn play(&mut self) -> Result<PendingSpin> {
        if self.in_flight {
            log::warn!("play requested while a spin is in flight");
            return Err(GameError::SpinInFlight);
        }
        self.in_flight = true;
        self.presenter.disable_button();

        let outcome = determine_outcome(self.attempt_count());
        let finals = if outcome.will_win {
            win_finals()
        } else {
            loss_finals(&mut self.rng)
        };
        let timings = self.config.timings;
        let animation = SpinAnimation::plan(&mut self.rng, finals, &timings);
        self.presenter.animate_reels(&animation);

        log::debug!(
            "attempt {} spinning, will win: {}",
            outcome.next_count,
            outcome.will_win
        );
        Ok(PendingSpin {
            outcome,
            finals,
            settle_after_ms: timings.settle_ms(outcome.will_win),
        })
    }

    /// Applies the result of a spin once its animation had time to settle.
    pub fn settle(&mut self, spin: PendingSpin) -> Outcome {
        let PendingSpin { outcome, .. } = spin;

        self.presenter.show_toast(&Toast::for_outcome(outcome.will_win));
        self.set_attempt_count(outcome.next_count);
        if outcome.will_win {
            self.apply_button(ButtonState::Prize);
            let particles = burst(&mut self.rng);
            self.presenter.fire_confetti(&particles);
        } else {
            self.apply_button(ButtonState::Retry);
        }
        self.in_flight = false;

        log::debug!(
            "attempt {} settled, won: {}",
            outcome.next_count,
            outcome.will_win
        );
        outcome
    }

    /// Runs whatever the primary control is currently bound to.
    pub fn activate(&mut self) -> Result<Option<PendingSpin>> {
        match self.button.action() {
            ButtonAction::Play => self.play().map(Some),
            ButtonAction::ClaimPrize => {
                self.claim_prize();
                Ok(None)
            }
        }
    }

    pub fn claim_prize(&mut self) {
        log::debug!("claiming prize at {}", self.config.prize_url);
        self.presenter.navigate(&self.config.prize_url);
        self.set_attempt_count(0);
        self.apply_button(ButtonState::Play);
        self.presenter.show_toast(&Toast::PRIZE_CLAIMED);
    }

    /// Clears the counter. The control comes back enabled, so a spin still
    /// animating no longer blocks a new one.
    pub fn reset(&mut self) {
        log::debug!("resetting attempt count");
        self.set_attempt_count(0);
        self.apply_button(ButtonState::Play);
        self.in_flight = false;
        self.presenter.show_toast(&Toast::RESET);
    }

    fn apply_button(&mut self, state: ButtonState) {
        self.button = state;
        self.presenter.set_button(state);
    }
}
