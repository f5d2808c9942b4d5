use alloc::vec::Vec;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of reels on the machine.
pub const REEL_COUNT: usize = 3;

/// A single reel update, `at_ms` after the spin started.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReelFrame {
    pub at_ms: u32,
    pub reel: usize,
    pub symbol: ReelSymbol,
    pub spinning: bool,
}

/// Frame plan for one spin: a burst of random symbols on every reel, then each
/// reel settling on its final symbol from left to right.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinAnimation {
    frames: Vec<ReelFrame>,
}

impl SpinAnimation {
    pub fn plan(rng: &mut SmallRng, finals: Finals, timings: &Timings) -> Self {
        let cycles = timings.spin_cycles as usize;
        let mut frames = Vec::with_capacity(cycles * REEL_COUNT + REEL_COUNT);

        for step in 0..timings.spin_cycles {
            let at_ms = step * timings.cycle_step_ms;
            for reel in 0..REEL_COUNT {
                frames.push(ReelFrame {
                    at_ms,
                    reel,
                    symbol: ReelSymbol::random(rng),
                    spinning: true,
                });
            }
        }

        let settle_start = timings.spin_cycles * timings.cycle_step_ms;
        for (reel, &symbol) in finals.iter().enumerate() {
            frames.push(ReelFrame {
                at_ms: settle_start + reel as u32 * timings.settle_stagger_ms,
                reel,
                symbol,
                spinning: false,
            });
        }

        Self { frames }
    }

    pub fn frames(&self) -> &[ReelFrame] {
        &self.frames
    }

    /// Time of the last frame.
    pub fn duration_ms(&self) -> u32 {
        self.frames.iter().map(|f| f.at_ms).max().unwrap_or(0)
    }

    /// Symbols the reels show once every frame has played.
    pub fn resting_symbols(&self) -> [Option<ReelSymbol>; REEL_COUNT] {
        let mut resting = [None; REEL_COUNT];
        for frame in &self.frames {
            resting[frame.reel] = Some(frame.symbol);
        }
        resting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn plan(finals: Finals) -> SpinAnimation {
        let mut rng = SmallRng::seed_from_u64(7);
        SpinAnimation::plan(&mut rng, finals, &Timings::default())
    }

    #[test]
    fn settles_on_finals_with_stagger() {
        let finals = [ReelSymbol::Gem, ReelSymbol::Star, ReelSymbol::Clover];
        let animation = plan(finals);

        let settled: Vec<_> = animation.frames().iter().filter(|f| !f.spinning).collect();
        assert_eq!(settled.len(), REEL_COUNT);
        assert_eq!(settled[0].at_ms, 800);
        assert_eq!(settled[1].at_ms, 940);
        assert_eq!(settled[2].at_ms, 1080);
        assert_eq!(animation.resting_symbols(), finals.map(Some));
    }

    #[test]
    fn cycles_every_reel_before_settling() {
        let animation = plan(win_finals());

        let spinning = animation.frames().iter().filter(|f| f.spinning).count();
        assert_eq!(spinning, 10 * REEL_COUNT);
        assert!(
            animation
                .frames()
                .iter()
                .filter(|f| f.spinning)
                .all(|f| f.at_ms < 800 && f.at_ms % 80 == 0)
        );
        assert_eq!(animation.duration_ms(), 1080);
    }
}
