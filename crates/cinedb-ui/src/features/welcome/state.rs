//! Welcome countdown state machine.

use std::rc::Rc;
use yew::Reducible;

/// Ticks shown before the automatic redirect.
pub const COUNTDOWN_START: u8 = 5;
/// Interval between ticks.
pub const TICK_MS: u32 = 1000;

/// Phase of the welcome countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownPhase {
    /// Ticking with `n` seconds left.
    Counting(u8),
    /// The user stopped the countdown; only manual entry remains.
    Cancelled,
    /// Navigation to the dashboard was requested.
    Navigated,
}

/// User or timer input to the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownAction {
    /// One interval elapsed.
    Tick,
    /// Enter the dashboard immediately.
    GoNow,
    /// Stop the automatic redirect.
    Cancel,
}

/// Countdown driving the welcome page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WelcomeCountdown {
    phase: CountdownPhase,
}

impl Default for WelcomeCountdown {
    fn default() -> Self {
        Self {
            phase: CountdownPhase::Counting(COUNTDOWN_START),
        }
    }
}

impl WelcomeCountdown {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// Whether the interval timer should be running.
    #[must_use]
    pub const fn is_counting(&self) -> bool {
        matches!(self.phase, CountdownPhase::Counting(_))
    }

    /// Whether navigation to the dashboard was requested.
    #[must_use]
    pub const fn is_navigated(&self) -> bool {
        matches!(self.phase, CountdownPhase::Navigated)
    }

    /// Seconds left on screen; zero once the countdown is over.
    #[must_use]
    pub const fn remaining(&self) -> u8 {
        match self.phase {
            CountdownPhase::Counting(n) => n,
            CountdownPhase::Cancelled | CountdownPhase::Navigated => 0,
        }
    }

    /// Advance one tick. Returns `true` when this tick requested navigation.
    pub const fn tick(&mut self) -> bool {
        match self.phase {
            CountdownPhase::Counting(n) if n > 1 => {
                self.phase = CountdownPhase::Counting(n - 1);
                false
            }
            CountdownPhase::Counting(_) => {
                self.phase = CountdownPhase::Navigated;
                true
            }
            CountdownPhase::Cancelled | CountdownPhase::Navigated => false,
        }
    }

    /// Request navigation right away, from any phase.
    pub const fn go_now(&mut self) {
        self.phase = CountdownPhase::Navigated;
    }

    /// Stop ticking. Has no effect after navigation.
    pub const fn cancel(&mut self) {
        if self.is_counting() {
            self.phase = CountdownPhase::Cancelled;
        }
    }

    /// Route an action to its transition.
    pub const fn apply(&mut self, action: CountdownAction) {
        match action {
            CountdownAction::Tick => {
                self.tick();
            }
            CountdownAction::GoNow => self.go_now(),
            CountdownAction::Cancel => self.cancel(),
        }
    }
}

impl Reducible for WelcomeCountdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::{COUNTDOWN_START, CountdownAction, CountdownPhase, WelcomeCountdown};
    use std::rc::Rc;
    use yew::Reducible;

    #[test]
    fn navigates_after_exactly_five_ticks() {
        let mut countdown = WelcomeCountdown::default();
        for expected in (1..COUNTDOWN_START).rev() {
            assert!(!countdown.tick());
            assert_eq!(countdown.phase(), CountdownPhase::Counting(expected));
        }
        assert!(countdown.tick());
        assert!(countdown.is_navigated());
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.tick());
    }

    #[test]
    fn cancel_halts_at_any_value() {
        for ticks_before in 0..COUNTDOWN_START {
            let mut countdown = WelcomeCountdown::default();
            for _ in 0..ticks_before {
                countdown.tick();
            }
            countdown.cancel();
            assert_eq!(countdown.phase(), CountdownPhase::Cancelled);
            for _ in 0..10 {
                assert!(!countdown.tick());
            }
            assert!(!countdown.is_navigated());
            assert!(!countdown.is_counting());
        }
    }

    #[test]
    fn go_now_navigates_from_any_phase() {
        let mut counting = WelcomeCountdown::default();
        counting.tick();
        counting.go_now();
        assert!(counting.is_navigated());

        let mut cancelled = WelcomeCountdown::default();
        cancelled.cancel();
        cancelled.go_now();
        assert!(cancelled.is_navigated());
    }

    #[test]
    fn cancel_after_navigation_is_ignored() {
        let mut countdown = WelcomeCountdown::default();
        countdown.go_now();
        countdown.cancel();
        assert!(countdown.is_navigated());
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let cancelled = Rc::new(WelcomeCountdown::default()).reduce(CountdownAction::Cancel);
        let again = Rc::clone(&cancelled).reduce(CountdownAction::Tick);
        assert!(Rc::ptr_eq(&cancelled, &again));
        let navigated = again.reduce(CountdownAction::GoNow);
        assert!(navigated.is_navigated());
    }
}
