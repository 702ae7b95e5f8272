//! Resolve timer - a cancellable one-shot deadline
//!
//! The game loop never sleeps: the timer stores a deadline and `poll` is called
//! once per tick with the current time. Each schedule or cancel moves to a new
//! generation, so a token handed out for an old deadline can never be mistaken
//! for the current one.

/// Identifies one scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Default)]
pub struct ResolveTimer {
    deadline_ms: Option<u64>,
    generation: u64,
}

impl ResolveTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `delay_ms` after `now_ms`.
    ///
    /// Only one deadline may be outstanding.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) -> TimerToken {
        debug_assert!(
            self.deadline_ms.is_none(),
            "resolve timer scheduled while another deadline is pending"
        );
        self.generation = self.generation.wrapping_add(1);
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
        TimerToken(self.generation)
    }

    /// Drop the outstanding deadline, if any. Safe to call repeatedly.
    ///
    /// Returns true when a pending deadline was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.deadline_ms.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Fire the deadline if it has elapsed. Fires at most once per schedule.
    pub fn poll(&mut self, now_ms: u64) -> Option<TimerToken> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                Some(TimerToken(self.generation))
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Whether `token` belongs to the most recent schedule and was not cancelled.
    pub fn is_current(&self, token: TimerToken) -> bool {
        token.0 == self.generation
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline_ms.map(|d| d.saturating_sub(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let mut timer = ResolveTimer::new();
        timer.schedule(1000, 800);

        assert_eq!(timer.poll(1000), None);
        assert_eq!(timer.poll(1799), None);
        assert!(timer.poll(1800).is_some());
        assert_eq!(timer.poll(5000), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut timer = ResolveTimer::new();
        timer.schedule(0, 800);

        assert!(timer.cancel());
        assert_eq!(timer.poll(10_000), None);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = ResolveTimer::new();
        assert!(!timer.cancel());

        timer.schedule(0, 10);
        assert!(timer.cancel());
        assert!(!timer.cancel());
    }

    #[test]
    fn test_stale_token_is_not_current() {
        let mut timer = ResolveTimer::new();
        let old = timer.schedule(0, 800);
        timer.cancel();
        let new = timer.schedule(100, 800);

        assert!(!timer.is_current(old));
        assert!(timer.is_current(new));
        assert_eq!(timer.poll(900), Some(new));
    }

    #[test]
    fn test_remaining_ms() {
        let mut timer = ResolveTimer::new();
        assert_eq!(timer.remaining_ms(0), None);

        timer.schedule(100, 800);
        assert_eq!(timer.remaining_ms(500), Some(400));
        assert_eq!(timer.remaining_ms(2000), Some(0));
    }
}
