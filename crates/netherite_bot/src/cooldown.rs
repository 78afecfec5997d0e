//! Per-user command cooldowns.
//!
//! Two keyed rate limiters, one per command class: commands that reach an
//! upstream service allow one invocation per five seconds per user, local
//! commands one per second. The gate is checked before any cache or HTTP
//! work happens.

use governor::clock::{Clock, DefaultClock};
use governor::state::keyed::DashMapStateStore;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::time::Duration;

/// How a command is throttled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
    /// Commands that hit the cache or an upstream service.
    Networked,
    /// Arithmetic, text transforms, and bot info.
    Local,
}

type KeyedLimiter = RateLimiter<u64, DashMapStateStore<u64>, DefaultClock>;

const NETWORKED_PERIOD: Duration = Duration::from_secs(5);
const LOCAL_PERIOD: Duration = Duration::from_secs(1);

fn quota(period: Duration) -> Quota {
    // Periods here are nonzero constants, so the fallback never fires.
    Quota::with_period(period).unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
}

/// Keyed cooldown gate over user ids.
pub struct CooldownGate {
    clock: DefaultClock,
    networked: KeyedLimiter,
    local: KeyedLimiter,
}

impl CooldownGate {
    /// Create a gate with the standard per-class quotas.
    pub fn new() -> Self {
        let clock = DefaultClock::default();
        Self {
            networked: RateLimiter::dashmap_with_clock(quota(NETWORKED_PERIOD), clock.clone()),
            local: RateLimiter::dashmap_with_clock(quota(LOCAL_PERIOD), clock.clone()),
            clock,
        }
    }

    /// Admit or reject an invocation by `user` for a command of `class`.
    ///
    /// Rejection carries the wait until the next permitted invocation.
    pub fn check(&self, user: u64, class: CommandClass) -> Result<(), Duration> {
        let limiter = match class {
            CommandClass::Networked => &self.networked,
            CommandClass::Local => &self.local,
        };
        limiter
            .check_key(&user)
            .map_err(|not_until| not_until.wait_time_from(self.clock.now()))
    }
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_is_admitted_and_second_rejected() {
        let gate = CooldownGate::new();
        assert!(gate.check(1, CommandClass::Networked).is_ok());
        let wait = gate.check(1, CommandClass::Networked).unwrap_err();
        assert!(wait <= NETWORKED_PERIOD);
    }

    #[test]
    fn users_are_throttled_independently() {
        let gate = CooldownGate::new();
        assert!(gate.check(1, CommandClass::Networked).is_ok());
        assert!(gate.check(2, CommandClass::Networked).is_ok());
    }

    #[test]
    fn classes_are_throttled_independently() {
        let gate = CooldownGate::new();
        assert!(gate.check(1, CommandClass::Networked).is_ok());
        assert!(gate.check(1, CommandClass::Local).is_ok());
    }
}
