use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// Wall-clock source used for token issuance and expiry checks.
///
/// The same clock must be used on both sides, otherwise a token can be
/// considered expired (or still valid) incorrectly.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
///
/// Useful to issue a token "in the past" and check expiry deterministically.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
