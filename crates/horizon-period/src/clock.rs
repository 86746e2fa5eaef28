//! Sources of the current instant.

use chrono::{Local, NaiveDateTime};

/// Provides the current instant.
///
/// The parser reads the clock only when a range omits its end, so tests can
/// pin "now" with a [`FixedClock`] instead of racing the wall clock.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock of the running process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }
}

impl From<NaiveDateTime> for FixedClock {
    fn from(now: NaiveDateTime) -> Self {
        Self::new(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
