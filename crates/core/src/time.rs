use chrono::{DateTime, Duration, Utc};

/// Source of "now" for expiry checks, swappable for a fixed instant in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// A fixed clock at the given Unix epoch milliseconds.
    ///
    /// Out-of-range values clamp to the Unix epoch.
    #[must_use]
    pub fn fixed_ms(epoch_ms: i64) -> Self {
        Self::Fixed(DateTime::<Utc>::from_timestamp_millis(epoch_ms).unwrap_or_default())
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Current time in Unix epoch milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Has no effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP_MS: i64 = 1_700_000_000_000;

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed_ms(FIXED_TEST_TIMESTAMP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_millis_and_advances() {
        let mut clock = fixed_clock();
        assert_eq!(clock.now_ms(), FIXED_TEST_TIMESTAMP_MS);
        clock.advance(Duration::seconds(2));
        assert_eq!(clock.now_ms(), FIXED_TEST_TIMESTAMP_MS + 2_000);
    }
}
