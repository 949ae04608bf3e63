//! Retry backoff and request pacing delays

use crate::config::PacingSettings;
use rand::Rng;
use std::time::Duration;

/// Delay before retrying after the `count`-th consecutive error
///
/// Equals `2^count` backoff units: 2, 4, 8, ... units for counts 1, 2, 3.
pub fn backoff_delay(unit: Duration, count: u32) -> Duration {
    let factor = 1u32.checked_shl(count).unwrap_or(u32::MAX);
    unit.saturating_mul(factor)
}

/// Randomized delay inserted between successful page requests
///
/// Drawn uniformly from `[min-delay-ms, max-delay-ms]`.
pub fn pacing_delay(settings: &PacingSettings) -> Duration {
    if settings.min_delay_ms >= settings.max_delay_ms {
        return Duration::from_millis(settings.min_delay_ms);
    }

    let millis = rand::thread_rng().gen_range(settings.min_delay_ms..=settings.max_delay_ms);
    Duration::from_millis(millis)
}
