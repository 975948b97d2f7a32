use std::time::Duration;

use rand::Rng;

/// Calculate exponential backoff with jitter
pub fn calculate_backoff_with_jitter(
    attempt: usize,
    base_delay_ms: u64,
    max_delay_ms: u64,
) -> Duration {
    // Exponential backoff: delay = base * 2^attempt
    let exponential_delay = base_delay_ms.saturating_mul(2u64.saturating_pow(attempt as u32));

    // Cap at max delay
    let capped_delay = exponential_delay.min(max_delay_ms);

    // Add jitter (±25% of the delay)
    let mut rng = rand::rng();
    let jitter_range = (capped_delay as f64 * 0.25) as u64;
    let jitter = rng.random_range(0..=jitter_range * 2);
    let final_delay = capped_delay.saturating_add(jitter).saturating_sub(jitter_range);

    Duration::from_millis(final_delay)
}

/// Delays between attempts for a request retried at most `max_retries` times.
pub fn retry_schedule(
    max_retries: usize,
    base_delay_ms: u64,
    max_delay_ms: u64,
) -> impl Iterator<Item = Duration> {
    (0..max_retries).map(move |attempt| calculate_backoff_with_jitter(attempt, base_delay_ms, max_delay_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_stays_within_jitter_band_and_cap() {
        for attempt in 0..8 {
            let delay = calculate_backoff_with_jitter(attempt, 100, 1_000).as_millis() as u64;
            let expected = (100u64 << attempt).min(1_000);
            assert!(delay >= expected - expected / 4, "attempt {attempt}: {delay} too small");
            assert!(delay <= expected + expected / 4, "attempt {attempt}: {delay} too large");
        }
    }

    #[test]
    fn schedule_length_matches_retry_budget() {
        assert_eq!(retry_schedule(3, 10, 100).count(), 3);
        assert_eq!(retry_schedule(0, 10, 100).count(), 0);
    }
}
