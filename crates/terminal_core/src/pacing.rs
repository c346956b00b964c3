//! Typing speeds and named pauses for the boot animation.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

/// Per-character delay of `base + uniform(0, jitter)` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypingSpeed {
    pub base_ms: f64,
    pub jitter_ms: f64,
}

impl TypingSpeed {
    pub const fn new(base_ms: f64, jitter_ms: f64) -> Self {
        Self { base_ms, jitter_ms }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R, scale: f64) -> Duration {
        let jitter = if self.jitter_ms > 0.0 {
            rng.gen_range(0.0..self.jitter_ms)
        } else {
            0.0
        };
        scaled_millis(self.base_ms + jitter, scale)
    }
}

pub(crate) fn scaled_millis(millis: f64, scale: f64) -> Duration {
    let scaled = millis * scale.max(0.0);
    if scaled.is_nan() || scaled <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(scaled / 1000.0).unwrap_or(Duration::MAX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PacingProfile {
    pub greeting_prompt: TypingSpeed,
    pub command_echo: TypingSpeed,
    pub ascii_line: TypingSpeed,
    pub prose_line: TypingSpeed,
    pub paper_title: TypingSpeed,
    pub paper_detail: TypingSpeed,
    pub project_name: TypingSpeed,
    pub project_detail: TypingSpeed,
    pub category_header: TypingSpeed,
    pub category_item: TypingSpeed,
    pub preformatted: TypingSpeed,
    pub pauses: Pauses,
}

/// Fixed pauses, in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Pauses {
    pub before_greeting: u64,
    pub after_greeting_prompt: u64,
    pub after_greeting_response: u64,
    pub before_sections: u64,
    pub after_ascii_line: u64,
    pub after_command_echo: u64,
    pub after_prose_line: u64,
    pub after_card: u64,
    pub after_category_header: u64,
    pub after_category_item: u64,
    pub after_category: u64,
    pub after_section: u64,
}

impl Default for Pauses {
    fn default() -> Self {
        Self {
            before_greeting: 1000,
            after_greeting_prompt: 500,
            after_greeting_response: 300,
            before_sections: 800,
            after_ascii_line: 50,
            after_command_echo: 200,
            after_prose_line: 50,
            after_card: 100,
            after_category_header: 50,
            after_category_item: 30,
            after_category: 100,
            after_section: 200,
        }
    }
}

impl Default for PacingProfile {
    fn default() -> Self {
        Self {
            greeting_prompt: TypingSpeed::new(80.0, 40.0),
            command_echo: TypingSpeed::new(60.0, 5.0),
            ascii_line: TypingSpeed::new(1.0, 5.0),
            prose_line: TypingSpeed::new(3.0, 5.0),
            paper_title: TypingSpeed::new(3.0, 5.0),
            paper_detail: TypingSpeed::new(2.0, 5.0),
            project_name: TypingSpeed::new(5.0, 5.0),
            project_detail: TypingSpeed::new(2.0, 5.0),
            category_header: TypingSpeed::new(8.0, 5.0),
            category_item: TypingSpeed::new(3.0, 5.0),
            preformatted: TypingSpeed::new(2.0, 5.0),
            pauses: Pauses::default(),
        }
    }
}

/// Suspension point used by the sequencer between render steps.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn samples_stay_within_base_plus_jitter() {
        let mut rng = StdRng::seed_from_u64(7);
        let speed = TypingSpeed::new(80.0, 40.0);
        for _ in 0..500 {
            let delay = speed.sample(&mut rng, 1.0);
            assert!(delay >= Duration::from_micros(79_999));
            assert!(delay < Duration::from_millis(120));
        }
    }

    #[test]
    fn zero_scale_means_no_delay() {
        let mut rng = StdRng::seed_from_u64(7);
        let speed = TypingSpeed::new(60.0, 5.0);
        assert_eq!(speed.sample(&mut rng, 0.0), Duration::ZERO);
        assert_eq!(scaled_millis(200.0, -3.0), Duration::ZERO);
    }

    #[test]
    fn huge_scale_saturates_instead_of_panicking() {
        let mut rng = StdRng::seed_from_u64(7);
        let speed = TypingSpeed::new(80.0, 40.0);
        assert_eq!(speed.sample(&mut rng, 1e300), Duration::MAX);
        assert_eq!(scaled_millis(f64::MAX, 2.0), Duration::MAX);
        assert_eq!(scaled_millis(1.0e20, 1.0), Duration::MAX);
        assert_eq!(scaled_millis(f64::NAN, 1.0), Duration::ZERO);
    }

    #[test]
    fn call_sites_keep_distinct_speeds() {
        let profile = PacingProfile::default();
        assert!(profile.greeting_prompt.base_ms > profile.command_echo.base_ms);
        assert!(profile.command_echo.base_ms > profile.category_header.base_ms);
        assert!(profile.ascii_line.base_ms < profile.prose_line.base_ms);
    }
}
