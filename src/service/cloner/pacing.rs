//! Rate-limit pacing between mutating calls.

use std::time::Duration;

/// Kinds of mutating calls that are paced differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationClass {
    /// Role, channel and guild edits and all deletions.
    Standard,
    /// Emoji uploads, which sit behind a stricter platform limit.
    Emoji,
}

/// Fixed wait inserted after each successful mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingPolicy {
    pub standard: Duration,
    pub emoji: Duration,
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            standard: Duration::from_secs(5),
            emoji: Duration::from_secs(10),
        }
    }
}

impl PacingPolicy {
    /// Policy that never waits.
    pub fn none() -> Self {
        Self {
            standard: Duration::ZERO,
            emoji: Duration::ZERO,
        }
    }

    pub fn interval(&self, class: OperationClass) -> Duration {
        match class {
            OperationClass::Standard => self.standard,
            OperationClass::Emoji => self.emoji,
        }
    }

    /// Waits out the interval for `class`.
    pub async fn pace(&self, class: OperationClass) {
        let interval = self.interval(class);
        if !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn default_policy_paces_emojis_twice_as_long() {
        let policy = PacingPolicy::default();

        assert_eq!(policy.interval(OperationClass::Standard), Duration::from_secs(5));
        assert_eq!(policy.interval(OperationClass::Emoji), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn pace_waits_for_the_class_interval() {
        let policy = PacingPolicy::default();
        let start = Instant::now();

        policy.pace(OperationClass::Emoji).await;

        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn none_policy_does_not_wait() {
        let start = Instant::now();

        PacingPolicy::none().pace(OperationClass::Standard).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
