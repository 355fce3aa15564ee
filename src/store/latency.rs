use std::time::Duration;

use rand::Rng;

use crate::config::LatencyConfig;

/// Artificial round-trip delay applied before every store call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    range_ms: Option<(u64, u64)>,
}

impl Latency {
    /// No delay
    pub const fn none() -> Self {
        Self { range_ms: None }
    }

    /// Uniform delay within `[min_ms, max_ms]`
    pub fn between(min_ms: u64, max_ms: u64) -> Self {
        let range_ms = if min_ms <= max_ms {
            (min_ms, max_ms)
        } else {
            (max_ms, min_ms)
        };
        Self {
            range_ms: Some(range_ms),
        }
    }

    pub fn from_config(config: &LatencyConfig) -> Self {
        if config.enabled {
            Self::between(config.min_ms, config.max_ms)
        } else {
            Self::none()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.range_ms.is_some()
    }

    pub async fn pause(&self) {
        let Some((min_ms, max_ms)) = self.range_ms else {
            return;
        };
        let ms = rand::rng().random_range(min_ms..=max_ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_between_orders_bounds() {
        assert_eq!(Latency::between(400, 150), Latency::between(150, 400));
    }

    #[test]
    fn test_disabled_config_means_none() {
        let config = LatencyConfig {
            enabled: false,
            ..LatencyConfig::default()
        };
        assert!(!Latency::from_config(&config).is_enabled());
    }

    #[tokio::test]
    async fn test_pause_waits_at_least_min() {
        let latency = Latency::between(20, 25);
        let start = Instant::now();
        latency.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_none_returns_immediately() {
        let start = Instant::now();
        Latency::none().pause().await;
        assert!(start.elapsed() < Duration::from_millis(20));
    }
}
