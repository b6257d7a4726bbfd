use std::time::Duration;

/// Registry settings. Every field can be overridden from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallConfig {
    /// Idle time after which a table is evicted.
    pub evict_after: Duration,
    /// How often the eviction sweep runs.
    pub sweep_interval: Duration,
    /// How often reaction deadlines are checked.
    pub tick_interval: Duration,
    /// Reaction window given to every new table.
    pub task_timeout: Duration,
    /// Most tables held at once. Least recently active go first.
    pub capacity: Option<usize>,
}

impl Default for HallConfig {
    fn default() -> Self {
        Self {
            evict_after: crate::EVICT_AFTER,
            sweep_interval: crate::SWEEP_INTERVAL,
            tick_interval: Duration::from_secs(1),
            task_timeout: crate::TASK_TIMEOUT,
            capacity: None,
        }
    }
}

impl HallConfig {
    /// Reads `MAHJONG_EVICT_AFTER`, `MAHJONG_SWEEP_EVERY`, `MAHJONG_TICK_EVERY`,
    /// `MAHJONG_TASK_TIMEOUT` (durations like "30s" or "5m") and `MAHJONG_CAPACITY`.
    /// Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        let duration = |key: &str| std::env::var(key).ok().and_then(|v| crate::parse_duration(&v));
        let default = Self::default();
        Self {
            evict_after: duration("MAHJONG_EVICT_AFTER").unwrap_or(default.evict_after),
            sweep_interval: duration("MAHJONG_SWEEP_EVERY").unwrap_or(default.sweep_interval),
            tick_interval: duration("MAHJONG_TICK_EVERY").unwrap_or(default.tick_interval),
            task_timeout: duration("MAHJONG_TASK_TIMEOUT").unwrap_or(default.task_timeout),
            capacity: std::env::var("MAHJONG_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(default.capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_table_parameters() {
        let config = HallConfig::default();
        assert_eq!(config.evict_after, crate::EVICT_AFTER);
        assert_eq!(config.sweep_interval, Duration::from_secs(60));
        assert_eq!(config.capacity, None);
    }
}
