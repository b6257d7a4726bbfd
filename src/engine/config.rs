use crate::Points;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Per-game settings supplied when a room starts a game.
///
/// `extra` holds variant-specific knobs (e.g. `flower_unit` for Taihu)
/// so the engine never needs to know about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    players: usize,
    base: Points,
    seed: Option<u64>,
    extra: Map<String, Value>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: crate::MAX_PLAYERS,
            base: crate::DEFAULT_BASE,
            seed: None,
            extra: Map::new(),
        }
    }
}

impl GameConfig {
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }
    pub fn with_base(mut self, base: Points) -> Self {
        self.base = base;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn base(&self) -> Points {
        self.base
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
    pub fn extra_u64(&self, key: &str) -> Option<u64> {
        self.extra(key).and_then(Value::as_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let config = GameConfig::default()
            .with_players(3)
            .with_base(5)
            .with_seed(7)
            .with_extra("flower_unit", 5);
        assert_eq!(config.players(), 3);
        assert_eq!(config.base(), 5);
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.extra_u64("flower_unit"), Some(5));
        assert_eq!(config.extra_u64("missing"), None);
    }

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.players(), crate::MAX_PLAYERS);
        assert_eq!(config.base(), crate::DEFAULT_BASE);
        assert_eq!(config.seed(), None);
    }
}
