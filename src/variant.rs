use crate::engine::Engine;
use serde::Deserialize;
use serde::Serialize;

/// Rule sets a room can be opened with.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Huitong,
    Taihu,
}

impl Variant {
    pub fn all() -> [Self; 2] {
        [Variant::Huitong, Variant::Taihu]
    }
    /// A fresh engine wired with this variant's strategies.
    pub fn engine(&self) -> Engine {
        match self {
            Variant::Huitong => crate::htmajong::engine(),
            Variant::Taihu => crate::thmajong::engine(),
        }
    }
    pub fn total_tiles(&self) -> usize {
        self.engine().total()
    }
}

impl std::str::FromStr for Variant {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "huitong" | "ht" | "htmajong" => Ok(Variant::Huitong),
            "taihu" | "th" | "thmajong" => Ok(Variant::Taihu),
            _ => Err(anyhow::anyhow!("unknown variant '{}'", s)),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::Huitong => write!(f, "huitong"),
            Variant::Taihu => write!(f, "taihu"),
        }
    }
}
