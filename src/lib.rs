//! Pluggable mahjong rule engine.
//!
//! A generic turn/claim state machine ([`engine::Engine`]) that knows nothing about
//! any particular rule set, two rule variants that plug into it ([`htmajong`] and
//! [`thmajong`]), and a concurrency-safe registry of one game per room
//! ([`gameroom::Table`], [`hosting::Hall`]).

pub mod engine;
pub mod gameroom;
pub mod hosting;
pub mod htmajong;
pub mod thmajong;
pub mod tiles;
pub mod variant;

pub use variant::Variant;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Points moved between players at settlement, and per-pattern scores.
pub type Points = i32;
/// Seat index around the table (0 = first player to join, the dealer).
pub type Position = usize;
/// Opaque player identifier supplied by the session layer.
pub type PlayerId = String;
/// Opaque room identifier supplied by the room layer.
pub type RoomId = String;
/// Claim priority. Higher wins a contested tile.
pub type Priority = u8;
/// Wall-clock milliseconds since the unix epoch. Used for task deadlines.
pub type Millis = u64;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Tiles dealt to every seat. The dealer receives one more.
pub const HAND_SIZE: usize = 13;
/// Fewest players a table can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players a table can seat.
pub const MAX_PLAYERS: usize = 4;
/// Base score used when a room starts a game without an explicit config.
pub const DEFAULT_BASE: Points = 10;

// ============================================================================
// CLAIM PRIORITIES
// Strict order used to pick which simultaneous claimant takes a tile.
// ============================================================================
pub const PRIORITY_WIN: Priority = 100;
pub const PRIORITY_ROB: Priority = 90;
pub const PRIORITY_KONG: Priority = 80;
pub const PRIORITY_PONG: Priority = 70;
pub const PRIORITY_CHI: Priority = 60;

// ============================================================================
// TIMERS
// ============================================================================
/// Reaction window shared by every task opened by one discard or kong.
pub const TASK_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
/// Interval between inactivity sweeps of the room registry.
pub const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);
/// Idle time after which a room's game is evicted.
pub const EVICT_AFTER: std::time::Duration = std::time::Duration::from_secs(30 * 60);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Current wall-clock time in milliseconds.
pub fn now() -> Millis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as Millis)
        .unwrap_or_default()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", now() / 1000)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("listen for ctrl-c");
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
/// None for anything else, including values that overflow.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (at, unit) = s.char_indices().last()?;
    let value: u64 = s[..at].parse().ok()?;
    let scale = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}
