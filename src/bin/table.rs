//! Self-play Table Binary
//!
//! Opens rooms in a hall, seats robots at each and plays every game to the end.
//!
//! Options: --variant, --rooms, --players, --seed, --base

use clap::Parser;
use mahjong::gameroom::Robot;
use mahjong::hosting::*;
use mahjong::*;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Play robot-only mahjong games", long_about = None)]
struct Args {
    #[arg(long, default_value = "huitong")]
    variant: Variant,
    #[arg(long, default_value_t = 1)]
    rooms: usize,
    #[arg(long, default_value_t = MAX_PLAYERS)]
    players: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_BASE)]
    base: Points,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = Args::parse();
    let ledger = Arc::new(Ledger::default());
    let hall = Arc::new(Hall::new(HallConfig::from_env(), ledger.clone()));
    let sweeper = hall.spawn_sweeper();
    for i in 0..args.rooms {
        let room = format!("room-{}", i);
        let seed = args.seed.map(|s| s + i as u64).unwrap_or_else(rand::random);
        let players = (0..args.players).map(|p| format!("bot-{}", p)).collect::<Vec<_>>();
        let table = hall.get_or_create(&room, args.variant);
        let config = engine::GameConfig::default()
            .with_players(args.players)
            .with_base(args.base)
            .with_seed(seed);
        hall.start_with(&room, players.clone(), config)?;
        let mut robot = Robot::seeded(seed);
        let mut steps = 0;
        while !table.is_over()? {
            let action = players
                .iter()
                .find_map(|p| table.peek(|engine| robot.decide(engine, p)).ok().flatten())
                .ok_or_else(|| anyhow::anyhow!("no player can move in {}", room))?;
            hall.act(&room, action)?;
            steps += 1;
        }
        match table.settlement()? {
            Some(settlement) => log::info!("{} after {} actions: {}", room, steps, settlement),
            None => log::info!("{} after {} actions: wall exhausted", room, steps),
        }
        if let Some(snapshot) = table.snapshot()? {
            for player in snapshot.state().players() {
                log::info!("{} {}", room, player);
            }
        }
    }
    sweeper.abort();
    hall.shutdown().await;
    log::info!("archived {} games", ledger.snapshots().await.len());
    Ok(())
}
