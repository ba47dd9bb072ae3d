//! Kitchen Clash - text-mode demo
//!
//! A seeded auto-battler over the combat core: runs a series of random
//! encounters, prints the paced event stream, and challenges Chef Carby once
//! the level cap is reached. This binary is a stand-in presentation layer;
//! all rules live in the library.

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use kitchen_clash::battle::constants::BOSS_UNLOCK_LEVEL;
use kitchen_clash::battle::{BattleEvent, BattleRunner, BattleSession};
use kitchen_clash::character::{Player, PlayerClass};
use kitchen_clash::enemy::{boss_encounter, random_encounter, Enemy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassArg {
    SousChef,
    PastryArtist,
    GrillMaster,
}

impl From<ClassArg> for PlayerClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::SousChef => PlayerClass::SousChef,
            ClassArg::PastryArtist => PlayerClass::PastryArtist,
            ClassArg::GrillMaster => PlayerClass::GrillMaster,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Kitchen Clash auto-battler demo")]
struct Args {
    /// Chef name
    #[arg(long, default_value = "Alex")]
    name: String,

    /// Chef class
    #[arg(long, value_enum, default_value_t = ClassArg::SousChef)]
    class: ClassArg,

    /// Number of random encounters to fight
    #[arg(long, default_value_t = 5)]
    battles: u32,

    /// Seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kitchen_clash=info")),
        )
        .init();

    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut player = Player::new(args.name, args.class.into());
    let mut battles_fought = 0u32;

    println!("=== KITCHEN CLASH ===");
    println!(
        "{} the {} takes the floor.\n",
        player.name(),
        player.class().name()
    );

    for _ in 0..args.battles {
        let enemy = random_encounter(player.level(), &mut rng);
        player = fight(player, enemy, &mut rng).await;
        battles_fought += 1;
        print_status(&player, battles_fought);
        if player.is_defeated() {
            // Defeat sends us back to the menu; the next battle starts at
            // full hp anyway, so keep going.
            println!("Back to the kitchen to recover...\n");
        }
    }

    if player.level() >= BOSS_UNLOCK_LEVEL {
        println!("Chef Carby blocks the doorway. \"Show me what you've learned.\"\n");
        let boss = boss_encounter(player.level());
        player = fight(player, boss, &mut rng).await;
        battles_fought += 1;
        print_status(&player, battles_fought);
    }
}

/// Run one battle through the async runner, printing the paced stream.
async fn fight(player: Player, enemy: Enemy, rng: &mut ChaCha8Rng) -> Player {
    let session_rng = ChaCha8Rng::seed_from_u64(rng.gen());
    let (session, opening) = BattleSession::start(player, enemy, session_rng);
    let (join, mut handle) = BattleRunner::spawn(session, opening);

    while let Some(event) = handle.events.recv().await {
        if let Some(line) = event.describe() {
            println!("{line}");
        }
        match event {
            BattleEvent::TurnReady { actions } => {
                // Simple policy: strongest unlocked slot.
                if let Some(action) = actions.last().copied() {
                    handle.submit(action).await;
                }
            }
            BattleEvent::BattleEnded { .. } => println!(),
            _ => {}
        }
    }

    join.await.expect("battle task panicked")
}

fn print_status(player: &Player, battles_fought: u32) {
    println!(
        "Level {} | Exp {}/{} | HP {}/{} | Battles Fought: {}\n",
        player.level(),
        player.experience(),
        player.exp_to_level(),
        player.hp(),
        player.max_hp(),
        battles_fought,
    );
}
