#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{
    init_logging, Ability, AbilityInventory, AbilityKind, ActionResult, AutoPlacement, Board,
    FleetInventory, GameEngine, ShotOutcome, TurnFlow, AUTO_FLEET, BOARD_SIZE,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Generate a random fleet and print the resulting board.
    Place {
        #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run an automated skirmish between two generated fleets.
    Skirmish {
        #[arg(long, help = "Fix RNG seed for a reproducible skirmish (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2, help = "Scan difficulty (higher shrinks the window)")]
        difficulty: i32,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn auto_engine(rng: &mut SmallRng, label: &str) -> GameEngine {
    let board = Board::with_fleet(FleetInventory::auto());
    let mut engine = GameEngine::with_parts(board, AbilityInventory::standard());
    let reports = engine.generate_random_fleet(rng, &AUTO_FLEET);
    for report in &reports {
        if let AutoPlacement::Skipped { tier } = report {
            log::warn!("{}: could not place a {}", label, tier.name());
        }
    }
    let placed = reports.iter().filter(|r| r.is_placed()).count();
    println!("{}: placed {} of {} ships", label, placed, reports.len());
    engine
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Place { seed } => {
            let mut rng = seeded_rng(seed);
            let engine = auto_engine(&mut rng, "fleet");
            println!("{}", engine.board().grid());
        }
        Commands::Skirmish { seed, difficulty } => {
            let mut rng = seeded_rng(seed);
            let mut engines = [
                auto_engine(&mut rng, "north"),
                auto_engine(&mut rng, "south"),
            ];
            run_skirmish(&mut engines, &mut rng, difficulty);
            let [north, south] = &engines;
            println!("\nnorth board:\n{}", north.board().grid());
            println!("\nsouth board:\n{}", south.board().grid());
        }
    }
    Ok(())
}

/// Alternate attacks until the bomb budgets run dry, following each
/// result's turn disposition. Win detection is the caller's business; the
/// skirmish just spends the ability budgets and tallies hits.
#[cfg(feature = "std")]
fn run_skirmish(engines: &mut [GameEngine; 2], rng: &mut SmallRng, difficulty: i32) {
    let names = ["north", "south"];
    let mut hits = [0usize; 2];
    let mut actor = 0usize;

    loop {
        let both_dry = engines
            .iter()
            .all(|e| e.ability_remaining(AbilityKind::Bomb) == 0);
        if both_dry {
            break;
        }

        let (attacker, defender) = split_pair(engines, actor);
        let ability = pick_ability(attacker, rng, difficulty);
        let result = match attacker.attack(defender.board_mut(), ability) {
            Ok(result) => result,
            Err(err) => {
                log::debug!("{}: {}", names[actor], err);
                actor = 1 - actor;
                continue;
            }
        };

        hits[actor] += count_hits(&result);
        match result.turn() {
            TurnFlow::Retain | TurnFlow::Unchanged => {}
            TurnFlow::Pass => actor = 1 - actor,
        }
    }

    for (name, count) in names.iter().zip(hits) {
        println!("{}: {} ship cells hit", name, count);
    }
}

#[cfg(feature = "std")]
fn split_pair(engines: &mut [GameEngine; 2], actor: usize) -> (&mut GameEngine, &mut GameEngine) {
    let (head, tail) = engines.split_at_mut(1);
    if actor == 0 {
        (&mut head[0], &mut tail[0])
    } else {
        (&mut tail[0], &mut head[0])
    }
}

#[cfg(feature = "std")]
fn pick_ability(attacker: &GameEngine, rng: &mut SmallRng, difficulty: i32) -> Ability {
    let row = rng.random_range(0..BOARD_SIZE);
    let col = rng.random_range(0..BOARD_SIZE);
    if attacker.ability_remaining(AbilityKind::LineAssault) > 0 && rng.random_range(0..20) == 0 {
        Ability::LineAssault { row, col }
    } else if attacker.ability_remaining(AbilityKind::Scan) > 0 && rng.random_range(0..10) == 0 {
        Ability::Scan {
            row,
            col,
            difficulty,
        }
    } else {
        Ability::Bomb { row, col }
    }
}

#[cfg(feature = "std")]
fn count_hits(result: &ActionResult) -> usize {
    match result {
        ActionResult::Bomb { outcome, .. } => usize::from(*outcome == ShotOutcome::Hit),
        ActionResult::LineAssault { outcomes, .. } => outcomes
            .iter()
            .filter(|&&outcome| outcome == ShotOutcome::Hit)
            .count(),
        ActionResult::Scan { .. } => 0,
    }
}
