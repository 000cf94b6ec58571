use battleship_bots::{
    init_logging, play_series, shots_to_sink, FiringKind, FleetBoard, GameSessions, PlacerKind,
    SharedDetector, StrategyFactory,
};
use battleship_bots::wire::{PlaceShipsRequest, PlaceShipsRequestPayload};

use clap::Parser;
use log::info;
use serde::Serialize;
use serde_json::json;
use tokio::task::JoinSet;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Print one fleet layout as a placement response.
    Place {
        #[arg(long, value_enum, default_value_t = PlacerKind::Random)]
        placer: PlacerKind,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play a series between two bots and print the report.
    Duel {
        #[arg(long, value_enum, default_value_t = PlacerKind::Random)]
        placer1: PlacerKind,
        #[arg(long, value_enum, default_value_t = FiringKind::HeatMap)]
        firing1: FiringKind,
        #[arg(long, value_enum, default_value_t = PlacerKind::Adaptive)]
        placer2: PlacerKind,
        #[arg(long, value_enum, default_value_t = FiringKind::Adaptive)]
        firing2: FiringKind,
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Average shots each firing strategy needs to sink a random fleet.
    Bench {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, value_enum)]
        firing: Vec<FiringKind>,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BenchResult {
    firing: String,
    games: usize,
    average_shots: f64,
    best: usize,
    worst: usize,
}

fn bench_kind(kind: FiringKind, games: usize, seed: Option<u64>) -> anyhow::Result<BenchResult> {
    let detector = SharedDetector::new();
    let mut factory = StrategyFactory::new(kind, detector.clone(), seed);
    let mut placer = PlacerKind::Random.build(seed.map(|s| s.wrapping_add(1)), &detector);
    let mut shots = Vec::with_capacity(games);
    for _ in 0..games {
        let mut board = FleetBoard::new(placer.place_ships()?)?;
        let mut strategy = factory.create();
        shots.push(shots_to_sink(strategy.as_mut(), &mut board)?);
    }
    let total: usize = shots.iter().sum();
    Ok(BenchResult {
        firing: format!("{:?}", kind),
        games,
        average_shots: total as f64 / games.max(1) as f64,
        best: shots.iter().copied().min().unwrap_or(0),
        worst: shots.iter().copied().max().unwrap_or(0),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Place { placer, seed } => {
            let mut bot = GameSessions::new("placer", placer, FiringKind::Sweep, seed);
            let response = bot.place_ships(&PlaceShipsRequestPayload {
                request: PlaceShipsRequest {
                    game_id: "local".to_string(),
                },
            })?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Duel {
            placer1,
            firing1,
            placer2,
            firing2,
            games,
            seed,
        } => {
            if let Some(s) = seed {
                info!("Using fixed seed: {} (series will be reproducible)", s);
            }
            let mut bot1 = GameSessions::new("player1", placer1, firing1, seed);
            let mut bot2 =
                GameSessions::new("player2", placer2, firing2, seed.map(|s| s.wrapping_add(1)));
            let report = play_series(&mut bot1, &mut bot2, games)?;
            let result = json!({
                "player1": {"placement": format!("{:?}", placer1), "firing": format!("{:?}", firing1)},
                "player2": {"placement": format!("{:?}", placer2), "firing": format!("{:?}", firing2)},
                "detected": {
                    "player1": format!("{:?}", bot1.detector().detected()),
                    "player2": format!("{:?}", bot2.detector().detected()),
                },
                "wins": report.wins,
                "unfinished": report.unfinished,
                "games": report.games,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Bench {
            games,
            firing,
            seed,
        } => {
            let kinds = if firing.is_empty() {
                FiringKind::ALL.to_vec()
            } else {
                firing
            };
            let mut tasks = JoinSet::new();
            for kind in kinds {
                tasks.spawn_blocking(move || bench_kind(kind, games, seed));
            }
            let mut results = Vec::new();
            while let Some(joined) = tasks.join_next().await {
                results.push(joined??);
            }
            results.sort_by(|a, b| a.average_shots.total_cmp(&b.average_shots));
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }
    Ok(())
}
