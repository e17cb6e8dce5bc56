use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{init_logging, InteractiveAgent, Match, RandomAgent, Side};

#[derive(Parser)]
#[command(author, version, about = "Two-player grid battle on 10x10 boards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer from this terminal.
    Play {
        #[arg(long, help = "Fix the computer's RNG seed (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "Human")]
        name: String,
    },
    /// Let two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seeds for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
}

fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, name } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (computer moves will be reproducible)", s);
            }
            let human = InteractiveAgent::stdio().with_name(name);
            let computer = RandomAgent::new(rng_from(seed));
            let mut game = Match::new(Box::new(human), Box::new(computer))?;
            let outcome = game.run()?;
            println!("{} has won!", outcome.winner_name);
        }
        Commands::Auto { seed, games } => {
            let mut wins = [0u32; 2];
            for g in 0..games {
                let base = seed.map(|s| s.wrapping_add(2 * g as u64));
                let a = RandomAgent::new(rng_from(base)).with_name("Computer A");
                let b = RandomAgent::new(rng_from(base.map(|s| s.wrapping_add(1))))
                    .with_name("Computer B");
                let mut game = Match::new(Box::new(a), Box::new(b))?;
                let outcome = game.run()?;
                match outcome.winner {
                    Side::A => wins[0] += 1,
                    Side::B => wins[1] += 1,
                }
                println!(
                    "game {}: {} won ({} vs {} shots)",
                    g + 1,
                    outcome.winner_name,
                    outcome.shots_a,
                    outcome.shots_b
                );
            }
            if games > 1 {
                println!("A won {}, B won {}", wins[0], wins[1]);
            }
        }
    }
    Ok(())
}
