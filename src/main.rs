//! fairverify command line verifier

use clap::{Args, Parser, Subcommand};
use fairverify::{
    config::{generate_sample_config, ConfigLoader},
    errors::VerifierResult,
    games::GameType,
    hash::{digest, generate_server_seed},
    logging::init_logging,
    verify_batch, verify_hash, verify_outcome, CompositeSeed, VerificationReport,
    VerificationRequest,
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Provably fair outcome verifier
#[derive(Parser)]
#[command(name = "fairverify")]
#[command(about = "Recompute seeded game outcomes and check server seed commitments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompute an outcome and check the commitment
    Outcome {
        #[command(flatten)]
        seed: SeedArgs,

        /// Published SHA-256 of the server seed
        #[arg(long)]
        server_seed_hash: String,

        /// Game id (plinko, dice, blackjack, roulette, mines)
        #[arg(short, long)]
        game: GameType,

        #[command(flatten)]
        options: GameOptionArgs,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Hash a server seed, optionally checking it against a commitment
    Hash {
        #[arg(long)]
        server_seed: String,

        #[arg(long)]
        server_seed_hash: Option<String>,
    },

    /// List games and their options
    Games,

    /// Verify a JSON array of requests from a file
    Batch {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Generate a random server seed and its commitment
    Commit,

    /// Write a sample configuration file
    InitConfig { path: PathBuf },
}

#[derive(Args)]
struct SeedArgs {
    #[arg(long)]
    server_seed: String,

    #[arg(long)]
    client_seed: String,

    #[arg(long)]
    nonce: String,
}

/// Per-game options; only the ones given are passed on
#[derive(Args)]
struct GameOptionArgs {
    /// Mines: cells per side
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Mines: number of mines
    #[arg(long, allow_negative_numbers = true)]
    mines: Option<i64>,

    /// Plinko: number of rows
    #[arg(long, allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Blackjack: number of cards
    #[arg(long, allow_negative_numbers = true)]
    cards: Option<i64>,
}

impl GameOptionArgs {
    fn to_json(&self) -> Value {
        let mut options = Map::new();
        for (name, value) in [
            ("size", self.size),
            ("mines", self.mines),
            ("rows", self.rows),
            ("cards", self.cards),
        ] {
            if let Some(value) = value {
                options.insert(name.to_string(), Value::from(value));
            }
        }

        if options.is_empty() {
            Value::Null
        } else {
            Value::Object(options)
        }
    }
}

fn main() -> VerifierResult<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::new().with_path(path).load()?,
        None => ConfigLoader::new().load()?,
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging);

    match cli.command {
        Commands::Outcome {
            seed,
            server_seed_hash,
            game,
            options,
            json,
        } => {
            let request = VerificationRequest::new(
                CompositeSeed::new(seed.server_seed, seed.client_seed, seed.nonce),
                server_seed_hash,
                game,
                options.to_json(),
            );
            let report = verify_outcome(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Hash {
            server_seed,
            server_seed_hash,
        } => match server_seed_hash {
            Some(commitment) => {
                let verification = verify_hash(&server_seed, &commitment)?;
                println!("Computed hash: {}", verification.expected_hash);
                println!("Provided hash: {}", verification.received_hash);
                println!("Valid:         {}", verification.is_valid());
            }
            None => println!("{}", digest(&server_seed)),
        },
        Commands::Games => print_games(),
        Commands::Batch { file, json } => run_batch(&file, json)?,
        Commands::Commit => {
            let server_seed = generate_server_seed();
            println!("Server seed:      {}", server_seed);
            println!("Server seed hash: {}", digest(&server_seed));
        }
        Commands::InitConfig { path } => {
            generate_sample_config(&path.to_string_lossy())?;
            println!("Wrote sample configuration to {}", path.display());
        }
    }

    Ok(())
}

fn print_report(report: &VerificationReport) {
    println!("Game:          {}", report.game);
    println!("Seed:          {}", report.seed);
    println!("Computed hash: {}", report.hash.expected_hash);
    println!("Provided hash: {}", report.hash.received_hash);
    println!("Hash valid:    {}", report.hash_valid);
    println!("Result:        {}", report.outcome.result);

    if !report.outcome.steps.is_empty() {
        println!();
        for (i, step) in report.outcome.steps.iter().enumerate() {
            let details = step
                .metadata
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            println!("  {:>2}. {:<5} {:<20} {}", i + 1, step.title, step.raw, details);
        }
    }

    if report.display != report.outcome.result {
        println!();
        println!("{}", report.display);
    }
}

fn print_games() {
    for game in GameType::ALL {
        let schema = game.schema();
        if schema.is_empty() {
            println!("{}", game);
            continue;
        }

        let fields = schema
            .fields
            .iter()
            .map(|field| match field.max {
                Some(max) => format!("--{} {}..={}", field.name, field.min, max),
                None => format!("--{} {}..", field.name, field.min),
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<10} {}", game.id(), fields);
    }
}

fn run_batch(file: &Path, json: bool) -> VerifierResult<()> {
    let content = std::fs::read_to_string(file)?;
    let requests: Vec<VerificationRequest> = serde_json::from_str(&content)?;
    let results = verify_batch(&requests);

    if json {
        let entries: Vec<Value> = results
            .iter()
            .map(|result| match result {
                Ok(report) => serde_json::json!({ "ok": report }),
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(report) => println!(
                "#{} {} hash_valid={} result={}",
                i + 1,
                report.game,
                report.hash_valid,
                report.outcome.result
            ),
            Err(e) => println!("#{} error: {}", i + 1, e),
        }
    }
    Ok(())
}
