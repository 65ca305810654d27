use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

use dsn_monitor::diagnostics::LogDiagnostics;
use dsn_monitor::dish::{DishStatus, StatusOrder};
use dsn_monitor::reference::ReferenceData;
use dsn_monitor::web::{self, Config};
use dsn_monitor::Pipeline;

#[derive(Parser)]
#[command(name = "dsn-monitor")]
#[command(about = "Deep space network antenna status normalizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a feed file and print the snapshot as JSON
    Normalize {
        feed: String,
        #[arg(long, value_enum, default_value_t = StatusOrder::OfflineFirst)]
        order: StatusOrder,
    },
    /// Check that a feed file parses and summarize it
    Validate { feed: String },
    /// Look up a spacecraft by id
    Spacecraft {
        id: String,
        /// Short name to use when the id is unknown
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Serve the normalized view over HTTP
    Serve { config: String },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { feed, order } => normalize(&feed, order),
        Commands::Validate { feed } => validate(&feed),
        Commands::Spacecraft { id, name } => spacecraft(&id, &name),
        Commands::Serve { config } => serve(&config),
    }
}

fn default_pipeline(order: StatusOrder) -> Pipeline {
    Pipeline::new(
        Arc::new(ReferenceData::builtin()),
        Arc::new(LogDiagnostics::new()),
        order,
    )
}

fn read_feed(path: &str) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            None
        }
    }
}

fn normalize(path: &str, order: StatusOrder) -> ExitCode {
    let Some(text) = read_feed(path) else {
        return ExitCode::FAILURE;
    };

    let snapshot = match default_pipeline(order).process(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Feed error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: &str) -> ExitCode {
    let Some(text) = read_feed(path) else {
        return ExitCode::FAILURE;
    };

    match default_pipeline(StatusOrder::default()).process(&text) {
        Ok(snapshot) => {
            let online = snapshot
                .dishes
                .iter()
                .filter(|d| d.status() == DishStatus::Online)
                .count();
            println!(
                "Feed is valid ({} stations, {} of {} dishes online)",
                snapshot.stations.len(),
                online,
                snapshot.dishes.len()
            );
            for dish in &snapshot.dishes {
                let station = dish
                    .metadata
                    .station
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {}: {} @ {} ({} targets)",
                    dish.name,
                    dish.status(),
                    station,
                    dish.target.len()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Feed error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn spacecraft(id: &str, name: &str) -> ExitCode {
    let record = default_pipeline(StatusOrder::default()).lookup_spacecraft(id, name);
    println!("{} ({}): {}", record.short_name, record.id, record.long_name);
    for source in &record.sources {
        println!("  {} <{}>", source.title, source.url);
    }
    ExitCode::SUCCESS
}

fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = match web::build_state(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(state)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
