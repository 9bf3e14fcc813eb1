use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "caffeine-cli", version, about = "Caffeine Tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dose entry session (default)
    Session(commands::session::SessionArgs),
    /// Render the chart for a fixed list of doses
    Chart(commands::chart::ChartArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr so stdout stays clean for JSON; level from CAFFEINE_LOG.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("CAFFEINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        None => commands::session::run(commands::session::SessionArgs::default()),
        Some(Commands::Session(args)) => commands::session::run(args),
        Some(Commands::Chart(args)) => commands::chart::run(args),
        Some(Commands::Config { action }) => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
