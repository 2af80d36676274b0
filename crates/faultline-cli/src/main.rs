//! Faultline CLI
//!
//! Demonstration program for the logging façade

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "faultline")]
#[command(about = "Faultline - leveled logging with remote error reporting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Initialize the global logger and emit one message per level
    Demo(commands::demo::DemoArgs),
    /// Validate a DSN and print the endpoint events would be sent to
    CheckDsn(commands::check_dsn::CheckDsnArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo(args) => commands::demo::execute(args),
        Commands::CheckDsn(args) => commands::check_dsn::execute(args),
    };

    if let Err(e) = result {
        faultline_core::logger().flush();
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
