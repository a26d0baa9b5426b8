use clap::Parser;
use squadsheet::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Squadsheet - Season Snapshot Exporter");
    println!("=====================================");
    println!();
    println!("Fetch club spreadsheet exports (players, matches, player stats) and");
    println!("produce a season-scoped JSON snapshot for downstream consumption.");
    println!();
    println!("USAGE:");
    println!("    squadsheet <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    export      Export a season snapshot as JSON (main command)");
    println!("    check       Parse the sheet exports and report per-table results");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Export the current season from a published spreadsheet:");
    println!("    squadsheet export --sheet-id 1AbC... --season 2026 --output snapshot.json");
    println!();
    println!("    # Export all seasons from local CSV exports:");
    println!("    squadsheet export --input ./exports --pretty");
    println!();
    println!("    # Check how many rows each table yields:");
    println!("    squadsheet check --input ./exports");
    println!();
    println!("For detailed help on any command, use:");
    println!("    squadsheet <COMMAND> --help");
}
