use clap::Parser;

use algo_drills::cli::Cli;
use algo_drills::commands::execute_command;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute_command(cli.command)
}
