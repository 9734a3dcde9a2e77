use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "algo-drills", about = "Standalone algorithm drills", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    SubsetSum {
        #[arg(long, default_value = "4,32,2,35,67,3,53,5")]
        values: String,
        #[arg(long, default_value_t = 39)]
        target: i64,
        #[arg(long)]
        json: bool,
    },
    MergeSort {
        #[arg(long, default_value = "43,2,24,3,65,32,3,56")]
        values: String,
        #[arg(long)]
        json: bool,
    },
    SelectionSort {
        #[arg(long, default_value = "5,3,8,1,2")]
        values: String,
        #[arg(long)]
        json: bool,
    },
    Map,
}
