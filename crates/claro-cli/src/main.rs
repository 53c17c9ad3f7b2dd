use clap::{Parser, Subcommand};
use std::path::PathBuf;

use claro_cli::commands::{cmd_process, cmd_stages};

#[derive(Parser)]
#[command(name = "claro")]
#[command(version, about = "Deterministic image enhancement for labeled datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance every image under <INPUT>/{train,test,val}/<class>/ into a
    /// mirrored output tree
    Process {
        /// Dataset root containing the train/test/val splits
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output root for the processed tree
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Suppress per-file progress output
        #[arg(long)]
        silent: bool,

        /// Enable verbose diagnostics on stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Dump every intermediate pipeline stage for a single image
    Stages {
        /// Input image file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Directory for the stage PNGs
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            input,
            out,
            threads,
            silent,
            verbose,
        } => cmd_process(input, out, threads, silent, verbose),

        Commands::Stages { input, out } => cmd_stages(input, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
