use std::error::Error;

use clap::{Parser, Subcommand};
use qecc_sim::commands::{
    batch::{self, BatchArgs},
    generate::{self, GenerateArgs},
    syndrome::{self, SyndromeArgs},
    verify::{self, VerifyArgs},
};

#[derive(Parser, Debug)]
#[command(name = "qecc-sim", about = "Randomized stabilizer code generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw one code and print or write it.
    Generate(GenerateArgs),
    /// Draw every code listed in a YAML batch file.
    Batch(BatchArgs),
    /// Re-run the commutation and independence checks on a stored code.
    Verify(VerifyArgs),
    /// Evaluate the syndrome and logical action of a Pauli error.
    Syndrome(SyndromeArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Batch(args) => batch::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Syndrome(args) => syndrome::run(&args),
    }
}
