use clap::Parser;

use cypher_module::cli::{Cli, Commands};
use cypher_module::commands::{run_config, run_init, run_split};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Split(args) => run_split(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
