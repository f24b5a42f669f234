use clap::Parser;
use tailwind_config::{check, emit, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Emit(args) => {
            if let Err(e) = emit(args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Check(args) => match check(args) {
            Ok(()) => {
                println!("Configuration OK");
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
