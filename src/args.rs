use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tailwind Config CLI - Emits and checks the Tailwind build configuration
#[derive(Parser, Debug)]
#[command(name = "tailwind-config-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit the build configuration as JSON for the Tailwind build tool
    Emit(EmitArgs),
    /// Validate the configuration and verify content roots exist
    Check(CheckArgs),
}

/// Arguments for the emit command
#[derive(Parser, Debug, Clone)]
pub struct EmitArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = "TAILWIND_CONFIG",
        help = "Configuration file merged over the built-in defaults"
    )]
    pub config: Option<PathBuf>,

    /// Output path for the emitted JSON
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Path the build configuration JSON is written to (stdout when omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Additional content roots to scan
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        num_args = 0..,
        help = "Extra module directories appended to the content sources"
    )]
    pub roots: Vec<String>,

    /// Pretty-print the emitted JSON
    #[arg(
        long = "pretty",
        default_value_t = false,
        help = "Emit human-readable JSON"
    )]
    pub pretty: bool,

    /// Safelist everything, disabling purging of unused styles
    #[arg(
        long = "no-purge",
        default_value_t = false,
        help = "Add a catch-all safelist entry so no styles are purged"
    )]
    pub no_purge: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = "TAILWIND_CONFIG",
        help = "Configuration file merged over the built-in defaults"
    )]
    pub config: Option<PathBuf>,

    /// Additional content roots to scan
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        num_args = 0..,
        help = "Extra module directories appended to the content sources"
    )]
    pub roots: Vec<String>,
}

impl EmitArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(output), Some(config)) = (&self.output, &self.config) {
            if output == config {
                return Err("Output path must differ from the config file path".to_string());
            }
        }
        Ok(())
    }
}
