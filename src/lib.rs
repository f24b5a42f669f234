pub mod args;
pub mod color;
pub mod config;
pub mod content;
pub mod errors;
pub mod plugin;
pub mod theme;

pub use args::{CheckArgs, Cli, Commands, EmitArgs};
pub use color::{ColorToken, DynamicColor};
pub use config::TailwindConfig;
pub use content::{ContentSources, CONTENT_GLOBS};
pub use errors::{ConfigError, Result};
pub use plugin::PluginRef;
pub use theme::{ContainerConfig, FontSize, Theme, REQUIRED_PALETTE_KEYS};

use std::path::Path;

/// Resolve the effective descriptor: built-in defaults, an optional config
/// file merged on top, then any extra content roots from the command line.
fn load_config(config_path: Option<&Path>, extra_roots: &[String]) -> Result<TailwindConfig> {
    let mut config = TailwindConfig::default();

    if let Some(path) = config_path {
        config = config.merge(TailwindConfig::from_file(path)?);
    }

    for root in extra_roots {
        config.content.push_root(root.clone());
    }

    Ok(config)
}

/// Emit the build configuration JSON to a file or stdout.
pub fn emit(args: EmitArgs) -> Result<()> {
    args.validate()
        .map_err(|message| ConfigError::Invalid { message })?;

    let mut config = load_config(args.config.as_deref(), &args.roots)?;

    if args.no_purge {
        config.safelist = Some(vec![".*".to_string()]);
    }

    config.validate()?;

    let rendered = config.emit(args.pretty)?;
    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            write_atomic(path, &rendered)?;
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Validate the descriptor and verify its content roots exist on disk.
pub fn check(args: CheckArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), &args.roots)?;
    config.check()
}

/// Write file atomically by writing to temp file then renaming
fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
    use std::io::Write;

    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    let mut file = std::fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    std::fs::rename(&temp_path, path)?;

    Ok(())
}
