//! Bindings command - print or save the default key map

use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::PathBuf;

use framekey_core::config::{self, InputConfig};
use framekey_core::{TargetVersion, default_bindings};

/// Arguments for the bindings command
#[derive(Args)]
pub struct BindingsArgs {
    /// Target version (1-3)
    #[arg(short = 't', long = "target", default_value = "1")]
    pub target_version: u8,

    /// Write to this file instead of stdout
    #[arg(short, long, conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write to the user configuration file
    #[arg(long)]
    pub save: bool,
}

/// Execute the bindings command
pub fn execute(args: BindingsArgs) -> Result<()> {
    if !(1..=3).contains(&args.target_version) {
        bail!("Target version must be 1, 2 or 3 (got {})", args.target_version);
    }
    let version = TargetVersion(args.target_version);

    let config = InputConfig {
        target_version: version,
        bindings: Some(default_bindings(version)),
        ..InputConfig::default()
    };

    if args.save {
        config::save(&config).context("Failed to save input configuration")?;
        if let Some(dir) = config::config_dir() {
            println!("Saved {}", dir.join(config::CONFIG_FILE).display());
        }
        return Ok(());
    }

    match args.output {
        Some(path) => {
            config::save_to(&config, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let text = render(&config)?;
            print!("{}", text);
        }
    }
    Ok(())
}

/// Render a configuration as TOML.
pub fn render(config: &InputConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize key map")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_map_parses_back() {
        let config = InputConfig {
            target_version: TargetVersion::V2,
            bindings: Some(default_bindings(TargetVersion::V2)),
            ..InputConfig::default()
        };
        let text = render(&config).unwrap();
        assert!(text.contains("target_version = 2"));

        let parsed: InputConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.toml");
        execute(BindingsArgs {
            target_version: 3,
            output: Some(path.clone()),
            save: false,
        })
        .unwrap();

        let loaded = config::load_from(&path).unwrap();
        assert_eq!(loaded.target_version, TargetVersion::V3);
        assert_eq!(loaded.bindings, Some(default_bindings(TargetVersion::V3)));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let result = execute(BindingsArgs {
            target_version: 7,
            output: None,
            save: false,
        });
        assert!(result.is_err());
    }
}
