//! Config inspection command.

use std::path::Path;

use crate::config::{self, Config};

/// Print the effective config, optionally writing defaults first
pub fn cmd_config(current: &Config, path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    let target = match path {
        Some(p) => Some(p.to_path_buf()),
        None => config::config_path(),
    };

    if init {
        let Some(ref target) = target else {
            anyhow::bail!("Could not determine config directory");
        };
        if target.exists() {
            println!("Config already exists at {}", target.display());
        } else {
            config::save_to(&Config::default(), target)?;
            println!("Wrote default config to {}", target.display());
        }
    }

    if let Some(ref target) = target {
        println!("# {}", target.display());
    }
    println!("{}", toml::to_string_pretty(current)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        cmd_config(&Config::default(), Some(&path), true).unwrap();
        assert_eq!(config::load_from(&path), Config::default());

        std::fs::write(&path, "[validation]\nstrict = true\n").unwrap();
        cmd_config(&Config::default(), Some(&path), true).unwrap();
        assert!(config::load_from(&path).validation.strict);
    }
}
