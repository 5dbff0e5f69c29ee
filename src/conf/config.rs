// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::defs;

pub use crate::defs::CONFIG_FILE_DEFAULT;

fn default_prop_files() -> Vec<String> {
    defs::BUILD_PROP_LOCATION
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verbose: bool,
    pub json: bool,
    /// Canonical property files, probed before the built-in catalog.
    pub prop_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            json: false,
            prop_files: default_prop_files(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self> {
        Self::from_file(CONFIG_FILE_DEFAULT)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn merge_with_cli(&mut self, verbose: bool, json: bool, prop_files: Vec<String>) {
        if verbose {
            self.verbose = true;
        }
        if json {
            self.json = true;
        }
        if !prop_files.is_empty() {
            self.prop_files = prop_files;
        }
    }

    pub fn prop_file_paths(&self) -> Vec<PathBuf> {
        self.prop_files.iter().map(PathBuf::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("json = true\n").unwrap();
        assert!(config.json);
        assert!(!config.verbose);
        assert_eq!(config.prop_files, vec!["build.prop", "etc/build.prop"]);
    }

    #[test]
    fn saved_config_loads_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dump_partitions.toml");

        let config = Config {
            verbose: true,
            json: false,
            prop_files: vec!["build.prop".into(), "vendor/default.prop".into()],
        };
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn broken_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "prop_files = 3").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
        assert!(Config::from_file(tmp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn cli_values_override_file() {
        let mut config = Config::default();
        config.merge_with_cli(true, false, Vec::new());
        assert!(config.verbose);
        assert!(!config.json);
        assert_eq!(config.prop_files, default_prop_files());

        config.merge_with_cli(false, true, vec!["my.prop".into()]);
        assert!(config.verbose);
        assert!(config.json);
        assert_eq!(config.prop_file_paths(), vec![PathBuf::from("my.prop")]);
    }
}
