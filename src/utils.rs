// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[cfg(not(target_os = "android"))]
use std::io::Write;

use crate::partitions::locations;

pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(level)
                .with_tag(crate::defs::LOG_TAG),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        let mut builder = env_logger::Builder::new();

        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        });
        builder
            .filter_level(level)
            .try_init()
            .context("Failed to initialize logger")?;
    }
    Ok(())
}

/// Absolute form of `path` relative to the working directory, without
/// resolving symlinks or checking existence.
pub fn absolute_dump_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve dump path {}", path.display()))?;
    Ok(locations::normalize(&absolute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_dump_path_becomes_absolute() {
        let resolved = absolute_dump_path(Path::new("./out/dump")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("out/dump"));

        let already = absolute_dump_path(Path::new("/srv/dump")).unwrap();
        assert_eq!(already, PathBuf::from("/srv/dump"));
    }
}
