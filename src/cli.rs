// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::conf::config::CONFIG_FILE_DEFAULT;

#[derive(Parser, Debug)]
#[command(
    name = "dump-partitions",
    version,
    about = "Locate Android partitions inside an extracted firmware dump"
)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
    /// Print results as JSON
    #[arg(long = "json")]
    pub json: bool,
    /// Canonical property files, probed before the built-in ones
    #[arg(short = 'p', long = "prop-files", value_delimiter = ',')]
    pub prop_files: Vec<String>,
    /// Root of the extracted dump
    #[arg(short = 'd', long = "dump")]
    pub dump: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate every partition in the dump (default)
    Locate,
    /// List candidate directories for one partition name
    Candidates { name: String },
    GenConfig {
        #[arg(short = 'o', long = "output", default_value = CONFIG_FILE_DEFAULT)]
        output: PathBuf,
    },
    ShowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_without_subcommand_means_locate() {
        let cli = Cli::try_parse_from(["dump-partitions", "-v", "--json", "-d", "/tmp/dump"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.json);
        assert_eq!(cli.dump, Some(PathBuf::from("/tmp/dump")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn prop_files_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "dump-partitions",
            "-p",
            "build.prop,etc/prop.default",
            "--dump",
            "out",
            "candidates",
            "odm",
        ])
        .unwrap();
        assert_eq!(cli.prop_files, vec!["build.prop", "etc/prop.default"]);
        assert!(matches!(cli.command, Some(Commands::Candidates { ref name }) if name == "odm"));
    }

    #[test]
    fn gen_config_has_default_output() {
        let cli = Cli::try_parse_from(["dump-partitions", "gen-config"]).unwrap();
        match cli.command {
            Some(Commands::GenConfig { output }) => {
                assert_eq!(output, PathBuf::from(CONFIG_FILE_DEFAULT))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
