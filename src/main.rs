// Copyright 2026 Dump Partitions Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use dump_partitions::{
    cli::{Cli, Commands},
    conf::config::{CONFIG_FILE_DEFAULT, Config},
    partitions::{Partitions, locations},
    report, utils,
};

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        return Config::from_file(config_path);
    }
    match Config::load_default() {
        Ok(config) => Ok(config),
        Err(e) => {
            if Path::new(CONFIG_FILE_DEFAULT).exists() {
                eprintln!("Error loading config: {:#}", e);
            }
            Ok(Config::default())
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli)?;
    config.merge_with_cli(cli.verbose, cli.json, cli.prop_files.clone());

    match &cli.command {
        Some(Commands::GenConfig { output }) => {
            Config::default().save_to_file(output)?;
            return Ok(());
        }
        Some(Commands::ShowConfig) => {
            println!("{}", serde_json::to_string(&config)?);
            return Ok(());
        }
        _ => {}
    }

    utils::init_logging(config.verbose)?;

    let dump = cli.dump.as_deref().context("No dump path given (use --dump)")?;
    let dump = utils::absolute_dump_path(dump)?;

    if let Some(Commands::Candidates { name }) = &cli.command {
        let candidates = locations::search_locations(&dump, name);
        println!(
            "{}",
            report::render_candidates(name, candidates.as_slice(), config.json)?
        );
        return Ok(());
    }

    if !dump.is_dir() {
        log::warn!("{} is not a directory", dump.display());
    }

    let partitions = Partitions::with_prop_files(&dump, &config.prop_file_paths())?;
    println!("{}", report::render_partitions(&partitions, config.json)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("Fatal Error: {:#}", e);
        eprintln!("Fatal Error: {:#}", e);
        std::process::exit(1);
    }
}
