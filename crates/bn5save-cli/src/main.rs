mod cli;
mod commands;
mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use bn5save_core::Catalog;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("bn5save=info".parse()?)
                .add_directive("bn5save_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => {
            info!("Loaded config from {:?}", cli.config);
            c
        }
        Err(e) => {
            warn!("{:#}, using defaults", e);
            Config::default()
        }
    };

    let chips = cli.chips.as_ref().unwrap_or(&config.catalog.chips);
    let ncps = cli.ncps.as_ref().unwrap_or(&config.catalog.ncps);
    let catalog = Arc::new(
        Catalog::load(chips, ncps)
            .with_context(|| format!("Failed to load catalog ({:?}, {:?})", chips, ncps))?,
    );

    match cli.command {
        Command::Show { save, json } => commands::show::run(&save, catalog, json),
        Command::Folder { save, folder } => commands::folder::run(&save, catalog, folder),
        Command::Navicust { save } => commands::navicust::run(&save, catalog),
        Command::Hexdump {
            save,
            offset,
            size,
            ascii,
        } => commands::hexdump::run(&save, catalog, &offset, size, ascii),
        Command::SetChip {
            target,
            folder,
            slot,
            chip,
            code,
        } => commands::edit::set_chip(&target, catalog, folder, slot, chip, code),
        Command::ClearChip {
            target,
            folder,
            slot,
        } => commands::edit::clear_chip(&target, catalog, folder, slot),
        Command::EquipFolder { target, folder } => {
            commands::edit::equip_folder(&target, catalog, folder)
        }
        Command::SetPackCount {
            target,
            chip,
            variant,
            count,
        } => commands::edit::set_pack_count(&target, catalog, chip, variant, count),
        Command::SetPart {
            target,
            slot,
            part,
            variant,
            col,
            row,
            rot,
            compressed,
        } => commands::edit::set_part(
            &target,
            catalog,
            slot,
            bn5save_core::Placement {
                id: part,
                variant,
                col,
                row,
                rot,
                compressed,
            },
        ),
        Command::ClearPart { target, slot } => commands::edit::clear_part(&target, catalog, slot),
    }
}
