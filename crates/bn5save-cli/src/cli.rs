//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bn5save")]
#[command(about = "Inspect and edit Battle Network 5 save dumps")]
#[command(version)]
pub struct Cli {
    /// Config file naming the catalog files
    #[arg(short, long, env = "BN5SAVE_CONFIG", default_value = "bn5save.toml")]
    pub config: PathBuf,

    /// Chip catalog (overrides the config file)
    #[arg(long, env = "BN5SAVE_CHIPS", global = true)]
    pub chips: Option<PathBuf>,

    /// Navicust part catalog (overrides the config file)
    #[arg(long, env = "BN5SAVE_NCPS", global = true)]
    pub ncps: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show game, folder and navicust information
    Show {
        save: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the chips of a folder
    Folder {
        save: PathBuf,
        /// Folder to list (defaults to the equipped folder)
        #[arg(short, long)]
        folder: Option<usize>,
    },
    /// Show navicust placements and the composed grid
    Navicust { save: PathBuf },
    /// Hexdump a window of the unmasked save image
    Hexdump {
        save: PathBuf,
        /// Image offset (hex)
        #[arg(short, long, default_value = "0")]
        offset: String,
        /// Number of bytes to dump
        #[arg(short, long, default_value = "256")]
        size: usize,
        /// Show ASCII column
        #[arg(long)]
        ascii: bool,
    },
    /// Put a chip into a folder slot
    SetChip {
        #[command(flatten)]
        target: EditTarget,
        #[arg(long)]
        folder: usize,
        #[arg(long)]
        slot: usize,
        /// Chip id
        #[arg(long)]
        chip: u16,
        /// Code letter (A-Z or *)
        #[arg(long)]
        code: char,
    },
    /// Empty a folder slot
    ClearChip {
        #[command(flatten)]
        target: EditTarget,
        #[arg(long)]
        folder: usize,
        #[arg(long)]
        slot: usize,
    },
    /// Select the equipped folder
    EquipFolder {
        #[command(flatten)]
        target: EditTarget,
        folder: usize,
    },
    /// Set the pack count of a chip/code variant
    SetPackCount {
        #[command(flatten)]
        target: EditTarget,
        #[arg(long)]
        chip: u16,
        #[arg(long)]
        variant: usize,
        #[arg(long)]
        count: u8,
    },
    /// Place a navicust part
    SetPart {
        #[command(flatten)]
        target: EditTarget,
        #[arg(long)]
        slot: usize,
        /// Part id
        #[arg(long)]
        part: u8,
        #[arg(long, default_value = "0")]
        variant: u8,
        #[arg(long)]
        col: u8,
        #[arg(long)]
        row: u8,
        /// Quarter turns clockwise (0-3)
        #[arg(long, default_value = "0")]
        rot: u8,
        #[arg(long)]
        compressed: bool,
    },
    /// Remove a navicust part
    ClearPart {
        #[command(flatten)]
        target: EditTarget,
        #[arg(long)]
        slot: usize,
    },
}

/// Input dump and where to write the edited one
#[derive(Args)]
pub struct EditTarget {
    pub save: PathBuf,
    /// Output file (defaults to overwriting the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl EditTarget {
    pub fn output_path(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.save)
    }
}
