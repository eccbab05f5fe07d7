//! Navicust command implementation.
//!
//! Lists placed parts and renders the composed grid, one colour per slot:
//!
//! ```text
//!  .  .  0  .  .
//!  .  .  0  3  3
//!  .  0  0  3  .  <- command line
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use bn5save_core::Catalog;
use owo_colors::{AnsiColors, OwoColorize};

use super::load_save;

const SLOT_COLORS: [AnsiColors; 6] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
];

/// Run the navicust command
pub fn run(path: &Path, catalog: Arc<Catalog>) -> Result<()> {
    let mut save = load_save(path, catalog)?;
    let grid = save.navicust_grid();
    let navicust = save.navicust();

    println!("=== Parts ===");
    for (slot, p) in navicust.placements() {
        let name = save
            .catalog()
            .part(p.id)
            .map(|info| info.name.as_str())
            .unwrap_or("???");
        println!(
            "[{:02}] {:<12} id={} variant={} col={} row={} rot={}{}",
            slot,
            name,
            p.id,
            p.variant,
            p.col,
            p.row,
            p.rot,
            if p.compressed { " (compressed)" } else { "" }
        );
    }

    println!();
    println!("=== Grid ===");
    for row in 0..navicust.height() {
        let mut line = String::new();
        for col in 0..navicust.width() {
            let cell = match grid.get(row, col) {
                Some(slot) => format!("{:>2}", slot)
                    .color(SLOT_COLORS[slot % SLOT_COLORS.len()])
                    .to_string(),
                None => " .".to_string(),
            };
            line.push_str(&cell);
            line.push(' ');
        }
        if row == navicust.command_line() {
            println!("{} {}", line, "<- command line".dimmed());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
