use anyhow::Result;
use owo_colors::OwoColorize;

use super::{Symbol, encode};
use qrwire_types::RenderHints;

/// Draws the code as Unicode half blocks, two module rows per text
/// line, quiet zone included.
///
/// With color enabled the lines are forced black-on-white so the code
/// scans regardless of the terminal theme; otherwise the block glyphs
/// are left in the default colors.
pub fn draw(payload: &str, hints: &RenderHints, enable_color: bool) -> Result<()> {
    let symbol = encode(payload, hints)?;
    for line in render_lines(&symbol, hints.border, enable_color) {
        println!("{}", line);
    }
    Ok(())
}

fn render_lines(symbol: &Symbol, border: u32, enable_color: bool) -> Vec<String> {
    let border = border as i32;
    let size = symbol.width();
    let mut lines = Vec::new();

    let mut y = -border;
    while y < size + border {
        let mut line = String::new();
        for x in -border..size + border {
            line.push(half_block(symbol.module(x, y), symbol.module(x, y + 1)));
        }
        if enable_color {
            lines.push(format!("{}", line.black().on_white()));
        } else {
            lines.push(line);
        }
        y += 2;
    }
    lines
}

fn half_block(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}
