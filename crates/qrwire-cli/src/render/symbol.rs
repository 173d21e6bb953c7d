use anyhow::Result;
use qrcode::{Color, EcLevel as QrEcLevel, QrCode};

use qrwire_types::{EcLevel, RenderHints};

/// A rendered module grid, decoupled from the encoder so the terminal
/// and PNG writers share one coordinate convention.
pub struct Symbol {
    width: i32,
    modules: Vec<bool>,
}

impl Symbol {
    /// Modules per side, quiet zone excluded.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// True when the module at (x, y) is dark. Out-of-range coordinates
    /// read light, so callers can sweep across the quiet zone without
    /// bounds checks.
    pub fn module(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.width {
            return false;
        }
        self.modules[(y * self.width + x) as usize]
    }
}

/// Encode a payload at the requested error-correction level. Version is
/// chosen automatically to fit the payload.
pub fn encode(payload: &str, hints: &RenderHints) -> Result<Symbol> {
    let code = QrCode::with_error_correction_level(payload, ec_level(hints.ec_level))?;
    let width = code.width() as i32;
    let modules = code
        .to_colors()
        .iter()
        .map(|color| *color == Color::Dark)
        .collect();
    Ok(Symbol { width, modules })
}

fn ec_level(level: EcLevel) -> QrEcLevel {
    match level {
        EcLevel::Low => QrEcLevel::L,
        EcLevel::Medium => QrEcLevel::M,
        EcLevel::Quartile => QrEcLevel::Q,
        EcLevel::High => QrEcLevel::H,
    }
}
