use anyhow::{Context, Result};
use image::{ImageBuffer, Luma};
use std::path::{Path, PathBuf};

use super::{Symbol, encode};
use qrwire_types::RenderHints;

/// Writes the code as a grayscale PNG and returns the path written.
///
/// Any extension on `name` is replaced with `.png`; a bare name gets
/// the extension appended.
pub fn save(payload: &str, hints: &RenderHints, name: &str) -> Result<PathBuf> {
    let symbol = encode(payload, hints)?;
    let image = rasterize(&symbol, hints);

    let path = Path::new(name).with_extension("png");
    image
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn rasterize(symbol: &Symbol, hints: &RenderHints) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let scale = hints.box_size.max(1);
    let side = (symbol.width() as u32 + 2 * hints.border) * scale;
    let mut image = ImageBuffer::new(side, side);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let module_x = (x / scale) as i32 - hints.border as i32;
        let module_y = (y / scale) as i32 - hints.border as i32;
        *pixel = if symbol.module(module_x, module_y) {
            Luma([0u8])
        } else {
            Luma([255u8])
        };
    }
    image
}
