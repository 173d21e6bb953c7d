/// Error-correction level requested for the QR symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    /// ~7% symbol damage tolerated.
    Low,
    /// ~15% symbol damage tolerated.
    #[default]
    Medium,
    /// ~25% symbol damage tolerated.
    Quartile,
    /// ~30% symbol damage tolerated.
    High,
}

/// Rendering configuration carried from the caller to the renderer.
///
/// The payload engine passes hints through unmodified; only the encoder
/// and the image/terminal renderers read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHints {
    pub ec_level: EcLevel,
    /// Pixels per module in image output.
    pub box_size: u32,
    /// Quiet-zone width in modules.
    pub border: u32,
}

impl Default for RenderHints {
    fn default() -> Self {
        RenderHints {
            ec_level: EcLevel::Medium,
            box_size: 15,
            border: 4,
        }
    }
}
