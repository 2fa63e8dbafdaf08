use image::Rgb;

/// pure red, the color the outline of a different area is drawn with by default
pub const DEFAULT_HIGHLIGHT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Codec configuration shared by hiding, unveiling and diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Decides what happens with characters that have no symbol code when a message is hidden,
    /// and with symbol codes outside of the alphabet when a message is unveiled.
    /// The same policy applies to both directions.
    pub symbol_policy: SymbolPolicy,

    /// The color the bounding box of a different area is outlined with.
    pub highlight_color: Rgb<u8>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            symbol_policy: SymbolPolicy::Skip,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
        }
    }
}

impl CodecOptions {
    pub fn with_symbol_policy(mut self, symbol_policy: SymbolPolicy) -> Self {
        self.symbol_policy = symbol_policy;
        self
    }

    pub fn with_highlight_color(mut self, highlight_color: Rgb<u8>) -> Self {
        self.highlight_color = highlight_color;
        self
    }
}

/// Handling of malformed symbols
#[derive(Debug, Clone, Copy, Default, Ord, PartialOrd, Eq, PartialEq)]
pub enum SymbolPolicy {
    /// unsupported characters and unknown codes are dropped silently
    #[default]
    Skip,
    /// unsupported characters and unknown codes are reported as errors
    Reject,
}
