pub mod codec_options;
pub mod image;
mod primitives;

pub use codec_options::{CodecOptions, SymbolPolicy, DEFAULT_HIGHLIGHT_COLOR};
pub use primitives::*;
