use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SteganoError {
    /// Represents a secret image that does not fit into the carrier, in at least one dimension
    #[error(
        "Size Error: The secret image with the dimensions {secret_width}x{secret_height} does not fit into the carrier image with the dimensions {carrier_width}x{carrier_height}"
    )]
    SizeIncompatible {
        secret_width: u32,
        secret_height: u32,
        carrier_width: u32,
        carrier_height: u32,
    },

    /// Represents a placement offset that would move (parts of) the secret outside of the carrier
    #[error(
        "Placement Error: A {width}x{height} region at row {row}, column {col} exceeds the carrier image with the dimensions {carrier_width}x{carrier_height}"
    )]
    PlacementOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
        carrier_width: u32,
        carrier_height: u32,
    },

    /// Represents a text message that needs more pixels than the carrier has
    #[error(
        "Capacity Error: The message needs {required} pixels but the carrier image only provides {available}"
    )]
    PayloadTooLarge { required: usize, available: usize },

    /// Represents a character that has no symbol code, only raised with strict symbol handling
    #[error("The character {0:?} can not be hidden, only the letters A-Z and space are supported")]
    MalformedSymbol(char),

    /// Represents a symbol code outside of the known alphabet, only raised with strict symbol handling
    #[error("Invalid symbol code found inside a message: {0}")]
    InvalidSymbolCode(u8),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("API Error: Missing secret, neither a message nor an image was provided")]
    MissingSecret,

    #[error("API Error: Only one secret can be hidden at once, either a message or an image")]
    AmbiguousSecret,
}
