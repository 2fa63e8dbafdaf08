//! Symbol codec for hidden text messages.
//!
//! Every character becomes one small symbol code that fits into 6 bits:
//!
//! | code    | meaning              |
//! |---------|----------------------|
//! | `0`     | terminator           |
//! | `1..=26`| the letters `A..=Z`  |
//! | `27`    | space                |
//!
//! An encoded message always ends with exactly one terminator, decoding stops at the first one.

use std::iter;

use log::debug;

use crate::media::SymbolPolicy;
use crate::result::Result;
use crate::SteganoError;

pub const TERMINATOR: u8 = 0;
pub const SPACE: u8 = 27;

/// the highest symbol code in use
pub const MAX_SYMBOL: u8 = SPACE;

/// the symbol code of an upper case character, `None` for anything unsupported
pub fn symbol_of(c: char) -> Option<u8> {
    match c {
        ' ' => Some(SPACE),
        'A'..='Z' => Some(c as u8 - b'A' + 1),
        _ => None,
    }
}

/// the character of a symbol code, `None` for the terminator and unknown codes
pub fn char_of(code: u8) -> Option<char> {
    match code {
        SPACE => Some(' '),
        1..=26 => Some((b'A' + code - 1) as char),
        _ => None,
    }
}

/// Encodes `text` upper cased, unsupported characters are dropped.
///
/// ```rust
/// assert_eq!(stegano_lab::symbols::encode("ab c"), vec![1, 2, 27, 3, 0]);
/// ```
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter_map(symbol_of)
        .chain(iter::once(TERMINATOR))
        .collect()
}

/// Decodes symbol codes up to the first terminator, unknown codes are dropped.
///
/// ```rust
/// assert_eq!(stegano_lab::symbols::decode(&[1, 2, 27, 3, 0, 4]), "AB C");
/// ```
pub fn decode(codes: &[u8]) -> String {
    codes
        .iter()
        .take_while(|&&code| code != TERMINATOR)
        .filter_map(|&code| char_of(code))
        .collect()
}

/// Symbol codec bound to one [`SymbolPolicy`], used for both directions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCodec {
    policy: SymbolPolicy,
}

impl SymbolCodec {
    pub fn new(policy: SymbolPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SymbolPolicy {
        self.policy
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        if self.policy == SymbolPolicy::Skip {
            let codes = encode(text);
            debug!(
                "encoded {} characters into {} symbols",
                text.chars().count(),
                codes.len()
            );
            return Ok(codes);
        }

        let mut codes = Vec::with_capacity(text.len() + 1);
        for c in text.chars().flat_map(char::to_uppercase) {
            codes.push(symbol_of(c).ok_or(SteganoError::MalformedSymbol(c))?);
        }
        codes.push(TERMINATOR);

        Ok(codes)
    }

    pub fn decode(&self, codes: &[u8]) -> Result<String> {
        if self.policy == SymbolPolicy::Skip {
            return Ok(decode(codes));
        }

        codes
            .iter()
            .take_while(|&&code| code != TERMINATOR)
            .map(|&code| char_of(code).ok_or(SteganoError::InvalidSymbolCode(code)))
            .collect()
    }
}
