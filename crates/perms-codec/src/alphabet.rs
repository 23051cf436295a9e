//! The 64-symbol URL-safe alphabet and its constant lookup tables.

use perms_core::error::AppError;
use perms_core::result::AppResult;

/// Symbols in value order: index 0 is `'A'`, index 63 is `'_'`.
pub const ALPHABET: [u8; 64] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Marks a byte that is not part of [`ALPHABET`].
const INVALID: i8 = -1;

/// Reverse table over the whole byte range.
static DECODE: [i8; 256] = build_decode_table();

const fn build_decode_table() -> [i8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Maps a 6-bit value to its symbol.
///
/// Only the low six bits of `value` are used.
pub fn encode_symbol(value: u8) -> char {
    ALPHABET[(value & 0x3f) as usize] as char
}

/// Maps a symbol to its 6-bit value, or `None` if it is not in the alphabet.
pub fn decode_symbol(ch: char) -> Option<u8> {
    let code = ch as u32;
    if code > u8::MAX as u32 {
        return None;
    }
    match DECODE[code as usize] {
        INVALID => None,
        value => Some(value as u8),
    }
}

/// Returns true if `ch` belongs to the alphabet.
pub fn is_valid_symbol(ch: char) -> bool {
    decode_symbol(ch).is_some()
}

/// Decodes `ch`, failing with `InvalidArgument` naming the symbol and its code.
pub(crate) fn decode_or_err(ch: char) -> AppResult<u8> {
    decode_symbol(ch).ok_or_else(|| {
        AppError::invalid_argument(format!("Incorrect symbol: {} ({})", ch, ch as u32))
    })
}
