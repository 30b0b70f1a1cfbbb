//! The fixed symbol alphabet every trie edge is labelled with.
//!
//! Only the printable range of ASCII is supported: space (`0x20`) through
//! tilde (`0x7E`), 95 symbols in total. Each symbol maps to a dense offset in
//! `0..ALPHABET_SIZE`, which indexes directly into a node's child array.

/// Number of symbols in the alphabet, and therefore child slots per node.
pub const ALPHABET_SIZE: usize = 95;

/// First symbol of the alphabet. Offset 0 corresponds to this byte.
pub const FIRST_SYMBOL: u8 = b' ';

/// Last symbol of the alphabet.
pub const LAST_SYMBOL: u8 = b'~';

/// Returns the child-slot offset of `symbol`, or `None` if it lies outside
/// the alphabet.
#[inline]
pub fn offset(symbol: u8) -> Option<usize> {
    (FIRST_SYMBOL..=LAST_SYMBOL)
        .contains(&symbol)
        .then(|| usize::from(symbol - FIRST_SYMBOL))
}

/// Returns the symbol stored at child-slot `offset`.
///
/// # Panics
///
/// Panics in debug builds if `offset >= ALPHABET_SIZE`.
#[inline]
pub fn symbol(offset: usize) -> u8 {
    debug_assert!(offset < ALPHABET_SIZE);
    FIRST_SYMBOL + offset as u8
}

/// True if every byte of `bytes` belongs to the alphabet.
pub fn is_valid(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| offset(b).is_some())
}
