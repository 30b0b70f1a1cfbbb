use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;
use tracing::{info, warn};

use super::config::TrieConfig;
use super::error::{LoadError, Result, TrieError};
use super::owned::Trie;

/// Trait for types that can be inserted into a [`Trie`] as an entry.
///
/// Implemented for common string and byte sequence types so that
/// [`Trie::insert`] and [`build_trie`] accept them directly.
pub trait IntoEntry {
    /// Collects this entry into a byte buffer.
    fn collect_entry(self) -> SmallVec<[u8; 32]>;
}

// String types

impl IntoEntry for &str {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self.as_bytes())
    }
}

impl IntoEntry for &&str {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self.as_bytes())
    }
}

impl IntoEntry for String {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_vec(self.into_bytes())
    }
}

impl IntoEntry for &String {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self.as_bytes())
    }
}

// Byte sequences

impl IntoEntry for &[u8] {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self)
    }
}

impl IntoEntry for Vec<u8> {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_vec(self)
    }
}

impl IntoEntry for &Vec<u8> {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<const N: usize> IntoEntry for [u8; N] {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(&self)
    }
}

impl<const N: usize> IntoEntry for &[u8; N] {
    fn collect_entry(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self)
    }
}

/// Counts of what happened to the entries fed to a [`TrieBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Entries stored (including repeats of an earlier entry).
    pub inserted: usize,
    /// Entries skipped because they contained symbols outside the alphabet.
    pub rejected: usize,
}

/// Builds a [`Trie`] from a stream of entries.
///
/// Entries with symbols outside the alphabet are skipped and logged; the rest
/// of the build carries on. Allocation failures abort the build.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    trie: Trie,
    report: BuildReport,
}

impl TrieBuilder {
    /// Creates a builder for an empty trie with default sizing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for an empty trie.
    pub fn with_config(config: &TrieConfig) -> Self {
        TrieBuilder {
            trie: Trie::with_config(config),
            report: BuildReport::default(),
        }
    }

    /// Adds an entry to the trie being built.
    ///
    /// Returns `false` if the entry was rejected for containing a symbol
    /// outside the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::CapacityExceeded`] or [`TrieError::AllocationFailure`]
    /// if the trie cannot grow any further.
    pub fn add_entry(&mut self, entry: impl IntoEntry) -> Result<bool> {
        match self.trie.insert(entry) {
            Ok(_) => {
                self.report.inserted += 1;
                Ok(true)
            }
            Err(err @ TrieError::InvalidSymbol { .. }) => {
                self.report.rejected += 1;
                warn!(entry = self.report.inserted + self.report.rejected, %err, "rejected entry");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Returns the counts so far.
    pub fn report(&self) -> BuildReport {
        self.report
    }

    /// Finishes the build and returns the trie.
    pub fn build(self) -> Trie {
        let arena = self.trie.arena();
        info!(
            inserted = self.report.inserted,
            rejected = self.report.rejected,
            nodes = arena.len(),
            capacity = arena.capacity(),
            bytes_used = arena.bytes_used(),
            bytes_allocated = arena.bytes_allocated(),
            "built trie"
        );
        self.trie
    }
}

/// Builds a trie from an iterator of entries.
///
/// Entries containing symbols outside the printable ASCII alphabet are
/// skipped.
///
/// # Examples
///
/// ```
/// use libtrie::trie::builder::build_trie;
///
/// let trie = build_trie(["APPLE", "BANANA", "CHERRY"]).unwrap();
/// assert!(trie.contains("BANANA"));
/// assert!(!trie.contains("APRICOT"));
/// ```
pub fn build_trie<E: IntoEntry>(entries: impl IntoIterator<Item = E>) -> Result<Trie> {
    let mut builder = TrieBuilder::new();
    for entry in entries {
        builder.add_entry(entry)?;
    }
    Ok(builder.build())
}

/// Builds a trie from a line-oriented reader, one entry per line.
///
/// Line terminators (`\n` or `\r\n`) are stripped and empty lines are
/// skipped. Everything else on the line, including spaces, is part of the
/// entry.
pub fn build_trie_from_reader<R: BufRead>(
    mut reader: R,
    config: &TrieConfig,
) -> std::result::Result<Trie, LoadError> {
    let mut builder = TrieBuilder::with_config(config);

    // One buffer reused for every line instead of allocating per line.
    let mut buf = Vec::with_capacity(80);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = strip_line_ending(&buf);
        if !line.is_empty() {
            builder.add_entry(line)?;
        }
    }
    Ok(builder.build())
}

/// Builds a trie from a dictionary file, one entry per line.
///
/// # Examples
///
/// ```no_run
/// use libtrie::trie::builder::build_trie_from_file;
/// use libtrie::trie::TrieConfig;
///
/// let trie = build_trie_from_file("dictionary.txt", &TrieConfig::default()).unwrap();
/// ```
pub fn build_trie_from_file(
    path: impl AsRef<Path>,
    config: &TrieConfig,
) -> std::result::Result<Trie, LoadError> {
    let file = File::open(path)?;
    build_trie_from_reader(BufReader::new(file), config)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
