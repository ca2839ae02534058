use crate::diagnostics::{Diagnostic, Reporter};
use crate::fasta::{read_records, FastaEntry};

use std::path::Path;

use anyhow::Result;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// The bases tallied by a composition scan, in reporting order.
pub const BASES: [char; 5] = ['A', 'T', 'C', 'G', 'N'];

#[derive(Error, Debug, PartialEq)]
pub enum CompositionError {
    #[error("Cannot compute GC content: no recognised bases were counted")]
    NoBases,
}

/// Per-base tallies accumulated over every record of a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCounts {
    counts: IndexMap<char, usize>,
}

impl Default for BaseCounts {
    fn default() -> Self {
        BaseCounts {
            counts: BASES.iter().map(|&b| (b, 0)).collect(),
        }
    }
}

impl BaseCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `base`, returning `false` if it is not a tallied base.
    pub fn add(&mut self, base: char) -> bool {
        match self.counts.get_mut(&base) {
            Some(n) => {
                *n += 1;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn get(&self, base: char) -> Option<usize> {
        self.counts.get(&base).copied()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over `(base, count)` pairs in A, T, C, G, N order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&b, &n)| (b, n))
    }

    /// The fraction of counted bases which are G or C. `N` is part of the denominator.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::NoBases`] when nothing was counted.
    pub fn gc_fraction(&self) -> Result<f64, CompositionError> {
        let total = self.total();
        if total == 0 {
            return Err(CompositionError::NoBases);
        }
        let gc = self.counts[&'G'] + self.counts[&'C'];
        Ok(gc as f64 / total as f64)
    }
}

impl Serialize for BaseCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (base, count) in self.iter() {
            map.serialize_entry(&base.to_string(), &count)?;
        }
        map.end()
    }
}

/// Tallies the bases of `records`. Characters which are not one of A, T, C, G or N are reported
/// as [`Diagnostic::NonStandardBase`] and left out of every count.
///
/// # Errors
///
/// Stops at, and returns, the first error yielded by `records`.
pub fn count_bases(
    records: impl IntoIterator<Item = Result<FastaEntry>>,
    reporter: &mut impl Reporter,
) -> Result<BaseCounts> {
    let mut counts = BaseCounts::new();

    for record in records {
        let record = record?;
        for base in record.seq.chars() {
            if !counts.add(base) {
                reporter.report(Diagnostic::NonStandardBase {
                    record: record.id.clone(),
                    base,
                });
            }
        }
    }

    Ok(counts)
}

/// Counts the A, T, C, G and N bases over every record in a FASTA file.
///
/// # Errors
///
/// This function will return an error if the file cannot be opened or is not valid FASTA.
pub fn base_composition(path: impl AsRef<Path>, reporter: &mut impl Reporter) -> Result<BaseCounts> {
    let path = path.as_ref();
    info!("Counting bases in {}", path.display());
    count_bases(read_records(path)?, reporter)
}

/// Computes the GC fraction over every record in a FASTA file.
///
/// # Errors
///
/// This function will return an error if the file cannot be read as FASTA, or
/// [`CompositionError::NoBases`] if it holds no countable bases.
pub fn gc_fraction(path: impl AsRef<Path>, reporter: &mut impl Reporter) -> Result<f64> {
    Ok(base_composition(path, reporter)?.gc_fraction()?)
}
