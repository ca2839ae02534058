use crate::alphabet::Alphabet;
use crate::diagnostics::{Diagnostic, Reporter};

use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::PathBuf;

use anyhow::{Context, Result};

const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Where a formatted record should be appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// `<header>.fasta` in the current working directory
    DefaultPath,
    /// An explicit file path
    Path(PathBuf),
}

impl OutputTarget {
    /// Resolves the target into a concrete file path for the given header.
    pub fn resolve(&self, header: &str) -> PathBuf {
        match self {
            OutputTarget::DefaultPath => PathBuf::from(format!("{header}.fasta")),
            OutputTarget::Path(p) => p.clone(),
        }
    }
}

impl From<Option<String>> for OutputTarget {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(p) => OutputTarget::Path(PathBuf::from(p)),
            None => OutputTarget::DefaultPath,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FormatOptions {
    /// also report a missing start or stop at the ends of the cleaned sequence
    pub check_start_stop: bool,
}

/// A record as it was written to disk.
#[derive(Debug, PartialEq, Eq)]
pub struct FormattedRecord {
    pub header: String,
    pub sequence: String,
    pub path: PathBuf,
}

/// Strips every character that is not part of `alphabet` from `text`, after uppercasing it.
///
/// Dropped characters are reported through `reporter`, once per kind of removal:
///
/// * digits produce [`Diagnostic::NumbersRemoved`]
/// * letters outside the alphabet produce [`Diagnostic::InvalidCharactersRemoved`], listing
///   every occurrence in order
/// * anything else (whitespace, punctuation) produces [`Diagnostic::SpecialCharactersRemoved`],
///   including symbols the alphabet keeps, such as the protein stop `*`
///
/// A cleaned sequence whose length is not a multiple of three is reported as
/// [`Diagnostic::InvalidCodonCount`] before any of the above.
pub fn clean_sequence(text: &str, alphabet: Alphabet, reporter: &mut impl Reporter) -> String {
    let mut cleaned = String::with_capacity(text.len());

    let mut removed_numbers = false;
    let mut removed_special = false;
    let mut invalid = Vec::new();

    for c in text.to_uppercase().chars() {
        let valid = alphabet.contains(c);
        if valid {
            cleaned.push(c);
        }

        // classified independently of whether `c` was kept
        if c.is_numeric() {
            removed_numbers = true;
        } else if c.is_alphabetic() {
            if !valid {
                invalid.push(c);
            }
        } else {
            removed_special = true;
        }
    }

    let length = cleaned.chars().count();
    if length % 3 != 0 {
        reporter.report(Diagnostic::InvalidCodonCount { length });
    }
    if removed_numbers {
        reporter.report(Diagnostic::NumbersRemoved);
    }
    if !invalid.is_empty() {
        reporter.report(Diagnostic::InvalidCharactersRemoved { characters: invalid });
    }
    if removed_special {
        reporter.report(Diagnostic::SpecialCharactersRemoved);
    }

    cleaned
}

/// Reports a missing start or stop at either end of an already cleaned sequence. Empty
/// sequences are skipped.
pub fn check_start_stop(sequence: &str, alphabet: Alphabet, reporter: &mut impl Reporter) {
    if sequence.is_empty() {
        return;
    }

    let (has_start, has_stop) = match alphabet {
        Alphabet::Nucleotide => {
            let tail = sequence.len().checked_sub(3).map(|i| &sequence[i..]);
            (
                sequence.starts_with("ATG"),
                tail.is_some_and(|t| STOP_CODONS.contains(&t)),
            )
        }
        Alphabet::Protein => (sequence.starts_with('M'), sequence.ends_with('*')),
    };

    if !has_start {
        reporter.report(Diagnostic::MissingStartCodon);
    }
    if !has_stop {
        reporter.report(Diagnostic::MissingStopCodon);
    }
}

/// Appends a single FASTA record to `writer`, preceded by a blank line.
pub fn write_record(writer: &mut impl Write, header: &str, sequence: &str) -> std::io::Result<()> {
    write!(writer, "\n>{header}\n{sequence}")
}

/// Cleans `text` and appends it to the output target as a FASTA record named `header`.
///
/// The file is opened in append mode and created if missing; existing records are never
/// overwritten. Diagnostics are advisory and never prevent the record from being written.
///
/// # Errors
///
/// This function will return an error if the target file cannot be opened for appending or
/// cannot be written to.
pub fn format_record(
    header: &str,
    text: &str,
    target: &OutputTarget,
    alphabet: Alphabet,
    options: FormatOptions,
    reporter: &mut impl Reporter,
) -> Result<FormattedRecord> {
    let sequence = clean_sequence(text, alphabet, reporter);
    if options.check_start_stop {
        check_start_stop(&sequence, alphabet, reporter);
    }

    let path = target.resolve(header);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Unable to open {} for appending", path.display()))?;

    write_record(&mut file, header, &sequence)
        .with_context(|| format!("Unable to write record to {}", path.display()))?;

    Ok(FormattedRecord {
        header: header.to_string(),
        sequence,
        path,
    })
}
