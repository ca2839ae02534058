use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use bio::io::fasta;

/// A single FASTA record, reduced to what the composition scan needs.
#[derive(Debug, PartialEq, Eq)]
pub struct FastaEntry {
    /// The record identifier, i.e. the header up to the first whitespace
    pub id: String,
    pub seq: String,
}

/// Advances `reader` past any whitespace preceding the first record. Files written by
/// `format_record` start with a blank line, which the `bio` reader would otherwise reject.
fn skip_leading_blank(reader: &mut impl BufRead) -> std::io::Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }

        let blank = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let reached_content = blank < buf.len();
        reader.consume(blank);

        if reached_content {
            return Ok(());
        }
    }
}

/// Lazily iterates over the records of a FASTA file.
///
/// # Errors
///
/// This function will return an error if the file cannot be opened or read.
///
/// The iterator yields `Some(Err)` if:
/// * the file is not valid FASTA, e.g. content appears before the first `>` header
/// * a record id or sequence is not valid UTF-8
pub fn read_records(path: &Path) -> Result<impl Iterator<Item = Result<FastaEntry>>> {
    let file = File::open(path).with_context(|| format!("Unable to open file {}", path.display()))?;

    let mut reader = BufReader::new(file);
    skip_leading_blank(&mut reader)
        .with_context(|| format!("Unable to read file {}", path.display()))?;

    let display = path.display().to_string();
    Ok(fasta::Reader::new(reader)
        .records()
        .map(move |rec| -> Result<FastaEntry> {
            let rec = rec.with_context(|| format!("Invalid FASTA in {display}"))?;
            Ok(FastaEntry {
                id: rec.id().to_string(),
                seq: String::from_utf8(rec.seq().to_vec())
                    .with_context(|| format!("Record {} is not valid UTF-8", rec.id()))?,
            })
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn collect(contents: &str) -> Result<Vec<FastaEntry>> {
        let file = assert_fs::NamedTempFile::new("records.fasta")?;
        file.write_str(contents)?;
        let records = read_records(file.path())?.collect::<Result<Vec<_>>>()?;
        Ok(records)
    }

    #[test]
    fn reads_multiline_records() {
        let records = collect(">a first\nATG\nCCC\n>b\nNN\n").unwrap();
        assert_eq!(
            records,
            vec![
                FastaEntry { id: "a".into(), seq: "ATGCCC".into() },
                FastaEntry { id: "b".into(), seq: "NN".into() },
            ]
        );
    }

    #[test]
    fn tolerates_leading_blank_lines() {
        let records = collect("\n\n>a\nATG\n>b\nC").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].seq, "C");
    }

    #[test]
    fn empty_file_has_no_records() {
        assert!(collect("").unwrap().is_empty());
        assert!(collect("\n\n").unwrap().is_empty());
    }

    #[test]
    fn content_before_header_is_an_error() {
        assert!(collect("ATG\n>a\nATG\n").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_records(Path::new("definitely/not/here.fasta")).is_err());
    }
}
