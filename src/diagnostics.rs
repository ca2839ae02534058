use itertools::Itertools;

/// An advisory event raised while cleaning or scanning a sequence. Diagnostics never stop an
/// operation; they are handed to a [`Reporter`] and the operation carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The cleaned sequence length is not a multiple of three
    InvalidCodonCount { length: usize },
    /// At least one digit was dropped from the input
    NumbersRemoved,
    /// Letters outside the alphabet were dropped, listed in order of occurrence
    InvalidCharactersRemoved { characters: Vec<char> },
    /// Punctuation or whitespace was dropped from the input
    SpecialCharactersRemoved,
    /// The sequence does not open with a start codon (or `M` for proteins)
    MissingStartCodon,
    /// The sequence does not close with a stop codon (or `*` for proteins)
    MissingStopCodon,
    /// A record contained a character that is not a counted base
    NonStandardBase { record: String, base: char },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::InvalidCodonCount { length } => write!(
                f,
                "Invalid codons: number of bases ({length}) not divisible by 3"
            ),
            Diagnostic::NumbersRemoved => f.write_str("Removed numbers from original sequence"),
            Diagnostic::InvalidCharactersRemoved { characters } => write!(
                f,
                "Removed invalid characters [{}]",
                characters.iter().join(", ")
            ),
            Diagnostic::SpecialCharactersRemoved => {
                f.write_str("Removed special characters from original sequence")
            }
            Diagnostic::MissingStartCodon => f.write_str("Sequence does not begin with a start"),
            Diagnostic::MissingStopCodon => f.write_str("Sequence does not end with a stop"),
            Diagnostic::NonStandardBase { record, base } => {
                write!(f, "Non-standard base in {record}, '{base}'")
            }
        }
    }
}

/// A sink for diagnostics. The command line reports through the log; library callers can
/// collect into a `Vec<Diagnostic>` and inspect the events directly.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Writes every diagnostic to the log at `warn` level.
#[derive(Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
    }
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_characters_are_listed() {
        let d = Diagnostic::InvalidCharactersRemoved {
            characters: vec!['X', 'B', 'X'],
        };
        assert_eq!(d.to_string(), "Removed invalid characters [X, B, X]");
    }

    #[test]
    fn non_standard_base_names_record() {
        let d = Diagnostic::NonStandardBase {
            record: String::from("seq1"),
            base: 'X',
        };
        assert_eq!(d.to_string(), "Non-standard base in seq1, 'X'");
    }

    #[test]
    fn vec_collects_in_order() {
        let mut events: Vec<Diagnostic> = Vec::new();
        events.report(Diagnostic::NumbersRemoved);
        events.report(Diagnostic::SpecialCharactersRemoved);
        assert_eq!(
            events,
            vec![Diagnostic::NumbersRemoved, Diagnostic::SpecialCharactersRemoved]
        );
    }
}
