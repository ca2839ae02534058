/// Enum representing the sequence alphabets a record can be cleaned against.
#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// DNA bases A, T, G, C, plus N for any base
    #[default]
    Nucleotide,

    /// the 20 standard amino acid one-letter codes, plus `*` for stop
    Protein,
}

const NUCLEOTIDE_SYMBOLS: &[u8] = b"ATGCN";
const PROTEIN_SYMBOLS: &[u8] = b"*ACDEFGHIKLMNPQRSTVWY";

impl Alphabet {
    /// Returns the valid uppercase symbols of this alphabet.
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Nucleotide => NUCLEOTIDE_SYMBOLS,
            Alphabet::Protein => PROTEIN_SYMBOLS,
        }
    }

    /// Whether `c` is a member of this alphabet. Membership is case-sensitive;
    /// callers are expected to uppercase their input first.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.symbols().contains(&(c as u8))
    }
}
