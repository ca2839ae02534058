use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};

use crate::alphabet::Alphabet;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 seqtidy version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   tidy raw sequences into FASTA, and tally base composition";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a raw sequence and append it to a FASTA file
    #[command(arg_required_else_help = true)]
    Format {
        /// the record header, also used to name the output file when `-o` is not given
        header: String,

        /// the raw sequence; case, whitespace, digits and punctuation are cleaned away
        text: String,

        /// the FASTA file to append to. defaults to `<HEADER>.fasta` in the current directory
        #[arg(short)]
        output: Option<String>,

        /// which alphabet the sequence is validated against
        #[arg(long, value_enum, default_value = "nucleotide")]
        alphabet: Alphabet,

        /// also warn when the sequence lacks a start or a stop at either end:
        ///   nucleotide: ATG ... TAA/TAG/TGA
        ///   protein:    M ... *
        #[arg(long, verbatim_doc_comment)]
        check_start_stop: bool,
    },

    /// Count A, T, C, G and N over every record of a FASTA file
    #[command(arg_required_else_help = true)]
    Composition {
        /// the input FASTA file
        file: String,

        /// report the GC fraction instead of the individual base counts
        #[arg(long)]
        gc: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_defaults() {
        let cli = Cli::parse_from(["seqtidy", "format", "geneA", "atg"]);
        match cli.command {
            Commands::Format {
                header,
                text,
                output,
                alphabet,
                check_start_stop,
            } => {
                assert_eq!(header, "geneA");
                assert_eq!(text, "atg");
                assert_eq!(output, None);
                assert_eq!(alphabet, Alphabet::Nucleotide);
                assert!(!check_start_stop);
            }
            _ => panic!("expected the format subcommand"),
        }
    }

    #[test]
    fn protein_alphabet() {
        let cli = Cli::parse_from([
            "seqtidy", "format", "p1", "MK*", "--alphabet", "protein", "-o", "out.fa",
        ]);
        match cli.command {
            Commands::Format { alphabet, output, .. } => {
                assert_eq!(alphabet, Alphabet::Protein);
                assert_eq!(output.as_deref(), Some("out.fa"));
            }
            _ => panic!("expected the format subcommand"),
        }
    }

    #[test]
    fn composition_gc_flag() {
        let cli = Cli::parse_from(["seqtidy", "composition", "in.fasta", "--gc"]);
        assert!(matches!(cli.command, Commands::Composition { gc: true, .. }));
    }
}
