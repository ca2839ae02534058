extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;

mod alphabet;
mod cli;
mod composition;
mod diagnostics;
mod fasta;
mod format;

use cli::{Cli, Commands};
use diagnostics::LogReporter;
use format::{FormatOptions, OutputTarget};

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut reporter = LogReporter;

    match cli.command {
        Commands::Format {
            header,
            text,
            output,
            alphabet,
            check_start_stop,
        } => {
            let target = OutputTarget::from(output);
            let record = format::format_record(
                &header,
                &text,
                &target,
                alphabet,
                FormatOptions { check_start_stop },
                &mut reporter,
            )?;
            info!(
                "Appended {} ({} residues) to {}",
                record.header,
                record.sequence.len(),
                record.path.display()
            );
        }
        Commands::Composition { file, gc } => {
            if gc {
                let fraction = composition::gc_fraction(&file, &mut reporter)?;
                println!("{fraction}");
            } else {
                let counts = composition::base_composition(&file, &mut reporter)?;
                println!("{}", serde_json::to_string(&counts)?);
            }
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
