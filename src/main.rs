//! # gff2apollo
//!
//! Converts GEP Gene Model Checker GFF2 files into Apollo-ready GFF3.
//!
//! ## Usage
//!
//! ```bash
//! gff2apollo -i <DIR> [OPTIONS]
//!
//! Required arguments:
//!   -i, --input-dir <DIR>    Directory with GFF2 files
//!
//! Optional arguments:
//!   -o, --output-dir <DIR>   Directory for GFF3 files [default: input directory]
//!   -e, --ext <EXT>          Output file extension [default: .gff3]
//!       --fail-fast          Abort the batch on the first failing file
//!       --lenient            Do not reject files mixing sequences or strands
//!   -h, --help               Print help
//!   -V, --version            Print version
//! ```
//!
//! Every option can also be set through `GFF2APOLLO_INPUT_DIR`,
//! `GFF2APOLLO_OUTPUT_DIR` and `GFF2APOLLO_OUTPUT_EXT`.
//!
//! ## Examples
//!
//! ```bash
//! gff2apollo -i Apollo_Trackmaker/input
//! gff2apollo -i checker_out -o apollo_upload --fail-fast
//! ```
use clap::Parser;
use colored::Colorize;
use gff2apollo::{run, Args, Config};
use log::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(Level::Info)?;

    let args = Args::parse();
    log::info!("{:?}", args);
    args.check()?;

    let config = Config::from_args(&args);
    let report = run(&config)?;

    if report.total() == 0 {
        return Ok(());
    }

    log::info!(
        "Converted {} of {} files in {:.4?} secs",
        report.converted.len(),
        report.total(),
        report.elapsed.as_secs_f32()
    );

    if report.is_success() {
        log::info!(
            "{}",
            format!(
                "Congratulations! Your GEP Gene Model Checker files have been converted. \
                 The Apollo-ready files are in {}",
                config.output_dir.display()
            )
            .green()
            .bold()
        );
    }

    report.into_result()?;
    Ok(())
}
