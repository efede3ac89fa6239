//! GEP Gene Model Checker GFF2 to Apollo-ready GFF3 converter
//! Alejandro Gonzales-Irribarren, 2025

use crate::config::DEFAULT_OUTPUT_EXT;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "gff2apollo",
    version = env!("CARGO_PKG_VERSION"),
    author = "Alejandro Gonzales-Irribarren <alejandrxgzi@gmail.com>",
    about = "GEP Gene Model Checker GFF2 to Apollo-ready GFF3 converter"
)]
pub struct Args {
    /// Directory holding the GFF2 files to convert.
    ///
    /// Every file whose name ends in .gff (any case) is converted into one
    /// GFF3 file holding a single mRNA with its CDS and exon children.
    #[clap(
        short = 'i',
        long = "input-dir",
        help = "Directory with GFF2 files",
        value_name = "DIR",
        env = "GFF2APOLLO_INPUT_DIR",
        required = true
    )]
    pub input_dir: PathBuf,

    /// Output directory; non-required argument.
    ///
    /// Defaults to the input directory. Created if it does not exist.
    #[clap(
        short = 'o',
        long = "output-dir",
        help = "Directory for GFF3 files [default: input directory]",
        value_name = "DIR",
        env = "GFF2APOLLO_OUTPUT_DIR"
    )]
    pub output_dir: Option<PathBuf>,

    /// Suffix appended to each input base name.
    #[clap(
        short = 'e',
        long = "ext",
        help = "Output file extension",
        value_name = "EXT",
        env = "GFF2APOLLO_OUTPUT_EXT",
        default_value = DEFAULT_OUTPUT_EXT
    )]
    pub output_ext: String,

    /// Stop at the first file that cannot be converted.
    #[clap(long = "fail-fast", help = "Abort the batch on the first failing file")]
    pub fail_fast: bool,

    /// Skip the seqid/strand consistency check; the last feature line wins.
    #[clap(long, help = "Do not reject files mixing sequences or strands")]
    pub lenient: bool,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// The input directory must exist and be a directory.
    fn check_input(&self) -> Result<(), ArgError> {
        if !self.input_dir.exists() {
            let err = format!("directory {:?} does not exist", self.input_dir);
            Err(ArgError::InvalidInput(err))
        } else if !self.input_dir.is_dir() {
            let err = format!("{:?} is not a directory", self.input_dir);
            Err(ArgError::InvalidInput(err))
        } else {
            Ok(())
        }
    }

    /// An existing output path must be a directory.
    fn check_output(&self) -> Result<(), ArgError> {
        match &self.output_dir {
            Some(dir) if dir.exists() && !dir.is_dir() => {
                let err = format!("{:?} is not a directory", dir);
                Err(ArgError::InvalidOutput(err))
            }
            _ => Ok(()),
        }
    }

    /// The extension must be non-empty and must not contain a path separator.
    fn check_extension(&self) -> Result<(), ArgError> {
        if self.output_ext.is_empty() {
            Err(ArgError::InvalidExtension(
                "output extension is empty".to_string(),
            ))
        } else if self.output_ext.contains(['/', '\\']) {
            let err = format!("{:?} contains a path separator", self.output_ext);
            Err(ArgError::InvalidExtension(err))
        } else {
            Ok(())
        }
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_input()?;
        self.check_output()?;
        self.check_extension()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The input directory does not exist or is not a directory.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The output path exists but is not a directory.
    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    /// The output extension is unusable.
    #[error("Invalid extension: {0}")]
    InvalidExtension(String),
}
