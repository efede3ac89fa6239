use crate::cli::Args;
use std::path::PathBuf;

/// Suffix of converted files unless configured otherwise.
pub const DEFAULT_OUTPUT_EXT: &str = ".gff3";

/// Normalized configuration for a conversion run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory scanned for GFF2 inputs.
    pub input_dir: PathBuf,
    /// Directory receiving the GFF3 outputs; created if absent.
    pub output_dir: PathBuf,
    /// Suffix appended to each input base name.
    pub output_ext: String,
    /// Abort the batch on the first failing file.
    pub fail_fast: bool,
    /// Let the last feature line decide seqid/strand instead of checking them.
    pub lenient: bool,
}

impl Config {
    /// Config converting `input_dir` in place with default settings.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gff2apollo::Config;
    ///
    /// let config = Config::new("Apollo_Trackmaker/input");
    /// assert_eq!(config.output_ext, ".gff3");
    /// ```
    pub fn new<P: Into<PathBuf>>(input_dir: P) -> Self {
        let input_dir = input_dir.into();
        Self {
            output_dir: input_dir.clone(),
            input_dir,
            output_ext: DEFAULT_OUTPUT_EXT.to_string(),
            fail_fast: false,
            lenient: false,
        }
    }

    /// Builds a conversion config from CLI arguments.
    ///
    /// A missing output directory falls back to the input directory.
    pub fn from_args(args: &Args) -> Self {
        Self {
            input_dir: args.input_dir.clone(),
            output_dir: args
                .output_dir
                .clone()
                .unwrap_or_else(|| args.input_dir.clone()),
            output_ext: args.output_ext.clone(),
            fail_fast: args.fail_fast,
            lenient: args.lenient,
        }
    }
}
