use crate::config::Config;
use crate::detect::{base_name, discover_inputs, output_path};
use crate::emit::write_gff3;
use crate::error::{Gff2ApolloError, Result};
use crate::gff::parse_gff2;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

/// Outcome of a batch of conversions.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output paths of the files converted successfully, in processing order.
    pub converted: Vec<PathBuf>,
    /// Inputs that could not be converted, with the reason.
    pub failed: Vec<(PathBuf, Gff2ApolloError)>,
    /// Wall clock time spent in the batch.
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of inputs attempted.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// True when every attempted input was converted.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turns a partially failed batch into [`Gff2ApolloError::BatchFailed`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Gff2ApolloError::BatchFailed {
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}

/// Converts every GFF2 file found in the configured input directory.
///
/// Creates the output directory if needed, discovers the inputs and hands them
/// to [`convert_files`]. An input directory without GFF2 files is not an
/// error: a warning is logged and an empty report returned.
///
/// # Errors
///
/// Returns an error if the input directory cannot be listed or the output
/// directory cannot be created. Per-file failures are reported in the
/// [`BatchReport`] unless `fail_fast` is set.
///
/// # Example
///
/// ```rust, ignore
/// use gff2apollo::{run, Config};
///
/// let config = Config::new("Apollo_Trackmaker/input");
/// let report = run(&config)?;
/// println!("converted {} files", report.converted.len());
/// ```
pub fn run(config: &Config) -> Result<BatchReport> {
    let inputs = discover_inputs(&config.input_dir, &config.output_ext)?;

    if inputs.is_empty() {
        log::warn!("No GFF2 files found in {}", config.input_dir.display());
        return Ok(BatchReport::default());
    }

    std::fs::create_dir_all(&config.output_dir)?;
    convert_files(&inputs, config)
}

/// Converts a list of GFF2 files one at a time, in the given order.
///
/// Every file is attempted and failures are collected, so one bad file does
/// not stop the others. With `fail_fast` the first failure is returned
/// instead.
pub fn convert_files(inputs: &[PathBuf], config: &Config) -> Result<BatchReport> {
    let start = Instant::now();
    let mut report = BatchReport::default();

    for input in inputs {
        match convert_file(input, config) {
            Ok(output) => report.converted.push(output),
            Err(err) if config.fail_fast => return Err(err),
            Err(err) => {
                log::error!("Failed to convert {}: {}", input.display(), err);
                report.failed.push((input.clone(), err));
            }
        }
    }

    report.elapsed = start.elapsed();
    Ok(report)
}

/// Converts one GFF2 file and returns the path of the GFF3 written.
///
/// The whole input is parsed before anything is written, and the output goes
/// through a temporary file in the output directory that replaces the
/// destination only once complete. A failing input leaves no output behind.
///
/// # Errors
///
/// Returns parse errors from [`parse_gff2`] and any I/O error on either side.
pub fn convert_file(input: &Path, config: &Config) -> Result<PathBuf> {
    let base = base_name(input).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} has no usable file name", input.display()),
        )
    })?;
    let output = output_path(input, &config.output_dir, &config.output_ext).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("cannot derive an output name for {}", input.display()),
        )
    })?;

    log::info!("Converting {} -> {}", input.display(), output.display());

    let reader = BufReader::new(File::open(input)?);
    let model = parse_gff2(reader, config.lenient)?;

    write_output(&output, &config.output_dir, base, &model)?;
    Ok(output)
}

/// Writes a transcript to `path` via a temporary file in `dir`.
///
/// The result keeps the permissions of an existing destination; a new one gets
/// the same umask-derived mode as a plain `File::create`.
fn write_output(
    path: &Path,
    dir: &Path,
    base: &str,
    model: &crate::gff::TranscriptModel,
) -> Result<()> {
    let tmp = temp_file_in(dir)?;
    let mut writer = BufWriter::new(tmp);
    write_gff3(&mut writer, base, model)?;
    writer.flush()?;

    let tmp = writer.into_inner().map_err(|e| e.into_error())?;
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(path)?;
    Ok(())
}

/// Temporary file created with mode 0666 filtered by the umask, not 0600.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
