//! # gff2apollo
//!
//! Converts the GFF2 output of the GEP Gene Model Checker into GFF3 files ready
//! for user-level upload to the Apollo annotation editor.
//!
//! Each input file is taken as one transcript. The output holds a single
//! synthetic `mRNA` spanning every feature of the file and its `CDS`/`exon`
//! children, linked through `Parent=<base>-PA`. No gene-level features are
//! emitted.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use gff2apollo::{run, Config};
//!
//! let mut config = Config::new("Apollo_Trackmaker/input");
//! config.output_dir = "Apollo_Trackmaker/output".into();
//!
//! let report = run(&config)?;
//! for output in &report.converted {
//!     println!("wrote {}", output.display());
//! }
//! ```
//!
//! ### Converting a single file
//!
//! ```rust, ignore
//! use gff2apollo::{convert_file, Config};
//! use std::path::Path;
//!
//! let config = Config::new("input");
//! let output = convert_file(Path::new("input/gene1.gff"), &config)?;
//! assert!(output.ends_with("gene1.gff3"));
//! ```
//!
//! ### Working on streams
//!
//! ```rust
//! use gff2apollo::{parse_gff2, write_gff3};
//!
//! let gff2 = "chr1\tGEP\tCDS\t100\t200\t.\t+\t0\tgene_id \"G1\"\n";
//! let model = parse_gff2(gff2.as_bytes(), false).unwrap();
//!
//! let mut gff3 = Vec::new();
//! write_gff3(&mut gff3, "gene1", &model).unwrap();
//! assert!(String::from_utf8(gff3).unwrap().contains("Parent=gene1-PA;gene_id=G1"));
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod detect;
pub mod emit;
pub mod error;
pub mod gff;

pub use cli::{ArgError, Args};
pub use config::Config;
pub use convert::{convert_file, convert_files, run, BatchReport};
pub use detect::discover_inputs;
pub use emit::write_gff3;
pub use error::{Gff2ApolloError, Result};
pub use gff::{parse_gff2, translate_attributes, FeatureRecord, Strand, TranscriptModel};
