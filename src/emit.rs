use crate::gff::{FeatureRecord, TranscriptModel};
use std::io::Write;

/// Feature types carried over as children of the synthetic mRNA.
pub const CHILD_FEATURES: [&str; 2] = ["CDS", "exon"];
/// Source column of every emitted child line.
pub const CHILD_SOURCE: &str = "GEP";
/// Suffix appended to the file base name to build the mRNA id.
pub const TRANSCRIPT_SUFFIX: &str = "-PA";

/// Features of a model that become children of the synthetic mRNA, in input order.
pub fn children(model: &TranscriptModel) -> impl Iterator<Item = &FeatureRecord> {
    model
        .features
        .iter()
        .filter(|f| CHILD_FEATURES.contains(&f.feature.as_str()))
}

/// Builds the mRNA id for a file base name, e.g. `gene1` -> `gene1-PA`.
pub fn transcript_id(base: &str) -> String {
    format!("{base}{TRANSCRIPT_SUFFIX}")
}

/// Writes a transcript as GFF3: version and sequence-region directives, one
/// synthetic `mRNA` spanning the model, its `CDS`/`exon` children linked by
/// `Parent`, and a closing `###`.
///
/// # Arguments
///
/// * `writer` - Destination of the GFF3 text
/// * `base` - Input file base name, used to derive the mRNA id
/// * `model` - Aggregated transcript of one input file
///
/// # Example
///
/// ```rust, ignore
/// use gff2apollo::{parse_gff2, write_gff3};
///
/// let model = parse_gff2(reader, false)?;
/// let mut out = Vec::new();
/// write_gff3(&mut out, "gene1", &model)?;
/// ```
pub fn write_gff3<W: Write>(
    writer: &mut W,
    base: &str,
    model: &TranscriptModel,
) -> std::io::Result<()> {
    let mrna_id = transcript_id(base);

    writeln!(writer, "##gff-version 3")?;
    writeln!(
        writer,
        "##sequence-region {} {} {}",
        model.seqid, model.start, model.end
    )?;
    writeln!(
        writer,
        "{}\t.\tmRNA\t{}\t{}\t.\t{}\t.\tID={mrna_id};transcript_id={mrna_id}",
        model.seqid, model.start, model.end, model.strand
    )?;

    for feature in children(model) {
        writeln!(
            writer,
            "{}\t{CHILD_SOURCE}\t{}\t{}\t{}\t{}\t{}\t{}\tParent={mrna_id};{}",
            model.seqid,
            feature.feature,
            feature.start,
            feature.end,
            feature.score,
            feature.strand,
            feature.phase,
            feature.attributes
        )?;
    }

    writeln!(writer, "###")?;
    Ok(())
}
