mod attr;
pub use attr::*;

use crate::error::{Gff2ApolloError, Result};
use std::io::BufRead;

/// Number of tab-separated columns in a GFF feature line.
pub const GFF_COLUMNS: usize = 9;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
    /// `?`: strand is relevant but not known.
    Undetermined,
}

impl Strand {
    /// Maps a strand column to a strand; `None` for anything but `+`, `-`, `.` or `?`.
    pub fn from_column(column: &str) -> Option<Self> {
        match column {
            "+" => Some(Strand::Forward),
            "-" => Some(Strand::Reverse),
            "." => Some(Strand::Unknown),
            "?" => Some(Strand::Undetermined),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::Unknown => '.',
            Strand::Undetermined => '?',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One feature line of a GFF2 file, attributes already translated to GFF3.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FeatureRecord {
    pub feature: String,
    pub start: i64,
    pub end: i64,
    pub score: String,
    pub strand: Strand,
    pub phase: String,
    pub attributes: String,
}

/// A raw feature line split into columns, borrowed from the input line.
#[derive(Debug, PartialEq)]
pub struct GffLine<'a> {
    pub seqid: &'a str,
    pub source: &'a str,
    pub feature: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub score: &'a str,
    pub strand: &'a str,
    pub phase: &'a str,
    pub attributes: &'a str,
}

impl<'a> GffLine<'a> {
    /// Splits a line into its 9 columns.
    ///
    /// Returns `None` for comment, directive and `track` lines, and for lines
    /// with fewer than 9 columns. Extra tabs stay in the attribute column.
    pub fn split(line: &'a str) -> Option<Self> {
        if is_header(line) {
            return None;
        }

        let mut fields = line.splitn(GFF_COLUMNS, '\t');

        Some(Self {
            seqid: fields.next()?,
            source: fields.next()?,
            feature: fields.next()?,
            start: fields.next()?,
            end: fields.next()?,
            score: fields.next()?,
            strand: fields.next()?,
            phase: fields.next()?,
            attributes: fields.next()?,
        })
    }
}

/// `#` comments, `##` directives and UCSC `track` lines.
pub fn is_header(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("track")
}

fn parse_coordinate(value: &str, column: &'static str, line: usize) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| Gff2ApolloError::Coordinate {
            line,
            column,
            value: value.to_string(),
            source,
        })
}

/// Everything read from one GFF2 file: the sequence, the overall span and the
/// feature lines in input order.
#[derive(Debug, PartialEq, Clone)]
pub struct TranscriptModel {
    pub seqid: String,
    pub start: i64,
    pub end: i64,
    pub strand: Strand,
    pub features: Vec<FeatureRecord>,
}

/// Reads a GFF2 file and aggregates it into a single [`TranscriptModel`].
///
/// The span is the minimum start and maximum end over every feature line.
/// When `lenient` is false every feature line must share the seqid and strand
/// of the first one; otherwise the last feature line wins.
///
/// # Errors
///
/// Fails on a non-integer coordinate, on a seqid/strand mismatch (strict
/// mode), on I/O errors, with [`Gff2ApolloError::EmptyFeatureSet`] when
/// no feature line was found, and with [`Gff2ApolloError::InvertedSpan`] when
/// the minimum start lies past the maximum end.
pub fn parse_gff2<R: BufRead>(reader: R, lenient: bool) -> Result<TranscriptModel> {
    let mut seqid: Option<String> = None;
    let mut strand = Strand::Unknown;
    let mut span: Option<(i64, i64)> = None;
    let mut features = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let Some(cols) = GffLine::split(line) else {
            log::debug!("skipping line {line_no}");
            continue;
        };

        let start = parse_coordinate(cols.start, "start", line_no)?;
        let end = parse_coordinate(cols.end, "end", line_no)?;

        let line_strand = Strand::from_column(cols.strand).unwrap_or_else(|| {
            log::warn!(
                "line {line_no}: unknown strand {:?}, using '.'",
                cols.strand
            );
            Strand::Unknown
        });

        match seqid.as_deref() {
            Some(expected) if !lenient && expected != cols.seqid => {
                return Err(Gff2ApolloError::InconsistentSeqid {
                    line: line_no,
                    expected: expected.to_string(),
                    found: cols.seqid.to_string(),
                });
            }
            Some(_) if !lenient && strand != line_strand => {
                return Err(Gff2ApolloError::InconsistentStrand {
                    line: line_no,
                    expected: strand.as_char(),
                    found: line_strand.as_char(),
                });
            }
            _ => {}
        }

        seqid = Some(cols.seqid.to_string());
        strand = line_strand;
        span = Some(match span {
            Some((lo, hi)) => (lo.min(start), hi.max(end)),
            None => (start, end),
        });

        features.push(FeatureRecord {
            feature: cols.feature.to_string(),
            start,
            end,
            score: cols.score.to_string(),
            strand: line_strand,
            phase: cols.phase.to_string(),
            attributes: translate_attributes(cols.attributes),
        });
    }

    let ((start, end), seqid) = span.zip(seqid).ok_or(Gff2ApolloError::EmptyFeatureSet)?;
    if start > end {
        return Err(Gff2ApolloError::InvertedSpan { start, end });
    }

    Ok(TranscriptModel {
        seqid,
        start,
        end,
        strand,
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CDS: &str = "chr1\tGEP\tCDS\t100\t200\t.\t+\t0\tgene_id \"G1\"";
    const EXON: &str = "chr1\tGEP\texon\t50\t250\t.\t+\t.\tgene_id \"G1\"";

    #[test]
    fn test_split_line() {
        let cols = GffLine::split(CDS).unwrap();
        assert_eq!(cols.seqid, "chr1");
        assert_eq!(cols.source, "GEP");
        assert_eq!(cols.feature, "CDS");
        assert_eq!(cols.start, "100");
        assert_eq!(cols.end, "200");
        assert_eq!(cols.score, ".");
        assert_eq!(cols.strand, "+");
        assert_eq!(cols.phase, "0");
        assert_eq!(cols.attributes, "gene_id \"G1\"");
    }

    #[test]
    fn test_split_skips_headers_and_short_lines() {
        assert_eq!(GffLine::split("##gff-version 2"), None);
        assert_eq!(GffLine::split("# comment\twith\ttabs"), None);
        assert_eq!(GffLine::split("track name=gep"), None);
        assert_eq!(GffLine::split("chr1\tGEP\tCDS\t100\t200"), None);
        assert_eq!(GffLine::split(""), None);
    }

    #[test]
    fn test_split_keeps_extra_tabs_in_attributes() {
        let cols = GffLine::split("chr1\tGEP\tCDS\t1\t2\t.\t+\t0\ta \"b\"\textra").unwrap();
        assert_eq!(cols.attributes, "a \"b\"\textra");
    }

    #[test]
    fn test_parse_span_and_features() {
        let input = format!("##gff-version 2\n{CDS}\n# note\n{EXON}\n");
        let model = parse_gff2(input.as_bytes(), false).unwrap();
        assert_eq!(model.seqid, "chr1");
        assert_eq!(model.start, 50);
        assert_eq!(model.end, 250);
        assert_eq!(model.strand, Strand::Forward);
        assert_eq!(model.features.len(), 2);
        assert_eq!(model.features[0].feature, "CDS");
        assert_eq!(model.features[0].phase, "0");
        assert_eq!(model.features[0].attributes, "gene_id=G1");
        assert_eq!(model.features[1].start, 50);
    }

    #[test]
    fn test_parse_crlf() {
        let input = format!("{CDS}\r\n");
        let model = parse_gff2(input.as_bytes(), false).unwrap();
        assert_eq!(model.features[0].attributes, "gene_id=G1");
    }

    #[test]
    fn test_parse_empty_feature_set() {
        let input = "##gff-version 2\ntrack name=x\nshort\tline\n";
        let err = parse_gff2(input.as_bytes(), false).unwrap_err();
        assert!(matches!(err, Gff2ApolloError::EmptyFeatureSet));
    }

    #[test]
    fn test_parse_bad_coordinate() {
        let input = "chr1\tGEP\tCDS\tabc\t200\t.\t+\t0\tgene_id \"G1\"\n";
        let err = parse_gff2(input.as_bytes(), false).unwrap_err();
        match err {
            Gff2ApolloError::Coordinate {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 1);
                assert_eq!(column, "start");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_inconsistent_seqid() {
        let input = format!("{CDS}\nchr2\tGEP\texon\t1\t5\t.\t+\t.\tgene_id \"G1\"\n");
        let err = parse_gff2(input.as_bytes(), false).unwrap_err();
        assert!(matches!(
            err,
            Gff2ApolloError::InconsistentSeqid { line: 2, .. }
        ));
    }

    #[test]
    fn test_parse_inconsistent_strand() {
        let input = format!("{CDS}\nchr1\tGEP\texon\t1\t5\t.\t-\t.\tgene_id \"G1\"\n");
        let err = parse_gff2(input.as_bytes(), false).unwrap_err();
        assert!(matches!(
            err,
            Gff2ApolloError::InconsistentStrand {
                line: 2,
                expected: '+',
                found: '-'
            }
        ));
    }

    #[test]
    fn test_parse_lenient_last_line_wins() {
        let input = format!("{CDS}\nchr2\tGEP\texon\t1\t5\t.\t-\t.\tgene_id \"G1\"\n");
        let model = parse_gff2(input.as_bytes(), true).unwrap();
        assert_eq!(model.seqid, "chr2");
        assert_eq!(model.strand, Strand::Reverse);
        assert_eq!(model.start, 1);
        assert_eq!(model.end, 200);
    }

    #[test]
    fn test_unknown_strand_folds_to_dot() {
        let input = "chr1\tGEP\tCDS\t1\t5\t.\t*\t0\tgene_id \"G1\"\n";
        let model = parse_gff2(input.as_bytes(), false).unwrap();
        assert_eq!(model.strand, Strand::Unknown);
        assert_eq!(model.features[0].strand.to_string(), ".");
    }

    #[test]
    fn test_question_mark_strand_is_kept() {
        let input = "chr1\tGEP\tCDS\t1\t5\t.\t?\t0\tgene_id \"G1\"\n";
        let model = parse_gff2(input.as_bytes(), false).unwrap();
        assert_eq!(model.strand, Strand::Undetermined);
        assert_eq!(model.features[0].strand.to_string(), "?");
    }

    #[test]
    fn test_question_mark_and_dot_strands_differ() {
        let input = "chr1\tGEP\tCDS\t1\t5\t.\t.\t0\tgene_id \"G1\"\n\
                     chr1\tGEP\texon\t1\t5\t.\t?\t.\tgene_id \"G1\"\n";
        let err = parse_gff2(input.as_bytes(), false).unwrap_err();
        assert!(matches!(
            err,
            Gff2ApolloError::InconsistentStrand {
                line: 2,
                expected: '.',
                found: '?'
            }
        ));
    }

    #[test]
    fn test_parse_inverted_span() {
        let input = "chr1\tGEP\tCDS\t200\t100\t.\t+\t0\tgene_id \"G1\"\n";
        let err = parse_gff2(input.as_bytes(), false).unwrap_err();
        assert!(matches!(
            err,
            Gff2ApolloError::InvertedSpan {
                start: 200,
                end: 100
            }
        ));
    }

    #[test]
    fn test_parse_single_inverted_line_inside_span() {
        let input = format!("{EXON}\nchr1\tGEP\tCDS\t120\t110\t.\t+\t0\tgene_id \"G1\"\n");
        let model = parse_gff2(input.as_bytes(), false).unwrap();
        assert_eq!((model.start, model.end), (50, 250));
    }
}
