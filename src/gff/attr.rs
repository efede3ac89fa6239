/// Lenient scanner over a GFF2 attribute column.
///
/// At every position two token shapes are tried, in order:
///
/// * `key "value"`: a run of non-blank characters, optional blanks, then a
///   double-quoted value that may hold anything but `"`;
/// * `key=value`: a non-blank key up to the first `=`, then a non-empty
///   non-blank value.
///
/// Keys are as short as possible, so `a=b "c"` yields the pair
/// (`a=b`, `c`). Fragments matching neither shape are skipped one character
/// at a time. Pairs come out in input order and duplicates are kept.
#[derive(Debug, Clone)]
pub struct AttributeScanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> AttributeScanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Tries both token shapes at `start`; returns the pair and the end of the match.
    fn match_at(&self, start: usize) -> Option<(&'a str, &'a str, usize)> {
        let first = self.src[start..].chars().next()?;
        if first.is_whitespace() {
            return None;
        }

        let token_end = self.src[start..]
            .find(char::is_whitespace)
            .map_or(self.src.len(), |idx| start + idx);

        self.quoted_at(start, token_end)
            .or_else(|| self.keyed_at(start, first.len_utf8(), token_end))
    }

    /// `key "value"` with the shortest key that leads to a closed quote.
    fn quoted_at(&self, start: usize, token_end: usize) -> Option<(&'a str, &'a str, usize)> {
        let key_ends = self.src[start..token_end]
            .char_indices()
            .skip(1)
            .map(|(idx, _)| start + idx)
            .chain(std::iter::once(token_end));

        for key_end in key_ends {
            let open = if key_end < token_end {
                key_end
            } else {
                self.skip_blanks(token_end)
            };

            if !self.src[open..].starts_with('"') {
                continue;
            }

            let value_start = open + 1;
            if let Some(len) = self.src[value_start..].find('"') {
                let value_end = value_start + len;
                return Some((
                    &self.src[start..key_end],
                    &self.src[value_start..value_end],
                    value_end + 1,
                ));
            }
        }

        None
    }

    /// `key=value` inside a single blank-free token.
    fn keyed_at(
        &self,
        start: usize,
        first_len: usize,
        token_end: usize,
    ) -> Option<(&'a str, &'a str, usize)> {
        let key_end = start + first_len + self.src[start + first_len..token_end].find('=')?;
        let value_start = key_end + 1;

        if value_start >= token_end {
            return None;
        }

        Some((
            &self.src[start..key_end],
            &self.src[value_start..token_end],
            token_end,
        ))
    }

    fn skip_blanks(&self, from: usize) -> usize {
        self.src[from..]
            .find(|c: char| !c.is_whitespace())
            .map_or(self.src.len(), |idx| from + idx)
    }
}

impl<'a> Iterator for AttributeScanner<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.src.len() {
            if let Some((key, value, end)) = self.match_at(self.pos) {
                self.pos = end;
                return Some((key, value));
            }

            let step = self.src[self.pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.pos += step;
        }

        None
    }
}

/// Re-encodes a GFF2 attribute column as GFF3 `key=value` pairs joined by `;`.
///
/// Values are copied verbatim; embedded `;` or `=` are not escaped.
///
/// # Example
///
/// ```rust
/// use gff2apollo::translate_attributes;
///
/// let attrs = translate_attributes("gene_id \"G1\"; transcript_id \"T1\";");
/// assert_eq!(attrs, "gene_id=G1;transcript_id=T1");
/// ```
pub fn translate_attributes(raw: &str) -> String {
    AttributeScanner::new(raw)
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<String>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_gtf_style() {
        let line = "gene_id \"G1\"; transcript_id \"T1\";";
        assert_eq!(translate_attributes(line), "gene_id=G1;transcript_id=T1");
    }

    #[test]
    fn test_translate_keeps_spaces_in_quotes() {
        let line = "gene_id \"G1\"; note \"putative kinase; partial\"";
        assert_eq!(
            translate_attributes(line),
            "gene_id=G1;note=putative kinase; partial"
        );
    }

    #[test]
    fn test_translate_key_value_tokens() {
        let line = "ID=cds1 Name=abc";
        assert_eq!(translate_attributes(line), "ID=cds1;Name=abc");
    }

    #[test]
    fn test_translate_gff3_passthrough() {
        let line = "ID=cds1;Parent=tx1";
        assert_eq!(translate_attributes(line), "ID=cds1;Parent=tx1");
    }

    #[test]
    fn test_translate_empty() {
        assert_eq!(translate_attributes(""), "");
        assert_eq!(translate_attributes("   "), "");
    }

    #[test]
    fn test_translate_empty_quoted_value() {
        assert_eq!(translate_attributes("gene_id \"\""), "gene_id=");
    }

    #[test]
    fn test_translate_quote_without_blank() {
        assert_eq!(translate_attributes("gene_id\"G1\""), "gene_id=G1");
    }

    #[test]
    fn test_translate_skips_garbage() {
        let line = "; orphan gene_id \"G1\" dangling= =x";
        assert_eq!(translate_attributes(line), "gene_id=G1");
    }

    #[test]
    fn test_translate_unterminated_quote() {
        assert_eq!(translate_attributes("gene_id \"G1"), "");
        assert_eq!(translate_attributes("ID=a gene_id \"G1"), "ID=a");
    }

    #[test]
    fn test_translate_shortest_key_wins() {
        assert_eq!(translate_attributes("a=b \"c\""), "a=b=c");
    }

    #[test]
    fn test_translate_keeps_duplicates() {
        let line = "tag \"a\"; tag \"b\"";
        assert_eq!(translate_attributes(line), "tag=a;tag=b");
    }

    #[test]
    fn test_scanner_pairs() {
        let pairs = AttributeScanner::new("exon_number \"2\"; ID=e2").collect::<Vec<_>>();
        assert_eq!(pairs, vec![("exon_number", "2"), ("ID", "e2")]);
    }
}
