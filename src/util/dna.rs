use anyhow::{Context, Result};
use thiserror::Error;

use crate::io::SequenceSource;

/// Alphabet accepted by the strict input check.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Errors raised by the strict alphabet check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnaError {
    /// A character outside `{A,C,G,T}`; `column` counts characters, 1-based
    #[error("invalid nucleotide {base:?} at line {line}, column {column}")]
    InvalidBase { line: usize, column: usize, base: char },
}

#[inline]
pub fn is_nucleotide(b: u8) -> bool {
    NUCLEOTIDES.contains(&b.to_ascii_uppercase())
}

/// Returns the first character outside `{A,C,G,T}` (case-insensitive) as
/// `(column, char)`. Columns count characters, not bytes, and are 1-based.
/// Invalid UTF-8 is reported as U+FFFD.
pub fn first_invalid_base(seq: &[u8]) -> Option<(usize, char)> {
    String::from_utf8_lossy(seq)
        .chars()
        .enumerate()
        .find(|&(_, c)| !(c.is_ascii() && is_nucleotide(c as u8)))
        .map(|(i, c)| (i + 1, c))
}

pub fn check_sequence(seq: &[u8], line: usize) -> Result<(), DnaError> {
    match first_invalid_base(seq) {
        Some((column, base)) => Err(DnaError::InvalidBase { line, column, base }),
        None => Ok(()),
    }
}

/// Reads the whole source once and fails on the first non-ACGT character.
///
/// Meant to run before the search; the graph builders themselves accept any
/// byte as an opaque symbol.
pub fn validate_source<S: SequenceSource>(source: &S) -> Result<usize> {
    let mut n_seqs = 0usize;
    for rec in source.open()? {
        let rec = rec.with_context(|| format!("cannot read '{}'", source.describe()))?;
        check_sequence(&rec.seq, rec.line_no)
            .with_context(|| format!("'{}' is not a plain DNA file", source.describe()))?;
        n_seqs += 1;
    }
    Ok(n_seqs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemorySource;

    #[test]
    fn accepts_mixed_case_acgt() {
        assert_eq!(first_invalid_base(b"ATCGatcg"), None);
        assert!(check_sequence(b"", 1).is_ok());
    }

    #[test]
    fn reports_first_bad_character() {
        assert_eq!(first_invalid_base(b"ATCGatcgXYZ"), Some((9, 'X')));
        let err = check_sequence(b"ACNT", 7).unwrap_err();
        assert_eq!(err, DnaError::InvalidBase { line: 7, column: 3, base: 'N' });
        assert_eq!(err.to_string(), "invalid nucleotide 'N' at line 7, column 3");
    }

    #[test]
    fn non_ascii_is_reported_as_a_char() {
        // é is two bytes in UTF-8; neither byte may leak into the report
        let seq = "ACéT".as_bytes();
        assert_eq!(first_invalid_base(seq), Some((3, 'é')));
        let err = check_sequence(seq, 4).unwrap_err();
        assert_eq!(err.to_string(), "invalid nucleotide 'é' at line 4, column 3");
    }

    #[test]
    fn validate_source_counts_and_fails_fast() {
        let ok = MemorySource::new(">Test Sequence\nATCGATCGatcgatcg\n");
        assert_eq!(validate_source(&ok).unwrap(), 1);

        let bad = MemorySource::new(">Test Sequence\nATCGatcgXYZ\n");
        let err = validate_source(&bad).unwrap_err();
        let dna = err.downcast_ref::<DnaError>().unwrap();
        assert_eq!(dna, &DnaError::InvalidBase { line: 2, column: 9, base: 'X' });
    }
}
