use anyhow::{Context, Result};
use tracing::debug;

use super::kmer::KmerGraph;
use crate::error::SearchError;
use crate::io::SequenceSource;

/// Builds the order-`k` graph of every sequence in `source` and unions them.
///
/// The source is opened once and read top to bottom. Read errors are
/// returned as-is, with the source name attached.
pub fn aggregate<S: SequenceSource>(source: &S, k: usize) -> Result<KmerGraph> {
    if k == 0 {
        return Err(SearchError::InvalidK(k).into());
    }

    let mut graph = KmerGraph::new(k);
    let mut n_seqs = 0usize;
    let mut n_pairs = 0usize;

    for rec in source.open()? {
        let rec = rec.with_context(|| format!("cannot read '{}'", source.describe()))?;
        let mut local = KmerGraph::new(k);
        n_pairs += local.add_sequence(&rec.seq);
        n_seqs += 1;
        graph.merge(local);
    }

    debug!(
        k,
        sequences = n_seqs,
        pairs = n_pairs,
        nodes = graph.len(),
        edges = graph.edge_count(),
        "aggregated k-mer graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemorySource;

    #[test]
    fn unions_successors_across_sequences() {
        let src = MemorySource::new(">a\nACG\n>b\nACT\n");
        let g = aggregate(&src, 2).unwrap();
        let succ = g.successors(b"AC").unwrap();
        assert_eq!(succ.len(), 2);
        assert!(succ.contains(&b"CG".to_vec()));
        assert!(succ.contains(&b"CT".to_vec()));
        assert!(!g.is_unbranching());
    }

    #[test]
    fn identical_sequences_collapse() {
        let src = MemorySource::from_sequences(["AAAA", "AAAA"]);
        let g = aggregate(&src, 1).unwrap();
        assert_eq!(g.len(), 1);
        assert_eq!(g.edge_count(), 1);
        assert!(g.is_unbranching());
    }

    #[test]
    fn header_lines_are_never_sequence_data() {
        // `>` would otherwise show up as a k-mer
        let src = MemorySource::new(">AC\nGG\n");
        let g = aggregate(&src, 1).unwrap();
        assert_eq!(g.len(), 1);
        assert!(g.successors(b">").is_none());
        assert!(g.successors(b"G").is_some());
    }

    #[test]
    fn empty_source_gives_empty_graph() {
        let src = MemorySource::default();
        assert!(aggregate(&src, 1).unwrap().is_empty());
    }

    #[test]
    fn emptiness_is_monotonic_in_k() {
        let src = MemorySource::from_sequences(["ACGT", "GGA", "T"]);
        let k0 = (1..10)
            .find(|&k| aggregate(&src, k).unwrap().is_empty())
            .unwrap();
        assert_eq!(k0, 4);
        for k in k0..k0 + 5 {
            assert!(aggregate(&src, k).unwrap().is_empty(), "k={}", k);
        }
    }

    #[test]
    fn case_distinguishes_symbols() {
        let g = aggregate(&MemorySource::new(">s\nAAaa\n"), 1).unwrap();
        assert_eq!(g.successors(b"A").unwrap().len(), 2);
        assert_eq!(g.successors(b"a").unwrap().len(), 1);
        assert!(!g.is_unbranching());
    }

    #[test]
    fn zero_k_is_rejected() {
        let src = MemorySource::from_sequences(["ACGT"]);
        let err = aggregate(&src, 0).unwrap_err();
        assert_eq!(err.downcast_ref::<SearchError>(), Some(&SearchError::InvalidK(0)));
    }

    #[test]
    fn read_errors_propagate() {
        // invalid UTF-8 cannot be read as a text line
        let src = MemorySource::new(vec![b'A', 0xff, 0xfe, b'\n']);
        assert!(aggregate(&src, 1).is_err());
    }
}
