use std::collections::{HashMap, HashSet};

/// Distinct k-mers observed right after a given k-mer.
pub type SuccessorSet = HashSet<Vec<u8>>;

/// 隐式 de Bruijn 图：k-mer → 其后继 k-mer 集合。
///
/// 节点是长度为 k 的子串，边是相邻窗口之间的平移关系。序列末尾的最后一个
/// 窗口没有后继，因此永远不会作为键出现；图中不存在后继集合为空的节点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerGraph {
    k: usize,
    succ: HashMap<Vec<u8>, SuccessorSet>,
}

/// Overlapping `(kmer, successor)` windows of `seq`, one per start offset
/// `0..len - k`. Yields nothing when `k == 0` or `k >= len`.
pub fn kmer_pairs(seq: &[u8], k: usize) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
    let n_pairs = if k == 0 { 0 } else { seq.len().saturating_sub(k) };
    (0..n_pairs).map(move |i| (&seq[i..i + k], &seq[i + 1..i + 1 + k]))
}

impl KmerGraph {
    pub fn new(k: usize) -> Self {
        Self { k, succ: HashMap::new() }
    }

    /// Builds the order-`k` graph of a single sequence.
    pub fn from_sequence(seq: &[u8], k: usize) -> Self {
        let mut g = Self::new(k);
        g.add_sequence(seq);
        g
    }

    /// Adds every window transition of `seq`; returns the number of pairs seen
    /// (repeats included).
    pub fn add_sequence(&mut self, seq: &[u8]) -> usize {
        let mut n = 0usize;
        for (kmer, next) in kmer_pairs(seq, self.k) {
            self.insert_edge(kmer, next);
            n += 1;
        }
        n
    }

    pub fn insert_edge(&mut self, kmer: &[u8], next: &[u8]) {
        // avoid allocating the key when the node already exists
        if let Some(set) = self.succ.get_mut(kmer) {
            if !set.contains(next) {
                set.insert(next.to_vec());
            }
            return;
        }
        let mut set = SuccessorSet::with_capacity(1);
        set.insert(next.to_vec());
        self.succ.insert(kmer.to_vec(), set);
    }

    /// Unions every successor set of `other` into `self`.
    pub fn merge(&mut self, other: KmerGraph) {
        debug_assert_eq!(self.k, other.k, "merging graphs of different order");
        for (kmer, next) in other.succ {
            match self.succ.get_mut(&kmer) {
                Some(set) => set.extend(next),
                None => {
                    self.succ.insert(kmer, next);
                }
            }
        }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct k-mers that have at least one successor.
    #[inline]
    pub fn len(&self) -> usize {
        self.succ.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.succ.is_empty()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.succ.values().map(HashSet::len).sum()
    }

    pub fn successors(&self, kmer: &[u8]) -> Option<&SuccessorSet> {
        self.succ.get(kmer)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Vec<u8>, &SuccessorSet)> {
        self.succ.iter()
    }

    /// True iff every node has exactly one successor. Vacuously true on an
    /// empty graph; callers that care must check [`is_empty`](Self::is_empty).
    pub fn is_unbranching(&self) -> bool {
        self.succ.values().all(|s| s.len() == 1)
    }

    /// Nodes with more than one successor, sorted for stable output.
    pub fn branching_nodes(&self) -> Vec<(&[u8], usize)> {
        let mut out: Vec<(&[u8], usize)> = self
            .succ
            .iter()
            .filter(|(_, s)| s.len() > 1)
            .map(|(kmer, s)| (kmer.as_slice(), s.len()))
            .collect();
        out.sort_unstable();
        out
    }
}
