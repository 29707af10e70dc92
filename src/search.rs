use anyhow::Result;
use std::fmt;
use tracing::{debug, info, trace};

use crate::error::SearchError;
use crate::graph::{aggregate, KmerGraph};
use crate::io::SequenceSource;

/// Integer returned when no qualifying `k` exists.
pub const NOT_FOUND: i64 = -1;

/// Default upper bound on `k`.
pub const DEFAULT_MAX_K: usize = 50;

/// How many branching nodes to print when the search gives up.
const MAX_REPORTED_BRANCHES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOpt {
    /// First `k` to try.
    pub start_k: usize,
    /// Largest `k` to try, inclusive.
    pub max_k: usize,
}

impl Default for SearchOpt {
    fn default() -> Self {
        Self { start_k: 1, max_k: DEFAULT_MAX_K }
    }
}

impl SearchOpt {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.start_k == 0 {
            return Err(SearchError::InvalidK(self.start_k));
        }
        if self.max_k < self.start_k {
            return Err(SearchError::InvalidBounds { start_k: self.start_k, max_k: self.max_k });
        }
        Ok(())
    }
}

/// 搜索结果：找到的最小 k，或者失败的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every k-mer in the order-`k` graph has exactly one successor.
    Found(usize),
    /// The graph became empty at this `k`: every sequence is too short.
    Exhausted { k: usize },
    /// `max_k` was tried and still had branching nodes.
    BoundReached { max_k: usize },
}

impl SearchOutcome {
    pub fn k(&self) -> Option<usize> {
        match *self {
            SearchOutcome::Found(k) => Some(k),
            _ => None,
        }
    }

    /// The found `k`, or [`NOT_FOUND`] for both failure outcomes.
    pub fn as_sentinel(&self) -> i64 {
        self.k().map_or(NOT_FOUND, |k| k as i64)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sentinel())
    }
}

/// The stopping rule for one candidate `k`.
///
/// An empty graph never qualifies, even though it has no branching node.
pub fn qualifies(graph: &KmerGraph) -> bool {
    !graph.is_empty() && graph.is_unbranching()
}

/// 从 `opt.start_k` 开始逐一增大 k，返回第一个使所有 k-mer 恰有一个后继的 k。
///
/// 每个候选 k 都重新读取一遍输入并构建新的图，判定后即丢弃。图为空时立即
/// 停止（更大的 k 只会继续为空）；超过 `opt.max_k` 也停止。两种失败都不是
/// 错误，只有输入读取失败和非法参数会返回 `Err`。
pub fn search<S: SequenceSource>(source: &S, opt: &SearchOpt) -> Result<SearchOutcome> {
    opt.validate()?;

    let mut last: Option<KmerGraph> = None;
    for k in opt.start_k..=opt.max_k {
        let graph = aggregate(source, k)?;

        if graph.is_empty() {
            info!(k, "k-mer graph is empty, no longer k can qualify");
            report_branches(last.as_ref());
            return Ok(SearchOutcome::Exhausted { k });
        }
        if qualifies(&graph) {
            info!(k, nodes = graph.len(), "found unbranching k");
            return Ok(SearchOutcome::Found(k));
        }

        debug!(k, branching = graph.branching_nodes().len(), "graph still branches");
        last = Some(graph);
    }

    info!(max_k = opt.max_k, "search bound reached");
    report_branches(last.as_ref());
    Ok(SearchOutcome::BoundReached { max_k: opt.max_k })
}

/// Runs [`search`] with default options and returns the integer form:
/// the smallest `k`, or `-1`.
pub fn find_smallest_unbranching_k<S: SequenceSource>(source: &S) -> Result<i64> {
    Ok(search(source, &SearchOpt::default())?.as_sentinel())
}

fn report_branches(graph: Option<&KmerGraph>) {
    let Some(graph) = graph else { return };
    let nodes = graph.branching_nodes();
    for (kmer, n) in nodes.iter().take(MAX_REPORTED_BRANCHES) {
        trace!(k = graph.k(), kmer = %String::from_utf8_lossy(kmer), successors = n, "branching node");
    }
    if nodes.len() > MAX_REPORTED_BRANCHES {
        trace!(more = nodes.len() - MAX_REPORTED_BRANCHES, "more branching nodes not shown");
    }
}
