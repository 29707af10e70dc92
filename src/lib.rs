//! # unbranch-k
//!
//! 寻找最小的 k，使得一组 DNA 序列的 k 阶 de Bruijn 图中不存在分支节点，
//! 即每个出现过的 k-mer 在所有出现位置之后都只跟随同一个 k-mer。
//!
//! - **k-mer 图构建**：单条序列 → k-mer 到后继集合的映射
//! - **聚合**：按行读取所有序列（跳过 `>` 开头的注释行），合并后继集合
//! - **搜索**：k 从 1 开始递增，图为空或超过上限时返回 `-1`
//!
//! ## 快速示例
//!
//! ```rust
//! use unbranch_k::io::MemorySource;
//! use unbranch_k::search::{search, SearchOpt, SearchOutcome};
//!
//! let source = MemorySource::new(">seq1\nAATT\n");
//! let outcome = search(&source, &SearchOpt::default()).unwrap();
//! assert_eq!(outcome, SearchOutcome::Found(2));
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — 按行读取序列，可重复打开的输入来源
//! - [`graph`] — k-mer 图的构建与聚合
//! - [`search`] — 最小无分支 k 的搜索
//! - [`util`] — 可选的碱基字母表校验

pub mod error;
pub mod graph;
pub mod io;
pub mod search;
pub mod util;

pub use error::SearchError;
pub use graph::{aggregate, KmerGraph};
pub use search::{find_smallest_unbranching_k, search, SearchOpt, SearchOutcome, NOT_FOUND};
