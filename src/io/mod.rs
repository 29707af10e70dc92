//! 输入：按行读取序列，以及可重复读取的序列来源。

pub mod lines;
pub mod source;

pub use lines::{SequenceLine, SequenceLineReader};
pub use source::{FileSource, MemorySource, SequenceSource};
