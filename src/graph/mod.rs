pub mod aggregate;
pub mod kmer;

pub use aggregate::aggregate;
pub use kmer::{kmer_pairs, KmerGraph, SuccessorSet};
