//! Read mapping on top of the suffix tree: one tree per reference, every read
//! matched against it, occurrences collected from the leaves under the match.

pub mod output;
pub mod pipeline;

use rayon::prelude::*;

use crate::error::{MatchError, MatchResult};
use crate::index::SuffixTree;

pub use pipeline::{map_fastq_with_opt, MapSummary};

/// Runtime options for the `map` command.
#[derive(Debug, Clone, Copy)]
pub struct MapOpt {
    /// Worker threads for matching reads; 0 lets rayon decide.
    pub threads: usize,
    /// Uppercase reference and reads (U -> T) before indexing.
    pub normalize: bool,
}

impl Default for MapOpt {
    fn default() -> Self {
        Self { threads: 1, normalize: false }
    }
}

/// All zero-based positions where `query` occurs in `reference`, ascending.
///
/// Empty input and "not found" both give an empty vector; only a sentinel byte
/// in either input is an error.
pub fn map_occurrences(reference: &[u8], query: &[u8]) -> MatchResult<Vec<usize>> {
    let tree = match SuffixTree::build(reference) {
        Ok(t) => t,
        Err(e) if e.is_no_hit() => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    locate(&tree, query)
}

/// Same reduction as [`map_occurrences`] against an already built tree.
pub fn locate(tree: &SuffixTree, query: &[u8]) -> MatchResult<Vec<usize>> {
    match tree.occurrences(query) {
        Err(e) if e.is_no_hit() => Ok(Vec::new()),
        other => other,
    }
}

/// Match a batch of reads against one shared tree on the current rayon pool.
/// Results keep the input order.
pub fn map_reads<S>(tree: &SuffixTree, reads: &[S]) -> Vec<MatchResult<Vec<usize>>>
where
    S: AsRef<[u8]> + Sync,
{
    reads.par_iter().map(|r| locate(tree, r.as_ref())).collect()
}

/// Read mapping helper when the reference may be absent.
pub fn map_optional(tree: Option<&SuffixTree>, query: &[u8]) -> MatchResult<Vec<usize>> {
    match tree {
        Some(t) => locate(t, query),
        None => Ok(Vec::new()),
    }
}
