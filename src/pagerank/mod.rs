use crate::{
    corpus::Corpus,
    error::{Error, Result},
};
use std::collections::HashMap;

mod iterative;
mod sampling;
mod transition;

pub use iterative::{iterate_pagerank, iterate_pagerank_from, CONVERGENCE_THRESHOLD};
pub use sampling::{sample_pagerank, sample_pagerank_with};
pub use transition::transition_model;

/// PageRank values keyed by page name. Values lie in [0, 1] and sum to 1
/// up to floating-point rounding.
pub type Distribution = HashMap<String, f64>;

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10_000;

// Shared precondition check: both algorithms and the transition model
// require a non-empty corpus and a damping factor strictly inside (0, 1).
pub(crate) fn check_preconditions(corpus: &Corpus, damping: f64) -> Result<()> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    if damping <= 0.0 || damping >= 1.0 {
        return Err(Error::InvalidDamping(damping));
    }
    Ok(())
}
