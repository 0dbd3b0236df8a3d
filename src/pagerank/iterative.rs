use super::{check_preconditions, Distribution};
use crate::{
    corpus::Corpus,
    error::{Error, Result},
};

/// A sweep that moves no page by more than this is considered converged.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Computes PageRank as the fixed point of the rank-flow equation,
/// starting from the uniform distribution.
///
/// Each sweep recomputes every page's rank from an immutable snapshot of
/// the previous sweep: the uniform base term plus damped rank flowing in
/// from every page that links to it, split evenly across that page's
/// outbound links. A dangling page contributes flow to no one here,
/// unlike in the sampling estimator's transition model; the converged
/// total may therefore drift slightly below 1 and is not renormalized.
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<Distribution> {
    check_preconditions(corpus, damping)?;

    let uniform = 1.0 / corpus.len() as f64;
    let initial: Distribution = corpus
        .pages()
        .map(|name| (name.to_string(), uniform))
        .collect();

    iterate_pagerank_from(corpus, damping, initial)
}

/// Same as [`iterate_pagerank`], but starting from a caller-supplied
/// distribution. Feeding a converged distribution back in reproduces it
/// within the convergence threshold.
pub fn iterate_pagerank_from(
    corpus: &Corpus,
    damping: f64,
    initial: Distribution,
) -> Result<Distribution> {
    check_preconditions(corpus, damping)?;

    if !corpus.pages().all(|name| initial.contains_key(name)) {
        return Err(Error::Generic(
            "initial distribution does not cover every corpus page".to_string(),
        ));
    }

    let num_pages = corpus.len() as f64;
    let base = (1.0 - damping) / num_pages;

    let mut dist = initial;
    let mut sweeps = 0_u32;

    loop {
        let previous = dist.clone();
        let mut changed = false;
        sweeps += 1;

        for page in corpus.pages() {
            let mut inbound = 0.0;
            for source in corpus.pages() {
                if let Some(links) = corpus.links(source) {
                    if links.contains(page) {
                        inbound += previous[source] / links.len() as f64;
                    }
                }
            }

            let rank = base + damping * inbound;
            changed = changed || (previous[page] - rank).abs() > CONVERGENCE_THRESHOLD;
            dist.insert(page.to_string(), rank);
        }

        if !changed {
            break;
        }
    }

    log::info!("converged after {sweeps} sweeps over {} pages", corpus.len());

    Ok(dist)
}
