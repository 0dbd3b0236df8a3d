use super::{check_preconditions, transition_model, Distribution};
use crate::{
    corpus::Corpus,
    error::{Error, Result},
};
use rand::{
    distributions::{Distribution as _, WeightedIndex},
    Rng,
};

/// Estimates PageRank by simulating a random surfer for `samples` steps,
/// drawing entropy from the thread-local RNG.
pub fn sample_pagerank(corpus: &Corpus, damping: f64, samples: usize) -> Result<Distribution> {
    sample_pagerank_with(corpus, damping, samples, &mut rand::thread_rng())
}

/// Estimates PageRank by simulating a random surfer for `samples` steps.
///
/// The walk starts on a uniformly random page. Each step folds the
/// transition distribution of the current page into a running mean, then
/// draws the next page by weighted choice over that running mean. The
/// draw deliberately uses the cumulative estimate rather than the
/// single-step distribution: it smooths the walk at the cost of some
/// estimator purity, and changing it changes the algorithm.
///
/// Page order is fixed lexicographically, so a seeded `rng` reproduces
/// the same walk on the same corpus.
pub fn sample_pagerank_with<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Distribution> {
    check_preconditions(corpus, damping)?;

    if samples == 0 {
        return Err(Error::Generic(
            "sample count must be at least 1".to_string(),
        ));
    }

    let pages = corpus.sorted_pages();
    let mut dist: Distribution = pages.iter().map(|name| ((*name).to_string(), 0.0)).collect();
    let mut page = pages[rng.gen_range(0..pages.len())].to_string();

    for i in 1..=samples {
        let current = transition_model(corpus, &page, damping)?;

        // Online mean of the per-step transition distributions.
        let step = i as f64;
        for name in &pages {
            if let Some(mass) = dist.get_mut(*name) {
                *mass = ((step - 1.0) * *mass + current[*name]) / step;
            }
        }

        let weights: Vec<f64> = pages.iter().map(|name| dist[*name]).collect();
        let choice = WeightedIndex::new(&weights)
            .map_err(|e| Error::Generic(format!("Failed to build weighted choice: {e}")))?;
        page = pages[choice.sample(rng)].to_string();
    }

    log::info!("sampled {samples} steps over {} pages", corpus.len());

    Ok(dist)
}
