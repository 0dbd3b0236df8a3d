use super::{check_preconditions, Distribution};
use crate::{
    corpus::Corpus,
    error::{Error, Result},
};

/// Probability distribution over the page a random surfer visits next,
/// given the page they are on.
///
/// With probability `damping` the surfer follows one of `page`'s outbound
/// links, chosen uniformly; with probability `1 - damping` they jump to a
/// uniformly random corpus page. A dangling page (no outbound links) is
/// treated as linking to every page, so the result is exactly uniform and
/// damping plays no part.
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    check_preconditions(corpus, damping)?;

    let links = corpus
        .links(page)
        .ok_or_else(|| Error::UnknownPage(page.to_string()))?;

    let num_pages = corpus.len() as f64;
    let mut dist = Distribution::with_capacity(corpus.len());

    if links.is_empty() {
        for name in corpus.pages() {
            dist.insert(name.to_string(), 1.0 / num_pages);
        }
    } else {
        let base = (1.0 - damping) / num_pages;
        let per_link = damping / links.len() as f64;

        for name in corpus.pages() {
            dist.insert(name.to_string(), base);
        }
        for link in links {
            if let Some(mass) = dist.get_mut(link) {
                *mass += per_link;
            }
        }
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn corpus(pages: &[(&str, &[&str])]) -> Corpus {
        Corpus::from_pages(
            pages
                .iter()
                .map(|(page, links)| {
                    (
                        (*page).to_string(),
                        links.iter().map(ToString::to_string).collect::<HashSet<_>>(),
                    )
                })
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn sums_to_one_and_is_nonnegative() {
        let corpus = corpus(&[
            ("1.html", &["2.html"]),
            ("2.html", &["1.html", "3.html"]),
            ("3.html", &["2.html"]),
        ]);

        let dist = transition_model(&corpus, "2.html", 0.85).expect("Failed to compute model");

        let sum: f64 = dist.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(dist.values().all(|&mass| mass >= 0.0));
    }

    #[test]
    fn linked_pages_get_base_plus_link_share() {
        let corpus = corpus(&[
            ("1.html", &["2.html"]),
            ("2.html", &["1.html", "3.html"]),
            ("3.html", &["2.html"]),
        ]);

        let dist = transition_model(&corpus, "1.html", 0.85).expect("Failed to compute model");

        // base = 0.15 / 3 = 0.05; the single link gets 0.85 on top.
        assert!((dist["2.html"] - 0.9).abs() < 1e-12);
        assert!((dist["1.html"] - 0.05).abs() < 1e-12);
        assert!((dist["3.html"] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn non_linked_page_gets_exactly_the_base_mass() {
        for damping in [0.5, 0.85, 0.99] {
            let corpus = corpus(&[
                ("1.html", &["2.html"]),
                ("2.html", &[]),
                ("3.html", &[]),
            ]);

            let dist =
                transition_model(&corpus, "1.html", damping).expect("Failed to compute model");

            assert!((dist["3.html"] - (1.0 - damping) / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn dangling_page_yields_uniform_regardless_of_damping() {
        for damping in [0.1, 0.85, 0.99] {
            let corpus = corpus(&[
                ("1.html", &["2.html"]),
                ("2.html", &[]),
                ("3.html", &["1.html"]),
            ]);

            let dist =
                transition_model(&corpus, "2.html", damping).expect("Failed to compute model");

            for mass in dist.values() {
                assert!((mass - 1.0 / 3.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn unknown_page_is_an_error() {
        let corpus = corpus(&[("1.html", &[])]);

        assert!(matches!(
            transition_model(&corpus, "missing.html", 0.85),
            Err(crate::error::Error::UnknownPage(_))
        ));
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let corpus = corpus(&[]);

        assert!(matches!(
            transition_model(&corpus, "1.html", 0.85),
            Err(crate::error::Error::EmptyCorpus)
        ));
    }

    #[test]
    fn out_of_range_damping_is_an_error() {
        let corpus = corpus(&[("1.html", &[])]);

        for damping in [0.0, 1.0, -0.3, 1.7] {
            assert!(matches!(
                transition_model(&corpus, "1.html", damping),
                Err(crate::error::Error::InvalidDamping(_))
            ));
        }
    }
}
