use crate::error::{Error, Result};
use scraper::{Html, Selector};
use std::{
    collections::{HashMap, HashSet},
    fs::read_to_string,
    path::Path,
};
use walkdir::WalkDir;

/// The link graph of a closed web corpus: each page mapped to the set of
/// in-corpus pages it links to. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pages: HashMap<String, HashSet<String>>,
}

impl Corpus {
    /// Loads every `.html` file directly inside `dir` and extracts its
    /// hyperlinks. Link sets are restricted to files present in the same
    /// directory; self-links are discarded.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut pages: HashMap<String, HashSet<String>> = HashMap::new();

        for entry in WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !name.ends_with(".html") {
                continue;
            }

            let contents = read_to_string(entry.path())?;
            pages.insert(name.to_string(), extract_links(&contents)?);
        }

        if pages.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        log::info!("crawled {} pages from {}", pages.len(), dir.display());

        Ok(Self::from_pages(pages))
    }

    /// Builds a corpus from an in-memory page map, applying the same
    /// restriction rules as the directory loader: links to pages outside
    /// the corpus and self-links are dropped.
    pub fn from_pages(mut pages: HashMap<String, HashSet<String>>) -> Self {
        let known: HashSet<String> = pages.keys().cloned().collect();

        for (page, links) in &mut pages {
            links.retain(|link| link != page && known.contains(link));
        }

        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Page names in lexicographic order. The algorithms use this where a
    /// stable ordering matters, so seeded runs are reproducible.
    pub fn sorted_pages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn links(&self, page: &str) -> Option<&HashSet<String>> {
        self.pages.get(page)
    }
}

fn extract_links(html: &str) -> Result<HashSet<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]")
        .map_err(|e| Error::Generic(format!("Failed to parse selector: {e}")))?;

    let links: HashSet<String> = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(ToString::to_string)
        .collect();

    log::debug!("extracted {} links", links.len());

    Ok(links)
}
