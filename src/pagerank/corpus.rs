use log::{debug, info};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::error::PageRankError;

/// Anchor tags with a double-quoted `href`.
pub const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Pages and the corpus pages each one links to.
///
/// Self-links and links leaving the corpus are dropped on construction.
/// Pages are held in name order and addressed by index internally.
#[derive(Clone, Debug, PartialEq)]
pub struct Corpus {
    names: Vec<String>,
    links: Vec<BTreeSet<usize>>,
}

impl Corpus {
    pub fn from_links<I, P, L, S>(pages: I) -> Result<Self, PageRankError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: BTreeMap<String, BTreeSet<String>> = pages
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();
        if raw.is_empty() {
            return Err(PageRankError::EmptyCorpus);
        }

        let names: Vec<String> = raw.keys().cloned().collect();
        let index: BTreeMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        let links = raw
            .iter()
            .enumerate()
            .map(|(i, (_, targets))| {
                targets
                    .iter()
                    .filter_map(|target| index.get(target.as_str()).copied())
                    .filter(|&j| j != i)
                    .collect()
            })
            .collect();
        Ok(Corpus { names, links })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Page names in sorted order; a page's position is its index.
    pub fn pages(&self) -> &[String] {
        &self.names
    }

    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.names.binary_search_by(|name| name.as_str().cmp(page)).ok()
    }

    pub fn outgoing(&self, index: usize) -> &BTreeSet<usize> {
        &self.links[index]
    }

    /// Names of the pages `page` links to.
    pub fn links_of(&self, page: &str) -> Option<Vec<&str>> {
        self.index_of(page).map(|i| {
            self.links[i]
                .iter()
                .map(|&j| self.names[j].as_str())
                .collect()
        })
    }
}

pub fn extract_links(pattern: &Regex, contents: &str) -> BTreeSet<String> {
    pattern
        .captures_iter(contents)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parses every `.html` file directly inside `directory`.
pub fn crawl<P: AsRef<Path>>(directory: P) -> Result<Corpus, PageRankError> {
    let directory = directory.as_ref();
    info!("Crawling {}", directory.display());
    let pattern = Regex::new(LINK_PATTERN)?;

    let mut pages = BTreeMap::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() || !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        let links = extract_links(&pattern, &contents);
        debug!("{} links to {} pages", name, links.len());
        pages.insert(name, links);
    }
    Corpus::from_links(pages)
}
