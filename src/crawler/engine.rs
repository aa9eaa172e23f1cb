//! Crawl engine - depth-first traversal of a directory listing tree
//!
//! The engine drives the whole crawl: it fetches listing pages, classifies
//! every link, collects video URLs grouped by output folder key, and pushes
//! sub-folder listings onto an explicit work stack. Two guards bound the
//! traversal: the crawl-root prefix check keeps it inside the index tree,
//! and the visited set rejects re-visits so cyclic or self-referential
//! listings terminate.

use crate::crawler::classifier::{Classifier, LinkClass};
use crate::crawler::fetcher::fetch_html;
use crate::crawler::parser::extract_links;
use crate::url::folder_key;
use indexmap::IndexMap;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Discovered videos grouped by output folder key
///
/// Keys appear in discovery order; URLs within a key preserve discovery
/// order, duplicates included.
pub type CollectedMapping = IndexMap<String, Vec<String>>;

/// Directory-listing crawler
///
/// Owns all per-run state: the visited set and the collected mapping are
/// scoped to one instance, so repeated crawls in the same process never
/// contaminate each other.
pub struct Crawler {
    client: Client,
    root: Url,
    classifier: Classifier,
    visited: HashSet<String>,
    collected: CollectedMapping,
}

impl Crawler {
    /// Creates a crawler for the given root
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client to fetch listing pages with
    /// * `root` - The crawl root, already normalized to end with `/`
    /// * `classifier` - The link classification heuristics to apply
    pub fn new(client: Client, root: Url, classifier: Classifier) -> Self {
        Self {
            client,
            root,
            classifier,
            visited: HashSet::new(),
            collected: CollectedMapping::new(),
        }
    }

    /// Runs the crawl to completion and returns the collected mapping
    ///
    /// Traversal is depth-first pre-order over an explicit work stack, so
    /// arbitrarily deep listing trees cannot exhaust the call stack. A
    /// page that fails to fetch costs only its own branch; siblings still
    /// contribute their results.
    pub async fn run(mut self) -> CollectedMapping {
        let mut stack = vec![self.root.to_string()];

        while let Some(current) = stack.pop() {
            self.visit(&current, &mut stack).await;
        }

        self.collected
    }

    /// Processes one pending listing URL
    ///
    /// 1. Skip anything outside the crawl root
    /// 2. Skip already-visited URLs; mark visited before fetching so a
    ///    self-referential listing cannot re-enter
    /// 3. Fetch; on failure log and abandon this branch
    /// 4. Collect video links under their folder key, push folder links
    ///    onto the stack, drop the rest
    async fn visit(&mut self, current: &str, stack: &mut Vec<String>) {
        let root_str = self.root.as_str();
        if !current.starts_with(root_str) {
            return;
        }

        let normalized = current.trim_end_matches('/').to_string();
        if !self.visited.insert(normalized) {
            return;
        }

        tracing::debug!("scanning {}", current);

        let html = match fetch_html(&self.client, current).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("abandoning branch: {}", e);
                return;
            }
        };

        let page_url = match Url::parse(current) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!("unparseable page URL {}: {}", current, e);
                return;
            }
        };

        let mut folders = Vec::new();

        for (href, resolved) in extract_links(&html, &page_url) {
            if !resolved.as_str().starts_with(root_str) {
                continue;
            }

            match self.classifier.classify(&href, &resolved, &self.root) {
                LinkClass::Video => {
                    let key = folder_key(&self.root, &resolved);
                    tracing::debug!("video in [{}]: {}", key, resolved);
                    self.collected
                        .entry(key)
                        .or_default()
                        .push(resolved.to_string());
                }
                LinkClass::Folder => {
                    let mut folder = resolved.to_string();
                    if !folder.ends_with('/') {
                        folder.push('/');
                    }
                    tracing::debug!("folder: {}", folder);
                    folders.push(folder);
                }
                LinkClass::Ignored => {
                    tracing::trace!("skipped: {}", resolved);
                }
            }
        }

        // Reversed so sibling folders pop in discovery order
        for folder in folders.into_iter().rev() {
            stack.push(folder);
        }
    }

    /// Number of distinct listing URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::build_http_client;

    fn crawler_for(root: &str) -> Crawler {
        Crawler::new(
            build_http_client(false).unwrap(),
            Url::parse(root).unwrap(),
            Classifier::new(),
        )
    }

    #[tokio::test]
    async fn test_visit_rejects_url_outside_root() {
        let mut crawler = crawler_for("https://example.com/show/");
        let mut stack = Vec::new();

        // No request is made: the prefix guard rejects before fetching
        crawler
            .visit("https://example.com/other/", &mut stack)
            .await;

        assert_eq!(crawler.visited_count(), 0);
        assert!(stack.is_empty());
        assert!(crawler.collected.is_empty());
    }

    #[tokio::test]
    async fn test_visit_already_visited_is_noop() {
        let mut crawler = crawler_for("https://example.com/show/");
        crawler
            .visited
            .insert("https://example.com/show/season1".to_string());
        let mut stack = Vec::new();

        // Visited check fires before any fetch; trailing slash is
        // stripped for the comparison
        crawler
            .visit("https://example.com/show/season1/", &mut stack)
            .await;

        assert_eq!(crawler.visited_count(), 1);
        assert!(crawler.collected.is_empty());
    }
}
