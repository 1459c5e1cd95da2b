use grep_matcher::Matcher;
use grep_regex::RegexMatcherBuilder;
use grep_searcher::{Searcher, Sink, SinkMatch};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;

use crate::state::SearchHit;
use crate::style::MAX_SEARCH_HITS;

use super::worker::StoreEvent;

struct SearchSink {
    hits: Vec<SearchHit>,
    slug: String,
    query_lower: String,
}

impl Sink for SearchSink {
    type Error = std::io::Error;

    fn matched(&mut self, _searcher: &Searcher, mat: &SinkMatch) -> Result<bool, Self::Error> {
        let line_number = mat.line_number().unwrap_or(0) as usize;
        let line = String::from_utf8_lossy(mat.bytes())
            .trim_end()
            .to_string();

        // literal query, so a plain find on the lowered line locates the span
        let (match_start, match_end) = match line.to_lowercase().find(&self.query_lower) {
            Some(pos) => (pos, (pos + self.query_lower.len()).min(line.len())),
            None => (0, 0),
        };

        self.hits.push(SearchHit {
            slug: self.slug.clone(),
            line_number,
            line,
            match_start,
            match_end,
        });

        Ok(true)
    }
}

fn search_post_file(
    path: &Path,
    matcher: &impl Matcher,
    query: &str,
) -> Result<Vec<SearchHit>, Box<dyn std::error::Error>> {
    let mut sink = SearchSink {
        hits: Vec::new(),
        slug: path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string(),
        query_lower: query.to_lowercase(),
    };

    let mut searcher = Searcher::new();
    searcher.search_path(matcher, path, &mut sink)?;

    Ok(sink.hits)
}

/// Full-text search across every post document, one rayon task per file.
/// Hits come back ordered by post and line, capped at a sane ceiling.
pub fn search_posts(
    posts_dir: &Path,
    query: &str,
    events: &Sender<StoreEvent>,
) -> Result<Vec<SearchHit>, Box<dyn std::error::Error>> {
    let matcher = RegexMatcherBuilder::new()
        .case_insensitive(true)
        .build(&regex_escape(query))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkBuilder::new(posts_dir).build() {
        let entry = entry?;
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        if entry.path().extension().map(|e| e == "md") != Some(true) {
            continue;
        }
        files.push(entry.into_path());
    }

    let scanned = AtomicUsize::new(0);
    let mut hits: Vec<SearchHit> = files
        .par_iter()
        .map_with(events.clone(), |events, path| {
            let hits = search_post_file(path, &matcher, query).unwrap_or_default();
            let done = scanned.fetch_add(1, Ordering::Relaxed) + 1;
            let _ = events.send(StoreEvent::SearchProgress(done));
            hits
        })
        .reduce(Vec::new, |mut a, mut b| {
            a.append(&mut b);
            a
        });

    hits.sort_by(|a, b| {
        a.slug
            .cmp(&b.slug)
            .then_with(|| a.line_number.cmp(&b.line_number))
    });
    hits.truncate(MAX_SEARCH_HITS);
    Ok(hits)
}

/// The blog search box takes plain text, not patterns
fn regex_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if "\\.+*?()|[]{}^$#&-~".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::mpsc::channel;

    fn posts_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        for (name, body) in files {
            fs::write(dir.path().join(name), body).expect("write");
        }
        dir
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let dir = posts_dir(&[
            ("b-post.md", "first line\nEGUI is neat\n"),
            ("a-post.md", "nothing\negui here\nand egui again\n"),
            ("ignored.txt", "egui egui egui\n"),
        ]);
        let (tx, rx) = channel();
        let hits = search_posts(dir.path(), "egui", &tx).expect("search");

        let seen: Vec<(&str, usize)> = hits
            .iter()
            .map(|h| (h.slug.as_str(), h.line_number))
            .collect();
        assert_eq!(seen, vec![("a-post", 2), ("a-post", 3), ("b-post", 2)]);

        drop(tx);
        let progress: Vec<_> = rx.iter().collect();
        assert_eq!(progress.len(), 2);
    }

    #[test]
    fn test_match_span_covers_the_query() {
        let dir = posts_dir(&[("p.md", "some Egui line\n")]);
        let (tx, _rx) = channel();
        let hits = search_posts(dir.path(), "egui", &tx).expect("search");
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(&hit.line[hit.match_start..hit.match_end], "Egui");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let dir = posts_dir(&[
            ("a.md", "is this real? yes\n"),
            ("b.md", "is this realX yes\n"),
        ]);
        let (tx, _rx) = channel();
        let hits = search_posts(dir.path(), "real?", &tx).expect("search");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "a");
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (tx, _rx) = channel();
        let hits = search_posts(dir.path(), "anything", &tx).expect("search");
        assert!(hits.is_empty());
    }
}
