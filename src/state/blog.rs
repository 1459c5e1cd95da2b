// Blog list filters and the full-text search lifecycle
use crate::content::BlogPost;

/// One full-text match inside a post body
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
    pub slug: String,
    pub line_number: usize,
    pub line: String,
    pub match_start: usize,
    pub match_end: usize,
}

pub struct BlogState {
    /// Instant filter over titles and excerpts
    pub query: String,
    pub category: Option<String>,
    pub tag: Option<String>,
    /// Full-text search over post bodies, run off-thread
    pub deep_hits: Vec<SearchHit>,
    pub deep_running: bool,
    pub deep_scanned: usize,
    pub show_deep: bool,
}

impl BlogState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            category: None,
            tag: None,
            deep_hits: Vec::new(),
            deep_running: false,
            deep_scanned: 0,
            show_deep: false,
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.query.is_empty() || self.category.is_some() || self.tag.is_some()
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.category = None;
        self.tag = None;
    }

    pub fn close_deep(&mut self) {
        self.show_deep = false;
        self.deep_hits.clear();
        self.deep_running = false;
        self.deep_scanned = 0;
    }

    /// Posts passing the instant filters, preserving the incoming order
    pub fn filtered<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        let query = self.query.to_lowercase();
        posts
            .iter()
            .filter(|post| post.matches_filter(&query))
            .filter(|post| match &self.category {
                Some(category) => post.category == *category,
                None => true,
            })
            .filter(|post| match &self.tag {
                Some(tag) => post.tags.contains(tag),
                None => true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, category: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            excerpt: format!("About {}", title),
            ..Default::default()
        }
    }

    fn corpus() -> Vec<BlogPost> {
        vec![
            post("a", "Scroll spies in egui", "Engineering", &["rust", "ui"]),
            post("b", "Trip notes from Norway", "Travel", &["hiking"]),
            post("c", "Egui layout tricks", "Engineering", &["rust"]),
        ]
    }

    #[test]
    fn test_query_matches_title_and_excerpt() {
        let posts = corpus();
        let mut blog = BlogState::new();
        blog.query = "egui".to_string();
        let hits: Vec<&str> = blog.filtered(&posts).iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(hits, vec!["a", "c"]);

        // excerpt text counts too
        blog.query = "about trip".to_string();
        assert!(blog.filtered(&posts).is_empty());
        blog.query = "trip notes".to_string();
        assert_eq!(blog.filtered(&posts).len(), 1);
    }

    #[test]
    fn test_category_and_tag_narrow_together() {
        let posts = corpus();
        let mut blog = BlogState::new();
        blog.category = Some("Engineering".to_string());
        assert_eq!(blog.filtered(&posts).len(), 2);

        blog.tag = Some("ui".to_string());
        let hits = blog.filtered(&posts);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "a");
    }

    #[test]
    fn test_clear_filters() {
        let mut blog = BlogState::new();
        blog.query = "x".to_string();
        blog.category = Some("Travel".to_string());
        assert!(blog.has_filters());
        blog.clear_filters();
        assert!(!blog.has_filters());
        assert_eq!(blog.filtered(&corpus()).len(), 3);
    }
}
