// Project gallery filters and the single expanded card
use crate::content::Project;

pub struct ProjectsFilter {
    /// Instant filter over titles and summaries
    pub query: String,
    /// Tech chips; a project must carry every selected one
    pub selected: Vec<String>,
    /// Slug of the card currently showing its full summary
    pub expanded: Option<String>,
}

impl ProjectsFilter {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            selected: Vec::new(),
            expanded: None,
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.query.is_empty() || !self.selected.is_empty()
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.selected.clear();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        match self.selected.iter().position(|t| t == tag) {
            Some(idx) => {
                self.selected.remove(idx);
            }
            None => self.selected.push(tag.to_string()),
        }
    }

    pub fn toggle_expanded(&mut self, slug: &str) {
        if self.expanded.as_deref() == Some(slug) {
            self.expanded = None;
        } else {
            self.expanded = Some(slug.to_string());
        }
    }

    /// Projects passing the filters, preserving the incoming order
    pub fn filtered<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let query = self.query.to_lowercase();
        projects
            .iter()
            .filter(|project| {
                query.is_empty()
                    || project.title.to_lowercase().contains(&query)
                    || project.summary.to_lowercase().contains(&query)
            })
            .filter(|project| self.selected.iter().all(|tag| project.tags.contains(tag)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str, title: &str, tags: &[&str]) -> Project {
        Project {
            slug: slug.to_string(),
            title: title.to_string(),
            summary: format!("{} in detail", title),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn corpus() -> Vec<Project> {
        vec![
            project("a", "Terminal dashboard", &["rust", "tui"]),
            project("b", "Photo pipeline", &["python"]),
            project("c", "Crate registry mirror", &["rust", "axum"]),
        ]
    }

    #[test]
    fn test_selected_tags_must_all_match() {
        let projects = corpus();
        let mut filter = ProjectsFilter::new();
        filter.toggle_tag("rust");
        assert_eq!(filter.filtered(&projects).len(), 2);

        filter.toggle_tag("tui");
        let hits = filter.filtered(&projects);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "a");

        // toggling again releases the chip
        filter.toggle_tag("tui");
        assert_eq!(filter.filtered(&projects).len(), 2);
    }

    #[test]
    fn test_query_narrows_with_chips() {
        let projects = corpus();
        let mut filter = ProjectsFilter::new();
        filter.query = "pipeline".to_string();
        assert_eq!(filter.filtered(&projects).len(), 1);

        filter.toggle_tag("rust");
        assert!(filter.filtered(&projects).is_empty());
        assert!(filter.has_filters());
        filter.clear_filters();
        assert_eq!(filter.filtered(&projects).len(), 3);
    }

    #[test]
    fn test_one_card_expanded_at_a_time() {
        let mut filter = ProjectsFilter::new();
        filter.toggle_expanded("a");
        assert_eq!(filter.expanded.as_deref(), Some("a"));
        filter.toggle_expanded("b");
        assert_eq!(filter.expanded.as_deref(), Some("b"));
        filter.toggle_expanded("b");
        assert!(filter.expanded.is_none());
    }
}
