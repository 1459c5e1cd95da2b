// Admin session, sub-page selection and the edit forms
use chrono::Local;

use crate::content::{
    estimate_read_time, slugify, BlogPost, DemoCredentials, Project, ProjectScope,
};
use crate::nav::AdminPage;

/// Deletion waiting for its confirm dialog
#[derive(Clone, Debug, PartialEq)]
pub enum PendingDelete {
    Post(String),
    Project(String),
    Message(String),
}

pub struct AdminState {
    pub authenticated: bool,
    pub page: AdminPage,
    /// Admin page the user was headed to when the login gate intervened
    pub return_to: Option<AdminPage>,
    pub passphrase_input: String,
    pub login_error: Option<String>,
    /// One-shot flag; the login view consumes it to focus the input
    pub focus_input: bool,
    pub post_form: Option<PostForm>,
    pub project_form: Option<ProjectForm>,
    pub pending_delete: Option<PendingDelete>,
    /// Message id currently opened in the reading pane
    pub open_message: Option<String>,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            authenticated: false,
            page: AdminPage::Dashboard,
            return_to: None,
            passphrase_input: String::new(),
            login_error: None,
            focus_input: false,
            post_form: None,
            project_form: None,
            pending_delete: None,
            open_message: None,
        }
    }

    /// Drop every privileged bit of state in one place
    pub fn lock(&mut self) {
        self.authenticated = false;
        self.page = AdminPage::Dashboard;
        self.return_to = None;
        self.passphrase_input.clear();
        self.login_error = None;
        self.focus_input = false;
        self.post_form = None;
        self.project_form = None;
        self.pending_delete = None;
        self.open_message = None;
    }
}

/// Editable copy of a post; `original_slug` is None for a new post
pub struct PostForm {
    pub original_slug: Option<String>,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub tag_input: String,
    pub excerpt: String,
    pub author: String,
    pub cover_image: String,
    pub body: String,
    date: String,
    pub error: Option<String>,
}

impl PostForm {
    /// Blank form for a new post, with the byline prefilled
    pub fn new(author: &str) -> Self {
        Self {
            original_slug: None,
            title: String::new(),
            category: String::new(),
            tags: Vec::new(),
            tag_input: String::new(),
            excerpt: String::new(),
            author: author.to_string(),
            cover_image: String::new(),
            body: String::new(),
            date: String::new(),
            error: None,
        }
    }

    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            original_slug: Some(post.slug.clone()),
            title: post.title.clone(),
            category: post.category.clone(),
            tags: post.tags.clone(),
            tag_input: String::new(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            cover_image: post.cover_image.clone().unwrap_or_default(),
            body: post.body.clone(),
            date: post.date.clone(),
            error: None,
        }
    }

    pub fn add_tag(&mut self) {
        let tag = self.tag_input.trim().to_lowercase();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self.tag_input.clear();
    }

    /// Validate and assemble the post. Publication date is kept on edit and
    /// stamped now on first save; the read time is always recomputed.
    pub fn build(&self) -> Result<BlogPost, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.body.trim().is_empty() {
            return Err("Body is required".to_string());
        }
        let date = if self.date.is_empty() {
            Local::now().to_rfc3339()
        } else {
            self.date.clone()
        };
        Ok(BlogPost {
            slug: slugify(self.title.trim()),
            title: self.title.trim().to_string(),
            date,
            category: self.category.trim().to_string(),
            tags: self.tags.clone(),
            excerpt: self.excerpt.trim().to_string(),
            author: self.author.trim().to_string(),
            cover_image: none_if_empty(&self.cover_image),
            read_time: estimate_read_time(&self.body),
            body: self.body.clone(),
        })
    }

    /// Slug the built post will replace, when it differs from the new one
    pub fn replaced_slug(&self, built: &BlogPost) -> Option<String> {
        match &self.original_slug {
            Some(original) if *original != built.slug => Some(original.clone()),
            _ => None,
        }
    }
}

/// Editable copy of a project; `original_slug` is None for a new one
pub struct ProjectForm {
    pub original_slug: Option<String>,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub tag_input: String,
    pub category: String,
    pub image: String,
    pub repo_url: String,
    pub demo_url: String,
    pub demo_username: String,
    pub demo_password: String,
    pub scope: ProjectScope,
    pub private: bool,
    pub error: Option<String>,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self {
            original_slug: None,
            title: String::new(),
            summary: String::new(),
            tags: Vec::new(),
            tag_input: String::new(),
            category: String::new(),
            image: String::new(),
            repo_url: String::new(),
            demo_url: String::new(),
            demo_username: String::new(),
            demo_password: String::new(),
            scope: ProjectScope::default(),
            private: false,
            error: None,
        }
    }

    pub fn from_project(project: &Project) -> Self {
        let (demo_username, demo_password) = match &project.credentials {
            Some(c) => (c.username.clone(), c.password.clone()),
            None => (String::new(), String::new()),
        };
        Self {
            original_slug: Some(project.slug.clone()),
            title: project.title.clone(),
            summary: project.summary.clone(),
            tags: project.tags.clone(),
            tag_input: String::new(),
            category: project.category.clone(),
            image: project.image.clone(),
            repo_url: project.repo_url.clone(),
            demo_url: project.demo_url.clone(),
            demo_username,
            demo_password,
            scope: project.scope,
            private: project.private,
            error: None,
        }
    }

    pub fn add_tag(&mut self) {
        let tag = self.tag_input.trim().to_lowercase();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self.tag_input.clear();
    }

    pub fn build(&self) -> Result<Project, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        // Both credential fields blank means the demo is not gated
        let credentials = if self.demo_username.trim().is_empty()
            && self.demo_password.trim().is_empty()
        {
            None
        } else {
            Some(DemoCredentials {
                username: self.demo_username.trim().to_string(),
                password: self.demo_password.trim().to_string(),
            })
        };
        Ok(Project {
            slug: slugify(self.title.trim()),
            title: self.title.trim().to_string(),
            summary: self.summary.trim().to_string(),
            tags: self.tags.clone(),
            category: self.category.trim().to_string(),
            image: self.image.trim().to_string(),
            repo_url: self.repo_url.trim().to_string(),
            demo_url: self.demo_url.trim().to_string(),
            credentials,
            scope: self.scope,
            private: self.private,
        })
    }

    pub fn replaced_slug(&self, built: &Project) -> Option<String> {
        match &self.original_slug {
            Some(original) if *original != built.slug => Some(original.clone()),
            _ => None,
        }
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_form_requires_title_and_body() {
        let mut form = PostForm::new("Alex Morgan");
        assert!(form.build().is_err());
        form.title = "A title".to_string();
        assert!(form.build().is_err());
        form.body = "Some body".to_string();
        let post = form.build().expect("build");
        assert_eq!(post.slug, "a-title");
        assert_eq!(post.author, "Alex Morgan");
        assert_eq!(post.cover_image, None);
        assert_eq!(post.read_time, "1 min read");
        assert!(!post.date.is_empty());
    }

    #[test]
    fn test_edit_keeps_date_and_recomputes_read_time() {
        let original = BlogPost {
            slug: "old-title".to_string(),
            title: "Old title".to_string(),
            date: "2025-06-01T12:00:00+00:00".to_string(),
            read_time: "1 min read".to_string(),
            body: "short".to_string(),
            ..Default::default()
        };
        let mut form = PostForm::from_post(&original);
        form.body = "word ".repeat(450);
        let built = form.build().expect("build");
        assert_eq!(built.date, original.date);
        assert_eq!(built.read_time, "3 min read");
        assert_eq!(form.replaced_slug(&built), None);
    }

    #[test]
    fn test_rename_reports_replaced_slug() {
        let original = BlogPost {
            slug: "old-title".to_string(),
            title: "Old title".to_string(),
            body: "body".to_string(),
            ..Default::default()
        };
        let mut form = PostForm::from_post(&original);
        form.title = "New title".to_string();
        let built = form.build().expect("build");
        assert_eq!(built.slug, "new-title");
        assert_eq!(form.replaced_slug(&built), Some("old-title".to_string()));
    }

    #[test]
    fn test_tag_input_dedupes() {
        let mut form = PostForm::new("");
        form.tag_input = " Rust ".to_string();
        form.add_tag();
        form.tag_input = "rust".to_string();
        form.add_tag();
        assert_eq!(form.tags, vec!["rust".to_string()]);
        assert!(form.tag_input.is_empty());
    }

    #[test]
    fn test_project_form_credentials_need_a_value() {
        let mut form = ProjectForm::new();
        form.title = "Gated demo".to_string();
        let built = form.build().expect("build");
        assert!(built.credentials.is_none());
        assert_eq!(built.scope, ProjectScope::Normal);

        form.demo_username = " demo ".to_string();
        form.demo_password = "hunter2".to_string();
        let built = form.build().expect("build");
        let creds = built.credentials.expect("credentials");
        assert_eq!(creds.username, "demo");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn test_project_form_round_trips_edit() {
        let project = Project {
            slug: "old-name".to_string(),
            title: "Old name".to_string(),
            summary: "Summary".to_string(),
            tags: vec!["rust".to_string()],
            category: "Web Application".to_string(),
            image: "shots/old.png".to_string(),
            repo_url: String::new(),
            demo_url: "https://example.com".to_string(),
            credentials: Some(DemoCredentials {
                username: "demo".to_string(),
                password: "demo".to_string(),
            }),
            scope: ProjectScope::Heavy,
            private: true,
        };
        let mut form = ProjectForm::from_project(&project);
        assert_eq!(form.demo_username, "demo");
        form.title = "New name".to_string();
        let built = form.build().expect("build");
        assert_eq!(built.slug, "new-name");
        assert_eq!(built.scope, ProjectScope::Heavy);
        assert!(built.private);
        assert_eq!(form.replaced_slug(&built), Some("old-name".to_string()));
    }

    #[test]
    fn test_lock_clears_everything() {
        let mut admin = AdminState::new();
        admin.authenticated = true;
        admin.page = AdminPage::Messages;
        admin.post_form = Some(PostForm::new(""));
        admin.pending_delete = Some(PendingDelete::Post("x".to_string()));
        admin.lock();
        assert!(!admin.authenticated);
        assert_eq!(admin.page, AdminPage::Dashboard);
        assert!(admin.post_form.is_none());
        assert!(admin.pending_delete.is_none());
    }
}
