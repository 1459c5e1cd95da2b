use chrono::Local;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::model::{
    estimate_read_time, BlogPost, ContactMessage, Project, ProjectScope, SiteProfile,
};

/// Everything the store knows after one full read of the content directory
#[derive(Clone, Debug, Default)]
pub struct ContentSnapshot {
    pub profile: SiteProfile,
    pub posts: Vec<BlogPost>,
    pub projects: Vec<Project>,
    pub messages: Vec<ContactMessage>,
    /// Files that exist on disk but failed to parse
    pub warnings: Vec<String>,
}

impl ContentSnapshot {
    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn unread_messages(&self) -> usize {
        self.messages.iter().filter(|m| !m.read).count()
    }

    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for post in &self.posts {
            if !post.category.is_empty() && !out.contains(&post.category) {
                out.push(post.category.clone());
            }
        }
        out.sort();
        out
    }

    pub fn tags(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for post in &self.posts {
            for tag in &post.tags {
                if !out.contains(tag) {
                    out.push(tag.clone());
                }
            }
        }
        out.sort();
        out
    }

    /// Every tech tag used by any project, for the gallery's filter chips
    pub fn project_tags(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for project in &self.projects {
            for tag in &project.tags {
                if !out.contains(tag) {
                    out.push(tag.clone());
                }
            }
        }
        out.sort();
        out
    }
}

/// Flat-file content store rooted at one directory:
/// `profile.toml`, `posts/*.md`, `projects/*.toml`, `messages/*.toml`.
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: PathBuf) -> Self {
        ContentStore { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.root.join("posts")
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.root.join("projects")
    }

    pub fn messages_dir(&self) -> PathBuf {
        self.root.join("messages")
    }

    pub fn profile_path(&self) -> PathBuf {
        self.root.join("profile.toml")
    }

    /// Create the directory layout. On the very first run also writes the
    /// default profile and a handful of sample documents to start from.
    pub fn ensure_layout(&self) -> io::Result<()> {
        let first_run = !self.root.exists();
        fs::create_dir_all(self.posts_dir())?;
        fs::create_dir_all(self.projects_dir())?;
        fs::create_dir_all(self.messages_dir())?;
        if !self.profile_path().exists() {
            let doc = SiteProfile::default()
                .to_document()
                .map_err(io::Error::other)?;
            fs::write(self.profile_path(), doc)?;
        }
        if first_run {
            self.seed_samples()?;
        }
        Ok(())
    }

    fn seed_samples(&self) -> io::Result<()> {
        let post = BlogPost {
            slug: "hello-world".to_string(),
            title: "Hello, world".to_string(),
            date: Local::now().to_rfc3339(),
            category: "Meta".to_string(),
            tags: vec!["meta".to_string()],
            excerpt: "The obligatory first post.".to_string(),
            author: String::new(),
            cover_image: None,
            read_time: estimate_read_time(SAMPLE_POST_BODY),
            body: SAMPLE_POST_BODY.to_string(),
        };
        self.save_post(&post)?;

        let project = Project {
            slug: "sample-project".to_string(),
            title: "Sample project".to_string(),
            summary: "Placeholder card. Edit or delete it from the admin panel."
                .to_string(),
            tags: vec!["rust".to_string()],
            category: "Desktop Application".to_string(),
            image: String::new(),
            repo_url: "https://github.com/alexmorgan/sample".to_string(),
            demo_url: String::new(),
            credentials: None,
            scope: ProjectScope::Normal,
            private: false,
        };
        self.save_project(&project)
    }

    pub fn load(&self) -> io::Result<ContentSnapshot> {
        let mut snapshot = ContentSnapshot::default();

        match fs::read_to_string(self.profile_path()) {
            Ok(raw) => match SiteProfile::parse(&raw) {
                Ok(profile) => snapshot.profile = profile,
                Err(e) => snapshot.warnings.push(e),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }

        for (stem, raw) in read_documents(&self.posts_dir(), "md")? {
            match BlogPost::parse(&stem, &raw) {
                Ok(post) => snapshot.posts.push(post),
                Err(e) => snapshot.warnings.push(e),
            }
        }
        snapshot.posts.sort_by(|a, b| match (a.date_local(), b.date_local()) {
            (Some(a_dt), Some(b_dt)) => b_dt.cmp(&a_dt),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.slug.cmp(&b.slug),
        });

        for (stem, raw) in read_documents(&self.projects_dir(), "toml")? {
            match Project::parse(&stem, &raw) {
                Ok(project) => snapshot.projects.push(project),
                Err(e) => snapshot.warnings.push(e),
            }
        }
        snapshot.projects.sort_by(|a, b| {
            a.scope
                .rank()
                .cmp(&b.scope.rank())
                .then_with(|| a.title.cmp(&b.title))
        });

        for (stem, raw) in read_documents(&self.messages_dir(), "toml")? {
            match ContactMessage::parse(&stem, &raw) {
                Ok(message) => snapshot.messages.push(message),
                Err(e) => snapshot.warnings.push(e),
            }
        }
        snapshot.messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(snapshot)
    }

    pub fn save_post(&self, post: &BlogPost) -> io::Result<()> {
        let doc = post.to_document().map_err(io::Error::other)?;
        fs::write(self.posts_dir().join(format!("{}.md", post.slug)), doc)
    }

    pub fn delete_post(&self, slug: &str) -> io::Result<()> {
        delete_file(&self.posts_dir().join(format!("{}.md", slug)))
    }

    pub fn save_project(&self, project: &Project) -> io::Result<()> {
        let doc = project.to_document().map_err(io::Error::other)?;
        fs::write(
            self.projects_dir().join(format!("{}.toml", project.slug)),
            doc,
        )
    }

    pub fn delete_project(&self, slug: &str) -> io::Result<()> {
        delete_file(&self.projects_dir().join(format!("{}.toml", slug)))
    }

    pub fn save_message(&self, message: &ContactMessage) -> io::Result<()> {
        let doc = message.to_document().map_err(io::Error::other)?;
        fs::write(
            self.messages_dir().join(format!("{}.toml", message.id)),
            doc,
        )
    }

    pub fn delete_message(&self, id: &str) -> io::Result<()> {
        delete_file(&self.messages_dir().join(format!("{}.toml", id)))
    }

    pub fn set_message_read(&self, id: &str, read: bool) -> io::Result<()> {
        let path = self.messages_dir().join(format!("{}.toml", id));
        let raw = fs::read_to_string(&path)?;
        let mut message = ContactMessage::parse(id, &raw).map_err(io::Error::other)?;
        message.read = read;
        let doc = message.to_document().map_err(io::Error::other)?;
        fs::write(&path, doc)
    }

    pub fn save_profile(&self, profile: &SiteProfile) -> io::Result<()> {
        let doc = profile.to_document().map_err(io::Error::other)?;
        fs::write(self.profile_path(), doc)
    }

    /// Timestamp-based message id, suffixed on collision within one second
    pub fn next_message_id(&self) -> String {
        let base = Local::now().format("%Y%m%d-%H%M%S").to_string();
        unique_message_id(&self.messages_dir(), &base)
    }

    /// Pack the whole content directory into `../backups/vitrine-content-<ts>.tar.gz`
    pub fn export_backup(&self) -> io::Result<PathBuf> {
        let backups = self
            .root
            .parent()
            .map(|p| p.join("backups"))
            .unwrap_or_else(|| PathBuf::from("backups"));
        fs::create_dir_all(&backups)?;

        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let archive_path = backups.join(format!("vitrine-content-{}.tar.gz", stamp));
        let file = fs::File::create(&archive_path)?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        builder.append_dir_all("content", &self.root)?;
        let encoder = builder.into_inner()?;
        encoder.finish()?;
        Ok(archive_path)
    }
}

/// Read every `<stem>.<ext>` file in a directory as (stem, contents)
fn read_documents(dir: &Path, ext: &str) -> io::Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(out),
        Err(e) => return Err(e),
    };
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map(|e| e == ext) != Some(true) {
            continue;
        }
        let stem = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => continue,
        };
        out.push((stem, fs::read_to_string(&path)?));
    }
    Ok(out)
}

fn unique_message_id(dir: &Path, base: &str) -> String {
    let mut id = base.to_string();
    let mut n = 2;
    while dir.join(format!("{}.toml", id)).exists() {
        id = format!("{}-{}", base, n);
        n += 1;
    }
    id
}

/// Move to the system trash, falling back to plain removal where no
/// trash directory is available
fn delete_file(path: &Path) -> io::Result<()> {
    if trash::delete(path).is_ok() {
        return Ok(());
    }
    fs::remove_file(path)
}

const SAMPLE_POST_BODY: &str = r#"# Hello

This site is managed from the built-in admin panel. Posts are plain
Markdown files with a small TOML header, so they survive any tooling.

```rust
fn main() {
    println!("hello from the sample post");
}
```

Edit me, or delete me and write something better.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ContentStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ContentStore::new(dir.path().join("content"));
        store.ensure_layout().expect("layout");
        (dir, store)
    }

    fn post(slug: &str, date: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: date.to_string(),
            body: "body".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seeds_written_once() {
        let (_dir, store) = temp_store();
        assert!(store.profile_path().exists());
        assert!(store.posts_dir().join("hello-world.md").exists());

        let mut profile = SiteProfile::default();
        profile.name = "Changed".to_string();
        store.save_profile(&profile).expect("save profile");
        store.delete_post("hello-world").expect("delete");

        // second run must not clobber edits or resurrect samples
        store.ensure_layout().expect("layout again");
        let snapshot = store.load().expect("load");
        assert_eq!(snapshot.profile.name, "Changed");
        assert!(snapshot.post("hello-world").is_none());
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let (_dir, store) = temp_store();
        store.delete_post("hello-world").expect("clear seed");
        store
            .save_post(&post("older", "2026-01-01T08:00:00+00:00"))
            .expect("save");
        store
            .save_post(&post("newer", "2026-02-01T08:00:00+00:00"))
            .expect("save");

        let snapshot = store.load().expect("load");
        let slugs: Vec<&str> = snapshot.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
    }

    #[test]
    fn test_broken_file_becomes_warning() {
        let (_dir, store) = temp_store();
        fs::write(store.posts_dir().join("broken.md"), "no frontmatter here")
            .expect("write");
        let snapshot = store.load().expect("load");
        assert_eq!(snapshot.warnings.len(), 1);
        assert!(snapshot.post("broken").is_none());
        assert!(snapshot.post("hello-world").is_some());
    }

    #[test]
    fn test_message_read_flag_round_trip() {
        let (_dir, store) = temp_store();
        let id = store.next_message_id();
        let message = ContactMessage {
            id: id.clone(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
            created_at: Local::now().to_rfc3339(),
            read: false,
        };
        store.save_message(&message).expect("save");
        store.set_message_read(&id, true).expect("mark read");

        let snapshot = store.load().expect("load");
        assert_eq!(snapshot.messages.len(), 1);
        assert!(snapshot.messages[0].read);
        assert_eq!(snapshot.unread_messages(), 0);
    }

    #[test]
    fn test_message_id_collision_suffix() {
        let (_dir, store) = temp_store();
        let dir = store.messages_dir();
        assert_eq!(unique_message_id(&dir, "20260102-100000"), "20260102-100000");
        fs::write(dir.join("20260102-100000.toml"), "").expect("write");
        assert_eq!(
            unique_message_id(&dir, "20260102-100000"),
            "20260102-100000-2"
        );
        fs::write(dir.join("20260102-100000-2.toml"), "").expect("write");
        assert_eq!(
            unique_message_id(&dir, "20260102-100000"),
            "20260102-100000-3"
        );
    }

    #[test]
    fn test_export_backup_creates_archive() {
        let (_dir, store) = temp_store();
        let path = store.export_backup().expect("backup");
        assert!(path.exists());
        assert!(path.to_string_lossy().ends_with(".tar.gz"));
    }

    #[test]
    fn test_projects_heavy_first_then_by_title() {
        let (_dir, store) = temp_store();
        store.delete_project("sample-project").expect("clear seed");
        let project = |slug: &str, scope| Project {
            slug: slug.to_string(),
            title: slug.to_string(),
            scope,
            ..Default::default()
        };
        store
            .save_project(&project("zeta", ProjectScope::Heavy))
            .expect("save");
        store
            .save_project(&project("alpha", ProjectScope::Light))
            .expect("save");
        store
            .save_project(&project("mid", ProjectScope::Normal))
            .expect("save");

        let snapshot = store.load().expect("load");
        let slugs: Vec<&str> = snapshot.projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["zeta", "mid", "alpha"]);
    }

    #[test]
    fn test_category_and_tag_index() {
        let (_dir, store) = temp_store();
        let mut a = post("a", "2026-01-01T08:00:00+00:00");
        a.category = "Engineering".to_string();
        a.tags = vec!["rust".to_string(), "ui".to_string()];
        let mut b = post("b", "2026-01-02T08:00:00+00:00");
        b.category = "Notes".to_string();
        b.tags = vec!["rust".to_string()];
        store.save_post(&a).expect("save");
        store.save_post(&b).expect("save");

        let snapshot = store.load().expect("load");
        assert_eq!(
            snapshot.categories(),
            vec!["Engineering".to_string(), "Meta".to_string(), "Notes".to_string()]
        );
        assert!(snapshot.tags().contains(&"rust".to_string()));
    }
}
