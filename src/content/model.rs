use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::style::READ_WORDS_PER_MINUTE;

const FENCE: &str = "+++";

/// A blog post, stored as `posts/<slug>.md` with a TOML frontmatter block
/// between `+++` fences.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BlogPost {
    #[serde(skip)]
    pub slug: String,
    pub title: String,
    /// RFC 3339 timestamp of publication
    pub date: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub read_time: String,
    #[serde(skip)]
    pub body: String,
}

impl BlogPost {
    pub fn parse(slug: &str, raw: &str) -> Result<Self, String> {
        let (meta, body) = split_frontmatter(raw)
            .ok_or_else(|| format!("{}.md: missing +++ frontmatter", slug))?;
        let mut post: BlogPost =
            toml::from_str(meta).map_err(|e| format!("{}.md: {}", slug, e))?;
        post.slug = slug.to_string();
        post.body = body.to_string();
        Ok(post)
    }

    pub fn to_document(&self) -> Result<String, toml::ser::Error> {
        let meta = toml::to_string_pretty(self)?;
        Ok(format!("{FENCE}\n{meta}{FENCE}\n\n{}", self.body))
    }

    pub fn date_local(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }

    /// Human-readable date, falling back to the raw string if it doesn't parse
    pub fn display_date(&self) -> String {
        match self.date_local() {
            Some(dt) => dt.format("%b %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    pub fn matches_filter(&self, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(query_lower)
            || self.excerpt.to_lowercase().contains(query_lower)
    }
}

/// A portfolio project, stored as `projects/<slug>.toml`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Project {
    #[serde(skip)]
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    /// Cover image, either a URL or a path relative to the content root
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub demo_url: String,
    /// Demo login for gated deployments, shown on the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<DemoCredentials>,
    #[serde(default)]
    pub scope: ProjectScope,
    /// Private deployments hide the live link and show a note instead
    #[serde(default)]
    pub private: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
}

/// Rough size class, used to order the gallery
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectScope {
    Heavy,
    #[default]
    Normal,
    Light,
}

impl ProjectScope {
    pub const ALL: [ProjectScope; 3] =
        [ProjectScope::Heavy, ProjectScope::Normal, ProjectScope::Light];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectScope::Heavy => "heavy",
            ProjectScope::Normal => "normal",
            ProjectScope::Light => "light",
        }
    }

    /// Sort key; heavier projects list first
    pub fn rank(&self) -> u8 {
        match self {
            ProjectScope::Heavy => 0,
            ProjectScope::Normal => 1,
            ProjectScope::Light => 2,
        }
    }
}

impl Project {
    pub fn parse(slug: &str, raw: &str) -> Result<Self, String> {
        let mut project: Project =
            toml::from_str(raw).map_err(|e| format!("{}.toml: {}", slug, e))?;
        project.slug = slug.to_string();
        Ok(project)
    }

    pub fn to_document(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// A message submitted through the contact form, stored as `messages/<id>.toml`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ContactMessage {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// RFC 3339 timestamp of submission
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

impl ContactMessage {
    pub fn parse(id: &str, raw: &str) -> Result<Self, String> {
        let mut message: ContactMessage =
            toml::from_str(raw).map_err(|e| format!("{}.toml: {}", id, e))?;
        message.id = id.to_string();
        Ok(message)
    }

    pub fn to_document(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn created_local(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Local))
    }

    pub fn display_created(&self) -> String {
        match self.created_local() {
            Some(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
            None => self.created_at.clone(),
        }
    }
}

/// Site owner details rendered on the hero, about and contact sections,
/// stored as `profile.toml`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SiteProfile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Stint>,
}

/// A hero stat such as "5+ years experience"
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Highlight {
    pub number: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Stint {
    pub role: String,
    pub org: String,
    pub period: String,
    #[serde(default)]
    pub summary: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        SiteProfile {
            name: "Alex Morgan".to_string(),
            headline: "Software Developer".to_string(),
            tagline: "I build fast, reliable tools and the occasional odd experiment."
                .to_string(),
            bio: vec![
                "I'm a developer with a soft spot for systems programming, \
                 text interfaces and software that respects its users."
                    .to_string(),
                "Away from the keyboard I hike, take photos of mountains and \
                 read more RFCs than is strictly healthy."
                    .to_string(),
            ],
            email: "hello@example.com".to_string(),
            github: "https://github.com/alexmorgan".to_string(),
            linkedin: "https://www.linkedin.com/in/alexmorgan".to_string(),
            phone: "+49 30 1234567".to_string(),
            location: "Berlin, Germany".to_string(),
            highlights: vec![
                Highlight {
                    number: "8+".to_string(),
                    label: "Years writing software".to_string(),
                },
                Highlight {
                    number: "30+".to_string(),
                    label: "Projects shipped".to_string(),
                },
                Highlight {
                    number: "12".to_string(),
                    label: "Open source crates".to_string(),
                },
            ],
            skills: vec![
                SkillGroup {
                    label: "Languages".to_string(),
                    items: vec![
                        "Rust".to_string(),
                        "TypeScript".to_string(),
                        "Python".to_string(),
                    ],
                },
                SkillGroup {
                    label: "Tooling".to_string(),
                    items: vec![
                        "Linux".to_string(),
                        "Git".to_string(),
                        "PostgreSQL".to_string(),
                    ],
                },
            ],
            experience: vec![Stint {
                role: "Senior Developer".to_string(),
                org: "Example GmbH".to_string(),
                period: "2022 - today".to_string(),
                summary: "Backend services and internal tooling.".to_string(),
            }],
        }
    }
}

impl SiteProfile {
    pub fn parse(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| format!("profile.toml: {}", e))
    }

    pub fn to_document(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Lowercase the title into a filename-safe slug
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut gap = true;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            gap = false;
        } else if !gap {
            slug.push('-');
            gap = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("untitled");
    }
    slug
}

pub fn estimate_read_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(READ_WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;
    let end = rest.find(&format!("\n{FENCE}"))?;
    let meta = rest[..end].trim_end_matches('\r');
    let mut body = &rest[end + 1 + FENCE.len()..];
    for _ in 0..2 {
        body = body
            .strip_prefix("\r\n")
            .or_else(|| body.strip_prefix('\n'))
            .unwrap_or(body);
    }
    Some((meta, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & egui  "), "rust-egui");
        assert_eq!(slugify("Already-fine-123"), "already-fine-123");
        assert_eq!(slugify("???"), "untitled");
    }

    #[test]
    fn test_read_time_rounds_up() {
        assert_eq!(estimate_read_time(""), "1 min read");
        let words = "word ".repeat(450);
        assert_eq!(estimate_read_time(&words), "3 min read");
    }

    #[test]
    fn test_post_round_trip() {
        let post = BlogPost {
            slug: "state-machines".to_string(),
            title: "State machines for UIs".to_string(),
            date: "2026-03-14T09:00:00+00:00".to_string(),
            author: "Alex Morgan".to_string(),
            category: "Engineering".to_string(),
            tags: vec!["rust".to_string(), "ui".to_string()],
            excerpt: "Why explicit phases beat boolean flags.".to_string(),
            cover_image: None,
            read_time: "4 min read".to_string(),
            body: "# Heading\n\nSome *markdown* body.\n".to_string(),
        };
        let doc = post.to_document().expect("serialize");
        let parsed = BlogPost::parse("state-machines", &doc).expect("parse");
        assert_eq!(parsed.title, post.title);
        assert_eq!(parsed.tags, post.tags);
        assert_eq!(parsed.body, post.body);
        assert_eq!(parsed.slug, "state-machines");
    }

    #[test]
    fn test_post_without_frontmatter_is_rejected() {
        assert!(BlogPost::parse("x", "just a body").is_err());
        assert!(BlogPost::parse("x", "+++\ntitle = \"unterminated\"\n").is_err());
    }

    #[test]
    fn test_post_date_display() {
        let mut post = BlogPost::default();
        post.date = "2026-03-14T09:00:00+00:00".to_string();
        assert!(post.date_local().is_some());
        post.date = "not a date".to_string();
        assert_eq!(post.display_date(), "not a date");
    }

    #[test]
    fn test_message_read_defaults_to_false() {
        let raw = concat!(
            "name = \"Sam\"\n",
            "email = \"sam@example.com\"\n",
            "subject = \"Hi\"\n",
            "message = \"Nice site\"\n",
            "created_at = \"2026-01-02T10:00:00+00:00\"\n",
        );
        let msg = ContactMessage::parse("20260102-100000", raw).expect("parse");
        assert!(!msg.read);
        assert_eq!(msg.id, "20260102-100000");
    }

    #[test]
    fn test_project_round_trip() {
        let project = Project {
            slug: "vitrine".to_string(),
            title: "Vitrine".to_string(),
            summary: "Portfolio site as a desktop app.".to_string(),
            tags: vec!["rust".to_string()],
            category: "Desktop Application".to_string(),
            image: String::new(),
            repo_url: "https://github.com/alexmorgan/vitrine".to_string(),
            demo_url: String::new(),
            credentials: Some(DemoCredentials {
                username: "demo".to_string(),
                password: "demo".to_string(),
            }),
            scope: ProjectScope::Heavy,
            private: false,
        };
        let doc = project.to_document().expect("serialize");
        let parsed = Project::parse("vitrine", &doc).expect("parse");
        assert_eq!(parsed.title, project.title);
        assert_eq!(parsed.scope, ProjectScope::Heavy);
        assert_eq!(parsed.credentials.map(|c| c.username), Some("demo".to_string()));
    }

    #[test]
    fn test_project_optional_fields_default() {
        let parsed = Project::parse("bare", "title = \"Bare\"\n").expect("parse");
        assert_eq!(parsed.scope, ProjectScope::Normal);
        assert!(parsed.credentials.is_none());
        assert!(!parsed.private);
    }

    #[test]
    fn test_profile_defaults_parse_back() {
        let doc = SiteProfile::default().to_document().expect("serialize");
        let parsed = SiteProfile::parse(&doc).expect("parse");
        assert_eq!(parsed.name, "Alex Morgan");
        assert_eq!(parsed.skills.len(), 2);
        assert_eq!(parsed.highlights.len(), 3);
    }
}
