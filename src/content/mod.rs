pub mod model;
pub mod store;

pub use model::{
    estimate_read_time, slugify, BlogPost, ContactMessage, DemoCredentials, Highlight, Project,
    ProjectScope, SiteProfile, SkillGroup, Stint,
};
pub use store::{ContentSnapshot, ContentStore};
