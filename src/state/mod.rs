pub mod admin;
pub mod blog;
pub mod contact;
pub mod content;
pub mod particles;
pub mod projects;
pub mod session;
pub mod ui;

pub use admin::{AdminState, PendingDelete, PostForm, ProjectForm};
pub use blog::{BlogState, SearchHit};
pub use contact::{ContactForm, ContactNotice};
pub use content::ContentState;
pub use particles::ParticleField;
pub use projects::ProjectsFilter;
pub use session::SessionState;
pub use ui::UIState;
