pub mod admin;
pub mod background;
pub mod blog;
pub mod home;
pub mod login;
pub mod markdown;
pub mod modals;
pub mod nav_bar;
pub mod post;
pub mod widgets;

pub use markdown::MarkdownRenderer;
