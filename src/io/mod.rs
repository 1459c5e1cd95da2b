mod search;
mod watcher;
pub mod worker;

pub use worker::{spawn_worker, StoreCommand, StoreEvent};
