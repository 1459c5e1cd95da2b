// Loaded content plus store-worker bookkeeping
use std::path::PathBuf;

use crate::content::ContentSnapshot;

pub struct ContentState {
    pub snapshot: ContentSnapshot,
    pub loading: bool,
    /// Set when a load failed outright; pages show it instead of content
    pub load_error: Option<String>,
    pub last_backup: Option<PathBuf>,
}

impl ContentState {
    pub fn new() -> Self {
        Self {
            snapshot: ContentSnapshot::default(),
            loading: true,
            load_error: None,
            last_backup: None,
        }
    }

    pub fn replace(&mut self, snapshot: ContentSnapshot) {
        self.snapshot = snapshot;
        self.loading = false;
        self.load_error = None;
    }
}
