use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use eframe::egui;

use crate::content::{BlogPost, ContactMessage, ContentSnapshot, ContentStore, Project};
use crate::state::SearchHit;

use super::search::search_posts;
use super::watcher::spawn_watcher;

pub enum StoreCommand {
    LoadAll,
    /// Second field names a slug the save supersedes (post was renamed)
    SavePost(BlogPost, Option<String>),
    DeletePost(String),
    SaveProject(Project, Option<String>),
    DeleteProject(String),
    SaveMessage(ContactMessage),
    SetMessageRead(String, bool),
    DeleteMessage(String),
    SearchPosts(String),
    ExportBackup,
}

pub enum StoreEvent {
    Loaded(ContentSnapshot),
    /// A mutation went through; human text for the status line
    Saved(String),
    /// Verdict on a contact form submission, rendered inline on the page
    MessageStored,
    MessageStoreFailed(String),
    SearchProgress(usize),
    SearchCompleted(Vec<SearchHit>),
    BackupCompleted(PathBuf),
    Error(String),
}

/// One worker thread owns the store; the watcher feeds reloads into the same
/// command queue. The caller must have run `ensure_layout` first so the
/// watched directory exists.
pub fn spawn_worker(
    store: ContentStore,
    ctx: egui::Context,
) -> (Sender<StoreCommand>, Receiver<StoreEvent>) {
    let (cmd_tx, cmd_rx) = channel();
    let (evt_tx, evt_rx) = channel();

    spawn_watcher(store.root().to_path_buf(), cmd_tx.clone());

    let ctx_clone = ctx.clone();
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            handle_command(&store, cmd, &evt_tx);
            ctx_clone.request_repaint();
        }
    });

    (cmd_tx, evt_rx)
}

fn handle_command(store: &ContentStore, command: StoreCommand, events: &Sender<StoreEvent>) {
    match command {
        StoreCommand::LoadAll => send_reload(store, events),
        StoreCommand::SavePost(post, replaces) => {
            let result = store.save_post(&post).and_then(|_| match &replaces {
                Some(old) => store.delete_post(old),
                None => Ok(()),
            });
            report(
                store,
                events,
                result,
                Some(format!("Saved \"{}\"", post.title)),
                "Save failed",
            );
        }
        StoreCommand::DeletePost(slug) => {
            let result = store.delete_post(&slug);
            report(store, events, result, Some("Post deleted".to_string()), "Delete failed");
        }
        StoreCommand::SaveProject(project, replaces) => {
            let result = store.save_project(&project).and_then(|_| match &replaces {
                Some(old) => store.delete_project(old),
                None => Ok(()),
            });
            report(
                store,
                events,
                result,
                Some(format!("Saved \"{}\"", project.title)),
                "Save failed",
            );
        }
        StoreCommand::DeleteProject(slug) => {
            let result = store.delete_project(&slug);
            report(
                store,
                events,
                result,
                Some("Project deleted".to_string()),
                "Delete failed",
            );
        }
        StoreCommand::SaveMessage(mut message) => {
            if message.id.is_empty() {
                message.id = store.next_message_id();
            }
            match store.save_message(&message) {
                Ok(()) => {
                    let _ = events.send(StoreEvent::MessageStored);
                    send_reload(store, events);
                }
                Err(e) => {
                    let _ = events.send(StoreEvent::MessageStoreFailed(e.to_string()));
                }
            }
        }
        StoreCommand::SetMessageRead(id, read) => {
            let result = store.set_message_read(&id, read);
            report(store, events, result, None, "Update failed");
        }
        StoreCommand::DeleteMessage(id) => {
            let result = store.delete_message(&id);
            report(
                store,
                events,
                result,
                Some("Message deleted".to_string()),
                "Delete failed",
            );
        }
        StoreCommand::SearchPosts(query) => match search_posts(&store.posts_dir(), &query, events)
        {
            Ok(hits) => {
                let _ = events.send(StoreEvent::SearchCompleted(hits));
            }
            Err(e) => {
                let _ = events.send(StoreEvent::Error(format!("Search error: {}", e)));
            }
        },
        StoreCommand::ExportBackup => match store.export_backup() {
            Ok(path) => {
                let _ = events.send(StoreEvent::BackupCompleted(path));
                send_reload(store, events);
            }
            Err(e) => {
                let _ = events.send(StoreEvent::Error(format!("Backup failed: {}", e)));
            }
        },
    }
}

fn report(
    store: &ContentStore,
    events: &Sender<StoreEvent>,
    result: io::Result<()>,
    ok_message: Option<String>,
    err_prefix: &str,
) {
    match result {
        Ok(()) => {
            if let Some(message) = ok_message {
                let _ = events.send(StoreEvent::Saved(message));
            }
            send_reload(store, events);
        }
        Err(e) => {
            let _ = events.send(StoreEvent::Error(format!("{}: {}", err_prefix, e)));
        }
    }
}

fn send_reload(store: &ContentStore, events: &Sender<StoreEvent>) {
    match store.load() {
        Ok(snapshot) => {
            let _ = events.send(StoreEvent::Loaded(snapshot));
        }
        Err(e) => {
            let _ = events.send(StoreEvent::Error(format!("Reload failed: {}", e)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::time::{Duration, Instant};

    fn wait_for<F: FnMut(&StoreEvent) -> bool>(
        events: &Receiver<StoreEvent>,
        mut pred: F,
    ) -> StoreEvent {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .unwrap_or(Duration::ZERO);
            match events.recv_timeout(remaining) {
                Ok(event) if pred(&event) => return event,
                Ok(_) => continue,
                Err(e) => panic!("no matching event: {}", e),
            }
        }
    }

    #[test]
    fn test_save_post_reports_and_reloads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ContentStore::new(dir.path().join("content"));
        store.ensure_layout().expect("layout");
        let (commands, events) = spawn_worker(store, egui::Context::default());

        let post = BlogPost {
            slug: "from-worker".to_string(),
            title: "From worker".to_string(),
            date: Local::now().to_rfc3339(),
            body: "body".to_string(),
            ..Default::default()
        };
        commands
            .send(StoreCommand::SavePost(post, None))
            .expect("send");

        wait_for(&events, |e| {
            matches!(e, StoreEvent::Saved(msg) if msg.contains("From worker"))
        });
        let loaded = wait_for(&events, |e| {
            matches!(e, StoreEvent::Loaded(s) if s.post("from-worker").is_some())
        });
        if let StoreEvent::Loaded(snapshot) = loaded {
            assert_eq!(
                snapshot.post("from-worker").map(|p| p.title.as_str()),
                Some("From worker")
            );
        }
    }

    #[test]
    fn test_rename_drops_the_old_slug() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ContentStore::new(dir.path().join("content"));
        store.ensure_layout().expect("layout");
        let posts_dir = store.posts_dir();
        store
            .save_post(&BlogPost {
                slug: "old-name".to_string(),
                title: "Old name".to_string(),
                body: "body".to_string(),
                ..Default::default()
            })
            .expect("seed");

        let (commands, events) = spawn_worker(store, egui::Context::default());
        commands
            .send(StoreCommand::SavePost(
                BlogPost {
                    slug: "new-name".to_string(),
                    title: "New name".to_string(),
                    body: "body".to_string(),
                    ..Default::default()
                },
                Some("old-name".to_string()),
            ))
            .expect("send");

        wait_for(&events, |e| matches!(e, StoreEvent::Saved(_)));
        wait_for(&events, |e| {
            matches!(e, StoreEvent::Loaded(s)
                if s.post("new-name").is_some() && s.post("old-name").is_none())
        });
        assert!(posts_dir.join("new-name.md").exists());
        assert!(!posts_dir.join("old-name.md").exists());
    }

    #[test]
    fn test_contact_submission_gets_its_own_verdict() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ContentStore::new(dir.path().join("content"));
        store.ensure_layout().expect("layout");
        let (commands, events) = spawn_worker(store, egui::Context::default());

        // an empty id is filled in by the worker
        commands
            .send(StoreCommand::SaveMessage(ContactMessage {
                id: String::new(),
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                subject: "Hi".to_string(),
                message: "Nice site".to_string(),
                created_at: "2026-01-02T10:00:00+00:00".to_string(),
                read: false,
            }))
            .expect("send");

        wait_for(&events, |e| matches!(e, StoreEvent::MessageStored));
        wait_for(&events, |e| {
            matches!(e, StoreEvent::Loaded(s) if s.messages.len() == 1 && !s.messages[0].id.is_empty())
        });
    }

    #[test]
    fn test_missing_delete_surfaces_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ContentStore::new(dir.path().join("content"));
        store.ensure_layout().expect("layout");
        let (commands, events) = spawn_worker(store, egui::Context::default());

        commands
            .send(StoreCommand::DeletePost("never-existed".to_string()))
            .expect("send");
        wait_for(&events, |e| {
            matches!(e, StoreEvent::Error(msg) if msg.starts_with("Delete failed"))
        });
    }
}
