use notify::{Event, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::thread;
use std::time::Duration;

use super::worker::StoreCommand;

/// Watch the content directory and queue a reload whenever something on disk
/// changes, so edits made in an external editor show up by themselves.
/// Bursts are coalesced; editors fire several events per save.
pub fn spawn_watcher(root: PathBuf, commands: std::sync::mpsc::Sender<StoreCommand>) {
    thread::spawn(move || {
        let (tx, rx) = channel::<()>();

        let mut watcher =
            match notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
                if res.is_ok() {
                    let _ = tx.send(());
                }
            }) {
                Ok(watcher) => watcher,
                Err(e) => {
                    eprintln!("Content watcher unavailable: {}", e);
                    return;
                }
            };

        if let Err(e) = watcher.watch(&root, RecursiveMode::Recursive) {
            eprintln!("Failed to watch {}: {}", root.display(), e);
            return;
        }

        while rx.recv().is_ok() {
            while rx.recv_timeout(Duration::from_millis(300)).is_ok() {}
            if commands.send(StoreCommand::LoadAll).is_err() {
                return;
            }
        }
    });
}
