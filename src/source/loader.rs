//! One-shot background load with a teardown guard.
//!
//! `spawn_load` runs `load()` on the tokio runtime and posts the result back
//! as an `Action`. The returned `LoadHandle` owns the task: once it is
//! cancelled or dropped, a result that arrives late is thrown away instead of
//! being applied to a view that no longer exists.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;

use log::{debug, info, warn};
use tokio::task::AbortHandle;

use crate::core::action::Action;
use crate::source::{PodcastSource, load};

pub struct LoadHandle {
    active: Arc<AtomicBool>,
    abort: AbortHandle,
}

impl LoadHandle {
    /// Marks the owning view as gone and stops the task if it is still running.
    pub fn cancel(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            debug!("Podcast load cancelled");
        }
        self.abort.abort();
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn spawn_load(source: Arc<dyn PodcastSource>, tx: mpsc::Sender<Action>) -> LoadHandle {
    info!("Spawning podcast load from {}", source.name());
    let active = Arc::new(AtomicBool::new(true));
    let task_active = active.clone();

    let handle = tokio::spawn(async move {
        let result = load(source.as_ref()).await;

        if !task_active.load(Ordering::SeqCst) {
            debug!("Discarding podcast load result: view torn down");
            return;
        }
        if tx.send(Action::LoadFinished(result)).is_err() {
            warn!("Failed to deliver podcast load result: receiver dropped");
        }
    });

    LoadHandle {
        active,
        abort: handle.abort_handle(),
    }
}
