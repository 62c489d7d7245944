use tokio::{sync::oneshot, task::JoinHandle};

/// Handle to the repeating refresh task started by
/// [`Dashboard::start`](super::Dashboard::start).
///
/// Dropping the handle leaves the task running; call [`stop`](Self::stop) or
/// [`abort`](Self::abort) on teardown.
pub struct RefreshTask {
    pub(super) join: JoinHandle<()>,
    pub(super) stop_tx: Option<oneshot::Sender<()>>,
}

impl RefreshTask {
    /// Ask the task to stop and wait for it. A cycle already in progress is
    /// allowed to finish first.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.join.await;
    }

    /// Cancel the task immediately, including any in-flight cycle. Panels whose
    /// request was cut off show a "request cancelled" error instead of a spinner.
    pub fn abort(self) {
        self.join.abort();
    }

    /// Whether the task has exited.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
