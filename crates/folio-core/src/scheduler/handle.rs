use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Owner of a background page task.
///
/// Dropping the handle stops the task, so a torn-down view never keeps a
/// timer alive. [`TaskHandle::shutdown`] stops it and waits for it to exit.
#[derive(Debug)]
pub struct TaskHandle {
    name: &'static str,
    shutdown_tx: watch::Sender<bool>,
    join: Option<JoinHandle<()>>,
}

impl TaskHandle {
    pub(crate) fn new(name: &'static str, shutdown_tx: watch::Sender<bool>, join: JoinHandle<()>) -> Self {
        Self {
            name,
            shutdown_tx,
            join: Some(join),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.as_ref().map_or(true, |j| j.is_finished())
    }

    /// Signal the task and wait until it has stopped
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(join) = self.join.take() {
            if let Err(e) = join.await {
                if !e.is_cancelled() {
                    debug!("Task '{}' ended abnormally: {}", self.name, e);
                }
            }
        }
    }

    /// Stop the task without waiting
    pub fn cancel(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(join) = self.join.take() {
            join.abort();
            debug!("Task '{}' cancelled", self.name);
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
