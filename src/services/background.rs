// src/services/background.rs
// DOCUMENTATION: Cancellable background tasks
// PURPOSE: Fixed-interval polling loops and subscriptions owned by a client

use crate::errors::ClientError;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// A spawned task that is aborted when dropped
pub struct BackgroundTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl BackgroundTask {
    pub fn spawn<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        log::debug!("Starting background task: {}", name);
        Self {
            name,
            handle: tokio::spawn(future),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for BackgroundTask {
    fn drop(&mut self) {
        log::debug!("Stopping background task: {}", self.name);
        self.handle.abort();
    }
}

/// Start a polling loop
/// DOCUMENTATION: The first tick fires one full `period` after start, then
/// every `period`. A slow tick delays the next one rather than bursting.
/// A zero `period` is rejected before anything is spawned.
pub fn spawn_interval<F, Fut>(
    name: &'static str,
    period: Duration,
    mut tick: F,
) -> Result<BackgroundTask, ClientError>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    if period.is_zero() {
        return Err(ClientError::InvalidInput(format!(
            "{}: poll interval must be greater than zero",
            name
        )));
    }

    Ok(BackgroundTask::spawn(name, async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            tick().await;
        }
    }))
}

/// Optional running task, replaced on start and dropped on stop
#[derive(Default)]
pub struct TaskSlot {
    task: Mutex<Option<BackgroundTask>>,
}

impl TaskSlot {
    /// Install a task, aborting whatever ran before
    pub fn replace(&self, task: BackgroundTask) {
        let previous = self.lock().replace(task);
        drop(previous);
    }

    /// Abort the running task, if any. Returns whether one was running.
    pub fn clear(&self) -> bool {
        self.lock().take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.lock().as_ref().map_or(false, |task| !task.is_finished())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<BackgroundTask>> {
        match self.task.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
