use crate::decay::{sweep, SweepReport};
use crate::domain::{display_rows, DisplayRow, Task, TimeBucket};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Immutable view of the whole collection at one point in time
pub type Snapshot = Arc<Vec<Task>>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot)>;

/// The single owned task collection.
///
/// Every mutation builds a new collection and swaps it in whole, then
/// notifies subscribers with the new snapshot. Readers holding an older
/// snapshot keep a consistent view. The store is meant to be owned by one
/// thread of control; hosts on a multi-threaded runtime should wrap it in a
/// `Mutex` so read-modify-publish stays atomic.
pub struct TaskStore {
    tasks: Snapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(tasks),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Register for change notifications
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Replace the whole collection and notify subscribers
    fn publish(&mut self, tasks: Vec<Task>) {
        self.tasks = Arc::new(tasks);
        let snapshot = Arc::clone(&self.tasks);
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }

    /// Create a task in `bucket`. Blank text is rejected and leaves the
    /// collection untouched. Returns the new task's ID.
    pub fn add_task(&mut self, text: &str, bucket: TimeBucket, now: DateTime<Utc>) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let task = Task::new(text.to_string(), bucket, now);
        let id = task.id.clone();
        let mut next = self.tasks.as_ref().clone();
        next.push(task);
        self.publish(next);

        tracing::info!(id = %id, bucket = bucket.label(), "task created");
        Some(id)
    }

    /// Flip `completed` on the task with `id`. Abandoned tasks can be
    /// toggled too; `abandoned` is left as is. Returns false if no task
    /// has that ID.
    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };

        let mut next = self.tasks.as_ref().clone();
        next[index].completed = !next[index].completed;
        tracing::debug!(id = %id, completed = next[index].completed, "task toggled");
        self.publish(next);
        true
    }

    /// Run one decay tick against `now` and publish the result, changed or not
    pub fn decay(&mut self, now: DateTime<Utc>) -> SweepReport {
        let (next, report) = sweep(&self.tasks, now);
        if report.changed() {
            tracing::info!(count = report.abandoned.len(), "tasks abandoned");
        }
        tracing::debug!(
            evaluated = report.evaluated,
            skipped = report.skipped.len(),
            "decay tick"
        );
        self.publish(next);
        report
    }

    /// Rows for the presentation layer
    pub fn rows(&self, bucket: TimeBucket, now: DateTime<Utc>) -> Vec<DisplayRow> {
        display_rows(&self.tasks, bucket, now)
    }

    /// Run a decay tick first, then build rows. For one-shot readers that
    /// have no ticker of their own.
    pub fn decayed_rows(&mut self, bucket: TimeBucket, now: DateTime<Utc>) -> Vec<DisplayRow> {
        self.decay(now);
        self.rows(bucket, now)
    }

    /// Fold in a collection written by another process. Unknown tasks are
    /// appended and `abandoned` is carried over; known tasks otherwise keep
    /// their in-memory state. Publishes only when something changed and
    /// returns whether it did.
    pub fn absorb(&mut self, incoming: Vec<Task>) -> bool {
        let merged = merge_tasks(&self.tasks, incoming);
        if merged == *self.tasks {
            return false;
        }
        tracing::debug!(before = self.tasks.len(), after = merged.len(), "absorbed stored tasks");
        self.publish(merged);
        true
    }
}

/// Union of two collections keyed by ID.
///
/// `ours` keeps its order and wins on `completed`; `abandoned` is OR-ed so it
/// stays monotonic. Tasks only in `theirs` are appended in their order.
pub fn merge_tasks(ours: &[Task], theirs: Vec<Task>) -> Vec<Task> {
    let mut merged: Vec<Task> = ours.to_vec();
    for task in theirs {
        match merged.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => existing.abandoned |= task.abandoned,
            None => merged.push(task),
        }
    }
    merged
}
