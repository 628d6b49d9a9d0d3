pub mod files;
pub mod repository;
pub mod settings;

pub use files::{
    atomic_write, ensure_data_dir, find_local_data_dir, get_data_dir, init_local_data_dir,
    read_file, settings_file, tasks_file, DATA_DIR_NAME, TASKS_KEY,
};
pub use repository::{JsonFileRepository, TaskRepository};
pub use settings::{load_settings, save_settings, Settings};

use crate::store::{merge_tasks, TaskStore};

/// Attach `repo` to `store` so every published snapshot is saved.
///
/// Other processes may share the file, so each save first merges in stored
/// tasks this store has not seen. Save failures are logged and dropped; the
/// next publish retries with the full collection.
pub fn persist_on_publish<R>(store: &mut TaskStore, repo: R) -> crate::store::SubscriptionId
where
    R: TaskRepository + 'static,
{
    store.subscribe(move |snapshot| {
        let stored = repo.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read stored tasks before saving");
            Vec::new()
        });
        if let Err(e) = repo.save(&merge_tasks(snapshot, stored)) {
            tracing::warn!(error = %e, "failed to save tasks");
        }
    })
}
