//! Swappable handle to the current schedule index.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Schedule, ScheduleError, ScheduleIndex};

/// Thread-safe access to the current index, with support for background
/// reload.
///
/// Queries take a snapshot with [`ScheduleHandle::current`] and run against
/// it without holding the lock. A reload builds a complete new index and
/// swaps it in, so no query ever sees a half-built index.
#[derive(Clone)]
pub struct ScheduleHandle {
    inner: Arc<RwLock<Arc<ScheduleIndex>>>,
}

impl ScheduleHandle {
    /// Wrap an already-built index.
    pub fn new(index: ScheduleIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Snapshot of the current index.
    pub async fn current(&self) -> Arc<ScheduleIndex> {
        self.inner.read().await.clone()
    }

    /// Replace the current index.
    pub async fn replace(&self, index: ScheduleIndex) {
        let mut guard = self.inner.write().await;
        *guard = Arc::new(index);
    }

    /// Reload the snapshot at `path` and swap it in.
    ///
    /// On failure, the existing index is kept and the error is returned.
    /// Returns the number of stops in the new index.
    pub async fn reload(&self, path: &Path) -> Result<usize, ScheduleError> {
        let path = path.to_path_buf();
        let index = tokio::task::spawn_blocking(move || {
            Schedule::load(&path).map(ScheduleIndex::build)
        })
        .await??;

        let count = index.stop_count();
        self.replace(index).await;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleBuilder;
    use std::io::Write;

    #[tokio::test]
    async fn snapshot_survives_replace() {
        let handle = ScheduleHandle::new(ScheduleBuilder::new().stop("A", "A", 0.0, 0.0).index());

        let before = handle.current().await;
        handle
            .replace(
                ScheduleBuilder::new()
                    .stop("A", "A", 0.0, 0.0)
                    .stop("B", "B", 0.0, 0.0)
                    .index(),
            )
            .await;

        assert_eq!(before.stop_count(), 1);
        assert_eq!(handle.current().await.stop_count(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn reload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"stops": [{"stop_id": "X", "stop_name": "X", "stop_lat": 0.0, "stop_lon": 0.0}]}"#,
        )
        .unwrap();

        let handle = ScheduleHandle::new(ScheduleIndex::build(Schedule::default()));
        let count = handle.reload(file.path()).await.unwrap();

        assert_eq!(count, 1);
        assert!(handle.current().await.contains_stop(&"X".into()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failed_reload_keeps_old_index() {
        let handle = ScheduleHandle::new(ScheduleBuilder::new().stop("A", "A", 0.0, 0.0).index());
        let dir = tempfile::tempdir().unwrap();

        let result = handle.reload(&dir.path().join("absent.json")).await;

        assert!(result.is_err());
        assert_eq!(handle.current().await.stop_count(), 1);
    }
}
