use std::sync::Arc;

use review_core::{EditorId, LectureId, PROGRESS_KEY, ProgressSnapshot, QuestionId};
use storage::repository::KeyValueRepository;
use tokio::sync::Mutex;

use crate::error::ProgressError;

/// Reads and writes the reader's progress snapshot in key/value storage.
///
/// Writes go through one lock so concurrent read-modify-write updates from
/// separate UI tasks apply in turn.
#[derive(Clone)]
pub struct ProgressService {
    repo: Arc<dyn KeyValueRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            repo,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the stored snapshot. A missing or unreadable value yields an
    /// empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the repository fails.
    pub async fn load(&self) -> Result<ProgressSnapshot, ProgressError> {
        let Some(raw) = self.repo.get(PROGRESS_KEY).await? else {
            return Ok(ProgressSnapshot::new());
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                tracing::warn!(error = %err, "stored progress is corrupt; starting fresh");
                Ok(ProgressSnapshot::new())
            }
        }
    }

    /// Write an empty snapshot if nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if reading or writing fails.
    pub async fn ensure_initialized(&self) -> Result<ProgressSnapshot, ProgressError> {
        let _guard = self.write_lock.lock().await;
        if self.repo.get(PROGRESS_KEY).await?.is_none() {
            let snapshot = ProgressSnapshot::new();
            self.save(&snapshot).await?;
            return Ok(snapshot);
        }
        self.load().await
    }

    async fn save(&self, snapshot: &ProgressSnapshot) -> Result<(), ProgressError> {
        let raw = serde_json::to_string(snapshot)?;
        self.repo.set(PROGRESS_KEY, &raw).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if loading or saving fails.
    pub async fn record_lecture_viewed(
        &self,
        id: LectureId,
    ) -> Result<ProgressSnapshot, ProgressError> {
        self.update(|snapshot| {
            snapshot.mark_lecture_viewed(id);
        })
        .await
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if loading or saving fails.
    pub async fn record_quiz_completed(
        &self,
        id: QuestionId,
    ) -> Result<ProgressSnapshot, ProgressError> {
        self.update(|snapshot| {
            snapshot.mark_quiz_completed(id);
        })
        .await
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if loading or saving fails.
    pub async fn record_code_run(&self, id: EditorId) -> Result<ProgressSnapshot, ProgressError> {
        self.update(|snapshot| {
            snapshot.mark_code_run(id);
        })
        .await
    }

    async fn update(
        &self,
        apply: impl FnOnce(&mut ProgressSnapshot) + Send,
    ) -> Result<ProgressSnapshot, ProgressError> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.load().await?;
        apply(&mut snapshot);
        self.save(&snapshot).await?;
        Ok(snapshot)
    }
}
