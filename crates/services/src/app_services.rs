use std::sync::Arc;

use review_core::Course;
use storage::repository::Storage;

use crate::course_service::{CourseSource, load_course};
use crate::error::AppServicesError;
use crate::execution::{CodeExecutor, ExecutionConfig, PistonExecutor, RunCoordinator};
use crate::progress_service::ProgressService;

/// Assembles app-facing services around one loaded course.
#[derive(Clone)]
pub struct AppServices {
    course: Arc<Course>,
    run_coordinator: Arc<RunCoordinator>,
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the Piston endpoint
    /// described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization, course loading
    /// or progress setup fails.
    pub async fn new_sqlite(
        db_url: &str,
        config: ExecutionConfig,
        source: &CourseSource,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let executor: Arc<dyn CodeExecutor> = Arc::new(PistonExecutor::new(config));
        Self::assemble(storage, executor, source).await
    }

    /// Build services over in-memory storage with the given executor.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the course cannot be loaded.
    pub async fn in_memory(
        executor: Arc<dyn CodeExecutor>,
        source: &CourseSource,
    ) -> Result<Self, AppServicesError> {
        Self::assemble(Storage::in_memory(), executor, source).await
    }

    async fn assemble(
        storage: Storage,
        executor: Arc<dyn CodeExecutor>,
        source: &CourseSource,
    ) -> Result<Self, AppServicesError> {
        let course = Arc::new(load_course(source)?);
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.kv)));
        progress.ensure_initialized().await?;
        let run_coordinator = Arc::new(RunCoordinator::new(executor));

        tracing::debug!(
            course = %course.title,
            lectures = course.lectures.len(),
            "app services ready"
        );
        Ok(Self {
            course,
            run_coordinator,
            progress,
        })
    }

    #[must_use]
    pub fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    #[must_use]
    pub fn run_coordinator(&self) -> Arc<RunCoordinator> {
        Arc::clone(&self.run_coordinator)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}
