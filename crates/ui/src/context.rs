use std::sync::Arc;

use review_core::Course;
use services::{ProgressService, RunCoordinator};

pub trait UiApp: Send + Sync {
    fn course(&self) -> Arc<Course>;
    fn run_coordinator(&self) -> Arc<RunCoordinator>;
    fn progress(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    course: Arc<Course>,
    run_coordinator: Arc<RunCoordinator>,
    progress: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course: app.course(),
            run_coordinator: app.run_coordinator(),
            progress: app.progress(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
