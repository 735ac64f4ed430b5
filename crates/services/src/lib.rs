#![forbid(unsafe_code)]

pub mod app_services;
pub mod course_service;
pub mod error;
pub mod execution;
pub mod progress_service;

pub use app_services::AppServices;
pub use course_service::{CourseSource, load_course, parse_course};
pub use error::{AppServicesError, CourseLoadError, ExecutionError, ProgressError};
pub use execution::{
    CodeExecutor, ExecutionConfig, ExecutionOutcome, ExecutionRequest, ExecutionResponse,
    PistonExecutor, RunCoordinator, RunReport, RunResult, RunTicket, SourceFile,
};
pub use progress_service::ProgressService;
