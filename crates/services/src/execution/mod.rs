mod client;
mod config;
mod coordinator;
mod outcome;

// Public API of the execution subsystem.
pub use crate::error::ExecutionError;
pub use client::{CodeExecutor, ExecutionRequest, ExecutionResponse, PistonExecutor, RunResult, SourceFile};
pub use config::ExecutionConfig;
pub use coordinator::{RunCoordinator, RunReport, RunTicket};
pub use outcome::ExecutionOutcome;
