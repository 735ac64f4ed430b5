use std::fs;
use std::path::PathBuf;

use review_core::Course;

use crate::error::CourseLoadError;

const BUILTIN_COURSE: &str = include_str!("../assets/builtin_course.json");

/// Where the lecture content comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CourseSource {
    /// The data structures review bundled with the binary.
    #[default]
    Builtin,
    /// A JSON course file on disk.
    File(PathBuf),
}

impl CourseSource {
    /// `File` for a non-blank path, otherwise `Builtin`.
    #[must_use]
    pub fn from_path(path: Option<&str>) -> Self {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Builtin,
        }
    }
}

/// Read and validate a course.
///
/// # Errors
///
/// Returns `CourseLoadError` if the file cannot be read, is not a course
/// document, or fails validation.
pub fn load_course(source: &CourseSource) -> Result<Course, CourseLoadError> {
    match source {
        CourseSource::Builtin => parse_course(BUILTIN_COURSE),
        CourseSource::File(path) => {
            let raw = fs::read_to_string(path).map_err(|source| CourseLoadError::Io {
                path: path.clone(),
                source,
            })?;
            let course = parse_course(&raw)?;
            tracing::info!(path = %path.display(), lectures = course.lectures.len(), "course loaded");
            Ok(course)
        }
    }
}

/// Parse a JSON course document and validate it.
///
/// # Errors
///
/// Returns `CourseLoadError::Parse` for malformed JSON and
/// `CourseLoadError::Invalid` when identifiers collide or titles are empty.
pub fn parse_course(raw: &str) -> Result<Course, CourseLoadError> {
    let course: Course = serde_json::from_str(raw)?;
    course.validate()?;
    Ok(course)
}
