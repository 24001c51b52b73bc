use services::{AppServicesError, ErrorKind, GradebookError, GradingError, OverviewError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Invalid(String),
    UnsavedChanges,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::NotFound => "That record no longer exists.".to_owned(),
            ViewError::Invalid(reason) => reason.clone(),
            ViewError::UnsavedChanges => {
                "Save or discard the current grade before switching.".to_owned()
            }
            ViewError::Unknown => "Something went wrong. Please try again.".to_owned(),
        }
    }

    fn from_kind(kind: ErrorKind, detail: String) -> Self {
        match kind {
            ErrorKind::NotFound => ViewError::NotFound,
            ErrorKind::Validation => ViewError::Invalid(detail),
            ErrorKind::Conflict => ViewError::UnsavedChanges,
            ErrorKind::Storage => ViewError::Unknown,
        }
    }
}

impl From<GradingError> for ViewError {
    fn from(err: GradingError) -> Self {
        Self::from_kind(err.kind(), err.to_string())
    }
}

impl From<GradebookError> for ViewError {
    fn from(err: GradebookError) -> Self {
        Self::from_kind(err.kind(), err.to_string())
    }
}

impl From<OverviewError> for ViewError {
    fn from(_: OverviewError) -> Self {
        ViewError::Unknown
    }
}

impl From<AppServicesError> for ViewError {
    fn from(_: AppServicesError) -> Self {
        ViewError::Unknown
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_result<T, E: Into<ViewError>>(result: Result<T, E>) -> ViewState<T> {
    match result {
        Ok(data) => ViewState::Ready(data),
        Err(err) => ViewState::Error(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{Score, StudentId};

    #[test]
    fn grading_errors_map_by_kind() {
        let invalid: ViewError = GradingError::from(Score::new(120.0).unwrap_err()).into();
        assert!(matches!(invalid, ViewError::Invalid(_)));
        assert_eq!(
            ViewError::from(GradingError::UnsavedDraft(StudentId::new(1))),
            ViewError::UnsavedChanges
        );
        assert_eq!(
            ViewError::from(GradingError::SubmissionNotFound(StudentId::new(1))),
            ViewError::NotFound
        );
    }
}
