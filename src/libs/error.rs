//! Error taxonomy for worklog.
//!
//! Splits failures into recoverable user-level errors (bad input, integrity
//! violations, empty reports) and fatal infrastructure errors (storage, IO).
//! Recoverable errors are caught at the workflow controller boundary and
//! rendered as modal notifications; fatal errors propagate to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorklogError {
    /// User typed something that does not parse as a finite, non-negative
    /// number of hours.
    #[error("Hours must be a non-negative floating point value")]
    InvalidHours,

    /// A picker form was confirmed without any project selected.
    #[error("No project selected")]
    NoProjectSelected,

    /// The selected project was deleted between listing and commit.
    #[error("Project no longer exists")]
    UnknownProject(i64),

    /// Attempted to delete a project that still has time entries.
    #[error("Cannot delete referenced projects! Delete referencing time entries first.")]
    ProjectReferenced,

    /// Report requested for a project with zero time entries.
    #[error("There are no times booked on this project!")]
    NoTimesBooked,

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WorklogError {
    /// True for errors handled inside the workflow: the active form stays
    /// open and the message is shown as a notification.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WorklogError::InvalidHours
                | WorklogError::NoProjectSelected
                | WorklogError::UnknownProject(_)
                | WorklogError::ProjectReferenced
                | WorklogError::NoTimesBooked
        )
    }

    /// Notification title used when the error is rendered as a modal message.
    pub fn title(&self) -> &'static str {
        match self {
            WorklogError::InvalidHours | WorklogError::NoProjectSelected | WorklogError::UnknownProject(_) => "Invalid Input",
            _ => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_level_errors_are_recoverable() {
        assert!(WorklogError::InvalidHours.is_recoverable());
        assert!(WorklogError::NoProjectSelected.is_recoverable());
        assert!(WorklogError::UnknownProject(7).is_recoverable());
        assert!(WorklogError::ProjectReferenced.is_recoverable());
        assert!(WorklogError::NoTimesBooked.is_recoverable());
        assert!(!WorklogError::Io(std::io::Error::other("disk gone")).is_recoverable());
    }

    #[test]
    fn titles_match_notification_kind() {
        assert_eq!(WorklogError::InvalidHours.title(), "Invalid Input");
        assert_eq!(WorklogError::NoProjectSelected.title(), "Invalid Input");
        assert_eq!(WorklogError::UnknownProject(7).title(), "Invalid Input");
        assert_eq!(WorklogError::ProjectReferenced.title(), "Error");
        assert_eq!(WorklogError::NoTimesBooked.title(), "Error");
    }

    #[test]
    fn messages_keep_their_exact_wording() {
        assert_eq!(WorklogError::NoTimesBooked.to_string(), "There are no times booked on this project!");
        assert_eq!(
            WorklogError::ProjectReferenced.to_string(),
            "Cannot delete referenced projects! Delete referencing time entries first."
        );
    }
}
