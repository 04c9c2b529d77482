//! Input validation for user-supplied field values.
//!
//! Pure functions sitting between the forms and the store: nothing invalid
//! ever reaches a database statement. Dates are not validated here; the
//! date-input capability owns date parsing.

use crate::db::projects::Project;
use crate::libs::error::WorklogError;

/// Parses an hours field. Accepts any finite, non-negative float; rejects
/// everything else (including NaN and infinities, which `f64::from_str`
/// happily produces).
pub fn parse_hours(text: &str) -> Result<f64, WorklogError> {
    let hours: f64 = text.trim().parse().map_err(|_| WorklogError::InvalidHours)?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(WorklogError::InvalidHours);
    }
    Ok(hours)
}

/// Resolves a combo selection against the project snapshot taken when the
/// form was opened. No selection, or an index past the snapshot, is a
/// validation error before any store call.
pub fn require_selection(projects: &[Project], index: Option<usize>) -> Result<&Project, WorklogError> {
    index.and_then(|i| projects.get(i)).ok_or(WorklogError::NoProjectSelected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hours_accepts_valid_values() {
        assert_eq!(parse_hours("8").unwrap(), 8.0);
        assert_eq!(parse_hours("0").unwrap(), 0.0);
        assert_eq!(parse_hours("2.5").unwrap(), 2.5);
        assert_eq!(parse_hours(" 1.25 ").unwrap(), 1.25);
    }

    #[test]
    fn parse_hours_rejects_garbage() {
        assert!(matches!(parse_hours("abc"), Err(WorklogError::InvalidHours)));
        assert!(matches!(parse_hours(""), Err(WorklogError::InvalidHours)));
        assert!(matches!(parse_hours("1,5"), Err(WorklogError::InvalidHours)));
    }

    #[test]
    fn parse_hours_rejects_negative_and_non_finite() {
        assert!(matches!(parse_hours("-1"), Err(WorklogError::InvalidHours)));
        assert!(matches!(parse_hours("inf"), Err(WorklogError::InvalidHours)));
        assert!(matches!(parse_hours("NaN"), Err(WorklogError::InvalidHours)));
    }

    #[test]
    fn require_selection_resolves_snapshot_index() {
        let projects = vec![
            Project { id: 3, name: "Alpha".into() },
            Project { id: 7, name: "Beta".into() },
        ];
        assert_eq!(require_selection(&projects, Some(1)).unwrap().id, 7);
        assert!(matches!(require_selection(&projects, None), Err(WorklogError::NoProjectSelected)));
        assert!(matches!(require_selection(&projects, Some(2)), Err(WorklogError::NoProjectSelected)));
    }
}
