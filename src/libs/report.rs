//! Contains shared logic for project report generation.

use crate::db::db::Db;
use crate::db::times::ReportLine;
use crate::libs::error::WorklogError;

/// Formats one report line: date, description, hours to two decimals.
fn format_line(line: &ReportLine) -> String {
    format!("{}, {}, {:.2}", line.date, line.desc, line.hours)
}

/// Generates the textual report for one project: the total followed by one
/// line per entry in insertion order. Callers guard against zero-entry
/// projects via `Db::is_project_referenced`.
pub fn generate(db: &Db, project_id: i64) -> Result<String, WorklogError> {
    let report = db.project_report(project_id)?;
    let lines: Vec<String> = report.lines.iter().map(format_line).collect();

    Ok(format!("Total hours: {:.2}\n{}", report.total_hours, lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format_uses_two_decimals() {
        let line = ReportLine {
            date: "2026-08-20".into(),
            desc: "code review".into(),
            hours: 1.5,
        };
        assert_eq!(format_line(&line), "2026-08-20, code review, 1.50");
    }
}
