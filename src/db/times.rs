use super::db::Db;
use crate::libs::error::WorklogError;
use rusqlite::params;
use tracing::debug;

const SELECT_ENTRIES: &str = "SELECT times.id, times.date, projects.name, times.desc, times.hours
    FROM times INNER JOIN projects ON projects.id = times.project
    ORDER BY times.id";
const INSERT_ENTRY: &str = "INSERT INTO times (date, hours, project, desc)
    SELECT ?1, ?2, ?3, ?4 WHERE EXISTS (SELECT 1 FROM projects WHERE id = ?3)";
const DELETE_ENTRY: &str = "DELETE FROM times WHERE id = ?1";
const SUM_HOURS: &str = "SELECT SUM(hours) FROM times WHERE project = ?1";
const SELECT_REPORT_LINES: &str = "SELECT date, desc, hours FROM times WHERE project = ?1 ORDER BY id";

/// One row of the main listing: a time entry joined with its project name.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    pub id: i64,
    pub date: String,
    pub project: String,
    pub desc: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub date: String,
    pub desc: String,
    pub hours: f64,
}

/// Aggregate report data for one project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReport {
    pub total_hours: f64,
    pub lines: Vec<ReportLine>,
}

impl Db {
    /// All time entries joined against their project, in insertion order.
    pub fn fetch_entries(&self) -> Result<Vec<EntryRow>, WorklogError> {
        let mut stmt = self.conn.prepare(SELECT_ENTRIES)?;
        let entry_iter = stmt.query_map([], |row| {
            Ok(EntryRow {
                id: row.get(0)?,
                date: row.get(1)?,
                project: row.get(2)?,
                desc: row.get(3)?,
                hours: row.get(4)?,
            })
        })?;
        let mut entries = Vec::new();
        for entry in entry_iter {
            entries.push(entry?);
        }

        Ok(entries)
    }

    /// Persists a new time entry and returns its id. The project row must
    /// still exist at commit time; a selection made against a stale listing
    /// fails with `UnknownProject` instead of creating an orphan.
    pub fn insert_entry(&mut self, date: &str, project_id: i64, desc: &str, hours: f64) -> Result<i64, WorklogError> {
        let inserted = self.conn.execute(INSERT_ENTRY, params![date, hours, project_id, desc])?;
        if inserted == 0 {
            return Err(WorklogError::UnknownProject(project_id));
        }
        let id = self.conn.last_insert_rowid();
        debug!(id, date, project_id, hours, "time entry inserted");
        Ok(id)
    }

    /// Removes a time entry. Deleting an id that is already gone is a
    /// benign no-op.
    pub fn delete_entry(&mut self, entry_id: i64) -> Result<(), WorklogError> {
        let deleted = self.conn.execute(DELETE_ENTRY, [entry_id])?;
        debug!(id = entry_id, deleted, "time entry delete");
        Ok(())
    }

    /// Total hours plus chronological lines for one project. Fails with
    /// `NoTimesBooked` when the project has zero entries; callers check
    /// `is_project_referenced` first to surface a friendly message.
    pub fn project_report(&self, project_id: i64) -> Result<ProjectReport, WorklogError> {
        let total_hours: Option<f64> = self.conn.query_row(SUM_HOURS, [project_id], |row| row.get(0))?;
        let total_hours = total_hours.ok_or(WorklogError::NoTimesBooked)?;

        let mut stmt = self.conn.prepare(SELECT_REPORT_LINES)?;
        let line_iter = stmt.query_map([project_id], |row| {
            Ok(ReportLine {
                date: row.get(0)?,
                desc: row.get(1)?,
                hours: row.get(2)?,
            })
        })?;
        let mut lines = Vec::new();
        for line in line_iter {
            lines.push(line?);
        }

        Ok(ProjectReport { total_hours, lines })
    }
}
