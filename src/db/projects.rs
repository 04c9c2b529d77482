use super::db::Db;
use crate::libs::error::WorklogError;
use tracing::debug;

const SELECT_PROJECTS: &str = "SELECT id, name FROM projects ORDER BY id";
const INSERT_PROJECT: &str = "INSERT INTO projects (name) VALUES (?1)";
const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = ?1";
const COUNT_REFERENCES: &str = "SELECT COUNT(*) FROM times WHERE project = ?1";

/// A named bucket time can be logged against.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

impl Db {
    /// All projects in insertion order.
    pub fn fetch_projects(&self) -> Result<Vec<Project>, WorklogError> {
        let mut stmt = self.conn.prepare(SELECT_PROJECTS)?;
        let project_iter = stmt.query_map([], |row| {
            Ok(Project {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project?);
        }

        Ok(projects)
    }

    /// Persists a new project and returns its id. Duplicate names are
    /// permitted; ids disambiguate.
    pub fn insert_project(&mut self, name: &str) -> Result<i64, WorklogError> {
        self.conn.execute(INSERT_PROJECT, [name])?;
        let id = self.conn.last_insert_rowid();
        debug!(id, name, "project inserted");
        Ok(id)
    }

    /// True iff at least one time entry references the project.
    pub fn is_project_referenced(&self, project_id: i64) -> Result<bool, WorklogError> {
        let count: i64 = self.conn.query_row(COUNT_REFERENCES, [project_id], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Removes a project. Fails with `ProjectReferenced` while any time
    /// entry still points at it; the check and the delete go through the
    /// same connection, so no partial state is possible.
    pub fn delete_project(&mut self, project_id: i64) -> Result<(), WorklogError> {
        if self.is_project_referenced(project_id)? {
            return Err(WorklogError::ProjectReferenced);
        }
        self.conn.execute(DELETE_PROJECT, [project_id])?;
        debug!(id = project_id, "project deleted");
        Ok(())
    }
}
