//! The modal workflow state machine.
//!
//! Exactly one form is active at a time. Every command is dispatched from
//! the main listing; confirming a form validates its fields, commits through
//! the store, and returns to the listing, which always reloads from the
//! latest committed state. Recoverable errors (validation, integrity, empty
//! report) are rendered through the [`Notify`] capability and leave the form
//! open; storage failures propagate to the caller.

pub mod forms;
pub mod widgets;

use crate::db::db::Db;
use crate::db::projects::Project;
use crate::db::times::EntryRow;
use crate::libs::error::WorklogError;
use crate::libs::{report, validator};
use forms::{ProjectForm, ProjectPickForm, TimeEntryForm};
use tracing::debug;
use widgets::Notify;

pub const HELP_TEXT: &str = "
    worklog

    Actions on the main listing:
        Add time entry     log hours against a project
        Delete entry       remove the highlighted time entry
        Add project        create a named project
        Delete project     remove a project with no time entries
        Project report     total and per-entry hours for a project
        Help               show this screen
        Quit               leave the application
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainList,
    AddTimeEntry,
    AddProject,
    DeleteProject,
    ProjectReport,
    Help,
    Exited,
}

/// Commands accepted while the main listing is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddTime,
    /// Delete the highlighted entry, identified by its listing index.
    DeleteEntry(usize),
    AddProject,
    DeleteProject,
    Report,
    Help,
    Exit,
}

/// Drives the modal workflow: routes commands, validates form input, and
/// mediates every store mutation. Holds no entity state beyond the current
/// listing and the project snapshot taken when a form opens.
pub struct Controller {
    db: Db,
    state: State,
    entries: Vec<EntryRow>,
    projects: Vec<Project>,
    notify: Box<dyn Notify>,
}

impl Controller {
    pub fn new(db: Db, notify: Box<dyn Notify>) -> Result<Self, WorklogError> {
        let mut controller = Controller {
            db,
            state: State::MainList,
            entries: Vec::new(),
            projects: Vec::new(),
            notify,
        };
        controller.reload()?;
        Ok(controller)
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The current main listing, refreshed on every return to `MainList`.
    pub fn entries(&self) -> &[EntryRow] {
        &self.entries
    }

    /// Display names for the project snapshot the active picker was opened
    /// with. Selection indexes resolve against this same snapshot.
    pub fn project_names(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.name.clone()).collect()
    }

    /// Handles a main-listing command. Commands arriving in any other state
    /// are ignored; form states accept only confirm and cancel.
    pub fn dispatch(&mut self, command: Command) -> Result<(), WorklogError> {
        if self.state != State::MainList {
            debug!(?command, state = ?self.state, "command ignored outside main listing");
            return Ok(());
        }

        match command {
            Command::AddTime => {
                self.projects = self.db.fetch_projects()?;
                self.state = State::AddTimeEntry;
            }
            Command::AddProject => {
                self.state = State::AddProject;
            }
            Command::DeleteProject => {
                self.projects = self.db.fetch_projects()?;
                self.state = State::DeleteProject;
            }
            Command::Report => {
                self.projects = self.db.fetch_projects()?;
                self.state = State::ProjectReport;
            }
            Command::DeleteEntry(index) => {
                if let Some(entry) = self.entries.get(index) {
                    self.db.delete_entry(entry.id)?;
                }
                self.reload()?;
            }
            Command::Help => {
                self.state = State::Help;
                self.notify.show("Help", HELP_TEXT);
                self.back_to_list()?;
            }
            Command::Exit => {
                self.state = State::Exited;
            }
        }

        Ok(())
    }

    /// Confirms the Add Time Entry form. On validation failure the form
    /// stays open with the offending hours field cleared for re-entry.
    pub fn confirm_time_entry(&mut self, form: &mut TimeEntryForm) -> Result<(), WorklogError> {
        if self.state != State::AddTimeEntry {
            return Ok(());
        }
        let result = (|| -> Result<(), WorklogError> {
            let project_id = validator::require_selection(&self.projects, form.project.selected_index())?.id;
            let hours = validator::parse_hours(&form.hours.get())?;
            self.db.insert_entry(&form.date.get(), project_id, &form.desc.get(), hours)?;
            Ok(())
        })();

        match result {
            Ok(()) => self.back_to_list(),
            Err(err) if err.is_recoverable() => {
                if matches!(err, WorklogError::InvalidHours) {
                    form.hours.set("");
                }
                self.notify.show(err.title(), &err.to_string());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Confirms the Add Project form.
    pub fn confirm_project(&mut self, form: &ProjectForm) -> Result<(), WorklogError> {
        if self.state != State::AddProject {
            return Ok(());
        }
        self.db.insert_project(&form.name.get())?;
        self.back_to_list()
    }

    /// Confirms the Delete Project picker. Referenced projects are refused
    /// with no partial state change.
    pub fn confirm_delete_project(&mut self, form: &ProjectPickForm) -> Result<(), WorklogError> {
        if self.state != State::DeleteProject {
            return Ok(());
        }
        let result = (|| -> Result<(), WorklogError> {
            let project_id = validator::require_selection(&self.projects, form.project.selected_index())?.id;
            self.db.delete_project(project_id)
        })();

        self.settle(result)
    }

    /// Confirms the Project Report picker and renders the report through the
    /// notification capability.
    pub fn confirm_report(&mut self, form: &ProjectPickForm) -> Result<(), WorklogError> {
        if self.state != State::ProjectReport {
            return Ok(());
        }
        let result = (|| -> Result<String, WorklogError> {
            let project_id = validator::require_selection(&self.projects, form.project.selected_index())?.id;
            if !self.db.is_project_referenced(project_id)? {
                return Err(WorklogError::NoTimesBooked);
            }
            report::generate(&self.db, project_id)
        })();

        match result {
            Ok(text) => {
                self.notify.show("Report", &text);
                self.back_to_list()
            }
            Err(err) if err.is_recoverable() => {
                self.notify.show(err.title(), &err.to_string());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Discards in-form edits and returns to the main listing. No side
    /// effect beyond the reload.
    pub fn cancel(&mut self) -> Result<(), WorklogError> {
        if self.state == State::MainList || self.state == State::Exited {
            return Ok(());
        }
        self.back_to_list()
    }

    fn settle(&mut self, result: Result<(), WorklogError>) -> Result<(), WorklogError> {
        match result {
            Ok(()) => self.back_to_list(),
            Err(err) if err.is_recoverable() => {
                self.notify.show(err.title(), &err.to_string());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn back_to_list(&mut self) -> Result<(), WorklogError> {
        self.state = State::MainList;
        self.projects.clear();
        self.reload()
    }

    fn reload(&mut self) -> Result<(), WorklogError> {
        self.entries = self.db.fetch_entries()?;
        Ok(())
    }
}
