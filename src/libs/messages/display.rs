//! Display implementation for worklog messages.
//!
//! Single source of truth for all user-facing prompt and status text.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Project messages
            Message::ProjectAdded(name) => format!("Project '{}' added", name),
            Message::ProjectDeleted => "Project deleted".to_string(),
            Message::PromptProjectName => "Project Name".to_string(),
            Message::PromptProject => "Project".to_string(),
            Message::NoProjectsYet => "No projects yet. Add a project first.".to_string(),

            // Time entry messages
            Message::TimeEntryAdded => "Time entry added".to_string(),
            Message::EntryDeleted => "Time entry deleted".to_string(),
            Message::NoEntriesYet => "No time entries yet".to_string(),
            Message::PromptDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptHours => "Hours".to_string(),

            // Workflow messages
            Message::PromptSave => "Save?".to_string(),
            Message::Goodbye => "Bye!".to_string(),
        };
        write!(f, "{}", text)
    }
}
