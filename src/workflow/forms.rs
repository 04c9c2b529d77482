//! Modal form definitions.
//!
//! Each form owns its widgets behind the capability traits. Form contents
//! are transient: confirmed values are committed to the store, cancelled
//! values are simply dropped.

use super::widgets::{ComboSelect, DateInput, TextInput};

/// The Add Time Entry form: date, project picker, description, hours.
pub struct TimeEntryForm {
    pub date: Box<dyn DateInput>,
    pub project: Box<dyn ComboSelect>,
    pub desc: Box<dyn TextInput>,
    pub hours: Box<dyn TextInput>,
}

/// The Add Project form: a single name field.
pub struct ProjectForm {
    pub name: Box<dyn TextInput>,
}

/// Project picker used by both Delete Project and Project Report.
pub struct ProjectPickForm {
    pub project: Box<dyn ComboSelect>,
}
