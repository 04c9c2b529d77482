//! Interactive console front end.
//!
//! A prompt-driven loop over the workflow states: the main listing renders
//! the entries table and a command menu; form states collect field values
//! into buffer widgets and hand them to the controller for validation and
//! commit. The loop keeps running until the controller reaches `Exited`.

pub mod widgets;

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::workflow::forms::{ProjectForm, ProjectPickForm, TimeEntryForm};
use crate::workflow::widgets::ComboSelect;
use crate::workflow::{Command, Controller, State};
use crate::{msg_print, msg_success};
use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use widgets::{ComboBuffer, ConsoleNotify, DateBuffer, TextBuffer};

const MENU: &[&str] = &[
    "Add time entry",
    "Delete entry",
    "Add project",
    "Delete project",
    "Project report",
    "Help",
    "Quit",
];

const CANCEL_LABEL: &str = "« Cancel";

/// Opens the database and runs the interactive loop to completion.
pub fn run() -> Result<()> {
    let db = Db::new()?;
    let mut controller = Controller::new(db, Box::new(ConsoleNotify))?;

    while controller.state() != State::Exited {
        match controller.state() {
            State::MainList => main_menu(&mut controller)?,
            State::AddTimeEntry => add_time_entry(&mut controller)?,
            State::AddProject => add_project(&mut controller)?,
            State::DeleteProject => delete_project(&mut controller)?,
            State::ProjectReport => project_report(&mut controller)?,
            State::Help | State::Exited => {}
        }
    }

    msg_print!(Message::Goodbye);
    Ok(())
}

fn main_menu(controller: &mut Controller) -> Result<()> {
    View::entries(controller.entries()).map_err(|e| anyhow!(e.to_string()))?;

    let choice = Select::with_theme(&ColorfulTheme::default())
        .items(MENU)
        .default(0)
        .interact()?;

    let command = match choice {
        0 => Command::AddTime,
        1 => match pick_entry(controller)? {
            Some(index) => {
                controller.dispatch(Command::DeleteEntry(index))?;
                msg_success!(Message::EntryDeleted);
                return Ok(());
            }
            None => return Ok(()),
        },
        2 => Command::AddProject,
        3 => Command::DeleteProject,
        4 => Command::Report,
        5 => Command::Help,
        _ => Command::Exit,
    };

    controller.dispatch(command)?;
    Ok(())
}

/// Highlights one entry of the listing for deletion. `None` means the user
/// backed out.
fn pick_entry(controller: &Controller) -> Result<Option<usize>> {
    let entries = controller.entries();
    if entries.is_empty() {
        msg_print!(Message::NoEntriesYet);
        return Ok(None);
    }

    let mut items: Vec<String> = entries
        .iter()
        .map(|e| format!("{}  |  {}  |  {}  |  {:.2}", e.date, e.project, e.desc, e.hours))
        .collect();
    items.push(CANCEL_LABEL.to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .items(&items)
        .default(0)
        .interact()?;

    if choice == entries.len() {
        return Ok(None);
    }
    Ok(Some(choice))
}

fn add_time_entry(controller: &mut Controller) -> Result<()> {
    let names = controller.project_names();
    if names.is_empty() {
        msg_print!(Message::NoProjectsYet);
        controller.cancel()?;
        return Ok(());
    }

    let date = prompt_date()?;
    let Some(project_index) = prompt_project(&names)? else {
        controller.cancel()?;
        return Ok(());
    };
    let desc: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let mut combo = ComboBuffer::default();
    combo.set_values(names);
    combo.select(Some(project_index));

    let mut form = TimeEntryForm {
        date: Box::new(DateBuffer::new(&date)),
        project: Box::new(combo),
        desc: Box::new(TextBuffer::new(&desc)),
        hours: Box::new(TextBuffer::default()),
    };

    // Re-prompt only the hours field after a failed parse; the rest of the
    // form keeps its values.
    while controller.state() == State::AddTimeEntry {
        let hours: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHours.to_string())
            .interact_text()?;
        form.hours.set(&hours);

        let save = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSave.to_string())
            .default(true)
            .interact()?;
        if !save {
            controller.cancel()?;
            return Ok(());
        }

        controller.confirm_time_entry(&mut form)?;
    }

    msg_success!(Message::TimeEntryAdded);
    Ok(())
}

fn add_project(controller: &mut Controller) -> Result<()> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptProjectName.to_string())
        .allow_empty(true)
        .interact_text()?;

    let save = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSave.to_string())
        .default(true)
        .interact()?;
    if !save {
        controller.cancel()?;
        return Ok(());
    }

    let form = ProjectForm {
        name: Box::new(TextBuffer::new(&name)),
    };
    controller.confirm_project(&form)?;

    msg_success!(Message::ProjectAdded(name));
    Ok(())
}

fn delete_project(controller: &mut Controller) -> Result<()> {
    // A refused deletion keeps the picker open, like the hours re-prompt.
    while controller.state() == State::DeleteProject {
        let Some(form) = pick_project_form(controller)? else {
            controller.cancel()?;
            return Ok(());
        };
        controller.confirm_delete_project(&form)?;
    }

    msg_success!(Message::ProjectDeleted);
    Ok(())
}

fn project_report(controller: &mut Controller) -> Result<()> {
    while controller.state() == State::ProjectReport {
        let Some(form) = pick_project_form(controller)? else {
            controller.cancel()?;
            return Ok(());
        };
        controller.confirm_report(&form)?;
    }

    Ok(())
}

/// Builds a picker form over the controller's project snapshot. `None` when
/// there is nothing to pick or the user backed out.
fn pick_project_form(controller: &Controller) -> Result<Option<ProjectPickForm>> {
    let names = controller.project_names();
    if names.is_empty() {
        msg_print!(Message::NoProjectsYet);
        return Ok(None);
    }

    let Some(index) = prompt_project(&names)? else {
        return Ok(None);
    };

    let mut combo = ComboBuffer::default();
    combo.set_values(names);
    combo.select(Some(index));

    Ok(Some(ProjectPickForm { project: Box::new(combo) }))
}

fn prompt_project(names: &[String]) -> Result<Option<usize>> {
    let mut items: Vec<String> = names.to_vec();
    items.push(CANCEL_LABEL.to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptProject.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    if choice == names.len() {
        return Ok(None);
    }
    Ok(Some(choice))
}

/// The external date-input capability: parses and defaults to today, so the
/// value handed to the store is already a well-formed calendar date.
fn prompt_date() -> Result<String> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDate.to_string())
        .default(today)
        .validate_with(|input: &String| -> Result<(), String> {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "Expected a date in YYYY-MM-DD form".to_string())
        })
        .interact_text()?;
    Ok(date)
}
