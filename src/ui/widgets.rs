//! Concrete widget implementations for the console front end.
//!
//! Prompt results are collected into plain buffers implementing the
//! workflow capability traits; the controller never sees dialoguer.

use crate::msg_print;
use crate::workflow::widgets::{ComboSelect, DateInput, Notify, TextInput};

#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    value: String,
}

impl TextBuffer {
    pub fn new(value: &str) -> Self {
        TextBuffer { value: value.to_string() }
    }
}

impl TextInput for TextBuffer {
    fn get(&self) -> String {
        self.value.clone()
    }

    fn set(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

#[derive(Debug, Default, Clone)]
pub struct ComboBuffer {
    values: Vec<String>,
    selected: Option<usize>,
}

impl ComboSelect for ComboBuffer {
    fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
        self.selected = None;
    }

    fn values(&self) -> &[String] {
        &self.values
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }
}

#[derive(Debug, Default, Clone)]
pub struct DateBuffer {
    value: String,
}

impl DateBuffer {
    pub fn new(value: &str) -> Self {
        DateBuffer { value: value.to_string() }
    }
}

impl DateInput for DateBuffer {
    fn get(&self) -> String {
        self.value.clone()
    }
}

/// Renders notifications as framed console blocks, the stand-in for the
/// modal dialogs of a full-screen toolkit.
pub struct ConsoleNotify;

impl Notify for ConsoleNotify {
    fn show(&mut self, title: &str, message: &str) {
        msg_print!(format!("\n--- {} ---\n{}\n", title, message));
    }
}
