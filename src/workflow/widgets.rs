//! Capability traits for the external input toolkit.
//!
//! The workflow controller never touches concrete prompt or widget types;
//! it only sees these seams. The interactive front end backs them with
//! dialoguer-filled buffers, tests back them with fakes.

/// A plain text field.
pub trait TextInput {
    fn get(&self) -> String;
    fn set(&mut self, value: &str);
}

/// A single-choice selector over a list of display values.
pub trait ComboSelect {
    fn set_values(&mut self, values: Vec<String>);
    fn values(&self) -> &[String];
    fn selected_index(&self) -> Option<usize>;
    fn select(&mut self, index: Option<usize>);
}

/// A date field. The capability owns date parsing; the returned value is
/// passed through to the store as-is.
pub trait DateInput {
    fn get(&self) -> String;
}

/// Modal notification surface for errors, reports, and help text.
pub trait Notify {
    fn show(&mut self, title: &str, message: &str);
}
