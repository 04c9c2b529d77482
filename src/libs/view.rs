use crate::db::times::EntryRow;
use crate::libs::messages::Message;
use crate::msg_print;
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    pub fn entries(entries: &[EntryRow]) -> Result<(), Box<dyn Error>> {
        if entries.is_empty() {
            msg_print!(Message::NoEntriesYet);
            return Ok(());
        }

        let mut table = Table::new();

        table.add_row(row!["DATE", "PROJECT", "DESCRIPTION", "HOURS"]);
        for entry in entries {
            table.add_row(row![entry.date, entry.project, entry.desc, format!("{:.2}", entry.hours)]);
        }
        table.printstd();

        Ok(())
    }
}
