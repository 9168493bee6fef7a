use super::journal::{Event, Journal};
use crate::hal::log::{Logger, Severity};

#[derive(Debug)]
pub struct RecordingLogger {
    journal: Journal,
}

impl RecordingLogger {
    pub fn new(journal: &Journal) -> Self { Self { journal: journal.clone() } }
}

impl Logger for RecordingLogger {
    fn log(&mut self, severity: Severity, format: &'static str, module: &str, location: i32) {
        self.journal.push(Event::Logged { severity, format, module: module.into(), location });
    }
}
