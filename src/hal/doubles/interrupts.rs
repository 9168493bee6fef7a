use super::journal::{Event, Journal};
use crate::hal::interrupts::InterruptControl;

#[derive(Debug)]
pub struct FakeInterrupts {
    pub enabled: bool,
    journal: Journal,
}

impl FakeInterrupts {
    pub fn new(journal: &Journal) -> Self { Self { enabled: true, journal: journal.clone() } }
}

impl InterruptControl for FakeInterrupts {
    fn disable(&mut self) {
        self.enabled = false;
        self.journal.push(Event::InterruptsDisabled);
    }

    fn enabled(&self) -> bool { self.enabled }
}
