use super::super::log::Severity;
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    InterruptsDisabled,
    Logged { severity: Severity, format: &'static str, module: String, location: i32 },
    Parked,
}

/// Ordered record of everything the fault-path doubles were asked to do.
#[derive(Clone, Debug, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    pub fn push(&self, event: Event) { self.0.borrow_mut().push(event) }
    pub fn events(&self) -> Vec<Event> { self.0.borrow().clone() }
}
