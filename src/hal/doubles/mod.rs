//! Test doubles for the HAL interfaces. Host only.
//!
//! The fault-path doubles share a [`Journal`](journal::Journal), so a
//! test can check the order in which the trampoline touched them.

pub mod heap;
pub mod idle;
pub mod interrupts;
pub mod journal;
pub mod log;
pub mod serial;
