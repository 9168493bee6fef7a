//! Process-wide run state.
//!
//! The system starts `Running` with interrupts enabled and may be moved
//! to `Halted`, with interrupts masked, by the fault trampoline. There
//! is no way back.
use crate::hal::interrupts::InterruptControl;
use core::sync::atomic::{AtomicBool, Ordering};
use defmt::Format;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Format)]
pub enum SystemState {
    Running,
    Halted,
}

/// One-way `Running -> Halted` latch.
///
/// The token is the only path that touches both process-wide flags: the
/// halted latch it stores and the core's interrupt mask, which stays in
/// hardware and is reached through [`InterruptControl`]. [`halt`] masks
/// interrupts before latching, and neither flag is ever cleared.
///
/// [`halt`]: StateToken::halt
pub struct StateToken {
    halted: AtomicBool,
}

impl StateToken {
    pub const fn new() -> Self { Self { halted: AtomicBool::new(false) } }

    pub fn state(&self) -> SystemState {
        if self.halted.load(Ordering::SeqCst) {
            SystemState::Halted
        } else {
            SystemState::Running
        }
    }

    /// Masks interrupts and latches `Halted`. Returns `true` if this call
    /// performed the transition, `false` if the system was already halted.
    pub(crate) fn halt<I: InterruptControl>(&self, interrupts: &mut I) -> bool {
        interrupts.disable();
        !self.halted.swap(true, Ordering::SeqCst)
    }
}

impl Default for StateToken {
    fn default() -> Self { Self::new() }
}

/// The run state of this execution.
pub static SYSTEM_STATE: StateToken = StateToken::new();
