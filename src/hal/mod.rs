//! Hardware Abstraction Layer, containing the interfaces mortar
//! consumes: the OS heap, the interrupt mask, the terminal wait,
//! the logger and the debug serial port.

pub mod heap;
pub mod idle;
pub mod interrupts;
pub mod log;
pub mod serial;

#[cfg(not(target_arch = "arm"))]
#[doc(hidden)]
pub mod doubles;
