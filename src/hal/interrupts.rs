/// Global interrupt mask of the core.
pub trait InterruptControl {
    /// Masks every maskable interrupt.
    fn disable(&mut self);
    /// Whether interrupts are currently unmasked.
    fn enabled(&self) -> bool;
}
