/// A place for the core to stop for good.
///
/// Implementations spin, sleep, or wait for a debugger, but never give
/// control back.
pub trait Park {
    fn park(&mut self) -> !;
}
