//! Mortar error types

use defmt::Format;

/// Reasons a memory request is refused. None of these are fatal: the
/// C-shaped allocation surface turns every one of them into a null
/// pointer and lets the caller decide.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Format)]
pub enum Error {
    /// The OS heap couldn't satisfy the request
    OutOfMemory,
    /// `count * size` doesn't fit in a `usize`
    SizeOverflow,
    /// Zero-sized requests are never forwarded
    ZeroSize,
    /// The requested alignment exceeds what the OS heap guarantees
    UnsupportedAlignment,
}
