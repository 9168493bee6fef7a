//! Driver implementations for the supported targets. Host builds
//! use the doubles in `hal::doubles` instead.

#[cfg(target_arch = "arm")]
pub mod cortex;
pub mod header;
