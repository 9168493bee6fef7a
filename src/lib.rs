//! # Mortar
//!
//! Glue between a nano-kernel and the Rust runtime on Cortex-M
//! targets, in library form: an allocator bridge forwarding every
//! allocation to the OS heap, and a fault trampoline that turns a
//! failed kernel assertion into a logged, permanent halt.
#![cfg_attr(test, allow(unused_imports))]
#![cfg_attr(target_arch = "arm", no_std)]

extern crate static_assertions;

pub mod utilities {
    pub mod checksum;
}

pub mod config;
pub mod hal;
pub mod devices;
pub mod drivers;
pub mod ports;
pub mod error;
#[macro_use]
pub mod runtime;
