use std::env;

use enum_iterator::IntoEnumIterator;
use serde::{Deserialize, Serialize};

use crate::port::Port;

/// Lowest severity that reaches the debug UART. Fatal records
/// always get through, so there is no level to silence them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for Level {
    fn default() -> Self { Level::Info }
}

impl Level {
    /// Name of the matching `Severity` variant in the mortar library.
    pub fn severity_name(&self) -> &'static str {
        match self {
            Level::Trace => "Trace",
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warn => "Warn",
            Level::Error => "Error",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoggingConfiguration {
    pub level: Level,
    pub color: bool,
}

/// How the CRC-32 lookup table is produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecksumTable {
    /// Precomputed table, lives in flash.
    Static,
    /// Generated in RAM on first use.
    Dynamic,
}

impl Default for ChecksumTable {
    fn default() -> Self { ChecksumTable::Dynamic }
}

/// Cargo features the crate is being built with, as seen by its build script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub board: Option<Port>,
    pub log_color: bool,
    pub errno: bool,
    pub crc_static_table: bool,
}

impl Features {
    pub fn from_env() -> Self {
        let enabled = |feature: &str| {
            let variable = format!("CARGO_FEATURE_{}", feature.to_uppercase().replace('-', "_"));
            env::var_os(variable).is_some()
        };

        Self {
            board: Port::into_enum_iter()
                .filter(|port| *port != Port::Host)
                .find(|port| enabled(&port.to_string())),
            log_color: enabled("log-color"),
            errno: enabled("errno"),
            crc_static_table: enabled("crc-static-table"),
        }
    }
}
