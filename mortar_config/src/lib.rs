//! This mortar sub-crate contains all definitions to help generate
//! the final mortar library and firmware.
//!
//! NOTE: This code is not included anywhere from mortar itself! This
//! is a dependency of the mortar **build script**. The build script
//! uses this dependency to help generate the code that mortar includes
//! (heap size, logging constants, debug UART declaration, memory map).

#[macro_export(local_inner_macros)]
macro_rules! KB {
    ($val:expr) => {
        $val * 1024
    };
}

use std::fmt::Display;

use anyhow::{bail, Result};
use features::{ChecksumTable, Features, LoggingConfiguration};
use port::Port;
use serde::{Deserialize, Serialize};

pub mod codegen;
pub mod features;
pub mod port;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeapConfiguration {
    /// Size of the single heap region handed to the OS allocator.
    pub size: usize,
}

impl Default for HeapConfiguration {
    fn default() -> Self { Self { size: KB!(8) } }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    pub port: Port,
    pub heap: HeapConfiguration,
    pub logging: LoggingConfiguration,
    pub errno: bool,
    pub checksum_table: ChecksumTable,
}

impl Configuration {
    pub fn complete(&self) -> bool { self.required_configuration_steps().next().is_none() }

    pub fn required_configuration_steps(&self) -> impl Iterator<Item = RequiredConfigurationStep> {
        let ram = self.port.linker_script_constants().map(|c| c.ram.size);
        [
            (self.heap.size == 0).then(|| RequiredConfigurationStep::HeapSize),
            ram.filter(|&ram| self.heap.size >= ram)
                .map(|_| RequiredConfigurationStep::HeapFitsInRam),
        ]
        .into_iter()
        .flatten()
    }

    /// Ensures the cargo features the crate is being built with agree
    /// with what the configuration file asks for.
    pub fn validate(&self, features: &Features) -> Result<()> {
        if let Some(step) = self.required_configuration_steps().next() {
            bail!("Incomplete configuration: {}", step);
        }

        if let Some(board) = features.board {
            if board != self.port {
                bail!(
                    "Mismatching board in configuration file. Features require {}, configuration requires {}",
                    board,
                    self.port
                );
            }
        } else if self.port != Port::Host {
            bail!(
                "Configuration targets {}, but no board feature is enabled. Enable feature `{}`",
                self.port,
                self.port
            );
        }

        if features.log_color && !self.logging.color {
            bail!("Configuration mismatch. Feature flags require `log-color`, but it is disabled in the configuration file");
        }

        if features.errno != self.errno {
            bail!("Configuration mismatch. Feature `errno` and the configuration file disagree on the errno channel");
        }

        if features.crc_static_table != (self.checksum_table == ChecksumTable::Static) {
            bail!("Configuration mismatch. Feature `crc-static-table` and the configuration file disagree on the checksum table");
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RequiredConfigurationStep {
    HeapSize,
    HeapFitsInRam,
}

impl Display for RequiredConfigurationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RequiredConfigurationStep::HeapSize => "[Heap] Specify a non-zero heap size",
            RequiredConfigurationStep::HeapFitsInRam => {
                "[Heap] Heap size must leave room for stack and statics in RAM"
            }
        })
    }
}
