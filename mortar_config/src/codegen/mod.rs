//! Code generation for the mortar build script.
use std::{fs::File, io::Write, path::Path};

use anyhow::Result;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::{features::ChecksumTable, Configuration};

pub mod linker_script;

/// Writes `config.rs` (and `memory.x`, for real boards) into `out_dir`.
pub fn generate_modules<P: AsRef<Path>>(out_dir: P, configuration: &Configuration) -> Result<()> {
    let mut file = File::create(out_dir.as_ref().join("config.rs"))?;
    file.write_all(format!("{}", config_tokens(configuration)).as_bytes())?;
    linker_script::generate_linker_script(out_dir, configuration)?;
    Ok(())
}

pub fn config_tokens(configuration: &Configuration) -> TokenStream {
    let heap_size = configuration.heap.size;
    let level = format_ident!("{}", configuration.logging.level.severity_name());
    let color = configuration.logging.color;
    let errno = configuration.errno;
    let static_table = configuration.checksum_table == ChecksumTable::Static;

    let debug_uart = match configuration.port.debug_uart() {
        Some(uart) => {
            let peripheral = uart.peripheral;
            let (tx_bank, tx_index) = (uart.tx.bank, uart.tx.index);
            let (rx_bank, rx_index) = (uart.rx.bank, uart.rx.index);
            let baud_rate = uart.baud_rate;
            quote! {
                Some(crate::ports::DebugUart {
                    peripheral: #peripheral,
                    tx: crate::ports::Pin { bank: #tx_bank, index: #tx_index },
                    rx: crate::ports::Pin { bank: #rx_bank, index: #rx_index },
                    baud_rate: #baud_rate,
                })
            }
        }
        None => quote! { None },
    };

    quote! {
        /// Size of the heap region handed to the OS allocator.
        pub const HEAP_SIZE_BYTES: usize = #heap_size;
        /// Lowest severity written to the debug UART.
        pub const MAX_LOG_LEVEL: crate::hal::log::Severity = crate::hal::log::Severity::#level;
        /// Serial log lines carry ANSI colour codes.
        pub const LOG_COLOR: bool = #color;
        /// The linked C library provides an errno channel.
        pub const ERRNO_CHANNEL: bool = #errno;
        /// The CRC-32 table is precomputed rather than generated in RAM.
        pub const STATIC_CHECKSUM_TABLE: bool = #static_table;
        /// Board UART dedicated to diagnostics, if any.
        pub const DEBUG_UART: Option<crate::ports::DebugUart> = #debug_uart;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{features::Level, port::Port};

    #[test]
    fn generated_constants_reflect_configuration() {
        // Given
        let mut configuration = Configuration::default();
        configuration.port = Port::Stm32F412;
        configuration.logging.level = Level::Warn;
        configuration.checksum_table = ChecksumTable::Static;

        // When
        let code = config_tokens(&configuration).to_string();

        // Then
        assert!(code.contains("Severity :: Warn"));
        assert!(code.contains("STATIC_CHECKSUM_TABLE : bool = true"));
        assert!(code.contains("\"USART2\""));
        assert!(code.contains("8192usize"));
    }

    #[test]
    fn host_has_no_debug_uart() {
        let code = config_tokens(&Configuration::default()).to_string();
        assert!(code.contains("DebugUart > = None"));
    }
}
