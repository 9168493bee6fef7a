//! Board support declarations. Nothing here touches a peripheral;
//! it only records which UART each supported board uses for
//! diagnostics, and where its memory lives.
use std::fmt::Display;

use enum_iterator::IntoEnumIterator;
use serde::{Deserialize, Serialize};

use crate::KB;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, IntoEnumIterator)]
pub enum Port {
    Stm32F412,
    Stm32F446,
    Wgm160P,
    /// Not a board: host builds used for testing.
    Host,
}

impl Default for Port {
    fn default() -> Self { Self::Host }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pin {
    pub bank: char,
    pub index: u8,
}

/// Serial peripheral and pins a board dedicates to diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DebugUart {
    pub peripheral: &'static str,
    pub tx: Pin,
    pub rx: Pin,
    pub baud_rate: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkerArea {
    pub origin: u32,
    pub size: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkerScriptConstants {
    pub flash: LinkerArea,
    pub ram: LinkerArea,
}

impl Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Port::Stm32F412 => "stm32f412",
            Port::Stm32F446 => "stm32f446",
            Port::Wgm160P => "wgm160p",
            Port::Host => "host",
        })
    }
}

impl Port {
    pub fn debug_uart(&self) -> Option<DebugUart> {
        match self {
            Port::Stm32F412 | Port::Stm32F446 => Some(DebugUart {
                peripheral: "USART2",
                tx: Pin { bank: 'a', index: 2 },
                rx: Pin { bank: 'a', index: 3 },
                baud_rate: 115_200,
            }),
            Port::Wgm160P => Some(DebugUart {
                peripheral: "USART0",
                tx: Pin { bank: 'e', index: 10 },
                rx: Pin { bank: 'e', index: 11 },
                baud_rate: 115_200,
            }),
            Port::Host => None,
        }
    }

    // We might consider making these configurable later, but the need hasn't come up yet.
    pub fn linker_script_constants(&self) -> Option<LinkerScriptConstants> {
        match self {
            Port::Stm32F412 => Some(LinkerScriptConstants {
                flash: LinkerArea { origin: 0x08000000, size: KB!(1024) },
                ram: LinkerArea { origin: 0x20000000, size: KB!(256) },
            }),
            Port::Stm32F446 => Some(LinkerScriptConstants {
                flash: LinkerArea { origin: 0x08000000, size: KB!(512) },
                ram: LinkerArea { origin: 0x20000000, size: KB!(128) },
            }),
            Port::Wgm160P => Some(LinkerScriptConstants {
                flash: LinkerArea { origin: 0x00000000, size: KB!(1024) },
                ram: LinkerArea { origin: 0x20000000, size: KB!(128) },
            }),
            Port::Host => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_board_declares_a_debug_uart_and_memory() {
        for port in Port::into_enum_iter().filter(|p| *p != Port::Host) {
            assert!(port.debug_uart().is_some(), "{} has no debug UART", port);
            assert!(port.linker_script_constants().is_some(), "{} has no memory map", port);
        }
    }

    #[test]
    fn host_declares_nothing() {
        assert_eq!(Port::Host.debug_uart(), None);
        assert_eq!(Port::Host.linker_script_constants(), None);
    }
}
