//! Board support declarations. Each supported board dedicates one UART
//! to diagnostics; which one is decided by the configuration file and
//! surfaces here as [`DEBUG_UART`]. Only logger implementations look at
//! it. Bringing the peripheral up is the board's business.
use core::fmt;
use ufmt::{uDisplay, uWrite, Formatter};

pub use crate::config::DEBUG_UART;

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

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "P{}{}", self.bank, self.index) }
}

impl uDisplay for Pin {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let mut bank = [0u8; 4];
        f.write_str("P")?;
        f.write_str(self.bank.encode_utf8(&mut bank))?;
        uDisplay::fmt(&self.index, f)
    }
}
