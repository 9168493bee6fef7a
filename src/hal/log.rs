//! Logging interface.
use defmt::Format;
use ufmt::{uDisplay, uWrite, Formatter};

/// Severity of a log record, from least to most severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Format)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// The system is about to stop for good.
    Fatal,
}

impl Severity {
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl uDisplay for Severity {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.tag())
    }
}

/// Sink for diagnostic records.
///
/// `format` is a fixed message; `module` and `location` identify where
/// the record comes from and must be reproduced verbatim.
pub trait Logger {
    fn log(&mut self, severity: Severity, format: &'static str, module: &str, location: i32);
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn log(&mut self, severity: Severity, format: &'static str, module: &str, location: i32) {
        (**self).log(severity, format, module, location)
    }
}
