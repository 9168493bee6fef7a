//! Logger implementations.
//!
//! [`SerialLogger`] writes one line per record to the board's debug
//! UART. On target, [`DefmtLogger`] hands records to `defmt` instead.
use crate::{
    config,
    hal::{
        log::{Logger, Severity},
        serial::{Formatted, Write},
    },
    ports::{DebugUart, DEBUG_UART},
};
use ufmt::{uwrite, uwriteln};

const RESET: &str = "\x1b[0m";

fn color(severity: Severity) -> &'static str {
    match severity {
        Severity::Trace => "\x1b[2m",
        Severity::Debug => "\x1b[36m",
        Severity::Info => "\x1b[32m",
        Severity::Warn => "\x1b[33m",
        Severity::Error => "\x1b[31m",
        Severity::Fatal => "\x1b[1;31m",
    }
}

pub struct SerialLogger<S: Write> {
    serial: S,
    level: Severity,
    color: bool,
}

impl<S: Write> SerialLogger<S> {
    /// Logger following the build configuration.
    pub fn new(serial: S) -> Self { Self::with_settings(serial, config::MAX_LOG_LEVEL, config::LOG_COLOR) }

    pub fn with_settings(serial: S, level: Severity, color: bool) -> Self {
        Self { serial, level, color }
    }

    pub fn serial(&mut self) -> &mut S { &mut self.serial }

    /// Opens the log with an info record naming the board's debug UART,
    /// if the board declares one.
    pub fn announce(&mut self) {
        if let Some(uart) = DEBUG_UART {
            self.announce_uart(&uart);
        }
    }

    pub fn announce_uart(&mut self, uart: &DebugUart) {
        if Severity::Info < self.level {
            return;
        }
        self.write_banner(uart).ok();
    }

    fn write_tag(&mut self, severity: Severity) -> Result<(), S::Error> {
        let colored = self.color;
        let mut serial = Formatted(&mut self.serial);
        if colored {
            uwrite!(serial, "{}[{}]{} ", color(severity), severity, RESET)
        } else {
            uwrite!(serial, "[{}] ", severity)
        }
    }

    fn write_banner(&mut self, uart: &DebugUart) -> Result<(), S::Error> {
        self.write_tag(Severity::Info)?;
        let mut serial = Formatted(&mut self.serial);
        uwriteln!(
            serial,
            "debug log on {} (tx {}, rx {}, {} baud)",
            uart.peripheral,
            uart.tx,
            uart.rx,
            uart.baud_rate
        )
    }

    fn write_record(
        &mut self,
        severity: Severity,
        format: &str,
        module: &str,
        location: i32,
    ) -> Result<(), S::Error> {
        self.write_tag(severity)?;
        let mut serial = Formatted(&mut self.serial);
        uwriteln!(serial, "{} ({}:{})", format, module, location)
    }
}

impl<S: Write> Logger for SerialLogger<S> {
    fn log(&mut self, severity: Severity, format: &'static str, module: &str, location: i32) {
        if severity < self.level && severity != Severity::Fatal {
            return;
        }
        // Nowhere left to report a failing debug UART.
        self.write_record(severity, format, module, location).ok();
    }
}

/// Forwards records to `defmt`. Verbosity is governed by the
/// `defmt-*` cargo features.
#[cfg(target_arch = "arm")]
pub struct DefmtLogger;

#[cfg(target_arch = "arm")]
impl Logger for DefmtLogger {
    fn log(&mut self, severity: Severity, format: &'static str, module: &str, location: i32) {
        match severity {
            Severity::Trace => defmt::trace!("{} ({}:{})", format, module, location),
            Severity::Debug => defmt::debug!("{} ({}:{})", format, module, location),
            Severity::Info => defmt::info!("{} ({}:{})", format, module, location),
            Severity::Warn => defmt::warn!("{} ({}:{})", format, module, location),
            Severity::Error | Severity::Fatal => {
                defmt::error!("[{}] {} ({}:{})", severity, format, module, location)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{hal::doubles::serial::SerialSink, ports::Pin};

    #[test]
    fn fatal_records_carry_module_and_location() {
        // Given
        let mut logger = SerialLogger::with_settings(SerialSink::default(), Severity::Info, false);

        // When
        logger.log(Severity::Fatal, "assertion failed", "qf_act", 42);

        // Then
        assert_eq!(logger.serial().text(), "[FATAL] assertion failed (qf_act:42)\n");
    }

    #[test]
    fn records_below_the_configured_level_are_dropped() {
        // Given
        let mut logger = SerialLogger::with_settings(SerialSink::default(), Severity::Warn, false);

        // When
        logger.log(Severity::Info, "chatter", "app", 1);
        logger.log(Severity::Warn, "careful", "app", 2);

        // Then
        assert_eq!(logger.serial().text(), "[WARN] careful (app:2)\n");
    }

    #[test]
    fn fatal_records_are_never_filtered() {
        // Given
        let mut logger = SerialLogger::with_settings(SerialSink::default(), Severity::Fatal, false);

        // When
        logger.log(Severity::Error, "dropped", "app", 1);
        logger.log(Severity::Fatal, "kept", "app", 2);

        // Then
        assert_eq!(logger.serial().text(), "[FATAL] kept (app:2)\n");
    }

    #[test]
    fn colored_records_wrap_the_severity_tag() {
        // Given
        let mut logger = SerialLogger::with_settings(SerialSink::default(), Severity::Trace, true);

        // When
        logger.log(Severity::Error, "bad", "drv", -3);

        // Then
        assert_eq!(logger.serial().text(), "\x1b[31m[ERROR]\x1b[0m bad (drv:-3)\n");
    }

    #[test]
    fn failing_serial_does_not_disturb_the_caller() {
        // Given
        let mut logger =
            SerialLogger::with_settings(SerialSink::failing_after(4), Severity::Trace, false);

        // When
        logger.log(Severity::Fatal, "assertion failed", "qf_act", 42);

        // Then
        assert_eq!(logger.serial().text(), "[FAT");
    }

    #[test]
    fn announcement_names_the_debug_uart() {
        // Given
        let uart = DebugUart {
            peripheral: "USART2",
            tx: Pin { bank: 'a', index: 2 },
            rx: Pin { bank: 'a', index: 3 },
            baud_rate: 115_200,
        };
        let mut logger = SerialLogger::with_settings(SerialSink::default(), Severity::Info, false);

        // When
        logger.announce_uart(&uart);

        // Then
        assert_eq!(logger.serial().text(), "[INFO] debug log on USART2 (tx Pa2, rx Pa3, 115200 baud)\n");
    }

    #[test]
    fn announcement_respects_the_configured_level() {
        // Given
        let uart = DebugUart {
            peripheral: "USART0",
            tx: Pin { bank: 'e', index: 10 },
            rx: Pin { bank: 'e', index: 11 },
            baud_rate: 115_200,
        };
        let mut logger = SerialLogger::with_settings(SerialSink::default(), Severity::Warn, false);

        // When
        logger.announce_uart(&uart);

        // Then
        assert!(logger.serial().text().is_empty());
    }

    #[test]
    fn announcement_follows_the_configured_board() {
        let mut logger = SerialLogger::with_settings(SerialSink::default(), Severity::Trace, false);
        logger.announce();
        match DEBUG_UART {
            Some(uart) => assert!(logger.serial().text().contains(uart.peripheral)),
            None => assert!(logger.serial().text().is_empty()),
        }
    }

    #[test]
    fn default_logger_follows_build_configuration() {
        let mut logger = SerialLogger::new(SerialSink::default());
        logger.log(Severity::Fatal, "boom", "cfg", 0);
        assert!(logger.serial().text().contains("boom (cfg:0)"));
    }
}
