use crate::hal::serial;
use std::vec::Vec;

/// Records every byte written. Optionally starts failing after a
/// number of bytes, to exercise error paths.
#[derive(Debug, Default)]
pub struct SerialSink {
    pub record: Vec<u8>,
    fail_after: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SinkFull;

impl SerialSink {
    pub fn failing_after(bytes: usize) -> Self { Self { record: Vec::new(), fail_after: Some(bytes) } }
    pub fn text(&self) -> String { String::from_utf8_lossy(&self.record).into_owned() }
}

impl serial::Write for SerialSink {
    type Error = SinkFull;

    fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        match self.fail_after {
            Some(limit) if self.record.len() >= limit => Err(nb::Error::Other(SinkFull)),
            _ => {
                self.record.push(byte);
                Ok(())
            }
        }
    }
}
