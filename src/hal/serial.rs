use core::fmt::Debug;

/// UART write half
pub trait Write {
    type Error: Copy + Debug;

    /// Writes a single byte
    fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Writes a whole string, blocking on every byte
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        text.bytes().try_for_each(|byte| nb::block!(self.write(byte)))
    }
}

/// Lends a serial write half to the `ufmt` machinery, so records can
/// be composed with `uwrite!` without an intermediate buffer.
pub struct Formatted<'a, S: Write>(pub &'a mut S);

impl<'a, S: Write> ufmt::uWrite for Formatted<'a, S> {
    type Error = S::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> { self.0.write_str(s) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hal::doubles::serial::SerialSink;
    use ufmt::uwrite;

    #[test]
    fn strings_are_written_byte_by_byte() {
        // Given
        let mut sink = SerialSink::default();
        let arbitrary_message = "Hello world!";

        // When
        sink.write_str(arbitrary_message).unwrap();

        // Then
        assert_eq!(arbitrary_message.as_bytes(), &sink.record[..]);
    }

    #[test]
    fn formatted_adaptor_composes_with_ufmt() {
        // Given
        let mut sink = SerialSink::default();

        // When
        let mut formatted = Formatted(&mut sink);
        uwrite!(formatted, "{}:{}", "kernel", -42i32).unwrap();

        // Then
        assert_eq!(sink.text(), "kernel:-42");
    }

    #[test]
    fn write_errors_stop_the_transfer() {
        // Given
        let mut sink = SerialSink::failing_after(3);

        // When
        let result = sink.write_str("abcdef");

        // Then
        assert!(result.is_err());
        assert_eq!(sink.text(), "abc");
    }
}
