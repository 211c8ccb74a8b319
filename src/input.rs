use std::io::BufRead;

use crate::error::InputError;

/// Line source for the command loop.
pub struct InputBuffer<R> {
    reader: R,
    raw: Vec<u8>,
    buffer: String,
}

impl<R: BufRead> InputBuffer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Reads the next line with surrounding whitespace removed. Bytes that
    /// are not UTF-8 are replaced rather than ending the run.
    pub fn read_input(&mut self) -> Result<&str, InputError> {
        self.raw.clear();
        if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
            return Err(InputError::Eof);
        }
        self.buffer = String::from_utf8_lossy(&self.raw).into_owned();
        Ok(self.buffer.trim())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn it_strips_line_terminators() {
        let mut input = InputBuffer::new(Cursor::new("select\r\n.exit"));
        assert_eq!(input.read_input().unwrap(), "select");
        assert_eq!(input.read_input().unwrap(), ".exit");
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut input = InputBuffer::new(Cursor::new("\n"));
        assert_eq!(input.read_input().unwrap(), "");
        assert!(matches!(input.read_input(), Err(InputError::Eof)));
    }

    #[test]
    fn invalid_utf8_is_replaced_and_reading_continues() {
        let mut input = InputBuffer::new(Cursor::new(&b"insert 1 jos\xe9 a@b.com\nselect\n"[..]));
        assert_eq!(input.read_input().unwrap(), "insert 1 jos\u{FFFD} a@b.com");
        assert_eq!(input.read_input().unwrap(), "select");
        assert!(matches!(input.read_input(), Err(InputError::Eof)));
    }
}
