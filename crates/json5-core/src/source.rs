//! The character-source collaborator read by the parser.
//!
//! The engine needs exactly two operations: read the next byte (or learn
//! the input is exhausted) and push the most recently read byte back.
//! One byte of pushback is all the recursive-descent grammar requires,
//! so genuinely incremental sources can implement this with a single
//! spare slot.

/// Sequential byte access with single-byte pushback.
pub trait ByteSource {
    /// Read the next byte, or `None` at end of input.
    fn read(&mut self) -> Option<u8>;

    /// Push back the most recently read byte. The parser never unreads
    /// more than one byte between reads, and only ever unreads the byte
    /// it was just handed.
    fn unread(&mut self, byte: u8);
}

/// A [`ByteSource`] over a fixed in-memory buffer.
#[derive(Debug)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceSource { bytes, pos: 0 }
    }

    /// Bytes not yet consumed (useful after a streaming-mode parse).
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn unread(&mut self, byte: u8) {
        debug_assert!(self.pos > 0 && self.bytes[self.pos - 1] == byte);
        self.pos -= 1;
    }
}
