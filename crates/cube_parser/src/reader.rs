//! Bounded byte reader used by every decoder.
//!
//! The reader owns the only read position of a parse. Lookahead goes
//! through [`Reader::peek`], which returns `None` past the end of the
//! message, so no decoder can index outside the declared length.

/// Byte cursor over one message.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Byte at `offset` past the current position, if it lies within the message.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        let index = self.pos.checked_add(offset)?;
        self.buf.get(index).copied()
    }

    /// Moves forward by `n` bytes, stopping at the end of the message.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.buf.len());
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Unconsumed part of the message.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}
