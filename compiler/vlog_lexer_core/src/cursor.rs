//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte-by-byte and tracks the start-of-lexeme marker.
//! End-of-input is detected when the current byte is the sentinel (`0x00`)
//! *and* the position has reached the source length; a null byte at an
//! earlier position is embedded (erroneous) content, not the end.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when more needles are
/// required than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// `Copy` makes state snapshots cheap for bounded lookahead.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and all bytes after `source_len` are `0x00`
/// (cache-line padding). Guaranteed by `SourceBuffer` construction; the
/// padding makes `peek_n` safe for small offsets at any position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Start-of-lexeme marker set by [`mark()`](Self::mark).
    mark: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            mark: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at end-of-input (the sentinel). Embedded null bytes
    /// also return `0x00`; use [`at_real_end()`](Self::at_real_end) to
    /// distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte `offset` positions ahead of current.
    ///
    /// Safe for offsets up to the cache-line padding (63 bytes); the lexer
    /// never looks further than 3 bytes ahead.
    #[inline]
    pub fn peek_n(&self, offset: u32) -> u8 {
        self.buf[(self.pos + offset) as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_n(1)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Advance past the next byte iff it equals `expected`.
    #[inline]
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` when the cursor has reached the true end of input,
    /// as opposed to an embedded null byte.
    #[inline]
    pub fn at_real_end(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Set the start-of-lexeme marker to the current position.
    #[inline]
    pub fn mark(&mut self) {
        self.mark = self.pos;
    }

    /// Start-of-lexeme marker position.
    #[inline]
    pub fn marked(&self) -> u32 {
        self.mark
    }

    /// The current lexeme: bytes from the marker to the current position.
    #[inline]
    pub fn lexeme(&self) -> &'a [u8] {
        &self.buf[self.mark as usize..self.pos as usize]
    }

    /// Length of the current lexeme in bytes.
    #[inline]
    pub fn lexeme_len(&self) -> u32 {
        self.pos - self.mark
    }

    /// Extract an arbitrary source range.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end && end <= self.source_len);
        &self.buf[start as usize..end as usize]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop;
    /// this holds for all byte-class predicates the lexer uses.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Number of bytes of horizontal whitespace (space, tab, vertical tab,
    /// form feed) starting at `offset` positions ahead.
    ///
    /// Used for the lookahead between a vector literal's size digits and
    /// its base apostrophe, where whitespace does not end the literal.
    pub fn horizontal_whitespace_run(&self, offset: u32) -> u32 {
        let mut lookahead = offset;
        while matches!(self.peek_n(lookahead), b' ' | b'\t' | 0x0B | 0x0C) {
            lookahead += 1;
        }
        lookahead - offset
    }

    /// Advance to the next `\r`, `\n`, or null byte using SIMD search.
    /// Returns the byte found (`0` may be an embedded null or the end).
    ///
    /// Used by the line-comment scanner.
    #[allow(clippy::cast_possible_truncation)] // offset < source_len, fits u32
    pub fn skip_to_line_end(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(b'\n', b'\r', 0, remaining);
        if let Some(off) = primary {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past ordinary string content to the next interesting byte:
    /// `"`, `\`, `\n`, `\r`, or a null. Returns the byte found.
    #[allow(clippy::cast_possible_truncation)] // offset < source_len, fits u32
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(b'"', b'\\', b'\n', remaining);
        let secondary = memchr::memchr2(b'\r', 0, remaining);

        if let Some(off) = earliest_of(primary, secondary) {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }
}
