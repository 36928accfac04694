//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the lexer to detect end-of-input without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary for cache-line alignment, which also provides safe padding for
//! multi-byte lookahead near the end of the buffer.
//!
//! Interior null bytes are *not* the sentinel: a null at a position before
//! the source length is real (erroneous) content, and the cursor
//! distinguishes the two by position. The lexer reports embedded nulls as
//! diagnostics at the point it encounters them.
//!
//! # Byte Order Marks
//!
//! During construction the buffer checks the first bytes for a UTF-8 or
//! UTF-16 byte order mark. A detected mark is recorded (not stripped); the
//! lexer emits a diagnostic and skips it before the first token so lexing
//! proceeds as if it were absent.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Byte order mark kind detected at the start of a source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BomKind {
    /// `0xEF 0xBB 0xBF`.
    Utf8,
    /// `0xFF 0xFE`. The rest of the file cannot be lexed as bytes of
    /// UTF-8/ASCII, but the lexer still degrades gracefully.
    Utf16Le,
    /// `0xFE 0xFF`.
    Utf16Be,
}

/// A detected byte order mark: kind plus byte length.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Bom {
    pub kind: BomKind,
    pub len: u32,
}

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Byte order mark detected during construction, if any.
    bom: Option<Bom>,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from raw source bytes.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated at `u32::MAX`;
    /// callers are expected to reject multi-gigabyte files upstream.
    pub fn new(source: &[u8]) -> Self {
        let source_len = source.len().min(u32::MAX as usize);
        let source = &source[..source_len];

        // Round up to a 64-byte boundary with at least one full cache line
        // of zeros after the content, so bounded lookahead past the
        // sentinel never reads out of bounds.
        let padded_len = (source_len + 2 * CACHE_LINE) & !(CACHE_LINE - 1);

        // Allocate zero-filled buffer, then copy source bytes.
        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        let bom = detect_bom(source);

        #[expect(
            clippy::cast_possible_truncation,
            reason = "source_len clamped to u32::MAX above"
        )]
        let source_len = source_len as u32;

        Self {
            buf,
            source_len,
            bom,
        }
    }

    /// Create a buffer from source text.
    pub fn from_str(source: &str) -> Self {
        Self::new(source.as_bytes())
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Byte order mark detected at construction, if any.
    pub fn bom(&self) -> Option<Bom> {
        self.bom
    }
}

/// Detect a byte order mark at the start of the source.
fn detect_bom(source: &[u8]) -> Option<Bom> {
    match source {
        [0xEF, 0xBB, 0xBF, ..] => Some(Bom {
            kind: BomKind::Utf8,
            len: 3,
        }),
        [0xFF, 0xFE, ..] => Some(Bom {
            kind: BomKind::Utf16Le,
            len: 2,
        }),
        [0xFE, 0xFF, ..] => Some(Bom {
            kind: BomKind::Utf16Be,
            len: 2,
        }),
        _ => None,
    }
}
