//! Fixed-capacity gap buffer.
//!
//! The document lives in a single byte region allocated once at startup and
//! never resized:
//!
//! ```text
//!  [ text before gap | gap (free) | text after gap ]
//!    0..gap_start      gap_start..gap_end   gap_end..capacity
//! ```
//!
//! The *logical* document is the concatenation of the two text segments; the
//! gap never appears in it. Edits relocate the gap to the edit site first, so
//! sequential edits in the same neighborhood shift few bytes.
//!
//! Physical addresses (indices into the raw region, gap included) never leave
//! this module. Everything else in the crate speaks logical offsets in
//! `0..len()`.

/// Default storage capacity: 8 MiB, the whole document must fit.
pub const DEFAULT_CAPACITY: usize = 8 * 1024 * 1024;

/// A byte-oriented gap buffer of fixed capacity.
///
/// Insertion into a full buffer is *saturation*, not an error: the byte is
/// silently dropped and the document is unchanged.
#[derive(Clone)]
pub struct GapBuffer {
    /// Raw backing store, allocated once.
    buf: Box<[u8]>,
    /// Physical index of the first free byte.
    gap_start: usize,
    /// Physical index one past the last free byte.
    gap_end: usize,
    /// Set by successful edits, cleared by [`GapBuffer::mark_clean`].
    dirty: bool,
}

impl GapBuffer {
    /// Create an empty buffer; the gap spans the whole region.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            gap_start: 0,
            gap_end: capacity,
            dirty: false,
        }
    }

    /// Create a buffer pre-loaded with file content.
    ///
    /// Carriage returns are stripped on load and the content is truncated to
    /// `capacity`; the gap occupies the remainder of the region. A freshly
    /// loaded buffer is clean.
    pub fn from_bytes(bytes: &[u8], capacity: usize) -> Self {
        let mut gb = Self::with_capacity(capacity);
        let mut n = 0;
        for &b in bytes.iter().filter(|&&b| b != b'\r') {
            if n == capacity {
                break;
            }
            gb.buf[n] = b;
            n += 1;
        }
        gb.gap_start = n;
        gb
    }

    /// Total capacity of the storage region.
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Logical document length (capacity minus the gap).
    pub const fn len(&self) -> usize {
        self.buf.len() - self.gap_len()
    }

    /// Whether the document holds no bytes.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining free space, i.e. the current gap size.
    pub const fn free(&self) -> usize {
        self.gap_len()
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g. after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    const fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Translate a logical offset to a physical address.
    ///
    /// Offsets before the gap map 1:1; offsets at or after it skip the gap.
    const fn to_physical(&self, offset: usize) -> usize {
        if offset < self.gap_start {
            offset
        } else {
            offset + self.gap_len()
        }
    }

    /// Translate a physical address back to a logical offset.
    ///
    /// Inverse of [`Self::to_physical`] for every address outside the gap.
    const fn to_logical(&self, address: usize) -> usize {
        if address < self.gap_end {
            address
        } else {
            address - self.gap_len()
        }
    }

    /// The byte at logical offset `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= self.len()`.
    pub fn byte_at(&self, offset: usize) -> u8 {
        assert!(
            offset < self.len(),
            "byte_at: offset {offset} out of range (len {})",
            self.len()
        );
        self.buf[self.to_physical(offset)]
    }

    /// The logical document as two slices: text before and after the gap.
    pub fn slices(&self) -> (&[u8], &[u8]) {
        (&self.buf[..self.gap_start], &self.buf[self.gap_end..])
    }

    /// Copy the logical document into a contiguous vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let (head, tail) = self.slices();
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(head);
        out.extend_from_slice(tail);
        out
    }

    /// Relocate the gap so that it immediately precedes logical offset
    /// `target`.
    ///
    /// This is the only operation that moves bytes across the gap boundary;
    /// every edit calls it first. Afterwards `gap_start == target`.
    pub fn move_gap_to(&mut self, target: usize) {
        let target = target.min(self.len());
        let p = self.to_physical(target);
        while p < self.gap_start {
            self.gap_start -= 1;
            self.gap_end -= 1;
            self.buf[self.gap_end] = self.buf[self.gap_start];
        }
        while self.gap_end < p {
            self.buf[self.gap_start] = self.buf[self.gap_end];
            self.gap_start += 1;
            self.gap_end += 1;
        }
        debug_assert!(self.gap_start == target);
    }

    /// Insert a byte at `cursor` and return the new cursor offset
    /// (immediately after the inserted byte).
    ///
    /// Carriage return is normalized to newline. When the gap is exhausted
    /// the byte is dropped and the cursor is unchanged.
    pub fn insert(&mut self, cursor: usize, byte: u8) -> usize {
        self.move_gap_to(cursor);
        if self.gap_start < self.gap_end {
            self.buf[self.gap_start] = if byte == b'\r' { b'\n' } else { byte };
            self.gap_start += 1;
            self.dirty = true;
        }
        self.to_logical(self.gap_end)
    }

    /// Delete the byte before `cursor` and return the new cursor offset.
    ///
    /// No-op at document start.
    pub fn delete_back(&mut self, cursor: usize) -> usize {
        self.move_gap_to(cursor);
        if self.gap_start > 0 {
            self.gap_start -= 1;
            self.dirty = true;
        }
        self.to_logical(self.gap_end)
    }
}

impl std::fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GapBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("gap", &(self.gap_start..self.gap_end))
            .field("dirty", &self.dirty)
            .finish()
    }
}
