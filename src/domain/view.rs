//! Zero-copy read access to a universe's current generation.
//!
//! A [`CellsView`] borrows the universe, so the borrow checker already
//! rejects a mutating call while a view is alive. Consumers that cannot hold
//! a borrow across frames (an FFI renderer, a frame loop that stores state
//! between callbacks) keep a [`ViewHandle`] instead and resolve it each frame;
//! resolution fails once any mutating call has bumped the universe's epoch.

/// Borrowed view of the current buffer: one byte per cell, `0` dead and
/// `1` alive, row-major, exactly `width * height` bytes.
#[derive(Clone, Copy, Debug)]
pub struct CellsView<'a> {
    bytes: &'a [u8],
    width: usize,
    height: usize,
    epoch: u64,
}

impl<'a> CellsView<'a> {
    pub(crate) fn new(bytes: &'a [u8], width: usize, height: usize, epoch: u64) -> Self {
        debug_assert_eq!(bytes.len(), width * height);
        Self { bytes, width, height, epoch }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Base address for consumers that map the bytes themselves.
    /// Valid only while this view is.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Epoch of the universe when this view was taken
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Byte at an in-range position, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.height && col < self.width).then(|| self.bytes[row * self.width + col])
    }

    /// Iterate rows as byte slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + use<'a> {
        self.bytes.chunks(self.width)
    }

    /// Detached token that can be checked against the universe later
    pub fn handle(&self) -> ViewHandle {
        ViewHandle { epoch: self.epoch }
    }
}

impl AsRef<[u8]> for CellsView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

/// Token remembering which epoch a view was taken at.
/// Only meaningful for the universe that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewHandle {
    epoch: u64,
}

impl ViewHandle {
    pub(crate) const fn at(epoch: u64) -> Self {
        Self { epoch }
    }

    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}
