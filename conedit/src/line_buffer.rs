//! Fixed capacity edit buffer.
//!
//! The buffer never allocates. Its length is not stored, it is the
//! offset of the first zero byte (or the full capacity).

use core::str::from_utf8;

use crate::error::ConeditError;

/// Backing storage for [`LineBuffer`]
pub trait Buffer {
    fn as_slice(&self) -> &[u8];
    fn as_mut_slice(&mut self) -> &mut [u8];
}

impl<const N: usize> Buffer for [u8; N] {
    fn as_slice(&self) -> &[u8] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

impl Buffer for &mut [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

pub struct LineBuffer<B: Buffer> {
    buf: B,
}

impl<B: Buffer> LineBuffer<B> {
    /// Wrap storage, keeping the text up to the first zero byte. The
    /// rest of the storage is zeroed.
    pub fn new(mut buf: B) -> Self {
        let slice = buf.as_mut_slice();

        if let Some(len) = slice.iter().position(|&b| b == 0) {
            slice[len..].fill(0);
        }

        Self { buf }
    }

    /// Wrap storage and seed it with `seed`. The seed is cut at
    /// `max_len` bytes and at the first zero byte.
    pub fn from_str(buf: B, seed: &str) -> Self {
        let mut this = Self::new(buf);

        this.clear();

        for (pos, &byte) in seed.as_bytes().iter().take_while(|&&b| b != 0).enumerate() {
            if !this.put(pos, byte) {
                break;
            }
        }

        this
    }

    pub fn max_len(&self) -> usize {
        self.buf.as_slice().len()
    }

    pub fn len(&self) -> usize {
        let slice = self.buf.as_slice();

        slice.iter().position(|&b| b == 0).unwrap_or(slice.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `pos`, `None` past the end of the text
    pub fn get(&self, pos: usize) -> Option<u8> {
        self.as_bytes().get(pos).copied()
    }

    /// Write `byte` at `pos`, overwriting what is there. Fails without
    /// touching the buffer if `pos` is past the end of the text or at
    /// capacity.
    pub fn put(&mut self, pos: usize, byte: u8) -> bool {
        if pos >= self.max_len() || pos > self.len() || byte == 0 {
            return false;
        }

        self.buf.as_mut_slice()[pos] = byte;
        true
    }

    /// Remove character at `pos`, shifting the rest of the text one
    /// step left
    pub fn remove(&mut self, pos: usize) {
        let len = self.len();

        if pos < len {
            let slice = self.buf.as_mut_slice();

            slice.copy_within(pos + 1..len, pos);
            slice[len - 1] = 0;
        }
    }

    pub fn clear(&mut self) {
        self.buf.as_mut_slice().fill(0);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_slice()[..self.len()]
    }

    pub fn as_str(&self) -> Result<&str, ConeditError> {
        from_utf8(self.as_bytes()).map_err(|_| ConeditError::InvalidText)
    }

    /// Consume buffer and return storage
    pub fn into_inner(self) -> B {
        self.buf
    }
}

pub type StaticLineBuffer<const N: usize> = LineBuffer<[u8; N]>;

pub type SliceLineBuffer<'a> = LineBuffer<&'a mut [u8]>;

impl<const N: usize> StaticLineBuffer<N> {
    pub fn new_static() -> Self {
        Self::new([0; N])
    }

    pub fn from_str_static(seed: &str) -> Self {
        Self::from_str([0; N], seed)
    }
}

impl<'a> SliceLineBuffer<'a> {
    pub fn from_slice(buf: &'a mut [u8]) -> Self {
        Self::new(buf)
    }
}
