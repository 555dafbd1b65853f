use qecc_core::{ErrorInfo, QeccError};
use rand::RngCore;

/// Fixed-capacity pool of pseudorandom bytes handed out in consecutive,
/// non-overlapping slices.
///
/// The pool is filled once from the caller's random source and never grows.
/// Callers size it up front from the planned requests (see
/// [`crate::layout::BlockLayout::arena_bytes`]).
#[derive(Debug)]
pub struct RandomArena {
    consumed: usize,
    buffer: Vec<u8>,
}

impl RandomArena {
    /// Allocates `total_bytes` and fills every byte from `rng`.
    pub fn new<R: RngCore + ?Sized>(total_bytes: usize, rng: &mut R) -> Self {
        let mut buffer = vec![0u8; total_bytes];
        rng.fill_bytes(&mut buffer);
        Self {
            consumed: 0,
            buffer,
        }
    }

    /// Wraps pre-generated bytes, mainly for reproducing a fill by hand.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            consumed: 0,
            buffer: bytes,
        }
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Capacity of the pool.
    pub fn total(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.consumed
    }

    /// Hands out the next `n_bytes` bytes and advances the cursor.
    ///
    /// Fails without moving the cursor when fewer than `n_bytes` remain.
    pub fn consume(&mut self, n_bytes: usize) -> Result<&[u8], QeccError> {
        let end = match self.consumed.checked_add(n_bytes) {
            Some(end) if end <= self.buffer.len() => end,
            _ => {
                let info = ErrorInfo::new("arena-exhausted", "random byte arena exhausted")
                    .with_context("requested", n_bytes.to_string())
                    .with_context("consumed", self.consumed.to_string())
                    .with_context("total", self.buffer.len().to_string())
                    .with_hint("size the arena from the block layout before filling");
                return Err(QeccError::Arena(info));
            }
        };
        let start = self.consumed;
        self.consumed = end;
        Ok(&self.buffer[start..end])
    }

    /// Hands out enough bytes to cover `n_bits` bits plus one slack byte.
    pub fn consume_bits(&mut self, n_bits: usize) -> Result<BitSlice<'_>, QeccError> {
        let bytes = self.consume(request_bytes(n_bits))?;
        Ok(BitSlice { bytes })
    }
}

/// Bytes requested from the arena for a region of `n_bits` cells:
/// `ceil(n_bits / 8) + 1`.
pub fn request_bytes(n_bits: usize) -> usize {
    n_bits.div_ceil(8) + 1
}

/// Read-only bit view over a slice handed out by [`RandomArena`].
///
/// Bit `i` is bit `i % 8` of byte `i / 8`.
#[derive(Debug, Clone, Copy)]
pub struct BitSlice<'a> {
    bytes: &'a [u8],
}

impl<'a> BitSlice<'a> {
    /// Wraps a byte slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Number of addressable bits.
    pub fn len_bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Reads bit `index`.
    pub fn bit(&self, index: usize) -> Result<bool, QeccError> {
        match self.bytes.get(index / 8) {
            Some(byte) => Ok((byte >> (index % 8)) & 1 == 1),
            None => Err(past_end(index, 1, self.len_bits())),
        }
    }

    /// Reads `count` bits starting at `offset` as an integer, the first bit
    /// landing in the least significant position.
    pub fn read_bits(&self, offset: usize, count: usize) -> Result<u64, QeccError> {
        if count > 64 {
            let info = ErrorInfo::new("read-too-wide", "at most 64 bits can be read at once")
                .with_context("count", count.to_string());
            return Err(QeccError::Arena(info));
        }
        match offset.checked_add(count) {
            Some(end) if end <= self.len_bits() => {}
            _ => return Err(past_end(offset, count, self.len_bits())),
        }
        let mut value = 0u64;
        for idx in 0..count {
            if self.bit(offset + idx)? {
                value |= 1u64 << idx;
            }
        }
        Ok(value)
    }
}

fn past_end(offset: usize, count: usize, len: usize) -> QeccError {
    QeccError::Arena(
        ErrorInfo::new("read-past-end", "bit read beyond the consumed slice")
            .with_context("offset", offset.to_string())
            .with_context("count", count.to_string())
            .with_context("len_bits", len.to_string()),
    )
}
