//! Owned output buffer with an explicit growth policy.
//!
//! The repairer and the transcoder assemble their output here. The buffer
//! grows by reallocating to `capacity + capacity/2` (or just enough for the
//! pending write, whichever is larger) whenever a write would overflow.
//! Contents are moved into the new allocation and the old one is released;
//! `Drop` releases the final allocation on every exit path, including the
//! strict transcoder's error exit.

#[cfg(not(test))]
use alloc::vec::Vec;

pub(crate) struct GrowthBuffer {
    bytes: Vec<u8>,
}

impl GrowthBuffer {
    /// Create a buffer with room for `capacity` bytes before the first grow.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Append `chunk`, growing first if the write would overflow.
    pub(crate) fn push_slice(&mut self, chunk: &[u8]) {
        self.grow_for(chunk.len());
        self.bytes.extend_from_slice(chunk);
    }

    /// Consume the buffer, handing the written bytes to the caller.
    pub(crate) fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Ensure capacity for `pending` more bytes using the 1.5x policy.
    fn grow_for(&mut self, pending: usize) {
        let needed = self.bytes.len() + pending;
        if needed > self.bytes.capacity() {
            let cap = self.bytes.capacity();
            let target = core::cmp::max(cap + cap / 2, needed);
            self.bytes.reserve_exact(target - self.bytes.len());
        }
    }
}
