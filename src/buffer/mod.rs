//! Bounded in-memory retention of audit entries
//!
//! The [`RingBuffer`] holds entries in insertion order and decides when to
//! evict. Appending past the configured maximum drains a fixed-size prefix
//! of the oldest entries and hands it back to the caller, which is expected
//! to forward the batch to the persistence writer before continuing.

mod ring;

pub use ring::RingBuffer;
