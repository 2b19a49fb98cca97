//! Error types for the animation table, the payload heap and jump weights.

use thiserror::Error;

/// Errors that can occur when decoding animation table data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// Raw offset does not name a known animation clip
	#[error("Unknown animation offset: 0x{0:06X}")]
	UnknownAnimation(u32),

	/// Raw value does not name a known animation table slot
	#[error("Unknown animation table slot: 0x{0:04X}")]
	UnknownSlot(u16),

	/// Not enough data to decode a table entry
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},
}

/// Errors that can occur when allocating from the payload heap
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
	/// Zero-sized allocations are rejected
	#[error("Cannot allocate a zero-sized block")]
	ZeroSize,

	/// The arena cannot fit the requested block
	#[error("Out of memory: requested {requested} bytes, only {available} bytes available")]
	OutOfMemory {
		/// Number of bytes requested
		requested: u64,
		/// Number of bytes left in the arena
		available: u32,
	},
}

/// Errors that can occur when validating jump selection weights
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
	/// All three weights are zero, so there is nothing to draw from
	#[error("Jump weights sum to zero")]
	ZeroTotal,
}
