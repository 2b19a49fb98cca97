//! Animation table entry codec.
//!
//! Layout of one 8-byte entry, as read by the game every frame:
//!
//! ```text
//! Offset  Size  Description
//! ------  ----  -----------------------------------------
//! 0       2     Frame count (big-endian)
//! 2       2     Reserved (zero)
//! 4       1     Segment / bank selector
//! 5       3     Clip address (big-endian, 24 bits)
//! ```
//!
//! The frame count is a true big-endian u16. The game's own tooling only ever
//! wrote the low byte and left byte 0 zero; the two layouts agree for counts
//! below 0x100, which covers every clip the engine uses. Longer counts keep
//! their high byte here instead of losing it.

use std::fmt::{Display, Formatter};

use crate::error::TableError;

use super::constants::{ADDRESS_MASK, ENTRY_SIZE};

/// Encodes a table entry. The address is masked to 24 bits.
pub fn encode(address: u32, frame_count: u16, segment: u8) -> [u8; ENTRY_SIZE] {
	let [count_hi, count_lo] = frame_count.to_be_bytes();
	let [_, addr_hi, addr_mid, addr_lo] = (address & ADDRESS_MASK).to_be_bytes();
	[count_hi, count_lo, 0, 0, segment, addr_hi, addr_mid, addr_lo]
}

/// Extracts the 24-bit clip address of an encoded entry
pub fn decode_address(entry: &[u8; ENTRY_SIZE]) -> u32 {
	u32::from_be_bytes([0, entry[5], entry[6], entry[7]])
}

/// Extracts the frame count of an encoded entry
pub fn decode_frame_count(entry: &[u8; ENTRY_SIZE]) -> u16 {
	u16::from_be_bytes([entry[0], entry[1]])
}

/// Decoded animation table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimTableEntry {
	/// Number of frames in the clip
	pub frame_count: u16,

	/// Reserved bytes, kept verbatim when decoding
	reserved: [u8; 2],

	/// Segment the address is relative to
	pub segment: u8,

	/// 24-bit clip address
	address: u32,
}

impl AnimTableEntry {
	/// Creates an entry, masking `address` to 24 bits
	pub fn new(address: u32, frame_count: u16, segment: u8) -> Self {
		Self {
			frame_count,
			reserved: [0; 2],
			segment,
			address: address & ADDRESS_MASK,
		}
	}

	/// Decodes an entry from the first 8 bytes of `data`
	pub fn from_bytes(data: &[u8]) -> Result<Self, TableError> {
		let Some(raw) = data.first_chunk::<ENTRY_SIZE>() else {
			return Err(TableError::InsufficientData {
				expected: ENTRY_SIZE,
				actual: data.len(),
			});
		};

		Ok(Self {
			frame_count: decode_frame_count(raw),
			reserved: [raw[2], raw[3]],
			segment: raw[4],
			address: decode_address(raw),
		})
	}

	/// Encodes the entry
	pub fn to_bytes(&self) -> [u8; ENTRY_SIZE] {
		let mut bytes = encode(self.address, self.frame_count, self.segment);
		bytes[2..4].copy_from_slice(&self.reserved);
		bytes
	}

	/// Returns the 24-bit clip address
	pub fn address(&self) -> u32 {
		self.address
	}

	/// Returns the reserved bytes
	pub fn reserved(&self) -> &[u8; 2] {
		&self.reserved
	}

	/// Size of an encoded entry in bytes
	pub const fn size() -> usize {
		ENTRY_SIZE
	}
}

impl Display for AnimTableEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{:02X}:{:06X} ({} frames)",
			self.segment, self.address, self.frame_count
		)
	}
}

impl TryFrom<&[u8]> for AnimTableEntry {
	type Error = TableError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl From<[u8; ENTRY_SIZE]> for AnimTableEntry {
	fn from(value: [u8; ENTRY_SIZE]) -> Self {
		Self {
			frame_count: decode_frame_count(&value),
			reserved: [value[2], value[3]],
			segment: value[4],
			address: decode_address(&value),
		}
	}
}

impl From<AnimTableEntry> for [u8; ENTRY_SIZE] {
	fn from(entry: AnimTableEntry) -> Self {
		entry.to_bytes()
	}
}
