//! Access to the emulated memory space.
//!
//! The host owns the emulator's RDRAM; everything in this workspace talks to it
//! through the [`MemoryBus`] trait. Reads and writes are synchronous and assumed
//! to always succeed.
//!
//! [`Rdram`] is a flat, big-endian, in-process implementation used by tests,
//! benchmarks and the simulator demo.

use log::warn;

/// Mask that folds KSEG0/KSEG1 virtual addresses onto physical RDRAM
pub const PHYSICAL_MASK: u32 = 0x1FFF_FFFF;

/// Byte and word access to a flat, big-endian, pointer-indexed memory space.
///
/// Implementors only need [`read_u8`](MemoryBus::read_u8) and
/// [`write_bytes`](MemoryBus::write_bytes); wider reads and pointer-relative
/// access are derived from those.
pub trait MemoryBus {
	/// Reads a single byte at an absolute address
	fn read_u8(&self, addr: u32) -> u8;

	/// Writes `bytes` starting at an absolute address
	fn write_bytes(&mut self, addr: u32, bytes: &[u8]);

	/// Reads a big-endian u16 at an absolute address
	fn read_u16(&self, addr: u32) -> u16 {
		u16::from_be_bytes([self.read_u8(addr), self.read_u8(addr.wrapping_add(1))])
	}

	/// Reads a big-endian u32 at an absolute address
	fn read_u32(&self, addr: u32) -> u32 {
		u32::from_be_bytes([
			self.read_u8(addr),
			self.read_u8(addr.wrapping_add(1)),
			self.read_u8(addr.wrapping_add(2)),
			self.read_u8(addr.wrapping_add(3)),
		])
	}

	/// Fills `buf` with the bytes starting at an absolute address
	fn read_bytes(&self, addr: u32, buf: &mut [u8]) {
		for (i, byte) in buf.iter_mut().enumerate() {
			*byte = self.read_u8(addr.wrapping_add(i as u32));
		}
	}

	/// Follows the pointer stored at `ptr`
	fn deref(&self, ptr: u32) -> u32 {
		self.read_u32(ptr)
	}

	/// Writes `bytes` at `offset` from the address stored at `ptr`
	fn write_ptr_bytes(&mut self, ptr: u32, offset: u32, bytes: &[u8]) {
		let base = self.deref(ptr);
		self.write_bytes(base.wrapping_add(offset), bytes);
	}

	/// Reads a u16 at `offset` from the address stored at `ptr`
	fn read_ptr_u16(&self, ptr: u32, offset: u32) -> u16 {
		self.read_u16(self.deref(ptr).wrapping_add(offset))
	}

	/// Reads a u32 at `offset` from the address stored at `ptr`
	fn read_ptr_u32(&self, ptr: u32, offset: u32) -> u32 {
		self.read_u32(self.deref(ptr).wrapping_add(offset))
	}

	/// Fills `buf` starting at `offset` from the address stored at `ptr`
	fn read_ptr_bytes(&self, ptr: u32, offset: u32, buf: &mut [u8]) {
		self.read_bytes(self.deref(ptr).wrapping_add(offset), buf);
	}
}

/// Flat RDRAM image.
///
/// Virtual addresses are folded with [`PHYSICAL_MASK`], so `0x8016_A66C` and
/// `0x0016_A66C` name the same byte. Reads past the end return zero and writes
/// past the end are dropped with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rdram {
	data: Vec<u8>,
}

impl Rdram {
	/// Size of RDRAM with the expansion pak installed (8 MiB)
	pub const EXPANDED_SIZE: usize = 0x80_0000;

	/// Creates a zero-filled RDRAM image of `size` bytes
	pub fn new(size: usize) -> Self {
		Self {
			data: vec![0; size],
		}
	}

	/// Translates a virtual address to an index into the image
	pub const fn physical(addr: u32) -> usize {
		(addr & PHYSICAL_MASK) as usize
	}

	/// Writes a big-endian u32, typically to plant a pointer
	pub fn write_u32(&mut self, addr: u32, value: u32) {
		self.write_bytes(addr, &value.to_be_bytes());
	}

	/// Returns the size of the image in bytes
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` if the image has no bytes
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns the raw image
	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}
}

impl Default for Rdram {
	fn default() -> Self {
		Self::new(Self::EXPANDED_SIZE)
	}
}

impl MemoryBus for Rdram {
	fn read_u8(&self, addr: u32) -> u8 {
		self.data.get(Self::physical(addr)).copied().unwrap_or(0)
	}

	fn write_bytes(&mut self, addr: u32, bytes: &[u8]) {
		let start = Self::physical(addr);
		let Some(dst) = self.data.get_mut(start..start + bytes.len()) else {
			warn!("Dropping {} byte write past end of RDRAM at 0x{:08X}", bytes.len(), addr);
			return;
		};
		dst.copy_from_slice(bytes);
	}
}
