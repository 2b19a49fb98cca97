//! Bump allocator for animation payloads.
//!
//! The host hands the plugin one fixed block of RDRAM. Payloads are placed into
//! it once at startup and live for the whole session, so the allocator only ever
//! moves a cursor forward and has no way to free anything.

use log::debug;

use crate::{bus::MemoryBus, error::HeapError};

/// Permanent bump arena inside the emulated address space.
///
/// Invariant: `next <= capacity`, and every returned block lies inside
/// `base..base + capacity` without overlapping any earlier block.
///
/// # Examples
///
/// ```
/// use mmjumps_types::heap::Heap;
///
/// let mut heap = Heap::new(0x8040_0000, 0x100);
/// assert_eq!(heap.malloc(0x40).unwrap(), 0x8040_0000);
/// assert_eq!(heap.malloc(0x10).unwrap(), 0x8040_0040);
/// assert!(heap.malloc(0xC0).is_err());
/// assert_eq!(heap.used(), 0x50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heap {
	base: u32,
	capacity: u32,
	next: u32,
}

impl Heap {
	/// Creates an empty arena of `capacity` bytes starting at `base`
	pub fn new(base: u32, capacity: u32) -> Self {
		Self {
			base,
			capacity,
			next: 0,
		}
	}

	/// Reserves `size` bytes and returns the absolute address of the block.
	///
	/// The cursor is left untouched when the request fails.
	pub fn malloc(&mut self, size: u32) -> Result<u32, HeapError> {
		if size == 0 {
			return Err(HeapError::ZeroSize);
		}

		let available = self.remaining();
		if size > available {
			return Err(HeapError::OutOfMemory {
				requested: u64::from(size),
				available,
			});
		}

		let addr = self.base.wrapping_add(self.next);
		self.next += size;
		debug!("heap: 0x{:X} bytes at 0x{:08X} ({} left)", size, addr, self.remaining());
		Ok(addr)
	}

	/// Reserves space for `bytes`, copies them onto the bus and returns the address
	pub fn alloc_bytes<B: MemoryBus + ?Sized>(
		&mut self,
		bus: &mut B,
		bytes: &[u8],
	) -> Result<u32, HeapError> {
		let size = u32::try_from(bytes.len()).map_err(|_| HeapError::OutOfMemory {
			requested: bytes.len() as u64,
			available: self.remaining(),
		})?;
		let addr = self.malloc(size)?;
		bus.write_bytes(addr, bytes);
		Ok(addr)
	}

	/// Start address of the arena
	pub fn base(&self) -> u32 {
		self.base
	}

	/// Total size of the arena in bytes
	pub fn capacity(&self) -> u32 {
		self.capacity
	}

	/// Bytes handed out so far
	pub fn used(&self) -> u32 {
		self.next
	}

	/// Bytes still available
	pub fn remaining(&self) -> u32 {
		self.capacity - self.next
	}

	/// Returns `true` if `addr` lies inside an allocated block
	pub fn contains(&self, addr: u32) -> bool {
		addr.wrapping_sub(self.base) < self.next
	}
}
