//! Where each animation clip lives.
//!
//! Vanilla clips are addressed inside the link animation bank. After the
//! alternate payloads are copied into the heap, the flip and somersault clips
//! are addressed directly in RDRAM instead.

use log::debug;
use mmjumps_types::{
	anim::{
		AnimTableEntry, AnimationOffset,
		constants::{ADDRESS_MASK, HEAP_SIGNATURE, SEGMENT_ASSET_BANK, SEGMENT_HEAP},
	},
	bus::MemoryBus,
	error::HeapError,
	heap::Heap,
};

use crate::assets::AnimationPayloads;

/// Segment and 24-bit address of a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipLocation {
	/// 24-bit address relative to `segment`
	pub address: u32,
	/// Segment selector
	pub segment: u8,
}

impl ClipLocation {
	/// Builds a table entry pointing at this location
	pub fn entry(self, frame_count: u16) -> AnimTableEntry {
		AnimTableEntry::new(self.address, frame_count, self.segment)
	}
}

/// Heap addresses of everything placed at install time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapClips {
	/// [`HEAP_SIGNATURE`] tag
	pub signature: u32,
	/// Front flip jump
	pub jump_flip: u32,
	/// Somersault jump
	pub jump_somersault: u32,
	/// Front flip landing
	pub land_flip: u32,
	/// Somersault landing
	pub land_somersault: u32,
}

impl HeapClips {
	/// Copies the signature and the four payloads into `heap`.
	pub fn place<B: MemoryBus + ?Sized>(
		heap: &mut Heap,
		bus: &mut B,
		payloads: &AnimationPayloads,
	) -> Result<Self, HeapError> {
		let signature = heap.alloc_bytes(bus, HEAP_SIGNATURE)?;
		let mut addrs = [0u32; 4];
		for (addr, (clip, bytes)) in addrs.iter_mut().zip(payloads.in_placement_order()) {
			*addr = heap.alloc_bytes(bus, bytes)?;
			debug!("{clip}: {} bytes at 0x{:08X}", bytes.len(), *addr);
		}
		let [jump_flip, jump_somersault, land_flip, land_somersault] = addrs;

		Ok(Self {
			signature,
			jump_flip,
			jump_somersault,
			land_flip,
			land_somersault,
		})
	}

	/// Heap address of an alternate clip
	pub fn address_of(&self, clip: AnimationOffset) -> Option<u32> {
		match clip {
			AnimationOffset::JumpFlip => Some(self.jump_flip),
			AnimationOffset::JumpSomersault => Some(self.jump_somersault),
			AnimationOffset::LandFlip => Some(self.land_flip),
			AnimationOffset::LandSomersault => Some(self.land_somersault),
			_ => None,
		}
	}
}

/// Resolves clips to table locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipTable {
	heap: Option<HeapClips>,
}

impl ClipTable {
	/// Table with only the vanilla locations
	pub fn new() -> Self {
		Self::default()
	}

	/// Redirects the alternate clips to their heap copies
	pub fn install(&mut self, clips: HeapClips) {
		self.heap = Some(clips);
	}

	/// Heap addresses, once installed
	pub fn heap_clips(&self) -> Option<&HeapClips> {
		self.heap.as_ref()
	}

	/// Location the table should point at for `clip`
	pub fn locate(&self, clip: AnimationOffset) -> ClipLocation {
		match self.heap.and_then(|heap| heap.address_of(clip)) {
			Some(addr) => ClipLocation {
				address: addr & ADDRESS_MASK,
				segment: SEGMENT_HEAP,
			},
			None => ClipLocation {
				address: clip.raw(),
				segment: SEGMENT_ASSET_BANK,
			},
		}
	}

	/// Reverse lookup of a decoded table entry
	pub fn identify(&self, entry: &AnimTableEntry) -> Option<AnimationOffset> {
		AnimationOffset::ALL.into_iter().find(|&clip| {
			let location = self.locate(clip);
			location.address == entry.address() && location.segment == entry.segment
		})
	}
}
