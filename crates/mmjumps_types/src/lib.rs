//! Core data types for the `mmjumps` animation override.
//!
//! # Modules
//!
//! - **`bus`**: the [`MemoryBus`](bus::MemoryBus) trait through which all emulated memory is
//!   touched, plus a flat in-process [`Rdram`](bus::Rdram) image
//! - **`heap`**: the permanent bump allocator that places animation payloads in RDRAM
//! - **`anim`**: animation clip and table slot ids, and the 8-byte table entry codec
//! - **`select`**: weighted and sequential jump selection
//!
//! # Examples
//!
//! ```
//! use mmjumps_types::prelude::*;
//!
//! let mut ram = Rdram::new(0x80_0000);
//! let mut heap = Heap::new(0x8040_0000, HEAP_SIZE);
//! let flip = heap.alloc_bytes(&mut ram, &[0u8; 0x40]).unwrap();
//!
//! let entry = AnimTableEntry::new(flip, JumpKind::Flip.jump_frames(), SEGMENT_HEAP);
//! assert_eq!(entry.address(), 0x40_0000);
//! ```

pub mod anim;
pub mod bus;
pub mod error;
pub mod heap;
pub mod select;

/// `use mmjumps_types::prelude::*;` to import commonly used items.
pub mod prelude;
