//! Prelude module for `mmjumps_types`.
//!
//! ```
//! use mmjumps_types::prelude::*;
//!
//! let weights = SelectionWeights::default();
//! assert_eq!(weights.total(), 100);
//! ```

#[doc(inline)]
pub use crate::anim::{
	AnimTableEntry, AnimationOffset, Sentinel, TableSlot,
	constants::{
		ENTRY_SIZE, GAMEPLAY_KEEP_PTR, HEAP_SIGNATURE, HEAP_SIZE, SEGMENT_ASSET_BANK, SEGMENT_HEAP,
	},
};

#[doc(inline)]
pub use crate::bus::{MemoryBus, Rdram};

#[doc(inline)]
pub use crate::error::{HeapError, TableError, WeightsError};

#[doc(inline)]
pub use crate::heap::Heap;

#[doc(inline)]
pub use crate::select::{JumpKind, SelectionMode, SelectionWeights, SequenceState, select_next};
