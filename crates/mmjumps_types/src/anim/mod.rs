//! The game's animation table.
//!
//! The player's animations are looked up through a table of fixed 8-byte
//! entries inside `gameplay_keep`. Overriding a jump means rewriting the entry
//! of one [`TableSlot`] so that it points at a different clip.

pub mod constants;
pub mod entry;
pub mod offset;

pub use self::entry::AnimTableEntry;
pub use self::offset::{AnimationOffset, Sentinel, TableSlot};
