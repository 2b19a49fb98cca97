//! This module is separated into its own crate to keep the `mmjumps` facade thin, and should not be used directly.

/// `use mmjumps::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use mmjumps_engine;
pub use mmjumps_types;

// Re-export commonly used types at crate root
pub use mmjumps_engine::{
	machine::{OverrideEngine, PlayerSignals, PlayerState},
	plugin::JumpsPlugin,
};
pub use mmjumps_types::{bus::MemoryBus, select::JumpKind};
