//! Prelude module for `mmjumps_internal`.
//!
//! # Examples
//!
//! ```rust
//! use mmjumps_internal::prelude::*;
//!
//! let plugin = JumpsPlugin::with_config("mm_jumps.json", JumpsConfig::default());
//! assert!(!plugin.load_success());
//! assert_eq!(plugin.selection_weights(), SelectionWeights::default());
//! ```

// Re-export everything from mmjumps_engine::prelude, which includes mmjumps_types::prelude
#[doc(inline)]
pub use mmjumps_engine::prelude::*;

#[doc(inline)]
pub use mmjumps_engine;

#[doc(inline)]
pub use mmjumps_types;
