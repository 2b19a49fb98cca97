//! Prelude module for `mmjumps_engine`.
//!
//! Also re-exports the [`mmjumps_types`] prelude.

#[doc(inline)]
pub use mmjumps_types::prelude::*;

#[doc(inline)]
pub use crate::assets::{AnimationPayloads, AssetManifest};

#[doc(inline)]
pub use crate::clips::{ClipLocation, ClipTable, HeapClips};

#[doc(inline)]
pub use crate::config::{CONFIG_VERSION, JumpsConfig};

#[doc(inline)]
pub use crate::deferred::{DeferredAction, DeferredQueue, Sfx};

#[doc(inline)]
pub use crate::error::{ConfigError, LoadError};

#[doc(inline)]
pub use crate::machine::{OverrideEngine, OverrideState, Phase, PlayerSignals, PlayerState};

#[doc(inline)]
pub use crate::plugin::{DebugSnapshot, JumpsPlugin};
