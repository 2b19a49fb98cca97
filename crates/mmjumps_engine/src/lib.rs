//! Jump animation override engine.
//!
//! Builds on [`mmjumps_types`] to keep an N64 game's animation table pointing at
//! a freshly chosen jump every time the player lands.
//!
//! # Modules
//!
//! - **`machine`**: the per-tick [`OverrideEngine`](machine::OverrideEngine)
//! - **`clips`**: where each clip lives, vanilla bank or heap
//! - **`deferred`**: countdown queue for actions that fire a few frames later
//! - **`config`**: persisted settings
//! - **`assets`**: loading the four alternate clips from disk
//! - **`plugin`**: the host-facing [`JumpsPlugin`](plugin::JumpsPlugin)
//!
//! # Examples
//!
//! ```
//! use mmjumps_engine::prelude::*;
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let mut ram = Rdram::default();
//! ram.write_u32(GAMEPLAY_KEEP_PTR, 0x8010_0000);
//!
//! let mut engine = OverrideEngine::new(SelectionWeights::new(0, 1, 0).unwrap(), SelectionMode::Random);
//! let mut rng = SmallRng::seed_from_u64(1);
//! engine.on_tick(&mut ram, &PlayerSignals::playing(0), &mut rng);
//!
//! assert_eq!(engine.state().current_jump, JumpKind::Flip);
//! assert_eq!(engine.jump_in_table(&ram).address(), AnimationOffset::JumpFlip.raw());
//! ```

pub mod assets;
pub mod clips;
pub mod config;
pub mod deferred;
pub mod error;
pub mod machine;
pub mod plugin;

/// `use mmjumps_engine::prelude::*;` to import commonly used items.
pub mod prelude;
