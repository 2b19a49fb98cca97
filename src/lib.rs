#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `mmjumps` swaps the player's jump animation at runtime, picking a regular
//! jump, a front flip or a somersault every time the player lands.
//!
//! The crate drives an emulated game's memory through the
//! [`MemoryBus`](mmjumps_types::bus::MemoryBus) trait, so it can sit behind any
//! emulator host that exposes reads and writes of RDRAM.
//!
pub use mmjumps_internal::*;
