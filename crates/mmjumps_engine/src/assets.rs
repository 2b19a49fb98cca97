//! Alternate animation payloads.
//!
//! The four clips ship as raw files next to the plugin. Their bytes are opaque
//! here; all that matters is their length and where they end up in RDRAM.

use std::{
	fs,
	path::{Path, PathBuf},
};

use mmjumps_types::anim::AnimationOffset;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// File names of the four payloads, relative to the plugin directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
	/// Front flip jump
	pub jump_flip_anim: PathBuf,
	/// Front flip landing
	pub land_flip_anim: PathBuf,
	/// Somersault jump
	pub jump_somersault_anim: PathBuf,
	/// Somersault landing
	pub land_somersault_anim: PathBuf,
}

impl Default for AssetManifest {
	fn default() -> Self {
		Self {
			jump_flip_anim: PathBuf::from("anims/jump_flip.bin"),
			land_flip_anim: PathBuf::from("anims/land_flip.bin"),
			jump_somersault_anim: PathBuf::from("anims/jump_somersault.bin"),
			land_somersault_anim: PathBuf::from("anims/land_somersault.bin"),
		}
	}
}

/// Raw bytes of the four alternate clips
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimationPayloads {
	/// Front flip jump
	pub jump_flip: Vec<u8>,
	/// Front flip landing
	pub land_flip: Vec<u8>,
	/// Somersault jump
	pub jump_somersault: Vec<u8>,
	/// Somersault landing
	pub land_somersault: Vec<u8>,
}

impl AnimationPayloads {
	/// Reads the payload files listed in `manifest` from `dir`
	pub fn load(dir: impl AsRef<Path>, manifest: &AssetManifest) -> Result<Self, LoadError> {
		let dir = dir.as_ref();
		let read = |clip: AnimationOffset, name: &Path| {
			let path = dir.join(name);
			fs::read(&path).map_err(|source| LoadError::AssetLoadFailure {
				clip,
				path,
				source,
			})
		};

		let payloads = Self {
			jump_flip: read(AnimationOffset::JumpFlip, &manifest.jump_flip_anim)?,
			land_flip: read(AnimationOffset::LandFlip, &manifest.land_flip_anim)?,
			jump_somersault: read(AnimationOffset::JumpSomersault, &manifest.jump_somersault_anim)?,
			land_somersault: read(AnimationOffset::LandSomersault, &manifest.land_somersault_anim)?,
		};
		payloads.validate()?;
		Ok(payloads)
	}

	/// Payloads in heap placement order
	pub fn in_placement_order(&self) -> [(AnimationOffset, &[u8]); 4] {
		[
			(AnimationOffset::JumpFlip, self.jump_flip.as_slice()),
			(AnimationOffset::JumpSomersault, self.jump_somersault.as_slice()),
			(AnimationOffset::LandFlip, self.land_flip.as_slice()),
			(AnimationOffset::LandSomersault, self.land_somersault.as_slice()),
		]
	}

	/// Rejects empty payloads
	pub fn validate(&self) -> Result<(), LoadError> {
		match self.in_placement_order().into_iter().find(|(_, bytes)| bytes.is_empty()) {
			Some((clip, _)) => Err(LoadError::EmptyPayload(clip)),
			None => Ok(()),
		}
	}

	/// Combined size of all four payloads
	pub fn total_len(&self) -> usize {
		self.in_placement_order().iter().map(|(_, bytes)| bytes.len()).sum()
	}
}
