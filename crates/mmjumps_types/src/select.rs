//! Jump selection policy.
//!
//! Picks which jump the next standing jump plays, either by weighted draw or by
//! stepping through a fixed rotation.

use std::fmt::{Display, Formatter};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
	anim::{AnimationOffset, constants::frames},
	error::WeightsError,
};

/// The three jumps the engine can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpKind {
	/// Vanilla jump
	#[default]
	Regular,
	/// Front flip
	Flip,
	/// Somersault
	Somersault,
}

impl JumpKind {
	/// Jumps in sequential-mode order
	pub const ROTATION: [Self; 3] = [Self::Regular, Self::Flip, Self::Somersault];

	/// Clip played from the jump slot
	pub const fn jump_clip(self) -> AnimationOffset {
		match self {
			Self::Regular => AnimationOffset::JumpRegular,
			Self::Flip => AnimationOffset::JumpFlip,
			Self::Somersault => AnimationOffset::JumpSomersault,
		}
	}

	/// Clip that follows the jump in the landing slots
	pub const fn landing_clip(self) -> AnimationOffset {
		match self {
			Self::Regular => AnimationOffset::LandRegular,
			Self::Flip => AnimationOffset::LandFlip,
			Self::Somersault => AnimationOffset::LandSomersault,
		}
	}

	/// Frame count of the jump clip
	pub const fn jump_frames(self) -> u16 {
		match self {
			Self::Regular => frames::JUMP_REGULAR,
			Self::Flip => frames::JUMP_FLIP,
			Self::Somersault => frames::JUMP_SOMERSAULT,
		}
	}

	/// Frame count of the landing clip
	pub const fn landing_frames(self) -> u16 {
		match self {
			Self::Regular => frames::LAND_REGULAR,
			Self::Flip => frames::LAND_FLIP,
			Self::Somersault => frames::LAND_SOMERSAULT,
		}
	}

	/// Human readable name, as shown in menus
	pub const fn label(self) -> &'static str {
		match self {
			Self::Regular => "Default",
			Self::Flip => "Front Flip",
			Self::Somersault => "Somersault",
		}
	}
}

impl Display for JumpKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.pad(self.label())
	}
}

impl From<JumpKind> for AnimationOffset {
	fn from(kind: JumpKind) -> Self {
		kind.jump_clip()
	}
}

/// Relative weights of the three jumps in random mode.
///
/// Invariant: the weights never sum to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionWeights {
	default: u32,
	flip: u32,
	somersault: u32,
}

impl SelectionWeights {
	/// Creates a weight triple, rejecting an all-zero one
	pub fn new(default: u32, flip: u32, somersault: u32) -> Result<Self, WeightsError> {
		if u64::from(default) + u64::from(flip) + u64::from(somersault) == 0 {
			return Err(WeightsError::ZeroTotal);
		}

		Ok(Self {
			default,
			flip,
			somersault,
		})
	}

	/// Weight of the vanilla jump
	pub fn default_weight(&self) -> u32 {
		self.default
	}

	/// Weight of the front flip
	pub fn flip_weight(&self) -> u32 {
		self.flip
	}

	/// Weight of the somersault
	pub fn somersault_weight(&self) -> u32 {
		self.somersault
	}

	/// Sum of all three weights, always positive
	pub fn total(&self) -> u64 {
		u64::from(self.default) + u64::from(self.flip) + u64::from(self.somersault)
	}

	/// Maps a draw `r` in `0..total` onto a jump.
	///
	/// The somersault owns the lowest band, the flip the next one and the
	/// regular jump whatever is left.
	pub fn band(&self, r: u64) -> JumpKind {
		let somersault = u64::from(self.somersault);
		if r < somersault {
			JumpKind::Somersault
		} else if r < somersault + u64::from(self.flip) {
			JumpKind::Flip
		} else {
			JumpKind::Regular
		}
	}

	/// Probability of drawing `kind`
	pub fn probability(&self, kind: JumpKind) -> f64 {
		let weight = match kind {
			JumpKind::Regular => self.default,
			JumpKind::Flip => self.flip,
			JumpKind::Somersault => self.somersault,
		};
		f64::from(weight) / self.total() as f64
	}
}

impl Default for SelectionWeights {
	fn default() -> Self {
		Self {
			default: 34,
			flip: 33,
			somersault: 33,
		}
	}
}

impl Display for SelectionWeights {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"default {} / flip {} / somersault {}",
			self.default, self.flip, self.somersault
		)
	}
}

/// How the next jump is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
	/// Weighted random draw
	#[default]
	Random,
	/// Fixed rotation, regular then flip then somersault
	Sequential,
}

impl From<bool> for SelectionMode {
	/// `true` selects [`SelectionMode::Sequential`]
	fn from(sequential: bool) -> Self {
		if sequential { Self::Sequential } else { Self::Random }
	}
}

/// Position in the sequential rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SequenceState(u8);

impl SequenceState {
	/// Returns a cursor at the start of the rotation
	pub fn new() -> Self {
		Self(0)
	}

	/// Current position, 0 to 2
	pub fn position(&self) -> u8 {
		self.0
	}

	/// Jump at the current position
	pub fn current(&self) -> JumpKind {
		JumpKind::ROTATION[usize::from(self.0)]
	}

	/// Steps to the next jump in the rotation
	pub fn advance(&mut self) {
		self.0 = (self.0 + 1) % JumpKind::ROTATION.len() as u8;
	}

	/// Rewinds to the start of the rotation
	pub fn reset(&mut self) {
		self.0 = 0;
	}
}

/// Picks the next jump.
///
/// In sequential mode the weights and `rng` are ignored and the jump at the
/// cursor is returned. Selection never moves the cursor; the caller advances it
/// once per completed jump.
pub fn select_next<R: Rng + ?Sized>(
	weights: &SelectionWeights,
	mode: SelectionMode,
	sequence: &SequenceState,
	rng: &mut R,
) -> JumpKind {
	match mode {
		SelectionMode::Sequential => sequence.current(),
		SelectionMode::Random => weights.band(rng.random_range(0..weights.total())),
	}
}
