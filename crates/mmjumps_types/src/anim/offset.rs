//! Animation clip and table slot identifiers.

use std::fmt::{Display, Formatter};

use crate::error::TableError;

/// Animation clips the override engine knows about.
///
/// Each clip has a fixed 24-bit offset inside the link animation bank. Once the
/// alternate payloads are installed, the flip and somersault clips are served
/// from heap addresses instead; the raw offsets here are only their vanilla
/// locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationOffset {
	/// Vanilla jump
	JumpRegular,
	/// Front flip jump
	JumpFlip,
	/// Somersault jump
	JumpSomersault,
	/// Vanilla landing
	LandRegular,
	/// Landing after a front flip
	LandFlip,
	/// Landing after a somersault
	LandSomersault,
	/// Landing after a fall
	Fall,
	/// Landing after a fall without a weapon
	FallFree,
	/// Short landing
	LandShort,
	/// Short landing without a weapon
	LandShortUnarmed,
}

impl AnimationOffset {
	/// Every clip, in declaration order
	pub const ALL: [Self; 10] = [
		Self::JumpRegular,
		Self::JumpFlip,
		Self::JumpSomersault,
		Self::LandRegular,
		Self::LandFlip,
		Self::LandSomersault,
		Self::Fall,
		Self::FallFree,
		Self::LandShort,
		Self::LandShortUnarmed,
	];

	/// Returns the vanilla 24-bit offset of the clip
	pub const fn raw(self) -> u32 {
		match self {
			Self::JumpRegular => 0x1B_4B00,
			Self::JumpFlip => 0x00_D710,
			Self::JumpSomersault => 0x00_DDDE,
			// the short landing shares its clip with the regular one
			Self::LandRegular | Self::LandShort => 0x1B_72E0,
			Self::LandFlip => 0x0A_1E80,
			Self::LandSomersault => 0x0A_254E,
			Self::Fall => 0x19_D3E0,
			Self::FallFree => 0x19_DEE0,
			Self::LandShortUnarmed => 0x1B_7B40,
		}
	}

	/// Returns `true` for the clips replaced by heap payloads
	pub const fn is_alternate(self) -> bool {
		matches!(
			self,
			Self::JumpFlip | Self::JumpSomersault | Self::LandFlip | Self::LandSomersault
		)
	}
}

impl TryFrom<u32> for AnimationOffset {
	type Error = TableError;

	/// `0x1B72E0` resolves to [`AnimationOffset::LandRegular`].
	fn try_from(value: u32) -> Result<Self, Self::Error> {
		Self::ALL.into_iter().find(|clip| clip.raw() == value).ok_or(TableError::UnknownAnimation(value))
	}
}

impl From<AnimationOffset> for u32 {
	fn from(clip: AnimationOffset) -> Self {
		clip.raw()
	}
}

impl Display for AnimationOffset {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::JumpRegular => "JUMP_REGULAR",
			Self::JumpFlip => "JUMP_FLIP",
			Self::JumpSomersault => "JUMP_SOMERSAULT",
			Self::LandRegular => "LAND_REGULAR",
			Self::LandFlip => "LAND_FLIP",
			Self::LandSomersault => "LAND_SOMERSAULT",
			Self::Fall => "FALL",
			Self::FallFree => "FALL_FREE",
			Self::LandShort => "LAND_SHORT",
			Self::LandShortUnarmed => "LAND_SHORT_UNARMED",
		};
		write!(f, "{name} (0x{:06X})", self.raw())
	}
}

/// Slots of the animation table, as byte offsets from the table base.
///
/// The game reports the animation the player is currently playing by the slot
/// it was loaded from, so these double as the sentinel animation ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TableSlot {
	/// Standing jump
	Jump = 0x3148,
	/// Landing after a jump
	Land = 0x3150,
	/// Landing after a fall
	FallLand = 0x3020,
	/// Landing after a fall without a weapon
	FallLandUnarmed = 0x3028,
	/// Short landing
	LandShort = 0x3168,
	/// Short landing without a weapon
	LandShortUnarmed = 0x3170,
	/// Short hop
	ShortJump = 0x2FD8,
	/// Landing after a short hop
	ShortJumpLanding = 0x2FE0,
	/// Recovery idle after a normal landing
	NormalLandingWait = 0x3040,
}

impl TableSlot {
	/// Slots rewritten together whenever the landing clip changes
	pub const LANDING_GROUP: [Self; 5] = [
		Self::Land,
		Self::FallLand,
		Self::FallLandUnarmed,
		Self::LandShort,
		Self::LandShortUnarmed,
	];

	/// Byte offset of the slot from the table base
	pub const fn offset(self) -> u16 {
		self as u16
	}

	/// Returns `true` while any landing animation is playing from this slot
	pub const fn is_landing(self) -> bool {
		matches!(
			self,
			Self::Land
				| Self::FallLand
				| Self::FallLandUnarmed
				| Self::LandShort
				| Self::LandShortUnarmed
				| Self::NormalLandingWait
		)
	}
}

impl TryFrom<u16> for TableSlot {
	type Error = TableError;

	fn try_from(value: u16) -> Result<Self, Self::Error> {
		match value {
			0x3148 => Ok(Self::Jump),
			0x3150 => Ok(Self::Land),
			0x3020 => Ok(Self::FallLand),
			0x3028 => Ok(Self::FallLandUnarmed),
			0x3168 => Ok(Self::LandShort),
			0x3170 => Ok(Self::LandShortUnarmed),
			0x2FD8 => Ok(Self::ShortJump),
			0x2FE0 => Ok(Self::ShortJumpLanding),
			0x3040 => Ok(Self::NormalLandingWait),
			_ => Err(TableError::UnknownSlot(value)),
		}
	}
}

/// What the player's current animation id means to the override engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
	/// The jump slot is playing
	Jump,
	/// One of the landing-family slots is playing
	Landing,
	/// Anything else: standing, running, short hops, ledge drops...
	Untracked,
}

impl Sentinel {
	/// Classifies a raw animation id reported by the game
	pub fn classify(anim_id: u16) -> Self {
		match TableSlot::try_from(anim_id) {
			Ok(TableSlot::Jump) => Self::Jump,
			Ok(slot) if slot.is_landing() => Self::Landing,
			_ => Self::Untracked,
		}
	}
}
