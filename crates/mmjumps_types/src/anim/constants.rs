//! Fixed addresses, segments and clip lengths of the animation table.

/// Pointer to the base of the `gameplay_keep` object, which holds the animation table
pub const GAMEPLAY_KEEP_PTR: u32 = 0x8016_A66C;

/// Size of the RDRAM block reserved for the alternate animation payloads
pub const HEAP_SIZE: u32 = 0x37800;

/// Signature written at the start of the payload heap
pub const HEAP_SIGNATURE: &[u8; 16] = b"MM_JUMPS_HEAP_V1";

/// Size of a single animation table entry in bytes
pub const ENTRY_SIZE: usize = 8;

/// Table entries address clips with 24 bits
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// Segment of the game's own link animation bank
pub const SEGMENT_ASSET_BANK: u8 = 0x07;

/// Segment for clips living in the payload heap (direct KSEG0 address)
pub const SEGMENT_HEAP: u8 = 0x80;

/// Frame counts of every clip the table is ever pointed at
pub mod frames {
	/// Regular jump
	pub const JUMP_REGULAR: u16 = 0xD;
	/// Front flip jump
	pub const JUMP_FLIP: u16 = 0xD;
	/// Somersault jump
	pub const JUMP_SOMERSAULT: u16 = 0xE;
	/// Regular landing
	pub const LAND_REGULAR: u16 = 0x10;
	/// Landing after a fall, armed and unarmed
	pub const LAND_FALL: u16 = 0x15;
	/// Landing after a front flip
	pub const LAND_FLIP: u16 = 0xD;
	/// Landing after a somersault
	pub const LAND_SOMERSAULT: u16 = 0x10;
	/// Short landing
	pub const LAND_SHORT: u16 = 0x10;
	/// Short landing without a weapon
	pub const LAND_SHORT_UNARMED: u16 = 0x10;
}
