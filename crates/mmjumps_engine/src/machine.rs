//! Per-tick animation override state machine.
//!
//! # Tick order
//!
//! Every simulation frame the host calls [`OverrideEngine::on_tick`] with the
//! player's current signals. The engine then, in order:
//!
//! 1. fires deferred actions whose countdown expired
//! 2. while paused, latches `was_paused` and writes nothing
//! 3. on the first unpaused tick, re-asserts the current jump (and, mid-jump,
//!    its landing group) since a pause may have reloaded the table
//! 4. while busy, defers selection until control returns
//! 5. while swimming, restores the regular landing and defers selection
//! 6. otherwise reacts to the animation id:
//!    - jump slot starting: commit the landing group for the current jump
//!    - any landing slot: leave the table alone
//!    - anything else: pick the next jump if one is due and restore the
//!      regular landing
//!
//! The table is never rewritten while a landing is playing from it.

use log::debug;
use mmjumps_types::{
	anim::{
		AnimTableEntry, AnimationOffset, Sentinel, TableSlot,
		constants::{ENTRY_SIZE, GAMEPLAY_KEEP_PTR, frames},
	},
	bus::MemoryBus,
	select::{JumpKind, SelectionMode, SelectionWeights, SequenceState, select_next},
};
use rand::Rng;

use crate::{
	clips::{ClipTable, HeapClips},
	deferred::{DeferredAction, DeferredQueue, Sfx},
};

/// What the player is doing, as far as overrides are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
	/// Normal control
	#[default]
	Standing,
	/// Cutscenes, item pickups, holding objects and similar locked states
	Busy,
	/// In water; landings never follow a jump
	Swimming,
}

/// Signals the host reads from the game each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerSignals {
	/// The game is paused
	pub paused: bool,
	/// Player control state
	pub state: PlayerState,
	/// Table slot of the animation being played
	pub anim_id: u16,
}

impl PlayerSignals {
	/// Unpaused, standing, playing `anim_id`
	pub fn playing(anim_id: u16) -> Self {
		Self {
			anim_id,
			..Self::default()
		}
	}

	/// Unpaused, standing, playing an animation from `slot`
	pub fn slot(slot: TableSlot) -> Self {
		Self::playing(slot.offset())
	}

	/// The game is paused
	pub fn paused() -> Self {
		Self {
			paused: true,
			..Self::default()
		}
	}

	/// Same signals with a different control state
	pub fn with_state(self, state: PlayerState) -> Self {
		Self { state, ..self }
	}
}

/// Observable phase of the override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// No jump in flight; the table holds the current jump and landing
	Idle,
	/// A jump is playing and its landing group has been committed
	JumpPlaying,
	/// A landing is playing; the table is locked
	LandingLocked,
	/// The game is paused; the table is locked
	Paused,
}

/// Mutable record of the override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideState {
	/// Jump currently written to the jump slot
	pub current_jump: JumpKind,
	/// Clip currently written to the landing group
	pub current_landing: AnimationOffset,
	/// The landing group has been committed for a jump that has not landed yet
	pub jump_in_progress: bool,
	/// The previous tick was paused
	pub was_paused: bool,
	/// A new jump should be selected on the next grounded tick
	pub needs_update: bool,
}

impl Default for OverrideState {
	fn default() -> Self {
		Self {
			current_jump: JumpKind::Regular,
			current_landing: AnimationOffset::LandRegular,
			jump_in_progress: false,
			was_paused: false,
			needs_update: true,
		}
	}
}

/// Slot, clip and frame count of every landing-group entry for `kind`
fn landing_plan(kind: JumpKind) -> [(TableSlot, AnimationOffset, u16); 5] {
	match kind {
		JumpKind::Regular => [
			(TableSlot::Land, AnimationOffset::LandRegular, frames::LAND_REGULAR),
			(TableSlot::FallLand, AnimationOffset::Fall, frames::LAND_FALL),
			(TableSlot::FallLandUnarmed, AnimationOffset::FallFree, frames::LAND_FALL),
			(TableSlot::LandShort, AnimationOffset::LandShort, frames::LAND_SHORT),
			(TableSlot::LandShortUnarmed, AnimationOffset::LandShortUnarmed, frames::LAND_SHORT_UNARMED),
		],
		JumpKind::Flip | JumpKind::Somersault => {
			TableSlot::LANDING_GROUP.map(|slot| (slot, kind.landing_clip(), kind.landing_frames()))
		}
	}
}

/// The override engine.
///
/// Owns all override state; the memory bus and the random source are borrowed
/// per call so the host keeps ownership of both.
#[derive(Debug, Clone)]
pub struct OverrideEngine {
	state: OverrideState,
	sequence: SequenceState,
	weights: SelectionWeights,
	mode: SelectionMode,
	rolling_sound: bool,
	clips: ClipTable,
	deferred: DeferredQueue,
	table_ptr: u32,
}

impl OverrideEngine {
	/// Creates an engine writing to the table behind [`GAMEPLAY_KEEP_PTR`]
	pub fn new(weights: SelectionWeights, mode: SelectionMode) -> Self {
		Self {
			state: OverrideState::default(),
			sequence: SequenceState::new(),
			weights,
			mode,
			rolling_sound: false,
			clips: ClipTable::new(),
			deferred: DeferredQueue::new(),
			table_ptr: GAMEPLAY_KEEP_PTR,
		}
	}

	/// Same engine, reading the table base from `table_ptr` instead
	pub fn with_table_ptr(mut self, table_ptr: u32) -> Self {
		self.table_ptr = table_ptr;
		self
	}

	/// Current state record
	pub fn state(&self) -> &OverrideState {
		&self.state
	}

	/// Sequential-mode cursor
	pub fn sequence(&self) -> &SequenceState {
		&self.sequence
	}

	/// Weights used in random mode
	pub fn weights(&self) -> &SelectionWeights {
		&self.weights
	}

	/// Current selection mode
	pub fn mode(&self) -> SelectionMode {
		self.mode
	}

	/// Clip locations
	pub fn clips(&self) -> &ClipTable {
		&self.clips
	}

	/// Replaces the weights; a new jump is drawn on the next grounded tick
	pub fn set_weights(&mut self, weights: SelectionWeights) {
		self.weights = weights;
		self.state.needs_update = true;
	}

	/// Switches selection mode, restarting the rotation
	pub fn set_mode(&mut self, mode: SelectionMode) {
		self.mode = mode;
		self.sequence.reset();
		self.state.needs_update = true;
	}

	/// Enables the roll sound one tick into every front flip
	pub fn set_rolling_sound(&mut self, enabled: bool) {
		self.rolling_sound = enabled;
	}

	/// Points the alternate clips at their heap copies
	pub fn install_clips(&mut self, clips: HeapClips) {
		self.clips.install(clips);
	}

	/// Phase implied by the current state and `signals`
	pub fn phase(&self, signals: &PlayerSignals) -> Phase {
		if signals.paused {
			return Phase::Paused;
		}
		match Sentinel::classify(signals.anim_id) {
			Sentinel::Landing => Phase::LandingLocked,
			Sentinel::Jump if self.state.jump_in_progress => Phase::JumpPlaying,
			_ => Phase::Idle,
		}
	}

	/// Handles a scene change.
	///
	/// The game reloads the table with the scene, dropping every override, so
	/// the engine falls back to the regular jump and selects anew.
	pub fn on_scene_change(&mut self) {
		self.state.needs_update = true;
		self.state.current_jump = JumpKind::Regular;
		self.sequence.reset();
	}

	/// Runs one simulation tick and returns the deferred actions that came due
	pub fn on_tick<B, R>(&mut self, bus: &mut B, signals: &PlayerSignals, rng: &mut R) -> Vec<DeferredAction>
	where
		B: MemoryBus + ?Sized,
		R: Rng + ?Sized,
	{
		let fired = self.deferred.tick();

		if signals.paused {
			self.state.was_paused = true;
			return fired;
		}

		if self.state.was_paused {
			self.apply_jump_swap(bus, self.state.current_jump);
			if self.state.jump_in_progress {
				self.apply_landing_swap(bus, self.state.current_jump);
			}
			self.state.was_paused = false;
		}

		match signals.state {
			PlayerState::Busy => {
				self.state.needs_update = true;
				return fired;
			}
			PlayerState::Swimming => {
				if self.state.current_landing != AnimationOffset::LandRegular {
					self.apply_landing_swap(bus, JumpKind::Regular);
				}
				self.state.needs_update = true;
				return fired;
			}
			PlayerState::Standing => {}
		}

		match Sentinel::classify(signals.anim_id) {
			Sentinel::Jump => {
				if !self.state.jump_in_progress {
					self.begin_jump(bus);
				}
			}
			Sentinel::Landing => {}
			Sentinel::Untracked => {
				if self.state.needs_update {
					let next = select_next(&self.weights, self.mode, &self.sequence, rng);
					self.apply_jump_swap(bus, next);
					self.state.needs_update = false;
				}

				// backflips, ledge drops and the like land without going through the jump slot
				if self.state.current_landing != AnimationOffset::LandRegular {
					self.apply_landing_swap(bus, JumpKind::Regular);
				}

				self.state.jump_in_progress = false;
			}
		}

		fired
	}

	/// Reads the jump slot back from the table
	pub fn jump_in_table<B: MemoryBus + ?Sized>(&self, bus: &B) -> AnimTableEntry {
		let mut raw = [0u8; ENTRY_SIZE];
		bus.read_ptr_bytes(self.table_ptr, u32::from(TableSlot::Jump.offset()), &mut raw);
		AnimTableEntry::from(raw)
	}

	/// Address currently in the jump slot, for display
	pub fn current_jump_label<B: MemoryBus + ?Sized>(&self, bus: &B) -> String {
		let entry = self.jump_in_table(bus);
		match self.clips.identify(&entry).and_then(|clip| JumpKind::ROTATION.into_iter().find(|kind| kind.jump_clip() == clip)) {
			Some(kind) => format!("0x{:06X} ({kind})", entry.address()),
			None => format!("0x{:06X}", entry.address()),
		}
	}

	fn begin_jump<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) {
		let jump = self.state.current_jump;
		self.apply_landing_swap(bus, jump);
		self.state.jump_in_progress = true;
		self.state.needs_update = true;

		if self.mode == SelectionMode::Sequential {
			self.sequence.advance();
		}

		if self.rolling_sound && jump == JumpKind::Flip {
			self.deferred.schedule(1, DeferredAction::PlaySfx(Sfx::Roll));
		}
	}

	fn write_entry<B: MemoryBus + ?Sized>(&self, bus: &mut B, slot: TableSlot, entry: AnimTableEntry) {
		bus.write_ptr_bytes(self.table_ptr, u32::from(slot.offset()), &entry.to_bytes());
	}

	fn apply_jump_swap<B: MemoryBus + ?Sized>(&mut self, bus: &mut B, kind: JumpKind) {
		let entry = self.clips.locate(kind.jump_clip()).entry(kind.jump_frames());
		debug!("jump slot <- {kind} {entry}");
		self.write_entry(bus, TableSlot::Jump, entry);
		self.state.current_jump = kind;
	}

	fn apply_landing_swap<B: MemoryBus + ?Sized>(&mut self, bus: &mut B, kind: JumpKind) {
		debug!("landing group <- {}", kind.landing_clip());
		for (slot, clip, frame_count) in landing_plan(kind) {
			let entry = self.clips.locate(clip).entry(frame_count);
			self.write_entry(bus, slot, entry);
		}
		self.state.current_landing = kind.landing_clip();
	}
}
