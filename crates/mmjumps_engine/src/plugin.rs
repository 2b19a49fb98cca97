//! Host-facing plugin lifecycle.
//!
//! [`JumpsPlugin`] ties the persisted config, the heap and the override engine
//! together and exposes the handful of entry points a host emulator calls:
//! once at startup ([`JumpsPlugin::init`]), once when the game's memory is ready
//! ([`JumpsPlugin::install_assets`]), then every frame and on every scene
//! change. The menu mutators persist through [`JumpsPlugin::save_config`].

use std::{
	fmt::{Display, Formatter},
	path::{Path, PathBuf},
};

use log::{error, info, warn};
use mmjumps_types::{
	anim::constants::HEAP_SIZE,
	bus::MemoryBus,
	error::WeightsError,
	heap::Heap,
	select::{SelectionMode, SelectionWeights},
};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
	assets::{AnimationPayloads, AssetManifest},
	clips::HeapClips,
	config::JumpsConfig,
	deferred::DeferredAction,
	error::{ConfigError, LoadError},
	machine::{OverrideEngine, OverrideState, PlayerSignals},
};

/// The jump override plugin
#[derive(Debug, Clone)]
pub struct JumpsPlugin {
	config_path: PathBuf,
	config: JumpsConfig,
	engine: OverrideEngine,
	heap: Option<Heap>,
	load_success: bool,
	rng: SmallRng,
}

impl JumpsPlugin {
	/// Loads the config at `config_path`, falling back to the defaults
	pub fn init(config_path: impl AsRef<Path>) -> Self {
		let config_path = config_path.as_ref();
		let config = JumpsConfig::load_or_default(config_path);
		Self::with_config(config_path, config)
	}

	/// Builds the plugin from an already loaded config.
	///
	/// Weights summing to zero are replaced by the defaults, in the config too.
	pub fn with_config(config_path: impl Into<PathBuf>, mut config: JumpsConfig) -> Self {
		let weights = config.weights().unwrap_or_else(|e| {
			warn!("{e}, using default weights");
			let weights = SelectionWeights::default();
			config.set_weights(weights);
			weights
		});
		let mut engine = OverrideEngine::new(weights, config.selection_mode());
		engine.set_rolling_sound(config.use_rolling_sound);

		Self {
			config_path: config_path.into(),
			config,
			engine,
			heap: None,
			load_success: false,
			rng: SmallRng::from_os_rng(),
		}
	}

	/// Replaces the random source with a seeded one
	pub fn seed(mut self, seed: u64) -> Self {
		self.rng = SmallRng::seed_from_u64(seed);
		self
	}

	/// Copies the alternate clips into a fresh heap at `heap_base`.
	///
	/// On failure the override stays disabled for the session.
	pub fn install_assets<B: MemoryBus + ?Sized>(
		&mut self,
		bus: &mut B,
		heap_base: u32,
		payloads: &AnimationPayloads,
	) -> Result<(), LoadError> {
		self.load_success = false;

		let placed = payloads.validate().and_then(|()| {
			let mut heap = Heap::new(heap_base, HEAP_SIZE);
			let clips = HeapClips::place(&mut heap, bus, payloads)?;
			Ok((heap, clips))
		});

		match placed {
			Ok((heap, clips)) => {
				self.engine.install_clips(clips);
				info!(
					"Placed {} bytes of animation data at 0x{:08X}",
					heap.used(),
					heap.base()
				);
				self.heap = Some(heap);
				self.load_success = true;
				info!("Majora's Mask jump animations loaded!");
				Ok(())
			}
			Err(e) => {
				error!("Error copying jump animations to heap!");
				error!("{e}");
				Err(e)
			}
		}
	}

	/// Reads the payload files listed in `manifest` and installs them
	pub fn load_and_install<B: MemoryBus + ?Sized>(
		&mut self,
		bus: &mut B,
		heap_base: u32,
		dir: impl AsRef<Path>,
		manifest: &AssetManifest,
	) -> Result<(), LoadError> {
		let payloads = AnimationPayloads::load(dir, manifest).inspect_err(|e| {
			error!("Error reading Majora's Mask jump animation files!");
			error!("{e}");
		})?;
		self.install_assets(bus, heap_base, &payloads)
	}

	/// Per-frame entry point; does nothing until the assets are installed
	pub fn on_tick<B: MemoryBus + ?Sized>(&mut self, bus: &mut B, signals: &PlayerSignals) -> Vec<DeferredAction> {
		if !self.load_success {
			return Vec::new();
		}
		self.engine.on_tick(bus, signals, &mut self.rng)
	}

	/// The game reloaded the animation table
	pub fn on_scene_change(&mut self) {
		self.engine.on_scene_change();
	}

	/// Sets new jump weights; rejected if they sum to zero
	pub fn set_weights(&mut self, default: u32, flip: u32, somersault: u32) -> Result<(), WeightsError> {
		let weights = SelectionWeights::new(default, flip, somersault)?;
		self.config.set_weights(weights);
		self.engine.set_weights(weights);
		Ok(())
	}

	/// Switches between drawing and rotating jumps
	pub fn set_sequential_mode(&mut self, enabled: bool) {
		self.config.sequential_mode = enabled;
		self.engine.set_mode(SelectionMode::from(enabled));
	}

	/// Toggles the roll sound during front flips
	pub fn set_rolling_sound(&mut self, enabled: bool) {
		self.config.use_rolling_sound = enabled;
		self.engine.set_rolling_sound(enabled);
	}

	/// Writes the current settings back to the config file
	pub fn save_config(&self) -> Result<(), ConfigError> {
		self.config.save(&self.config_path).inspect_err(|e| {
			error!("There was an error saving the changes to the config file!");
			error!("{e}");
		})
	}

	/// Weights currently in effect
	pub fn selection_weights(&self) -> SelectionWeights {
		*self.engine.weights()
	}

	/// Address in the jump slot, for display
	pub fn current_jump_label<B: MemoryBus + ?Sized>(&self, bus: &B) -> String {
		self.engine.current_jump_label(bus)
	}

	/// Collects the values shown in the debug window
	pub fn debug_snapshot<B: MemoryBus + ?Sized>(&self, bus: &B) -> DebugSnapshot {
		let clips = self.engine.clips().heap_clips();
		DebugSnapshot {
			current_jump: self.current_jump_label(bus),
			state: *self.engine.state(),
			heap_base: self.heap.as_ref().map(Heap::base),
			heap_used: self.heap.as_ref().map_or(0, Heap::used),
			signature: clips.map(|c| c.signature),
			jump_flip: clips.map(|c| c.jump_flip),
			jump_somersault: clips.map(|c| c.jump_somersault),
		}
	}

	/// `true` once the assets are installed
	pub fn load_success(&self) -> bool {
		self.load_success
	}

	/// Current settings
	pub fn config(&self) -> &JumpsConfig {
		&self.config
	}

	/// Path the settings are saved to
	pub fn config_path(&self) -> &Path {
		&self.config_path
	}

	/// The override engine
	pub fn engine(&self) -> &OverrideEngine {
		&self.engine
	}
}

/// Values shown in the debug window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugSnapshot {
	/// Address in the jump slot
	pub current_jump: String,
	/// Override state
	pub state: OverrideState,
	/// Start of the heap, once created
	pub heap_base: Option<u32>,
	/// Bytes allocated from the heap
	pub heap_used: u32,
	/// Address of the heap signature
	pub signature: Option<u32>,
	/// Address of the front flip jump
	pub jump_flip: Option<u32>,
	/// Address of the somersault jump
	pub jump_somersault: Option<u32>,
}

impl Display for DebugSnapshot {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let hex = |addr: Option<u32>| addr.map_or_else(|| "-".to_string(), |a| format!("0x{a:08X}"));

		writeln!(f, "Current Jump Selected: {}", self.current_jump)?;
		writeln!(
			f,
			"Jump: {}, Landing: {}, In Progress: {}, Needs Update: {}",
			self.state.current_jump, self.state.current_landing, self.state.jump_in_progress, self.state.needs_update
		)?;
		writeln!(f, "Jump Heap Location: {} (0x{:X} bytes used)", hex(self.heap_base), self.heap_used)?;
		writeln!(f, "Name Heap Location: {}", hex(self.signature))?;
		writeln!(f, "Jump Flip Heap Location: {}", hex(self.jump_flip))?;
		write!(f, "Jump Somersault Heap Location: {}", hex(self.jump_somersault))
	}
}
