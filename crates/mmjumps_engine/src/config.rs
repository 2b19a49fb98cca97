//! Persisted plugin settings.
//!
//! The config is a small JSON document next to the plugin:
//!
//! ```json
//! {
//!      "config_version": "1.3",
//!      "default_jump_weight": 34,
//!      "rolling_jump_weight": 33,
//!      "somersault_jump_weight": 33,
//!      "sequential_mode": false,
//!      "use_rolling_sound": false
//! }
//! ```
//!
//! Older files may lack the two flags; they default to `false`. A file written
//! by another plugin version keeps its values and is rewritten with the current
//! version string.

use std::{fs, path::Path};

use config::{Config, File, FileFormat};
use log::{error, info, warn};
use mmjumps_types::select::{SelectionMode, SelectionWeights};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Version string written into new config files
pub const CONFIG_VERSION: &str = "1.3";

/// Plugin settings as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpsConfig {
	/// Version of the plugin that wrote the file
	pub config_version: String,

	/// Weight of the vanilla jump
	pub default_jump_weight: u32,

	/// Weight of the front flip
	pub rolling_jump_weight: u32,

	/// Weight of the somersault
	pub somersault_jump_weight: u32,

	/// Rotate through the jumps instead of drawing them
	#[serde(default)]
	pub sequential_mode: bool,

	/// Play the roll sound effect during a front flip
	#[serde(default)]
	pub use_rolling_sound: bool,
}

impl Default for JumpsConfig {
	fn default() -> Self {
		let weights = SelectionWeights::default();
		Self {
			config_version: CONFIG_VERSION.to_string(),
			default_jump_weight: weights.default_weight(),
			rolling_jump_weight: weights.flip_weight(),
			somersault_jump_weight: weights.somersault_weight(),
			sequential_mode: false,
			use_rolling_sound: false,
		}
	}
}

impl JumpsConfig {
	/// Validated jump weights
	pub fn weights(&self) -> Result<SelectionWeights, ConfigError> {
		SelectionWeights::new(
			self.default_jump_weight,
			self.rolling_jump_weight,
			self.somersault_jump_weight,
		)
		.map_err(|_| ConfigError::ZeroTotalWeight)
	}

	/// Stores a new weight triple
	pub fn set_weights(&mut self, weights: SelectionWeights) {
		self.default_jump_weight = weights.default_weight();
		self.rolling_jump_weight = weights.flip_weight();
		self.somersault_jump_weight = weights.somersault_weight();
	}

	/// Selection mode implied by `sequential_mode`
	pub fn selection_mode(&self) -> SelectionMode {
		SelectionMode::from(self.sequential_mode)
	}

	/// Reads the config at `path`.
	///
	/// Returns `Ok(None)` when the file does not exist. A file from another
	/// version is migrated in place.
	pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
		let path = path.as_ref();
		if !path.exists() {
			return Ok(None);
		}

		let mut config: Self = Config::builder()
			.add_source(File::from(path).format(FileFormat::Json))
			.build()?
			.try_deserialize()?;

		if config.config_version != CONFIG_VERSION {
			info!(
				"Config file out of date ({} -> {}), updating...",
				config.config_version, CONFIG_VERSION
			);
			config.config_version = CONFIG_VERSION.to_string();
			config.save(path)?;
		}

		config.weights()?;
		Ok(Some(config))
	}

	/// Reads the config at `path`, falling back to the defaults on any problem.
	///
	/// An unreadable file is overwritten with the defaults.
	pub fn load_or_default(path: impl AsRef<Path>) -> Self {
		let path = path.as_ref();
		match Self::load(path) {
			Ok(Some(config)) => config,
			Ok(None) => Self::default(),
			Err(ConfigError::ZeroTotalWeight) => {
				warn!("Jump weights in {} sum to zero, using default weights", path.display());
				Self::default()
			}
			Err(e) => {
				error!("{e}");
				warn!("Error reading config file {}! Loading default values...", path.display());
				let config = Self::default();
				if let Err(e) = config.save(path) {
					error!("Cannot rewrite config file: {e}");
				}
				config
			}
		}
	}

	/// Writes the config as pretty JSON
	pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
		let json = serde_json::to_string_pretty(self)?;
		fs::write(path, json)?;
		Ok(())
	}
}
