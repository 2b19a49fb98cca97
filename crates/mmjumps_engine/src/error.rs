//! Error types for configuration and asset loading.

use std::path::PathBuf;

use mmjumps_types::{anim::AnimationOffset, error::HeapError};
use thiserror::Error;

/// Errors that can occur when reading or writing the plugin configuration
#[derive(Debug, Error)]
pub enum ConfigError {
	/// All three jump weights are zero
	#[error("Jump weights in config sum to zero")]
	ZeroTotalWeight,

	/// The config file could not be parsed
	#[error(transparent)]
	Source(#[from] config::ConfigError),

	/// The config could not be serialized
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur while installing the alternate animations.
///
/// Any of these disables the override for the rest of the session.
#[derive(Debug, Error)]
pub enum LoadError {
	/// A payload file could not be read
	#[error("Cannot read {clip} animation from {}: {source}", path.display())]
	AssetLoadFailure {
		/// Clip the file holds
		clip: AnimationOffset,
		/// Path that was read
		path: PathBuf,
		/// Underlying IO error
		source: std::io::Error,
	},

	/// A payload contains no data
	#[error("{0} animation payload is empty")]
	EmptyPayload(AnimationOffset),

	/// The payloads do not fit in the heap
	#[error(transparent)]
	Heap(#[from] HeapError),
}
