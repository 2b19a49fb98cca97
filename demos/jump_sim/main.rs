//! Jump override simulator.
//!
//! Drives [`JumpsPlugin`] over an in-process RDRAM image with a scripted
//! idle → jump → land loop, logging every jump the plugin commits.
//!
//! # Usage
//!
//! ```bash
//! # 30 cycles with synthetic payloads and the default config
//! cargo run --example jump_sim -- run --cycles 30
//!
//! # Real payloads, sequential mode, reproducible draws
//! cargo run --example jump_sim -- run --assets ./plugin --sequential --seed 42
//!
//! # Hex dump of the table slots after one front flip
//! cargo run --example jump_sim -- dump --kind flip
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{info, warn};
use mmjumps::prelude::*;

/// Where the simulated game keeps its animation table
const TABLE_BASE: u32 = 0x8010_0000;

/// Where the host hands out the plugin heap
const HEAP_BASE: u32 = 0x8060_0000;

fn main() -> Result<()> {
	env_logger::init_from_env(Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Run(args) => run(args),
		Command::Dump(args) => dump(args),
	}
}

#[derive(Parser)]
#[command(name = "jump_sim")]
#[command(author = "mmjumps project")]
#[command(version)]
#[command(about = "Simulate the jump animation override over a scripted session", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Run scripted jump cycles and report what was committed
	Run(RunArgs),
	/// Dump the table slots after a single jump
	Dump(DumpArgs),
}

#[derive(Args)]
struct SessionArgs {
	/// Config file; created with defaults when saved
	#[arg(short, long, value_name = "FILE", default_value = "mm_jumps.json")]
	config: PathBuf,

	/// Directory holding the four payload files; synthetic payloads when absent
	#[arg(short, long, value_name = "DIR")]
	assets: Option<PathBuf>,

	/// Seed for the jump draws
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,
}

#[derive(Args)]
struct RunArgs {
	#[command(flatten)]
	session: SessionArgs,

	/// Number of idle → jump → land cycles
	#[arg(short = 'n', long, value_name = "COUNT", default_value_t = 12)]
	cycles: usize,

	/// Pause the game mid-air every N cycles (0 disables)
	#[arg(long, value_name = "N", default_value_t = 4)]
	pause_every: usize,

	/// Change scene every N cycles (0 disables)
	#[arg(long, value_name = "N", default_value_t = 0)]
	scene_every: usize,

	/// Override the config's weights: DEFAULT FLIP SOMERSAULT
	#[arg(long, value_name = "WEIGHT", num_args = 3)]
	weights: Option<Vec<u32>>,

	/// Rotate through the jumps instead of drawing them
	#[arg(long, default_value_t = false)]
	sequential: bool,

	/// Play the roll sound during front flips
	#[arg(long, default_value_t = false)]
	rolling_sound: bool,

	/// Save the resulting settings back to the config file
	#[arg(long, default_value_t = false)]
	save: bool,
}

#[derive(Args)]
struct DumpArgs {
	#[command(flatten)]
	session: SessionArgs,

	/// Jump to perform before dumping
	#[arg(short, long, value_enum, default_value_t = KindArg::Flip)]
	kind: KindArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
	Regular,
	Flip,
	Somersault,
}

impl From<KindArg> for JumpKind {
	fn from(value: KindArg) -> Self {
		match value {
			KindArg::Regular => Self::Regular,
			KindArg::Flip => Self::Flip,
			KindArg::Somersault => Self::Somersault,
		}
	}
}

/// Synthetic clips sized like the real ones
fn synthetic_payloads() -> AnimationPayloads {
	AnimationPayloads {
		jump_flip: vec![0xF1; 0x2A8],
		land_flip: vec![0xF2; 0x1E8],
		jump_somersault: vec![0x51; 0x2D0],
		land_somersault: vec![0x52; 0x230],
	}
}

fn start_session(args: &SessionArgs) -> Result<(JumpsPlugin, Rdram)> {
	let mut plugin = JumpsPlugin::init(&args.config);
	if let Some(seed) = args.seed {
		plugin = plugin.seed(seed);
	}

	let mut ram = Rdram::default();
	ram.write_u32(GAMEPLAY_KEEP_PTR, TABLE_BASE);

	match &args.assets {
		Some(dir) => plugin
			.load_and_install(&mut ram, HEAP_BASE, dir, &AssetManifest::default())
			.with_context(|| format!("Failed to install payloads from {}", dir.display()))?,
		None => plugin
			.install_assets(&mut ram, HEAP_BASE, &synthetic_payloads())
			.context("Failed to install synthetic payloads")?,
	}

	Ok((plugin, ram))
}

/// Ticks `plugin` with `signals` `frames` times, logging any deferred action
fn hold(plugin: &mut JumpsPlugin, ram: &mut Rdram, signals: PlayerSignals, frames: u16) {
	for _ in 0..frames {
		for action in plugin.on_tick(ram, &signals) {
			info!("  > {action:?}");
		}
	}
}

fn run(args: RunArgs) -> Result<()> {
	let (mut plugin, mut ram) = start_session(&args.session)?;

	if let Some(weights) = &args.weights {
		plugin
			.set_weights(weights[0], weights[1], weights[2])
			.context("Invalid weights")?;
	}
	if args.sequential {
		plugin.set_sequential_mode(true);
	}
	if args.rolling_sound {
		plugin.set_rolling_sound(true);
	}
	info!("Weights: {}, mode: {:?}", plugin.selection_weights(), plugin.engine().mode());

	let idle = PlayerSignals::playing(0);
	let mut counts = [0usize; 3];

	for cycle in 1..=args.cycles {
		// the first grounded frame commits the next jump
		hold(&mut plugin, &mut ram, idle, 2);
		let jump = plugin.engine().state().current_jump;
		info!("#{cycle:>3} {jump:<10} {}", plugin.current_jump_label(&ram));
		counts[JumpKind::ROTATION.iter().position(|&k| k == jump).unwrap_or(0)] += 1;

		hold(&mut plugin, &mut ram, PlayerSignals::slot(TableSlot::Jump), jump.jump_frames() / 2);
		if args.pause_every > 0 && cycle % args.pause_every == 0 {
			info!("      paused mid-air");
			hold(&mut plugin, &mut ram, PlayerSignals::paused(), 30);
		}
		hold(&mut plugin, &mut ram, PlayerSignals::slot(TableSlot::Jump), jump.jump_frames() / 2);
		hold(&mut plugin, &mut ram, PlayerSignals::slot(TableSlot::Land), jump.landing_frames());

		if args.scene_every > 0 && cycle % args.scene_every == 0 {
			info!("      scene change");
			plugin.on_scene_change();
		}
	}

	for (kind, count) in JumpKind::ROTATION.iter().zip(counts) {
		let share = if args.cycles == 0 {
			0.0
		} else {
			count as f64 / args.cycles as f64
		};
		info!(
			"{kind:<10} {count:>4} ({:5.1}%, expected {:5.1}%)",
			share * 100.0,
			plugin.selection_weights().probability(*kind) * 100.0
		);
	}
	info!("\n{}", plugin.debug_snapshot(&ram));

	if args.save {
		plugin.save_config()?;
		info!("Saved {}", plugin.config_path().display());
	}

	Ok(())
}

fn dump(args: DumpArgs) -> Result<()> {
	let (mut plugin, mut ram) = start_session(&args.session)?;
	let kind = JumpKind::from(args.kind);

	match kind {
		JumpKind::Regular => plugin.set_weights(1, 0, 0),
		JumpKind::Flip => plugin.set_weights(0, 1, 0),
		JumpKind::Somersault => plugin.set_weights(0, 0, 1),
	}
	.context("Invalid weights")?;
	plugin.set_sequential_mode(false);

	plugin.on_tick(&mut ram, &PlayerSignals::playing(0));
	plugin.on_tick(&mut ram, &PlayerSignals::slot(TableSlot::Jump));
	if plugin.engine().state().current_jump != kind {
		warn!("Expected {kind}, the table holds {}", plugin.engine().state().current_jump);
	}

	let clips = plugin.engine().clips();
	for slot in [TableSlot::Jump].into_iter().chain(TableSlot::LANDING_GROUP) {
		let mut raw = [0u8; ENTRY_SIZE];
		ram.read_ptr_bytes(GAMEPLAY_KEEP_PTR, u32::from(slot.offset()), &mut raw);
		let entry = AnimTableEntry::from(raw);
		let clip = clips
			.identify(&entry)
			.map_or_else(|| "?".to_string(), |clip| clip.to_string());
		info!("{:<18} {}  {entry}  {clip}", format!("{slot:?}"), hex::encode_upper(raw));
	}

	Ok(())
}
