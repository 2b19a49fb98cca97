use std::fs;

use mmjumps::prelude::*;

use crate::common::{HEAP_BASE, IDLE, Session, TABLE_BASE, payloads};

#[test_log::test]
fn outdated_config_is_migrated() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("mm_jumps.json");
	fs::write(
		&path,
		r#"{
			"config_version": "1.1",
			"default_jump_weight": 20,
			"rolling_jump_weight": 30,
			"somersault_jump_weight": 50
		}"#,
	)
	.unwrap();

	let plugin = JumpsPlugin::init(&path);
	assert_eq!(plugin.selection_weights(), SelectionWeights::new(20, 30, 50).unwrap());
	assert_eq!(plugin.engine().mode(), SelectionMode::Random);

	let on_disk: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
	assert_eq!(on_disk["config_version"], CONFIG_VERSION);
	assert_eq!(on_disk["somersault_jump_weight"], 50);
	assert_eq!(on_disk["sequential_mode"], false);
}

#[test_log::test]
fn broken_config_is_replaced_with_defaults() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("mm_jumps.json");
	fs::write(&path, "{ not json").unwrap();

	let plugin = JumpsPlugin::init(&path);
	assert_eq!(plugin.config(), &JumpsConfig::default());
	assert_eq!(JumpsConfig::load(&path).unwrap(), Some(JumpsConfig::default()));
}

#[test_log::test]
fn all_zero_weights_fall_back_to_defaults() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("mm_jumps.json");
	let zeroed = JumpsConfig {
		default_jump_weight: 0,
		rolling_jump_weight: 0,
		somersault_jump_weight: 0,
		..JumpsConfig::default()
	};
	zeroed.save(&path).unwrap();

	let plugin = JumpsPlugin::init(&path);
	assert_eq!(plugin.selection_weights(), SelectionWeights::default());
}

#[test_log::test]
fn saved_settings_survive_restart() {
	let mut session = Session::new(20);
	session.plugin.set_weights(5, 10, 85).unwrap();
	session.plugin.set_sequential_mode(true);
	session.plugin.set_rolling_sound(true);
	session.plugin.save_config().unwrap();

	let path = session.dir.path().join("mm_jumps.json");
	let restarted = JumpsPlugin::init(&path);
	assert_eq!(restarted.config(), session.plugin.config());
	assert!(restarted.config().use_rolling_sound);
	assert_eq!(restarted.engine().mode(), SelectionMode::Sequential);
}

#[test_log::test]
fn payload_files_are_loaded_from_disk() {
	let dir = tempfile::tempdir().unwrap();
	let manifest = AssetManifest {
		jump_flip_anim: "flip.bin".into(),
		land_flip_anim: "flip_land.bin".into(),
		jump_somersault_anim: "somer.bin".into(),
		land_somersault_anim: "somer_land.bin".into(),
	};
	let payloads = payloads();
	fs::write(dir.path().join("flip.bin"), &payloads.jump_flip).unwrap();
	fs::write(dir.path().join("flip_land.bin"), &payloads.land_flip).unwrap();
	fs::write(dir.path().join("somer.bin"), &payloads.jump_somersault).unwrap();
	fs::write(dir.path().join("somer_land.bin"), &payloads.land_somersault).unwrap();

	let mut ram = Rdram::default();
	ram.write_u32(GAMEPLAY_KEEP_PTR, TABLE_BASE);
	let mut plugin = JumpsPlugin::init(dir.path().join("mm_jumps.json")).seed(21);
	plugin.load_and_install(&mut ram, HEAP_BASE, dir.path(), &manifest).unwrap();
	assert!(plugin.load_success());

	let mut session = Session {
		plugin,
		ram,
		dir,
	};
	session.plugin.set_weights(0, 0, 1).unwrap();
	session.tick(PlayerSignals::playing(IDLE));
	assert_eq!(session.clip_in(TableSlot::Jump), Some(AnimationOffset::JumpSomersault));
}

#[test_log::test]
fn failed_install_never_touches_table() {
	let dir = tempfile::tempdir().unwrap();
	let mut ram = Rdram::default();
	ram.write_u32(GAMEPLAY_KEEP_PTR, TABLE_BASE);
	let mut plugin = JumpsPlugin::init(dir.path().join("mm_jumps.json"));

	let result = plugin.load_and_install(&mut ram, HEAP_BASE, dir.path().join("missing"), &AssetManifest::default());
	assert!(matches!(result, Err(LoadError::AssetLoadFailure { .. })));

	let before = ram.clone();
	for anim_id in [IDLE, TableSlot::Jump.offset(), TableSlot::Land.offset(), IDLE] {
		plugin.on_tick(&mut ram, &PlayerSignals::playing(anim_id));
	}
	plugin.on_scene_change();
	plugin.on_tick(&mut ram, &PlayerSignals::playing(IDLE));
	assert_eq!(ram, before);
}

#[test_log::test]
fn reinstall_after_failure_enables_override() {
	let dir = tempfile::tempdir().unwrap();
	let mut plugin = JumpsPlugin::init(dir.path().join("mm_jumps.json")).seed(22);
	let mut ram = Rdram::default();
	ram.write_u32(GAMEPLAY_KEEP_PTR, TABLE_BASE);

	let mut broken = payloads();
	broken.jump_somersault.clear();
	assert!(plugin.install_assets(&mut ram, HEAP_BASE, &broken).is_err());
	assert!(!plugin.load_success());

	let mut session = Session::with_plugin(plugin, dir);
	assert!(session.plugin.load_success());
	session.jump_cycle();
	assert_eq!(session.plugin.debug_snapshot(&session.ram).heap_base, Some(HEAP_BASE));
}
