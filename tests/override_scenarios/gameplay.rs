use mmjumps::prelude::*;

use crate::common::{IDLE, Session};

#[test_log::test]
fn random_mode_follows_weights() {
	let mut session = Session::new(0x5EED);
	let cycles = 3000;

	let mut counts = [0usize; 3];
	for _ in 0..cycles {
		match session.jump_cycle() {
			JumpKind::Regular => counts[0] += 1,
			JumpKind::Flip => counts[1] += 1,
			JumpKind::Somersault => counts[2] += 1,
		}
	}

	let weights = session.plugin.selection_weights();
	for (kind, count) in JumpKind::ROTATION.into_iter().zip(counts) {
		let share = count as f64 / cycles as f64;
		let expected = weights.probability(kind);
		assert!((share - expected).abs() < 0.04, "{kind}: {share:.3} vs {expected:.3}");
	}
}

#[test_log::test]
fn zero_weight_jump_never_drawn() {
	let mut session = Session::new(99);
	session.plugin.set_weights(50, 50, 0).unwrap();

	for _ in 0..500 {
		assert_ne!(session.jump_cycle(), JumpKind::Somersault);
	}
}

#[test_log::test]
fn sequential_mode_rotates_once_per_jump() {
	let mut session = Session::new(1);
	session.plugin.set_sequential_mode(true);

	let jumps: Vec<_> = (0..7).map(|_| session.jump_cycle()).collect();
	assert_eq!(
		jumps,
		[
			JumpKind::Regular,
			JumpKind::Flip,
			JumpKind::Somersault,
			JumpKind::Regular,
			JumpKind::Flip,
			JumpKind::Somersault,
			JumpKind::Regular,
		]
	);
}

#[test_log::test]
fn toggling_sequential_mode_restarts_rotation() {
	let mut session = Session::new(1);
	session.plugin.set_sequential_mode(true);
	session.jump_cycle();
	session.jump_cycle();

	session.plugin.set_sequential_mode(false);
	session.plugin.set_sequential_mode(true);
	assert_eq!(session.jump_cycle(), JumpKind::Regular);
}

#[test_log::test]
fn pause_reload_is_repaired_on_unpause() {
	let mut session = Session::new(3);
	session.plugin.set_weights(0, 0, 1).unwrap();

	session.tick(PlayerSignals::playing(IDLE));
	session.tick(PlayerSignals::slot(TableSlot::Jump));
	let committed = session.table_bytes();

	// the pause menu reloads the table behind the plugin's back
	session.tick(PlayerSignals::paused());
	for slot in [TableSlot::Jump].into_iter().chain(TableSlot::LANDING_GROUP) {
		session.ram.write_ptr_bytes(GAMEPLAY_KEEP_PTR, u32::from(slot.offset()), &[0; ENTRY_SIZE]);
	}
	session.hold(PlayerSignals::paused(), 20);
	assert_ne!(session.table_bytes(), committed);

	session.tick(PlayerSignals::slot(TableSlot::Jump));
	assert_eq!(session.table_bytes(), committed);
	assert_eq!(session.clip_in(TableSlot::Land), Some(AnimationOffset::LandSomersault));
}

#[test_log::test]
fn scene_change_mid_jump_falls_back_to_regular() {
	let mut session = Session::new(4);
	session.plugin.set_sequential_mode(true);
	session.jump_cycle();
	session.hold(PlayerSignals::playing(IDLE), 2);
	assert_eq!(session.current_jump(), JumpKind::Flip);

	session.tick(PlayerSignals::slot(TableSlot::Jump));
	session.plugin.on_scene_change();
	let state = *session.plugin.engine().state();
	assert_eq!(state.current_jump, JumpKind::Regular);
	assert!(state.needs_update);

	// the rest of the jump plays out in the new scene
	session.hold(PlayerSignals::slot(TableSlot::Jump), 6);
	session.hold(PlayerSignals::slot(TableSlot::Land), 10);

	assert_eq!(session.jump_cycle(), JumpKind::Regular);
	assert_eq!(session.jump_cycle(), JumpKind::Flip);
}

#[test_log::test]
fn swimming_keeps_regular_landing() {
	let mut session = Session::new(5);
	session.plugin.set_weights(0, 1, 0).unwrap();

	session.tick(PlayerSignals::playing(IDLE));
	session.tick(PlayerSignals::slot(TableSlot::Jump));
	assert_eq!(session.clip_in(TableSlot::Land), Some(AnimationOffset::LandFlip));

	// jumped into water
	let swimming = PlayerSignals::playing(IDLE).with_state(PlayerState::Swimming);
	session.hold(swimming, 30);
	assert_eq!(session.clip_in(TableSlot::Land), Some(AnimationOffset::LandRegular));
	assert_eq!(session.clip_in(TableSlot::FallLand), Some(AnimationOffset::Fall));
	assert!(session.plugin.engine().state().needs_update);

	// climbing out picks a new jump
	session.tick(PlayerSignals::playing(IDLE));
	assert!(!session.plugin.engine().state().needs_update);
	assert!(!session.plugin.engine().state().jump_in_progress);
}

#[test_log::test]
fn busy_player_is_left_alone() {
	let mut session = Session::new(6);
	session.plugin.set_weights(0, 1, 0).unwrap();
	session.tick(PlayerSignals::playing(IDLE));
	let before = session.table_bytes();

	// a jump animation played during a cutscene is not ours to handle
	let busy = PlayerSignals::slot(TableSlot::Jump).with_state(PlayerState::Busy);
	session.hold(busy, 10);
	assert_eq!(session.table_bytes(), before);
	assert!(!session.plugin.engine().state().jump_in_progress);
	assert!(session.plugin.engine().state().needs_update);
}

#[test_log::test]
fn ledge_drop_uses_regular_landing() {
	let mut session = Session::new(7);
	session.plugin.set_weights(0, 0, 1).unwrap();

	session.tick(PlayerSignals::playing(IDLE));
	assert_eq!(session.clip_in(TableSlot::Jump), Some(AnimationOffset::JumpSomersault));

	// walked off an edge instead of jumping
	session.hold(PlayerSignals::playing(IDLE + 1), 8);
	session.hold(PlayerSignals::slot(TableSlot::FallLand), 0x15);
	assert_eq!(session.clip_in(TableSlot::FallLand), Some(AnimationOffset::Fall));
	assert_eq!(session.clip_in(TableSlot::Jump), Some(AnimationOffset::JumpSomersault));
}

#[test_log::test]
fn rolling_sound_once_per_flip() {
	let mut session = Session::new(8);
	session.plugin.set_rolling_sound(true);
	session.plugin.set_sequential_mode(true);

	let mut rolls = Vec::new();
	for _ in 0..6 {
		session.hold(PlayerSignals::playing(IDLE), 2);
		let jump = session.current_jump();
		let fired = session.hold(PlayerSignals::slot(TableSlot::Jump), usize::from(jump.jump_frames()));
		session.hold(PlayerSignals::slot(TableSlot::Land), usize::from(jump.landing_frames()));
		rolls.push((jump, fired.len()));
	}

	for (jump, count) in rolls {
		let expected = usize::from(jump == JumpKind::Flip);
		assert_eq!(count, expected, "{jump}");
	}
}
