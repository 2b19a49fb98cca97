use mmjumps::prelude::*;

use crate::common::{HEAP_BASE, IDLE, Session};

const JUMP_FLIP_AT: u32 = HEAP_BASE + 0x10;
const LAND_FLIP_AT: u32 = HEAP_BASE + 0x10 + 0x2A8 + 0x2D0;

#[test_log::test]
fn flip_entries_point_into_heap() {
	let mut session = Session::new(10);
	session.plugin.set_weights(0, 1, 0).unwrap();

	session.tick(PlayerSignals::playing(IDLE));
	session.tick(PlayerSignals::slot(TableSlot::Jump));

	assert_eq!(session.entry(TableSlot::Jump).to_bytes(), [0x00, 0x0D, 0, 0, 0x80, 0x60, 0x00, 0x10]);
	assert_eq!(session.entry(TableSlot::Jump).address(), JUMP_FLIP_AT & 0x00FF_FFFF);
	for slot in TableSlot::LANDING_GROUP {
		let entry = session.entry(slot);
		assert_eq!(entry.to_bytes(), [0x00, 0x0D, 0, 0, 0x80, 0x60, 0x05, 0x88], "{slot:?}");
		assert_eq!(entry.address(), LAND_FLIP_AT & 0x00FF_FFFF);
	}
	assert_eq!(session.ram.read_u8(LAND_FLIP_AT), 0xF2);
}

#[test_log::test]
fn regular_landing_group_is_vanilla() {
	let mut session = Session::new(11);
	session.plugin.set_weights(0, 0, 1).unwrap();
	session.jump_cycle();
	session.plugin.set_weights(1, 0, 0).unwrap();
	session.tick(PlayerSignals::playing(IDLE));

	let expected = [
		(TableSlot::Land, [0x00, 0x10, 0, 0, 0x07, 0x1B, 0x72, 0xE0]),
		(TableSlot::FallLand, [0x00, 0x15, 0, 0, 0x07, 0x19, 0xD3, 0xE0]),
		(TableSlot::FallLandUnarmed, [0x00, 0x15, 0, 0, 0x07, 0x19, 0xDE, 0xE0]),
		(TableSlot::LandShort, [0x00, 0x10, 0, 0, 0x07, 0x1B, 0x72, 0xE0]),
		(TableSlot::LandShortUnarmed, [0x00, 0x10, 0, 0, 0x07, 0x1B, 0x7B, 0x40]),
	];
	for (slot, bytes) in expected {
		assert_eq!(session.entry(slot).to_bytes(), bytes, "{slot:?}");
	}
	assert_eq!(session.entry(TableSlot::Jump).to_bytes(), [0x00, 0x0D, 0, 0, 0x07, 0x1B, 0x4B, 0x00]);
}

#[test_log::test]
fn landing_locks_table() {
	let mut session = Session::new(12);
	session.plugin.set_weights(0, 1, 0).unwrap();
	session.tick(PlayerSignals::playing(IDLE));
	session.hold(PlayerSignals::slot(TableSlot::Jump), 5);

	let locked = session.table_bytes();
	session.plugin.set_weights(0, 0, 1).unwrap();
	session.plugin.set_sequential_mode(true);
	for slot in [TableSlot::Land, TableSlot::LandShort, TableSlot::NormalLandingWait] {
		session.hold(PlayerSignals::slot(slot), 4);
		assert_eq!(session.table_bytes(), locked, "{slot:?}");
	}

	session.tick(PlayerSignals::playing(IDLE));
	assert_ne!(session.table_bytes(), locked);
}

#[test_log::test]
fn pause_freezes_table() {
	let mut session = Session::new(13);
	session.jump_cycle();
	let frozen = session.table_bytes();

	session.plugin.set_weights(0, 0, 1).unwrap();
	for anim_id in [IDLE, TableSlot::Jump.offset(), TableSlot::Land.offset(), IDLE] {
		session.tick(PlayerSignals { paused: true, anim_id, ..PlayerSignals::default() });
		assert_eq!(session.table_bytes(), frozen);
	}
}

#[test_log::test]
fn debug_window_reports_heap_layout() {
	let mut session = Session::new(14);
	session.plugin.set_weights(0, 1, 0).unwrap();
	session.tick(PlayerSignals::playing(IDLE));

	let snapshot = session.plugin.debug_snapshot(&session.ram);
	assert_eq!(snapshot.current_jump, "0x600010 (Front Flip)");
	assert_eq!(snapshot.jump_flip, Some(JUMP_FLIP_AT));
	assert_eq!(snapshot.heap_used, 0x10 + payloads_len());
}

fn payloads_len() -> u32 {
	crate::common::payloads().total_len() as u32
}
