//! One-shot actions that run a fixed number of ticks after being scheduled.

/// Sound effects the engine asks the host to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
	/// Player roll
	Roll,
}

/// Work handed back to the host when its countdown expires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredAction {
	/// Play a sound effect
	PlaySfx(Sfx),
}

/// Countdown-driven queue, advanced once per tick.
///
/// Scheduled actions cannot be cancelled.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
	pending: Vec<(u32, DeferredAction)>,
}

impl DeferredQueue {
	/// Creates an empty queue
	pub fn new() -> Self {
		Self::default()
	}

	/// Runs `action` on the `frames`-th following tick (at least the next one)
	pub fn schedule(&mut self, frames: u32, action: DeferredAction) {
		self.pending.push((frames.max(1), action));
	}

	/// Advances every countdown and returns the actions that came due, oldest first
	pub fn tick(&mut self) -> Vec<DeferredAction> {
		let mut fired = Vec::new();
		self.pending.retain_mut(|(countdown, action)| {
			*countdown -= 1;
			if *countdown == 0 {
				fired.push(*action);
				return false;
			}
			true
		});
		fired
	}

	/// Number of actions still waiting
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Returns `true` if nothing is waiting
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}
}
