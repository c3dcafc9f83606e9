use serde::{Serialize, Deserialize};

use crate::reward::RewardType;
use crate::ring::Slot;

/// Outcome of a completed spin: the slot that came to rest closest to the
/// center reference and the reward it carries. Recomputed on every stop,
/// never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WinnerResult {
    pub slot_index: usize,
    pub reward: RewardType,
}

/// Picks the slot with the smallest distance to the center reference
/// (x = 0). Ties resolve to the lowest ring index. Only meaningful once
/// the ring is stationary; the controller guards the call behind its
/// stopped state.
pub fn resolve_winner(slots: &[Slot]) -> WinnerResult {
    debug_assert!(!slots.is_empty(), "cannot resolve a winner on an empty ring");
    let mut winner = &slots[0];
    let mut smallest = slots[0].x.abs();
    for slot in &slots[1..] {
        let distance = slot.x.abs();
        if distance < smallest {
            smallest = distance;
            winner = slot;
        }
    }
    WinnerResult { slot_index: winner.index, reward: winner.reward }
}
