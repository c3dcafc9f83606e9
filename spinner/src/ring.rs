use serde::{Serialize, Deserialize};

use crate::reward::{RewardDrawer, RewardType};

/// One visual unit on the strip: a scroll position, the reward it currently
/// shows, and its stable index in the ring.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub x: f32,
    pub reward: RewardType,
}

/// Ring dimensions, derived once from the viewport and fixed thereafter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub slot_width: f32,
    pub slot_count: usize,
    /// Scroll threshold well left of the visible area; a slot crossing it
    /// is recycled to the right end, out of the viewer's sight.
    pub death_x: f32,
}

impl RingGeometry {
    /// Slots are a quarter of the viewport height wide. The count covers
    /// the visible width plus margin on both sides for the ramp animation.
    pub fn from_viewport(width: f32, height: f32) -> Self {
        let slot_width = height / 4.0;
        let slot_count = (width / slot_width) as usize + 5;
        let death_x = -(width / 2.0) - 3.0 * slot_width;
        Self { slot_width, slot_count, death_x }
    }
}

/// Fixed-size circular strip of slots. Scrolling is a rigid translation of
/// every slot; the one that crosses the death position is moved to the
/// right end with a fresh reward, so the strip appears endless.
#[derive(Debug, Clone)]
pub struct SlotRing {
    slots: Vec<Slot>,
    geometry: RingGeometry,
    leftmost: usize,
}

impl SlotRing {
    pub fn new(geometry: RingGeometry, drawer: &mut RewardDrawer) -> Self {
        let slots = (0..geometry.slot_count)
            .map(|index| Slot {
                index,
                x: geometry.death_x + index as f32 * geometry.slot_width,
                reward: drawer.next_reward(),
            })
            .collect();
        Self { slots, geometry, leftmost: 0 }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn geometry(&self) -> RingGeometry {
        self.geometry
    }

    /// Index of the next slot to be recycled.
    pub fn leftmost(&self) -> usize {
        self.leftmost
    }

    /// Scrolls every slot left by `speed * delta`, then recycles the
    /// leftmost slot if it crossed the death position: it is repositioned
    /// one slot width right of the current rightmost slot with a freshly
    /// drawn reward, and the leftmost role passes to its successor. At
    /// most one slot recycles per call; ticks are assumed short enough
    /// that the strip never travels a full slot width in one step.
    pub fn advance(&mut self, speed: f32, delta: f32, drawer: &mut RewardDrawer) {
        for slot in &mut self.slots {
            slot.x -= speed * delta;
        }

        if self.slots[self.leftmost].x <= self.geometry.death_x {
            let count = self.slots.len();
            let rightmost = (self.leftmost + count - 1) % count;
            let recycled_x = self.slots[rightmost].x + self.geometry.slot_width;

            let slot = &mut self.slots[self.leftmost];
            slot.x = recycled_x;
            slot.reward = drawer.next_reward();

            self.leftmost = (self.leftmost + 1) % count;
        }
    }
}
