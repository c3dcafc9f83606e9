//! Core simulation for a spinning-reel reward widget: a strip of slots
//! scrolls past a center reference, each slot carrying a reward drawn from
//! a weighted pool, until braking brings the strip to rest and the slot
//! nearest the center wins.
//!
//! The crate owns no rendering or UI. Collaborators feed in `spin`/`brake`
//! commands and per-tick deltas, and read back slot positions plus the
//! emitted control-gating and winner events.

use validator::Validate;

mod config;
mod controller;
mod easing;
mod error;
mod reward;
mod ring;
mod winner;

pub use config::{SpinnerConfig, DEFAULT_WEIGHTS, MAX_POOL_SIZE};
pub use controller::{SpeedUpdate, SpinController, SpinState, SpinnerEvent};
pub use error::SpinnerError;
pub use reward::{build_reward_pool, DrawStrategy, RewardDrawer, RewardType};
pub use ring::{RingGeometry, Slot, SlotRing};
pub use winner::{resolve_winner, WinnerResult};

/// The assembled widget core: pool, drawer, ring, and state machine behind
/// a single tick-driven surface. An external scheduler calls `tick` once
/// per frame; everything mutates synchronously inside that call.
pub struct Spinner {
    drawer: RewardDrawer,
    ring: SlotRing,
    controller: SpinController,
}

impl Spinner {
    /// Builds the widget from validated configuration. A bad config fails
    /// fast here; nothing about it is recoverable at runtime.
    pub fn new(config: &SpinnerConfig) -> Result<Self, SpinnerError> {
        Self::build(config, |pool| RewardDrawer::new(pool, config.draw_strategy))
    }

    /// Seeded variant for reproducible runs.
    pub fn with_seed(config: &SpinnerConfig, seed: u64) -> Result<Self, SpinnerError> {
        Self::build(config, |pool| {
            RewardDrawer::with_seed(pool, config.draw_strategy, seed)
        })
    }

    fn build(
        config: &SpinnerConfig,
        make_drawer: impl FnOnce(Vec<RewardType>) -> RewardDrawer,
    ) -> Result<Self, SpinnerError> {
        config.validate()?;
        let pool = build_reward_pool(config.pool_size, &config.weights);
        if pool.is_empty() {
            return Err(SpinnerError::EmptyRewardPool);
        }
        let mut drawer = make_drawer(pool);
        let geometry =
            RingGeometry::from_viewport(config.viewport_width, config.viewport_height);
        let ring = SlotRing::new(geometry, &mut drawer);
        let controller = SpinController::new(config);
        Ok(Self { drawer, ring, controller })
    }

    /// Requests a spin; a no-op outside `Idle`.
    pub fn spin(&mut self) -> bool {
        self.controller.spin()
    }

    /// Requests braking; a no-op outside `Spinning`.
    pub fn brake(&mut self) -> bool {
        self.controller.brake()
    }

    /// One fixed step of the simulation: the controller produces this
    /// tick's speed, the ring scrolls by it, and a completed brake
    /// resolves the winner against the settled positions. Idle ticks do
    /// not touch the ring.
    pub fn tick(&mut self, delta: f32) {
        if self.controller.state() == SpinState::Idle {
            return;
        }
        let update = self.controller.tick(delta);
        self.ring.advance(update.speed, delta, &mut self.drawer);
        if update.came_to_rest {
            let result = winner::resolve_winner(self.ring.slots());
            self.controller.complete_stop(result);
        }
    }

    pub fn state(&self) -> SpinState {
        self.controller.state()
    }

    pub fn current_speed(&self) -> f32 {
        self.controller.current_speed()
    }

    /// Current slot positions and reward assignments, for rendering.
    pub fn slots(&self) -> &[Slot] {
        self.ring.slots()
    }

    pub fn geometry(&self) -> RingGeometry {
        self.ring.geometry()
    }

    pub fn last_winner(&self) -> Option<WinnerResult> {
        self.controller.last_winner()
    }

    /// Drains pending control-gating and winner events.
    pub fn take_events(&mut self) -> Vec<SpinnerEvent> {
        self.controller.take_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SpinnerConfig {
        SpinnerConfig {
            // 40x40 viewport: slot width 10, 9 slots, death position -50.
            viewport_width: 40.0,
            viewport_height: 40.0,
            max_speed: 60.0,
            ..SpinnerConfig::default()
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SpinnerConfig { pool_size: 0, ..SpinnerConfig::default() };
        assert!(matches!(
            Spinner::new(&config),
            Err(SpinnerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_pool_that_floors_to_nothing() {
        let mut config = SpinnerConfig::default();
        config.pool_size = 10;
        for weight in config.weights.values_mut() {
            *weight = 0.01;
        }
        assert!(matches!(
            Spinner::new(&config),
            Err(SpinnerError::EmptyRewardPool)
        ));
    }

    #[test]
    fn test_idle_ticks_leave_the_ring_alone() {
        let mut spinner = Spinner::with_seed(&small_config(), 3).unwrap();
        let before: Vec<Slot> = spinner.slots().to_vec();
        for _ in 0..5 {
            spinner.tick(1.0 / 60.0);
        }
        assert_eq!(spinner.slots(), &before[..]);
        assert_eq!(spinner.state(), SpinState::Idle);
    }

    #[test]
    fn test_full_spin_cycle_resolves_winner() {
        let config = small_config();
        let mut spinner = Spinner::with_seed(&config, 7).unwrap();
        let geometry = spinner.geometry();
        assert_eq!(geometry.slot_count, 9);
        assert_eq!(geometry.slot_width, 10.0);

        assert!(spinner.spin());
        let delta = 1.0 / 60.0;
        let mut events = spinner.take_events();

        let mut ticks = 0;
        while spinner.state() != SpinState::Spinning {
            spinner.tick(delta);
            events.extend(spinner.take_events());
            ticks += 1;
            assert!(ticks < 200, "ramp-up never completed");
        }
        for _ in 0..30 {
            spinner.tick(delta);
        }

        assert!(spinner.brake());
        let mut ticks = 0;
        while spinner.state() != SpinState::Idle {
            spinner.tick(delta);
            events.extend(spinner.take_events());
            ticks += 1;
            assert!(ticks < 1000, "braking never settled");
        }

        assert_eq!(spinner.current_speed(), 0.0);
        let winner = spinner.last_winner().expect("a stop resolves a winner");

        // The winner matches the min-|x| rule on the settled snapshot,
        // with ties going to the lower index.
        let mut closest = spinner.slots()[0];
        for &slot in &spinner.slots()[1..] {
            if slot.x.abs() < closest.x.abs() {
                closest = slot;
            }
        }
        assert_eq!(winner.slot_index, closest.index);
        assert_eq!(winner.reward, closest.reward);

        assert!(events
            .iter()
            .any(|event| matches!(event, SpinnerEvent::Winner(_))));
        // Disable on spin, enable on hold, disable on brake, enable on stop.
        let gates: Vec<&SpinnerEvent> = events
            .iter()
            .filter(|event| !matches!(event, SpinnerEvent::Winner(_)))
            .collect();
        assert_eq!(
            gates,
            vec![
                &SpinnerEvent::ControlsDisabled,
                &SpinnerEvent::ControlsEnabled,
                &SpinnerEvent::ControlsDisabled,
                &SpinnerEvent::ControlsEnabled,
            ]
        );

        // The widget is reusable: a second spin starts cleanly.
        assert!(spinner.spin());
    }

    #[test]
    fn test_ring_size_is_stable_across_a_long_spin() {
        let mut spinner = Spinner::with_seed(&small_config(), 11).unwrap();
        spinner.spin();
        let count = spinner.slots().len();
        for _ in 0..2000 {
            spinner.tick(1.0 / 60.0);
            assert_eq!(spinner.slots().len(), count);
        }
    }
}
