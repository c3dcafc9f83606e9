use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::config::SpinnerConfig;
use crate::easing::{ease_in_back, ease_out_quart};
use crate::winner::WinnerResult;

/// Spin lifecycle. `Stopped` is momentary: the winner is resolved and the
/// controller returns to `Idle` within the same tick.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    Idle,
    RampingUp,
    Spinning,
    Braking,
    Stopped,
}

/// Signals for outside collaborators: control-surface gating at state
/// boundaries, and the resolved winner on stop.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum SpinnerEvent {
    ControlsDisabled,
    ControlsEnabled,
    Winner(WinnerResult),
}

/// Outcome of one controller tick: the speed the ring scrolls at this
/// frame, and whether the ring just came to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedUpdate {
    pub speed: f32,
    pub came_to_rest: bool,
}

/// Drives scroll speed through the ramp-up, hold, and brake phases. Sole
/// writer of the current speed; the ring consumes it read-only each tick.
#[derive(Debug, Clone)]
pub struct SpinController {
    state: SpinState,
    current_speed: f32,
    /// Elapsed time inside the active interpolation phase.
    elapsed: f32,
    /// Speed captured when braking began; the ease-out runs from there.
    brake_from: f32,
    max_speed: f32,
    ramp_up_secs: f32,
    brake_secs: f32,
    brake_threshold: f32,
    last_winner: Option<WinnerResult>,
    events: Vec<SpinnerEvent>,
}

impl SpinController {
    pub fn new(config: &SpinnerConfig) -> Self {
        Self {
            state: SpinState::Idle,
            current_speed: 0.0,
            elapsed: 0.0,
            brake_from: 0.0,
            max_speed: config.max_speed,
            ramp_up_secs: config.ramp_up_secs,
            brake_secs: config.brake_secs,
            brake_threshold: config.brake_threshold,
            last_winner: None,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn last_winner(&self) -> Option<WinnerResult> {
        self.last_winner
    }

    /// Starts a spin. Accepted only from `Idle`; anywhere else the command
    /// is absorbed as a no-op, so double-clicks are harmless.
    pub fn spin(&mut self) -> bool {
        if self.state != SpinState::Idle {
            return false;
        }
        self.state = SpinState::RampingUp;
        self.elapsed = 0.0;
        self.last_winner = None;
        self.events.push(SpinnerEvent::ControlsDisabled);
        debug!("spin accepted, ramping up over {}s", self.ramp_up_secs);
        true
    }

    /// Starts braking. Accepted only from `Spinning`: the ramp-up
    /// animation cannot be interrupted, and repeated presses are no-ops.
    pub fn brake(&mut self) -> bool {
        if self.state != SpinState::Spinning {
            return false;
        }
        self.state = SpinState::Braking;
        self.elapsed = 0.0;
        self.brake_from = self.current_speed;
        self.events.push(SpinnerEvent::ControlsDisabled);
        debug!("brake accepted, easing out from speed {:.1}", self.brake_from);
        true
    }

    /// Advances the active interpolation by `delta` seconds and returns
    /// the speed for this tick. Braking completes when the speed first
    /// falls to the brake threshold, not when the nominal curve duration
    /// runs out.
    pub fn tick(&mut self, delta: f32) -> SpeedUpdate {
        match self.state {
            SpinState::Idle | SpinState::Stopped => {
                SpeedUpdate { speed: 0.0, came_to_rest: false }
            }
            SpinState::RampingUp => {
                self.elapsed += delta;
                let t = (self.elapsed / self.ramp_up_secs).min(1.0);
                self.current_speed = self.max_speed * ease_in_back(t);
                if self.elapsed >= self.ramp_up_secs {
                    self.current_speed = self.max_speed;
                    self.state = SpinState::Spinning;
                    self.events.push(SpinnerEvent::ControlsEnabled);
                    debug!("ramp-up complete, holding at {:.1}", self.max_speed);
                }
                SpeedUpdate { speed: self.current_speed, came_to_rest: false }
            }
            SpinState::Spinning => {
                SpeedUpdate { speed: self.current_speed, came_to_rest: false }
            }
            SpinState::Braking => {
                self.elapsed += delta;
                let t = (self.elapsed / self.brake_secs).min(1.0);
                self.current_speed = self.brake_from * (1.0 - ease_out_quart(t));
                if self.current_speed <= self.brake_threshold {
                    // The ring still scrolls this last imperceptible step;
                    // the winner is resolved right after it.
                    let final_speed = self.current_speed;
                    self.current_speed = 0.0;
                    self.state = SpinState::Stopped;
                    return SpeedUpdate { speed: final_speed, came_to_rest: true };
                }
                SpeedUpdate { speed: self.current_speed, came_to_rest: false }
            }
        }
    }

    /// Completes the momentary stopped phase: records the winner and
    /// returns to `Idle`, emitting the stop-cycle events.
    pub fn complete_stop(&mut self, result: WinnerResult) {
        debug_assert!(
            self.state == SpinState::Stopped,
            "winner resolution requires a stationary ring"
        );
        info!(
            "🎰 winner: slot {} pays out {}",
            result.slot_index,
            result.reward.description()
        );
        self.last_winner = Some(result);
        self.state = SpinState::Idle;
        self.events.push(SpinnerEvent::Winner(result));
        self.events.push(SpinnerEvent::ControlsEnabled);
    }

    /// Drains pending events for outside collaborators.
    pub fn take_events(&mut self) -> Vec<SpinnerEvent> {
        std::mem::take(&mut self.events)
    }
}
