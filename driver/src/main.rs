use std::env;

use spinner::{SpinState, Spinner, SpinnerConfig, SpinnerEvent};
use tracing::info;

mod logging;

const TICK_RATE: f32 = 60.0;

fn env_f32(key: &str, default: f32) -> f32 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::setup();

    let config = SpinnerConfig {
        viewport_width: env_f32("SPINNER_VIEWPORT_WIDTH", 1280.0),
        viewport_height: env_f32("SPINNER_VIEWPORT_HEIGHT", 720.0),
        ..SpinnerConfig::default()
    };
    let hold_secs = env_f32("SPINNER_HOLD_SECS", 2.0);

    let mut widget = match env::var("SPINNER_SEED").ok().and_then(|v| v.parse().ok()) {
        Some(seed) => Spinner::with_seed(&config, seed)?,
        None => Spinner::new(&config)?,
    };

    let geometry = widget.geometry();
    info!(
        "ring ready: {} slots, slot width {:.1}, death position {:.1}",
        geometry.slot_count, geometry.slot_width, geometry.death_x
    );

    let delta = 1.0 / TICK_RATE;
    widget.spin();

    // Ramp up into the hold phase.
    while widget.state() != SpinState::Spinning {
        widget.tick(delta);
        report(widget.take_events());
    }

    // Let it spin for a bit before pulling the brake.
    for _ in 0..(hold_secs * TICK_RATE) as usize {
        widget.tick(delta);
    }

    widget.brake();
    while widget.state() != SpinState::Idle {
        widget.tick(delta);
        report(widget.take_events());
    }

    println!("{}", serde_json::to_string_pretty(widget.slots())?);
    Ok(())
}

fn report(events: Vec<SpinnerEvent>) {
    for event in events {
        match event {
            SpinnerEvent::ControlsDisabled => info!("controls locked"),
            SpinnerEvent::ControlsEnabled => info!("controls unlocked"),
            SpinnerEvent::Winner(result) => info!(
                "spin finished: slot {} pays out {}",
                result.slot_index,
                result.reward.description()
            ),
        }
    }
}
