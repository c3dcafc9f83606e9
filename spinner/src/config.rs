use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};
use validator::{Validate, ValidationError};

use crate::reward::{DrawStrategy, RewardType};

/// Hard cap on the reward pool. Draws reshuffle the pool in place, so it
/// must stay small for the per-draw cost to be negligible.
pub const MAX_POOL_SIZE: usize = 200;

/// Default draw odds across the six reward tiers.
pub static DEFAULT_WEIGHTS: Lazy<HashMap<RewardType, f64>> = Lazy::new(|| {
    HashMap::from([
        (RewardType::Coins100, 0.58),
        (RewardType::Coins200, 0.22),
        (RewardType::Coins500, 0.10),
        (RewardType::Item01, 0.05),
        (RewardType::Item02, 0.04),
        (RewardType::Item03, 0.01),
    ])
});

/// Widget configuration, validated once at startup. Everything here is
/// fixed for the lifetime of the widget.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct SpinnerConfig {
    /// Number of tokens the reward pool is built from.
    #[validate(custom = "validate_pool_size")]
    pub pool_size: usize,
    /// Draw probability per reward type, each in [0, 1]. Weights summing
    /// under 1 shorten the pool; summing over 1 skews the distribution.
    /// Neither is rejected.
    #[validate(custom = "validate_weights")]
    pub weights: HashMap<RewardType, f64>,
    pub draw_strategy: DrawStrategy,
    /// Peak scroll speed, viewport units per second.
    #[validate(custom = "validate_positive")]
    pub max_speed: f32,
    /// Ramp-up duration in seconds.
    #[validate(custom = "validate_positive")]
    pub ramp_up_secs: f32,
    /// Nominal braking duration in seconds. Braking usually ends earlier,
    /// as soon as speed falls to `brake_threshold`.
    #[validate(custom = "validate_positive")]
    pub brake_secs: f32,
    /// Speed at or below which motion is imperceptible and the ring is
    /// declared stopped.
    #[validate(custom = "validate_positive")]
    pub brake_threshold: f32,
    /// Viewport size, read once to derive the ring geometry.
    #[validate(custom = "validate_positive")]
    pub viewport_width: f32,
    #[validate(custom = "validate_positive")]
    pub viewport_height: f32,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            pool_size: 100,
            weights: DEFAULT_WEIGHTS.clone(),
            draw_strategy: DrawStrategy::default(),
            max_speed: 800.0,
            ramp_up_secs: 1.5,
            brake_secs: 8.0,
            brake_threshold: 5.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
        }
    }
}

fn validate_pool_size(pool_size: usize) -> Result<(), ValidationError> {
    if pool_size == 0 || pool_size > MAX_POOL_SIZE {
        return Err(ValidationError::new("pool_size_out_of_range"));
    }
    Ok(())
}

fn validate_weights(weights: &HashMap<RewardType, f64>) -> Result<(), ValidationError> {
    for weight in weights.values() {
        if !weight.is_finite() || *weight < 0.0 || *weight > 1.0 {
            return Err(ValidationError::new("weight_out_of_range"));
        }
    }
    if !weights.values().any(|w| *w > 0.0) {
        return Err(ValidationError::new("no_positive_weight"));
    }
    Ok(())
}

fn validate_positive(value: f32) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new("not_positive"));
    }
    Ok(())
}
